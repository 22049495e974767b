// src/rendering/scene.rs

use crate::config::Config;
use crate::model::{BondType, Compound};
use crate::projection::{calculate_depth, ProjectedPoint, Projector, ViewAngle};
use crate::utils::linalg;
use log::debug;
use std::collections::HashMap;

// Used by painter.rs for drawing and by tests for inspecting frames.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderAtom {
  pub screen_pos: [f64; 3], // x, y, z (depth)
  pub atom_id: u32,
  pub symbol: String,
  pub label: Option<String>,
  pub color: (f64, f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderBond {
  pub start: [f64; 2],
  pub end: [f64; 2],
  pub bond_type: BondType,
}

/// One fully projected view: bonds first, then atoms far-to-near.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
  pub view: ViewAngle,
  pub width: f64,
  pub height: f64,
  pub zoom: f64,
  pub atom_radius: f64,
  pub font_size: f64,
  pub bonds: Vec<RenderBond>,
  pub atoms: Vec<RenderAtom>,
}

/// Projects `compound` around the canvas centre for one view angle.
///
/// The compound is centred on its centroid first, so rotation happens about
/// the middle of the molecule rather than the source coordinate origin.
pub fn calculate_scene(
  compound: &Compound,
  view: &ViewAngle,
  width: f64,
  height: f64,
  config: &Config,
) -> Frame {
  let zoom = config.visualization.zoom_level;
  let projector = Projector::new(config.projection.scale_constant);
  let center = (width / 2.0, height / 2.0);
  let centered = compound.centered();

  // 1. Depth-sort atoms (Painter's Algorithm)
  let sorted = calculate_depth(&centered.atoms, view);

  let mut positions: HashMap<u32, ProjectedPoint> = HashMap::with_capacity(sorted.len());
  let atoms: Vec<RenderAtom> = sorted
    .into_iter()
    .map(|s| {
      let p = projector.project_rotated(s.rotated, center, zoom);
      positions.insert(s.item.id, p);
      let label = config
        .visualization
        .show_labels
        .then(|| s.item.label(config.visualization.label_type));
      RenderAtom {
        screen_pos: [p.x, p.y, p.depth],
        atom_id: s.item.id,
        color: config.style.color_for(&s.item.symbol),
        symbol: s.item.symbol,
        label,
      }
    })
    .collect();

  // 2. Bonds between projected endpoints
  let bonds: Vec<RenderBond> = centered
    .bonds
    .iter()
    .filter_map(|b| {
      let p1 = positions.get(&b.atom1)?;
      let p2 = positions.get(&b.atom2)?;
      Some(RenderBond {
        start: [p1.x, p1.y],
        end: [p2.x, p2.y],
        bond_type: b.bond_type,
      })
    })
    .collect();

  debug!(
    "Scene for view {} ({:.1}, {:.1}, {:.1}): {} atoms, {} bonds",
    view.id,
    view.rotation_x,
    view.rotation_y,
    view.rotation_z,
    atoms.len(),
    bonds.len()
  );

  Frame {
    view: *view,
    width,
    height,
    zoom,
    atom_radius: config.style.atom_radius * zoom,
    font_size: config.style.label_font_size * zoom,
    bonds,
    atoms,
  }
}

/// Zoom level that keeps every atom inside the canvas for all view angles.
pub fn fit_zoom(compound: &Compound, width: f64, height: f64, config: &Config) -> f64 {
  let radius = linalg::bounding_radius(
    compound.atoms.iter().map(|a| a.position),
    compound.centroid(),
  );
  let extent = radius * config.projection.scale_constant + config.style.atom_radius;
  if extent <= 0.0 {
    return 1.0;
  }
  let margin = 0.9;
  (width.min(height) / 2.0) * margin / extent
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::{Atom, Bond};
  use crate::projection::Point3D;

  fn co2() -> Compound {
    Compound::new(
      "280",
      "Carbon dioxide",
      "",
      vec![
        Atom::new(1, 8, Point3D::new(-1.16, 0.0, 0.0)),
        Atom::new(2, 6, Point3D::new(0.0, 0.0, 0.0)),
        Atom::new(3, 8, Point3D::new(1.16, 0.0, 0.0)),
      ],
      vec![
        Bond { atom1: 1, atom2: 2, bond_type: BondType::Double },
        Bond { atom1: 2, atom2: 3, bond_type: BondType::Double },
      ],
    )
    .unwrap()
  }

  #[test]
  fn test_front_view_layout() {
    let config = Config::default();
    let frame = calculate_scene(&co2(), &ViewAngle::new(0.0, 0.0, 0.0), 500.0, 500.0, &config);

    assert_eq!(frame.atoms.len(), 3);
    assert_eq!(frame.bonds.len(), 2);
    let carbon = frame.atoms.iter().find(|a| a.atom_id == 2).unwrap();
    assert!((carbon.screen_pos[0] - 250.0).abs() < 1e-10);
    let right = frame.atoms.iter().find(|a| a.atom_id == 3).unwrap();
    assert!((right.screen_pos[0] - (250.0 + 1.16 * 50.0)).abs() < 1e-10);
    assert_eq!(right.label.as_deref(), Some("O"));
  }

  #[test]
  fn test_atoms_are_back_to_front() {
    let config = Config::default();
    let frame = calculate_scene(&co2(), &ViewAngle::new(15.0, 90.0, 0.0), 400.0, 300.0, &config);
    for pair in frame.atoms.windows(2) {
      assert!(pair[0].screen_pos[2] <= pair[1].screen_pos[2]);
    }
    // Turned 90 degrees about Y, atom 3 (+x) faces away from the viewer
    assert_eq!(frame.atoms[0].atom_id, 3);
  }

  #[test]
  fn test_labels_follow_settings() {
    let mut config = Config::default();
    config.visualization.show_labels = false;
    let frame = calculate_scene(&co2(), &ViewAngle::default(), 100.0, 100.0, &config);
    assert!(frame.atoms.iter().all(|a| a.label.is_none()));

    config.visualization.show_labels = true;
    config.visualization.label_type = crate::config::LabelType::AtomicNumber;
    let frame = calculate_scene(&co2(), &ViewAngle::default(), 100.0, 100.0, &config);
    assert!(frame.atoms.iter().any(|a| a.label.as_deref() == Some("6")));
  }

  #[test]
  fn test_zoom_scales_sizes() {
    let mut config = Config::default();
    config.visualization.zoom_level = 2.0;
    let frame = calculate_scene(&co2(), &ViewAngle::default(), 100.0, 100.0, &config);
    assert_eq!(frame.atom_radius, 30.0);
    assert_eq!(frame.font_size, 20.0);
  }

  #[test]
  fn test_empty_compound() {
    let empty = Compound::new("0", "nothing", "", vec![], vec![]).unwrap();
    let frame = calculate_scene(&empty, &ViewAngle::default(), 100.0, 100.0, &Config::default());
    assert!(frame.atoms.is_empty());
    assert!(frame.bonds.is_empty());
  }

  #[test]
  fn test_fit_zoom_keeps_atoms_on_canvas() {
    let config = Config::default();
    let zoom = fit_zoom(&co2(), 200.0, 200.0, &config);
    let reach = (1.16 * 50.0 + 15.0) * zoom;
    assert!(reach <= 100.0);
    assert!(reach > 80.0);
  }
}
