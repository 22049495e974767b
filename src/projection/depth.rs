// src/projection/depth.rs

use super::{rotate_point, Point3D, ViewAngle};

/// Anything with a molecule-space position.
pub trait Positioned {
  fn position(&self) -> Point3D;
}

impl Positioned for Point3D {
  fn position(&self) -> Point3D {
    *self
  }
}

/// An item paired with its camera-space position for one view angle.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthSorted<T> {
  pub item: T,
  pub rotated: Point3D,
  pub depth: f64,
}

/// Rotates every item and orders the result back to front (z ascending).
///
/// Painter's algorithm only: there is no visibility culling and ties keep no
/// particular order. Depths are compared with `f64::total_cmp`, so a NaN
/// depth never panics and lands at one end of the order (after every finite
/// depth when its sign bit is clear).
pub fn calculate_depth<T: Positioned + Clone>(items: &[T], angle: &ViewAngle) -> Vec<DepthSorted<T>> {
  let mut sorted: Vec<DepthSorted<T>> = items
    .iter()
    .map(|item| {
      let rotated = rotate_point(item.position(), angle);
      DepthSorted {
        item: item.clone(),
        rotated,
        depth: rotated.z,
      }
    })
    .collect();

  sorted.sort_unstable_by(|a, b| a.depth.total_cmp(&b.depth));
  sorted
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_three_point_example() {
    let points = [
      Point3D::new(0.0, 0.0, 0.0),
      Point3D::new(1.0, 0.0, 0.0),
      Point3D::new(0.0, 0.0, -1.0),
    ];
    let sorted = calculate_depth(&points, &ViewAngle::new(15.0, 0.0, 0.0));

    // (0,0,-1) tilts to z = -cos(15deg), the only negative depth
    assert_eq!(sorted[0].item, Point3D::new(0.0, 0.0, -1.0));
    assert!((sorted[0].depth + 15f64.to_radians().cos()).abs() < 1e-10);
    assert!(sorted[1].depth.abs() < 1e-10);
    assert!(sorted[2].depth.abs() < 1e-10);
  }

  #[test]
  fn test_result_is_permutation_in_depth_order() {
    let points: Vec<Point3D> = (0..25)
      .map(|i| {
        let t = i as f64;
        Point3D::new((t * 0.7).sin() * 3.0, (t * 1.3).cos(), (t * 0.37).sin() * 5.0)
      })
      .collect();
    let sorted = calculate_depth(&points, &ViewAngle::new(15.0, 75.0, 10.0));

    assert_eq!(sorted.len(), points.len());
    for pair in sorted.windows(2) {
      assert!(pair[0].depth <= pair[1].depth);
    }
    for p in &points {
      let in_input = points.iter().filter(|q| *q == p).count();
      let in_output = sorted.iter().filter(|s| s.item == *p).count();
      assert_eq!(in_input, in_output);
    }
  }

  #[test]
  fn test_depth_matches_rotation() {
    let angle = ViewAngle::new(15.0, 120.0, 0.0);
    let p = Point3D::new(2.0, -1.0, 0.5);
    let sorted = calculate_depth(&[p], &angle);
    let rotated = rotate_point(p, &angle);
    assert_eq!(sorted[0].rotated, rotated);
    assert_eq!(sorted[0].depth, rotated.z);
  }

  #[test]
  fn test_empty_input() {
    let sorted = calculate_depth::<Point3D>(&[], &ViewAngle::new(15.0, 0.0, 0.0));
    assert!(sorted.is_empty());
  }

  #[test]
  fn test_nan_depths_group_at_one_end() {
    let points: Vec<Point3D> = (0..40)
      .map(|i| {
        let z = if i % 3 == 1 { f64::NAN } else { ((i * 17) % 23) as f64 - 11.0 };
        Point3D::new(0.0, 0.0, z)
      })
      .collect();
    let sorted = calculate_depth(&points, &ViewAngle::default());
    assert_eq!(sorted.len(), 40);

    let n_nan = points.iter().filter(|p| p.z.is_nan()).count();
    let finite: Vec<f64> = sorted.iter().map(|s| s.depth).filter(|d| !d.is_nan()).collect();
    assert_eq!(finite.len(), 40 - n_nan);
    for pair in finite.windows(2) {
      assert!(pair[0] <= pair[1]);
    }

    let leading = sorted.iter().take_while(|s| s.depth.is_nan()).count();
    let trailing = sorted.iter().rev().take_while(|s| s.depth.is_nan()).count();
    assert_eq!(leading + trailing, n_nan);
  }
}
