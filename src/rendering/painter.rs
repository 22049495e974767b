// src/rendering/painter.rs
// Draws a projected Frame onto any cairo surface (screen, PNG, PDF, SVG).

use super::scene::{Frame, RenderAtom, RenderBond};
use crate::config::RenderStyle;
use crate::model::BondType;
use cairo::{Context, FontSlant, FontWeight, RadialGradient};
use std::f64::consts::PI;

// ============================================================================
// BOND STYLING
// ============================================================================

const SOLID: &[f64] = &[];
const DASHED: &[f64] = &[5.0, 3.0];

/// Stroke width and dash pattern for a bond type.
pub fn bond_stroke(bond_type: BondType) -> (f64, &'static [f64]) {
    match bond_type {
        BondType::Single => (2.0, SOLID),
        BondType::Double => (4.0, SOLID),
        BondType::Triple => (6.0, SOLID),
        BondType::Aromatic => (2.0, DASHED),
    }
}

// ============================================================================
// FRAME DRAWING
// ============================================================================

/// Paints background, then bonds, then atoms in the frame's depth order.
pub fn draw_frame(cr: &Context, frame: &Frame, style: &RenderStyle) -> Result<(), cairo::Error> {
    let (r, g, b) = style.background_color;
    cr.set_source_rgb(r, g, b);
    cr.paint()?;

    // Layer 0: bonds behind atoms
    for bond in &frame.bonds {
        draw_bond(cr, bond, style.bond_color)?;
    }

    // Layer 1: atoms, far to near
    for atom in &frame.atoms {
        draw_atom_vector(cr, atom.screen_pos[0], atom.screen_pos[1], frame.atom_radius, atom.color)?;
        if atom.label.is_some() {
            draw_label(cr, atom, frame.font_size)?;
        }
    }
    Ok(())
}

fn draw_bond(cr: &Context, bond: &RenderBond, color: (f64, f64, f64)) -> Result<(), cairo::Error> {
    let (width, dashes) = bond_stroke(bond.bond_type);
    cr.save()?;
    cr.set_source_rgb(color.0, color.1, color.2);
    cr.set_line_width(width);
    cr.set_dash(dashes, 0.0);
    cr.move_to(bond.start[0], bond.start[1]);
    cr.line_to(bond.end[0], bond.end[1]);
    cr.stroke()?;
    cr.restore()
}

/// Sphere-like disc: white highlight at the upper left fading into the
/// element colour, with a thin black outline.
pub fn draw_atom_vector(
    cr: &Context,
    x: f64,
    y: f64,
    radius: f64,
    color: (f64, f64, f64),
) -> Result<(), cairo::Error> {
    if radius <= 0.0 {
        return Ok(());
    }
    let (r, g, b) = color;

    let gradient = RadialGradient::new(
        x - radius * 0.4,
        y - radius * 0.4,
        0.0,
        x - radius * 0.4,
        y - radius * 0.4,
        radius * 1.4,
    );
    gradient.add_color_stop_rgb(0.0, 1.0, 1.0, 1.0);
    gradient.add_color_stop_rgb(1.0, r, g, b);

    cr.set_source(&gradient)?;
    cr.arc(x, y, radius, 0.0, 2.0 * PI);
    cr.fill()?;

    cr.set_source_rgb(0.0, 0.0, 0.0);
    cr.set_line_width(1.0);
    cr.arc(x, y, radius, 0.0, 2.0 * PI);
    cr.stroke()
}

fn draw_label(cr: &Context, atom: &RenderAtom, font_size: f64) -> Result<(), cairo::Error> {
    let Some(text) = atom.label.as_deref() else {
        return Ok(());
    };
    if font_size <= 0.0 || text.is_empty() {
        return Ok(());
    }

    cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Bold);
    cr.set_font_size(font_size);
    let extents = cr.text_extents(text)?;

    // Centre the ink box on the atom
    let tx = atom.screen_pos[0] - (extents.width() / 2.0 + extents.x_bearing());
    let ty = atom.screen_pos[1] - (extents.height() / 2.0 + extents.y_bearing());

    cr.set_source_rgb(0.0, 0.0, 0.0);
    cr.move_to(tx, ty);
    cr.show_text(text)
}
