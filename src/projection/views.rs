// src/projection/views.rs

use super::ViewAngle;

/// X tilt applied to every generated view so depth stays visible.
pub const DEFAULT_TILT: f64 = 15.0;

/// `total` evenly spaced turns about Y with the default tilt.
///
/// Index `i` always maps to `i * 360 / total` degrees, so callers can animate
/// by stepping an index modulo `total`.
pub fn generate_view_angles(total: usize) -> Vec<ViewAngle> {
  generate_view_angles_with_tilt(total, DEFAULT_TILT)
}

pub fn generate_view_angles_with_tilt(total: usize, tilt: f64) -> Vec<ViewAngle> {
  (0..total)
    .map(|i| ViewAngle {
      id: i,
      rotation_x: tilt,
      rotation_y: (i as f64 * 360.0) / total as f64,
      rotation_z: 0.0,
    })
    .collect()
}
