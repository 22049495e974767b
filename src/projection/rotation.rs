// src/projection/rotation.rs

use super::Point3D;
use nalgebra::{Matrix3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

/// Camera rotation in degrees, applied X -> Y -> Z.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewAngle {
  /// Position in a generated sequence (0 for hand-built angles).
  pub id: usize,
  pub rotation_x: f64,
  pub rotation_y: f64,
  pub rotation_z: f64,
}

impl ViewAngle {
  pub fn new(rotation_x: f64, rotation_y: f64, rotation_z: f64) -> Self {
    Self {
      id: 0,
      rotation_x,
      rotation_y,
      rotation_z,
    }
  }

  /// Composed matrix `Rz * Ry * Rx`, equivalent to [`rotate_point`].
  ///
  /// Useful when the same angle is applied to many vectors at once.
  pub fn rotation_matrix(&self) -> Matrix3<f64> {
    let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), self.rotation_x.to_radians());
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), self.rotation_y.to_radians());
    let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), self.rotation_z.to_radians());
    (rz * ry * rx).into_inner()
  }
}

/// Rotates a point about X, then Y, then Z (right-handed).
pub fn rotate_point(p: Point3D, angle: &ViewAngle) -> Point3D {
  let (sin_x, cos_x) = angle.rotation_x.to_radians().sin_cos();
  let (sin_y, cos_y) = angle.rotation_y.to_radians().sin_cos();
  let (sin_z, cos_z) = angle.rotation_z.to_radians().sin_cos();

  // Rotate around X
  let y1 = p.y * cos_x - p.z * sin_x;
  let z1 = p.y * sin_x + p.z * cos_x;

  // Rotate around Y
  let x2 = p.x * cos_y + z1 * sin_y;
  let z2 = -p.x * sin_y + z1 * cos_y;

  // Rotate around Z
  let x3 = x2 * cos_z - y1 * sin_z;
  let y3 = x2 * sin_z + y1 * cos_z;

  Point3D::new(x3, y3, z2)
}
