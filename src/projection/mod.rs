// src/projection/mod.rs

//! Molecule projector.
//!
//! Rotates molecule-space coordinates into camera space and flattens them
//! onto the screen with an orthographic projection. Every function here is a
//! pure transform: nothing is cached and nothing is mutated in place.

mod depth;
mod rotation;
mod views;

pub use depth::{calculate_depth, DepthSorted, Positioned};
pub use rotation::{rotate_point, ViewAngle};
pub use views::{generate_view_angles, generate_view_angles_with_tilt, DEFAULT_TILT};

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Pixels per molecule-space unit at zoom 1.0.
pub const DEFAULT_SCALE_CONSTANT: f64 = 50.0;

/// A position in molecule space (arbitrary units, Angstroms for PubChem data).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

impl Point3D {
  pub const ORIGIN: Point3D = Point3D { x: 0.0, y: 0.0, z: 0.0 };

  pub const fn new(x: f64, y: f64, z: f64) -> Self {
    Self { x, y, z }
  }

  pub fn to_vector(self) -> Vector3<f64> {
    Vector3::new(self.x, self.y, self.z)
  }

  /// Component-wise difference `self - other`.
  pub fn offset_by(self, other: Point3D) -> Point3D {
    Point3D::new(self.x - other.x, self.y - other.y, self.z - other.z)
  }
}

impl From<[f64; 3]> for Point3D {
  fn from(p: [f64; 3]) -> Self {
    Point3D::new(p[0], p[1], p[2])
  }
}

impl From<Point3D> for [f64; 3] {
  fn from(p: Point3D) -> Self {
    [p.x, p.y, p.z]
  }
}

impl From<Vector3<f64>> for Point3D {
  fn from(v: Vector3<f64>) -> Self {
    Point3D::new(v.x, v.y, v.z)
  }
}

/// Screen-space position plus the rotated z used for draw ordering.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProjectedPoint {
  pub x: f64,
  pub y: f64,
  /// Post-rotation z. Never drawn, only compared.
  pub depth: f64,
}

/// Orthographic projector with a configurable pixels-per-unit constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
  pub scale_constant: f64,
}

impl Default for Projector {
  fn default() -> Self {
    Self {
      scale_constant: DEFAULT_SCALE_CONSTANT,
    }
  }
}

impl Projector {
  pub fn new(scale_constant: f64) -> Self {
    Self { scale_constant }
  }

  /// Rotates `point` by `angle`, then projects it around `center`.
  pub fn project(
    &self,
    point: Point3D,
    angle: &ViewAngle,
    center: (f64, f64),
    scale: f64,
  ) -> ProjectedPoint {
    self.project_rotated(rotate_point(point, angle), center, scale)
  }

  /// Projects a point that is already in camera space.
  /// z does not affect the screen position.
  pub fn project_rotated(&self, rotated: Point3D, center: (f64, f64), scale: f64) -> ProjectedPoint {
    let scale_factor = scale * self.scale_constant;
    ProjectedPoint {
      x: center.0 + rotated.x * scale_factor,
      y: center.1 + rotated.y * scale_factor,
      depth: rotated.z,
    }
  }
}

/// Projects with the default scale constant.
pub fn project_point(
  point: Point3D,
  angle: &ViewAngle,
  center: (f64, f64),
  scale: f64,
) -> ProjectedPoint {
  Projector::default().project(point, angle, center, scale)
}
