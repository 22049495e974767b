// src/utils/linalg.rs

use crate::projection::Point3D;
use nalgebra::Vector3;

/// Arithmetic mean of a point set, or the origin when the set is empty.
pub fn centroid(points: impl IntoIterator<Item = Point3D>) -> Point3D {
  let (sum, n) = points
    .into_iter()
    .fold((Vector3::<f64>::zeros(), 0usize), |(acc, n), p| (acc + p.to_vector(), n + 1));

  if n == 0 {
    Point3D::ORIGIN
  } else {
    (sum / n as f64).into()
  }
}

/// Largest distance from `center` to any point (0.0 for an empty set).
///
/// Rotation keeps this distance, so it bounds the projected extent for
/// every view angle.
pub fn bounding_radius(points: impl IntoIterator<Item = Point3D>, center: Point3D) -> f64 {
  let c = center.to_vector();
  points
    .into_iter()
    .map(|p| (p.to_vector() - c).norm())
    .fold(0.0, f64::max)
}
