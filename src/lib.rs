//! Rotating 2D projections of 3D compound structures.
//!
//! [`projection`] holds the pure geometry (rotation, orthographic
//! projection, view-angle generation, depth ordering). Everything else reads
//! compounds from disk and paints projected frames with cairo.

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod projection;
pub mod rendering;
pub mod utils;

pub use error::{MolviewError, Result};
