// src/rendering/animation.rs

use crate::config::Config;
use crate::projection::{generate_view_angles_with_tilt, ViewAngle};

/// Steps through a fixed set of view angles, one every `dwell` seconds.
///
/// The caller owns the clock: feed elapsed time to [`ViewCycle::tick`] once
/// per frame and redraw with [`ViewCycle::current`].
#[derive(Debug, Clone)]
pub struct ViewCycle {
  views: Vec<ViewAngle>,
  index: usize,
  dwell: f64,
  elapsed: f64,
  rotating: bool,
}

impl ViewCycle {
  pub fn new(views: Vec<ViewAngle>, dwell: f64) -> Self {
    Self {
      views,
      index: 0,
      dwell,
      elapsed: 0.0,
      rotating: true,
    }
  }

  pub fn from_config(config: &Config) -> Self {
    Self::new(
      generate_view_angles_with_tilt(
        config.projection.total_view_angles,
        config.projection.tilt_degrees,
      ),
      config.visualization.rotation_speed,
    )
  }

  pub fn current(&self) -> Option<&ViewAngle> {
    self.views.get(self.index)
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn len(&self) -> usize {
    self.views.len()
  }

  pub fn is_empty(&self) -> bool {
    self.views.is_empty()
  }

  /// Moves to the next view, wrapping at the end.
  pub fn advance(&mut self) {
    if !self.views.is_empty() {
      self.index = (self.index + 1) % self.views.len();
    }
  }

  /// Jumps to `index` modulo the number of views.
  pub fn seek(&mut self, index: usize) {
    if !self.views.is_empty() {
      self.index = index % self.views.len();
      self.elapsed = 0.0;
    }
  }

  /// Adds `dt` seconds and advances one view per full dwell period that has
  /// passed, carrying the remainder. A long stall catches up on every missed
  /// step. Returns how many views were stepped.
  pub fn tick(&mut self, dt: f64) -> usize {
    if !self.rotating || self.views.is_empty() {
      return 0;
    }
    self.elapsed += dt;
    if !self.elapsed.is_finite() {
      self.elapsed = 0.0;
      return 0;
    }
    if self.elapsed <= self.dwell {
      return 0;
    }
    // Non-positive dwell: one step per tick
    if self.dwell <= 0.0 {
      self.elapsed = 0.0;
      self.advance();
      return 1;
    }

    let steps = (self.elapsed / self.dwell).floor();
    self.elapsed -= steps * self.dwell;
    let steps = steps as usize;
    self.index = (self.index + steps % self.views.len()) % self.views.len();
    steps
  }

  pub fn is_rotating(&self) -> bool {
    self.rotating
  }

  pub fn set_rotating(&mut self, rotating: bool) {
    self.rotating = rotating;
    if !rotating {
      self.elapsed = 0.0;
    }
  }
}
