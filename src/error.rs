// src/error.rs

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MolviewError {
  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("invalid JSON: {0}")]
  Json(#[from] serde_json::Error),

  #[error("parse error: {0}")]
  Parse(String),

  #[error("3D structure not available for compound {0}")]
  MissingConformer(String),

  #[error("invalid compound: {0}")]
  Validation(String),

  #[error("render error: {0}")]
  Render(#[from] cairo::Error),

  #[error("failed to write PNG: {0}")]
  Png(#[from] cairo::IoError),

  #[error("unsupported file format: {0}")]
  UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, MolviewError>;
