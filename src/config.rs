// src/config.rs

use crate::projection::{DEFAULT_SCALE_CONSTANT, DEFAULT_TILT};
use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

// --- Enums ---

/// What to print on top of each atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LabelType {
  Symbol,
  Name,
  AtomicNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
  Png,
  Pdf,
  Svg,
}

impl ExportFormat {
  /// Picks the format from a file extension (case-insensitive).
  pub fn from_path(path: &Path) -> Option<Self> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
      "png" => Some(ExportFormat::Png),
      "pdf" => Some(ExportFormat::Pdf),
      "svg" => Some(ExportFormat::Svg),
      _ => None,
    }
  }

  pub fn extension(self) -> &'static str {
    match self {
      ExportFormat::Png => "png",
      ExportFormat::Pdf => "pdf",
      ExportFormat::Svg => "svg",
    }
  }
}

// --- Sections ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
  /// Pixels per molecule unit at zoom 1.0.
  pub scale_constant: f64,
  /// X tilt of generated views, degrees.
  pub tilt_degrees: f64,
  pub total_view_angles: usize,
}

impl Default for ProjectionSettings {
  fn default() -> Self {
    Self {
      scale_constant: DEFAULT_SCALE_CONSTANT,
      tilt_degrees: DEFAULT_TILT,
      total_view_angles: 12,
    }
  }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationSettings {
  pub show_labels: bool,
  pub label_type: LabelType,
  /// Seconds each view stays on screen while rotating.
  pub rotation_speed: f64,
  pub zoom_level: f64,
}

impl Default for VisualizationSettings {
  fn default() -> Self {
    Self {
      show_labels: true,
      label_type: LabelType::Symbol,
      rotation_speed: 3.0,
      zoom_level: 1.0,
    }
  }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
  /// Atom radius in pixels at zoom 1.0.
  pub atom_radius: f64,
  pub label_font_size: f64,
  pub bond_color: (f64, f64, f64),
  pub background_color: (f64, f64, f64),
  pub element_colors: HashMap<String, (f64, f64, f64)>,
}

impl Default for RenderStyle {
  fn default() -> Self {
    Self {
      atom_radius: 15.0,
      label_font_size: 10.0,
      bond_color: (0.267, 0.267, 0.267),
      background_color: (1.0, 1.0, 1.0),
      // Start empty. If missing, we use the CPK defaults.
      element_colors: HashMap::new(),
    }
  }
}

impl RenderStyle {
  pub fn color_for(&self, symbol: &str) -> (f64, f64, f64) {
    self
      .element_colors
      .get(symbol)
      .copied()
      .unwrap_or_else(|| crate::model::elements::color_for(symbol))
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
  #[serde(default)]
  pub projection: ProjectionSettings,
  #[serde(default)]
  pub visualization: VisualizationSettings,
  #[serde(default)]
  pub style: RenderStyle,
  #[serde(default = "default_export_format")]
  pub default_export_format: ExportFormat,
}

fn default_export_format() -> ExportFormat {
  ExportFormat::Png
}

impl Default for Config {
  fn default() -> Self {
    Self {
      projection: ProjectionSettings::default(),
      visualization: VisualizationSettings::default(),
      style: RenderStyle::default(),
      default_export_format: default_export_format(),
    }
  }
}

impl Config {
  /// Loads config from the standard OS location (e.g. ~/.config/molview/settings.json).
  /// Falls back to defaults when the file is missing or unreadable.
  pub fn load() -> Self {
    Self::load_from(&Self::get_path())
  }

  pub fn load_from(path: &Path) -> Self {
    if !path.exists() {
      info!("No config found at {:?}. Using defaults.", path);
      return Self::default();
    }

    match File::open(path) {
      Ok(file) => match serde_json::from_reader(BufReader::new(file)) {
        Ok(cfg) => {
          info!("Config loaded from {:?}", path);
          cfg
        }
        Err(e) => {
          warn!("Error parsing config {:?}: {}", path, e);
          Self::default()
        }
      },
      Err(e) => {
        warn!("Error opening config {:?}: {}", path, e);
        Self::default()
      }
    }
  }

  /// Saves config to the standard OS location.
  pub fn save(&self) -> crate::Result<PathBuf> {
    let path = Self::get_path();
    self.save_to(&path)?;
    Ok(path)
  }

  pub fn save_to(&self, path: &Path) -> crate::Result<()> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, self)?;
    info!("Config saved to {:?}", path);
    Ok(())
  }

  pub fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("org", "molview", "molview") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}
