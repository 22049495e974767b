use super::{painter, scene};
use crate::config::{Config, ExportFormat};
use crate::error::{MolviewError, Result};
use crate::model::Compound;
use crate::projection::{generate_view_angles_with_tilt, ViewAngle};
use log::info;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Canvas size used when the caller has no preference.
pub const DEFAULT_CANVAS: (u32, u32) = (500, 500);

// --- Single Frame ---

/// Renders one view of `compound` and writes it as PNG, PDF or SVG.
pub fn export_view(
  compound: &Compound,
  view: &ViewAngle,
  config: &Config,
  size: (u32, u32),
  path: &Path,
  format: ExportFormat,
) -> Result<()> {
  let (w, h) = (size.0 as f64, size.1 as f64);
  let frame = scene::calculate_scene(compound, view, w, h, config);

  match format {
    ExportFormat::Png => export_png(&frame, config, path)?,
    ExportFormat::Pdf => export_pdf(&frame, config, path)?,
    ExportFormat::Svg => export_svg(&frame, config, path)?,
  }
  info!("Wrote {:?} ({}x{}, view {})", path, size.0, size.1, view.id);
  Ok(())
}

/// Resolves the output file and format.
///
/// A known extension picks the format. A path with no extension gets
/// `config.default_export_format` and its extension appended. Any other
/// extension is rejected.
pub fn resolve_output(path: &Path, config: &Config) -> Result<(PathBuf, ExportFormat)> {
  if path.extension().is_none() {
    let format = config.default_export_format;
    return Ok((path.with_extension(format.extension()), format));
  }
  let format = ExportFormat::from_path(path)
    .ok_or_else(|| MolviewError::UnsupportedFormat(path.display().to_string()))?;
  Ok((path.to_path_buf(), format))
}

/// Same as [`export_view`], picking the format with [`resolve_output`].
/// Returns the path actually written.
pub fn export_to_path(
  compound: &Compound,
  view: &ViewAngle,
  config: &Config,
  size: (u32, u32),
  path: &Path,
) -> Result<PathBuf> {
  let (path, format) = resolve_output(path, config)?;
  export_view(compound, view, config, size, &path, format)?;
  Ok(path)
}

pub fn export_png(frame: &scene::Frame, config: &Config, path: &Path) -> Result<()> {
  let surface = cairo::ImageSurface::create(
    cairo::Format::ARgb32,
    frame.width.round() as i32,
    frame.height.round() as i32,
  )?;
  {
    let cr = cairo::Context::new(&surface)?;
    painter::draw_frame(&cr, frame, &config.style)?;
  }
  let mut file = File::create(path)?;
  surface.write_to_png(&mut file)?;
  Ok(())
}

pub fn export_pdf(frame: &scene::Frame, config: &Config, path: &Path) -> Result<()> {
  let surface = cairo::PdfSurface::new(frame.width, frame.height, path)?;
  {
    let cr = cairo::Context::new(&surface)?;
    painter::draw_frame(&cr, frame, &config.style)?;
  }
  surface.finish();
  surface.status()?;
  Ok(())
}

pub fn export_svg(frame: &scene::Frame, config: &Config, path: &Path) -> Result<()> {
  let surface = cairo::SvgSurface::new(frame.width, frame.height, Some(path))?;
  {
    let cr = cairo::Context::new(&surface)?;
    painter::draw_frame(&cr, frame, &config.style)?;
  }
  surface.finish();
  surface.status()?;
  Ok(())
}

// --- Full Rotation ---

/// `out/benzene.png` -> `out/benzene_03.png` for view 3.
pub fn frame_path(base: &Path, index: usize, total: usize) -> PathBuf {
  let width = total.saturating_sub(1).to_string().len().max(2);
  let stem = base
    .file_stem()
    .and_then(|s| s.to_str())
    .unwrap_or("frame");
  let name = match base.extension().and_then(|e| e.to_str()) {
    Some(ext) => format!("{}_{:0width$}.{}", stem, index, ext, width = width),
    None => format!("{}_{:0width$}", stem, index, width = width),
  };
  base.with_file_name(name)
}

/// Writes one file per generated view angle, in rotation order.
pub fn export_rotation(
  compound: &Compound,
  config: &Config,
  size: (u32, u32),
  base: &Path,
) -> Result<Vec<PathBuf>> {
  let (base, format) = resolve_output(base, config)?;
  let views = generate_view_angles_with_tilt(
    config.projection.total_view_angles,
    config.projection.tilt_degrees,
  );

  let mut written = Vec::with_capacity(views.len());
  for view in &views {
    let path = frame_path(&base, view.id, views.len());
    export_view(compound, view, config, size, &path, format)?;
    written.push(path);
  }
  Ok(written)
}
