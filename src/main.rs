use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use molview::config::{Config, LabelType};
use molview::io;
use molview::model::Compound;
use molview::projection::{generate_view_angles_with_tilt, ViewAngle};
use molview::rendering::{self, DEFAULT_CANVAS};
use molview::utils::logger;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log per-frame detail.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (defaults to the OS config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one view, or the whole rotation, to PNG / PDF / SVG.
    Render {
        /// PubChem 3D record (.json) or XYZ file.
        input: PathBuf,

        /// Output file; the extension picks the format, the settings default applies without one.
        #[arg(short, long)]
        output: PathBuf,

        /// PubChem property table JSON supplying title and formula.
        #[arg(long)]
        properties: Option<PathBuf>,

        /// Index into the generated view angles.
        #[arg(long, default_value_t = 0)]
        view: usize,

        /// Write every view angle as `<output>_NN.<ext>`.
        #[arg(long)]
        all_views: bool,

        #[arg(long, default_value_t = DEFAULT_CANVAS.0)]
        width: u32,

        #[arg(long, default_value_t = DEFAULT_CANVAS.1)]
        height: u32,

        /// Zoom level; `fit` sizes the molecule to the canvas.
        #[arg(long)]
        zoom: Option<String>,

        #[arg(long, value_enum)]
        labels: Option<LabelType>,

        #[arg(long, conflicts_with = "labels")]
        no_labels: bool,
    },
    /// Print name, formula and counts.
    Info {
        input: PathBuf,

        #[arg(long)]
        properties: Option<PathBuf>,
    },
    /// Show the settings file location; `--write` saves the current settings there.
    Config {
        #[arg(long)]
        write: bool,
    },
}

fn load(input: &Path, properties: Option<&Path>) -> Result<Compound> {
    io::load_compound_with_properties(input, properties)
        .with_context(|| format!("loading {:?}", input))
}

/// Picks view `index` out of `total` generated angles.
fn select_view(total: usize, tilt: f64, index: usize) -> Result<ViewAngle> {
    if total == 0 {
        bail!("total_view_angles is 0; nothing to render");
    }
    if index >= total {
        bail!("view {} is out of range (0..{})", index, total);
    }
    let mut views = generate_view_angles_with_tilt(total, tilt);
    Ok(views.swap_remove(index))
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.verbose).map_err(|e| anyhow::anyhow!("logger: {}", e))?;

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    match args.command {
        Command::Config { write } => {
            let path = match (&args.config, write) {
                (Some(path), true) => {
                    config.save_to(path)?;
                    path.clone()
                }
                (None, true) => config.save()?,
                (Some(path), false) => path.clone(),
                (None, false) => Config::get_path(),
            };
            info!("Settings file: {}", path.display());
        }
        Command::Info { input, properties } => {
            let compound = load(&input, properties.as_deref())?;
            info!("{} ({})", compound.name, compound.id);
            info!("Formula: {}", compound.formula);
            info!(
                "{} atoms, {} bonds",
                compound.atoms.len(),
                compound.bonds.len()
            );
        }
        Command::Render {
            input,
            output,
            properties,
            view,
            all_views,
            width,
            height,
            zoom,
            labels,
            no_labels,
        } => {
            let compound = load(&input, properties.as_deref())?;
            if compound.atoms.is_empty() {
                warn!("{} has no atoms; output will be blank", compound.name);
            }

            if let Some(label_type) = labels {
                config.visualization.show_labels = true;
                config.visualization.label_type = label_type;
            }
            if no_labels {
                config.visualization.show_labels = false;
            }
            match zoom.as_deref() {
                Some("fit") => {
                    config.visualization.zoom_level =
                        rendering::fit_zoom(&compound, width as f64, height as f64, &config);
                }
                Some(z) => {
                    config.visualization.zoom_level =
                        z.parse().with_context(|| format!("invalid zoom {:?}", z))?;
                }
                None => {}
            }

            let size = (width, height);
            if all_views {
                let written = rendering::export_rotation(&compound, &config, size, &output)?;
                info!("Wrote {} frames", written.len());
            } else {
                let angle = select_view(
                    config.projection.total_view_angles,
                    config.projection.tilt_degrees,
                    view,
                )?;
                rendering::export_to_path(&compound, &angle, &config, size, &output)?;
            }
        }
    }
    Ok(())
}
