// src/utils/logger.rs

use log::{Level, LevelFilter, Record, SetLoggerError};
use std::io::Write;

/// Installs an `env_logger` backend on stderr. `verbose` enables debug
/// output; `RUST_LOG` still overrides per module.
pub fn init(verbose: bool) -> Result<(), SetLoggerError> {
  let level = if verbose {
    LevelFilter::Debug
  } else {
    LevelFilter::Info
  };
  env_logger::Builder::new()
    .filter_level(level)
    .parse_default_env()
    .target(env_logger::Target::Stderr)
    .format(|buf, record| writeln!(buf, "{}", format_line(record)))
    .try_init()
}

fn format_line(record: &Record) -> String {
  let icon = match record.level() {
    Level::Error => "🔴",
    Level::Warn => "🟠",
    Level::Info => "🔵",
    Level::Debug => "⚪",
    Level::Trace => "▫️",
  };
  format!("{:<5} {}  {}", record.level(), icon, record.args())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_line_format() {
    let line = format_line(
      &Record::builder()
        .args(format_args!("wrote frame_03.png"))
        .level(Level::Warn)
        .build(),
    );
    assert_eq!(line, "WARN  🟠  wrote frame_03.png");
  }

  #[test]
  fn test_second_init_is_rejected() {
    // Tests share one process; whichever call lands first wins.
    let _ = init(false);
    assert!(init(true).is_err());
  }
}
