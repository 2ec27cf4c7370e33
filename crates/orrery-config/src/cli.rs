//! Command-line argument parsing for the orrery.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::Config;

/// How the headless driver reports the final scene state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// Machine-readable JSON document.
    Json,
}

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "orrery", about = "Solar system visualization")]
pub struct CliArgs {
    /// Viewport width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Time-speed multiplier (0.1 to 5.0).
    #[arg(long)]
    pub time_scale: Option<f64>,

    /// Number of frames to simulate.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Seconds per simulated frame.
    #[arg(long)]
    pub frame_time: Option<f64>,

    /// Select a body by name before reporting.
    #[arg(long)]
    pub select: Option<String>,

    /// Load the body table from a RON file instead of the built-in solar system.
    #[arg(long)]
    pub bodies: Option<PathBuf>,

    /// Output format for the final report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(scale) = args.time_scale {
            self.simulation.time_scale = scale;
        }
        if let Some(frames) = args.frames {
            self.simulation.frames = frames;
        }
        if let Some(dt) = args.frame_time {
            self.simulation.frame_time = dt;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> CliArgs {
        CliArgs {
            width: None,
            height: None,
            time_scale: None,
            frames: None,
            frame_time: None,
            select: None,
            bodies: None,
            format: OutputFormat::Table,
            log_level: None,
            config: None,
        }
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1920),
            time_scale: Some(2.0),
            frames: Some(10),
            ..empty_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.window.width, 1920);
        assert_eq!(config.simulation.time_scale, 2.0);
        assert_eq!(config.simulation.frames, 10);
        // Non-overridden fields retain defaults
        assert_eq!(config.window.height, 720);
        assert_eq!(config.simulation.display_scale, 10.0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&empty_args());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::parse_from([
            "orrery",
            "--time-scale",
            "0.5",
            "--select",
            "Saturn",
            "--format",
            "json",
        ]);
        assert_eq!(args.time_scale, Some(0.5));
        assert_eq!(args.select.as_deref(), Some("Saturn"));
        assert_eq!(args.format, OutputFormat::Json);
    }
}
