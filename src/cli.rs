//! Command line arguments shared by both binaries.

use crate::config::{ConfigError, SimulationConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
pub struct CliArgs {
    /// JSON file with executable, input and output locations
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Simulation executable
    #[arg(long)]
    pub executable: Option<PathBuf>,
    /// Simulation input file
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Displacement CSV written by the simulation
    #[arg(long)]
    pub displacement: Option<PathBuf>,
    /// Velocity CSV written by the simulation
    #[arg(long)]
    pub velocity: Option<PathBuf>,
    /// Acceleration CSV written by the simulation
    #[arg(long)]
    pub acceleration: Option<PathBuf>,
    /// Plot existing output without running the simulation
    #[arg(long)]
    pub skip_run: bool,
    /// Write the figure to this file instead of opening a window
    #[arg(long)]
    pub export: Option<PathBuf>,
    /// Open the exported file with the system viewer
    #[arg(long, requires = "export")]
    pub open: bool,
}

impl CliArgs {
    /// Configuration file (or defaults) with command line overrides applied.
    pub fn to_config(&self) -> Result<SimulationConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_json_file(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(executable) = &self.executable {
            config.executable_path = executable.clone();
        }
        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(displacement) = &self.displacement {
            config.output_paths.displacement = displacement.clone();
        }
        if let Some(velocity) = &self.velocity {
            config.output_paths.velocity = velocity.clone();
        }
        if let Some(acceleration) = &self.acceleration {
            config.output_paths.acceleration = acceleration.clone();
        }

        Ok(config)
    }
}

/// Initialise logging at `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_reproduce_defaults() {
        let args = CliArgs::parse_from(["pile-plots"]);
        assert_eq!(args.to_config().unwrap(), SimulationConfig::default());
        assert!(!args.skip_run);
        assert!(args.export.is_none());
    }

    #[test]
    fn flags_override_paths() {
        let args = CliArgs::parse_from([
            "pile-animation",
            "--executable",
            "./solver",
            "--velocity",
            "out/v.csv",
            "--skip-run",
        ]);
        let config = args.to_config().unwrap();

        assert_eq!(config.executable_path, PathBuf::from("./solver"));
        assert_eq!(config.output_paths.velocity, PathBuf::from("out/v.csv"));
        assert_eq!(
            config.output_paths.displacement,
            SimulationConfig::default().output_paths.displacement
        );
        assert!(args.skip_run);
    }

    #[test]
    fn open_requires_export() {
        assert!(CliArgs::try_parse_from(["pile-plots", "--open"]).is_err());
        assert!(CliArgs::try_parse_from(["pile-plots", "--export", "a.png", "--open"]).is_ok());
    }
}
