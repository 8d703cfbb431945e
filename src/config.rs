//! Run Configuration Module
//! Locations of the simulation executable, its input file and the CSV files it writes.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_EXECUTABLE: &str = "program.exe";
pub const DEFAULT_INPUT: &str = "INPUT.txt";
pub const DEFAULT_DISPLACEMENT: &str = "data/OUTPUT_DISPLACEMENT.csv";
pub const DEFAULT_VELOCITY: &str = "data/OUTPUT_VELOCITY.csv";
pub const DEFAULT_ACCELERATION: &str = "data/OUTPUT_ACCELERATION.csv";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// CSV files written by the simulation executable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    pub displacement: PathBuf,
    pub velocity: PathBuf,
    pub acceleration: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            displacement: PathBuf::from(DEFAULT_DISPLACEMENT),
            velocity: PathBuf::from(DEFAULT_VELOCITY),
            acceleration: PathBuf::from(DEFAULT_ACCELERATION),
        }
    }
}

/// Everything a run needs to know about the filesystem.
///
/// Every field is optional in JSON; missing ones keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub executable_path: PathBuf,
    pub input_path: PathBuf,
    pub output_paths: OutputPaths,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            executable_path: PathBuf::from(DEFAULT_EXECUTABLE),
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_paths: OutputPaths::default(),
        }
    }
}

impl SimulationConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
