//! Simulation Runner Module
//! Invokes the external pile dynamics executable and waits for it to finish.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Simulation executable '{}' not found", .executable.display())]
    ExecutableNotFound { executable: PathBuf },
    #[error("Simulation failed with error code {code}")]
    Failed { code: i32 },
    #[error("Simulation was terminated by a signal")]
    Terminated,
    #[error("Failed to start simulation executable '{}': {source}", .executable.display())]
    Spawn {
        executable: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Runs the simulation executable with the input file as its only argument.
pub struct SimulationRunner;

impl SimulationRunner {
    /// Block until the executable exits. Any failure is returned once; nothing is retried.
    pub fn run(executable: &Path, input_path: &Path) -> Result<(), RunnerError> {
        log::info!("Running simulation {} {}", executable.display(), input_path.display());

        let status = Command::new(executable)
            .arg(input_path)
            .status()
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => RunnerError::ExecutableNotFound {
                    executable: executable.to_path_buf(),
                },
                _ => RunnerError::Spawn {
                    executable: executable.to_path_buf(),
                    source,
                },
            })?;

        if status.success() {
            log::info!("Simulation completed");
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(RunnerError::Failed { code }),
            None => Err(RunnerError::Terminated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_executable_is_named() {
        let exe = Path::new("./definitely-not-a-pile-solver");
        let err = SimulationRunner::run(exe, Path::new("INPUT.txt")).unwrap_err();

        assert!(matches!(err, RunnerError::ExecutableNotFound { .. }));
        assert!(err.to_string().contains("definitely-not-a-pile-solver"));
    }

    #[test]
    fn failure_message_carries_the_exit_code() {
        let err = RunnerError::Failed { code: 2 };
        assert_eq!(err.to_string(), "Simulation failed with error code 2");
    }
}
