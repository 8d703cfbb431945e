//! Input File Reader
//! Extracts the pile length from the simulation input file.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Line prefix that carries the pile length.
pub const LENGTH_PREFIX: &str = "length:";

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed pile length on line {line}: {value:?}")]
    MalformedLength { line: usize, value: String },
}

/// Reads the `length:` entry of the simulation input file.
pub struct InputReader;

impl InputReader {
    /// Pile length in metres from the input file at `path`.
    ///
    /// The last `length:` line wins. A file without one yields `0.0`.
    pub fn read_pile_length(path: &Path) -> Result<f64, InputError> {
        let io_err = |source| InputError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(io_err)?;

        let length = Self::pile_length_from_lines(lines.iter().map(String::as_str))?;
        match length {
            Some(length) => Ok(length),
            None => {
                log::warn!(
                    "No '{}' line in {}, using a pile length of 0",
                    LENGTH_PREFIX,
                    path.display()
                );
                Ok(0.0)
            }
        }
    }

    /// Fold over the lines keeping the last `length:` value.
    ///
    /// `None` when no line matches.
    pub fn pile_length_from_lines<'a, I>(lines: I) -> Result<Option<f64>, InputError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .enumerate()
            .filter(|(_, line)| line.starts_with(LENGTH_PREFIX))
            .try_fold(None, |_, (idx, line)| Self::parse_length(idx + 1, line).map(Some))
    }

    fn parse_length(line_no: usize, line: &str) -> Result<f64, InputError> {
        let value = line
            .split_once(':')
            .map(|(_, rest)| rest.trim())
            .unwrap_or_default();

        value.parse::<f64>().map_err(|_| InputError::MalformedLength {
            line: line_no,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length_of(text: &str) -> Result<Option<f64>, InputError> {
        InputReader::pile_length_from_lines(text.lines())
    }

    #[test]
    fn single_length_line() {
        let text = "stiffness: 2e8\nlength: 12.5\narea: 0.3\n";
        assert_eq!(length_of(text).unwrap(), Some(12.5));
    }

    #[test]
    fn last_length_line_wins() {
        let text = "length: 10\nlength: 20.25\ndensity: 2400\nlength:   7\n";
        assert_eq!(length_of(text).unwrap(), Some(7.0));
    }

    #[test]
    fn no_length_line() {
        assert_eq!(length_of("area: 0.3\n lengthy: 4\n").unwrap(), None);
        assert_eq!(length_of("").unwrap(), None);
    }

    #[test]
    fn prefix_must_start_the_line() {
        assert_eq!(length_of("  length: 3.0\nlength: 4.0").unwrap(), Some(4.0));
    }

    #[test]
    fn malformed_value_is_an_error() {
        let err = length_of("area: 1\nlength: twelve\n").unwrap_err();
        match err {
            InputError::MalformedLength { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "twelve");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = InputReader::read_pile_length(Path::new("no/such/INPUT.txt")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }
}
