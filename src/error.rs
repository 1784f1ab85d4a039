// src/error.rs
use std::fmt;

/// Custom error types for the mc-options-bench crate
#[derive(Debug, Clone)]
pub enum BenchError {
    /// A command-line argument failed to parse or violated a constraint
    InvalidArgument {
        argument: String,
        value: String,
        constraint: String,
    },

    /// Invalid run configuration
    InvalidConfiguration { field: String, reason: String },

    /// Input file could not be read
    InputError { path: String, reason: String },

    /// Input document parsed but does not match the expected shape
    MalformedInput { reason: String },

    /// Simulation setup error (e.g. worker pool construction)
    SimulationError { lanes: usize, reason: String },
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::InvalidArgument {
                argument,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid argument '{}' = {}: {}",
                    argument, value, constraint
                )
            }
            BenchError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            BenchError::InputError { path, reason } => {
                write!(f, "Cannot read input file '{}': {}", path, reason)
            }
            BenchError::MalformedInput { reason } => {
                write!(f, "Malformed input document: {}", reason)
            }
            BenchError::SimulationError { lanes, reason } => {
                write!(f, "Simulation error with {} lanes: {}", lanes, reason)
            }
        }
    }
}

impl std::error::Error for BenchError {}

/// Result type alias for mc-options-bench operations
pub type BenchResult<T> = Result<T, BenchError>;

/// Validation utilities for startup configuration checks
///
/// Every violation here is fatal by design: configuration errors are
/// operator mistakes, not runtime conditions to recover from.
pub mod validation {
    use super::{BenchError, BenchResult};
    use crate::config::MAX_LANES;

    /// Validate the worker lane count (1..=MAX_LANES)
    pub fn validate_lanes(lanes: usize) -> BenchResult<()> {
        if lanes < 1 {
            Err(BenchError::InvalidConfiguration {
                field: "lanes".to_string(),
                reason: "must be at least 1".to_string(),
            })
        } else if lanes > MAX_LANES {
            Err(BenchError::InvalidConfiguration {
                field: "lanes".to_string(),
                reason: format!("exceeds maximum allowed ({})", MAX_LANES),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that every lane receives at least one option
    pub fn validate_options_per_lane(options: usize, lanes: usize) -> BenchResult<()> {
        if lanes == 0 || options / lanes < 1 {
            Err(BenchError::InvalidConfiguration {
                field: "options".to_string(),
                reason: format!("must supply at least one option per lane ({} lanes)", lanes),
            })
        } else {
            Ok(())
        }
    }

    /// Validate the per-option path length (total variates per option)
    pub fn validate_path_length(path_length: usize) -> BenchResult<()> {
        if path_length < 16 {
            Err(BenchError::InvalidConfiguration {
                field: "path_length".to_string(),
                reason: "must be at least 16".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate the sampling block length against the path length
    pub fn validate_block_length(block_length: usize, path_length: usize) -> BenchResult<()> {
        if block_length < 16 {
            Err(BenchError::InvalidConfiguration {
                field: "block_length".to_string(),
                reason: "must be at least 16".to_string(),
            })
        } else if block_length % 16 != 0 {
            Err(BenchError::InvalidConfiguration {
                field: "block_length".to_string(),
                reason: "must be a multiple of 16".to_string(),
            })
        } else if block_length > path_length {
            Err(BenchError::InvalidConfiguration {
                field: "block_length".to_string(),
                reason: format!("must be no more than path_length ({})", path_length),
            })
        } else if path_length % block_length != 0 {
            Err(BenchError::InvalidConfiguration {
                field: "block_length".to_string(),
                reason: format!("must evenly divide path_length ({})", path_length),
            })
        } else {
            Ok(())
        }
    }

    /// Validate the top-K capacity
    pub fn validate_top_k(top_k: usize) -> BenchResult<()> {
        if top_k == 0 {
            Err(BenchError::InvalidConfiguration {
                field: "top_k".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_lanes() {
        assert!(validate_lanes(1).is_ok());
        assert!(validate_lanes(288).is_ok());
        assert!(validate_lanes(0).is_err());
        assert!(validate_lanes(289).is_err());
    }

    #[test]
    fn test_validate_options_per_lane() {
        assert!(validate_options_per_lane(4, 4).is_ok());
        assert!(validate_options_per_lane(5, 4).is_ok());
        assert!(validate_options_per_lane(3, 4).is_err());
        assert!(validate_options_per_lane(0, 1).is_err());
    }

    #[test]
    fn test_validate_path_length() {
        assert!(validate_path_length(16).is_ok());
        assert!(validate_path_length(262144).is_ok());
        assert!(validate_path_length(15).is_err());
        assert!(validate_path_length(0).is_err());
    }

    #[test]
    fn test_validate_block_length() {
        assert!(validate_block_length(16, 64).is_ok());
        assert!(validate_block_length(64, 64).is_ok());
        assert!(validate_block_length(15, 64).is_err());
        // not a multiple of 16
        assert!(validate_block_length(24, 96).is_err());
        // larger than the path
        assert!(validate_block_length(128, 64).is_err());
        // does not evenly divide the path
        assert!(validate_block_length(48, 64).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = BenchError::InvalidConfiguration {
            field: "block_length".to_string(),
            reason: "must be a multiple of 16".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("block_length"));
        assert!(display.contains("multiple of 16"));
    }

    #[test]
    fn test_invalid_argument_display() {
        let error = BenchError::InvalidArgument {
            argument: "nthreads".to_string(),
            value: "4q".to_string(),
            constraint: "not a valid integer".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("nthreads"));
        assert!(display.contains("4q"));
    }
}
