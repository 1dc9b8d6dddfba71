/*
 * Error Module
 *
 * Errors raised while validating or loading simulation parameters.
 * The engine itself has no fallible operations once the parameters are valid.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Rejected simulation parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("population size must be at least 1")]
    EmptyPopulation,

    #[error("plane width must be positive and finite, got {0}")]
    InvalidWidth(f64),

    #[error("plane height must be positive and finite, got {0}")]
    InvalidHeight(f64),

    #[error("neighbourhood radius must be non-negative and finite, got {0}")]
    InvalidNeighbourhoodRadius(f64),

    #[error("separation radius must be non-negative and finite, got {0}")]
    InvalidSeparationRadius(f64),

    #[error("maximum velocity must be positive and finite, got {0}")]
    InvalidMaxVelocity(f64),

    #[error("failed to read parameter file {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("failed to parse parameter file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}
