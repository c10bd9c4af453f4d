//! Error types for the benchmark driver

use thiserror::Error;

/// Errors that can occur while running the benchmark
#[derive(Error, Debug)]
pub enum Error {
    /// Benchmark configuration cannot produce a workload
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Matrix construction or arithmetic failed
    #[error("Matrix error: {0}")]
    Matrix(#[from] mat_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a configuration field that must be positive
    pub fn non_positive(field: &str) -> Self {
        Self::InvalidConfig(format!("{field} must be at least 1"))
    }
}
