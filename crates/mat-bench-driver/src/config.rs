//! Benchmark configuration

use crate::{Error, Result};

/// Iteration count used when none is given
pub const DEFAULT_ITERATIONS: usize = 5000;

/// Matrix dimension used when none is given
pub const DEFAULT_DIMENSION: usize = 2;

/// Parameters of the timing loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of loop passes; only the last pass's result is kept
    pub iterations: usize,
    /// Dimension `n` of the `n`x`n` input matrices
    pub dimension: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            dimension: DEFAULT_DIMENSION,
        }
    }
}

impl BenchConfig {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Reject configurations that would run no work
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::non_positive("iterations"));
        }
        if self.dimension == 0 {
            return Err(Error::non_positive("dimension"));
        }
        Ok(())
    }
}
