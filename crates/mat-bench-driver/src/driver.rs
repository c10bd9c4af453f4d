//! Timing loop over the matrix workload
//!
//! Each pass builds two `n`x`n` matrices holding `0..n*n`, computes
//! `(a + b) * a * b` left to right, and takes the diagonal sum. Only the
//! final pass's sum is kept.

use crate::{BenchConfig, Result, ScopedTimer};
use mat_core::{Element, Matrix};
use num_traits::FromPrimitive;
use std::hint::black_box;
use std::time::Duration;
use tracing::{debug, instrument};

/// Outcome of a benchmark run
#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport<T> {
    /// Diagonal sum from the last iteration
    pub result: T,
    pub iterations: usize,
    pub dimension: usize,
    /// Wall-clock time of the whole loop
    pub elapsed: Duration,
}

impl<T> BenchReport<T> {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// One pass of the workload for an `n`x`n` matrix
pub fn run_iteration<T>(n: usize) -> Result<T>
where
    T: Element + FromPrimitive,
{
    let a = Matrix::<T>::sequential(n)?;
    let b = Matrix::<T>::sequential(n)?;

    let c = a.add(&b)?;
    let d = c.multiply(&a)?.multiply(&b)?;

    Ok(d.diagonal_sum())
}

/// Run the full timing loop described by `config`
#[instrument(level = "debug", skip(config), fields(iterations = config.iterations, dimension = config.dimension))]
pub fn run<T>(config: &BenchConfig) -> Result<BenchReport<T>>
where
    T: Element + FromPrimitive,
{
    config.validate()?;

    let timer = ScopedTimer::new("matrix loop");
    let mut result = T::zero();
    for _ in 0..config.iterations {
        result = black_box(run_iteration::<T>(black_box(config.dimension))?);
    }
    let elapsed = timer.elapsed();

    debug!(%result, elapsed_secs = elapsed.as_secs_f64(), "benchmark finished");

    Ok(BenchReport {
        result,
        iterations: config.iterations,
        dimension: config.dimension,
        elapsed,
    })
}
