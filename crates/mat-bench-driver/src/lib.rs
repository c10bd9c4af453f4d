//! Driver for the dense-matrix micro-benchmark
//!
//! Runs the `(a + b) * a * b` workload from [`mat_core`] in a tight loop
//! under a [`ScopedTimer`] and reports the final diagonal sum together
//! with the elapsed wall-clock time.
//!
//! # Example
//!
//! ```rust
//! use mat_bench_driver::{run, BenchConfig};
//!
//! let config = BenchConfig::default().with_iterations(10);
//! let report = run::<i64>(&config).unwrap();
//! assert_eq!(report.result, 90);
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod timer;

// Re-export main types
pub use config::{BenchConfig, DEFAULT_DIMENSION, DEFAULT_ITERATIONS};
pub use driver::{run, run_iteration, BenchReport};
pub use error::{Error, Result};
pub use timer::ScopedTimer;
