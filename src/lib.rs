//! Naive dense-matrix arithmetic micro-benchmark
//!
//! Facade over the workspace crates:
//!
//! - [`mat_core`]: the immutable [`Matrix`] type with `add`, `multiply`
//!   and `diagonal_sum`
//! - [`mat_bench_driver`]: the timing loop, [`BenchConfig`] and
//!   [`ScopedTimer`]

pub use mat_bench_driver;
pub use mat_core;

pub use mat_bench_driver::{run, run_iteration, BenchConfig, BenchReport, ScopedTimer};
pub use mat_core::{Element, Matrix};

/// Prelude for convenient imports
pub mod prelude {
    pub use mat_bench_driver::{run, BenchConfig, BenchReport};
    pub use mat_core::prelude::*;
}
