//! End-to-end runs of the benchmark driver

use mat_bench_driver::{run, run_iteration, BenchConfig, Error, ScopedTimer};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_default_run_prints_90() -> anyhow::Result<()> {
    init_tracing();

    let report = run::<i64>(&BenchConfig::default())?;
    assert_eq!(report.result, 90);
    assert_eq!(report.iterations, 5000);
    assert_eq!(report.dimension, 2);
    assert!(report.elapsed_secs() >= 0.0);
    Ok(())
}

#[test]
fn test_larger_dimensions_match_direct_computation() -> anyhow::Result<()> {
    init_tracing();

    // For a = b = S with S[i][j] = i*n + j, the result is trace(2 * S^3)
    for n in [3usize, 4, 8] {
        let s = mat_core::Matrix::<i64>::sequential(n)?;
        let cube = s.multiply(&s)?.multiply(&s)?;
        let expected = 2 * cube.diagonal_sum();

        let config = BenchConfig::default().with_iterations(2).with_dimension(n);
        assert_eq!(run::<i64>(&config)?.result, expected, "n={n}");
        assert_eq!(run_iteration::<i64>(n)?, expected, "n={n}");
    }
    Ok(())
}

#[test]
fn test_known_traces() {
    // n=3: S^3 trace is 2376, doubled gives 4752
    assert_eq!(run_iteration::<i64>(3).unwrap(), 4752);
}

#[test]
fn test_zero_dimension_is_rejected() {
    let config = BenchConfig::default().with_dimension(0);
    let err = run::<i64>(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid configuration: dimension must be at least 1"
    );
}

#[test]
fn test_timer_reports_when_loop_fails() {
    let reported = Rc::new(Cell::new(None::<Duration>));
    let sink = Rc::clone(&reported);

    let outcome = (|| -> Result<i64, Error> {
        let _timer = ScopedTimer::with_reporter("failing loop", move |_, elapsed| {
            sink.set(Some(elapsed));
        });
        let a = mat_core::Matrix::<i64>::sequential(2)?;
        let b = mat_core::Matrix::<i64>::sequential(3)?;
        Ok(a.add(&b)?.diagonal_sum())
    })();

    assert!(matches!(
        outcome,
        Err(Error::Matrix(mat_core::Error::DimensionMismatch { op: "add", .. }))
    ));
    assert!(reported.get().is_some());
}
