//! Scoped wall-clock timer
//!
//! [`ScopedTimer`] starts its clock when created and reports the elapsed
//! time when dropped, so the measurement is emitted on every exit path of
//! the enclosing scope: normal return, early `?` return, or unwinding panic.

use std::fmt;
use std::time::{Duration, Instant};
use tracing::info;

type Reporter = Box<dyn FnOnce(&'static str, Duration)>;

/// Guard that reports how long it was alive
pub struct ScopedTimer {
    label: &'static str,
    start: Instant,
    reporter: Option<Reporter>,
}

impl ScopedTimer {
    /// Start a timer that logs its elapsed time through `tracing` on drop
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
            reporter: None,
        }
    }

    /// Start a timer that hands its label and elapsed time to `reporter` on drop
    pub fn with_reporter<F>(label: &'static str, reporter: F) -> Self
    where
        F: FnOnce(&'static str, Duration) + 'static,
    {
        Self {
            label,
            start: Instant::now(),
            reporter: Some(Box::new(reporter)),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Time since the timer was started
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        match self.reporter.take() {
            Some(report) => report(self.label, elapsed),
            None => info!(
                label = self.label,
                elapsed_secs = elapsed.as_secs_f64(),
                "timer finished"
            ),
        }
    }
}

impl fmt::Debug for ScopedTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedTimer")
            .field("label", &self.label)
            .field("start", &self.start)
            .field("has_reporter", &self.reporter.is_some())
            .finish()
    }
}
