//! Timing instrumentation for hot interaction paths.
//!
//! Pointer moves arrive at display rate and each one may hit-test every
//! port and edge curve on the board. [`profile_scope!`] times the rest of
//! the enclosing block:
//!
//! ```ignore
//! fn on_pointer_move(&mut self) {
//!     profile_scope!("on_pointer_move");
//!     // ...
//! }
//! ```
//!
//! Without the `profiling` feature the macro expands to nothing. Document
//! import and edge routing are always timed against one frame with
//! [`measure_and_log`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::warn;

/// One frame at 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Threshold used by `profile_scope!` when none is given
pub const HANDLER_BUDGET_MS: f64 = 1.0;

static HANDLER_TIMING: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        $crate::profile_scope!($name, $crate::perf::HANDLER_BUDGET_MS);
    };
    ($name:expr, $budget_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $budget_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $budget_ms);
    };
}

pub use profile_scope;

/// Silence or resume handler timing at runtime (`profiling` builds only).
pub fn set_profiling_enabled(enabled: bool) {
    HANDLER_TIMING.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    HANDLER_TIMING.load(Ordering::Relaxed)
}

/// Reports a scope that ran past its budget when dropped.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    budget_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, budget_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            budget_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        elapsed_ms(self.start)
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if is_profiling_enabled() {
            report_slow(self.name, self.elapsed_ms(), self.budget_ms);
        }
    }
}

/// Run `f`, returning its result and the elapsed milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, elapsed_ms(start))
}

/// Run `f` and warn if it overran `budget_ms`.
#[inline]
pub fn measure_and_log<T, F: FnOnce() -> T>(name: &str, budget_ms: f64, f: F) -> T {
    let (result, took) = measure(f);
    report_slow(name, took, budget_ms);
    result
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn report_slow(name: &str, elapsed_ms: f64, budget_ms: f64) {
    if elapsed_ms > budget_ms {
        warn!(
            operation = name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            budget_ms = format!("{:.2}", budget_ms),
            "Slow operation"
        );
    }
}
