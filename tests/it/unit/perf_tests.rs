//! Unit tests for perf module.

use archboard::perf::{ScopedTimer, is_profiling_enabled, measure, measure_and_log, set_profiling_enabled};

#[test]
fn test_scoped_timer_creation() {
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_measure_returns_result() {
    let (value, elapsed_ms) = measure(|| 21 * 2);
    assert_eq!(value, 42);
    assert!(elapsed_ms >= 0.0);
}

#[test]
fn test_measure_and_log_passes_through() {
    assert_eq!(measure_and_log("noop", 1000.0, || "ok"), "ok");
}

#[test]
fn test_runtime_toggle() {
    let before = is_profiling_enabled();
    set_profiling_enabled(!before);
    assert_eq!(is_profiling_enabled(), !before);
    set_profiling_enabled(before);
}
