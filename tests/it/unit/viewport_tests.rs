//! Viewport transform properties.

use archboard::constants::{MAX_ZOOM, MIN_ZOOM};
use archboard::geometry::{Point, point2};
use archboard::viewport::Viewport;
use proptest::prelude::*;

fn close(a: Point, b: Point) -> bool {
    let tol = |v: f64| 1e-6 * (1.0 + v.abs());
    (a.x - b.x).abs() < tol(b.x) && (a.y - b.y).abs() < tol(b.y)
}

fn viewport_strategy() -> impl Strategy<Value = Viewport> {
    (-5000.0..5000.0f64, -5000.0..5000.0f64, MIN_ZOOM..=MAX_ZOOM)
        .prop_map(|(x, y, k)| Viewport::new(x, y, k))
}

fn screen_point() -> impl Strategy<Value = Point> {
    (-4000.0..4000.0f64, -4000.0..4000.0f64).prop_map(|(x, y)| point2(x, y))
}

/// Requested scales, including out-of-range and non-finite values.
fn requested_scale() -> impl Strategy<Value = f64> {
    prop_oneof![
        3 => MIN_ZOOM..=MAX_ZOOM,
        1 => -10.0..MIN_ZOOM,
        1 => MAX_ZOOM..1e6,
        1 => any::<f64>(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn world_screen_round_trip(viewport in viewport_strategy(), p in screen_point()) {
        let back = viewport.world_to_screen(viewport.screen_to_world(p));
        prop_assert!(close(back, p), "{:?} {:?} -> {:?}", viewport, p, back);
    }

    #[test]
    fn zoom_always_clamped(
        mut viewport in viewport_strategy(),
        requested in requested_scale(),
        pivot in screen_point(),
    ) {
        viewport.zoom_at(requested, pivot);
        prop_assert!((MIN_ZOOM..=MAX_ZOOM).contains(&viewport.k()), "requested {} gave {}", requested, viewport.k());
        prop_assert!(viewport.x().is_finite() && viewport.y().is_finite());
    }

    #[test]
    fn zoom_keeps_pivot_fixed(
        mut viewport in viewport_strategy(),
        requested in requested_scale(),
        pivot in screen_point(),
    ) {
        let world = viewport.screen_to_world(pivot);
        viewport.zoom_at(requested, pivot);
        let after = viewport.world_to_screen(world);
        prop_assert!(close(after, pivot), "{:?} moved to {:?}", pivot, after);
    }

    #[test]
    fn deserialized_scale_is_clamped(x in -1e4..1e4f64, y in -1e4..1e4f64, k in -100.0..100.0f64) {
        let json = serde_json::json!({ "x": x, "y": y, "k": k }).to_string();
        let viewport: Viewport = serde_json::from_str(&json).unwrap();
        prop_assert!((MIN_ZOOM..=MAX_ZOOM).contains(&viewport.k()));
    }
}

#[test]
fn test_zoom_at_matches_formula() {
    let mut viewport = Viewport::new(100.0, 50.0, 1.0);
    viewport.zoom_at(2.0, point2(300.0, 250.0));
    // w = (pivot - t) / k = (200, 200); t' = pivot - w * 2
    assert_eq!(viewport, Viewport::new(-100.0, -150.0, 2.0));
}

#[test]
fn test_nan_zoom_request_changes_nothing() {
    let mut viewport = Viewport::new(20.0, 30.0, 3.0);
    assert!(!viewport.zoom_at(f64::NAN, point2(100.0, 100.0)));
    assert_eq!(viewport.k(), 3.0);
}

#[test]
fn test_pan_is_scale_independent() {
    let mut viewport = Viewport::new(0.0, 0.0, 3.0);
    viewport.pan_by(10.0, -4.0);
    assert_eq!((viewport.x(), viewport.y(), viewport.k()), (10.0, -4.0, 3.0));
}

#[test]
fn test_reset() {
    let mut viewport = Viewport::new(40.0, 40.0, 2.0);
    viewport.reset();
    assert_eq!((viewport.x(), viewport.y(), viewport.k()), (0.0, 0.0, 1.0));
}
