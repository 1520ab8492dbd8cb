//! 2D geometry aliases shared by the world and screen coordinate spaces.
//!
//! Both spaces use untyped `f64` euclid values; the functions in
//! [`crate::viewport`] and [`crate::input::coords`] are the only places
//! values cross from one space to the other.

pub use euclid::{point2, size2, vec2};

pub type Point = euclid::default::Point2D<f64>;
pub type Vector = euclid::default::Vector2D<f64>;
pub type Size = euclid::default::Size2D<f64>;
pub type Rect = euclid::default::Rect<f64>;

/// Inclusive containment test.
///
/// `Rect::contains` is half-open, which makes the right and bottom edges of
/// a node unclickable; hit testing wants both edges.
#[inline]
pub fn rect_contains(rect: &Rect, p: Point) -> bool {
    p.x >= rect.min_x() && p.x <= rect.max_x() && p.y >= rect.min_y() && p.y <= rect.max_y()
}

/// Distance from `p` to the segment `a`-`b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.square_length();
    if len_sq <= f64::EPSILON {
        return (p - a).length();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;
    (p - closest).length()
}
