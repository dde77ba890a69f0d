/// 2D cubic bezier math utilities.
///
/// All functions operate on the four control points of a single cubic segment
/// with a parameter `t`; `t` in `[0, 1]` spans the segment, values outside
/// extrapolate.
use crate::math::{Point2, Vector2};

/// Evaluates the cubic Bernstein form at `t`.
///
/// `B(t) = P0·(1−t)³ + 3·P1·t·(1−t)² + 3·P2·t²·(1−t) + P3·t³`
#[must_use]
pub fn cubic_point_at(p0: Point2, p1: Point2, p2: Point2, p3: Point2, t: f64) -> Point2 {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * t * u * u;
    let b2 = 3.0 * t * t * u;
    let b3 = t * t * t;
    Point2::new(
        p0.x * b0 + p1.x * b1 + p2.x * b2 + p3.x * b3,
        p0.y * b0 + p1.y * b1 + p2.y * b2 + p3.y * b3,
    )
}

/// Evaluates the derivative of the cubic at `t`.
///
/// `B'(t) = 3·[(P1−P0)·(1−t)² + 2·(P2−P1)·t·(1−t) + (P3−P2)·t²]`
///
/// The result is not normalized.
#[must_use]
pub fn cubic_derivative_at(p0: Point2, p1: Point2, p2: Point2, p3: Point2, t: f64) -> Vector2 {
    let u = 1.0 - t;
    let d0 = p1 - p0;
    let d1 = p2 - p1;
    let d2 = p3 - p2;
    (d0 * (u * u) + d1 * (2.0 * u * t) + d2 * (t * t)) * 3.0
}

/// Splits a cubic at `t` using de Casteljau's algorithm.
///
/// Returns the control points of the two sub-curves; the first spans the
/// original `[0, t]`, the second `[t, 1]`.
#[must_use]
pub fn split_cubic(
    p0: Point2,
    p1: Point2,
    p2: Point2,
    p3: Point2,
    t: f64,
) -> ([Point2; 4], [Point2; 4]) {
    let q0 = lerp(p0, p1, t);
    let q1 = lerp(p1, p2, t);
    let q2 = lerp(p2, p3, t);
    let r0 = lerp(q0, q1, t);
    let r1 = lerp(q1, q2, t);
    let s = lerp(r0, r1, t);
    ([p0, q0, r0, s], [s, r1, q2, p3])
}

/// Linear interpolation between two points.
fn lerp(a: Point2, b: Point2, t: f64) -> Point2 {
    a + (b - a) * t
}
