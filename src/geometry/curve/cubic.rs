use crate::error::{GeometryError, Result};
use crate::math::cubic_2d::{cubic_derivative_at, cubic_point_at, split_cubic};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{Curve, CurveDomain};

/// A single cubic bezier segment defined by four control points.
///
/// The parametric form is the cubic Bernstein polynomial
/// `B(t) = P0·(1−t)³ + 3·P1·t·(1−t)² + 3·P2·t²·(1−t) + P3·t³`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    p0: Point2,
    p1: Point2,
    p2: Point2,
    p3: Point2,
}

impl CubicSegment {
    /// Creates a new cubic segment.
    ///
    /// Coincident control points are legal; they flatten the curve rather
    /// than invalidate it.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Returns the start point.
    #[must_use]
    pub fn p0(&self) -> Point2 {
        self.p0
    }

    /// Returns the first control point.
    #[must_use]
    pub fn p1(&self) -> Point2 {
        self.p1
    }

    /// Returns the second control point.
    #[must_use]
    pub fn p2(&self) -> Point2 {
        self.p2
    }

    /// Returns the end point.
    #[must_use]
    pub fn p3(&self) -> Point2 {
        self.p3
    }

    /// Evaluates the segment at `t` without the trait's `Result` wrapper.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        cubic_point_at(self.p0, self.p1, self.p2, self.p3, t)
    }

    /// Splits the segment at `t` using de Casteljau's algorithm.
    ///
    /// The first returned segment spans the original `[0, t]`, the second
    /// `[t, 1]`.
    #[must_use]
    pub fn split(&self, t: f64) -> (CubicSegment, CubicSegment) {
        let (head, tail) = split_cubic(self.p0, self.p1, self.p2, self.p3, t);
        (
            CubicSegment::new(head[0], head[1], head[2], head[3]),
            CubicSegment::new(tail[0], tail[1], tail[2], tail[3]),
        )
    }
}

impl Curve for CubicSegment {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        Ok(self.point_at(t))
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        let derivative = cubic_derivative_at(self.p0, self.p1, self.p2, self.p3, t);
        let len = derivative.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(derivative / len)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> CubicSegment {
        CubicSegment::new(
            Point2::new(0.0, 100.0),
            Point2::new(20.0, 100.0),
            Point2::new(30.0, 0.0),
            Point2::new(50.0, 0.0),
        )
    }

    #[test]
    fn evaluate_hits_endpoints() {
        let seg = sample();
        assert_eq!(seg.evaluate(0.0).unwrap(), seg.p0());
        assert_eq!(seg.evaluate(1.0).unwrap(), seg.p3());
    }

    #[test]
    fn tangent_is_unit_and_horizontal_at_start() {
        // p0 -> p1 is horizontal, so the start tangent must be (1, 0).
        let seg = sample();
        let t = seg.tangent(0.0).unwrap();
        assert!((t.norm() - 1.0).abs() < TOLERANCE);
        assert!((t.x - 1.0).abs() < TOLERANCE);
        assert!(t.y.abs() < TOLERANCE);
    }

    #[test]
    fn degenerate_tangent_fails() {
        let p = Point2::new(5.0, 5.0);
        let seg = CubicSegment::new(p, p, p, p);
        assert!(seg.tangent(0.5).is_err());
    }

    #[test]
    fn split_halves_meet_on_curve() {
        let seg = sample();
        let (head, tail) = seg.split(0.4);
        assert_eq!(head.p0(), seg.p0());
        assert_eq!(tail.p3(), seg.p3());
        let joint = seg.point_at(0.4);
        assert!((head.p3().x - joint.x).abs() < 1e-12);
        assert!((head.p3().y - joint.y).abs() < 1e-12);
        assert_eq!(head.p3(), tail.p0());
    }

    #[test]
    fn domain_is_unit_interval() {
        let domain = sample().domain();
        assert!((domain.t_min).abs() < TOLERANCE);
        assert!((domain.t_max - 1.0).abs() < TOLERANCE);
    }
}
