use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{Curve, CurveDomain};

/// A straight line segment between two points.
///
/// The parametric form is `P(t) = start + t * (end - start)` for `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    start: Point2,
    end: Point2,
}

impl LineSegment {
    /// Creates a new line segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

impl Curve for LineSegment {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        Ok(self.start + (self.end - self.start) * t)
    }

    fn tangent(&self, _t: f64) -> Result<Vector2> {
        let direction = self.end - self.start;
        let len = direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(direction / len)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_interpolates_endpoints() {
        let seg = LineSegment::new(Point2::new(0.0, 50.0), Point2::new(100.0, 50.0));
        assert_eq!(seg.evaluate(0.0).unwrap(), seg.start());
        assert_eq!(seg.evaluate(1.0).unwrap(), seg.end());
        let mid = seg.evaluate(0.5).unwrap();
        assert!((mid.x - 50.0).abs() < TOLERANCE);
        assert!((mid.y - 50.0).abs() < TOLERANCE);
    }

    #[test]
    fn tangent_is_unit() {
        let seg = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        let t = seg.tangent(0.5).unwrap();
        assert!((t.norm() - 1.0).abs() < TOLERANCE);
        assert!((t.x - 0.6).abs() < TOLERANCE);
        assert!((t.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn degenerate_tangent_fails() {
        let p = Point2::new(1.0, 2.0);
        let seg = LineSegment::new(p, p);
        assert!(seg.tangent(0.0).is_err());
        assert!((seg.length()).abs() < TOLERANCE);
    }
}
