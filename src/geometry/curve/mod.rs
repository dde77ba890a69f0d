mod cubic;
mod line;

pub use cubic::CubicSegment;
pub use line::LineSegment;

use crate::error::Result;
use crate::math::{Point2, Vector2};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// Trait for parametric curves in the widget plane.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 2D point.
    ///
    /// Parameters outside the domain extrapolate rather than fail; clamping
    /// is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn evaluate(&self, t: f64) -> Result<Point2>;

    /// Computes the unit tangent vector at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tangent is degenerate.
    fn tangent(&self, t: f64) -> Result<Vector2>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;
}
