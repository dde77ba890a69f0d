use crate::error::Result;
use crate::geometry::curve::{CubicSegment, Curve, LineSegment};
use crate::geometry::Progress;
use crate::math::{Point2, Rect, Vector2};

/// Fraction of the rectangle width by which the inner control points are
/// inset from the segment endpoints.
///
/// Fixed design constant: 1/5 produces the intended smooth dip. Changing it
/// changes the widget's shape.
pub const CONTROL_INSET_RATIO: f64 = 1.0 / 5.0;

/// The two-segment "dip then rise" curve of the progress indicator.
///
/// The left segment runs from the bottom-left corner of the rectangle up to
/// the top midpoint, the right segment from the top midpoint back down to the
/// bottom-right corner. The curve is rebuilt from the rectangle on every
/// layout change; nothing is cached between frames.
#[derive(Debug, Clone, Copy)]
pub struct ProgressCurve {
    rect: Rect,
    left: CubicSegment,
    right: CubicSegment,
}

impl ProgressCurve {
    /// Builds the curve for a bounding rectangle.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        let inset = rect.width() * CONTROL_INSET_RATIO;
        let left = CubicSegment::new(
            Point2::new(rect.min_x(), rect.max_y()),
            Point2::new(rect.min_x() + inset, rect.max_y()),
            Point2::new(rect.mid_x() - inset, rect.min_y()),
            Point2::new(rect.mid_x(), rect.min_y()),
        );
        let right = CubicSegment::new(
            Point2::new(rect.mid_x(), rect.min_y()),
            Point2::new(rect.mid_x() + inset, rect.min_y()),
            Point2::new(rect.max_x() - inset, rect.max_y()),
            Point2::new(rect.max_x(), rect.max_y()),
        );
        Self { rect, left, right }
    }

    /// Returns the bounding rectangle the curve was built from.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns the left segment (bottom-left corner to top midpoint).
    #[must_use]
    pub fn left(&self) -> CubicSegment {
        self.left
    }

    /// Returns the right segment (top midpoint to bottom-right corner).
    #[must_use]
    pub fn right(&self) -> CubicSegment {
        self.right
    }

    /// Returns the marker position for `progress`.
    ///
    /// The left segment covers `[0, 0.5)` with local parameter `t = 2p`, the
    /// right segment `(0.5, 1]` with `t = 2p − 1`. Exactly 0.5 returns the
    /// shared midpoint directly instead of re-evaluating a segment boundary.
    #[must_use]
    pub fn marker_position(&self, progress: Progress) -> Point2 {
        let p = progress.value();
        if p < 0.5 {
            self.left.point_at(p * 2.0)
        } else if p > 0.5 {
            self.right.point_at((p - 0.5) * 2.0)
        } else {
            Point2::new(self.rect.mid_x(), self.rect.min_y())
        }
    }

    /// Returns the unit tangent of the curve at the marker.
    ///
    /// Follows the same branch structure as [`marker_position`]; at exactly
    /// 0.5 the left segment's end tangent is used (both segments are
    /// horizontal at the joint).
    ///
    /// # Errors
    ///
    /// Returns an error if the tangent is degenerate at the marker.
    ///
    /// [`marker_position`]: ProgressCurve::marker_position
    pub fn marker_tangent(&self, progress: Progress) -> Result<Vector2> {
        let p = progress.value();
        if p < 0.5 {
            self.left.tangent(p * 2.0)
        } else if p > 0.5 {
            self.right.tangent((p - 0.5) * 2.0)
        } else {
            self.left.tangent(1.0)
        }
    }

    /// Returns the static horizontal reference line drawn beneath the curve,
    /// from `(min_x, mid_y)` to `(max_x, mid_y)`.
    #[must_use]
    pub fn center_line(&self) -> LineSegment {
        LineSegment::new(
            Point2::new(self.rect.min_x(), self.rect.mid_y()),
            Point2::new(self.rect.max_x(), self.rect.mid_y()),
        )
    }
}
