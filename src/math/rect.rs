use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

/// An axis-aligned rectangle given by its corner bounds.
///
/// The coordinate system follows the host renderer: `min_y` is the visual top
/// and `max_y` the visual bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Rect {
    /// Creates a rectangle from its bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if any bound is not finite, or if the width or height
    /// is zero or negative.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        if !(min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite()) {
            return Err(GeometryError::Degenerate("rectangle bounds must be finite".into()).into());
        }
        if max_x - min_x < TOLERANCE || max_y - min_y < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "rectangle width and height must be positive".into(),
            )
            .into());
        }
        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// Creates a rectangle from its top-left origin and size.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting bounds are degenerate.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        Self::new(x, y, x + width, y + height)
    }

    /// Returns the left bound.
    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Returns the top bound.
    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Returns the right bound.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Returns the bottom bound.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the horizontal midpoint.
    #[must_use]
    pub fn mid_x(&self) -> f64 {
        f64::midpoint(self.min_x, self.max_x)
    }

    /// Returns the vertical midpoint.
    #[must_use]
    pub fn mid_y(&self) -> f64 {
        f64::midpoint(self.min_y, self.max_y)
    }

    /// Returns whether `point` lies within the bounds (inclusive).
    #[must_use]
    pub fn contains(&self, point: Point2) -> bool {
        self.min_x <= point.x && point.x <= self.max_x && self.min_y <= point.y && point.y <= self.max_y
    }

    /// Returns the rectangle grown by `margin` on all four sides.
    ///
    /// `margin` must be non-negative; shrinking is not supported.
    #[must_use]
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}
