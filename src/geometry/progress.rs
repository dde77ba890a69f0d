use crate::error::{GeometryError, Result};

/// Normalized completion fraction in `[0, 1]`.
///
/// Construction validates the range once, so the geometry functions never see
/// NaN or out-of-range values. Callers that prefer clamping over rejection use
/// [`Progress::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Progress(f64);

impl Progress {
    /// No completion; the marker sits at the bottom-left corner.
    pub const ZERO: Progress = Progress(0.0);

    /// Halfway; the marker sits exactly on the shared segment midpoint.
    pub const HALF: Progress = Progress(0.5);

    /// Full completion; the marker sits at the bottom-right corner.
    pub const FULL: Progress = Progress(1.0);

    /// Creates a progress value.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is NaN or outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "progress",
                value,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        Ok(Self(value))
    }

    /// Creates a progress value by clamping to `[0, 1]`. NaN maps to 0.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw fraction.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}
