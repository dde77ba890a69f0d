pub mod curve;
mod indicator;
mod progress;

pub use curve::{CubicSegment, Curve, CurveDomain, LineSegment};
pub use indicator::{ProgressCurve, CONTROL_INSET_RATIO};
pub use progress::Progress;
