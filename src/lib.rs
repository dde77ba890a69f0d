pub mod error;
pub mod geometry;
pub mod math;
pub mod render;

pub use error::{CurvemarkError, Result};
