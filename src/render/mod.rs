mod marker_clip;
mod trim_curve;

pub use marker_clip::{MarkerClip, CLIP_MARGIN, MARKER_DIAMETER, MARKER_RADIUS};
pub use trim_curve::TrimCurve;

use crate::math::{Point2, Rect};

/// A single path drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Begins a new subpath at the given point.
    MoveTo(Point2),
    /// Straight line from the current point.
    LineTo(Point2),
    /// Cubic bezier from the current point with two control points.
    CubicTo {
        /// First control point.
        control1: Point2,
        /// Second control point.
        control2: Point2,
        /// End point of the curve piece.
        end: Point2,
    },
}

/// An ordered list of drawing commands for the host renderer to stroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    /// The ordered drawing commands.
    pub commands: Vec<PathCommand>,
}

impl Path {
    /// Returns whether the path has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the end point of the last command, if any.
    #[must_use]
    pub fn end_point(&self) -> Option<Point2> {
        self.commands.last().map(|command| match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::CubicTo { end, .. } => end,
        })
    }

    /// Appends a `MoveTo` command.
    pub fn move_to(&mut self, point: Point2) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    /// Appends a `LineTo` command.
    pub fn line_to(&mut self, point: Point2) {
        self.commands.push(PathCommand::LineTo(point));
    }

    /// Appends a `CubicTo` command.
    pub fn cubic_to(&mut self, control1: Point2, control2: Point2, end: Point2) {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            end,
        });
    }
}

/// A clip region: the canvas with a circular hole punched at the marker.
///
/// Meant to be filled with the even-odd rule: everything inside `canvas`
/// draws except the cutout circle, so strokes appear to pass behind the
/// marker circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRegion {
    /// Outer bounds within which drawing is allowed.
    pub canvas: Rect,
    /// Center of the circular cutout.
    pub cutout_center: Point2,
    /// Radius of the circular cutout.
    pub cutout_radius: f64,
}

impl ClipRegion {
    /// Returns whether drawing at `point` is allowed under the even-odd rule.
    #[must_use]
    pub fn allows(&self, point: Point2) -> bool {
        let offset = point - self.cutout_center;
        let inside_cutout = offset.norm_squared() < self.cutout_radius * self.cutout_radius;
        self.canvas.contains(point) && !inside_cutout
    }
}
