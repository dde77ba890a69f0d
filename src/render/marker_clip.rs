use crate::math::{Point2, Rect};

use super::ClipRegion;

/// Radius of the clip hole punched around the marker.
///
/// Must match the rendered marker circle's footprint ([`MARKER_DIAMETER`]);
/// the hole is exactly the circle the host draws on top.
pub const MARKER_RADIUS: f64 = 10.0;

/// Diameter of the rendered marker circle.
pub const MARKER_DIAMETER: f64 = 2.0 * MARKER_RADIUS;

/// Margin added around the frame so stroke caps at the frame edge are not
/// clipped away.
pub const CLIP_MARGIN: f64 = 5.0;

/// Builds the even-odd clip region that hides the curve underneath the
/// marker circle.
#[derive(Debug, Clone, Copy)]
pub struct MarkerClip {
    frame: Rect,
    marker: Point2,
}

impl MarkerClip {
    /// Creates a new clip operation for a frame and marker position.
    #[must_use]
    pub fn new(frame: Rect, marker: Point2) -> Self {
        Self { frame, marker }
    }

    /// Executes the operation, returning the clip descriptor.
    #[must_use]
    pub fn execute(&self) -> ClipRegion {
        ClipRegion {
            canvas: self.frame.expanded(CLIP_MARGIN),
            cutout_center: self.marker,
            cutout_radius: MARKER_RADIUS,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn frame() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0).unwrap()
    }

    #[test]
    fn cutout_matches_marker_footprint() {
        let region = MarkerClip::new(frame(), Point2::new(50.0, 20.0)).execute();
        assert!((region.cutout_radius - MARKER_RADIUS).abs() < f64::EPSILON);
        assert!((MARKER_DIAMETER - 2.0 * region.cutout_radius).abs() < f64::EPSILON);
        assert_eq!(region.cutout_center, Point2::new(50.0, 20.0));
    }

    #[test]
    fn excludes_points_under_the_marker() {
        let center = Point2::new(50.0, 50.0);
        let region = MarkerClip::new(frame(), center).execute();
        assert!(!region.allows(center));
        assert!(!region.allows(Point2::new(50.0, 59.9)));
        assert!(region.allows(Point2::new(50.0, 60.1)));
        assert!(region.allows(Point2::new(10.0, 10.0)));
    }

    #[test]
    fn cutout_size_is_independent_of_frame_size() {
        let small = MarkerClip::new(
            Rect::new(0.0, 0.0, 10.0, 10.0).unwrap(),
            Point2::new(5.0, 5.0),
        )
        .execute();
        let large = MarkerClip::new(
            Rect::new(0.0, 0.0, 10_000.0, 10_000.0).unwrap(),
            Point2::new(5.0, 5.0),
        )
        .execute();
        assert!((small.cutout_radius - large.cutout_radius).abs() < f64::EPSILON);
    }

    #[test]
    fn canvas_carries_the_stroke_margin() {
        let region = MarkerClip::new(frame(), Point2::new(0.0, 0.0)).execute();
        assert!(region.canvas.contains(Point2::new(-CLIP_MARGIN, -CLIP_MARGIN)));
        assert!(region
            .canvas
            .contains(Point2::new(100.0 + CLIP_MARGIN, 100.0 + CLIP_MARGIN)));
        assert!(!region.canvas.contains(Point2::new(-CLIP_MARGIN - 0.1, 0.0)));
    }

    #[test]
    fn marker_on_the_edge_still_punches_a_hole() {
        let region = MarkerClip::new(frame(), Point2::new(0.0, 100.0)).execute();
        // Inside the hole but within the padded canvas.
        assert!(!region.allows(Point2::new(-4.0, 100.0)));
        assert!(region.allows(Point2::new(20.0, 100.0)));
    }
}
