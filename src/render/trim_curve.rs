use crate::geometry::curve::CubicSegment;
use crate::geometry::{Progress, ProgressCurve};

use super::Path;

/// Trims the indicator curve to the portion covered by a progress value.
///
/// The trim is parametric: each segment occupies half of the progress range,
/// and the active segment is cut with de Casteljau's algorithm. Progress 0
/// yields an empty path; progress 1 the full two-segment path.
#[derive(Debug, Clone, Copy)]
pub struct TrimCurve {
    curve: ProgressCurve,
    progress: Progress,
}

impl TrimCurve {
    /// Creates a new trim operation.
    #[must_use]
    pub fn new(curve: ProgressCurve, progress: Progress) -> Self {
        Self { curve, progress }
    }

    /// Executes the trim, producing the filled sub-path.
    #[must_use]
    pub fn execute(&self) -> Path {
        let p = self.progress.value();
        let mut path = Path::default();

        if p <= 0.0 {
            return path;
        }

        if p < 0.5 {
            let (head, _) = self.curve.left().split(p * 2.0);
            push_segment(&mut path, head);
            return path;
        }

        push_segment(&mut path, self.curve.left());
        if p > 0.5 {
            // A split at t=1 would rebuild the end point through lerps;
            // full progress must reproduce the segment exactly.
            let head = if p >= 1.0 {
                self.curve.right()
            } else {
                self.curve.right().split((p - 0.5) * 2.0).0
            };
            push_segment(&mut path, head);
        }
        path
    }
}

fn push_segment(path: &mut Path, segment: CubicSegment) {
    if path.is_empty() {
        path.move_to(segment.p0());
    }
    path.cubic_to(segment.p1(), segment.p2(), segment.p3());
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point2, Rect};
    use crate::render::PathCommand;
    use approx::assert_abs_diff_eq;

    fn curve() -> ProgressCurve {
        ProgressCurve::new(Rect::new(0.0, 0.0, 100.0, 100.0).unwrap())
    }

    #[test]
    fn zero_progress_is_empty() {
        let path = TrimCurve::new(curve(), Progress::ZERO).execute();
        assert!(path.is_empty());
    }

    #[test]
    fn full_progress_is_the_whole_curve() {
        let curve = curve();
        let path = TrimCurve::new(curve, Progress::FULL).execute();
        assert_eq!(
            path.commands,
            vec![
                PathCommand::MoveTo(curve.left().p0()),
                PathCommand::CubicTo {
                    control1: curve.left().p1(),
                    control2: curve.left().p2(),
                    end: curve.left().p3(),
                },
                PathCommand::CubicTo {
                    control1: curve.right().p1(),
                    control2: curve.right().p2(),
                    end: curve.right().p3(),
                },
            ]
        );
    }

    #[test]
    fn below_half_uses_one_cubic() {
        let path = TrimCurve::new(curve(), Progress::new(0.35).unwrap()).execute();
        assert_eq!(path.commands.len(), 2);
        assert!(matches!(path.commands[0], PathCommand::MoveTo(_)));
        assert!(matches!(path.commands[1], PathCommand::CubicTo { .. }));
    }

    #[test]
    fn half_progress_is_exactly_the_left_segment() {
        let curve = curve();
        let path = TrimCurve::new(curve, Progress::HALF).execute();
        assert_eq!(path.commands.len(), 2);
        assert_eq!(path.end_point(), Some(curve.left().p3()));
    }

    #[test]
    fn above_half_uses_two_cubics() {
        let path = TrimCurve::new(curve(), Progress::new(0.75).unwrap()).execute();
        assert_eq!(path.commands.len(), 3);
    }

    #[test]
    fn trim_end_matches_marker_position() {
        let curve = curve();
        for p in [0.1, 0.35, 0.5, 0.65, 0.9, 1.0] {
            let progress = Progress::new(p).unwrap();
            let path = TrimCurve::new(curve, progress).execute();
            let end = path.end_point().unwrap();
            let marker = curve.marker_position(progress);
            assert_abs_diff_eq!(end, marker, epsilon = 1e-9);
        }
    }

    #[test]
    fn path_starts_at_the_bottom_left_corner() {
        let path = TrimCurve::new(curve(), Progress::new(0.2).unwrap()).execute();
        assert_eq!(path.commands[0], PathCommand::MoveTo(Point2::new(0.0, 100.0)));
    }
}
