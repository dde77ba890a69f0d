//! Curvemark Debug Dump — renders the indicator geometry as an SVG document.
//!
//! Usage:
//! ```text
//! cargo run --example debug               # default progress (0.35)
//! cargo run --example debug -- 0.8        # custom progress value
//! cargo run --example debug -- 0.8 > out.svg
//! ```
//!
//! The host widget is simulated by a fixed 155x75 frame; the track, the
//! filled portion, the marker circle, and the center line are emitted as
//! separate SVG elements so each piece can be inspected on its own.

use curvemark::geometry::{Progress, ProgressCurve};
use curvemark::math::Rect;
use curvemark::render::{ClipRegion, MarkerClip, Path, PathCommand, TrimCurve, MARKER_RADIUS};

fn main() -> curvemark::Result<()> {
    // Default: WARN for everything, INFO for curvemark.
    // Override with RUST_LOG env var (e.g. RUST_LOG=curvemark=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("debug=info".parse().unwrap_or_default())
        .add_directive("curvemark=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let raw = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<f64>().ok())
        .unwrap_or(0.35);
    let progress = Progress::new(raw)?;

    let frame = Rect::from_origin_size(0.0, 0.0, 155.0, 75.0)?;
    let curve = ProgressCurve::new(frame);
    let marker = curve.marker_position(progress);
    let track = TrimCurve::new(curve, Progress::FULL).execute();
    let filled = TrimCurve::new(curve, progress).execute();
    let clip = MarkerClip::new(frame, marker).execute();

    tracing::info!(
        progress = raw,
        marker_x = marker.x,
        marker_y = marker.y,
        "computed indicator geometry"
    );

    let canvas = clip.canvas;
    println!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        canvas.min_x(),
        canvas.min_y(),
        canvas.width(),
        canvas.height()
    );
    println!(r#"  <defs><clipPath id="marker-hole" clip-rule="evenodd"><path d="{}"/></clipPath></defs>"#,
        clip_data(&clip)
    );

    let line = curve.center_line();
    println!(
        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="gray" stroke-width="4"/>"#,
        line.start().x,
        line.start().y,
        line.end().x,
        line.end().y
    );
    println!(
        r#"  <path d="{}" fill="none" stroke="gray" stroke-width="4" clip-path="url(#marker-hole)"/>"#,
        path_data(&track)
    );
    println!(
        r#"  <path d="{}" fill="none" stroke="blue" stroke-width="4" clip-path="url(#marker-hole)"/>"#,
        path_data(&filled)
    );
    println!(
        r#"  <circle cx="{}" cy="{}" r="{MARKER_RADIUS}" fill="none" stroke="blue" stroke-width="4"/>"#,
        marker.x, marker.y
    );
    println!("</svg>");
    Ok(())
}

/// Formats a command list as an SVG path `d` attribute.
fn path_data(path: &Path) -> String {
    let mut data = String::new();
    for command in &path.commands {
        if !data.is_empty() {
            data.push(' ');
        }
        match *command {
            PathCommand::MoveTo(p) => data.push_str(&format!("M {} {}", p.x, p.y)),
            PathCommand::LineTo(p) => data.push_str(&format!("L {} {}", p.x, p.y)),
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => data.push_str(&format!(
                "C {} {}, {} {}, {} {}",
                control1.x, control1.y, control2.x, control2.y, end.x, end.y
            )),
        }
    }
    data
}

/// Formats the clip region (canvas rect plus cutout circle) as a `d` attribute
/// to be filled with the even-odd rule.
fn clip_data(clip: &ClipRegion) -> String {
    let c = clip.canvas;
    let center = clip.cutout_center;
    let r = clip.cutout_radius;
    format!(
        "M {} {} H {} V {} H {} Z M {} {} a {r} {r} 0 1 0 {} 0 a {r} {r} 0 1 0 {} 0 Z",
        c.min_x(),
        c.min_y(),
        c.max_x(),
        c.max_y(),
        c.min_x(),
        center.x - r,
        center.y,
        2.0 * r,
        -2.0 * r
    )
}
