//! Flattening demo: renders the reference curves as SVG.
//!
//! Usage:
//! ```text
//! cargo run --example flatten > curves.svg            # default scale 1
//! cargo run --example flatten -- 4 > curves.svg       # flatten for 4x zoom
//! RUST_LOG=adaptive_bezier=debug cargo run --example flatten
//! ```

use std::fmt::Write as _;

use adaptive_bezier::geometry::{CubicBezier, QuadraticBezier};
use adaptive_bezier::tessellation::{CubicFlattener, Polyline, QuadraticFlattener};

const CANVAS: f64 = 1024.0;
const MARKER_RADIUS: f64 = 3.0;

fn main() {
    // Default: WARN for everything, INFO for the library and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=adaptive_bezier=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("flatten=info".parse().unwrap_or_default())
        .add_directive("adaptive_bezier=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let scale = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<f64>().ok())
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or(1.0);

    let quad = QuadraticBezier::from_coords([-300.0, 0.0], [0.0, 500.0], [300.0, 200.0]);
    let cubic =
        CubicBezier::from_coords([-300.0, 0.0], [400.0, 300.0], [-100.0, 60.0], [300.0, 10.0]);

    let quad_points = QuadraticFlattener::default().flatten(&quad, scale);
    let cubic_points = CubicFlattener::default().flatten(&cubic, scale);
    tracing::info!(
        scale,
        quadratic = quad_points.len(),
        cubic = cubic_points.len(),
        "flattened reference curves"
    );

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CANVAS}" height="{CANVAS}">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="black"/>"#);
    write_curve(&mut svg, &quad_points, (CANVAS / 2.0, CANVAS / 2.0 - 400.0), "lime", "Quadratic Curve");
    write_curve(&mut svg, &cubic_points, (CANVAS / 2.0, CANVAS / 2.0 + 200.0), "cyan", "Cubic Curve");
    svg.push_str("</svg>\n");

    print!("{svg}");
}

/// Writes one flattened curve as a stroked polyline with a marker per vertex.
fn write_curve(svg: &mut String, polyline: &Polyline, origin: (f64, f64), color: &str, label: &str) {
    let coords = polyline
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    let _ = writeln!(svg, r#"<g transform="translate({} {})">"#, origin.0, origin.1);
    let _ = writeln!(
        svg,
        r#"<polyline points="{coords}" fill="none" stroke="{color}" stroke-width="3"/>"#
    );
    for p in polyline {
        let _ = writeln!(
            svg,
            r#"<circle cx="{}" cy="{}" r="{MARKER_RADIUS}" fill="red"/>"#,
            p.x, p.y
        );
    }
    let _ = writeln!(
        svg,
        r#"<text x="-60" y="380" fill="white" font-size="24" font-family="serif">{label} ({} points)</text>"#,
        polyline.len()
    );
    svg.push_str("</g>\n");
}
