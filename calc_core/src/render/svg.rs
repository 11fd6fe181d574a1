//! SVG deflection curve rendering.
//!
//! Produces a standalone SVG document of the beam's deflection profile:
//! the undeflected axis, fixed-support blocks at both ends, the midspan
//! load arrow, and the sampled curve with a filled area beneath it. The
//! curve is scaled vertically so the peak deflection fits inside the
//! drawing regardless of its physical magnitude; a scale-reference label
//! carries the real value.

use std::fmt::Write;

use crate::calculations::{BeamInput, CalculationResult};
use crate::units::format_deflection;

const SVG_WIDTH: f64 = 700.0;
const SVG_HEIGHT: f64 = 220.0;
const BASELINE_Y: f64 = SVG_HEIGHT / 2.0;

/// Vertical headroom reserved above and below the curve, in pixels
const CURVE_MARGIN: f64 = 40.0;

fn flat_baseline_path() -> String {
    format!("M 0 {BASELINE_Y} L {SVG_WIDTH} {BASELINE_Y}")
}

/// Build the curve path and the matching closed area path.
///
/// Returns the flat baseline when the result carries no profile.
fn curve_paths(result: &CalculationResult) -> (String, String, f64) {
    let points = &result.deflection_points;

    if !result.is_valid || points.is_empty() {
        let flat = flat_baseline_path();
        let area = format!("{flat} L {SVG_WIDTH} {BASELINE_Y} L 0 {BASELINE_Y} Z");
        return (flat, area, 0.0);
    }

    let max_abs = points
        .iter()
        .map(|point| point.deflection.abs())
        .fold(result.max_deflection.abs(), f64::max);

    let vertical_scale = if max_abs > 0.0 {
        (SVG_HEIGHT / 2.0 - CURVE_MARGIN) / max_abs
    } else {
        0.0
    };

    let mut curve = String::new();
    for (index, point) in points.iter().enumerate() {
        let x = point.position * SVG_WIDTH;
        let y = BASELINE_Y + point.deflection * vertical_scale;
        if index > 0 {
            curve.push(' ');
        }
        let command = if index == 0 { 'M' } else { 'L' };
        let _ = write!(curve, "{} {:.2} {:.2}", command, x, y);
    }

    let area = format!("{curve} L {SVG_WIDTH} {BASELINE_Y} L 0 {BASELINE_Y} Z");
    (curve, area, max_abs)
}

/// Render the deflection visualization as a standalone SVG document.
///
/// Invalid or empty results draw the frame with an undeflected beam and
/// omit the load arrow and area fill.
pub fn deflection_svg(input: &BeamInput, result: &CalculationResult) -> String {
    let (curve, area, max_abs) = curve_paths(result);
    let has_deflection = result.is_valid && max_abs > 0.0;

    let mut out = String::new();

    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {SVG_WIDTH} {SVG_HEIGHT}\" \
         role=\"img\" aria-label=\"Beam deflection curve\">"
    );

    let _ = writeln!(out, "  <defs>");
    let _ = writeln!(
        out,
        "    <linearGradient id=\"deflection-fill\" x1=\"0\" x2=\"0\" y1=\"0\" y2=\"1\">"
    );
    let _ = writeln!(
        out,
        "      <stop offset=\"0%\" stop-color=\"#bfdbfe\" stop-opacity=\"0.7\"/>"
    );
    let _ = writeln!(
        out,
        "      <stop offset=\"100%\" stop-color=\"#93c5fd\" stop-opacity=\"0.2\"/>"
    );
    let _ = writeln!(out, "    </linearGradient>");
    let _ = writeln!(out, "  </defs>");

    // Undeflected beam band and dashed reference axis
    let _ = writeln!(
        out,
        "  <rect x=\"0\" y=\"{}\" width=\"{SVG_WIDTH}\" height=\"12\" fill=\"#1f2937\" opacity=\"0.12\"/>",
        BASELINE_Y - 6.0
    );
    let _ = writeln!(
        out,
        "  <line x1=\"0\" y1=\"{BASELINE_Y}\" x2=\"{SVG_WIDTH}\" y2=\"{BASELINE_Y}\" \
         stroke=\"#1f2937\" stroke-width=\"2\" stroke-dasharray=\"6 6\" opacity=\"0.4\"/>"
    );

    // Fixed supports at both ends
    let _ = writeln!(
        out,
        "  <rect x=\"0\" y=\"{}\" width=\"20\" height=\"80\" fill=\"#9ca3af\" opacity=\"0.35\"/>",
        BASELINE_Y - 40.0
    );
    let _ = writeln!(
        out,
        "  <rect x=\"{}\" y=\"{}\" width=\"20\" height=\"80\" fill=\"#9ca3af\" opacity=\"0.35\"/>",
        SVG_WIDTH - 20.0,
        BASELINE_Y - 40.0
    );

    // Midspan load arrow, only for a valid result
    if result.is_valid {
        let mid = SVG_WIDTH / 2.0;
        let _ = writeln!(
            out,
            "  <line x1=\"{mid}\" y1=\"{}\" x2=\"{mid}\" y2=\"{}\" stroke=\"#ef4444\" \
             stroke-width=\"3\" stroke-linecap=\"round\"/>",
            BASELINE_Y - 70.0,
            BASELINE_Y - 10.0
        );
        let _ = writeln!(
            out,
            "  <polygon points=\"{},{} {},{} {},{}\" fill=\"#ef4444\"/>",
            mid - 8.0,
            BASELINE_Y - 10.0,
            mid + 8.0,
            BASELINE_Y - 10.0,
            mid,
            BASELINE_Y + 4.0
        );
    }

    let _ = writeln!(
        out,
        "  <path d=\"{area}\" fill=\"url(#deflection-fill)\" opacity=\"{}\"/>",
        if has_deflection { 0.9 } else { 0.0 }
    );
    let _ = writeln!(
        out,
        "  <path d=\"{curve}\" fill=\"none\" stroke=\"#2563eb\" stroke-width=\"4\" \
         stroke-linecap=\"round\"/>"
    );

    // Labels: span and load at the top, scale reference at the bottom
    let _ = writeln!(
        out,
        "  <text x=\"8\" y=\"16\" font-size=\"11\" fill=\"#1f2937\">Span: {:.2} {}  Load: {:.2} {}</text>",
        input.span_length,
        input.units.span_label(),
        input.load,
        input.units.load_label()
    );
    if has_deflection {
        let _ = writeln!(
            out,
            "  <text x=\"8\" y=\"{}\" font-size=\"10\" fill=\"#9ca3af\">Max deflection: {} (scale reference: {:.2e})</text>",
            SVG_HEIGHT - 8.0,
            format_deflection(result.max_deflection, result.units),
            max_abs
        );
    }

    let _ = writeln!(out, "</svg>");
    out
}
