//! # Result Rendering
//!
//! Presentation of a [`CalculationResult`](crate::calculations::CalculationResult):
//! a plain-text report and an SVG deflection curve. Rendering is
//! string-building only; nothing here computes, and nothing here touches
//! the filesystem (callers decide where the output goes).
//!
//! ## Modules
//!
//! - [`text`] - Plain-text result report for terminals
//! - [`svg`] - Standalone SVG document of the deflection curve

pub mod svg;
pub mod text;

pub use svg::deflection_svg;
pub use text::report;
