//! # Cross-Section Property Formulas
//!
//! Geometric properties of the rectangular cross-section used for
//! custom beams. Standard shapes take their properties from the
//! reference tables instead (see [`crate::sections`]).
//!
//! ## Notation
//!
//! - `I` = Moment of inertia (second moment of area)
//! - `c` = Distance from neutral axis to extreme fiber
//! - `b` = Width of section
//! - `h` = Height (depth) of section
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Chapter 3

/// Moment of inertia for a rectangular section about its centroidal
/// strong axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │ ════════│ ← neutral axis at h/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bh³/12
///
/// # Example
/// ```rust
/// use calc_core::equations::section::rectangular_moment_of_inertia;
///
/// // 0.1 m x 0.2 m rectangle
/// let i = rectangular_moment_of_inertia(0.1, 0.2);
/// assert!((i - 6.6667e-5).abs() < 1e-9);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Distance from the neutral axis to the outer fiber of a symmetric
/// section
///
/// # Formula
/// c = h/2
///
/// Holds for any section symmetric about its bending axis; the custom
/// beam path uses it even when the caller overrides I directly.
#[inline]
pub fn outer_fiber_distance(h: f64) -> f64 {
    h / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_moment_of_inertia() {
        // I = 0.1 * 0.2³ / 12 = 6.667e-5 m⁴
        let i = rectangular_moment_of_inertia(0.1, 0.2);
        assert!((i - 0.1 * 0.008 / 12.0).abs() < 1e-12, "I = {}", i);
    }

    #[test]
    fn test_outer_fiber_distance() {
        assert_eq!(outer_fiber_distance(0.2), 0.1);
        assert_eq!(outer_fiber_distance(9.25), 4.625);
    }

    #[test]
    fn test_inertia_scales_with_cube_of_height() {
        let base = rectangular_moment_of_inertia(1.0, 1.0);
        let doubled = rectangular_moment_of_inertia(1.0, 2.0);
        assert!((doubled / base - 8.0).abs() < 1e-12);
    }
}
