//! # Fixed-Fixed Beam Formulas
//!
//! Equations for a doubly-fixed beam carrying a single point load at
//! midspan. Both ends are rigidly restrained against rotation and
//! translation.
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `x` = Position along beam from the left support
//! - `P` = Point load magnitude
//! - `M` = Bending moment
//! - `σ` = Bending stress
//! - `δ` = Deflection
//! - `E` = Modulus of elasticity
//! - `I` = Moment of inertia
//! - `c` = Distance from neutral axis to outer fiber
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Moment: Positive causes tension on bottom (sagging)
//! - Deflection: Positive downward
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - Structural Analysis by R.C. Hibbeler

/// Maximum bending moment for a fixed-fixed beam with a point load at
/// midspan
///
/// ```text
///            P
///            ↓
///    ▌───────┬───────▐
///    ▌       │       ▐
///     ←──────L──────→
/// ```
///
/// # Formula
/// M = PL/8
///
/// The fixed ends share the moment demand with midspan: the end moments
/// and the midspan moment all reach PL/8 in magnitude (compare PL/4 for
/// the simply-supported case).
#[inline]
pub fn fixed_fixed_midspan_point_moment(p: f64, l: f64) -> f64 {
    p * l / 8.0
}

/// Bending stress at the outer fiber
///
/// # Formula
/// σ = Mc/I
///
/// Returns 0 when `I = 0` rather than dividing by zero, so the formula
/// stays total under a caller-supplied zero moment of inertia.
#[inline]
pub fn bending_stress(m: f64, c: f64, i: f64) -> f64 {
    if i == 0.0 {
        return 0.0;
    }
    m * c / i
}

/// Deflection at position x for a fixed-fixed beam with a midspan point
/// load
///
/// The curve is symmetric about midspan, so positions past L/2 are
/// mirrored onto the left half before evaluating.
///
/// # Formula
///
/// For x' = min(x, L − x):
/// ```text
/// δ(x) = P·x'·(3L²/4 − x'²) / (48EI)
/// ```
///
/// Zero at both supports, peak at midspan (the cubic's derivative
/// 3(L²/4 − x'²) stays non-negative on the half-span).
///
/// # Arguments
/// * `p` - Point load (positive downward)
/// * `l` - Span length
/// * `x` - Position along the span, 0 ≤ x ≤ L
/// * `e` - Modulus of elasticity
/// * `i` - Moment of inertia
///
/// # Returns
/// Deflection (positive downward)
#[inline]
pub fn fixed_fixed_midspan_point_deflection(p: f64, l: f64, x: f64, e: f64, i: f64) -> f64 {
    let local_x = if x <= l / 2.0 { x } else { l - x };
    p * local_x * (3.0 * l * l / 4.0 - local_x * local_x) / (48.0 * e * i)
}

/// Maximum deflection for a fixed-fixed beam with a midspan point load
///
/// # Formula
/// δ_max = PL³ / (192EI)   at x = L/2
///
/// One quarter of the simply-supported value PL³/48EI; the fixed ends
/// stiffen the span considerably.
#[inline]
pub fn fixed_fixed_midspan_point_max_deflection(p: f64, l: f64, e: f64, i: f64) -> f64 {
    p * l.powi(3) / (192.0 * e * i)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 1e-9
    }

    #[test]
    fn test_moment_is_pl_over_8() {
        // 1000 N over 4 m: M = 1000 * 4 / 8 = 500 N·m
        let m = fixed_fixed_midspan_point_moment(1000.0, 4.0);
        assert!(approx_eq(m, 500.0), "M = {} (expected 500)", m);
    }

    #[test]
    fn test_bending_stress() {
        // σ = Mc/I = 500 * 0.1 / 6.6667e-5 = 750000 Pa
        let sigma = bending_stress(500.0, 0.1, 0.1 * 0.2_f64.powi(3) / 12.0);
        assert!(
            (sigma - 750_000.0).abs() < 1.0,
            "σ = {} (expected 750000)",
            sigma
        );
    }

    #[test]
    fn test_bending_stress_zero_inertia_guard() {
        assert_eq!(bending_stress(500.0, 0.1, 0.0), 0.0);
    }

    #[test]
    fn test_deflection_zero_at_supports() {
        let d0 = fixed_fixed_midspan_point_deflection(1000.0, 4.0, 0.0, 2e11, 6.667e-5);
        let dl = fixed_fixed_midspan_point_deflection(1000.0, 4.0, 4.0, 2e11, 6.667e-5);
        assert!(approx_eq(d0, 0.0), "δ(0) = {}", d0);
        assert!(approx_eq(dl, 0.0), "δ(L) = {}", dl);
    }

    #[test]
    fn test_deflection_peak_matches_closed_form() {
        let (p, l, e, i) = (1000.0, 4.0, 2e11, 6.667e-5);
        let at_midspan = fixed_fixed_midspan_point_deflection(p, l, l / 2.0, e, i);
        let max = fixed_fixed_midspan_point_max_deflection(p, l, e, i);
        assert!(
            approx_eq(at_midspan, max),
            "δ(L/2) = {}, δ_max = {}",
            at_midspan,
            max
        );
    }

    #[test]
    fn test_deflection_symmetric_about_midspan() {
        let (p, l, e, i) = (500.0, 10.0, 29e6, 199.0);
        for frac in [0.1, 0.25, 0.4] {
            let left = fixed_fixed_midspan_point_deflection(p, l, l * frac, e, i);
            let right = fixed_fixed_midspan_point_deflection(p, l, l * (1.0 - frac), e, i);
            assert!(
                approx_eq(left, right),
                "δ({}) = {}, δ({}) = {}",
                frac,
                left,
                1.0 - frac,
                right
            );
        }
    }

    #[test]
    fn test_deflection_monotonic_to_midspan() {
        let (p, l, e, i) = (1000.0, 4.0, 2e11, 6.667e-5);
        let mut previous = 0.0;
        for step in 0..=20 {
            let x = l / 2.0 * step as f64 / 20.0;
            let d = fixed_fixed_midspan_point_deflection(p, l, x, e, i);
            assert!(d >= previous, "δ({}) = {} < {}", x, d, previous);
            previous = d;
        }
    }

    #[test]
    fn test_max_deflection_quarter_of_simply_supported() {
        // PL³/192EI = (PL³/48EI) / 4
        let (p, l, e, i) = (1000.0, 4.0, 2e11, 6.667e-5);
        let fixed = fixed_fixed_midspan_point_max_deflection(p, l, e, i);
        let simple = p * l.powi(3) / (48.0 * e * i);
        assert!(approx_eq(fixed, simple / 4.0), "{} vs {}", fixed, simple / 4.0);
    }
}
