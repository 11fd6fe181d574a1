//! # Unit System
//!
//! The calculator runs in one of two unit systems and trusts that every
//! input field is already expressed in that system. We store plain `f64`
//! values tagged with a [`UnitSystem`] rather than per-unit newtypes
//! because the same field means newtons or pounds depending on the tag,
//! and because JSON serialization stays clean (just numbers).
//!
//! ## Field units by system
//!
//! | Field       | Metric | Imperial |
//! |-------------|--------|----------|
//! | load        | N      | lb       |
//! | span        | m      | ft       |
//! | width/height| m      | in       |
//! | I           | m⁴     | in⁴      |
//! | E, stress   | Pa     | psi      |
//! | moment      | N·m    | lb·ft    |
//! | deflection  | m      | in       |
//!
//! The single cross-unit step inside the calculation itself is the
//! imperial span ft→in conversion before the deflection profile, so that
//! span, E, and I agree on inches.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{format_stress, UnitSystem};
//!
//! assert_eq!(format_stress(750_000.0, UnitSystem::Metric), "0.75 MPa");
//! assert_eq!(format_stress(36_000.0, UnitSystem::Imperial), "36.00 ksi");
//! ```

use serde::{Deserialize, Serialize};

/// Unit system governing the interpretation of every input field.
///
/// Selecting a system never converts stored values by itself; see
/// [`BeamInput::converted_to`](crate::calculations::BeamInput::converted_to)
/// for the whole-input rescale used by unit toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// SI: newtons, meters, pascals
    #[default]
    Metric,
    /// US customary: pounds, feet/inches, psi
    Imperial,
}

impl UnitSystem {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Metric (N, m, Pa)",
            UnitSystem::Imperial => "Imperial (lb, ft, psi)",
        }
    }

    /// Unit label for the point load
    pub fn load_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "N",
            UnitSystem::Imperial => "lb",
        }
    }

    /// Unit label for the span length
    pub fn span_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "m",
            UnitSystem::Imperial => "ft",
        }
    }

    /// Unit label for cross-section dimensions
    pub fn dimension_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "m",
            UnitSystem::Imperial => "in",
        }
    }

    /// Unit label for moment of inertia
    pub fn inertia_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "m⁴",
            UnitSystem::Imperial => "in⁴",
        }
    }

    /// Unit label for stress and modulus of elasticity (unscaled)
    pub fn stress_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Pa",
            UnitSystem::Imperial => "psi",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Conversion Factors
// ============================================================================
//
// The unit toggle multiplies by these going metric→imperial and divides
// going back, so a round trip returns the original value to within
// floating-point tolerance.

/// Meters to feet
pub const M_TO_FT: f64 = 3.28084;

/// Newtons to pounds-force
pub const N_TO_LB: f64 = 0.224809;

/// Pascals to pounds per square inch
pub const PA_TO_PSI: f64 = 0.000145038;

/// Feet to inches
pub const FT_TO_IN: f64 = 12.0;

/// Convert a span length to the deflection calculation's base length
/// unit: inches under imperial (spans are entered in feet), meters under
/// metric (already the base unit).
#[inline]
pub fn span_in_base_units(span_length: f64, units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Metric => span_length,
        UnitSystem::Imperial => span_length * FT_TO_IN,
    }
}

// ============================================================================
// Display Formatting
// ============================================================================

/// Format a stress value with magnitude-scaled units.
///
/// Metric switches Pa → kPa → MPa at |σ| = 1e3 and 1e6; imperial does the
/// same with psi → ksi → Mpsi.
pub fn format_stress(stress: f64, units: UnitSystem) -> String {
    let (kilo, mega) = match units {
        UnitSystem::Metric => ("kPa", "MPa"),
        UnitSystem::Imperial => ("ksi", "Mpsi"),
    };

    if stress.abs() >= 1e6 {
        format!("{:.2} {}", stress / 1e6, mega)
    } else if stress.abs() >= 1e3 {
        format!("{:.2} {}", stress / 1e3, kilo)
    } else {
        format!("{:.2} {}", stress, units.stress_label())
    }
}

/// Format a bending moment. No magnitude switching; moments read in
/// whole N·m / lb·ft regardless of size.
pub fn format_moment(moment: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => format!("{:.2} N·m", moment),
        UnitSystem::Imperial => format!("{:.2} lb·ft", moment),
    }
}

/// Format a deflection, which is computed in meters (metric) or inches
/// (imperial).
///
/// Metric scales m → mm → µm at |δ| = 1 and 1e-3. Imperial prints inches
/// down to 0.01 in and thousandths of an inch ("mils") below that.
pub fn format_deflection(deflection: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => {
            if deflection.abs() >= 1.0 {
                format!("{:.2} m", deflection)
            } else if deflection.abs() >= 1e-3 {
                format!("{:.2} mm", deflection * 1e3)
            } else {
                format!("{:.2} µm", deflection * 1e6)
            }
        }
        UnitSystem::Imperial => {
            if deflection.abs() >= 0.01 {
                format!("{:.2} in", deflection)
            } else {
                format!("{:.2} mils", deflection * 1e3)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_serialization_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&UnitSystem::Metric).unwrap(),
            "\"metric\""
        );
        let roundtrip: UnitSystem = serde_json::from_str("\"imperial\"").unwrap();
        assert_eq!(roundtrip, UnitSystem::Imperial);
    }

    #[test]
    fn test_span_base_units() {
        assert_eq!(span_in_base_units(4.0, UnitSystem::Metric), 4.0);
        assert_eq!(span_in_base_units(10.0, UnitSystem::Imperial), 120.0);
    }

    #[test]
    fn test_stress_thresholds_metric() {
        assert_eq!(format_stress(999.0, UnitSystem::Metric), "999.00 Pa");
        assert_eq!(format_stress(1_000.0, UnitSystem::Metric), "1.00 kPa");
        assert_eq!(format_stress(999_999.0, UnitSystem::Metric), "1000.00 kPa");
        assert_eq!(format_stress(1_000_000.0, UnitSystem::Metric), "1.00 MPa");
        assert_eq!(format_stress(750_000.0, UnitSystem::Metric), "0.75 MPa");
    }

    #[test]
    fn test_stress_thresholds_imperial() {
        assert_eq!(format_stress(500.0, UnitSystem::Imperial), "500.00 psi");
        assert_eq!(format_stress(36_000.0, UnitSystem::Imperial), "36.00 ksi");
        assert_eq!(
            format_stress(29_000_000.0, UnitSystem::Imperial),
            "29.00 Mpsi"
        );
    }

    #[test]
    fn test_stress_negative_uses_magnitude() {
        assert_eq!(format_stress(-2_500_000.0, UnitSystem::Metric), "-2.50 MPa");
    }

    #[test]
    fn test_moment_has_no_magnitude_switching() {
        assert_eq!(format_moment(500.0, UnitSystem::Metric), "500.00 N·m");
        assert_eq!(
            format_moment(1_234_567.0, UnitSystem::Imperial),
            "1234567.00 lb·ft"
        );
    }

    #[test]
    fn test_deflection_metric_scales() {
        assert_eq!(format_deflection(1.25, UnitSystem::Metric), "1.25 m");
        assert_eq!(format_deflection(0.0021, UnitSystem::Metric), "2.10 mm");
        assert_eq!(format_deflection(0.0000005, UnitSystem::Metric), "0.50 µm");
    }

    #[test]
    fn test_deflection_imperial_scales() {
        assert_eq!(format_deflection(0.42, UnitSystem::Imperial), "0.42 in");
        assert_eq!(format_deflection(0.004, UnitSystem::Imperial), "4.00 mils");
    }

    #[test]
    fn test_conversion_factors_round_trip() {
        for value in [0.001, 1.0, 4.0, 200e9] {
            let there = value * M_TO_FT;
            let back = there / M_TO_FT;
            assert!((back - value).abs() <= value * 1e-12);
        }
    }
}
