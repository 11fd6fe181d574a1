//! # Standard Section Reference Tables
//!
//! Section properties for standard steel W-shapes (wide flange beams),
//! fixed reference data for the calculator's "standard section" beam
//! type. One table per unit system, with matching section names: the
//! metric table carries SI values (m, m³, m⁴) and the imperial table
//! carries US customary values (in, in³, in⁴).
//!
//! Rows are read-only and never mutated; both tables are initialized
//! lazily on first lookup.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::sections::section_by_name;
//! use calc_core::units::UnitSystem;
//!
//! let w14x22 = section_by_name("W14x22", UnitSystem::Imperial).unwrap();
//! assert_eq!(w14x22.depth, 14.0);
//! assert_eq!(w14x22.moment_of_inertia, 199.0);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::units::UnitSystem;

/// Section properties for one standard shape.
///
/// Dimensional values are meters (metric table) or inches (imperial
/// table); `moment_of_inertia` is m⁴ or in⁴ and `section_modulus` is
/// m³ or in³.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSection {
    /// Shape designation (e.g., "W14x22")
    pub name: String,

    /// Overall depth of the section
    pub depth: f64,

    /// Flange width
    pub width: f64,

    /// Moment of inertia about the strong axis
    pub moment_of_inertia: f64,

    /// Elastic section modulus, S = I/c
    pub section_modulus: f64,

    /// Distance from the neutral axis to the outer fiber
    pub c: f64,
}

impl std::fmt::Display for BeamSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (d={}, I={}, S={})",
            self.name, self.depth, self.moment_of_inertia, self.section_modulus
        )
    }
}

fn row(name: &str, depth: f64, width: f64, i: f64, s: f64, c: f64) -> BeamSection {
    BeamSection {
        name: name.to_string(),
        depth,
        width,
        moment_of_inertia: i,
        section_modulus: s,
        c,
    }
}

/// W-shapes in SI units (m, m³, m⁴)
static STANDARD_SECTIONS_METRIC: Lazy<Vec<BeamSection>> = Lazy::new(|| {
    vec![
        row("W14x22", 0.356, 0.102, 0.000199, 0.00112, 0.178),
        row("W14x30", 0.358, 0.135, 0.000291, 0.00163, 0.179),
        row("W14x38", 0.358, 0.172, 0.000385, 0.00215, 0.179),
        row("W14x48", 0.356, 0.203, 0.000485, 0.00272, 0.178),
        row("W14x61", 0.358, 0.254, 0.000636, 0.00355, 0.179),
        row("W16x26", 0.403, 0.102, 0.000301, 0.00149, 0.2015),
        row("W16x31", 0.403, 0.135, 0.000376, 0.00187, 0.2015),
        row("W16x40", 0.399, 0.178, 0.000518, 0.00260, 0.1995),
        row("W16x50", 0.403, 0.203, 0.000659, 0.00327, 0.2015),
        row("W18x35", 0.457, 0.152, 0.000510, 0.00223, 0.2285),
        row("W18x50", 0.457, 0.190, 0.000753, 0.00329, 0.2285),
        row("W18x65", 0.460, 0.229, 0.000978, 0.00425, 0.230),
        row("W21x44", 0.533, 0.165, 0.000843, 0.00316, 0.2665),
        row("W21x57", 0.533, 0.216, 0.00117, 0.00439, 0.2665),
        row("W21x68", 0.533, 0.254, 0.00141, 0.00529, 0.2665),
        row("W24x55", 0.610, 0.203, 0.00135, 0.00443, 0.305),
        row("W24x76", 0.610, 0.229, 0.00187, 0.00613, 0.305),
        row("W27x84", 0.686, 0.254, 0.00285, 0.00831, 0.343),
        row("W30x99", 0.762, 0.267, 0.00428, 0.0112, 0.381),
        row("W36x135", 0.914, 0.305, 0.00875, 0.0191, 0.457),
    ]
});

/// W-shapes in US customary units (in, in³, in⁴)
static STANDARD_SECTIONS_IMPERIAL: Lazy<Vec<BeamSection>> = Lazy::new(|| {
    vec![
        row("W14x22", 14.0, 4.02, 199.0, 28.3, 7.0),
        row("W14x30", 14.1, 5.31, 291.0, 41.1, 7.05),
        row("W14x38", 14.1, 6.77, 385.0, 54.3, 7.05),
        row("W14x48", 14.0, 7.99, 485.0, 68.7, 7.0),
        row("W14x61", 14.1, 10.0, 636.0, 89.6, 7.05),
        row("W16x26", 15.9, 4.02, 301.0, 37.6, 7.95),
        row("W16x31", 15.9, 5.31, 376.0, 47.2, 7.95),
        row("W16x40", 15.7, 7.01, 518.0, 65.6, 7.85),
        row("W16x50", 15.9, 7.99, 659.0, 82.6, 7.95),
        row("W18x35", 18.0, 5.98, 510.0, 56.3, 9.0),
        row("W18x50", 18.0, 7.48, 753.0, 83.0, 9.0),
        row("W18x65", 18.1, 9.02, 978.0, 107.0, 9.05),
        row("W21x44", 21.0, 6.50, 843.0, 80.3, 10.5),
        row("W21x57", 21.0, 8.50, 1170.0, 111.0, 10.5),
        row("W21x68", 21.0, 10.0, 1410.0, 134.0, 10.5),
        row("W24x55", 24.0, 7.99, 1350.0, 112.0, 12.0),
        row("W24x76", 24.0, 9.02, 1870.0, 155.0, 12.0),
        row("W27x84", 27.0, 10.0, 2850.0, 211.0, 13.5),
        row("W30x99", 30.0, 10.5, 4280.0, 285.0, 15.0),
        row("W36x135", 36.0, 12.0, 8750.0, 485.0, 18.0),
    ]
});

/// Get the full section table for a unit system, in catalog order.
pub fn standard_sections(units: UnitSystem) -> &'static [BeamSection] {
    match units {
        UnitSystem::Metric => &STANDARD_SECTIONS_METRIC,
        UnitSystem::Imperial => &STANDARD_SECTIONS_IMPERIAL,
    }
}

/// Look up a section by its exact designation in the table for `units`.
pub fn section_by_name(name: &str, units: UnitSystem) -> Option<&'static BeamSection> {
    standard_sections(units)
        .iter()
        .find(|section| section.name == name)
}

/// Section designations available for selection, in catalog order.
///
/// Both tables carry the same name set, so the unit system only affects
/// which property values a name resolves to.
pub fn section_names(units: UnitSystem) -> impl Iterator<Item = &'static str> {
    standard_sections(units)
        .iter()
        .map(|section| section.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const IN_TO_M: f64 = 0.0254;

    fn rel_close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= b.abs() * tol
    }

    #[test]
    fn test_lookup_is_exact_match() {
        assert!(section_by_name("W14x22", UnitSystem::Metric).is_some());
        assert!(section_by_name("w14x22", UnitSystem::Metric).is_none());
        assert!(section_by_name("W14X22", UnitSystem::Imperial).is_none());
        assert!(section_by_name("", UnitSystem::Metric).is_none());
    }

    #[test]
    fn test_tables_have_matching_name_sets() {
        let metric: Vec<_> = section_names(UnitSystem::Metric).collect();
        let imperial: Vec<_> = section_names(UnitSystem::Imperial).collect();
        assert_eq!(metric, imperial);
        assert_eq!(metric.len(), 20);
    }

    #[test]
    fn test_rows_are_internally_consistent() {
        // W-shapes are symmetric: c = d/2, and S = I/c by definition.
        // Published values are rounded to 3 significant figures, hence
        // the loose tolerance.
        for units in [UnitSystem::Metric, UnitSystem::Imperial] {
            for section in standard_sections(units) {
                assert!(
                    rel_close(section.c, section.depth / 2.0, 0.02),
                    "{}: c = {}, d/2 = {}",
                    section.name,
                    section.c,
                    section.depth / 2.0
                );
                let s_from_i = section.moment_of_inertia / section.c;
                assert!(
                    rel_close(section.section_modulus, s_from_i, 0.02),
                    "{}: S = {}, I/c = {}",
                    section.name,
                    section.section_modulus,
                    s_from_i
                );
            }
        }
    }

    #[test]
    fn test_dimensions_agree_across_unit_systems() {
        for (metric, imperial) in standard_sections(UnitSystem::Metric)
            .iter()
            .zip(standard_sections(UnitSystem::Imperial))
        {
            assert_eq!(metric.name, imperial.name);
            assert!(rel_close(metric.depth, imperial.depth * IN_TO_M, 0.01));
            assert!(rel_close(metric.width, imperial.width * IN_TO_M, 0.01));
            assert!(rel_close(metric.c, imperial.c * IN_TO_M, 0.01));
        }
    }

    #[test]
    fn test_all_properties_positive() {
        for units in [UnitSystem::Metric, UnitSystem::Imperial] {
            for section in standard_sections(units) {
                assert!(section.depth > 0.0);
                assert!(section.width > 0.0);
                assert!(section.moment_of_inertia > 0.0);
                assert!(section.section_modulus > 0.0);
                assert!(section.c > 0.0);
            }
        }
    }

    #[test]
    fn test_section_serialization() {
        let section = section_by_name("W18x35", UnitSystem::Imperial).unwrap();
        let json = serde_json::to_string(section).unwrap();
        let roundtrip: BeamSection = serde_json::from_str(&json).unwrap();
        assert_eq!(*section, roundtrip);
    }
}
