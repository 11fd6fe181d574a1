//! Plain-text result report.
//!
//! Formats a calculation result for terminal display using the
//! unit-aware formatters. Invalid results render the validation message
//! in place of the numbers.

use std::fmt::Write;

use crate::calculations::{BeamInput, BeamType, CalculationResult};
use crate::units::{format_deflection, format_moment, format_stress};

/// Render the result panel as plain text.
pub fn report(input: &BeamInput, result: &CalculationResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "═══════════════════════════════════════");
    let _ = writeln!(out, "  BEAM CALCULATION RESULTS");
    let _ = writeln!(out, "═══════════════════════════════════════");
    let _ = writeln!(out);

    if !result.is_valid {
        let message = result
            .error
            .as_deref()
            .unwrap_or("Enter beam parameters to calculate stress");
        let _ = writeln!(out, "Error: {}", message);
        return out;
    }

    let units = result.units;

    let _ = writeln!(out, "Input:");
    let _ = writeln!(
        out,
        "  Load:     {:.2} {}",
        input.load,
        units.load_label()
    );
    let _ = writeln!(
        out,
        "  Span:     {:.2} {}",
        input.span_length,
        units.span_label()
    );
    match input.beam_type {
        BeamType::Standard => {
            let _ = writeln!(
                out,
                "  Section:  {}",
                input.standard_section.as_deref().unwrap_or("-")
            );
        }
        BeamType::Custom => {
            let _ = writeln!(
                out,
                "  Section:  Custom {:.3} x {:.3} {}",
                input.width.unwrap_or(0.0),
                input.height.unwrap_or(0.0),
                units.dimension_label()
            );
        }
    }
    let _ = writeln!(
        out,
        "  E:        {}",
        format_stress(input.modulus_of_elasticity, units)
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Results:");
    let _ = writeln!(
        out,
        "  Max Bending Moment:  {}",
        format_moment(result.bending_moment, units)
    );
    let _ = writeln!(
        out,
        "  Max Bending Stress:  {}",
        format_stress(result.max_bending_stress, units)
    );
    let _ = writeln!(
        out,
        "  Max Deflection:      {}",
        format_deflection(result.max_deflection, units)
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Formula: σ = Mc/I with M = PL/8");
    let _ = writeln!(
        out,
        "Note: assumes a fixed-fixed beam with a point load at the center of the span."
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::calculate;
    use crate::units::UnitSystem;

    fn metric_input() -> BeamInput {
        BeamInput {
            load: 1000.0,
            span_length: 4.0,
            beam_type: BeamType::Custom,
            width: Some(0.1),
            height: Some(0.2),
            modulus_of_elasticity: 2e11,
            units: UnitSystem::Metric,
            ..BeamInput::default()
        }
    }

    #[test]
    fn test_valid_report_contains_formatted_values() {
        let input = metric_input();
        let result = calculate(&input);
        let text = report(&input, &result);

        assert!(text.contains("500.00 N·m"));
        assert!(text.contains("0.75 MPa"));
        assert!(text.contains("Custom 0.100 x 0.200 m"));
        assert!(text.contains("M = PL/8"));
    }

    #[test]
    fn test_standard_section_report_names_the_shape() {
        let input = BeamInput {
            load: 2000.0,
            span_length: 20.0,
            beam_type: BeamType::Standard,
            standard_section: Some("W14x22".to_string()),
            modulus_of_elasticity: 29e6,
            units: UnitSystem::Imperial,
            ..BeamInput::default()
        };
        let result = calculate(&input);
        let text = report(&input, &result);

        assert!(result.is_valid);
        assert!(text.contains("W14x22"));
        assert!(text.contains("lb·ft"));
    }

    #[test]
    fn test_invalid_report_shows_validation_message() {
        let mut input = metric_input();
        input.load = 0.0;
        let result = calculate(&input);
        let text = report(&input, &result);

        assert!(text.contains("Error: Load and span length must be greater than zero"));
        assert!(!text.contains("Max Bending Stress"));
    }
}
