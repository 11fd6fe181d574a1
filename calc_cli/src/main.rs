//! # Camber CLI Application
//!
//! Terminal front end for the beam stress calculator. Collects the beam
//! description interactively (or reads a `BeamInput` JSON file when a
//! path is given), runs the calculation, prints the text report, and
//! writes the deflection curve as an SVG file.
//!
//! ## Usage
//!
//! ```text
//! calc_cli              # interactive prompts
//! calc_cli input.json   # batch: read BeamInput JSON, emit result JSON
//! ```

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use calc_core::calculations::{calculate, BeamInput, BeamType, CalculationResult};
use calc_core::errors::{CalcError, CalcResult};
use calc_core::render;
use calc_core::sections;
use calc_core::units::UnitSystem;

const SVG_OUTPUT_PATH: &str = "deflection.svg";

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn prompt_units() -> UnitSystem {
    let choice = prompt_string("Units: [m]etric or [i]mperial [m]: ", "m");
    if choice.to_lowercase().starts_with('i') {
        UnitSystem::Imperial
    } else {
        UnitSystem::Metric
    }
}

fn prompt_beam_type() -> BeamType {
    let choice = prompt_string("Section: [c]ustom rectangle or [s]tandard shape [c]: ", "c");
    if choice.to_lowercase().starts_with('s') {
        BeamType::Standard
    } else {
        BeamType::Custom
    }
}

fn prompt_beam_input() -> BeamInput {
    let units = prompt_units();
    println!("Using {}", units);
    let beam_type = prompt_beam_type();

    let load = prompt_f64(
        &format!("Point load at midspan ({}) [1000.0]: ", units.load_label()),
        1000.0,
    );
    let span_length = prompt_f64(
        &format!("Span length ({}) [4.0]: ", units.span_label()),
        4.0,
    );

    let mut input = BeamInput {
        load,
        span_length,
        beam_type,
        units,
        ..BeamInput::default()
    };

    match beam_type {
        BeamType::Custom => {
            let dim = units.dimension_label();
            input.width = Some(prompt_f64(&format!("Width ({}) [0.1]: ", dim), 0.1));
            input.height = Some(prompt_f64(&format!("Height ({}) [0.2]: ", dim), 0.2));
            let inertia = prompt_f64(
                &format!(
                    "Moment of inertia override ({}, 0 = derive from rectangle) [0]: ",
                    units.inertia_label()
                ),
                0.0,
            );
            if inertia > 0.0 {
                input.moment_of_inertia = Some(inertia);
            }
        }
        BeamType::Standard => {
            let names: Vec<&str> = sections::section_names(units).collect();
            println!("Available sections: {}", names.join(", "));
            input.standard_section = Some(prompt_string("Section name [W14x22]: ", "W14x22"));
        }
    }

    let e_default = match units {
        UnitSystem::Metric => 2e11,
        UnitSystem::Imperial => 29e6,
    };
    input.modulus_of_elasticity = prompt_f64(
        &format!(
            "Modulus of elasticity ({}) [{:e}]: ",
            units.stress_label(),
            e_default
        ),
        e_default,
    );

    input
}

fn write_svg(input: &BeamInput, result: &CalculationResult) -> CalcResult<()> {
    let svg = render::deflection_svg(input, result);
    fs::write(SVG_OUTPUT_PATH, svg)
        .map_err(|e| CalcError::file_error("write", SVG_OUTPUT_PATH, e.to_string()))?;
    println!("Deflection curve written to {}", SVG_OUTPUT_PATH);
    Ok(())
}

/// Batch mode: read a `BeamInput` JSON file, print the report and the
/// result as JSON, and write the SVG for valid results.
fn run_batch(path: &str) -> CalcResult<()> {
    let json = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path, e.to_string()))?;
    let input: BeamInput =
        serde_json::from_str(&json).map_err(|e| CalcError::serialization_error(e.to_string()))?;

    let result = calculate(&input);
    println!("{}", render::report(&input, &result));

    let result_json = serde_json::to_string_pretty(&result)
        .map_err(|e| CalcError::serialization_error(e.to_string()))?;
    println!("{}", result_json);

    if result.is_valid {
        write_svg(&input, &result)?;
    }
    Ok(())
}

fn run_interactive() -> CalcResult<()> {
    let input = prompt_beam_input();
    println!();

    let result = calculate(&input);
    println!("{}", render::report(&input, &result));

    if !result.is_valid {
        return Ok(());
    }

    write_svg(&input, &result)?;

    // Unit toggle: rescale the same beam and recompute.
    let toggle = prompt_string("Show results in the other unit system? [y/N]: ", "n");
    if toggle.to_lowercase().starts_with('y') {
        let other = match input.units {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        };
        let converted = input.converted_to(other);
        let converted_result = calculate(&converted);
        println!();
        println!("{}", render::report(&converted, &converted_result));
    }

    Ok(())
}

fn main() -> ExitCode {
    println!("Camber CLI - Beam Stress Calculator");
    println!("===================================");
    println!("Fixed-fixed beam with a point load at midspan");
    println!();

    let outcome = match env::args().nth(1) {
        Some(path) => run_batch(&path),
        None => run_interactive(),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error[{}]: {}", error.error_code(), error);
            ExitCode::FAILURE
        }
    }
}
