//! # Fixed-Fixed Beam Stress Calculation
//!
//! Analyzes a doubly-fixed beam carrying a single point load at midspan:
//! bending moment, outer-fiber bending stress, and a sampled deflection
//! profile per Euler-Bernoulli small-deflection theory.
//!
//! ## Assumptions
//!
//! - Both supports rigidly restrained (no rotation or translation)
//! - Point load applied exactly at midspan
//! - Prismatic member, linear-elastic material
//! - Cross-section is either a rectangle (custom) or a standard W-shape
//!   from the reference tables
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::beam_stress::{calculate, BeamInput, BeamType};
//! use calc_core::units::UnitSystem;
//!
//! let input = BeamInput {
//!     load: 1000.0,
//!     span_length: 4.0,
//!     beam_type: BeamType::Custom,
//!     width: Some(0.1),
//!     height: Some(0.2),
//!     modulus_of_elasticity: 2e11,
//!     units: UnitSystem::Metric,
//!     ..BeamInput::default()
//! };
//!
//! let result = calculate(&input);
//! assert!(result.is_valid);
//! assert!((result.bending_moment - 500.0).abs() < 1e-9);
//! ```
//!
//! `calculate` is total: invalid input produces a result with
//! `is_valid = false` and a human-readable `error`, never a panic or an
//! `Err`.

use serde::{Deserialize, Serialize};

use crate::equations::{
    bending_stress, fixed_fixed_midspan_point_deflection, fixed_fixed_midspan_point_max_deflection,
    fixed_fixed_midspan_point_moment, outer_fiber_distance, rectangular_moment_of_inertia,
};
use crate::errors::ValidationError;
use crate::sections;
use crate::units::{self, UnitSystem, M_TO_FT, N_TO_LB, PA_TO_PSI};

/// Number of equal segments in the sampled deflection profile.
///
/// The profile carries `DEFLECTION_SEGMENTS + 1` points; an even count
/// guarantees midspan (the deflection peak) is itself a sample.
pub const DEFLECTION_SEGMENTS: usize = 40;

/// How the beam cross-section is defined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeamType {
    /// Rectangular section from user-entered width and height
    #[default]
    Custom,
    /// Named W-shape from the standard section tables
    Standard,
}

/// Input parameters for the beam stress calculation.
///
/// All fields are expressed in the unit system named by `units`; the
/// calculator performs no cross-unit conversion (see
/// [`BeamInput::converted_to`] for the unit toggle rescale).
///
/// ## JSON Example (custom rectangle, metric)
///
/// ```json
/// {
///   "load": 1000.0,
///   "span_length": 4.0,
///   "beam_type": "custom",
///   "width": 0.1,
///   "height": 0.2,
///   "modulus_of_elasticity": 2e11,
///   "units": "metric"
/// }
/// ```
///
/// ## JSON Example (standard section, imperial)
///
/// ```json
/// {
///   "load": 2000.0,
///   "span_length": 20.0,
///   "beam_type": "standard",
///   "standard_section": "W14x22",
///   "modulus_of_elasticity": 29000000.0,
///   "units": "imperial"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamInput {
    /// Point load P at midspan (N or lb)
    pub load: f64,

    /// Clear span L (m or ft)
    pub span_length: f64,

    /// Cross-section definition mode
    pub beam_type: BeamType,

    /// Custom section width b (m or in)
    pub width: Option<f64>,

    /// Custom section height/depth h (m or in)
    pub height: Option<f64>,

    /// Explicit moment of inertia override for custom sections
    /// (m⁴ or in⁴); when absent or non-positive, I is derived from the
    /// rectangle
    pub moment_of_inertia: Option<f64>,

    /// Section designation for the standard tables (e.g., "W14x22")
    pub standard_section: Option<String>,

    /// Modulus of elasticity E (Pa or psi)
    pub modulus_of_elasticity: f64,

    /// Unit system every field above is expressed in
    pub units: UnitSystem,
}

impl BeamInput {
    /// Validate the input without computing anything.
    ///
    /// Checks run in a fixed order and the first failure wins: load and
    /// span, then modulus, then the section definition for the active
    /// beam type.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.resolve_section().map(|_| ())
    }

    /// Validate and resolve the section to `(I, c)` in the input's
    /// units.
    fn resolve_section(&self) -> Result<(f64, f64), ValidationError> {
        if self.load <= 0.0 || self.span_length <= 0.0 {
            return Err(ValidationError::NonPositiveLoadOrSpan);
        }
        if self.modulus_of_elasticity <= 0.0 {
            return Err(ValidationError::NonPositiveModulus);
        }

        match self.beam_type {
            BeamType::Standard => {
                let name = self.standard_section.as_deref().unwrap_or("");
                if name.is_empty() {
                    return Err(ValidationError::SectionNotSelected);
                }
                let section = sections::section_by_name(name, self.units)
                    .ok_or(ValidationError::SectionNotFound)?;
                Ok((section.moment_of_inertia, section.c))
            }
            BeamType::Custom => {
                let (width, height) = match (self.width, self.height) {
                    (Some(width), Some(height)) => (width, height),
                    _ => return Err(ValidationError::MissingCustomDimensions),
                };
                if width <= 0.0 || height <= 0.0 {
                    return Err(ValidationError::NonPositiveCustomDimensions);
                }
                let inertia = match self.moment_of_inertia {
                    Some(i) if i > 0.0 => i,
                    _ => rectangular_moment_of_inertia(width, height),
                };
                Ok((inertia, outer_fiber_distance(height)))
            }
        }
    }

    /// Rescale every field into `target` units and stamp the new system.
    ///
    /// Multiplies by the fixed metric→imperial factors going one way and
    /// divides going back, so a toggle round trip returns the original
    /// values to within floating-point tolerance. Converting to the
    /// current system is the identity. The explicit `moment_of_inertia`
    /// override and the section name are carried through unchanged.
    pub fn converted_to(&self, target: UnitSystem) -> BeamInput {
        if self.units == target {
            return self.clone();
        }

        let to_imperial = target == UnitSystem::Imperial;
        let rescale = |value: f64, factor: f64| {
            if to_imperial {
                value * factor
            } else {
                value / factor
            }
        };

        BeamInput {
            load: rescale(self.load, N_TO_LB),
            span_length: rescale(self.span_length, M_TO_FT),
            beam_type: self.beam_type,
            width: self.width.map(|w| rescale(w, M_TO_FT)),
            height: self.height.map(|h| rescale(h, M_TO_FT)),
            moment_of_inertia: self.moment_of_inertia,
            standard_section: self.standard_section.clone(),
            modulus_of_elasticity: rescale(self.modulus_of_elasticity, PA_TO_PSI),
            units: target,
        }
    }
}

/// One sample of the deflection profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionPoint {
    /// Normalized position along the span, 0 at the left support, 1 at
    /// the right
    pub position: f64,

    /// Deflection at that position (m or in, positive downward)
    pub deflection: f64,
}

/// Results from the beam stress calculation.
///
/// Produced fresh on every call; nothing is cached between calls.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bending_moment": 500.0,
///   "bending_stress": 750000.0,
///   "max_bending_stress": 750000.0,
///   "max_deflection": 0.0000005,
///   "deflection_points": [ { "position": 0.0, "deflection": 0.0 } ],
///   "units": "metric",
///   "is_valid": true,
///   "error": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Bending moment M = PL/8 (N·m or lb·ft)
    pub bending_moment: f64,

    /// Outer-fiber bending stress σ = Mc/I (Pa or psi)
    pub bending_stress: f64,

    /// |σ|, the reported maximum
    pub max_bending_stress: f64,

    /// Midspan deflection PL³/192EI (m or in)
    pub max_deflection: f64,

    /// Sampled deflection curve, 41 evenly spaced points
    pub deflection_points: Vec<DeflectionPoint>,

    /// Unit system echoed from the input
    pub units: UnitSystem,

    /// Whether the numeric fields are meaningful
    pub is_valid: bool,

    /// Validation message when `is_valid` is false
    pub error: Option<String>,
}

impl CalculationResult {
    /// An invalid result: all numeric fields zeroed, no profile, the
    /// validation message attached.
    fn invalid(units: UnitSystem, error: ValidationError) -> Self {
        CalculationResult {
            bending_moment: 0.0,
            bending_stress: 0.0,
            max_bending_stress: 0.0,
            max_deflection: 0.0,
            deflection_points: Vec::new(),
            units,
            is_valid: false,
            error: Some(error.to_string()),
        }
    }
}

/// Sample the deflection curve at `DEFLECTION_SEGMENTS + 1` evenly
/// spaced positions.
///
/// `span` must already be in the calculation base length unit (meters,
/// or inches for imperial input). Degenerate parameters (any of
/// load/span/E/I non-positive) produce an all-zero profile instead of
/// failing; upstream validation blocks that path for normal calls.
fn deflection_profile(load: f64, span: f64, e: f64, i: f64) -> (Vec<DeflectionPoint>, f64) {
    let degenerate = load <= 0.0 || span <= 0.0 || e <= 0.0 || i <= 0.0;

    let mut points = Vec::with_capacity(DEFLECTION_SEGMENTS + 1);
    for step in 0..=DEFLECTION_SEGMENTS {
        let position = step as f64 / DEFLECTION_SEGMENTS as f64;
        let deflection = if degenerate {
            0.0
        } else {
            fixed_fixed_midspan_point_deflection(load, span, position * span, e, i)
        };
        points.push(DeflectionPoint {
            position,
            deflection,
        });
    }

    let max_deflection = if degenerate {
        0.0
    } else {
        fixed_fixed_midspan_point_max_deflection(load, span, e, i)
    };

    (points, max_deflection)
}

/// Calculate bending moment, bending stress, and the deflection profile.
///
/// Total function: never panics and never returns `Err`. Invalid input
/// yields `is_valid = false` with the validation message; the next call
/// with corrected input recomputes fully from scratch. Deterministic and
/// side-effect free.
pub fn calculate(input: &BeamInput) -> CalculationResult {
    let (inertia, c) = match input.resolve_section() {
        Ok(properties) => properties,
        Err(error) => return CalculationResult::invalid(input.units, error),
    };

    let moment = fixed_fixed_midspan_point_moment(input.load, input.span_length);
    let stress = bending_stress(moment, c, inertia);

    // Deflection math needs span, E, and I in agreeing length units:
    // imperial spans are entered in feet but E and I are per-inch.
    let span_base = units::span_in_base_units(input.span_length, input.units);
    let (deflection_points, max_deflection) = deflection_profile(
        input.load,
        span_base,
        input.modulus_of_elasticity,
        inertia,
    );

    CalculationResult {
        bending_moment: moment,
        bending_stress: stress,
        max_bending_stress: stress.abs(),
        max_deflection,
        deflection_points,
        units: input.units,
        is_valid: true,
        error: None,
    }
}
