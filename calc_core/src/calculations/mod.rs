//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(&input) -> *Result` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`beam_stress`] - Fixed-fixed beam with a midspan point load
//!   (bending moment, bending stress, deflection profile)

pub mod beam_stress;

pub use beam_stress::{
    calculate, BeamInput, BeamType, CalculationResult, DeflectionPoint, DEFLECTION_SEGMENTS,
};
