//! # calc_core - Beam Stress Calculation Engine
//!
//! `calc_core` is the computational heart of Camber, a calculator for a
//! fixed-fixed beam under a midspan point load. It provides the bending
//! moment, bending stress, and deflection profile with a clean,
//! LLM-friendly API: all inputs and outputs are JSON-serializable value
//! objects.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: `calculate` is a pure function over plain data
//! - **Total**: invalid input returns an invalid result with a message,
//!   never a panic or an `Err`
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Unit-aware**: one metric and one imperial reference table and
//!   formatting scale, selected by the input
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::{calculate, BeamInput, BeamType};
//! use calc_core::units::{format_stress, UnitSystem};
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
//! assert_eq!(format_stress(result.max_bending_stress, result.units), "0.75 MPa");
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The beam stress calculation (input, result, pure
//!   `calculate`)
//! - [`equations`] - Closed-form beam and section formulas
//! - [`sections`] - Standard section reference tables (metric/imperial)
//! - [`units`] - Unit system, conversion factors, display formatting
//! - [`render`] - Text report and SVG deflection curve
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod render;
pub mod sections;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, BeamInput, BeamType, CalculationResult, DeflectionPoint};
pub use errors::{CalcError, CalcResult, ValidationError};
pub use units::UnitSystem;
