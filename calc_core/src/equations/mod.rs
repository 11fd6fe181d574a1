//! # Structural Engineering Equations
//!
//! Fundamental closed-form formulas used by the calculator. Keeping the
//! equations in one place enables:
//! - Easy verification against code references (AISC, Roark's)
//! - Documentation of assumptions and sign conventions
//! - Consistent implementation across calculation types
//!
//! ## Modules
//!
//! - [`beam`] - Fixed-fixed beam with a midspan point load (moment,
//!   stress, deflection)
//! - [`section`] - Cross-section properties (I, c)
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Deflection**: Positive downward
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - AISC Steel Construction Manual, Part 1: Dimensions and Properties

pub mod beam;
pub mod section;

pub use beam::{
    bending_stress,
    fixed_fixed_midspan_point_deflection,
    fixed_fixed_midspan_point_max_deflection,
    fixed_fixed_midspan_point_moment,
};

pub use section::{outer_fiber_distance, rectangular_moment_of_inertia};
