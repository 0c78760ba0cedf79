//! # shotcrete_core - Shotcrete Panel Design Engine
//!
//! `shotcrete_core` evaluates structural-stability checks for shotcrete
//! support panels spanning between rock bolts in blocky ground. Given
//! geometry, material properties, and a chosen rock-block load model, it
//! computes demand and capacity for four independent failure modes
//! (adhesion, flexure, punching, direct shear) and reports the governing
//! mode under either a Factor-of-Safety or an LRFD convention.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: [`design::evaluate`] is a pure function; every call
//!   returns fresh, unshared data and is safe to run from worker threads
//! - **JSON-First**: all public types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Degrade, don't abort**: only the load model raises; a bad material
//!   property yields a failing mode, not a crashed evaluation
//!
//! ## Quick Start
//!
//! ```rust
//! use shotcrete_core::design::{DesignInput, evaluate};
//! use shotcrete_core::loads::PanelLoadModel;
//!
//! let input = DesignInput::new(1.5, 0.10, 0.25, 25.0,
//!     PanelLoadModel::PyramidalWedge { theta_deg: 60.0 });
//! let result = evaluate(&input).unwrap();
//! println!("{}", result.summary());
//! ```
//!
//! ## Modules
//!
//! - [`design`] - Design input/result types and the `evaluate` orchestrator
//! - [`loads`] - Rock-block load models (pyramid, flat block, shale wedge)
//! - [`capacity`] - Per-mode capacity/demand formulas and evaluators
//! - [`materials`] - Shotcrete material properties and age presets
//! - [`factors`] - Design conventions, reduction/load factors
//! - [`geology`] - Geology presets with suggested parameters
//! - [`sweep`] - Spacing sweeps for chart collaborators
//! - [`report`] - Flattened tabular reports for export collaborators
//! - [`units`] - Type-safe SI unit wrappers
//! - [`errors`] - Structured error types
//! - [`project`] - Scenario container and metadata
//! - [`file_io`] - Atomic project save/load

pub mod capacity;
pub mod design;
pub mod errors;
pub mod factors;
pub mod file_io;
pub mod geology;
pub mod loads;
pub mod materials;
pub mod project;
pub mod report;
pub mod sweep;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use design::{evaluate, DesignInput, DesignResult, FailureMode, ModeResult};
pub use errors::{CalcResult, DesignError};
pub use factors::{DesignConvention, DesignFactors};
pub use loads::PanelLoadModel;
pub use materials::ShotcreteMaterial;
