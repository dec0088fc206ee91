//! # calc_core - Single-Span Beam Statics Engine
//!
//! `calc_core` computes the static response of a single-span beam under point
//! and uniformly distributed transverse loads: support reactions, shear force,
//! bending moment and deflection. It is the computational core behind a
//! presentation layer (CLI, web form, API); rendering and routing live there.
//!
//! ## Design Philosophy
//!
//! - **Caller-owned**: every request builds its own [`Beam`]; there is no global state
//! - **Strongly typed**: untyped payloads are translated once, in [`request`]
//! - **JSON-First**: all inputs and outputs implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{Beam, SupportType};
//!
//! // 6 m simply-supported beam, 10 N/m over the full span
//! let mut beam = Beam::new(6.0, 200e9, 5e-6, SupportType::SimplySupported).unwrap();
//! beam.add_distributed_load(10.0, 0.0, 6.0).unwrap();
//! beam.calculate().unwrap();
//!
//! let results = beam.results().unwrap();
//! assert!((results.max_moment - 45.0).abs() < 1e-3);
//!
//! // Serialize for transmission
//! let json = serde_json::to_string_pretty(&results).unwrap();
//! assert!(json.contains("max_deflection"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - reactions, internal forces, deflection, results
//! - [`loads`] - point and distributed load records
//! - [`support`] - support conditions
//! - [`settings`] - analysis configuration
//! - [`request`] - payload translation for presentation layers
//! - [`errors`] - structured error types

pub mod calculations;
pub mod errors;
pub mod loads;
pub mod request;
pub mod settings;
pub mod support;

// Re-export commonly used types at crate root for convenience
pub use calculations::{AnalysisReport, Beam, BeamProperties, ReactionSet, ResultSummary, SampledField};
pub use errors::{CalcError, CalcResult};
pub use request::{analyze, BeamRequest, LoadRequest};
pub use settings::AnalysisSettings;
pub use support::SupportType;
