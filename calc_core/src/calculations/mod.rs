//! # Beam Calculations
//!
//! The engine, leaf-first. Data flows one way:
//!
//! ```text
//! LoadSet ─► reactions ─► internal_forces ─► deflection ─► results
//! ```
//!
//! - [`reactions`] - closed-form support reactions
//! - [`internal_forces`] - shear V(x) and moment M(x) by superposition
//! - [`deflection`] - rectangle-rule integration with support boundary conditions
//! - [`results`] - sampled field, extremes and summary
//! - [`beam`] - the [`Beam`] aggregate that runs a calculation pass
//!
//! All result types are JSON-serializable.

pub mod beam;
pub mod deflection;
pub mod internal_forces;
pub mod reactions;
pub mod results;

// Re-export commonly used types
pub use beam::{Beam, BeamProperties};
pub use deflection::DeflectionCurve;
pub use internal_forces::InternalForces;
pub use reactions::ReactionSet;
pub use results::{AnalysisReport, Extreme, FieldSample, ResultSummary, SampledField};
