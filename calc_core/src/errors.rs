//! # Error Types
//!
//! Structured error types for calc_core. Every precondition violation in the
//! beam engine surfaces as one of these variants, raised synchronously at the
//! call that broke it. Nothing is retried or recovered internally; the calling
//! layer translates them into user feedback.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length: f64) -> CalcResult<()> {
//!     if length <= 0.0 {
//!         return Err(CalcError::invalid_geometry("length", length));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for beam calculations.
///
/// Each variant carries enough context to point at the offending value, and
/// serializes to `{"type": ..., "details": {...}}` JSON for API consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Non-positive (or non-finite) length, modulus or moment of inertia
    #[error("Invalid geometry: '{field}' must be a positive finite value, got {value}")]
    InvalidGeometry { field: String, value: f64 },

    /// A load position, or the resolved end of a distributed load, lies outside [0, L]
    #[error("{load} at {position} lies outside the beam span [0, {length}]")]
    OutOfBounds {
        load: String,
        position: f64,
        length: f64,
    },

    /// Support type string outside the recognized variants
    #[error("Unsupported support type: '{value}' (expected 'cantilever' or 'simply_supported')")]
    UnsupportedSupportType { value: String },

    /// Calculation requested with no loads applied
    #[error("At least one load must be applied before calculating")]
    EmptyLoadSet,

    /// Beam length is non-positive when solving reactions
    #[error("Degenerate beam: length {length} cannot carry reactions")]
    DegenerateBeam { length: f64 },

    /// An input value is invalid (non-finite, out of range, malformed)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A load in a request payload failed validation
    #[error("Invalid load #{index}: {source}")]
    InvalidLoad {
        /// 1-based position of the load in the request
        index: usize,
        source: Box<CalcError>,
    },

    /// Results were requested before `calculate` ran
    #[error("No results available - run calculate() first")]
    NotCalculated,

    /// JSON or CSV serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(field: impl Into<String>, value: f64) -> Self {
        CalcError::InvalidGeometry {
            field: field.into(),
            value,
        }
    }

    /// Create an OutOfBounds error
    pub fn out_of_bounds(load: impl Into<String>, position: f64, length: f64) -> Self {
        CalcError::OutOfBounds {
            load: load.into(),
            position,
            length,
        }
    }

    /// Create an UnsupportedSupportType error
    pub fn unsupported_support_type(value: impl Into<String>) -> Self {
        CalcError::UnsupportedSupportType {
            value: value.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an error with the 1-based index of the load that caused it
    pub fn invalid_load(index: usize, source: CalcError) -> Self {
        CalcError::InvalidLoad {
            index,
            source: Box::new(source),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::OutOfBounds { .. } => "OUT_OF_BOUNDS",
            CalcError::UnsupportedSupportType { .. } => "UNSUPPORTED_SUPPORT_TYPE",
            CalcError::EmptyLoadSet => "EMPTY_LOAD_SET",
            CalcError::DegenerateBeam { .. } => "DEGENERATE_BEAM",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidLoad { .. } => "INVALID_LOAD",
            CalcError::NotCalculated => "NOT_CALCULATED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

impl From<csv::Error> for CalcError {
    fn from(err: csv::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
