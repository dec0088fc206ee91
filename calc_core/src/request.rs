//! # Request Translation
//!
//! Presentation layers hand over loosely-typed payloads (form fields, JSON
//! bodies). This module is the single place where such a payload becomes a
//! strongly-typed [`Beam`]; nothing past it accepts strings for numbers or
//! support types.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "length": 6.0,
//!   "young_modulus": 200e9,
//!   "moment_inertia": 5e-6,
//!   "support_type": "simply_supported",
//!   "loads": [
//!     { "type": "point", "magnitude": 100.0, "position": 2.0 },
//!     { "type": "distributed", "magnitude": 10.0, "position": 0.0, "length": 6.0 }
//!   ]
//! }
//! ```
//!
//! A distributed load without `length` covers 1.0 length unit from its start.

use serde::{Deserialize, Serialize};

use crate::calculations::{AnalysisReport, Beam};
use crate::errors::{CalcError, CalcResult};
use crate::settings::AnalysisSettings;
use crate::support::SupportType;

/// Loaded length used when a distributed load omits `length`
pub const DEFAULT_DISTRIBUTED_LENGTH: f64 = 1.0;

/// One load entry in a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LoadRequest {
    /// Concentrated load at `position`
    Point { magnitude: f64, position: f64 },
    /// Uniform load starting at `position`
    Distributed {
        magnitude: f64,
        position: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        length: Option<f64>,
    },
}

/// A complete calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamRequest {
    /// Span length
    pub length: f64,
    /// Young's modulus
    pub young_modulus: f64,
    /// Second moment of area
    pub moment_inertia: f64,
    /// `"cantilever"` or `"simply_supported"`
    #[serde(default = "default_support_type")]
    pub support_type: String,
    /// Loads in the order they should be applied
    #[serde(default)]
    pub loads: Vec<LoadRequest>,
    /// Grid resolution override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_points: Option<usize>,
}

fn default_support_type() -> String {
    SupportType::default().code().to_string()
}

impl BeamRequest {
    /// Parse a request from JSON
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the request and build a loaded beam.
    ///
    /// Checks run in order: support type, sample points, geometry, presence
    /// of loads, then each load. A failing load is reported with its 1-based
    /// index.
    pub fn into_beam(&self) -> CalcResult<Beam> {
        let support: SupportType = self.support_type.parse()?;
        let mut settings = AnalysisSettings::default();
        if let Some(points) = self.sample_points {
            settings = settings.with_sample_points(points);
        }
        settings.validate()?;

        let mut beam = Beam::new(self.length, self.young_modulus, self.moment_inertia, support)?.with_settings(settings);

        if self.loads.is_empty() {
            return Err(CalcError::EmptyLoadSet);
        }
        for (i, load) in self.loads.iter().enumerate() {
            let added = match *load {
                LoadRequest::Point { magnitude, position } => beam.add_point_load(magnitude, position),
                LoadRequest::Distributed {
                    magnitude,
                    position,
                    length,
                } => beam.add_distributed_load(magnitude, position, length.unwrap_or(DEFAULT_DISTRIBUTED_LENGTH)),
            };
            added.map_err(|e| CalcError::invalid_load(i + 1, e))?;
        }
        Ok(beam)
    }
}

/// Run a request end to end: validate, load, calculate, summarize.
///
/// # Example
///
/// ```rust
/// use calc_core::request::{analyze, BeamRequest};
///
/// let request = BeamRequest::from_json(r#"{
///     "length": 4.0, "young_modulus": 1e6, "moment_inertia": 1.0,
///     "support_type": "cantilever",
///     "loads": [{ "type": "point", "magnitude": 50.0, "position": 4.0 }]
/// }"#).unwrap();
///
/// let report = analyze(&request).unwrap();
/// assert_eq!(report.summary.max_moment, 200.0);
/// ```
pub fn analyze(request: &BeamRequest) -> CalcResult<AnalysisReport> {
    let mut beam = request.into_beam()?;
    beam.calculate()?;
    beam.report()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(support_type: &str, loads: Vec<LoadRequest>) -> BeamRequest {
        BeamRequest {
            length: 6.0,
            young_modulus: 1e6,
            moment_inertia: 1.0,
            support_type: support_type.to_string(),
            loads,
            sample_points: None,
        }
    }

    #[test]
    fn test_parse_request() {
        let json = r#"{
            "length": 6.0,
            "young_modulus": 200e9,
            "moment_inertia": 5e-6,
            "loads": [
                { "type": "point", "magnitude": 100.0, "position": 2.0 },
                { "type": "distributed", "magnitude": 10.0, "position": 1.0 }
            ]
        }"#;
        let request = BeamRequest::from_json(json).unwrap();
        assert_eq!(request.support_type, "simply_supported");
        assert_eq!(request.loads.len(), 2);
        assert_eq!(
            request.loads[1],
            LoadRequest::Distributed {
                magnitude: 10.0,
                position: 1.0,
                length: None
            }
        );
    }

    #[test]
    fn test_malformed_json() {
        let err = BeamRequest::from_json("{\"length\": \"six\"}").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_default_distributed_length() {
        let beam = request(
            "simply_supported",
            vec![LoadRequest::Distributed {
                magnitude: 10.0,
                position: 2.0,
                length: None,
            }],
        )
        .into_beam()
        .unwrap();
        assert_eq!(beam.loads().distributed_loads[0].end, 3.0);
    }

    #[test]
    fn test_unknown_support_type() {
        let err = request("propped", vec![LoadRequest::Point { magnitude: 1.0, position: 1.0 }])
            .into_beam()
            .unwrap_err();
        assert_eq!(err, CalcError::unsupported_support_type("propped"));
    }

    #[test]
    fn test_empty_loads() {
        let err = request("cantilever", Vec::new()).into_beam().unwrap_err();
        assert_eq!(err, CalcError::EmptyLoadSet);
    }

    #[test]
    fn test_failing_load_is_indexed() {
        let err = request(
            "cantilever",
            vec![
                LoadRequest::Point { magnitude: 1.0, position: 1.0 },
                LoadRequest::Point { magnitude: 1.0, position: 7.0 },
            ],
        )
        .into_beam()
        .unwrap_err();

        match err {
            CalcError::InvalidLoad { index, source } => {
                assert_eq!(index, 2);
                assert_eq!(source.error_code(), "OUT_OF_BOUNDS");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_oversized_sample_points_rejected() {
        let mut req = request("cantilever", vec![LoadRequest::Point { magnitude: 1.0, position: 6.0 }]);
        req.sample_points = Some(usize::MAX);
        let err = req.into_beam().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_sample_points_override() {
        let mut req = request("cantilever", vec![LoadRequest::Point { magnitude: 1.0, position: 6.0 }]);
        req.sample_points = Some(61);
        let report = analyze(&req).unwrap();
        assert_eq!(report.field.len(), 61);
    }
}
