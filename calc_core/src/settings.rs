//! # Analysis Settings
//!
//! Numerical parameters for a calculation pass. The only knob is the grid
//! resolution, which trades deflection accuracy for evaluation cost. It is
//! bounded on both sides since request payloads may set it.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default number of grid samples over [0, L]
pub const DEFAULT_SAMPLE_POINTS: usize = 1000;

/// Fewest samples that still define a grid spacing
pub const MIN_SAMPLE_POINTS: usize = 2;

/// Most samples a single calculation pass will allocate
pub const MAX_SAMPLE_POINTS: usize = 100_000;

/// Settings applied to every calculation on a beam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Number of equally spaced samples, endpoints included
    pub sample_points: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            sample_points: DEFAULT_SAMPLE_POINTS,
        }
    }
}

impl AnalysisSettings {
    /// Set the number of grid samples
    pub fn with_sample_points(mut self, points: usize) -> Self {
        self.sample_points = points;
        self
    }

    /// Validate settings before a calculation pass.
    pub fn validate(&self) -> CalcResult<()> {
        if self.sample_points < MIN_SAMPLE_POINTS {
            return Err(CalcError::invalid_input(
                "sample_points",
                self.sample_points.to_string(),
                format!("At least {} samples are required", MIN_SAMPLE_POINTS),
            ));
        }
        if self.sample_points > MAX_SAMPLE_POINTS {
            return Err(CalcError::invalid_input(
                "sample_points",
                self.sample_points.to_string(),
                format!("At most {} samples are allowed", MAX_SAMPLE_POINTS),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AnalysisSettings::default();
        assert_eq!(settings.sample_points, 1000);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_too_few_samples() {
        let settings = AnalysisSettings::default().with_sample_points(1);
        assert_eq!(settings.validate().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_too_many_samples() {
        assert!(AnalysisSettings::default()
            .with_sample_points(MAX_SAMPLE_POINTS)
            .validate()
            .is_ok());

        for points in [MAX_SAMPLE_POINTS + 1, usize::MAX] {
            let err = AnalysisSettings::default().with_sample_points(points).validate().unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: AnalysisSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, AnalysisSettings::default());
    }
}
