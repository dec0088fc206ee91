//! Concentrated loads

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A concentrated transverse load.
///
/// Positive magnitude acts in the same sense as the support reactions resist
/// (i.e. a positive load produces positive reactions).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Load magnitude (force units)
    pub magnitude: f64,
    /// Distance from the left end (x = 0)
    pub position: f64,
}

impl PointLoad {
    /// Create a point load without bounds checking
    pub fn new(magnitude: f64, position: f64) -> Self {
        PointLoad { magnitude, position }
    }

    /// Create a point load, validating it against a beam of the given length.
    pub fn checked(magnitude: f64, position: f64, beam_length: f64) -> CalcResult<Self> {
        super::require_finite("magnitude", magnitude)?;
        super::require_finite("position", position)?;
        if !super::within_span(position, beam_length) {
            return Err(CalcError::out_of_bounds("Point load", position, beam_length));
        }
        Ok(PointLoad::new(magnitude, position))
    }

    /// Moment of this load about x = 0
    pub fn moment_about_origin(&self) -> f64 {
        self.magnitude * self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_accepts_span_endpoints() {
        assert!(PointLoad::checked(10.0, 0.0, 5.0).is_ok());
        assert!(PointLoad::checked(10.0, 5.0, 5.0).is_ok());
    }

    #[test]
    fn test_checked_rejects_outside_span() {
        let err = PointLoad::checked(10.0, 5.001, 5.0).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_BOUNDS");
        let err = PointLoad::checked(10.0, -0.1, 5.0).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_BOUNDS");
    }

    #[test]
    fn test_checked_rejects_nan() {
        let err = PointLoad::checked(f64::NAN, 1.0, 5.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
