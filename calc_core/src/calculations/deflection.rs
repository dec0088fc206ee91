//! Deflection Integration
//!
//! Turns a moment field sampled on a uniform grid into a deflection curve
//! with first-order (rectangle rule) integration. This is an approximation of
//! the elastic curve `EI·y'' = M(x)`, not a closed-form solution.
//!
//! ## Cantilever (y(0) = 0, y'(0) = 0)
//!
//! Single forward pass:
//!
//! ```text
//! y[i] = y[i-1] + M[i]·dx² / (2·EI)
//! ```
//!
//! Known accuracy limitation: this is not a nested double integration and
//! drifts from the closed-form curve (e.g. `PL³/3EI` for a tip load),
//! especially at coarse grids. It is kept as-is; no slope array is produced.
//!
//! ## Simply Supported (y(0) = 0, y(L) = 0)
//!
//! 1. `θ[i] = θ[i-1] + M[i]·dx / EI`
//! 2. `θ += (−θ[last] / L)·x`
//! 3. `y[i] = y[i-1] + θ[i]·dx`
//! 4. Close the curve on the chord: `y -= y[last]·x / L` (and `θ -= y[last] / L`)
//!
//! Step 4 is a no-op for symmetric loading; for asymmetric loading it is what
//! makes `y(L) = 0` hold exactly.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::settings::MIN_SAMPLE_POINTS;
use crate::support::SupportType;

/// Integrated deflection (and slope, where the scheme produces one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflectionCurve {
    /// Corrected slope at each sample (simply supported only)
    pub slope: Option<Vec<f64>>,
    /// Deflection at each sample
    pub deflection: Vec<f64>,
}

/// Integrate a moment field sampled at equally spaced points over `[0, length]`.
///
/// # Errors
///
/// `InvalidInput` if fewer than two samples are given or `ei` is not positive.
pub fn integrate(moments: &[f64], length: f64, ei: f64, support: SupportType) -> CalcResult<DeflectionCurve> {
    let n = moments.len();
    if n < MIN_SAMPLE_POINTS {
        return Err(CalcError::invalid_input(
            "moments",
            n.to_string(),
            format!("At least {} samples are required", MIN_SAMPLE_POINTS),
        ));
    }
    if ei.is_nan() || ei <= 0.0 {
        return Err(CalcError::invalid_input("ei", ei.to_string(), "Flexural rigidity must be positive"));
    }
    if length.is_nan() || length <= 0.0 {
        return Err(CalcError::DegenerateBeam { length });
    }

    let dx = length / (n - 1) as f64;
    let curve = match support {
        SupportType::Cantilever => cantilever(moments, dx, ei),
        SupportType::SimplySupported => simply_supported(moments, dx, length, ei),
    };
    Ok(curve)
}

fn cantilever(moments: &[f64], dx: f64, ei: f64) -> DeflectionCurve {
    let factor = dx * dx / (2.0 * ei);
    let mut deflection = vec![0.0; moments.len()];
    for i in 1..moments.len() {
        deflection[i] = deflection[i - 1] + moments[i] * factor;
    }
    DeflectionCurve {
        slope: None,
        deflection,
    }
}

fn simply_supported(moments: &[f64], dx: f64, length: f64, ei: f64) -> DeflectionCurve {
    let n = moments.len();
    let last = n - 1;

    let mut slope = vec![0.0; n];
    for i in 1..n {
        slope[i] = slope[i - 1] + moments[i] * dx / ei;
    }

    let correction = -slope[last] / length;
    for (i, theta) in slope.iter_mut().enumerate() {
        *theta += correction * (i as f64 * dx);
    }

    let mut deflection = vec![0.0; n];
    for i in 1..n {
        deflection[i] = deflection[i - 1] + slope[i] * dx;
    }

    // Chord closure, exact at the last sample
    let closure = deflection[last];
    for (i, y) in deflection.iter_mut().enumerate() {
        *y -= closure * (i as f64 / last as f64);
    }
    for theta in slope.iter_mut() {
        *theta -= closure / length;
    }

    DeflectionCurve {
        slope: Some(slope),
        deflection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_samples() {
        let err = integrate(&[1.0], 1.0, 1.0, SupportType::Cantilever).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_positive_rigidity() {
        let err = integrate(&[1.0, 1.0], 1.0, 0.0, SupportType::SimplySupported).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_cantilever_single_pass() {
        // dx = 1, factor = 1 / (2 * 2)
        let curve = integrate(&[4.0, 4.0, 8.0], 2.0, 2.0, SupportType::Cantilever).unwrap();
        assert_eq!(curve.deflection, vec![0.0, 1.0, 3.0]);
        assert!(curve.slope.is_none());
    }

    #[test]
    fn test_zero_moment_gives_zero_deflection() {
        let moments = vec![0.0; 11];
        for support in [SupportType::Cantilever, SupportType::SimplySupported] {
            let curve = integrate(&moments, 5.0, 1e6, support).unwrap();
            assert!(curve.deflection.iter().all(|y| *y == 0.0));
        }
    }

    #[test]
    fn test_simply_supported_endpoints_pinned() {
        // Asymmetric triangular moment field
        let moments: Vec<f64> = (0..101)
            .map(|i| {
                let x = i as f64 * 0.1;
                if x <= 3.0 { 70.0 * x } else { 70.0 * x - 100.0 * (x - 3.0) }
            })
            .collect();
        let curve = integrate(&moments, 10.0, 1e4, SupportType::SimplySupported).unwrap();

        let last = *curve.deflection.last().unwrap();
        assert_eq!(curve.deflection[0], 0.0);
        assert!(last.abs() < 1e-15);
        assert!(curve.deflection.iter().any(|y| y.abs() > 1e-4));
        assert_eq!(curve.slope.unwrap().len(), 101);
    }
}
