//! Sampled Fields and Result Summary
//!
//! A calculation pass evaluates shear and moment on a uniform grid, feeds the
//! moment samples to the deflection integrator, and keeps the lot as a
//! read-only [`SampledField`]. [`ResultSummary`] is a view over that field plus
//! a freshly solved [`ReactionSet`].
//!
//! The field carries everything an external renderer needs to draw shear,
//! moment and deflection diagrams; the echoed load lists cover the load diagram.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::LoadSet;
use crate::settings::AnalysisSettings;
use crate::support::SupportType;

use super::beam::BeamProperties;
use super::deflection;
use super::internal_forces::InternalForces;
use super::reactions::ReactionSet;

/// One grid sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSample {
    /// Position from the left end
    pub x: f64,
    /// Shear force
    pub shear: f64,
    /// Bending moment
    pub moment: f64,
    /// Deflection
    pub deflection: f64,
}

/// Shear, moment and deflection over a uniform grid on [0, L].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledField {
    /// Samples ordered by position, endpoints included
    pub samples: Vec<FieldSample>,
    /// Corrected slope per sample, when the integration scheme produces one
    pub slope: Option<Vec<f64>>,
}

/// Largest absolute value of a field and where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extreme {
    /// Absolute value
    pub value: f64,
    /// Position from the left end
    pub position: f64,
}

impl Extreme {
    fn consider(&mut self, position: f64, value: f64) {
        if value.abs() > self.value {
            self.value = value.abs();
            self.position = position;
        }
    }

    fn over(samples: impl Iterator<Item = (f64, f64)>) -> Self {
        let mut extreme = Extreme::default();
        for (x, value) in samples {
            extreme.consider(x, value);
        }
        extreme
    }
}

impl SampledField {
    /// Evaluate a beam on `settings.sample_points` equally spaced positions.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the sample count is outside the allowed range.
    pub fn build(
        forces: &InternalForces<'_>,
        length: f64,
        flexural_rigidity: f64,
        support: SupportType,
        settings: &AnalysisSettings,
    ) -> CalcResult<Self> {
        settings.validate()?;
        let sample_points = settings.sample_points;
        let last = (sample_points - 1) as f64;
        let positions: Vec<f64> = (0..sample_points)
            .map(|i| length * i as f64 / last)
            .collect();

        let shear: Vec<f64> = positions.iter().map(|&x| forces.shear_at(x)).collect();
        let moment: Vec<f64> = positions.iter().map(|&x| forces.moment_at(x)).collect();
        let curve = deflection::integrate(&moment, length, flexural_rigidity, support)?;

        let samples = positions
            .iter()
            .zip(shear.iter())
            .zip(moment.iter())
            .zip(curve.deflection.iter())
            .map(|(((&x, &shear), &moment), &deflection)| FieldSample {
                x,
                shear,
                moment,
                deflection,
            })
            .collect();

        Ok(SampledField {
            samples,
            slope: curve.slope,
        })
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the field holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Grid positions
    pub fn positions(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.x).collect()
    }

    /// Shear column
    pub fn shear(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.shear).collect()
    }

    /// Moment column
    pub fn moment(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.moment).collect()
    }

    /// Deflection column
    pub fn deflection(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.deflection).collect()
    }

    /// Largest |shear| on the grid
    pub fn max_shear(&self) -> Extreme {
        Extreme::over(self.samples.iter().map(|s| (s.x, s.shear)))
    }

    /// Largest |moment| on the grid
    pub fn max_moment(&self) -> Extreme {
        Extreme::over(self.samples.iter().map(|s| (s.x, s.moment)))
    }

    /// Largest |deflection| on the grid
    pub fn max_deflection(&self) -> Extreme {
        Extreme::over(self.samples.iter().map(|s| (s.x, s.deflection)))
    }

    /// Render as CSV with a `x,shear,moment,deflection` header
    pub fn to_csv(&self) -> CalcResult<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for sample in &self.samples {
            writer.serialize(sample)?;
        }
        let bytes = writer.into_inner().map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })?;
        String::from_utf8(bytes).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })
    }
}

/// Summary of a calculation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Support reactions
    pub reactions: ReactionSet,
    /// Maximum |deflection|
    pub max_deflection: f64,
    /// Position of maximum |deflection|
    pub max_deflection_position: f64,
    /// Maximum |moment|
    pub max_moment: f64,
    /// Position of maximum |moment|
    pub max_moment_position: f64,
    /// Maximum |shear|
    pub max_shear: f64,
    /// Position of maximum |shear|
    pub max_shear_position: f64,
    /// Echoed beam geometry, material and support
    pub beam_properties: BeamProperties,
    /// Echoed loads in insertion order
    pub loads: LoadSet,
}

impl ResultSummary {
    /// Assemble a summary from a sampled field.
    ///
    /// Shear and moment extremes also consider the load positions themselves,
    /// which a uniform grid generally steps over (e.g. a midspan point load
    /// on an even sample count).
    pub fn assemble(
        properties: BeamProperties,
        loads: &LoadSet,
        reactions: ReactionSet,
        field: &SampledField,
        forces: &InternalForces<'_>,
    ) -> Self {
        let mut max_shear = field.max_shear();
        let mut max_moment = field.max_moment();
        for x in loads.critical_positions() {
            max_shear.consider(x, forces.shear_at(x));
            max_moment.consider(x, forces.moment_at(x));
        }
        let max_deflection = field.max_deflection();

        ResultSummary {
            reactions,
            max_deflection: max_deflection.value,
            max_deflection_position: max_deflection.position,
            max_moment: max_moment.value,
            max_moment_position: max_moment.position,
            max_shear: max_shear.value,
            max_shear_position: max_shear.position,
            beam_properties: properties,
            loads: loads.clone(),
        }
    }
}

/// Everything a presentation layer needs from one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Reactions, extremes and echoed inputs
    pub summary: ResultSummary,
    /// Sampled diagrams
    pub field: SampledField,
}
