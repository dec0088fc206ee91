//! # Single-Span Beam
//!
//! [`Beam`] is the caller-owned aggregate for one calculation request: fixed
//! geometry, material and support, an append-only [`LoadSet`], and the
//! [`SampledField`] produced by the most recent [`Beam::calculate`].
//!
//! ## Lifecycle
//!
//! 1. Construct with length, E, I and support type
//! 2. Append point and distributed loads
//! 3. `calculate()` samples the grid and integrates deflection
//! 4. `results()` / `field()` read the outcome
//!
//! Adding a load after `calculate()` discards the stored field, so results
//! never describe a stale load set.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::beam::Beam;
//! use calc_core::support::SupportType;
//!
//! // 10 m simply-supported beam, EI = 1e6
//! let mut beam = Beam::new(10.0, 200e9, 5e-6, SupportType::SimplySupported).unwrap();
//! beam.add_point_load(100.0, 5.0).unwrap();
//! beam.calculate().unwrap();
//!
//! let results = beam.results().unwrap();
//! assert!((results.max_moment - 250.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::{DistributedLoad, LoadSet, PointLoad};
use crate::settings::AnalysisSettings;
use crate::support::SupportType;

use super::internal_forces::InternalForces;
use super::reactions::{self, ReactionSet};
use super::results::{AnalysisReport, ResultSummary, SampledField};

/// Geometry, material and support of a beam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamProperties {
    /// Span length
    pub length: f64,
    /// Young's modulus E
    pub young_modulus: f64,
    /// Second moment of area I
    pub moment_inertia: f64,
    /// Flexural rigidity EI
    pub flexural_rigidity: f64,
    /// Support condition
    pub support_type: SupportType,
}

impl BeamProperties {
    /// Validate and build beam properties.
    pub fn new(length: f64, young_modulus: f64, moment_inertia: f64, support_type: SupportType) -> CalcResult<Self> {
        for (field, value) in [
            ("length", length),
            ("young_modulus", young_modulus),
            ("moment_inertia", moment_inertia),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_geometry(field, value));
            }
        }

        Ok(BeamProperties {
            length,
            young_modulus,
            moment_inertia,
            flexural_rigidity: young_modulus * moment_inertia,
            support_type,
        })
    }
}

/// A single-span beam with its loads and latest calculation.
#[derive(Debug, Clone)]
pub struct Beam {
    properties: BeamProperties,
    loads: LoadSet,
    settings: AnalysisSettings,
    field: Option<SampledField>,
}

impl Beam {
    /// Create a beam.
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` if length, modulus or moment of inertia is not a
    /// positive finite number.
    pub fn new(length: f64, young_modulus: f64, moment_inertia: f64, support_type: SupportType) -> CalcResult<Self> {
        let properties = BeamProperties::new(length, young_modulus, moment_inertia, support_type)?;
        log::info!(
            "Beam initialized: L={}, E={}, I={}, support={}",
            length,
            young_modulus,
            moment_inertia,
            support_type
        );
        Ok(Beam {
            properties,
            loads: LoadSet::new(),
            settings: AnalysisSettings::default(),
            field: None,
        })
    }

    /// Replace the analysis settings
    pub fn with_settings(mut self, settings: AnalysisSettings) -> Self {
        self.settings = settings;
        self.field = None;
        self
    }

    /// Geometry, material and support
    pub fn properties(&self) -> &BeamProperties {
        &self.properties
    }

    /// Applied loads
    pub fn loads(&self) -> &LoadSet {
        &self.loads
    }

    /// Analysis settings
    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Span length
    pub fn length(&self) -> f64 {
        self.properties.length
    }

    /// Support condition
    pub fn support_type(&self) -> SupportType {
        self.properties.support_type
    }

    /// Add a point load at `position` from the left end.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `position` lies outside [0, L]. The load set is left
    /// unchanged on failure.
    pub fn add_point_load(&mut self, magnitude: f64, position: f64) -> CalcResult<()> {
        let load = PointLoad::checked(magnitude, position, self.properties.length).inspect_err(|e| {
            log::warn!("Rejected point load: {}", e);
        })?;
        self.loads.push_point(load);
        self.field = None;
        log::info!("Added point load: {} at {}", magnitude, position);
        Ok(())
    }

    /// Add a uniform load of intensity `magnitude` over `[start, start + length]`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if the start or resolved end lies outside [0, L]. The
    /// load set is left unchanged on failure.
    pub fn add_distributed_load(&mut self, magnitude: f64, start: f64, length: f64) -> CalcResult<()> {
        let load = DistributedLoad::checked(magnitude, start, length, self.properties.length).inspect_err(|e| {
            log::warn!("Rejected distributed load: {}", e);
        })?;
        self.loads.push_distributed(load);
        self.field = None;
        log::info!("Added distributed load: {}/unit from {} to {}", magnitude, load.start, load.end);
        Ok(())
    }

    /// Solve support reactions for the current loads
    pub fn reactions(&self) -> CalcResult<ReactionSet> {
        reactions::solve(&self.loads, self.properties.support_type, self.properties.length)
    }

    /// Shear force at `x`
    pub fn shear_at(&self, x: f64) -> CalcResult<f64> {
        self.check_position(x)?;
        let reactions = self.reactions()?;
        Ok(self.internal_forces(reactions).shear_at(x))
    }

    /// Bending moment at `x`
    pub fn moment_at(&self, x: f64) -> CalcResult<f64> {
        self.check_position(x)?;
        let reactions = self.reactions()?;
        Ok(self.internal_forces(reactions).moment_at(x))
    }

    /// Run a full calculation pass and store the sampled field.
    ///
    /// Repeated calls with the same loads produce identical fields.
    ///
    /// # Errors
    ///
    /// `EmptyLoadSet` if no loads were added; `InvalidInput` if the sample
    /// count is outside the allowed range.
    /// Nothing is sampled when a precondition fails.
    pub fn calculate(&mut self) -> CalcResult<()> {
        if self.loads.is_empty() {
            return Err(CalcError::EmptyLoadSet);
        }

        let reactions = self.reactions()?;
        let forces = self.internal_forces(reactions);
        log::debug!(
            "Sampling {} points over L={}",
            self.settings.sample_points,
            self.properties.length
        );
        let field = SampledField::build(
            &forces,
            self.properties.length,
            self.properties.flexural_rigidity,
            self.properties.support_type,
            &self.settings,
        )?;

        log::info!(
            "Calculations complete: max deflection={:.6}, max moment={:.2}",
            field.max_deflection().value,
            field.max_moment().value
        );
        self.field = Some(field);
        Ok(())
    }

    /// Sampled field from the latest calculation, if any
    pub fn field(&self) -> Option<&SampledField> {
        self.field.as_ref()
    }

    /// Summary of the latest calculation, with freshly solved reactions.
    ///
    /// # Errors
    ///
    /// `NotCalculated` if `calculate()` has not run since the last load was added.
    pub fn results(&self) -> CalcResult<ResultSummary> {
        let field = self.field.as_ref().ok_or(CalcError::NotCalculated)?;
        let reactions = self.reactions()?;
        let forces = self.internal_forces(reactions);
        Ok(ResultSummary::assemble(self.properties, &self.loads, reactions, field, &forces))
    }

    /// Summary plus sampled field
    pub fn report(&self) -> CalcResult<AnalysisReport> {
        let summary = self.results()?;
        let field = self.field.clone().ok_or(CalcError::NotCalculated)?;
        Ok(AnalysisReport { summary, field })
    }

    fn internal_forces(&self, reactions: ReactionSet) -> InternalForces<'_> {
        InternalForces::new(&self.loads, self.properties.support_type, reactions)
    }

    fn check_position(&self, x: f64) -> CalcResult<()> {
        if !(0.0..=self.properties.length).contains(&x) {
            return Err(CalcError::out_of_bounds("Evaluation point", x, self.properties.length));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.001; // 0.1% tolerance

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-10 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    #[test]
    fn test_invalid_geometry() {
        let err = Beam::new(0.0, 200e9, 1e-6, SupportType::Cantilever).unwrap_err();
        assert_eq!(err, CalcError::invalid_geometry("length", 0.0));

        let err = Beam::new(5.0, -1.0, 1e-6, SupportType::Cantilever).unwrap_err();
        assert_eq!(err, CalcError::invalid_geometry("young_modulus", -1.0));

        let err = Beam::new(5.0, 200e9, f64::NAN, SupportType::Cantilever).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_flexural_rigidity() {
        let beam = Beam::new(5.0, 200e9, 5e-6, SupportType::Cantilever).unwrap();
        assert!(approx_eq(beam.properties().flexural_rigidity, 1e6, 1e-12));
    }

    #[test]
    fn test_rejected_load_leaves_set_unchanged() {
        let mut beam = Beam::new(10.0, 1e6, 1.0, SupportType::SimplySupported).unwrap();
        beam.add_point_load(10.0, 2.0).unwrap();

        let before = beam.loads().clone();
        assert!(beam.add_point_load(10.0, 10.001).is_err());
        assert!(beam.add_distributed_load(5.0, 8.0, 3.0).is_err());
        assert_eq!(beam.loads(), &before);
    }

    #[test]
    fn test_calculate_requires_loads() {
        let mut beam = Beam::new(10.0, 1e6, 1.0, SupportType::SimplySupported).unwrap();
        assert_eq!(beam.calculate().unwrap_err(), CalcError::EmptyLoadSet);
        assert!(beam.field().is_none());
    }

    #[test]
    fn test_results_before_calculate() {
        let mut beam = Beam::new(10.0, 1e6, 1.0, SupportType::SimplySupported).unwrap();
        beam.add_point_load(10.0, 2.0).unwrap();
        assert_eq!(beam.results().unwrap_err(), CalcError::NotCalculated);
    }

    #[test]
    fn test_new_load_discards_field() {
        let mut beam = Beam::new(10.0, 1e6, 1.0, SupportType::SimplySupported).unwrap();
        beam.add_point_load(10.0, 2.0).unwrap();
        beam.calculate().unwrap();
        assert!(beam.field().is_some());

        beam.add_point_load(10.0, 8.0).unwrap();
        assert!(beam.field().is_none());
        assert_eq!(beam.results().unwrap_err(), CalcError::NotCalculated);
    }

    #[test]
    fn test_sample_points_setting() {
        let mut beam = Beam::new(4.0, 1e6, 1.0, SupportType::Cantilever)
            .unwrap()
            .with_settings(AnalysisSettings::default().with_sample_points(5));
        beam.add_point_load(50.0, 4.0).unwrap();
        beam.calculate().unwrap();

        let field = beam.field().unwrap();
        assert_eq!(field.positions(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_bad_sample_points_setting() {
        for points in [0, 1, crate::settings::MAX_SAMPLE_POINTS + 1, usize::MAX] {
            let mut beam = Beam::new(4.0, 1e6, 1.0, SupportType::Cantilever)
                .unwrap()
                .with_settings(AnalysisSettings::default().with_sample_points(points));
            beam.add_point_load(50.0, 4.0).unwrap();
            assert_eq!(beam.calculate().unwrap_err().error_code(), "INVALID_INPUT");
            assert!(beam.field().is_none());
        }
    }

    #[test]
    fn test_point_queries() {
        let mut beam = Beam::new(10.0, 1e6, 1.0, SupportType::SimplySupported).unwrap();
        beam.add_distributed_load(10.0, 0.0, 10.0).unwrap();

        assert!(approx_eq(beam.moment_at(5.0).unwrap(), 125.0, EPSILON));
        assert!(approx_eq(beam.shear_at(0.0).unwrap(), 50.0, EPSILON));
        assert_eq!(beam.shear_at(10.5).unwrap_err().error_code(), "OUT_OF_BOUNDS");
    }

    #[test]
    fn test_summary_echoes_inputs() {
        let mut beam = Beam::new(6.0, 2e6, 0.5, SupportType::SimplySupported).unwrap();
        beam.add_distributed_load(10.0, 0.0, 6.0).unwrap();
        beam.add_point_load(5.0, 1.0).unwrap();
        beam.calculate().unwrap();

        let summary = beam.results().unwrap();
        assert_eq!(summary.beam_properties.support_type, SupportType::SimplySupported);
        assert!(approx_eq(summary.beam_properties.flexural_rigidity, 1e6, 1e-12));
        assert_eq!(summary.loads.point_loads.len(), 1);
        assert_eq!(summary.loads.distributed_loads[0].end, 6.0);
    }
}
