//! Load model for single-span beams
//!
//! Loads are plain value records. Placement is validated once, when a load is
//! created against a beam length; after that a [`LoadSet`] only grows.
//!
//! # Overview
//!
//! - [`PointLoad`] - concentrated force at a position
//! - [`DistributedLoad`] - uniform intensity over `[start, end]`
//! - [`LoadSet`] - append-only, order-preserving collection of both
//!
//! # Example
//! ```
//! use calc_core::loads::{DistributedLoad, LoadSet, PointLoad};
//!
//! let mut loads = LoadSet::new();
//! loads.push_point(PointLoad::checked(100.0, 5.0, 10.0).unwrap());
//! loads.push_distributed(DistributedLoad::checked(10.0, 0.0, 10.0, 10.0).unwrap());
//!
//! assert_eq!(loads.len(), 2);
//! assert_eq!(loads.total_force(), 200.0);
//! ```

mod distributed;
mod point;

pub use distributed::{DistributedLoad, LoadPortion};
pub use point::PointLoad;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Ordered point and distributed loads applied to one beam.
///
/// Order of insertion has no effect on the statics but is kept for reporting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadSet {
    /// Concentrated loads in insertion order
    pub point_loads: Vec<PointLoad>,
    /// Distributed loads in insertion order
    pub distributed_loads: Vec<DistributedLoad>,
}

impl LoadSet {
    /// Create an empty load set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point load
    pub fn push_point(&mut self, load: PointLoad) {
        self.point_loads.push(load);
    }

    /// Append a distributed load
    pub fn push_distributed(&mut self, load: DistributedLoad) {
        self.distributed_loads.push(load);
    }

    /// Total number of loads of either kind
    pub fn len(&self) -> usize {
        self.point_loads.len() + self.distributed_loads.len()
    }

    /// True when no load of either kind has been added
    pub fn is_empty(&self) -> bool {
        self.point_loads.is_empty() && self.distributed_loads.is_empty()
    }

    /// Sum of all applied forces (distributed loads as resultants)
    pub fn total_force(&self) -> f64 {
        let point: f64 = self.point_loads.iter().map(|p| p.magnitude).sum();
        let distributed: f64 = self.distributed_loads.iter().map(|d| d.total_force()).sum();
        point + distributed
    }

    /// Sum of load moments about x = 0
    pub fn moment_about_origin(&self) -> f64 {
        let point: f64 = self.point_loads.iter().map(|p| p.moment_about_origin()).sum();
        let distributed: f64 = self
            .distributed_loads
            .iter()
            .map(|d| d.total_force() * d.centroid())
            .sum();
        point + distributed
    }

    /// Positions where shear or moment change character: point load
    /// locations and distributed load boundaries.
    pub fn critical_positions(&self) -> Vec<f64> {
        let mut positions: Vec<f64> = self.point_loads.iter().map(|p| p.position).collect();
        for load in &self.distributed_loads {
            positions.push(load.start);
            positions.push(load.end);
        }
        positions.sort_by(f64::total_cmp);
        positions.dedup();
        positions
    }
}

pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"))
    }
}

pub(crate) fn within_span(position: f64, length: f64) -> bool {
    (0.0..=length).contains(&position)
}
