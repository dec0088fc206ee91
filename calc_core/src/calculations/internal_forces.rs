//! Internal Force Evaluation
//!
//! Shear V(x) and moment M(x) by superposition over the loads on one side of
//! a cut at `x`:
//!
//! - Cantilever: everything right of the cut (the free portion), starting from zero.
//! - Simply supported: start from `R_A` and subtract everything at or left of the cut.
//!
//! ## Cut Convention
//!
//! A point load located exactly at the cut belongs to the LEFT segment for
//! both support types. The cantilever right-side test is therefore `a > x` and
//! the simply-supported left-side test is `a <= x`. Distributed loads are
//! clipped at the cut, so they contribute continuously and a load starting
//! exactly at `x` is counted in full on the right.
//!
//! Shear and moment are discontinuous in value or slope at load points and
//! distributed load boundaries. That is expected beam behavior, not an error.

use crate::loads::LoadSet;
use crate::support::SupportType;

use super::reactions::ReactionSet;

/// Shear/moment evaluator borrowing a load set and its solved reactions.
///
/// Reactions are solved once by the caller and reused for every cut.
#[derive(Debug, Clone, Copy)]
pub struct InternalForces<'a> {
    loads: &'a LoadSet,
    support: SupportType,
    reactions: ReactionSet,
}

impl<'a> InternalForces<'a> {
    /// Create an evaluator for the given loads and reactions
    pub fn new(loads: &'a LoadSet, support: SupportType, reactions: ReactionSet) -> Self {
        InternalForces {
            loads,
            support,
            reactions,
        }
    }

    /// Shear force at position `x`
    pub fn shear_at(&self, x: f64) -> f64 {
        match self.support {
            SupportType::Cantilever => self.force_right_of(x),
            SupportType::SimplySupported => self.reactions.left() - self.force_left_of(x),
        }
    }

    /// Bending moment at position `x`
    pub fn moment_at(&self, x: f64) -> f64 {
        match self.support {
            SupportType::Cantilever => self.moment_right_of(x),
            SupportType::SimplySupported => self.reactions.left() * x - self.moment_left_of(x),
        }
    }

    fn force_right_of(&self, x: f64) -> f64 {
        let point: f64 = self
            .loads
            .point_loads
            .iter()
            .filter(|p| p.position > x)
            .map(|p| p.magnitude)
            .sum();
        let distributed: f64 = self
            .loads
            .distributed_loads
            .iter()
            .filter_map(|d| d.portion_right_of(x))
            .map(|portion| portion.force)
            .sum();
        point + distributed
    }

    fn moment_right_of(&self, x: f64) -> f64 {
        let point: f64 = self
            .loads
            .point_loads
            .iter()
            .filter(|p| p.position > x)
            .map(|p| p.magnitude * (p.position - x))
            .sum();
        let distributed: f64 = self
            .loads
            .distributed_loads
            .iter()
            .filter_map(|d| d.portion_right_of(x))
            .map(|portion| portion.force * (portion.centroid - x))
            .sum();
        point + distributed
    }

    fn force_left_of(&self, x: f64) -> f64 {
        let point: f64 = self
            .loads
            .point_loads
            .iter()
            .filter(|p| p.position <= x)
            .map(|p| p.magnitude)
            .sum();
        let distributed: f64 = self
            .loads
            .distributed_loads
            .iter()
            .filter_map(|d| d.portion_left_of(x))
            .map(|portion| portion.force)
            .sum();
        point + distributed
    }

    fn moment_left_of(&self, x: f64) -> f64 {
        let point: f64 = self
            .loads
            .point_loads
            .iter()
            .filter(|p| p.position <= x)
            .map(|p| p.magnitude * (x - p.position))
            .sum();
        let distributed: f64 = self
            .loads
            .distributed_loads
            .iter()
            .filter_map(|d| d.portion_left_of(x))
            .map(|portion| portion.force * (x - portion.centroid))
            .sum();
        point + distributed
    }
}
