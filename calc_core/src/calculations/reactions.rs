//! Support Reactions
//!
//! Closed-form statics for the two support conditions. Both take moments
//! about the left end (x = 0):
//!
//! - Cantilever: `R = ΣP + Σwl`, `M = ΣPa + Σwl·c`
//! - Simply supported: `R_B = (ΣPa + Σwl·c) / L`, `R_A = ΣP_total − R_B`
//!
//! Reactions are recomputed on every call. The cost is linear in the number
//! of loads, so nothing is cached.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::LoadSet;
use crate::support::SupportType;

/// Support reactions, shaped by support type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "support", rename_all = "snake_case")]
pub enum ReactionSet {
    /// Force and moment at the fixed end
    Cantilever {
        /// Vertical reaction at x = 0
        r_fixed: f64,
        /// Moment reaction at x = 0
        m_fixed: f64,
    },
    /// Vertical reactions at both pins
    SimplySupported {
        /// Left reaction at x = 0
        r_a: f64,
        /// Right reaction at x = L
        r_b: f64,
    },
}

impl ReactionSet {
    /// Sum of vertical reaction components
    pub fn total_vertical(&self) -> f64 {
        match *self {
            ReactionSet::Cantilever { r_fixed, .. } => r_fixed,
            ReactionSet::SimplySupported { r_a, r_b } => r_a + r_b,
        }
    }

    /// Reaction carried at x = 0
    pub fn left(&self) -> f64 {
        match *self {
            ReactionSet::Cantilever { r_fixed, .. } => r_fixed,
            ReactionSet::SimplySupported { r_a, .. } => r_a,
        }
    }

    /// Moment reaction at x = 0 (zero for pinned supports)
    pub fn fixed_moment(&self) -> f64 {
        match *self {
            ReactionSet::Cantilever { m_fixed, .. } => m_fixed,
            ReactionSet::SimplySupported { .. } => 0.0,
        }
    }
}

/// Solve support reactions for a load set.
///
/// # Errors
///
/// `DegenerateBeam` if `length` is not positive.
pub fn solve(loads: &LoadSet, support: SupportType, length: f64) -> CalcResult<ReactionSet> {
    if length.is_nan() || length <= 0.0 {
        return Err(CalcError::DegenerateBeam { length });
    }

    let total = loads.total_force();
    let moment = loads.moment_about_origin();

    let reactions = match support {
        SupportType::Cantilever => ReactionSet::Cantilever {
            r_fixed: total,
            m_fixed: moment,
        },
        SupportType::SimplySupported => {
            let r_b = moment / length;
            ReactionSet::SimplySupported {
                r_a: total - r_b,
                r_b,
            }
        }
    };

    log::debug!("Reactions ({}): {:?}", support, reactions);
    Ok(reactions)
}
