//! Uniformly distributed loads over part or all of the span

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A uniform line load between `start` and `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Intensity (force per unit length)
    pub magnitude: f64,
    /// Start position from the left end
    pub start: f64,
    /// End position from the left end (resolved as start + length)
    pub end: f64,
}

/// Resultant of the part of a distributed load on one side of a cut
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadPortion {
    /// Total force of the portion
    pub force: f64,
    /// Centroid position of the portion
    pub centroid: f64,
}

impl DistributedLoad {
    /// Create a distributed load from its end points without bounds checking
    pub fn new(magnitude: f64, start: f64, end: f64) -> Self {
        DistributedLoad { magnitude, start, end }
    }

    /// Create a distributed load from a start position and loaded length,
    /// validating both ends against a beam of the given length.
    pub fn checked(magnitude: f64, start: f64, length: f64, beam_length: f64) -> CalcResult<Self> {
        super::require_finite("magnitude", magnitude)?;
        super::require_finite("start", start)?;
        super::require_finite("length", length)?;

        let end = start + length;
        if !super::within_span(start, beam_length) {
            return Err(CalcError::out_of_bounds("Distributed load start", start, beam_length));
        }
        if !super::within_span(end, beam_length) || end < start {
            return Err(CalcError::out_of_bounds("Distributed load end", end, beam_length));
        }
        Ok(DistributedLoad::new(magnitude, start, end))
    }

    /// Loaded length
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Resultant force w·(end − start)
    pub fn total_force(&self) -> f64 {
        self.magnitude * self.length()
    }

    /// Midpoint of the loaded span
    pub fn centroid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// The part of this load lying right of the cut at `x`.
    ///
    /// A load starting exactly at `x` is counted in full.
    pub fn portion_right_of(&self, x: f64) -> Option<LoadPortion> {
        if self.end <= x {
            return None;
        }
        let from = self.start.max(x);
        Some(LoadPortion {
            force: self.magnitude * (self.end - from),
            centroid: (from + self.end) / 2.0,
        })
    }

    /// The part of this load lying at or left of the cut at `x`.
    pub fn portion_left_of(&self, x: f64) -> Option<LoadPortion> {
        if self.start > x {
            return None;
        }
        let to = self.end.min(x);
        Some(LoadPortion {
            force: self.magnitude * (to - self.start),
            centroid: (self.start + to) / 2.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_resolves_end() {
        let load = DistributedLoad::checked(10.0, 1.0, 3.0, 6.0).unwrap();
        assert_eq!(load.end, 4.0);
        assert_eq!(load.total_force(), 30.0);
        assert_eq!(load.centroid(), 2.5);
    }

    #[test]
    fn test_checked_rejects_end_past_span() {
        let err = DistributedLoad::checked(10.0, 4.0, 2.5, 6.0).unwrap_err();
        assert_eq!(err, CalcError::out_of_bounds("Distributed load end", 6.5, 6.0));
    }

    #[test]
    fn test_checked_rejects_negative_length() {
        let err = DistributedLoad::checked(10.0, 4.0, -1.0, 6.0).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_BOUNDS");
    }

    #[test]
    fn test_portions_split_at_cut() {
        let load = DistributedLoad::new(10.0, 2.0, 6.0);

        let right = load.portion_right_of(3.0).unwrap();
        assert_eq!(right.force, 30.0);
        assert_eq!(right.centroid, 4.5);

        let left = load.portion_left_of(3.0).unwrap();
        assert_eq!(left.force, 10.0);
        assert_eq!(left.centroid, 2.5);

        assert!(load.portion_right_of(6.0).is_none());
        assert!(load.portion_left_of(1.9).is_none());
    }

    #[test]
    fn test_load_starting_at_cut_counts_fully_right() {
        let load = DistributedLoad::new(5.0, 2.0, 4.0);
        let right = load.portion_right_of(2.0).unwrap();
        assert_eq!(right.force, load.total_force());
        assert_eq!(load.portion_left_of(2.0).unwrap().force, 0.0);
    }
}
