//! # Support Conditions
//!
//! The two boundary conditions the engine understands. The enum is closed, so
//! an unsupported support can only arrive as a string from a presentation
//! layer; [`SupportType::from_str`] is where it gets rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Support condition of a single-span beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportType {
    /// Fixed at x = 0 (zero displacement and slope), free at x = L
    Cantilever,
    /// Pinned at x = 0 and x = L, free to rotate at both ends
    #[default]
    SimplySupported,
}

impl SupportType {
    /// Identifier used in request payloads and JSON output
    pub fn code(&self) -> &'static str {
        match self {
            SupportType::Cantilever => "cantilever",
            SupportType::SimplySupported => "simply_supported",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportType::Cantilever => "Cantilever",
            SupportType::SimplySupported => "Simply Supported",
        }
    }
}

impl fmt::Display for SupportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for SupportType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cantilever" => Ok(SupportType::Cantilever),
            "simply_supported" | "simply-supported" | "simple" => Ok(SupportType::SimplySupported),
            _ => Err(CalcError::unsupported_support_type(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_support_type() {
        assert_eq!("cantilever".parse::<SupportType>().unwrap(), SupportType::Cantilever);
        assert_eq!(
            " Simply_Supported ".parse::<SupportType>().unwrap(),
            SupportType::SimplySupported
        );
    }

    #[test]
    fn test_parse_unknown_support_type() {
        let err = "fixed_fixed".parse::<SupportType>().unwrap_err();
        assert_eq!(err, CalcError::unsupported_support_type("fixed_fixed"));
    }

    #[test]
    fn test_serialization_matches_code() {
        let json = serde_json::to_string(&SupportType::SimplySupported).unwrap();
        assert_eq!(json, "\"simply_supported\"");
        assert_eq!(SupportType::Cantilever.to_string(), "cantilever");
    }
}
