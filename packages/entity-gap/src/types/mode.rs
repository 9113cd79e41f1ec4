//! Coverage policies deciding which gap entities make the report.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Threshold used by [`CoverageMode::multiple`].
pub const DEFAULT_MULTIPLE_THRESHOLD: usize = 2;

/// Minimum competitor coverage a gap entity needs to be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum CoverageMode {
    /// Found in at least one competitor.
    #[default]
    Any,

    /// Found in at least `threshold` distinct competitors.
    Multiple { threshold: usize },

    /// Found in every competitor supplied, failed ones included.
    All,
}

impl CoverageMode {
    /// `Multiple` with the default threshold of 2.
    pub fn multiple() -> Self {
        Self::Multiple {
            threshold: DEFAULT_MULTIPLE_THRESHOLD,
        }
    }

    /// Whether an entity found in `found_in` of `competitor_count` sources qualifies.
    pub fn includes(&self, found_in: usize, competitor_count: usize) -> bool {
        match *self {
            Self::Any => found_in >= 1,
            Self::Multiple { threshold } => found_in >= threshold.max(1),
            Self::All => found_in >= 1 && found_in == competitor_count,
        }
    }
}

impl fmt::Display for CoverageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Multiple { threshold } => write!(f, "multiple:{}", threshold),
            Self::All => f.write_str("all"),
        }
    }
}

/// Unrecognized coverage mode string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown coverage mode '{0}' (expected any, multiple, multiple:N or all)")]
pub struct ParseModeError(String);

impl FromStr for CoverageMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "any" => Ok(Self::Any),
            "multiple" => Ok(Self::multiple()),
            "all" => Ok(Self::All),
            other => other
                .strip_prefix("multiple:")
                .and_then(|n| n.parse::<usize>().ok())
                .filter(|threshold| *threshold >= 1)
                .map(|threshold| Self::Multiple { threshold })
                .ok_or_else(|| ParseModeError(s.to_string())),
        }
    }
}
