use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Breadth of the rule set applied during generation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityTier {
    /// Minimal combinations for basic audits.
    #[default]
    Normal,
    /// Complete combinations, including documents and mixed case.
    Sensitive,
    /// Every combination, including leet speak and keyboard patterns.
    Aggressive,
}

impl ComplexityTier {
    pub const ALL: [ComplexityTier; 3] = [
        ComplexityTier::Normal,
        ComplexityTier::Sensitive,
        ComplexityTier::Aggressive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComplexityTier::Normal => "normal",
            ComplexityTier::Sensitive => "sensitive",
            ComplexityTier::Aggressive => "aggressive",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ComplexityTier::Normal => {
                "Minimal combinations for basic security - fast generation, smaller wordlist"
            }
            ComplexityTier::Sensitive => {
                "Complete combinations for enhanced security - balanced generation, medium wordlist"
            }
            ComplexityTier::Aggressive => {
                "All possible combinations for maximum coverage - slow generation, large wordlist"
            }
        }
    }

    /// Rough upper bound of unique candidates; seeds the progress estimate.
    pub fn max_candidates_hint(self) -> usize {
        match self {
            ComplexityTier::Normal => 10_000,
            ComplexityTier::Sensitive => 100_000,
            ComplexityTier::Aggressive => 1_000_000,
        }
    }

    pub fn memory_hint(self) -> &'static str {
        match self {
            ComplexityTier::Normal => "~50MB",
            ComplexityTier::Sensitive => "~200MB",
            ComplexityTier::Aggressive => "~500MB",
        }
    }

    /// Wall-clock estimate relative to a four-worker baseline.
    pub fn estimated_duration(self, workers: usize) -> Duration {
        let base = match self {
            ComplexityTier::Normal => Duration::from_secs(60),
            ComplexityTier::Sensitive => Duration::from_secs(5 * 60),
            ComplexityTier::Aggressive => Duration::from_secs(15 * 60),
        };
        let factor = (4.0 / workers.max(1) as f64).max(0.5);
        base.mul_f64(factor)
    }
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplexityTier {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(ComplexityTier::Normal),
            "sensitive" => Ok(ComplexityTier::Sensitive),
            "aggressive" => Ok(ComplexityTier::Aggressive),
            _ => Err(Error::InvalidComplexityTier(value.to_string())),
        }
    }
}
