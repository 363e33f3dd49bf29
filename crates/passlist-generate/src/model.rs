use std::fmt;

use serde::{Deserialize, Serialize};

use passlist_core::ComplexityTier;

use crate::errors::GenerationError;

/// Capacity of the channel shared by the workers and the collector.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
/// Number of collected candidates between progress notifications.
pub const DEFAULT_PROGRESS_EVERY: usize = 1000;

/// Inclusive bounds accepted for the worker count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerLimits {
    pub min: usize,
    pub max: usize,
}

impl Default for WorkerLimits {
    fn default() -> Self {
        Self { min: 1, max: 16 }
    }
}

impl WorkerLimits {
    pub fn check(&self, workers: usize) -> Result<(), GenerationError> {
        if self.min == 0 || self.min > self.max {
            return Err(GenerationError::InvalidWorkerLimits {
                min: self.min,
                max: self.max,
            });
        }
        if !(self.min..=self.max).contains(&workers) {
            return Err(GenerationError::InvalidWorkerCount {
                workers,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Rule-set breadth.
    pub tier: ComplexityTier,
    /// Concurrent workers, each running the full rule set.
    pub workers: usize,
    pub limits: WorkerLimits,
    /// Bounded channel slots between the workers and the collector.
    pub channel_capacity: usize,
    /// Progress is reported every time this many candidates were collected.
    pub progress_every: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            tier: ComplexityTier::default(),
            workers: 4,
            limits: WorkerLimits::default(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }
}

impl GenerateOptions {
    /// Builds options from a tier name, failing on unknown tiers.
    pub fn parse(tier: &str, workers: usize) -> Result<Self, GenerationError> {
        let tier = tier
            .parse::<ComplexityTier>()
            .map_err(|_| GenerationError::InvalidComplexityTier(tier.to_string()))?;
        Ok(Self {
            tier,
            workers,
            ..Self::default()
        })
    }
}

/// Lifecycle of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Idle,
    Validating,
    Running,
    Deduplicating,
    Completed,
    Failed,
}

impl RunState {
    pub fn as_str(self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Validating => "validating",
            RunState::Running => "running",
            RunState::Deduplicating => "deduplicating",
            RunState::Completed => "completed",
            RunState::Failed => "failed",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concurrent unit of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Worker(usize),
    Collector,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Worker(index) => write!(f, "worker-{index}"),
            Unit::Collector => f.write_str("collector"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UnitOutcome {
    /// The unit ran to the end; `emitted` counts the candidates it handled.
    Completed { emitted: u64 },
    /// The unit stopped early and its remaining output was dropped.
    Failed { cause: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitReport {
    pub unit: Unit,
    pub outcome: UnitOutcome,
}

impl UnitReport {
    pub fn completed(unit: Unit, emitted: u64) -> Self {
        Self {
            unit,
            outcome: UnitOutcome::Completed { emitted },
        }
    }

    pub fn failed(unit: Unit, cause: impl Into<String>) -> Self {
        Self {
            unit,
            outcome: UnitOutcome::Failed {
                cause: cause.into(),
            },
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, UnitOutcome::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_limits_are_inclusive() {
        let limits = WorkerLimits::default();
        assert!(limits.check(1).is_ok());
        assert!(limits.check(16).is_ok());
        assert_eq!(
            limits.check(0),
            Err(GenerationError::InvalidWorkerCount {
                workers: 0,
                min: 1,
                max: 16
            })
        );
        assert!(limits.check(17).is_err());
    }

    #[test]
    fn inverted_limits_are_rejected() {
        let limits = WorkerLimits { min: 8, max: 2 };
        assert_eq!(
            limits.check(4),
            Err(GenerationError::InvalidWorkerLimits { min: 8, max: 2 })
        );
    }

    #[test]
    fn parse_rejects_unknown_tier() {
        assert_eq!(
            GenerateOptions::parse("extreme", 4).unwrap_err(),
            GenerationError::InvalidComplexityTier("extreme".to_string())
        );
        let options = GenerateOptions::parse("Aggressive", 2).expect("valid tier");
        assert_eq!(options.tier, ComplexityTier::Aggressive);
        assert_eq!(options.channel_capacity, 1000);
    }
}
