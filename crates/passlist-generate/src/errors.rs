use thiserror::Error;

/// Errors emitted by the generation engine.
///
/// All of them are raised while validating a request; once workers are
/// running, faults are reported through [`crate::UnitReport`] instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid worker count {workers}: must be between {min} and {max}")]
    InvalidWorkerCount {
        workers: usize,
        min: usize,
        max: usize,
    },
    #[error("invalid worker limits: min {min} must be at least 1 and not exceed max {max}")]
    InvalidWorkerLimits { min: usize, max: usize },
    #[error("invalid complexity tier '{0}': expected normal, sensitive, or aggressive")]
    InvalidComplexityTier(String),
}

