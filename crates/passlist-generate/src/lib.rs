//! Candidate generation core for passlist.
//!
//! A tier-selected [`RuleSet`] turns a [`passlist_core::PersonalInfo`] into
//! password candidates. [`GenerationEngine`] runs the rule set on a pool of
//! workers feeding one bounded channel, collects the output, and returns the
//! unique candidates in first-occurrence order.

mod collector;
pub mod dedup;
pub mod engine;
pub mod errors;
pub mod model;
mod pool;
pub mod rules;
pub mod sink;
pub mod transforms;

pub use collector::{NoProgress, ProgressObserver};
pub use dedup::dedup_preserving_order;
pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, RunState, Unit, UnitOutcome, UnitReport, WorkerLimits};
pub use rules::{Rule, RuleSet};
pub use sink::{CandidateSink, ChannelSink, SinkClosed};
