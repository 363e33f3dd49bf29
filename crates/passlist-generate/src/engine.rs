use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::instrument::WithSubscriber;
use tracing::{Dispatch, info, warn};

use passlist_core::{ComplexityTier, PersonalInfo};

use crate::collector::{Collected, Collector, NoProgress, ProgressObserver};
use crate::dedup::dedup_preserving_order;
use crate::errors::GenerationError;
use crate::model::{GenerateOptions, RunState, Unit, UnitReport};
use crate::pool::WorkerPool;
use crate::rules::RuleSet;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub run_id: String,
    pub tier: ComplexityTier,
    pub workers: usize,
    /// Unique candidates in first-occurrence order.
    pub candidates: Vec<String>,
    /// Candidates collected before deduplication.
    pub emitted: u64,
    pub duration: Duration,
    /// Units that stopped early; empty on a clean run.
    pub faults: Vec<UnitReport>,
}

impl GenerationResult {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn has_faults(&self) -> bool {
        !self.faults.is_empty()
    }
}

/// Entry point for turning a profile into a unique candidate list.
#[derive(Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
    progress: Arc<dyn ProgressObserver>,
    dispatch: Dispatch,
    rules: Option<Arc<RuleSet>>,
}

impl GenerationEngine {
    /// Logs go to the subscriber that is current when the engine is built
    /// unless another one is supplied with [`GenerationEngine::with_dispatch`].
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            options,
            progress: Arc::new(NoProgress),
            dispatch: tracing::dispatcher::get_default(Dispatch::clone),
            rules: None,
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressObserver>) -> Self {
        self.progress = progress;
        self
    }

    /// Routes every log event of a run, including those raised on worker
    /// threads, to `dispatch`.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Replaces the tier's default rule set.
    pub fn with_rule_set(mut self, rules: RuleSet) -> Self {
        self.rules = Some(Arc::new(rules));
        self
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        self.options.limits.check(self.options.workers)
    }

    /// Runs the full pipeline. Only validation errors are returned; faults
    /// inside workers or the collector are reported in
    /// [`GenerationResult::faults`].
    pub async fn run(&self, info: PersonalInfo) -> Result<GenerationResult, GenerationError> {
        let dispatch = self.dispatch.clone();
        self.run_inner(info).with_subscriber(dispatch).await
    }

    async fn run_inner(&self, info: PersonalInfo) -> Result<GenerationResult, GenerationError> {
        let run_id = uuid::Uuid::new_v4().to_string();
        let tier = self.options.tier;
        let workers = self.options.workers;
        transition(&run_id, RunState::Idle);

        transition(&run_id, RunState::Validating);
        if let Err(err) = self.validate() {
            warn!(run_id = %run_id, error = %err, "generation rejected");
            transition(&run_id, RunState::Failed);
            return Err(err);
        }

        let start = Instant::now();
        let rules = self
            .rules
            .clone()
            .unwrap_or_else(|| Arc::new(RuleSet::for_tier(tier)));
        info!(
            run_id = %run_id,
            tier = %tier,
            workers,
            rules = rules.len(),
            "generation started"
        );
        transition(&run_id, RunState::Running);

        let (tx, rx) = mpsc::channel(self.options.channel_capacity.max(1));
        let collector = Collector::new(
            Arc::clone(&self.progress),
            self.options.progress_every,
            tier.max_candidates_hint(),
        );
        let collector = tokio::spawn(collector.run(rx).with_subscriber(self.dispatch.clone()));

        let pool = WorkerPool::new(workers, rules, Arc::new(info), self.dispatch.clone());
        let handles = pool.spawn(&tx);
        let mut reports = WorkerPool::join(handles).await;
        drop(tx);

        let Collected { items, report } = match collector.await {
            Ok(collected) => collected,
            Err(err) => {
                warn!(run_id = %run_id, error = %err, "collector task aborted");
                Collected {
                    items: Vec::new(),
                    report: UnitReport::failed(Unit::Collector, err.to_string()),
                }
            }
        };
        reports.push(report);

        transition(&run_id, RunState::Deduplicating);
        let emitted = items.len() as u64;
        let candidates = dedup_preserving_order(items);
        let faults: Vec<UnitReport> = reports.into_iter().filter(UnitReport::is_failed).collect();
        let duration = start.elapsed();

        if !faults.is_empty() {
            warn!(
                run_id = %run_id,
                faults = faults.len(),
                "generation completed with recovered faults"
            );
        }
        info!(
            run_id = %run_id,
            candidates = candidates.len(),
            emitted,
            faults = faults.len(),
            duration_ms = duration.as_millis() as u64,
            "generation completed"
        );
        transition(&run_id, RunState::Completed);

        Ok(GenerationResult {
            run_id,
            tier,
            workers,
            candidates,
            emitted,
            duration,
            faults,
        })
    }
}

impl fmt::Debug for GenerationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationEngine")
            .field("options", &self.options)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

fn transition(run_id: &str, state: RunState) {
    tracing::debug!(run_id = %run_id, state = %state, "run state");
}
