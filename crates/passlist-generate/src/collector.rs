//! Consumer side of a run.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::model::{Unit, UnitReport};
use crate::pool::panic_message;

/// Receives `(current, estimated_total)` while candidates are collected.
///
/// The estimate is a heuristic that only grows; it is never authoritative.
pub trait ProgressObserver: Send + Sync {
    fn on_progress(&self, current: usize, estimated_total: usize);
}

impl<F> ProgressObserver for F
where
    F: Fn(usize, usize) + Send + Sync,
{
    fn on_progress(&self, current: usize, estimated_total: usize) {
        self(current, estimated_total)
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&self, _current: usize, _estimated_total: usize) {}
}

pub(crate) struct Collected {
    pub(crate) items: Vec<String>,
    pub(crate) report: UnitReport,
}

pub(crate) struct Collector {
    observer: Arc<dyn ProgressObserver>,
    every: usize,
    hint: usize,
}

impl Collector {
    pub(crate) fn new(observer: Arc<dyn ProgressObserver>, every: usize, hint: usize) -> Self {
        Self {
            observer,
            every: every.max(1),
            hint,
        }
    }

    /// Drains `rx` until every sender is gone.
    ///
    /// A fault stops the loop and drops the receiver, so producers blocked on
    /// a full channel fail their next send instead of waiting forever.
    pub(crate) async fn run(self, mut rx: mpsc::Receiver<String>) -> Collected {
        let mut items = Vec::new();
        let mut estimate = self.hint;

        let report = loop {
            let Some(candidate) = rx.recv().await else {
                break UnitReport::completed(Unit::Collector, items.len() as u64);
            };
            items.push(candidate);

            let current = items.len();
            if current % self.every != 0 {
                continue;
            }
            estimate = estimate.max(current + self.every);
            let notified = panic::catch_unwind(AssertUnwindSafe(|| {
                self.observer.on_progress(current, estimate)
            }));
            if let Err(panic) = notified {
                let cause = panic_message(panic);
                warn!(collected = current, cause = %cause, "collector fault recovered");
                break UnitReport::failed(Unit::Collector, cause);
            }
            debug!(collected = current, estimated_total = estimate, "progress");
        };

        drop(rx);
        Collected { items, report }
    }
}
