//! Producer side of a run: every worker evaluates the full rule set against
//! the same profile and writes into the shared channel.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{Dispatch, debug, dispatcher, warn};

use passlist_core::PersonalInfo;

use crate::model::{Unit, UnitReport};
use crate::rules::RuleSet;
use crate::sink::ChannelSink;

pub(crate) struct WorkerPool {
    workers: usize,
    rules: Arc<RuleSet>,
    info: Arc<PersonalInfo>,
    dispatch: Dispatch,
}

impl WorkerPool {
    pub(crate) fn new(
        workers: usize,
        rules: Arc<RuleSet>,
        info: Arc<PersonalInfo>,
        dispatch: Dispatch,
    ) -> Self {
        Self {
            workers,
            rules,
            info,
            dispatch,
        }
    }

    /// Starts one blocking task per worker, each holding its own sender.
    pub(crate) fn spawn(&self, tx: &mpsc::Sender<String>) -> Vec<JoinHandle<UnitReport>> {
        (0..self.workers)
            .map(|index| {
                let rules = Arc::clone(&self.rules);
                let info = Arc::clone(&self.info);
                let dispatch = self.dispatch.clone();
                let sink = ChannelSink::new(tx.clone());
                tokio::task::spawn_blocking(move || {
                    dispatcher::with_default(&dispatch, || run_worker(index, &rules, &info, sink))
                })
            })
            .collect()
    }

    /// Waits for every worker; a task that could not be joined counts as failed.
    pub(crate) async fn join(handles: Vec<JoinHandle<UnitReport>>) -> Vec<UnitReport> {
        let mut reports = Vec::with_capacity(handles.len());
        for (index, handle) in handles.into_iter().enumerate() {
            let report = match handle.await {
                Ok(report) => report,
                Err(err) => {
                    warn!(worker = index, error = %err, "worker task aborted");
                    UnitReport::failed(Unit::Worker(index), err.to_string())
                }
            };
            reports.push(report);
        }
        reports
    }
}

fn run_worker(
    index: usize,
    rules: &RuleSet,
    info: &PersonalInfo,
    mut sink: ChannelSink,
) -> UnitReport {
    let unit = Unit::Worker(index);
    debug!(worker = index, rules = rules.len(), "worker started");

    match panic::catch_unwind(AssertUnwindSafe(|| rules.generate(info, &mut sink))) {
        Ok(Ok(emitted)) => {
            debug!(worker = index, emitted, "worker completed");
            UnitReport::completed(unit, emitted)
        }
        Ok(Err(closed)) => {
            warn!(worker = index, cause = %closed, "worker stopped before finishing");
            UnitReport::failed(unit, closed.to_string())
        }
        Err(panic) => {
            let cause = panic_message(panic);
            warn!(worker = index, cause = %cause, "worker fault recovered");
            UnitReport::failed(unit, cause)
        }
    }
}

pub(crate) fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic during generation".to_string()
    }
}
