use thiserror::Error;
use tokio::sync::mpsc;

/// The receiving side of a sink went away; no further candidates are accepted.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("candidate channel closed")]
pub struct SinkClosed;

/// Destination for generated candidates.
pub trait CandidateSink {
    fn emit(&mut self, candidate: String) -> Result<(), SinkClosed>;
}

impl CandidateSink for Vec<String> {
    fn emit(&mut self, candidate: String) -> Result<(), SinkClosed> {
        self.push(candidate);
        Ok(())
    }
}

/// Writes into the run's bounded channel, blocking the calling thread while
/// the channel is full. Must only be used off the async runtime threads.
#[derive(Debug)]
pub struct ChannelSink {
    tx: mpsc::Sender<String>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<String>) -> Self {
        Self { tx }
    }
}

impl CandidateSink for ChannelSink {
    fn emit(&mut self, candidate: String) -> Result<(), SinkClosed> {
        self.tx.blocking_send(candidate).map_err(|_| SinkClosed)
    }
}
