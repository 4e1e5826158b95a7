use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{engine::PositionCallback, prelude::*, result::ResultBatch};

/// Bridges the callback contract onto a channel for async consumers: every
/// delivery and failure is forwarded, in arrival order, into an unbounded
/// queue. Unbounded because the backend invokes callbacks synchronously on
/// its own thread and must never be blocked on a slow consumer.
pub struct ChannelCallback {
    tx: mpsc::UnboundedSender<Result<ResultBatch>>,
}

impl ChannelCallback {
    /// The callback to subscribe with, and the receiving end. Dropping the
    /// receiver silently discards further deliveries; unsubscribing is
    /// still the caller's job.
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<Result<ResultBatch>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx }), rx)
    }
}

impl PositionCallback for ChannelCallback {
    fn on_success(&self, batch: ResultBatch) {
        self.tx.send(Ok(batch)).ok();
    }

    fn on_failure(&self, error: anyhow::Error) {
        self.tx.send(Err(error)).ok();
    }
}
