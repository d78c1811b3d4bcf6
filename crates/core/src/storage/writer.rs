//! Fire-and-forget snapshot writer
//!
//! `add`/`remove` must return as soon as the in-memory collection is
//! updated, so snapshot writes happen on a dedicated task. A single task
//! drains the channel in send order, which keeps overlapping writes from
//! interleaving: the last snapshot sent is the last one on disk.

use tokio::sync::{mpsc, oneshot};
use tracing::warn;

use crate::models::Booking;
use crate::storage::SnapshotStore;

enum Command {
    Write(Vec<Booking>),
    Flush(oneshot::Sender<()>),
}

/// Handle for queueing full-collection snapshot writes
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    tx: Option<mpsc::UnboundedSender<Command>>,
}

impl SnapshotWriter {
    /// Spawn the writer task. Must be called from within a Tokio runtime.
    pub fn spawn(store: SnapshotStore) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Command>();

        tokio::spawn(async move {
            while let Some(command) = rx.recv().await {
                match command {
                    Command::Write(snapshot) => {
                        let store = store.clone();
                        let result =
                            tokio::task::spawn_blocking(move || store.save(&snapshot)).await;
                        match result {
                            Ok(Ok(())) => {}
                            Ok(Err(e)) => {
                                // Best-effort durability: the in-memory state
                                // stays authoritative for the session, no retry.
                                warn!(error = %e, "Failed to write booking snapshot");
                            }
                            Err(e) => {
                                warn!(error = %e, "Snapshot write task panicked");
                            }
                        }
                    }
                    // The task handles commands strictly in send order, so
                    // acking here means every earlier write has completed.
                    Command::Flush(ack) => {
                        let _ = ack.send(());
                    }
                }
            }
        });

        Self { tx: Some(tx) }
    }

    /// Writer that drops every snapshot. Used for in-memory stores.
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// Queue a snapshot write and return immediately.
    pub fn persist(&self, snapshot: Vec<Booking>) {
        let Some(tx) = &self.tx else {
            return;
        };
        if tx.send(Command::Write(snapshot)).is_err() {
            warn!("Snapshot writer task is gone, dropping write");
        }
    }

    /// Wait until every previously queued write has hit the disk. Callers on
    /// the interaction path never need this; shutdown paths and tests do.
    pub async fn flush(&self) {
        let Some(tx) = &self.tx else {
            return;
        };
        let (ack_tx, ack_rx) = oneshot::channel();
        if tx.send(Command::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.await;
        }
    }
}
