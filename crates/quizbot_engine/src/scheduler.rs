//! Delayed re-entry into the session loop.

use crate::SessionMessage;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

/// Delivers a message to the session no earlier than `delay` from now.
///
/// Implementations must not block the caller; the message re-enters the same
/// queue as chat commands, so it never runs concurrently with one.
pub trait Scheduler: Send + Sync {
    /// Schedule `message` after `delay`.
    fn after(&self, delay: Duration, message: SessionMessage);
}

/// Scheduler backed by spawned tokio timers feeding the session channel.
///
/// Holds only a weak handle on the channel: pending timers never keep a
/// session alive once every caller-side sender is gone.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    tx: mpsc::WeakSender<SessionMessage>,
}

impl TokioScheduler {
    /// Create a scheduler that sends into the given session channel.
    pub fn new(tx: &mpsc::Sender<SessionMessage>) -> Self {
        Self { tx: tx.downgrade() }
    }
}

impl Scheduler for TokioScheduler {
    #[instrument(skip(self, message), fields(delay_ms = delay.as_millis() as u64))]
    fn after(&self, delay: Duration, message: SessionMessage) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            sleep(delay).await;
            let Some(tx) = tx.upgrade() else {
                debug!(?message, "Session gone, dropping scheduled message");
                return;
            };
            debug!(?message, "Scheduled message fired");
            if tx.send(message).await.is_err() {
                warn!("Session channel closed before scheduled message fired");
            }
        });
    }
}
