use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::events::GameEvent;

pub type ParticipantId = u64;

/// Outward notification channel for a participant.
///
/// Delivery is best-effort and side-effect only: implementations must swallow
/// their own failures rather than letting them reach the engine.
pub trait NotificationSink: Send + Sync {
    fn deliver(&self, event: &GameEvent);
}

impl NotificationSink for tokio::sync::mpsc::UnboundedSender<GameEvent> {
    fn deliver(&self, event: &GameEvent) {
        // The receiver may already be gone; a closed channel is the
        // collaborator's problem, not the engine's.
        let _ = self.send(event.clone());
    }
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn deliver(&self, _event: &GameEvent) {}
}

/// A registered player: identity, mutable balance, and a notification sink.
/// No game logic lives here beyond balance mutation and event forwarding.
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub balance: f64,
    sink: Arc<dyn NotificationSink>,
}

impl Participant {
    /// Balances start as whole units; wins may later make them fractional.
    pub fn new(
        id: ParticipantId,
        name: impl Into<String>,
        balance: u64,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            balance: balance as f64,
            sink,
        }
    }

    /// Applies a signed balance change. The engine is responsible for never
    /// debiting more than the current balance.
    pub fn adjust_balance(&mut self, delta: f64) {
        self.balance += delta;
    }

    /// Forwards a lifecycle event to the participant's sink.
    pub fn notify(&self, event: &GameEvent) {
        self.sink.deliver(event);
    }

    pub fn summary(&self) -> ParticipantSummary {
        ParticipantSummary {
            id: self.id,
            name: self.name.clone(),
            balance: self.balance,
        }
    }
}

impl fmt::Debug for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Participant")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("balance", &self.balance)
            .finish_non_exhaustive()
    }
}

/// Public view of a participant, as carried in `ROUND_START` payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantSummary {
    pub id: ParticipantId,
    pub name: String,
    pub balance: f64,
}
