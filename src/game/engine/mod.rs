mod admission;
mod betting;
mod round_flow;

use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::EngineConfig;

use super::deck::Deck;
use super::events::GameEvent;
use super::participant::{Participant, ParticipantId, ParticipantSummary};
use super::round::{RoundRecord, RoundState};

/// Get current timestamp in milliseconds since UNIX epoch.
/// Returns 0 on system clock error (should never happen in practice).
pub(crate) fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_else(|e| {
            tracing::error!("System clock error: {}", e);
            0
        })
}

/// The round lifecycle state machine: owns the shoe, the bank, the active
/// participant set, the in-flight round snapshot, and the append-only history.
///
/// All mutation is routed through the public operations; callers are expected
/// to serialize access (see [`crate::server::EngineServer`] for the async
/// single-writer harness).
pub struct RoundEngine {
    config: EngineConfig,
    state: RoundState,
    deck: Deck,
    /// House-side running balance: bets in, payouts out. May go negative.
    bank: f64,
    participants: Vec<Participant>,
    /// Snapshot of the open round; `Some` exactly while a round is in flight.
    round: Option<RoundRecord>,
    /// Departures deferred to the next resolution.
    leave_queue: Vec<ParticipantId>,
    history: Vec<RoundRecord>,
    /// Bumped at every round start; timer fires compare against it.
    generation: u64,
    /// Informational betting-window deadline for the open round.
    deadline_ms: Option<u64>,
}

impl RoundEngine {
    pub fn new(config: EngineConfig) -> Self {
        let deck = Deck::new(config.deck_count);
        let history = config.seed_history.clone();
        Self {
            config,
            state: RoundState::Idle,
            deck,
            bank: 0.0,
            participants: Vec::new(),
            round: None,
            leave_queue: Vec::new(),
            history,
            generation: 0,
            deadline_ms: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn bank(&self) -> f64 {
        self.bank
    }

    /// Completed rounds, oldest first. Never mutated after append.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// The open round's snapshot, if a round is in flight.
    pub fn current_round(&self) -> Option<&RoundRecord> {
        self.round.as_ref()
    }

    /// Current round generation; stale timer fires check against this.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Wall-clock deadline (ms since epoch) of the open betting window.
    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn participant_summaries(&self) -> Vec<ParticipantSummary> {
        self.participants.iter().map(|p| p.summary()).collect()
    }

    pub fn balance_of(&self, id: ParticipantId) -> Option<f64> {
        self.participants
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.balance)
    }

    pub(crate) fn participant_index(&self, id: ParticipantId) -> Option<usize> {
        self.participants.iter().position(|p| p.id == id)
    }

    /// Notify every active participant with the same event.
    pub(crate) fn notify_all(&self, event: &GameEvent) {
        for participant in &self.participants {
            participant.notify(event);
        }
    }

    pub(crate) fn notify_participant(&self, id: ParticipantId, event: &GameEvent) {
        if let Some(participant) = self.participants.iter().find(|p| p.id == id) {
            participant.notify(event);
        }
    }
}

// Test-only hooks for deterministic card outcomes.
#[cfg(test)]
impl RoundEngine {
    pub(crate) fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    pub(crate) fn set_dealer_card(&mut self, card: u8) {
        if let Some(round) = self.round.as_mut() {
            round.dealer_card = card;
        }
    }
}
