use super::*;

use crate::game::error::{GameError, GameResult};

impl RoundEngine {
    /// Adds a participant to the active set. If the engine was idle, a round
    /// starts immediately; returns `true` in that case so the caller can arm
    /// the round timer.
    ///
    /// Admission during an open round registers the participant for the next
    /// round only; the in-flight snapshot is frozen at round start.
    pub fn admit(&mut self, participant: Participant) -> GameResult<bool> {
        if self.participants.iter().any(|p| p.id == participant.id) {
            return Err(GameError::DuplicateParticipant {
                id: participant.id,
            });
        }

        let min_bet = self.config.min_bet as f64;
        if participant.balance < min_bet {
            return Err(GameError::InsufficientBalance {
                required: min_bet,
                available: participant.balance,
            });
        }

        tracing::info!(
            "Participant {} ({}) admitted with balance {}",
            participant.id,
            participant.name,
            participant.balance
        );
        self.participants.push(participant);

        if self.state == RoundState::Idle {
            self.start_round()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Enqueues a deferred removal. Departures are applied only at round
    /// resolution, never mid-round, so the in-flight snapshot stays intact.
    pub fn request_leave(&mut self, id: ParticipantId) {
        tracing::debug!("Participant {} queued to leave after this round", id);
        self.leave_queue.push(id);
    }

    /// Drains the leave queue: each departing participant gets a GAME_LEAVE
    /// notification and is dropped from the active set. Unknown ids are
    /// ignored (the participant may already be gone).
    pub(crate) fn apply_departures(&mut self) {
        for id in std::mem::take(&mut self.leave_queue) {
            if let Some(idx) = self.participant_index(id) {
                let participant = self.participants.remove(idx);
                participant.notify(&GameEvent::GameLeave);
                tracing::info!(
                    "Participant {} ({}) left the game",
                    participant.id,
                    participant.name
                );
            }
        }
    }
}
