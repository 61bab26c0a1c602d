use super::*;

use crate::game::error::{GameError, GameResult};
use crate::game::round::Guess;

impl RoundEngine {
    /// Records a bet against the open round's snapshot.
    ///
    /// The stake is debited from the participant and credited to the bank at
    /// placement time. Re-betting within the same round replaces the earlier
    /// stake (the previous amount is refunded first).
    ///
    /// Returns `true` when this bet closed the round: every snapshot entry
    /// has a stake, so resolution ran immediately and any pending round timer
    /// is now stale.
    pub fn place_bet(
        &mut self,
        amount: u64,
        guess: Guess,
        participant_id: ParticipantId,
    ) -> GameResult<bool> {
        if self.state != RoundState::AcceptingBets {
            // No open betting window; the participant has no live entry.
            return Err(GameError::ParticipantNotFound {
                id: participant_id,
            });
        }

        let participant_idx = self
            .participant_index(participant_id)
            .ok_or(GameError::ParticipantNotFound {
                id: participant_id,
            })?;

        let round = match self.round.as_mut() {
            Some(round) => round,
            None => {
                return Err(GameError::ParticipantNotFound {
                    id: participant_id,
                })
            }
        };
        let entry_idx = round
            .entries
            .iter()
            .position(|e| e.participant_id == participant_id)
            .ok_or(GameError::ParticipantNotFound {
                id: participant_id,
            })?;

        // A replaced stake is refunded before the new one is checked, so the
        // participant's full buying power is available to the re-bet.
        let previous_stake = if round.entries[entry_idx].skip {
            0.0
        } else {
            round.entries[entry_idx].bet as f64
        };
        let available = self.participants[participant_idx].balance + previous_stake;
        if (amount as f64) > available {
            return Err(GameError::InsufficientBalance {
                required: amount as f64,
                available,
            });
        }

        if previous_stake > 0.0 {
            tracing::debug!(
                "Participant {} replaces an earlier stake of {}",
                participant_id,
                round.entries[entry_idx].bet
            );
            self.participants[participant_idx].adjust_balance(previous_stake);
            self.bank -= previous_stake;
        }

        let entry = &mut round.entries[entry_idx];
        entry.bet = amount;
        entry.guess = Some(guess);
        entry.skip = false;
        self.participants[participant_idx].adjust_balance(-(amount as f64));
        self.bank += amount as f64;

        tracing::info!(
            "Participant {} bet {} on {:?} (bank now {})",
            participant_id,
            amount,
            guess,
            self.bank
        );

        if round.entries.iter().all(|e| !e.skip) {
            tracing::info!("All participants have bet; resolving round early");
            self.resolve_round()?;
            return Ok(true);
        }
        Ok(false)
    }
}
