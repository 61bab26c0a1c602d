use super::*;

use crate::game::error::{GameError, GameResult};
use crate::game::round::BetRecord;

impl RoundEngine {
    /// Opens a new round: rebuilds and shuffles the shoe, reveals the dealer
    /// card, freezes the per-participant snapshot, and notifies everyone.
    ///
    /// The caller is responsible for arming a round timer against the new
    /// generation (see [`crate::server::EngineServer`]).
    pub fn start_round(&mut self) -> GameResult<()> {
        if self.state == RoundState::AcceptingBets {
            tracing::warn!("start_round called while a round is already open; ignoring");
            return Ok(());
        }

        self.deck.rebuild_and_shuffle();
        let dealer_card = self.deck.draw().ok_or(GameError::DeckExhausted)?;

        let entries = self
            .participants
            .iter()
            .map(|p| BetRecord::skipped(p.id))
            .collect();
        self.round = Some(RoundRecord {
            dealer_card,
            next_card: None,
            entries,
        });
        self.generation += 1;
        self.state = RoundState::AcceptingBets;
        self.deadline_ms = Some(current_timestamp_ms() + self.config.round_duration_ms());

        tracing::info!(
            "Round {} started: dealer card {}, {} participant(s)",
            self.generation,
            dealer_card,
            self.participants.len()
        );

        let event = GameEvent::RoundStart {
            dealer_card,
            active_participants: self.participant_summaries(),
        };
        self.notify_all(&event);
        Ok(())
    }

    /// Timer-fire entry point. Resolves the round only if it is still the one
    /// the timer was armed for and it is still open; a stale fire is a no-op.
    /// Returns `true` when this call performed the resolution.
    pub fn resolve_expired(&mut self, generation: u64) -> GameResult<bool> {
        if self.state != RoundState::AcceptingBets || self.generation != generation {
            tracing::debug!(
                "Stale round timer fired (generation {}, current {}); ignoring",
                generation,
                self.generation
            );
            return Ok(false);
        }
        tracing::info!("Round {} betting window expired; resolving", generation);
        self.resolve_round()?;
        Ok(true)
    }

    /// Draws the next card, settles every staked entry, notifies all snapshot
    /// participants, archives the round, and applies queued departures.
    ///
    /// On `DeckExhausted` the round is left open and unsettled; the error
    /// surfaces to the caller.
    pub(crate) fn resolve_round(&mut self) -> GameResult<()> {
        let next_card = self.deck.draw().ok_or(GameError::DeckExhausted)?;
        let mut round = match self.round.take() {
            Some(round) => round,
            None => {
                tracing::warn!("resolve_round called with no open round; ignoring");
                return Ok(());
            }
        };

        round.next_card = Some(next_card);
        self.state = RoundState::Resolved;
        self.deadline_ms = None;

        let dealer_card = round.dealer_card;
        let k = self.config.win_multiplier;
        let min_bet = self.config.min_bet as f64;

        for entry in &mut round.entries {
            if !entry.skip {
                let won = entry
                    .guess
                    .map(|g| g.wins(dealer_card, next_card))
                    .unwrap_or(false);

                if won {
                    entry.won = true;
                    entry.win_amount = entry.bet as f64 * k;
                    if let Some(idx) = self.participant_index(entry.participant_id) {
                        self.participants[idx].adjust_balance(entry.win_amount);
                    }
                    self.bank -= entry.win_amount;
                } else {
                    entry.won = false;
                    if let Some(idx) = self.participant_index(entry.participant_id) {
                        if self.participants[idx].balance < min_bet {
                            tracing::info!(
                                "Participant {} dropped below the minimum bet; queuing removal",
                                entry.participant_id
                            );
                            self.leave_queue.push(entry.participant_id);
                        }
                    }
                }
            }

            // Skippers get the result too; only their own entry is shared.
            self.notify_participant(
                entry.participant_id,
                &GameEvent::RoundFinish {
                    next_card,
                    info: entry.clone(),
                },
            );
        }

        let winners = round.entries.iter().filter(|e| e.won).count();
        tracing::info!(
            "Round {} resolved: dealer {}, next {}, {} winner(s), bank {}",
            self.generation,
            dealer_card,
            next_card,
            winners,
            self.bank
        );

        self.history.push(round);
        self.apply_departures();

        if self.participants.is_empty() {
            self.state = RoundState::Idle;
            tracing::info!("No active participants remain; engine idle");
        }
        Ok(())
    }

    /// True between rounds, when a follow-up round should be scheduled.
    pub fn can_start_next_round(&self) -> bool {
        self.state == RoundState::Resolved && !self.participants.is_empty()
    }
}
