use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::config::EngineConfig;
use crate::game::error::GameResult;
use crate::game::round::{Guess, RoundRecord, RoundState};
use crate::game::{Participant, ParticipantId, ParticipantSummary, RoundEngine};

/// Cloneable async handle over a single [`RoundEngine`].
///
/// Every operation and timer fire locks the same mutex, so mutation
/// serializes into a single-writer stream. Timers are armed per round
/// generation and checked for effect when they fire: a round that resolved
/// early through betting turns its pending timer into a no-op instead of
/// requiring cancellation.
#[derive(Clone)]
pub struct EngineServer {
    engine: Arc<Mutex<RoundEngine>>,
    round_duration: Duration,
    inter_round_delay: Duration,
}

impl EngineServer {
    pub fn new(config: EngineConfig) -> Self {
        let round_duration = Duration::from_millis(config.round_duration_ms());
        let inter_round_delay = Duration::from_millis(config.inter_round_delay_ms);
        Self {
            engine: Arc::new(Mutex::new(RoundEngine::new(config))),
            round_duration,
            inter_round_delay,
        }
    }

    /// Admits a participant. When the admission opened a new round (the
    /// engine was idle), the round timer is armed here.
    pub async fn admit(&self, participant: Participant) -> GameResult<()> {
        let mut engine = self.engine.lock().await;
        let started = engine.admit(participant)?;
        if started {
            let generation = engine.generation();
            drop(engine);
            self.arm_round_timer(generation);
        }
        Ok(())
    }

    /// Places a bet. If this was the last missing stake the round resolves
    /// inline and the inter-round pause is scheduled.
    pub async fn place_bet(
        &self,
        amount: u64,
        guess: Guess,
        participant_id: ParticipantId,
    ) -> GameResult<()> {
        let mut engine = self.engine.lock().await;
        let resolved = engine.place_bet(amount, guess, participant_id)?;
        drop(engine);
        if resolved {
            self.schedule_next_round();
        }
        Ok(())
    }

    /// Queues a deferred departure; applied at the next round resolution.
    pub async fn request_leave(&self, id: ParticipantId) {
        self.engine.lock().await.request_leave(id);
    }

    fn arm_round_timer(&self, generation: u64) {
        let server = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(server.round_duration).await;
            let fired = {
                let mut engine = server.engine.lock().await;
                engine.resolve_expired(generation)
            };
            match fired {
                Ok(true) => server.schedule_next_round(),
                Ok(false) => {}
                Err(e) => tracing::error!("Round {} failed to resolve: {}", generation, e),
            }
        });
    }

    fn schedule_next_round(&self) {
        let server = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(server.inter_round_delay).await;
            let mut engine = server.engine.lock().await;
            if !engine.can_start_next_round() {
                // Everyone left during the pause; stay idle until the next
                // admission restarts the loop.
                return;
            }
            match engine.start_round() {
                Ok(()) => {
                    let generation = engine.generation();
                    drop(engine);
                    server.arm_round_timer(generation);
                }
                Err(e) => tracing::error!("Failed to start next round: {}", e),
            }
        });
    }

    pub async fn state(&self) -> RoundState {
        self.engine.lock().await.state()
    }

    pub async fn bank(&self) -> f64 {
        self.engine.lock().await.bank()
    }

    pub async fn history(&self) -> Vec<RoundRecord> {
        self.engine.lock().await.history().to_vec()
    }

    pub async fn current_round(&self) -> Option<RoundRecord> {
        self.engine.lock().await.current_round().cloned()
    }

    pub async fn balance_of(&self, id: ParticipantId) -> Option<f64> {
        self.engine.lock().await.balance_of(id)
    }

    pub async fn participant_count(&self) -> usize {
        self.engine.lock().await.participant_count()
    }

    pub async fn participant_summaries(&self) -> Vec<ParticipantSummary> {
        self.engine.lock().await.participant_summaries()
    }
}
