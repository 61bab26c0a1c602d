//! Higher/lower betting round engine.
//!
//! The core state machine lives in [`game::RoundEngine`]: participants join,
//! a round opens with a face-up dealer card, everyone bets higher or lower
//! within the betting window, and the round resolves against the next card
//! drawn from the shoe. [`server::EngineServer`] wraps the engine in a
//! shared async handle and drives the round/inter-round timers.

pub mod config;
pub mod game;
pub mod server;

pub use config::EngineConfig;
pub use game::{
    BetRecord, GameError, GameEvent, GameResult, Guess, NotificationSink, NullSink, Participant,
    ParticipantId, ParticipantSummary, RoundEngine, RoundRecord, RoundState,
};
pub use server::EngineServer;
