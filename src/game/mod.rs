pub mod constants;
pub mod deck;
pub mod engine;
pub mod error;
pub mod events;
pub mod participant;
pub mod round;

pub use engine::RoundEngine;
pub use error::{GameError, GameResult};
pub use events::GameEvent;
pub use participant::{NotificationSink, NullSink, Participant, ParticipantId, ParticipantSummary};
pub use round::{BetRecord, Guess, RoundRecord, RoundState};
