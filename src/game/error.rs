//! Engine error types
//!
//! Every engine operation fails synchronously with one of these variants and
//! leaves all state untouched. Typed errors instead of String keep the caller
//! contract explicit and matchable.

use std::fmt;

use super::participant::ParticipantId;

/// Errors that can occur during engine operations
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// The participant id is already present in the active set.
    DuplicateParticipant { id: ParticipantId },
    /// Covers both a below-minimum join and an over-balance bet.
    InsufficientBalance { required: f64, available: f64 },
    /// The participant is not active, or has no entry in the open round.
    ParticipantNotFound { id: ParticipantId },
    /// The shoe ran out of cards during a round draw.
    DeckExhausted,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::DuplicateParticipant { id } => {
                write!(f, "Participant {} has already joined", id)
            }
            GameError::InsufficientBalance {
                required,
                available,
            } => {
                write!(
                    f,
                    "Insufficient balance. Required: {}, Available: {}",
                    required, available
                )
            }
            GameError::ParticipantNotFound { id } => {
                write!(f, "Participant {} is not in the current round", id)
            }
            GameError::DeckExhausted => write!(f, "The deck has no cards left to draw"),
        }
    }
}

impl std::error::Error for GameError {}

/// Result type for engine operations
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::InsufficientBalance {
            required: 10.0,
            available: 4.0,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance. Required: 10, Available: 4"
        );

        let err = GameError::DuplicateParticipant { id: 7 };
        assert_eq!(err.to_string(), "Participant 7 has already joined");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(GameError::DeckExhausted, GameError::DeckExhausted);
        assert_ne!(
            GameError::DeckExhausted,
            GameError::ParticipantNotFound { id: 1 }
        );
    }
}
