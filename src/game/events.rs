use serde::{Deserialize, Serialize};

use super::participant::ParticipantSummary;
use super::round::BetRecord;

/// Lifecycle events delivered to participants' notification sinks.
///
/// Each variant carries a fixed, typed payload; delivery is fire-and-forget
/// and the engine never inspects a sink's reaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEvent {
    /// A new round opened: the dealer card is revealed and bets are accepted.
    RoundStart {
        dealer_card: u8,
        active_participants: Vec<ParticipantSummary>,
    },
    /// The round resolved; `info` is the recipient's own snapshot entry.
    RoundFinish { next_card: u8, info: BetRecord },
    /// The recipient was removed from the active set.
    GameLeave,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_tags_use_wire_names() {
        let event = GameEvent::GameLeave;
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"GAME_LEAVE\""), "unexpected json: {}", json);

        let event = GameEvent::RoundStart {
            dealer_card: 11,
            active_participants: vec![],
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"ROUND_START\""), "unexpected json: {}", json);
        assert!(json.contains("\"dealer_card\":11"), "unexpected json: {}", json);
    }

    #[test]
    fn test_round_finish_round_trips() {
        let event = GameEvent::RoundFinish {
            next_card: 9,
            info: BetRecord {
                participant_id: 1,
                bet: 10,
                guess: Some(crate::game::round::Guess::Higher),
                won: true,
                win_amount: 17.0,
                skip: false,
            },
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        match back {
            GameEvent::RoundFinish { next_card, info } => {
                assert_eq!(next_card, 9);
                assert_eq!(info.win_amount, 17.0);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
