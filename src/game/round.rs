use serde::{Deserialize, Serialize};

use super::participant::ParticipantId;

/// Engine-wide round lifecycle state. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// No participants, no open round.
    Idle,
    /// A round is open: dealer card revealed, bets being collected.
    AcceptingBets,
    /// The last round has been paid out; the next one has not started yet.
    Resolved,
}

/// A participant's call on the next card, relative to the dealer card.
/// Ties lose either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Guess {
    #[serde(rename = "h")]
    Higher,
    #[serde(rename = "l")]
    Lower,
}

impl Guess {
    /// Parse the short wire/CLI form ("h" / "l").
    pub fn from_id(id: &str) -> Option<Guess> {
        match id {
            "h" => Some(Guess::Higher),
            "l" => Some(Guess::Lower),
            _ => None,
        }
    }

    /// Whether this guess wins given the revealed cards.
    pub fn wins(self, dealer_card: u8, next_card: u8) -> bool {
        match self {
            Guess::Higher => next_card > dealer_card,
            Guess::Lower => next_card < dealer_card,
        }
    }
}

/// One participant's frozen betting record for a single round.
///
/// Invariant: `bet == 0` and `guess == None` whenever `skip` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetRecord {
    pub participant_id: ParticipantId,
    pub bet: u64,
    pub guess: Option<Guess>,
    pub won: bool,
    pub win_amount: f64,
    pub skip: bool,
}

impl BetRecord {
    /// Fresh entry for a participant who has not bet yet.
    pub(crate) fn skipped(participant_id: ParticipantId) -> Self {
        Self {
            participant_id,
            bet: 0,
            guess: None,
            won: false,
            win_amount: 0.0,
            skip: true,
        }
    }
}

/// One completed (or in-flight) round: the dealer card, the next card once
/// drawn, and the per-participant snapshot taken at round start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub dealer_card: u8,
    pub next_card: Option<u8>,
    pub entries: Vec<BetRecord>,
}
