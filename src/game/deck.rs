use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use super::constants::{MAX_RANK, MIN_RANK, RANKS_PER_DECK};

/// A shuffled shoe of rank-only cards. Suits never matter in higher/lower,
/// so a card is just its rank (1-13, Ace low).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<u8>,
    deck_count: usize,
}

impl Deck {
    /// Creates a shuffled shoe containing `deck_count` copies of each rank.
    pub fn new(deck_count: usize) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(deck_count * RANKS_PER_DECK),
            deck_count,
        };
        deck.rebuild_and_shuffle();
        deck
    }

    /// Rebuilds the full shoe and shuffles it. Called at the start of every round.
    pub fn rebuild_and_shuffle(&mut self) {
        self.cards.clear();
        for _ in 0..self.deck_count {
            for rank in MIN_RANK..=MAX_RANK {
                self.cards.push(rank);
            }
        }
        self.shuffle();
    }

    /// Shuffles the shoe using Fisher-Yates with a ChaCha20 RNG.
    fn shuffle(&mut self) {
        let mut rng = ChaCha20Rng::from_entropy();
        self.cards.shuffle(&mut rng);
    }

    /// Draws a single card from the top of the shoe.
    pub fn draw(&mut self) -> Option<u8> {
        self.cards.pop()
    }

    /// Returns the number of cards left in the shoe.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Builds a shoe with a fixed draw order; `cards` are drawn back-to-front.
    #[cfg(test)]
    pub(crate) fn stacked(cards: Vec<u8>) -> Self {
        Self {
            deck_count: 0,
            cards,
        }
    }
}
