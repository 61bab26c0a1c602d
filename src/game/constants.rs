//! Game-related constants and default configuration values
//!
//! Centralizing these values makes it easier to:
//! - Adjust for testing
//! - Keep the default table parameters in one place

/// Lowest card rank in play (Ace counts as 1).
pub const MIN_RANK: u8 = 1;

/// Highest card rank in play (King).
pub const MAX_RANK: u8 = 13;

/// Cards per single deck (one of each rank; suits are irrelevant to higher/lower).
pub const RANKS_PER_DECK: usize = 13;

/// Cards consumed per round: the dealer card and the next card.
pub const CARDS_DRAWN_PER_ROUND: usize = 2;

/// Default win multiplier applied to a winning bet.
pub const DEFAULT_WIN_MULTIPLIER: f64 = 1.7;

/// Default number of decks shuffled together each round.
pub const DEFAULT_DECK_COUNT: usize = 6;

/// Default minimum bet (also the minimum balance required to join).
pub const DEFAULT_MIN_BET: u64 = 10;

/// Default betting window per round, in seconds.
pub const DEFAULT_ROUND_DURATION_SECS: u64 = 15;

/// Timing constants (in milliseconds)
pub const DEFAULT_INTER_ROUND_DELAY_MS: u64 = 1000; // Pause between resolution and the next round
