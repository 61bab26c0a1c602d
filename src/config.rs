use std::env;

use crate::game::constants::{
    DEFAULT_DECK_COUNT, DEFAULT_INTER_ROUND_DELAY_MS, DEFAULT_MIN_BET,
    DEFAULT_ROUND_DURATION_SECS, DEFAULT_WIN_MULTIPLIER,
};
use crate::game::round::RoundRecord;

/// Engine parameters, fixed at construction.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Win multiplier applied to a winning bet. Must be positive.
    pub win_multiplier: f64,
    /// Number of decks shuffled into the shoe each round. Must be positive.
    pub deck_count: usize,
    /// Minimum bet, and minimum balance required to join. Must be positive.
    pub min_bet: u64,
    /// Betting window per round, in whole seconds. Must be positive.
    pub round_duration_secs: u64,
    /// Pause between resolving a round and starting the next one.
    pub inter_round_delay_ms: u64,
    /// Rounds carried over from a previous session, oldest first.
    pub seed_history: Vec<RoundRecord>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            win_multiplier: DEFAULT_WIN_MULTIPLIER,
            deck_count: DEFAULT_DECK_COUNT,
            min_bet: DEFAULT_MIN_BET,
            round_duration_secs: DEFAULT_ROUND_DURATION_SECS,
            inter_round_delay_ms: DEFAULT_INTER_ROUND_DELAY_MS,
            seed_history: Vec::new(),
        }
    }
}

impl EngineConfig {
    pub fn new(
        win_multiplier: f64,
        deck_count: usize,
        min_bet: u64,
        round_duration_secs: u64,
    ) -> Self {
        assert!(win_multiplier > 0.0, "win multiplier must be positive");
        assert!(deck_count > 0, "deck count must be positive");
        assert!(min_bet > 0, "minimum bet must be positive");
        assert!(round_duration_secs > 0, "round duration must be positive");
        Self {
            win_multiplier,
            deck_count,
            min_bet,
            round_duration_secs,
            ..Self::default()
        }
    }

    /// Reads parameters from `HILO_*` environment variables, falling back to
    /// the defaults for anything unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            win_multiplier: env::var("HILO_WIN_MULTIPLIER")
                .map(|v| v.parse().expect("HILO_WIN_MULTIPLIER must be a number"))
                .unwrap_or(defaults.win_multiplier),
            deck_count: env::var("HILO_DECK_COUNT")
                .map(|v| v.parse().expect("HILO_DECK_COUNT must be a number"))
                .unwrap_or(defaults.deck_count),
            min_bet: env::var("HILO_MIN_BET")
                .map(|v| v.parse().expect("HILO_MIN_BET must be a number"))
                .unwrap_or(defaults.min_bet),
            round_duration_secs: env::var("HILO_ROUND_DURATION_SECS")
                .map(|v| v.parse().expect("HILO_ROUND_DURATION_SECS must be a number"))
                .unwrap_or(defaults.round_duration_secs),
            inter_round_delay_ms: env::var("HILO_INTER_ROUND_DELAY_MS")
                .map(|v| v.parse().expect("HILO_INTER_ROUND_DELAY_MS must be a number"))
                .unwrap_or(defaults.inter_round_delay_ms),
            seed_history: Vec::new(),
        }
    }

    /// Pre-seeds the round history (e.g. restored from an external sink).
    pub fn with_seed_history(mut self, history: Vec<RoundRecord>) -> Self {
        self.seed_history = history;
        self
    }

    pub fn round_duration_ms(&self) -> u64 {
        self.round_duration_secs * 1000
    }
}
