//! End-to-end tests driving the engine through its async server handle with
//! real timers. Round durations are kept short so each test settles quickly;
//! outcomes that depend on the shuffled shoe are not asserted here, only
//! lifecycle and accounting properties that hold for any draw.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver};

use hilo_engine::{EngineConfig, EngineServer, GameEvent, Guess, Participant, RoundState};

fn fast_config() -> EngineConfig {
    let mut config = EngineConfig::new(1.7, 1, 10, 1);
    config.inter_round_delay_ms = 200;
    config
}

fn observed_participant(id: u64, balance: u64) -> (Participant, UnboundedReceiver<GameEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let participant = Participant::new(id, format!("Player {}", id), balance, Arc::new(tx));
    (participant, rx)
}

fn drain(rx: &mut UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_timeout_resolves_round_and_next_round_follows() {
    let server = EngineServer::new(fast_config());
    let (participant, mut rx) = observed_participant(1, 100);
    server.admit(participant).await.unwrap();
    assert_eq!(server.state().await, RoundState::AcceptingBets);

    // Past the 1s betting window and the 200ms pause.
    tokio::time::sleep(Duration::from_millis(1500)).await;

    let history = server.history().await;
    assert_eq!(history.len(), 1);
    assert!(history[0].entries[0].skip);
    assert!(history[0].next_card.is_some());

    // Sitting out costs nothing and does not unseat the participant.
    assert_eq!(server.balance_of(1).await, Some(100.0));
    assert_eq!(server.bank().await, 0.0);
    assert_eq!(server.state().await, RoundState::AcceptingBets);

    let events = drain(&mut rx);
    assert!(matches!(events[0], GameEvent::RoundStart { .. }));
    assert!(matches!(events[1], GameEvent::RoundFinish { .. }));
    assert!(matches!(events[2], GameEvent::RoundStart { .. }));
}

#[tokio::test]
async fn test_early_resolution_leaves_stale_timer_inert() {
    let mut config = EngineConfig::new(1.7, 1, 10, 2);
    config.inter_round_delay_ms = 200;
    let server = EngineServer::new(config);
    let (participant, _rx) = observed_participant(1, 1000);
    server.admit(participant).await.unwrap();

    // Sole participant: betting closes the round immediately.
    server.place_bet(10, Guess::Higher, 1).await.unwrap();
    assert_eq!(server.history().await.len(), 1);

    // Round 2 opens after the pause; the round-1 timer fires at ~2s and must
    // not touch it. Check between the stale fire and round 2's own deadline.
    tokio::time::sleep(Duration::from_millis(2100)).await;
    assert_eq!(server.history().await.len(), 1);
    assert_eq!(server.state().await, RoundState::AcceptingBets);

    // Round 2's own timer still works.
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(server.history().await.len(), 2);
}

#[tokio::test]
async fn test_leave_applies_at_resolution_and_engine_goes_idle() {
    let server = EngineServer::new(fast_config());
    let (participant, mut rx) = observed_participant(1, 100);
    server.admit(participant).await.unwrap();

    server.request_leave(1).await;
    // Deferred: still seated while the round is open.
    assert_eq!(server.participant_count().await, 1);

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(server.participant_count().await, 0);
    assert_eq!(server.state().await, RoundState::Idle);

    let events = drain(&mut rx);
    assert!(
        events.iter().any(|e| matches!(e, GameEvent::GameLeave)),
        "departure notification missing: {:?}",
        events
    );

    // No participants, no further rounds.
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(server.history().await.len(), 1);
    assert_eq!(server.state().await, RoundState::Idle);
}

#[tokio::test]
async fn test_admission_after_idle_restarts_the_round_loop() {
    let server = EngineServer::new(fast_config());
    let (first, _rx1) = observed_participant(1, 100);
    server.admit(first).await.unwrap();
    server.request_leave(1).await;
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(server.state().await, RoundState::Idle);

    let (second, mut rx2) = observed_participant(2, 100);
    server.admit(second).await.unwrap();
    assert_eq!(server.state().await, RoundState::AcceptingBets);

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(server.history().await.len(), 2);

    let events = drain(&mut rx2);
    assert!(matches!(events[0], GameEvent::RoundStart { .. }));
}

#[tokio::test]
async fn test_mid_round_joiner_enters_next_snapshot() {
    let server = EngineServer::new(fast_config());
    let (first, _rx1) = observed_participant(1, 100);
    let (second, _rx2) = observed_participant(2, 100);
    server.admit(first).await.unwrap();
    server.admit(second).await.unwrap();

    let open = server.current_round().await.unwrap();
    assert_eq!(open.entries.len(), 1);

    tokio::time::sleep(Duration::from_millis(1500)).await;
    let next = server.current_round().await.unwrap();
    assert_eq!(next.entries.len(), 2);
}

#[tokio::test]
async fn test_bank_tracks_stakes_across_a_round() {
    let server = EngineServer::new(fast_config());
    let (first, _rx1) = observed_participant(1, 100);
    let (second, _rx2) = observed_participant(2, 100);
    server.admit(first).await.unwrap();
    server.admit(second).await.unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;

    // Both in the snapshot now; stake both sides.
    server.place_bet(10, Guess::Higher, 1).await.unwrap();
    server.place_bet(10, Guess::Lower, 2).await.unwrap();

    // Opposite guesses: exactly one wins (bank 20 - 17 = 3) unless the next
    // card ties the dealer, in which case both lose (bank 20).
    let bank = server.bank().await;
    assert!(
        (bank - 3.0).abs() < 1e-9 || (bank - 20.0).abs() < 1e-9,
        "unexpected bank after settlement: {}",
        bank
    );

    let record = server.history().await.last().cloned().unwrap();
    assert_eq!(record.entries.len(), 2);
    assert!(record.entries.iter().all(|e| !e.skip));
}
