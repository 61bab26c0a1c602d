use std::sync::Arc;
use std::time::Duration;

use hilo_engine::{EngineConfig, EngineServer, GameEvent, GameResult, Guess, Participant};

/// Demo driver: one participant plays a few rounds against the house with a
/// naive threshold strategy, printing the notifications as they arrive.
#[tokio::main]
async fn main() -> GameResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load config
    let config = EngineConfig::from_env();
    tracing::info!(
        "Starting round engine (k={}, {} deck(s), min bet {}, {}s rounds)",
        config.win_multiplier,
        config.deck_count,
        config.min_bet,
        config.round_duration_secs
    );
    let delay_ms = config.inter_round_delay_ms;
    let min_bet = config.min_bet;
    let server = EngineServer::new(config);

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match event {
                GameEvent::RoundStart { dealer_card, .. } => {
                    println!("Dealer shows {}", dealer_card);
                }
                GameEvent::RoundFinish { next_card, info } => {
                    if info.skip {
                        println!("Next card {}: sat out", next_card);
                    } else if info.won {
                        println!("Next card {}: won {}", next_card, info.win_amount);
                    } else {
                        println!("Next card {}: lost {}", next_card, info.bet);
                    }
                }
                GameEvent::GameLeave => println!("Removed from the game"),
            }
        }
    });

    server
        .admit(Participant::new(1, "Demo", 100, Arc::new(tx)))
        .await?;

    for _ in 0..3 {
        if let Some(round) = server.current_round().await {
            // Bet higher on a low dealer card, lower on a high one.
            let guess = if round.dealer_card <= 7 {
                Guess::Higher
            } else {
                Guess::Lower
            };
            if let Err(e) = server.place_bet(min_bet, guess, 1).await {
                tracing::warn!("Bet rejected: {}", e);
                break;
            }
        }
        // Betting closes the round immediately (sole participant); wake just
        // after the inter-round pause so the next round is open again.
        tokio::time::sleep(Duration::from_millis(delay_ms + 200)).await;
    }

    println!(
        "After {} round(s): balance {:?}, bank {}",
        server.history().await.len(),
        server.balance_of(1).await,
        server.bank().await
    );
    Ok(())
}
