//! End-to-end session tests on a paused tokio clock: spinners, channel
//! merge, rendering, and settlement all run against virtual time.

mod common;

use common::{bet, session};
use reelspin::config::SlotConfig;
use reelspin::domain::symbol::{Alphabet, Symbol};
use rust_decimal_macros::dec;
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_session_reports_exactly_one_result_line() {
    let (mut controller, sink) = session(SlotConfig::default(), vec![0, 1, 2]);

    let outcome = controller.spin(bet(dec!(10))).await.unwrap();

    let result = sink.result().await.expect("session must report a result");
    assert!(result.ends_with("You lose") || result.contains("You win "));

    // The reported line starts with the final resting symbols.
    let line: Vec<String> = outcome
        .symbols
        .iter()
        .map(|s| s.expect("all reels ticked").to_string())
        .collect();
    assert!(result.starts_with(&line.join("|")));

    // Animation actually happened, and every frame was erased again.
    let frames = sink.frames().await;
    assert!(!frames.is_empty());
    assert_eq!(frames.len(), sink.cleared().await);
}

#[tokio::test(start_paused = true)]
async fn test_session_duration_is_reels_times_stagger() {
    let (mut controller, _sink) = session(SlotConfig::default(), vec![0, 3, 6]);

    let started = Instant::now();
    controller.spin(bet(dec!(1))).await.unwrap();
    let elapsed = started.elapsed();

    // 3 reels x 1000ms of spinning, then the 200ms result pause; a small
    // backlog of buffered frames may drain after the deadline.
    assert!(elapsed >= Duration::from_millis(3200), "{elapsed:?}");
    assert!(elapsed <= Duration::from_millis(3800), "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn test_guaranteed_win_renders_payout() {
    // One-symbol alphabet: every reel rests on 🍒, which pays 2.5x.
    let config = SlotConfig {
        symbols: Alphabet::new(vec![Symbol('🍒')]).unwrap(),
        ..Default::default()
    };
    let (mut controller, sink) = session(config, vec![0, 0, 0]);

    let outcome = controller.spin(bet(dec!(10))).await.unwrap();

    assert!(outcome.is_win());
    assert_eq!(outcome.payout, dec!(25));
    assert_eq!(sink.result().await.unwrap(), "🍒|🍒|🍒 You win 25.00");
}

#[tokio::test(start_paused = true)]
async fn test_guaranteed_loss_renders_lose() {
    let config = SlotConfig {
        symbols: Alphabet::new(vec![Symbol('🍋')]).unwrap(),
        ..Default::default()
    };
    let (mut controller, sink) = session(config, vec![0, 0, 0]);

    let outcome = controller.spin(bet(dec!(10))).await.unwrap();

    assert!(!outcome.is_win());
    assert_eq!(sink.result().await.unwrap(), "🍋|🍋|🍋 You lose");
}

#[tokio::test(start_paused = true)]
async fn test_frames_grow_as_reels_come_alive() {
    let (mut controller, sink) = session(SlotConfig::default(), vec![0, 0, 0]);

    controller.spin(bet(dec!(1))).await.unwrap();

    let frames = sink.frames().await;
    // Separator count per frame never decreases: reels only get added to
    // the display, never removed.
    let separators: Vec<usize> = frames
        .iter()
        .map(|frame| frame.matches('|').count())
        .collect();
    let mut sorted = separators.clone();
    sorted.sort_unstable();
    assert_eq!(separators, sorted);
    assert_eq!(*separators.last().unwrap(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_controller_can_run_consecutive_sessions() {
    let (mut controller, sink) = session(SlotConfig::default(), vec![0, 1, 2, 3, 4, 5]);

    let first = controller.spin(bet(dec!(5))).await.unwrap();
    let second = controller.spin(bet(dec!(5))).await.unwrap();

    assert!(first.symbols.iter().all(|s| s.is_some()));
    assert!(second.symbols.iter().all(|s| s.is_some()));
    assert!(sink.result().await.is_some());
}
