//! Shared helpers for integration tests.

#![allow(dead_code)]

use slime_wars::{BoardState, GameEngine};

/// Route `tracing` output to the test harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Empty-cell count by full scan.
pub fn scan_empty(board: &BoardState) -> usize {
    board.squares().filter(|s| s.color.is_empty()).count()
}

/// The incremental counter must agree with a full scan.
pub fn assert_counter_consistent(game: &GameEngine) {
    assert_eq!(
        game.board().empty_squares(),
        scan_empty(game.board()),
        "empty counter drifted on board\n{}",
        game.board()
    );
}
