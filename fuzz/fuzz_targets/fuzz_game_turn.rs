#![no_main]

//! Full tick fuzzer.
//!
//! Builds a small board from fuzzer bytes, then runs selection, application
//! and growth for several ticks with alternating players:
//! 1. Selection must leave the board untouched
//! 2. Every selected action must apply cleanly
//! 3. Resolution must never leave a claimed cell with negative size
//!
//! This catches integration bugs that the resolver fuzzer misses.

use arbitrary::Arbitrary;
use frontier::game::{
    advance_growth, apply_actions, check_invariants, compute_actions, Board, Cell, Coord,
};
use libfuzzer_sys::fuzz_target;

/// Structured input for tick fuzzing.
#[derive(Arbitrary, Debug)]
struct GameTurnInput {
    /// Board side length (mapped to 1..=8).
    size: u8,
    /// Raw cells as (owner, size) pairs.
    cells: Vec<(u8, u8)>,
    /// Number of ticks to simulate.
    num_ticks: u8,
    /// Whether player 2 acts first.
    player_two_first: bool,
}

fuzz_target!(|input: GameTurnInput| {
    // Cap values to avoid excessive runtime
    let size = u16::from(input.size % 8) + 1;
    let num_ticks = (input.num_ticks % 10).max(1);

    let Some(mut board) = Board::new(size) else {
        return;
    };
    for (i, (owner, cell_size)) in input.cells.into_iter().take(64).enumerate() {
        let Ok(i) = u16::try_from(i) else {
            return;
        };
        let coord = Coord::new(i / size, i % size);
        board.set(coord, Cell::new(owner % 3, i32::from(cell_size)));
    }

    let mut player = if input.player_two_first { 2 } else { 1 };
    for _ in 0..num_ticks {
        let before = board.clone();
        let actions = compute_actions(&board, player);
        assert_eq!(board, before, "selection mutated the board");

        assert!(apply_actions(&mut board, &actions).is_ok());
        advance_growth(&mut board);

        let violations = check_invariants(&board, [1, 2]);
        assert!(violations.is_empty(), "{violations:?}");

        player = if player == 1 { 2 } else { 1 };
    }
});
