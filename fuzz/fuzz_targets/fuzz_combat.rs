#![no_main]

//! Move resolution fuzzer.
//!
//! Resolves arbitrary mover/target pairs, both directly and through an
//! action on a small board, and checks that both paths agree.

use arbitrary::Arbitrary;
use frontier::game::{apply_actions, move_cell, Action, Board, Cell, Coord, Direction};
use libfuzzer_sys::fuzz_target;

/// Structured input for combat fuzzing.
#[derive(Arbitrary, Debug)]
struct CombatInput {
    /// Mover owner (mapped to 0..=2).
    mover_owner: u8,
    /// Mover size.
    mover_size: i32,
    /// Target owner (mapped to 0..=2).
    target_owner: u8,
    /// Target size.
    target_size: i32,
    /// Mover x coordinate (for boundary testing).
    x: u8,
    /// Mover y coordinate (for boundary testing).
    y: u8,
    /// Direction index.
    direction: u8,
}

const DIRECTIONS: [Direction; 4] = Direction::MOVES;

fuzz_target!(|input: CombatInput| {
    // Cap inputs so arithmetic stays far from overflow
    let mover = Cell::new(input.mover_owner % 3, input.mover_size.clamp(-1, 1_000_000));
    let target = Cell::new(input.target_owner % 3, input.target_size.clamp(-1, 1_000_000));

    let outcome = move_cell(mover, target);
    assert_eq!(outcome.mover, Cell::new(mover.owner, 1));
    assert_eq!(outcome, move_cell(mover, target), "resolution must be deterministic");
    if mover.owner == target.owner && !target.is_unclaimed() {
        assert_eq!(outcome.target.size, target.size + mover.size - 1);
    }

    let Some(mut board) = Board::new(6) else {
        return;
    };
    let from = Coord::new(u16::from(input.x % 6), u16::from(input.y % 6));
    let direction = DIRECTIONS[usize::from(input.direction % 4)];
    board.set(from, mover);

    let Some(to) = from.step(direction, board.size()) else {
        // Off the board: application must refuse and leave the board alone
        let before = board.clone();
        assert!(apply_actions(&mut board, &[Action::new(direction, from)]).is_err());
        assert_eq!(board, before);
        return;
    };
    board.set(to, target);

    assert!(apply_actions(&mut board, &[Action::new(direction, from)]).is_ok());
    assert_eq!(board.get(from), Some(outcome.mover));
    assert_eq!(board.get(to), Some(outcome.target));
});
