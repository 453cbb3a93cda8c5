// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Frontier: a deterministic territorial growth simulation.
//!
//! Two players own cells on a square board. Each tick the acting player's
//! cells pick a move with a one-ply greedy heuristic, moves are resolved as
//! expansion, merge or combat, and then every cell grows by one.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     CLI (run / watch)               │
//! ├─────────────────────────────────────┤
//! │     Replay engine + rendering       │
//! ├─────────────────────────────────────┤
//! │     Tick driver (GameState)         │
//! ├─────────────────────────────────────┤
//! │  Selector │ Evaluator │ Resolver    │
//! ├─────────────────────────────────────┤
//! │     Board / Cell / Coord            │
//! └─────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod replay;

pub use config::{Seed, SimConfig, PLAYER_ONE, PLAYER_TWO};
pub use error::{GameError, GameResult};

// Re-export key game types at crate root for convenience
pub use game::{
    advance_growth, apply_actions, compute_actions, evaluate_board, Action, Board, Cell, Coord,
    Direction, GameState, PlayerId, TickReport,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::OutOfBounds {
            coord: Coord::new(3, 10),
            size: 10,
        };
        let msg = format!("{err}");
        assert!(msg.contains("(3, 10)"));
        assert!(msg.contains("size 10"));
    }
}
