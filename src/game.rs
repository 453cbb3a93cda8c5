//! Game layer for Frontier.
//!
//! Implements the simulation rules:
//! - Square board of cells with an owner and a size
//! - Cell evaluation heuristic
//! - Move resolution (expansion, merge, capture)
//! - Greedy per-cell action selection
//! - Tick driver with growth and player alternation

mod actions;
mod combat;
mod eval;
mod grid;
mod invariants;
mod state;

pub use actions::{apply_action, apply_actions, compute_actions, eval_action, Action};
pub use combat::{move_cell, MoveOutcome};
pub use eval::{eval_cell, evaluate_board, frontier_distance, CLOSE_TO_NEW_BONUS, OWN_BONUS};
pub use grid::{legal_directions, Board, Cell, Coord, Direction, PlayerId, UNCLAIMED};
pub use invariants::{assert_invariants, check_invariants, InvariantViolation, SANITY_MAX_CELL_SIZE};
pub use state::{advance_growth, GameState, PlayerScore, TickReport};
