//! Greedy per-cell action selection and application.

use serde::Serialize;
use tracing::trace;

use crate::error::{GameError, GameResult};
use crate::game::{
    eval_cell, legal_directions, move_cell, Board, Cell, Coord, Direction, PlayerId,
};

/// A committed move: send the cell at `from` towards `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Action {
    /// Direction the cell moves in.
    pub direction: Direction,
    /// Coordinate of the moving cell.
    pub from: Coord,
}

impl Action {
    /// Create an action.
    #[must_use]
    pub const fn new(direction: Direction, from: Coord) -> Self {
        Self { direction, from }
    }
}

/// Heuristic gain of moving `cell` (standing at `from`) onto `target`.
///
/// Every term is scored from the mover's owner's perspective, at the mover's
/// coordinate, with distances taken from `board` as it stands.
#[must_use]
pub fn eval_action(cell: Cell, target: Cell, board: &Board, from: Coord) -> f64 {
    let player = cell.owner;
    let outcome = move_cell(cell, target);

    let mover_gain =
        eval_cell(outcome.mover, player, board, from) - eval_cell(cell, player, board, from);
    let target_gain =
        eval_cell(outcome.target, player, board, from) - eval_cell(target, player, board, from);

    mover_gain + target_gain
}

/// Choose one move for every eligible cell of `player`.
///
/// Cells are visited x outer, y inner. Each choice is applied to a private
/// copy of the board before the next cell is considered, so later cells see
/// earlier choices. Among equal gains the first direction in
/// [`Direction::MOVES`] order wins. `board` itself is left untouched.
#[must_use]
pub fn compute_actions(board: &Board, player: PlayerId) -> Vec<Action> {
    let mut working = board.clone();
    let mut actions = Vec::new();
    let size = board.size();

    for x in 0..size {
        for y in 0..size {
            let from = Coord::new(x, y);
            let Some(cell) = working.get(from) else {
                continue;
            };
            if !cell.can_act_for(player) {
                continue;
            }

            let mut best: Option<(Direction, f64)> = None;
            for direction in legal_directions(&working, from) {
                let Some(target) = from.step(direction, size).and_then(|to| working.get(to))
                else {
                    continue;
                };
                let gain = eval_action(cell, target, board, from);
                if best.is_none_or(|(_, best_gain)| gain > best_gain) {
                    best = Some((direction, gain));
                }
            }

            if let Some((direction, gain)) = best {
                let action = Action::new(direction, from);
                trace!(player, x, y, ?direction, gain, "cell move chosen");
                // Both coordinates were bounds-checked above.
                if apply_action(&mut working, action).is_ok() {
                    actions.push(action);
                }
            }
        }
    }

    actions
}

/// Resolve a single action on `board`.
///
/// # Errors
///
/// Returns [`GameError::OutOfBounds`] if the source or target square is off
/// the board. The board is unchanged in that case.
pub fn apply_action(board: &mut Board, action: Action) -> GameResult<()> {
    let size = board.size();
    let out_of_bounds = |coord| GameError::OutOfBounds { coord, size };

    let cell = board.get(action.from).ok_or_else(|| out_of_bounds(action.from))?;
    let to = action
        .from
        .step(action.direction, size)
        .ok_or_else(|| out_of_bounds(action.from))?;
    let target = board.get(to).ok_or_else(|| out_of_bounds(to))?;

    let outcome = move_cell(cell, target);
    board.set(action.from, outcome.mover);
    board.set(to, outcome.target);
    Ok(())
}

/// Apply `actions` to `board` in order; later actions see earlier results.
///
/// # Errors
///
/// Stops at the first action that leaves the board and returns
/// [`GameError::OutOfBounds`]. Actions before it stay applied.
pub fn apply_actions(board: &mut Board, actions: &[Action]) -> GameResult<()> {
    actions
        .iter()
        .try_for_each(|&action| apply_action(board, action))
}
