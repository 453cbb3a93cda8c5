//! Board invariants - sanity checks that detect bugs.
//!
//! Resolution from eligible movers never produces a negative size, and only
//! the two seeded players can ever own a cell. Sizes grow by one per tick, so
//! the size bound below is far outside anything a real game reaches.

use crate::game::{Board, PlayerId, UNCLAIMED};

/// Sanity bound: no cell should ever grow past this.
pub const SANITY_MAX_CELL_SIZE: i32 = 1_000_000_000;

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invariant violation: {message}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

/// Check all board invariants against the set of seeded `players`.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(board: &Board, players: [PlayerId; 2]) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for (coord, cell) in board.iter() {
        if cell.owner != UNCLAIMED && !players.contains(&cell.owner) {
            violations.push(InvariantViolation {
                message: format!("Cell at {coord:?} owned by unknown player {}", cell.owner),
            });
        }

        if cell.owner != UNCLAIMED && cell.size < 0 {
            violations.push(InvariantViolation {
                message: format!("Claimed cell at {coord:?} has negative size {}", cell.size),
            });
        }

        if cell.size > SANITY_MAX_CELL_SIZE {
            violations.push(InvariantViolation {
                message: format!(
                    "Cell at {coord:?} has size {} > sanity max {SANITY_MAX_CELL_SIZE}",
                    cell.size
                ),
            });
        }
    }

    violations
}

/// Assert all board invariants hold, panicking if any are violated.
///
/// Only active in debug builds. Release builds log the violations instead.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(board: &Board, players: [PlayerId; 2]) {
    let violations = check_invariants(board, players);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Board invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// Logs violations in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(board: &Board, players: [PlayerId; 2]) {
    for violation in check_invariants(board, players) {
        tracing::warn!(%violation, "board invariant violated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Coord};

    fn valid_board() -> Board {
        let mut board = Board::new(5).unwrap();
        board.set(Coord::new(0, 2), Cell::new(1, 3));
        board.set(Coord::new(4, 2), Cell::new(2, 0));
        board
    }

    #[test]
    fn test_valid_board_passes() {
        assert!(check_invariants(&valid_board(), [1, 2]).is_empty());
    }

    #[test]
    fn test_unknown_owner_detected() {
        let mut board = valid_board();
        board.set(Coord::new(2, 2), Cell::new(3, 1));
        let violations = check_invariants(&board, [1, 2]);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("unknown player"));
    }

    #[test]
    fn test_negative_claimed_size_detected() {
        let mut board = valid_board();
        board.set(Coord::new(2, 2), Cell::new(1, -3));
        let violations = check_invariants(&board, [1, 2]);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("negative size"));
    }

    #[test]
    fn test_negative_unclaimed_sentinel_allowed() {
        let mut board = valid_board();
        board.set(Coord::new(2, 2), Cell::new(0, -1));
        assert!(check_invariants(&board, [1, 2]).is_empty());
    }

    #[test]
    fn test_oversized_cell_detected() {
        let mut board = valid_board();
        board.set(Coord::new(2, 2), Cell::new(0, SANITY_MAX_CELL_SIZE + 1));
        let violations = check_invariants(&board, [1, 2]);
        assert!(violations[0].message.contains("sanity max"));
    }
}
