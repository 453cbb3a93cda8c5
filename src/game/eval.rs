//! Heuristic value of cells and boards.
//!
//! A claimed cell is worth its size plus a flat ownership bonus. Friendly
//! cells are penalised by their distance to the nearest cell of a different
//! owner, which pulls growth towards contested space. Opponent cells count
//! as a cost without the distance term.

use crate::game::{Board, Cell, Coord, PlayerId};

/// Flat value of holding any claimed cell.
pub const OWN_BONUS: f64 = 10.0;

/// Weight of the frontier distance for the evaluating player's own cells.
pub const CLOSE_TO_NEW_BONUS: f64 = 1.0;

/// Distance from `at` to the nearest board cell whose owner differs from
/// `owner`.
///
/// The scan starts from the board side length, so that is the result when no
/// differing cell is closer.
#[must_use]
pub fn frontier_distance(board: &Board, owner: PlayerId, at: Coord) -> u32 {
    board
        .iter()
        .filter(|(_, cell)| cell.owner != owner)
        .map(|(coord, _)| coord.manhattan(at))
        .fold(u32::from(board.size()), u32::min)
}

/// Score `cell`, imagined at `at`, from `player`'s point of view.
///
/// Distances are measured against `board` as it currently stands, even when
/// `cell` is a hypothetical post-move cell.
#[must_use]
pub fn eval_cell(cell: Cell, player: PlayerId, board: &Board, at: Coord) -> f64 {
    let player_factor = if cell.is_unclaimed() {
        return 0.0;
    } else if cell.owner == player {
        1.0
    } else {
        -1.0
    };

    let distance = f64::from(frontier_distance(board, cell.owner, at));
    let close_to_new_bonus = if cell.owner == player {
        CLOSE_TO_NEW_BONUS
    } else {
        0.0
    };

    player_factor * ((OWN_BONUS + f64::from(cell.size)) - distance * close_to_new_bonus)
}

/// Sum of [`eval_cell`] over every cell at its own coordinate.
#[must_use]
pub fn evaluate_board(board: &Board, player: PlayerId) -> f64 {
    board
        .iter()
        .map(|(coord, cell)| eval_cell(cell, player, board, coord))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn two_player_board() -> Board {
        let mut board = Board::new(10).unwrap();
        board.set(Coord::new(0, 5), Cell::new(1, 1));
        board.set(Coord::new(9, 5), Cell::new(2, 1));
        board
    }

    #[test]
    fn test_unclaimed_scores_zero() {
        let board = two_player_board();
        for size in [-1, 0, 1, 50] {
            let score = eval_cell(Cell::new(0, size), 1, &board, Coord::new(3, 3));
            assert!(approx(score, 0.0));
        }
    }

    #[test]
    fn test_frontier_distance_adjacent() {
        let board = two_player_board();
        // Every neighbour of the seed is unclaimed.
        assert_eq!(frontier_distance(&board, 1, Coord::new(0, 5)), 1);
    }

    #[test]
    fn test_frontier_distance_capped_at_board_size() {
        let mut board = Board::new(4).unwrap();
        for cell in board.cells_mut() {
            *cell = Cell::new(1, 1);
        }
        assert_eq!(frontier_distance(&board, 1, Coord::new(0, 0)), 4);
    }

    #[test]
    fn test_frontier_distance_counts_own_position() {
        // A hypothetical owner-2 cell imagined on an owner-1 square is at
        // distance zero from a differing cell.
        let board = two_player_board();
        assert_eq!(frontier_distance(&board, 2, Coord::new(0, 5)), 0);
    }

    #[test]
    fn test_own_cell_score() {
        let board = two_player_board();
        // 10 + 1 - 1 * 1
        let score = eval_cell(Cell::new(1, 1), 1, &board, Coord::new(0, 5));
        assert!(approx(score, 10.0));
    }

    #[test]
    fn test_opponent_cell_score_ignores_distance() {
        let board = two_player_board();
        let score = eval_cell(Cell::new(2, 1), 1, &board, Coord::new(9, 5));
        assert!(approx(score, -11.0));
    }

    #[test]
    fn test_far_own_cell_penalised() {
        let mut board = Board::new(10).unwrap();
        for cell in board.cells_mut() {
            *cell = Cell::new(1, 0);
        }
        board.set(Coord::new(9, 9), Cell::new(2, 0));

        let near = eval_cell(Cell::new(1, 5), 1, &board, Coord::new(9, 8));
        let far = eval_cell(Cell::new(1, 5), 1, &board, Coord::new(0, 0));
        assert!(near > far);
        assert!(approx(near, 14.0));
        // Distance 18 is capped at the side length of 10.
        assert!(approx(far, 5.0));
    }

    #[test]
    fn test_evaluate_board_symmetry() {
        let board = two_player_board();
        assert!(approx(evaluate_board(&board, 1), 10.0 - 11.0));
        assert!(approx(evaluate_board(&board, 2), 10.0 - 11.0));
    }

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new(6).unwrap();
        assert!(approx(evaluate_board(&board, 1), 0.0));
    }
}
