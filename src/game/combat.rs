//! Combat and merge resolution.
//!
//! A moving cell keeps one unit of size and sends the rest into the adjacent
//! target. Unclaimed targets are taken outright, friendly targets absorb the
//! sent size, and hostile targets fight by plain subtraction with the
//! defender winning ties.

use crate::game::Cell;

/// The two cells that result from one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// What remains on the mover's square.
    pub mover: Cell,
    /// What ends up on the target square.
    pub target: Cell,
}

/// Resolve `cell` moving into the adjacent `other`.
///
/// Pure: the same inputs always yield the same outcome, and the same
/// function backs both hypothetical evaluation and real application.
#[must_use]
pub fn move_cell(cell: Cell, other: Cell) -> MoveOutcome {
    let sent = cell.size - 1;
    let is_own = cell.owner == other.owner;
    let is_bigger = sent >= other.size || is_own;

    let target = if other.is_unclaimed() {
        Cell::new(cell.owner, sent)
    } else if is_own {
        Cell::new(cell.owner, other.size + sent)
    } else if is_bigger {
        Cell::new(cell.owner, sent - other.size)
    } else {
        Cell::new(other.owner, other.size - sent)
    };

    MoveOutcome {
        mover: Cell::new(cell.owner, 1),
        target,
    }
}

/// Kani formal verification proofs.
///
/// Run with: `cargo kani`
#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// A hostile fight never leaves the target with negative size when the
    /// mover was eligible and the defender non-negative.
    #[kani::proof]
    fn prove_hostile_outcome_non_negative() {
        let attacker: i32 = kani::any();
        let defender: i32 = kani::any();
        kani::assume(attacker > 1 && attacker < 1_000_000);
        kani::assume(defender >= 0 && defender < 1_000_000);

        let outcome = move_cell(Cell::new(1, attacker), Cell::new(2, defender));
        assert!(outcome.target.size >= 0);
        assert!(outcome.mover.size == 1);
    }
}
