//! Starting layout of a simulation.

use serde::Serialize;

use crate::error::{GameError, GameResult};
use crate::game::{Board, Cell, Coord, PlayerId, UNCLAIMED};

/// Player seeded at the low end of the x axis.
pub const PLAYER_ONE: PlayerId = 1;

/// Player seeded at the high end of the x axis.
pub const PLAYER_TWO: PlayerId = 2;

/// A single starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Seed {
    /// Owner of the starting cell.
    pub player: PlayerId,
    /// Where it is placed.
    pub at: Coord,
    /// Starting size.
    pub size: i32,
}

/// Configuration for one simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimConfig {
    /// Side length of the board.
    pub size: u16,
    /// Starting cells, one per player.
    pub seeds: [Seed; 2],
    /// Player that acts on the first tick.
    pub first_mover: PlayerId,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size: 10,
            seeds: [
                Seed {
                    player: PLAYER_ONE,
                    at: Coord::new(0, 5),
                    size: 1,
                },
                Seed {
                    player: PLAYER_TWO,
                    at: Coord::new(9, 5),
                    size: 1,
                },
            ],
            first_mover: PLAYER_TWO,
        }
    }
}

impl SimConfig {
    /// The two player ids, in seed order.
    #[must_use]
    pub const fn players(&self) -> [PlayerId; 2] {
        [self.seeds[0].player, self.seeds[1].player]
    }

    /// The player acting after `player`.
    #[must_use]
    pub const fn other_player(&self, player: PlayerId) -> PlayerId {
        let [first, second] = self.players();
        if player == first { second } else { first }
    }

    /// Build the starting board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] if the board is empty, a seed is
    /// off the board or unowned, both seeds share a player or a square, or
    /// the first mover is not one of the seeded players.
    pub fn build_board(&self) -> GameResult<Board> {
        let mut board = Board::new(self.size)
            .ok_or_else(|| GameError::InvalidConfig("board size must be positive".into()))?;

        let [a, b] = self.seeds;
        if a.player == b.player || a.at == b.at {
            return Err(GameError::InvalidConfig(
                "seeds need distinct players and squares".into(),
            ));
        }
        if !self.players().contains(&self.first_mover) {
            return Err(GameError::InvalidConfig(format!(
                "first mover {} is not a seeded player",
                self.first_mover
            )));
        }

        for seed in self.seeds {
            if seed.player == UNCLAIMED {
                return Err(GameError::InvalidConfig(
                    "seed player must not be 0".into(),
                ));
            }
            if !board.set(seed.at, Cell::new(seed.player, seed.size)) {
                return Err(GameError::InvalidConfig(format!(
                    "seed ({}, {}) is outside a {}x{} board",
                    seed.at.x, seed.at.y, self.size, self.size
                )));
            }
        }

        Ok(board)
    }
}
