//! Error types for the simulation core.

use crate::game::Coord;

/// Errors raised by board setup and action application.
///
/// Out-of-bounds actions never come out of the action selector; seeing one
/// means the caller built an action by hand against the wrong board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// An action touched a coordinate outside the board.
    #[error("action at ({}, {}) leaves a board of size {size}", .coord.x, .coord.y)]
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Side length of the board.
        size: u16,
    },
    /// The starting layout cannot be built.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for simulation operations.
pub type GameResult<T> = Result<T, GameError>;
