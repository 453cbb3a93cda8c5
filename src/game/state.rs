//! Tick driver: selection, application and growth.

use serde::Serialize;
use tracing::debug;

use crate::config::SimConfig;
use crate::error::GameResult;
use crate::game::{
    apply_actions, assert_invariants, compute_actions, evaluate_board, Action, Board, PlayerId,
};

/// Grow every cell on the board by one unit.
///
/// Cells with a negative size are reset to zero instead.
pub fn advance_growth(board: &mut Board) {
    for cell in board.cells_mut() {
        *cell = cell.grown();
    }
}

/// Evaluation total for one player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerScore {
    /// Player identifier.
    pub player: PlayerId,
    /// [`evaluate_board`] from this player's perspective.
    pub evaluation: f64,
    /// Cells owned.
    pub cells: usize,
    /// Sum of owned cell sizes.
    pub total_size: i64,
}

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickReport {
    /// Tick number, starting at 1.
    pub tick: u64,
    /// Player whose cells acted.
    pub player: PlayerId,
    /// Actions applied, in order.
    pub actions: Vec<Action>,
    /// Evaluation totals after growth, in seed order.
    pub scores: [PlayerScore; 2],
}

/// Complete simulation state.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The authoritative board.
    pub board: Board,
    /// Layout the game started from.
    config: SimConfig,
    /// Ticks completed so far.
    tick: u64,
    /// Player that acts on the next tick.
    next_player: PlayerId,
}

impl GameState {
    /// Create a game from its starting layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not describe a valid board.
    pub fn new(config: SimConfig) -> GameResult<Self> {
        let board = config.build_board()?;
        Ok(Self {
            board,
            config,
            tick: 0,
            next_player: config.first_mover,
        })
    }

    /// Ticks completed so far.
    #[must_use]
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Player that acts on the next tick.
    #[must_use]
    pub const fn next_player(&self) -> PlayerId {
        self.next_player
    }

    /// The starting layout.
    #[must_use]
    pub const fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Evaluation totals for both players on the current board.
    #[must_use]
    pub fn scores(&self) -> [PlayerScore; 2] {
        self.config.players().map(|player| PlayerScore {
            player,
            evaluation: evaluate_board(&self.board, player),
            cells: self.board.count_owned(player),
            total_size: self.board.total_size(player),
        })
    }

    /// Run one tick for the next player and hand the turn over.
    ///
    /// # Errors
    ///
    /// Returns an error if a selected action falls off the board, which the
    /// selector never produces.
    pub fn step(&mut self) -> GameResult<TickReport> {
        let player = self.next_player;
        let actions = compute_actions(&self.board, player);
        apply_actions(&mut self.board, &actions)?;
        advance_growth(&mut self.board);
        assert_invariants(&self.board, self.config.players());

        self.tick += 1;
        self.next_player = self.config.other_player(player);

        let scores = self.scores();
        debug!(
            tick = self.tick,
            player,
            actions = actions.len(),
            p1 = scores[0].evaluation,
            p2 = scores[1].evaluation,
            "tick complete"
        );

        Ok(TickReport {
            tick: self.tick,
            player,
            actions,
            scores,
        })
    }
}
