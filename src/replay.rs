//! Simulation replay and viewing.
//!
//! Because Frontier games are 100% deterministic, a [`SimConfig`] fully
//! describes a game. No state deltas are kept: to view tick N the engine
//! re-runs the simulation from tick 0 to N.
//!
//! # Time Travel
//!
//! - **Forward**: Continue stepping the simulation
//! - **Backward**: Re-run from tick 0 to (current_tick - 1)
//! - **Jump to tick N**: Re-run from tick 0 to N

mod render;
mod text;

pub use render::{glyph, render_ascii, size_char};
pub use text::render_text;

use crate::config::SimConfig;
use crate::error::GameError;
use crate::game::{GameState, TickReport};

/// Error type for replay operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    /// The simulation itself failed.
    #[error(transparent)]
    Game(#[from] GameError),
    /// Tick number beyond the configured limit.
    #[error("Tick {requested} out of bounds (max: {max_tick})")]
    TickOutOfBounds {
        /// Requested tick.
        requested: u64,
        /// Last reachable tick.
        max_tick: u64,
    },
    /// The tick limit has been reached.
    #[error("Simulation has reached its tick limit")]
    Finished,
}

/// Replay engine - steps through a simulation deterministically.
///
/// Since simulations are deterministic, this engine can:
/// - Step forward by executing one tick
/// - Step backward by replaying from tick 0
/// - Jump to any tick by replaying from tick 0
#[derive(Debug, Clone)]
pub struct ReplayEngine {
    /// Current simulation state.
    state: GameState,
    /// Optional tick limit.
    max_ticks: Option<u64>,
    /// Report of the most recent tick, if any ran.
    last_report: Option<TickReport>,
}

impl ReplayEngine {
    /// Create a new replay engine at tick 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: SimConfig, max_ticks: Option<u64>) -> Result<Self, ReplayError> {
        Self::new_at_tick(config, max_ticks, 0)
    }

    /// Create a new replay engine at a specific tick.
    ///
    /// This replays from tick 0 to the target tick.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the target lies
    /// past the tick limit.
    pub fn new_at_tick(
        config: SimConfig,
        max_ticks: Option<u64>,
        target_tick: u64,
    ) -> Result<Self, ReplayError> {
        if let Some(max_tick) = max_ticks
            && target_tick > max_tick
        {
            return Err(ReplayError::TickOutOfBounds {
                requested: target_tick,
                max_tick,
            });
        }

        let mut engine = Self {
            state: GameState::new(config)?,
            max_ticks,
            last_report: None,
        };
        for _ in 0..target_tick {
            engine.last_report = Some(engine.state.step()?);
        }
        Ok(engine)
    }

    /// Current tick number.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.state.tick()
    }

    /// Current simulation state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The tick limit, if any.
    #[must_use]
    pub fn max_ticks(&self) -> Option<u64> {
        self.max_ticks
    }

    /// Report of the most recent tick.
    #[must_use]
    pub fn last_report(&self) -> Option<&TickReport> {
        self.last_report.as_ref()
    }

    /// Check if the tick limit has been reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.max_ticks.is_some_and(|max| self.state.tick() >= max)
    }

    /// Step forward one tick.
    ///
    /// # Errors
    ///
    /// Returns an error if the tick limit has been reached.
    pub fn step_forward(&mut self) -> Result<&TickReport, ReplayError> {
        if self.is_finished() {
            return Err(ReplayError::Finished);
        }
        let report = self.state.step()?;
        Ok(self.last_report.insert(report))
    }

    /// Step backward one tick.
    ///
    /// This replays from tick 0 to (current_tick - 1).
    ///
    /// # Errors
    ///
    /// Returns an error if already at tick 0.
    pub fn step_backward(&mut self) -> Result<(), ReplayError> {
        let Some(target) = self.tick().checked_sub(1) else {
            return Err(ReplayError::TickOutOfBounds {
                requested: 0,
                max_tick: 0,
            });
        };
        self.goto_tick(target)
    }

    /// Jump to a specific tick.
    ///
    /// This replays from tick 0 to the target tick.
    ///
    /// # Errors
    ///
    /// Returns an error if the tick is past the tick limit.
    pub fn goto_tick(&mut self, target_tick: u64) -> Result<(), ReplayError> {
        *self = Self::new_at_tick(*self.state.config(), self.max_ticks, target_tick)?;
        Ok(())
    }

    /// Render the current board with the plain glyph set.
    #[must_use]
    pub fn render_ascii(&self) -> String {
        render_ascii(&self.state.board)
    }
}
