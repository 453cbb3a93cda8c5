//! Run command implementation.

use super::output::format_tick;
use super::{CliError, OutputFormat};
use frontier::{GameState, SimConfig, TickReport};
use std::thread;
use std::time::Duration;
use tracing::info;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the simulation fails or output cannot be produced.
pub(crate) fn execute(
    ticks: Option<u64>,
    delay: u64,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let config = SimConfig::default();
    let mut game = GameState::new(config)?;
    let pause = Duration::from_millis(delay);

    info!(size = config.size, ?ticks, "starting simulation");

    let mut last: Option<TickReport> = None;
    while ticks.is_none_or(|limit| game.tick() < limit) {
        if !quiet && game.tick() > 0 && !pause.is_zero() {
            thread::sleep(pause);
        }

        let report = game.step()?;
        if !quiet {
            print_tick(&report, &game, format)?;
        }
        last = Some(report);
    }

    if quiet && let Some(report) = last {
        print_tick(&report, &game, format)?;
    }

    info!(ticks = game.tick(), "simulation finished");
    Ok(())
}

fn print_tick(report: &TickReport, game: &GameState, format: OutputFormat) -> Result<(), CliError> {
    let output = format_tick(report, &game.board, format)
        .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
    println!("{output}");
    Ok(())
}
