//! Output formatting utilities for CLI.

use frontier::game::{Action, Board, PlayerId, PlayerScore, TickReport};
use frontier::replay::render_text;
use serde::Serialize;

use super::OutputFormat;

/// JSON-serializable tick record.
#[derive(Debug, Serialize)]
pub(super) struct JsonTick<'a> {
    /// Tick number.
    pub(super) tick: u64,
    /// Player that acted.
    pub(super) player: PlayerId,
    /// Actions applied, in order.
    pub(super) actions: &'a [Action],
    /// Evaluation totals for both players.
    pub(super) scores: &'a [PlayerScore; 2],
    /// Owner grid, one row per x.
    pub(super) owners: Vec<Vec<PlayerId>>,
    /// Size grid, one row per x.
    pub(super) sizes: Vec<Vec<i32>>,
}

impl<'a> JsonTick<'a> {
    /// Create from a tick report and the board after that tick.
    pub(super) fn from_report(report: &'a TickReport, board: &Board) -> Self {
        let rows = board.cells().chunks(usize::from(board.size()));
        let (owners, sizes): (Vec<Vec<PlayerId>>, Vec<Vec<i32>>) = rows
            .map(|row| {
                (
                    row.iter().map(|cell| cell.owner).collect::<Vec<_>>(),
                    row.iter().map(|cell| cell.size).collect::<Vec<_>>(),
                )
            })
            .unzip();

        Self {
            tick: report.tick,
            player: report.player,
            actions: &report.actions,
            scores: &report.scores,
            owners,
            sizes,
        }
    }
}

/// Format one tick in the requested output format.
pub(super) fn format_tick(
    report: &TickReport,
    board: &Board,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report, board)),
        OutputFormat::Json => serde_json::to_string(&JsonTick::from_report(report, board)),
    }
}
