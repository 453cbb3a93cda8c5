//! Per-tick text report.

// Allow format! with push_str for readability - the allocation overhead is negligible for text rendering
#![allow(clippy::format_push_string)]

use crate::game::{Board, TickReport};
use crate::replay::render_ascii;

/// Render a tick report followed by the board.
///
/// Output format:
/// ```text
/// === TICK 2 (player 1, 1 move) ===
/// - (0,5) Up
/// Evaluation: P1 19.0  P2 -2.0
///      X
/// ...
/// ```
#[must_use]
pub fn render_text(report: &TickReport, board: &Board) -> String {
    let mut output = String::new();

    let moves = report.actions.len();
    let plural = if moves == 1 { "" } else { "s" };
    output.push_str(&format!(
        "=== TICK {} (player {}, {moves} move{plural}) ===\n",
        report.tick, report.player
    ));

    for action in &report.actions {
        output.push_str(&format!(
            "- ({},{}) {:?}\n",
            action.from.x, action.from.y, action.direction
        ));
    }

    let scores: Vec<String> = report
        .scores
        .iter()
        .map(|score| format!("P{} {:.1}", score.player, score.evaluation))
        .collect();
    output.push_str(&format!("Evaluation: {}\n", scores.join("  ")));

    output.push_str(&render_ascii(board));
    output
}
