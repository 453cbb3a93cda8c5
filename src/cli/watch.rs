//! Watch command implementation - Interactive TUI viewer.

// CLI watch uses intentional casts for display and timing
#![allow(clippy::needless_pass_by_value, clippy::cast_possible_truncation)]

use super::CliError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use frontier::game::{Board, Cell, Coord, PlayerId};
use frontier::replay::{ReplayEngine, glyph, size_char};
use frontier::{SimConfig, evaluate_board};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::stdout;
use std::time::{Duration, Instant};
use tracing::debug;

/// Execute the watch command.
///
/// # Errors
///
/// Returns an error if the simulation cannot start or the TUI fails.
pub(crate) fn execute(ticks: Option<u64>, speed: u64) -> Result<(), CliError> {
    let engine = ReplayEngine::new(SimConfig::default(), ticks)?;
    run_tui(engine, speed)
}

/// App state for the TUI.
struct App {
    engine: ReplayEngine,
    paused: bool,
    speed_ms: u64,
    show_sizes: bool,
    last_step: Instant,
}

impl App {
    fn new(engine: ReplayEngine, speed_ms: u64) -> Self {
        Self {
            engine,
            paused: true, // Start paused
            speed_ms,
            show_sizes: false,
            last_step: Instant::now(),
        }
    }

    fn step_forward(&mut self) -> Result<(), CliError> {
        if !self.engine.is_finished() {
            self.engine.step_forward()?;
            self.last_step = Instant::now();
        }
        Ok(())
    }

    fn step_backward(&mut self) -> Result<(), CliError> {
        if self.engine.tick() > 0 {
            self.engine.step_backward()?;
            self.last_step = Instant::now();
        }
        Ok(())
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    fn increase_speed(&mut self) {
        self.speed_ms = self.speed_ms.saturating_sub(100).max(50);
    }

    fn decrease_speed(&mut self) {
        self.speed_ms = (self.speed_ms + 100).min(5000);
    }

    fn should_auto_step(&self) -> bool {
        !self.paused
            && !self.engine.is_finished()
            && self.last_step.elapsed() >= Duration::from_millis(self.speed_ms)
    }
}

fn run_tui(engine: ReplayEngine, speed: u64) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let mut app = App::new(engine, speed);
    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<(), CliError> {
    loop {
        terminal
            .draw(|f| ui(f, app))
            .map_err(|e| CliError::new(e.to_string()))?;

        if app.should_auto_step() {
            app.step_forward()?;
        }

        // Handle input with timeout
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char(' ') => app.toggle_pause(),
                KeyCode::Right | KeyCode::Char('l') => {
                    app.paused = true;
                    app.step_forward()?;
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    app.paused = true;
                    app.step_backward()?;
                }
                KeyCode::Char('+' | '=') => app.increase_speed(),
                KeyCode::Char('-') => app.decrease_speed(),
                KeyCode::Char('s') => app.show_sizes = !app.show_sizes,
                KeyCode::Char('r') => {
                    app.engine.goto_tick(0)?;
                    app.paused = true;
                }
                _ => {}
            }
            debug!(tick = app.engine.tick(), paused = app.paused, "key handled");
        }
    }
    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, main_chunks[0], app);
    render_stats(f, main_chunks[1], app);

    render_footer(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let tick = app.engine.tick();
    let limit = app
        .engine
        .max_ticks()
        .map_or_else(|| "∞".to_string(), |max| max.to_string());

    let status = if app.engine.is_finished() {
        "FINISHED"
    } else if app.paused {
        "PAUSED"
    } else {
        "RUNNING"
    };

    let next = app.engine.state().next_player();
    let title = format!(
        " Frontier | Tick {tick}/{limit} | {status} | Next: P{next} | Speed: {}ms ",
        app.speed_ms
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board = &app.engine.state().board;
    let size = board.size();

    // Show the portion of the board that fits, two columns per cell
    let visible_cols = (usize::from(area.width).saturating_sub(2) / 2).min(usize::from(size));
    let visible_rows = usize::from(area.height)
        .saturating_sub(2)
        .min(usize::from(size));

    let lines: Vec<Line> = (0..visible_rows)
        .map(|x| {
            let spans: Vec<Span> = (0..visible_cols)
                .map(|y| {
                    let cell = board
                        .get(Coord::new(x as u16, y as u16))
                        .unwrap_or_default();
                    cell_span(cell, app.show_sizes)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board_widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Board "));

    f.render_widget(board_widget, area);
}

fn cell_span(cell: Cell, show_sizes: bool) -> Span<'static> {
    let style = Style::default().fg(player_color(cell.owner));
    let text = if show_sizes {
        format!("{}{}", glyph_or_dot(cell.owner), size_char(cell.size))
    } else {
        format!("{} ", glyph_or_dot(cell.owner))
    };
    Span::styled(text, style)
}

fn glyph_or_dot(owner: PlayerId) -> char {
    if owner == 0 { '.' } else { glyph(owner) }
}

fn render_stats(f: &mut Frame, area: Rect, app: &App) {
    let state = app.engine.state();
    let board: &Board = &state.board;
    let mut lines = vec![Line::from("")];

    for player in state.config().players() {
        let color = player_color(player);
        lines.push(Line::from(Span::styled(
            format!("Player {player} ({})", glyph(player)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("  Cells: {}", board.count_owned(player))));
        lines.push(Line::from(format!("  Size:  {}", board.total_size(player))));
        lines.push(Line::from(format!(
            "  Eval:  {:.1}",
            evaluate_board(board, player)
        )));
        lines.push(Line::from(""));
    }

    if let Some(report) = app.engine.last_report() {
        lines.push(Line::from(format!(
            "Last tick: P{} made {} move(s)",
            report.player,
            report.actions.len()
        )));
        for action in report.actions.iter().take(8) {
            lines.push(Line::from(format!(
                "  ({},{}) {:?}",
                action.from.x, action.from.y, action.direction
            )));
        }
        if report.actions.len() > 8 {
            lines.push(Line::from(format!(
                "  ... and {} more",
                report.actions.len() - 8
            )));
        }
    }

    let stats_widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Players "))
        .wrap(Wrap { trim: false });

    f.render_widget(stats_widget, area);
}

fn player_color(id: PlayerId) -> Color {
    match id {
        0 => Color::DarkGray,
        1 => Color::Red,
        2 => Color::Blue,
        _ => Color::White,
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let controls = if app.engine.is_finished() {
        " [q] Quit  [r] Restart  [←/→] Step  [s] Sizes "
    } else {
        " [q] Quit  [Space] Pause  [←/→] Step  [+/-] Speed  [r] Restart  [s] Sizes "
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
