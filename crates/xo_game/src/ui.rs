//! Stateless UI rendering for the timed game.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use xo_core::{Player, Position, SessionView, Square};

const HELP: &str = "s start  arrows move  enter/space/1-9 place  r reset  q quit";

/// Formats seconds as `M:SS`.
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.session().view();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Clock
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    if view.started && view.remaining_secs > 0 {
        let clock = Paragraph::new(format!("Time Left: {}", format_clock(view.remaining_secs)))
            .style(clock_style(view.remaining_secs))
            .alignment(Alignment::Center);
        frame.render_widget(clock, chunks[1]);
    }

    // The board is only on screen while there is time to play on it.
    match (view.started, view.remaining_secs) {
        (false, _) => draw_banner(frame, chunks[2], "Press 's' to start"),
        (true, 0) => draw_banner(frame, chunks[2], "Time's up!"),
        (true, _) => draw_board(frame, chunks[2], &view, app.cursor()),
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_banner(frame: &mut Frame, area: Rect, text: &str) {
    let banner = Paragraph::new(text)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, center_rect(area, 30, 3));
}

fn clock_style(secs: u32) -> Style {
    if secs <= 10 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    }
}

fn draw_board(frame: &mut Frame, area: Rect, view: &SessionView, cursor: Position) {
    let board_area = center_rect(area, 38, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, positions) in Position::ALL.chunks_exact(3).enumerate() {
        draw_row(frame, rows[row * 2], view, cursor, positions);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    view: &SessionView,
    cursor: Position,
    positions: &[Position],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (column, &pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[column * 2], view, cursor, pos);
        if column < 2 {
            draw_separator_vertical(frame, cols[column * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &SessionView, cursor: Position, pos: Position) {
    let (symbol, base_style) = match view.board.get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let winning = view.winning_line.is_some_and(|line| line.contains(pos));

    let style = if winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == cursor && view.started && !view.outcome.is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Middle line of the three-line cell.
    let text = vec![
        Line::default(),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
