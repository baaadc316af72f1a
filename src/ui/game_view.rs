use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{rules, Cell, GameSession, Outcome, Phase, Player};

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    cursor: (usize, usize),
    flipped: &[(usize, usize)],
    message: &Option<String>,
    muted: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, muted, chunks[0]);
    render_board(frame, session, cursor, flipped, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    session: &GameSession,
    muted: bool,
    area: ratatui::layout::Rect,
) {
    let score = session.score();
    let (status, color) = match session.phase() {
        Phase::HumanToMove => ("Your move", Color::Cyan),
        Phase::ComputerToMove => ("AI is thinking...", Color::White),
        Phase::GameOver(Outcome::Winner(Player::Black)) => ("You win!", Color::Cyan),
        Phase::GameOver(Outcome::Winner(Player::White)) => ("The AI wins.", Color::White),
        Phase::GameOver(Outcome::Draw) => ("Draw.", Color::Gray),
    };
    let board = session.board();
    let text = format!(
        "You \u{25cf} {}  \u{2013}  {} \u{25cb} AI  |  {}x{} {}{}  |  {}",
        score.black,
        score.white,
        board.width(),
        board.height(),
        session.difficulty(),
        if muted { "  |  muted" } else { "" },
        status,
    );

    let header = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Othello"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    session: &GameSession,
    cursor: (usize, usize),
    flipped: &[(usize, usize)],
    area: ratatui::layout::Rect,
) {
    let board = session.board();
    // Placement hints, only while the human may act.
    let hints: Vec<(usize, usize)> = if session.phase() == Phase::HumanToMove {
        rules::legal_moves(board, Player::Black)
            .iter()
            .map(|m| (m.row, m.col))
            .collect()
    } else {
        Vec::new()
    };

    let mut lines = Vec::new();
    for row in 0..board.height() {
        let mut spans = vec![Span::raw(" ")];
        for col in 0..board.width() {
            let (glyph, fg) = match board.get(row, col) {
                Cell::Black => (" \u{25cf} ", Color::Black),
                Cell::White => (" \u{25cb} ", Color::White),
                Cell::Empty => {
                    if hints.contains(&(row, col)) {
                        (" \u{00b7} ", Color::DarkGray)
                    } else {
                        ("   ", Color::Reset)
                    }
                }
            };
            let bg = if (row, col) == cursor {
                Color::LightGreen
            } else if flipped.contains(&(row, col)) {
                Color::Yellow
            } else {
                Color::Green
            };
            spans.push(Span::styled(glyph, Style::default().fg(fg).bg(bg)));
        }
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let widget = Paragraph::new("arrows: move   Enter/Space: place   r: reset   m: mute   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}
