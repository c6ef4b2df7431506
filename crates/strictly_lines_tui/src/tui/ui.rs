//! Stateless UI rendering for the lines board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_lines::{Player, Tile};

use super::view::BoardView;

/// Terminal columns per board cell.
pub const CELL_WIDTH: u16 = 7;
/// Terminal rows per board cell.
pub const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen. Returns where the board landed, for hit testing.
pub fn draw(frame: &mut Frame, view: &BoardView, win_size: usize, status: &str) -> Rect {
    let board_rows = to_u16(view.size()).saturating_mul(CELL_HEIGHT);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Title
            Constraint::Min(board_rows),    // Board
            Constraint::Length(3),          // Status
            Constraint::Length(1),          // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(format!(
        "Strictly Lines - {} in a row on {}x{}",
        win_size,
        view.size(),
        view.size()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board = board_area(chunks[1], view.size());
    draw_board(frame, board, view);

    let status_color = if view.is_locked() { Color::Green } else { Color::Yellow };
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new("arrows: move  enter/space/click: mark  r: reset  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    board
}

fn draw_board(frame: &mut Frame, board: Rect, view: &BoardView) {
    for y in 0..view.size() {
        for x in 0..view.size() {
            let tile = Tile::new(x, y);
            let area = cell_area(board, tile);
            if area.is_empty() {
                continue;
            }
            draw_cell(frame, area, view, tile);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &BoardView, tile: Tile) {
    let (symbol, style) = match view.mark(tile) {
        None => (" ", Style::default().fg(Color::DarkGray)),
        Some(Player::X) => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Some(Player::O) => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let border = if view.is_focused(tile) {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Winning line gets a filled background.
    let fill = if view.is_highlighted(tile) {
        Style::default().bg(Color::LightBlue)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .style(fill);

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}

/// Centers a `size`×`size` grid of cells inside `area`, clipped to fit.
pub fn board_area(area: Rect, size: usize) -> Rect {
    let cells = to_u16(size);
    let width = cells.saturating_mul(CELL_WIDTH).min(area.width);
    let height = cells.saturating_mul(CELL_HEIGHT).min(area.height);

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Terminal rectangle of one cell, clipped to the board.
pub fn cell_area(board: Rect, tile: Tile) -> Rect {
    let x = to_u16(tile.x).saturating_mul(CELL_WIDTH);
    let y = to_u16(tile.y).saturating_mul(CELL_HEIGHT);
    Rect::new(
        board.x.saturating_add(x),
        board.y.saturating_add(y),
        CELL_WIDTH,
        CELL_HEIGHT,
    )
    .intersection(board)
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Finds the tile under terminal cell `(column, row)`.
pub fn tile_at(board: Rect, size: usize, column: u16, row: u16) -> Option<Tile> {
    if column < board.x || row < board.y || column >= board.right() || row >= board.bottom() {
        return None;
    }
    let x = ((column - board.x) / CELL_WIDTH) as usize;
    let y = ((row - board.y) / CELL_HEIGHT) as usize;
    (x < size && y < size).then_some(Tile::new(x, y))
}
