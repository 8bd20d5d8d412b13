//! Stateless rendering of the game screen, plus mouse hit-testing.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect, Size},
    layout::Position as ScreenPosition,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;
use tictactoe::{Cell, Mark, Position};

use crate::app::App;

/// Renders the full screen: title, board, move list, status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let (title_area, board_area, info_area, status_area) = layout(frame.area());

    let title = Paragraph::new(vec![
        Line::from("Tic-Tac-Toe"),
        Line::from("1-9 or click to place | arrows + Enter | r restart | q quit"),
    ])
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    draw_board(frame, board_area, app);

    // Reserved move list. Nothing populates it; the panel is part of the
    // screen contract.
    let moves = List::new(Vec::<ListItem>::new())
        .block(Block::default().borders(Borders::ALL).title("Moves"));
    frame.render_widget(moves, info_area);

    let status = Paragraph::new(app.game().status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);
}

/// Full-screen rect for a terminal size, anchored at the origin. Mouse
/// events carry absolute coordinates, so hit-testing needs the same area
/// the renderer drew into.
pub fn screen_rect(size: Size) -> Rect {
    Rect::new(0, 0, size.width, size.height)
}

/// Maps a mouse click at screen coordinates to the board cell under it.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Position> {
    let (_, board_area, _, _) = layout(area);
    let point = ScreenPosition::new(column, row);
    Position::iter()
        .zip(cell_rects(board_area))
        .find(|(_, rect)| rect.contains(point))
        .map(|(pos, _)| pos)
}

fn layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board + info
            Constraint::Length(3), // Status
        ])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(43),    // Board
            Constraint::Length(24), // Move list
        ])
        .split(rows[1]);

    (rows[0], cols[0], cols[1], rows[2])
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    for (pos, rect) in Position::iter().zip(cell_rects(area)) {
        draw_cell(frame, rect, app, pos);
    }
    for rect in separator_rects(area) {
        let sep = Paragraph::new("─".repeat(rect.width as usize))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, rect);
    }
    for rect in vertical_separator_rects(area) {
        let sep = Paragraph::new("│")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(sep, rect);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, base_style) = match app.game().board().get(pos) {
        Cell::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(symbol)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Cell rectangles in row-major order, matching `Position::iter`.
fn cell_rects(area: Rect) -> Vec<Rect> {
    let (_, row_cols) = grid(area);
    row_cols
        .iter()
        .flat_map(|cols| [cols[0], cols[2], cols[4]])
        .collect()
}

fn separator_rects(area: Rect) -> Vec<Rect> {
    let (rows, _) = grid(area);
    vec![rows[1], rows[3]]
}

fn vertical_separator_rects(area: Rect) -> Vec<Rect> {
    let (_, row_cols) = grid(area);
    row_cols
        .iter()
        .flat_map(|cols| [cols[1], cols[3]])
        .collect()
}

/// Splits the board area into three cell rows (with separator rows in
/// between), each divided into three cell columns.
fn grid(area: Rect) -> (Vec<Rect>, Vec<Vec<Rect>>) {
    let board_area = center_rect(area, 40, 11);

    let rows: Vec<Rect> = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area)
        .to_vec();

    let row_cols = [rows[0], rows[2], rows[4]]
        .into_iter()
        .map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(12),
                    Constraint::Length(1),
                    Constraint::Length(12),
                    Constraint::Length(1),
                    Constraint::Length(12),
                ])
                .split(row)
                .to_vec()
        })
        .collect();

    (rows, row_cols)
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
