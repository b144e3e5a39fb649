//! Tic-tac-toe board rendering.

use super::{ClickTargets, center_rect};
use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{Player, Position, Square, rules};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 5;
const GRID_WIDTH: u16 = CELL_WIDTH * 3;
pub(super) const GRID_HEIGHT: u16 = CELL_HEIGHT * 3;

/// Renders the 3x3 grid and binds each cell's area in `targets`.
pub fn render_board(f: &mut Frame, area: Rect, app: &App, targets: &mut ClickTargets) {
    let grid = center_rect(area, GRID_WIDTH, GRID_HEIGHT);
    let winning_line = rules::winning_line(app.game().board());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(grid);

    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);

        for (c, cell_area) in cols.iter().enumerate() {
            let Some(pos) = Position::from_row_column(r, c) else {
                continue;
            };
            let highlighted = winning_line.is_some_and(|line| line.contains(&pos));
            render_cell(f, *cell_area, app, pos, highlighted);
            targets.set_cell(pos, *cell_area);
        }
    }
}

fn render_cell(f: &mut Frame, area: Rect, app: &App, pos: Position, highlighted: bool) {
    let frozen = app.is_frozen();

    let (symbol, mut style) = match app.game().board().get(pos) {
        Square::Empty if *app.show_hints() => (pos.number().to_string(), Style::default().fg(Color::DarkGray)),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if highlighted {
        style = style.bg(Color::Green);
    } else if frozen {
        style = style.add_modifier(Modifier::DIM);
    }

    let border_style = if pos == *app.cursor() && !frozen {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Blank first line puts the mark on the middle row of the cell.
    let text = Text::from(vec![Line::raw(""), Line::styled(symbol, style)]);
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(paragraph, area);
}
