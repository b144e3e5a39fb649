//! UI rendering using ratatui.

mod board;
mod dialog;
mod targets;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

pub use board::render_board;
pub use dialog::render_dialog;
pub use targets::{ClickTargets, Target};

const RESET_WIDTH: u16 = 13;

/// Draws the whole screen and records where each control landed.
pub fn draw(f: &mut Frame, app: &App, targets: &mut ClickTargets) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(board::GRID_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_board(f, chunks[1], app, targets);

    let status = Paragraph::new(app.status_message().as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    render_reset_button(f, chunks[3], app, targets);

    let help = Paragraph::new("Click a cell or press 1-9 | Arrows + Enter | R: Reset | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[4]);

    match app.dialog() {
        Some(dialog) => {
            let area = render_dialog(f, chunks[1], dialog);
            targets.set_dialog(Some(area));
        }
        None => targets.set_dialog(None),
    }
}

fn render_reset_button(f: &mut Frame, area: Rect, app: &App, targets: &mut ClickTargets) {
    let button = center_rect(area, RESET_WIDTH, area.height);
    let style = if app.dialog().is_some() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };

    let paragraph = Paragraph::new(Line::from("Reset"))
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    f.render_widget(paragraph, button);
    targets.set_reset(button);
}

/// Returns a `width` x `height` rectangle centred in `area`, clipped to it.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
