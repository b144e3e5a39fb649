//! Game-over dialog rendering.

use super::center_rect;
use crate::app::Dialog;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};

const DIALOG_WIDTH: u16 = 34;
const DIALOG_HEIGHT: u16 = 7;

/// Draws `dialog` centred over `area` and returns the area it covers.
pub fn render_dialog(f: &mut Frame, area: Rect, dialog: &Dialog) -> Rect {
    let popup = center_rect(area, DIALOG_WIDTH, DIALOG_HEIGHT);

    let text = Text::from(vec![
        Line::raw(""),
        Line::styled(
            dialog.message().as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled("[ OK ]", Style::default().fg(Color::Green)),
    ]);

    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .title(dialog.title().as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
    popup
}
