//! About popup.

use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Centered rect of the given size, clipped to `area`.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Render the about popup over the current view.
pub fn render_about(frame: &mut Frame, area: Rect) {
    let theme = ColorTheme::default();
    let popup = centered_rect(area, 52, 7);

    let text = vec![
        Line::styled("Fibonacci Studio", theme.header_style()),
        Line::raw(""),
        Line::raw("Explore and export the classic sequence."),
        Line::styled(
            format!("Version {}", env!("CARGO_PKG_VERSION")),
            theme.muted_style(),
        ),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" About ")
        .border_style(theme.key_style());
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}
