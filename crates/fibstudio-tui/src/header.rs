//! TUI header panel with the title and the term count control.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use fibstudio_core::MAX_TERMS;

use crate::styles::ColorTheme;

/// Render the header panel.
///
/// `input` is the count being typed, shown instead of `count` while non-empty.
pub fn render_header(frame: &mut Frame, area: Rect, count: u16, input: &str) {
    let theme = ColorTheme::default();

    let count_text = if input.is_empty() {
        count.to_string()
    } else {
        format!("{input}_")
    };

    let text = vec![
        Line::from(Span::styled("Fibonacci Studio", theme.header_style())),
        Line::from(Span::styled(
            "Explore and export the Fibonacci sequence.",
            theme.muted_style(),
        )),
        Line::from(vec![
            Span::raw("Terms: "),
            Span::styled(count_text, theme.value_style()),
            Span::styled(format!("  (0-{MAX_TERMS})"), theme.muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style());

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
