//! TUI footer with the status line and keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::Status;
use crate::styles::ColorTheme;

const SHORTCUTS: [(&str, &str); 8] = [
    ("\u{2190}/\u{2192}", "count \u{b1}1"),
    ("+/-", "\u{b1}10"),
    ("0-9 \u{23ce}", "type count"),
    ("\u{2191}/\u{2193}", "scroll"),
    ("y", "copy"),
    ("s", "save CSV"),
    ("?", "about"),
    ("q", "quit"),
];

/// Render the footer: status on the first line, shortcuts on the second.
pub fn render_footer(frame: &mut Frame, area: Rect, status: &Status) {
    let theme = ColorTheme::default();

    let status_style = theme.status_style(status.kind);

    let mut hints = Vec::with_capacity(SHORTCUTS.len() * 2);
    for (i, (key, label)) in SHORTCUTS.iter().enumerate() {
        hints.push(Span::styled(*key, theme.key_style()));
        let sep = if i + 1 < SHORTCUTS.len() { " | " } else { "" };
        hints.push(Span::raw(format!(": {label}{sep}")));
    }

    let text = vec![
        Line::from(Span::styled(status.text.as_str(), status_style)),
        Line::from(hints),
    ];

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
