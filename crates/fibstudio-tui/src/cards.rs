//! Summary cards: last value, total sum, golden ratio.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use fibstudio_cli::output::{format_optional_ratio, format_value, EXPORT_RATIO_PRECISION};
use fibstudio_core::Summary;

use crate::styles::ColorTheme;

/// Render one bordered card with a title and a single value.
fn render_card(frame: &mut Frame, area: Rect, title: &str, value: String) {
    let theme = ColorTheme::default();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(theme.border_style());
    let paragraph = Paragraph::new(Line::styled(value, theme.value_style()))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Render the three summary cards side by side.
pub fn render_cards(frame: &mut Frame, area: Rect, summary: &Summary) {
    let [last_area, sum_area, ratio_area] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(area);

    let last = summary
        .last_value
        .as_ref()
        .map_or_else(|| "-".to_string(), |v| format_value(v, false));
    let sum = format_value(&summary.total_sum, false);
    let ratio = format_optional_ratio(summary.golden_ratio, EXPORT_RATIO_PRECISION, "-");

    render_card(frame, last_area, "Last value", last);
    render_card(frame, sum_area, "Total sum", sum);
    render_card(frame, ratio_area, "Golden ratio", ratio);
}
