//! Scrollable results table (index, value, value/previous).

use num_bigint::BigUint;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use fibstudio_cli::output::{format_optional_ratio, format_value, EXPORT_RATIO_PRECISION};
use fibstudio_core::table::rows;

use crate::styles::ColorTheme;

/// Data rows that fit in a results panel `area_height` rows tall.
///
/// Borders and the header row take three lines.
#[must_use]
pub fn visible_rows(area_height: u16) -> usize {
    usize::from(area_height.saturating_sub(3))
}

/// Render the results table starting at row `offset`.
pub fn render_results(frame: &mut Frame, area: Rect, sequence: &[BigUint], offset: usize) {
    let theme = ColorTheme::default();
    let visible_height = visible_rows(area.height);
    let total = sequence.len();

    let title = if total > visible_height {
        let pct = (offset * 100) / total.saturating_sub(1).max(1);
        format!(" Results ({pct}%) ")
    } else {
        " Results ".to_string()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(theme.border_style());

    if sequence.is_empty() {
        let empty = Paragraph::new(Line::styled("No terms to show.", theme.muted_style()))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let body: Vec<Row> = rows(sequence)
        .into_iter()
        .skip(offset)
        .take(visible_height)
        .map(|row| {
            Row::new(vec![
                Cell::from(row.index.to_string()),
                Cell::from(format_value(row.value, false)),
                Cell::from(format_optional_ratio(row.ratio, EXPORT_RATIO_PRECISION, ""))
                    .style(theme.ratio_style()),
            ])
            .style(theme.row_style(row.index))
        })
        .collect();

    let header = Row::new(vec!["Index", "Value", "Value/Previous"]).style(theme.header_style());
    let widths = [
        Constraint::Length(7),
        Constraint::Min(20),
        Constraint::Length(16),
    ];

    let table = Table::new(body, widths).header(header).block(block);
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn lines(sequence: &[BigUint], offset: usize, height: u16) -> Vec<String> {
        let backend = TestBackend::new(80, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_results(frame, area, sequence, offset);
            })
            .unwrap();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf.buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn empty_sequence_message() {
        let out = lines(&[], 0, 5);
        assert!(out[1].contains("No terms to show."));
    }

    #[test]
    fn header_and_first_rows() {
        let sequence = fibstudio_core::generate(8);
        let out = lines(&sequence, 0, 12);
        assert!(out[0].contains("Results"));
        assert!(out[1].contains("Index"));
        assert!(out[1].contains("Value/Previous"));
        assert!(out[4].contains("1.000000"));
        assert!(out[9].contains("13"));
        assert!(out[9].contains("1.625000"));
    }

    #[test]
    fn offset_skips_rows() {
        let sequence = fibstudio_core::generate(30);
        let out = lines(&sequence, 20, 6);
        // First visible data row is F(20) = 6765.
        assert!(out[2].contains("6765"));
        assert!(out[0].contains('%'));
    }
}
