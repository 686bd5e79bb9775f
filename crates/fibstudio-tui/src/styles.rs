//! Palette for the studio screens.

use ratatui::style::{Color, Modifier, Style};

use crate::model::StatusKind;

/// Colors shared by every panel.
pub struct ColorTheme {
    pub title: Color,
    pub key_hint: Color,
    pub figure: Color,
    pub ratio: Color,
    pub ok: Color,
    pub failure: Color,
    pub dim: Color,
    pub frame: Color,
    pub stripe: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            title: Color::Cyan,
            key_hint: Color::Yellow,
            figure: Color::White,
            ratio: Color::LightMagenta,
            ok: Color::Green,
            failure: Color::Red,
            dim: Color::DarkGray,
            frame: Color::Gray,
            stripe: Color::Rgb(30, 30, 40),
        }
    }
}

impl ColorTheme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Big numbers on the cards and the current count.
    #[must_use]
    pub fn value_style(&self) -> Style {
        Style::default().fg(self.figure).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn ratio_style(&self) -> Style {
        Style::default().fg(self.ratio)
    }

    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.key_hint)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.frame)
    }

    /// Status line color for the given tone.
    #[must_use]
    pub fn status_style(&self, kind: StatusKind) -> Style {
        match kind {
            StatusKind::Info => self.muted_style(),
            StatusKind::Success => Style::default().fg(self.ok),
            StatusKind::Error => Style::default().fg(self.failure).add_modifier(Modifier::BOLD),
        }
    }

    /// Odd table rows get a background stripe.
    #[must_use]
    pub fn row_style(&self, index: usize) -> Style {
        if index % 2 == 1 {
            Style::default().bg(self.stripe)
        } else {
            Style::default()
        }
    }
}
