//! TUI application model (Elm architecture).

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use num_bigint::BigUint;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Terminal;
use tracing::{debug, warn};

use fibstudio_cli::clipboard::copy_sequence;
use fibstudio_cli::export::export_to_dir;
use fibstudio_cli::output::status_message;
use fibstudio_core::{compute, Summary, MAX_TERMS};

use crate::about::render_about;
use crate::cards::render_cards;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::messages::{Effect, StudioMessage};
use crate::results::{render_results, visible_rows};
use crate::TuiError;

/// Longest count that can be typed (`MAX_TERMS` has three digits).
const MAX_INPUT_LEN: usize = 3;

/// Tone of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Status line shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub kind: StatusKind,
}

impl Status {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// TUI application state (Elm Model).
pub struct StudioApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Current term count, always within `0..=MAX_TERMS`.
    count: u16,
    /// Digits typed but not yet applied.
    pub input: String,
    /// Sequence for the current count.
    pub sequence: Vec<BigUint>,
    /// Summary of `sequence`.
    pub summary: Summary,
    /// Status line.
    pub status: Status,
    /// First visible table row.
    pub table_offset: usize,
    /// Show the about popup.
    pub show_about: bool,
    /// Directory CSV exports are written to.
    pub export_dir: PathBuf,
    /// Terminal height, used to size a page of the results table.
    pub terminal_height: u16,
}

impl StudioApp {
    /// Create a new app showing `count` terms, clamped to `0..=MAX_TERMS`.
    #[must_use]
    pub fn new(count: i64, export_dir: PathBuf) -> Self {
        let (sequence, summary) = compute(0);
        let mut app = Self {
            should_quit: false,
            count: 0,
            input: String::new(),
            sequence,
            summary,
            status: Status::info(status_message(0)),
            table_offset: 0,
            show_about: false,
            export_dir,
            terminal_height: 24,
        };
        app.set_count(count);
        app
    }

    /// Current term count.
    #[must_use]
    pub fn count(&self) -> u16 {
        self.count
    }

    /// Set the term count, clamping it to `0..=MAX_TERMS`, and recompute.
    pub fn set_count(&mut self, requested: i64) {
        let clamped = requested.clamp(0, i64::from(MAX_TERMS));
        self.count = u16::try_from(clamped).unwrap_or(MAX_TERMS);
        self.recompute();
        if clamped != requested {
            warn!(requested, clamped, "term count out of range, clamped");
        }
    }

    /// Regenerate the sequence and summary for the current count.
    fn recompute(&mut self) {
        let (sequence, summary) = compute(i64::from(self.count));
        self.sequence = sequence;
        self.summary = summary;
        self.table_offset = self.table_offset.min(self.max_offset());
        self.status = Status::info(status_message(self.summary.count));
        debug!(count = self.count, "recomputed sequence");
    }

    fn max_offset(&self) -> usize {
        self.sequence.len().saturating_sub(1)
    }

    /// Rows moved by PageUp/PageDown: one screenful of the results table.
    #[must_use]
    pub fn page_size(&self) -> usize {
        let (_, _, table, _) = Self::compute_layout(Rect::new(0, 0, 1, self.terminal_height));
        visible_rows(table.height).max(1)
    }

    /// Handle a single message (Elm Update).
    ///
    /// Returns the side effect the event loop should run, if any.
    pub fn handle_message(&mut self, msg: StudioMessage) -> Option<Effect> {
        match msg {
            StudioMessage::KeyPress(action) => return self.handle_key_action(action),
            StudioMessage::Resize { height, .. } => {
                self.terminal_height = height;
            }
            StudioMessage::Tick => {
                // Tick triggers re-render, nothing to update in model
            }
            StudioMessage::Quit => {
                self.should_quit = true;
            }
            StudioMessage::Copied(Ok(terms)) => {
                self.status = Status::success(format!("Copied {terms} values to the clipboard."));
            }
            StudioMessage::Copied(Err(err)) => {
                self.status = Status::error(format!("Copy failed: {err}"));
            }
            StudioMessage::Saved(Ok(path)) => {
                self.status = Status::success(format!("File saved to {}.", path.display()));
            }
            StudioMessage::Saved(Err(err)) => {
                self.status = Status::error(format!("Save failed: {err}"));
            }
        }
        None
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) -> Option<Effect> {
        if self.show_about && action != KeyAction::None {
            // Any key closes the popup; quit still quits.
            self.show_about = false;
            if action != KeyAction::Quit {
                return None;
            }
        }

        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::Increment => self.set_count(i64::from(self.count) + 1),
            KeyAction::Decrement => self.set_count(i64::from(self.count) - 1),
            KeyAction::StepUp => self.set_count(i64::from(self.count) + 10),
            KeyAction::StepDown => self.set_count(i64::from(self.count) - 10),
            KeyAction::Digit(d) => {
                if self.input.len() < MAX_INPUT_LEN {
                    self.input.push(char::from(b'0' + d));
                }
            }
            KeyAction::Backspace => {
                self.input.pop();
            }
            KeyAction::Apply => {
                let requested = self
                    .input
                    .parse::<i64>()
                    .unwrap_or_else(|_| i64::from(self.count));
                self.input.clear();
                self.set_count(requested);
            }
            KeyAction::ScrollUp => {
                self.table_offset = self.table_offset.saturating_sub(1);
            }
            KeyAction::ScrollDown => {
                self.table_offset = (self.table_offset + 1).min(self.max_offset());
            }
            KeyAction::PageUp => {
                self.table_offset = self.table_offset.saturating_sub(self.page_size());
            }
            KeyAction::PageDown => {
                self.table_offset = (self.table_offset + self.page_size()).min(self.max_offset());
            }
            KeyAction::Home => {
                self.table_offset = 0;
            }
            KeyAction::End => {
                self.table_offset = self.max_offset();
            }
            KeyAction::Copy => {
                if self.sequence.is_empty() {
                    self.status = Status::error("Nothing to copy yet.");
                } else {
                    return Some(Effect::Copy);
                }
            }
            KeyAction::Save => {
                if self.sequence.is_empty() {
                    self.status = Status::error("Generate the sequence before exporting.");
                } else {
                    return Some(Effect::Save);
                }
            }
            KeyAction::ToggleAbout => {
                self.show_about = true;
            }
            KeyAction::None => {}
        }
        None
    }

    /// Run a side effect and return the message carrying its outcome.
    pub fn perform(&self, effect: Effect) -> StudioMessage {
        match effect {
            Effect::Copy => StudioMessage::Copied(
                copy_sequence(&mut io::stdout(), &self.sequence)
                    .map(|_| self.sequence.len())
                    .map_err(|e| e.to_string()),
            ),
            Effect::Save => StudioMessage::Saved(
                export_to_dir(&self.export_dir, &self.sequence).map_err(|e| e.to_string()),
            ),
        }
    }

    /// Compute the layout.
    ///
    /// Returns (header, cards, table, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let [header, cards, table, footer] = Layout::vertical([
            Constraint::Length(4), // title + count
            Constraint::Length(3), // summary cards
            Constraint::Min(4),    // results table
            Constraint::Length(3), // status + shortcuts
        ])
        .areas(area);

        (header, cards, table, footer)
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let (header_area, cards_area, table_area, footer_area) = Self::compute_layout(area);

        render_header(frame, header_area, self.count, &self.input);
        render_cards(frame, cards_area, &self.summary);
        render_results(frame, table_area, &self.sequence, self.table_offset);
        render_footer(frame, footer_area, &self.status);

        if self.show_about {
            render_about(frame, area);
        }
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Raw mode and the alternate screen are undone if a later step fails.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        or_rollback(execute!(stdout, EnterAlternateScreen), || {
            let _ = terminal::disable_raw_mode();
        })?;
        let backend = CrosstermBackend::new(stdout);
        or_rollback(Terminal::new(backend), || {
            let mut stdout = io::stdout();
            let _ = execute!(stdout, LeaveAlternateScreen);
            let _ = terminal::disable_raw_mode();
        })
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update, render),
    /// and tears down on exit, also when the loop fails.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        let restored = Self::teardown_terminal(&mut terminal);
        first_error(result, restored)
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<(), TuiError> {
        let tick_rate = Duration::from_millis(250);
        self.terminal_height = terminal.size()?.height;

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            let msg = if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        StudioMessage::KeyPress(map_key(key))
                    }
                    Event::Resize(width, height) => StudioMessage::Resize { width, height },
                    _ => continue,
                }
            } else {
                StudioMessage::Tick
            };

            if let Some(effect) = self.handle_message(msg) {
                let outcome = self.perform(effect);
                self.handle_message(outcome);
            }
        }

        Ok(())
    }
}

/// Run `rollback` when `step` failed, then pass the result through.
fn or_rollback<T>(step: io::Result<T>, rollback: impl FnOnce()) -> io::Result<T> {
    if step.is_err() {
        rollback();
    }
    step
}

/// The event loop's error wins over a teardown error.
fn first_error(result: Result<(), TuiError>, restored: io::Result<()>) -> Result<(), TuiError> {
    result?;
    restored?;
    Ok(())
}
