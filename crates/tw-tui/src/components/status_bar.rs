//! Status bar component.
//!
//! Displays transient status messages (value changes, dismissals, errors)
//! or the default key hints, plus the picker's lifecycle phase.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::app::App;
use crate::theme::Theme;

/// The bottom status bar.
pub struct StatusBar<'a> {
    /// Application state.
    app: &'a App,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Creates a new status bar.
    #[must_use]
    pub const fn new(app: &'a App, theme: &'a Theme) -> Self {
        Self { app, theme }
    }

    /// Returns the hint text for the current state.
    fn hints(&self) -> &'static str {
        if self.app.is_picker_open() {
            "Enter confirm \u{00b7} Esc close \u{00b7} scroll to pick"
        } else {
            "Enter open \u{00b7} q quit \u{00b7} ? help"
        }
    }
}

impl Widget for &StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let phase = if self.app.is_picker_open() {
            "open"
        } else {
            "closed"
        };

        let mut spans = Vec::new();
        if let Some(ref status) = self.app.status {
            let style = if status.is_error {
                self.theme.error_style()
            } else {
                self.theme.accent_style()
            };
            spans.push(Span::styled(status.text.as_str(), style));
            spans.push(Span::styled(" \u{2502} ", self.theme.dimmed_style()));
        }
        spans.push(Span::styled(self.hints(), self.theme.dimmed_style()));
        spans.push(Span::styled(
            format!(" \u{2502} picker: {phase}"),
            self.theme.dimmed_style(),
        ));

        Paragraph::new(Line::from(spans))
            .style(self.theme.status_bar_style)
            .render(area, buf);
    }
}
