//! Header bar component.
//!
//! Displays the application name, the widget label, and the current
//! committed value.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::Theme;

/// The top header bar.
pub struct HeaderBar<'a> {
    /// Widget label.
    label: &'a str,
    /// Current committed value text.
    value_text: &'a str,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> HeaderBar<'a> {
    /// Creates a new header bar.
    #[must_use]
    pub const fn new(label: &'a str, value_text: &'a str, theme: &'a Theme) -> Self {
        Self {
            label,
            value_text,
            theme,
        }
    }
}

impl Widget for &HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("timewheel", self.theme.header_style),
            Span::styled(" \u{2502} ", self.theme.dimmed_style()),
            Span::styled(self.label, self.theme.base_style()),
            Span::styled(" \u{2502} ", self.theme.dimmed_style()),
            Span::styled(self.value_text, self.theme.accent_style()),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style);

        Paragraph::new(line).block(block).render(area, buf);
    }
}
