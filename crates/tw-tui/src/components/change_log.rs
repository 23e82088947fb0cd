//! Change log component.
//!
//! Displays the values emitted to the host, newest last. This is the
//! visible trace of the change callback: one entry per settled wheel
//! commit, duplicates suppressed by the protocol.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::Theme;

/// A panel listing emitted value changes.
pub struct ChangeLog<'a> {
    /// Emitted value texts, oldest first.
    emitted: &'a [String],
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> ChangeLog<'a> {
    /// Creates a new change log panel.
    #[must_use]
    pub const fn new(emitted: &'a [String], theme: &'a Theme) -> Self {
        Self { emitted, theme }
    }
}

impl Widget for &ChangeLog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style)
            .title(Span::styled(
                format!(" Changes ({}) ", self.emitted.len()),
                self.theme.header_style,
            ));

        let visible = usize::from(area.height.saturating_sub(2));
        let skip = self.emitted.len().saturating_sub(visible);

        let lines: Vec<Line<'_>> = if self.emitted.is_empty() {
            vec![Line::from(Span::styled(
                "No changes yet",
                self.theme.dimmed_style(),
            ))]
        } else {
            self.emitted
                .iter()
                .skip(skip)
                .map(|text| {
                    Line::from(vec![
                        Span::styled("\u{2192} ", self.theme.dimmed_style()),
                        Span::styled(text.as_str(), self.theme.base_style()),
                    ])
                })
                .collect()
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_log_new() {
        let theme = Theme::dark();
        let emitted = vec!["08:30".to_owned(), "09:00".to_owned()];
        let log = ChangeLog::new(&emitted, &theme);
        assert_eq!(log.emitted.len(), 2);
    }

    #[test]
    fn test_change_log_empty() {
        let theme = Theme::dark();
        let log = ChangeLog::new(&[], &theme);
        assert!(log.emitted.is_empty());
    }
}
