//! Help panel overlay.
//!
//! Displays the key and mouse bindings as a modal overlay.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::theme::Theme;

/// Binding descriptions shown in the help panel.
const BINDINGS: &[(&str, &str)] = &[
    ("Enter / Space", "Open the picker"),
    ("Enter", "Confirm selection (while open)"),
    ("Esc", "Close without confirming (while open)"),
    ("Scroll wheel", "Spin the hour/minute column under the cursor"),
    ("Click outside", "Close the picker"),
    ("?", "Toggle this help"),
    ("q / Ctrl-C", "Quit"),
];

/// The help modal overlay.
pub struct HelpPanel<'a> {
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> HelpPanel<'a> {
    /// Creates a new help panel.
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for &HelpPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first for overlay effect
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(" Help ", self.theme.header_style));

        let lines: Vec<Line<'_>> = BINDINGS
            .iter()
            .map(|(keys, description)| {
                Line::from(vec![
                    Span::styled(format!("{keys:<16}"), self.theme.accent_style()),
                    Span::styled(*description, self.theme.base_style()),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_panel_lists_all_bindings() {
        let theme = Theme::dark();
        let _panel = HelpPanel::new(&theme);
        assert!(BINDINGS.len() >= 5);
        assert!(BINDINGS.iter().any(|(k, _)| k.contains("Esc")));
    }
}
