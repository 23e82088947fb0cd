//! Trigger row component.
//!
//! The closed-state face of the widget: a labeled field showing the current
//! committed value. Activating it (click or Enter) opens the picker. A
//! required field carries a `*` marker; the marker is presentation only and
//! has no effect on the commit protocol.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

/// The trigger control for the picker.
pub struct TriggerRow<'a> {
    /// Display label.
    label: &'a str,
    /// Encoded value text (`HH:MM`).
    value_text: &'a str,
    /// Whether the field is marked required.
    required: bool,
    /// Whether the trigger has focus (picker closed).
    focused: bool,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> TriggerRow<'a> {
    /// Creates a new trigger row.
    #[must_use]
    pub const fn new(
        label: &'a str,
        value_text: &'a str,
        required: bool,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            label,
            value_text,
            required,
            focused,
            theme,
        }
    }

    /// Returns the label truncated to `max_width` display columns.
    fn truncated_label(&self, max_width: usize) -> String {
        truncate_to_width(self.label, max_width)
    }
}

impl Widget for &TriggerRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style
        } else {
            self.theme.border_style
        };

        // Leave room for the value, brackets, and marker.
        let label_budget = usize::from(area.width.saturating_sub(16));
        let label = self.truncated_label(label_budget.max(8));

        let mut spans = vec![
            Span::styled(label, self.theme.base_style()),
            Span::styled(": ", self.theme.dimmed_style()),
            Span::styled("[ ", self.theme.dimmed_style()),
            Span::styled(self.value_text, self.theme.accent_style()),
            Span::styled(" ]", self.theme.dimmed_style()),
        ];
        if self.required {
            spans.push(Span::raw(" "));
            spans.push(Span::styled("*", self.theme.required_style()));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(" Time ", self.theme.header_style));

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        paragraph.render(area, buf);
    }
}

/// Truncates a string to the given display width, appending an ellipsis.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_owned();
    }

    let ellipsis = "...";
    let budget = max_width.saturating_sub(ellipsis.len());

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(ellipsis);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_row_new() {
        let theme = Theme::dark();
        let trigger = TriggerRow::new("Start time", "08:30", true, true, &theme);
        assert_eq!(trigger.label, "Start time");
        assert_eq!(trigger.value_text, "08:30");
        assert!(trigger.required);
    }

    #[test]
    fn test_truncate_short_label() {
        assert_eq!(truncate_to_width("Start", 20), "Start");
    }

    #[test]
    fn test_truncate_long_label() {
        let long = "A very long label that will not fit";
        let truncated = truncate_to_width(long, 12);
        assert!(truncated.ends_with("..."));
        assert!(truncated.width() <= 12);
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Full-width characters count as two columns.
        let wide = "\u{6642}\u{523b}\u{6642}\u{523b}\u{6642}\u{523b}";
        let truncated = truncate_to_width(wide, 7);
        assert!(truncated.width() <= 7);
    }
}
