//! Wheel column component.
//!
//! Renders one scrollable wheel as a vertical strip of two-digit options,
//! centered on the option nearest the wheel's current raw offset. The
//! center row is highlighted; rows fade with distance. Options beyond the
//! wheel's edges render as blanks (clamping, not wraparound).

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Widget};
use tw_picker::Wheel;

use crate::theme::Theme;

/// A single wheel column.
///
/// Reads the wheel's raw offset each frame, so an in-flight scroll shows a
/// live preview of the index it would settle on.
pub struct WheelColumn<'a> {
    /// The wheel to render.
    wheel: &'a Wheel,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> WheelColumn<'a> {
    /// Creates a new wheel column.
    #[must_use]
    pub const fn new(wheel: &'a Wheel, theme: &'a Theme) -> Self {
        Self { wheel, theme }
    }

    /// Returns the title for the column block.
    fn title(&self) -> String {
        let label = self.wheel.field().label();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => format!(" {}{} ", first.to_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }
}

impl Widget for &WheelColumn<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style)
            .title(Span::styled(self.title(), self.theme.accent_style()));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        let center_row = inner.y + inner.height / 2;
        let preview = i32::from(self.wheel.nearest_index());
        let max = i32::from(self.wheel.max_index());

        for y in inner.y..inner.y + inner.height {
            let delta = i32::from(y) - i32::from(center_row);
            let index = preview + delta;
            if index < 0 || index > max {
                continue;
            }

            let distance = u16::try_from(delta.abs()).unwrap_or(u16::MAX);
            let style = self.theme.wheel_row_style(distance);
            let marker = if delta == 0 { "\u{25b8}" } else { " " };
            let text = format!("{marker} {index:02}");

            let x = inner.x + (inner.width.saturating_sub(4)) / 2;
            buf.set_string(x, y, text, style);
        }
    }
}
