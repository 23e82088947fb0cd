//! Picker popup overlay.
//!
//! Displays the open picker as a centered modal: two wheel columns side by
//! side with a footer hint. Shown only while the selector is open; the area
//! it occupies is also the boundary for outside-click dismissal.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use tw_picker::Wheel;

use crate::components::WheelColumn;
use crate::theme::Theme;
use crate::ui;

/// The open picker overlay.
pub struct PickerPopup<'a> {
    /// The hours wheel.
    hours: &'a Wheel,
    /// The minutes wheel.
    minutes: &'a Wheel,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> PickerPopup<'a> {
    /// Creates a new picker popup.
    #[must_use]
    pub const fn new(hours: &'a Wheel, minutes: &'a Wheel, theme: &'a Theme) -> Self {
        Self {
            hours,
            minutes,
            theme,
        }
    }
}

impl Widget for &PickerPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first for overlay effect
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(" Select time ", self.theme.header_style));
        block.render(area, buf);

        let (hour_area, minute_area) = ui::wheel_areas(area);
        WheelColumn::new(self.hours, self.theme).render(hour_area, buf);
        WheelColumn::new(self.minutes, self.theme).render(minute_area, buf);

        // Footer hint on the line above the bottom border
        if area.height >= 3 {
            let footer_area = Rect::new(
                area.x + 1,
                area.y + area.height - 2,
                area.width.saturating_sub(2),
                1,
            );
            let footer = Paragraph::new(Span::styled(
                "Enter confirm \u{00b7} click outside to close",
                self.theme.dimmed_style(),
            ))
            .alignment(Alignment::Center);
            footer.render(footer_area, buf);
        }
    }
}
