//! Main UI layout and rendering orchestration.
//!
//! This module provides the main [`render`] function that orchestrates
//! rendering of all UI components based on the current application state,
//! plus the layout geometry helpers shared between rendering and mouse
//! hit-testing (the popup and trigger areas must be computed identically by
//! both).
//!
//! # Layout Structure
//!
//! ```text
//! +------------------------------------------------------------------+
//! | Header: timewheel | Start time | 08:30                           |
//! +------------------------------------------------------------------+
//! | [ Start time ]  08:30 *                 (trigger row)            |
//! +------------------------------------------------------------------+
//! |  Changes                      |      +----- Select time -----+   |
//! |  08:45                        |      |  Hour     |  Minute   |   |
//! |  09:00                        |      |   07      |   29      |   |
//! |  ...                          |      | > 08      | > 30      |   |
//! |                               |      |   09      |   31      |   |
//! |                               |      +-----------------------+   |
//! +------------------------------------------------------------------+
//! | Status: Changed to 09:00 | Enter confirm | ? help               |
//! +------------------------------------------------------------------+
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::Frame;
use tw_core::TimeField;

use crate::app::{App, AppMode};
use crate::components::{ChangeLog, HeaderBar, HelpPanel, PickerPopup, StatusBar, TriggerRow};
use crate::theme::Theme;

/// Width of the picker popup in terminal columns.
const POPUP_WIDTH: u16 = 34;

/// Height of the picker popup in terminal rows.
const POPUP_HEIGHT: u16 = 13;

/// Renders the entire UI based on the current application state.
pub fn render(app: &App, frame: &mut Frame, theme: &Theme) {
    let area = frame.area();
    let chunks = main_chunks(area);

    let header = HeaderBar::new(&app.label, app.value_text(), theme);
    frame.render_widget(&header, chunks[0]);

    let trigger = TriggerRow::new(
        &app.label,
        app.value_text(),
        app.required,
        !app.is_picker_open(),
        theme,
    );
    frame.render_widget(&trigger, chunks[1]);

    let log = ChangeLog::new(app.emitted(), theme);
    frame.render_widget(&log, chunks[2]);

    let status_bar = StatusBar::new(app, theme);
    frame.render_widget(&status_bar, chunks[3]);

    // Render picker popup overlay while open
    if app.is_picker_open() {
        let selector = app.selector();
        let popup = PickerPopup::new(
            selector.wheel(TimeField::Hour),
            selector.wheel(TimeField::Minute),
            theme,
        );
        frame.render_widget(&popup, popup_area(area));
    }

    // Render help panel overlay if in help mode
    if app.mode == AppMode::Help {
        let help_panel = HelpPanel::new(theme);
        let help_area = centered_rect(60, 70, area);
        frame.render_widget(&help_panel, help_area);
    }
}

/// Splits the full area into header, trigger, content, and status chunks.
fn main_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Trigger row
            Constraint::Min(5),    // Content / popup backdrop
            Constraint::Length(1), // Status bar
        ])
        .split(area)
}

/// Returns the trigger control's area for the given terminal size.
///
/// Used by mouse hit-testing; must match [`render`].
pub(crate) fn trigger_area(area: Rect) -> Rect {
    main_chunks(area)[1]
}

/// Returns the picker popup's area for the given terminal size.
///
/// The popup is centered and clamped to the terminal. Used by both
/// rendering and outside-click hit-testing.
pub(crate) fn popup_area(area: Rect) -> Rect {
    let width = POPUP_WIDTH.min(area.width);
    let height = POPUP_HEIGHT.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Splits the popup into the two wheel column areas (hours, minutes).
///
/// The popup's borders and the one-line footer hint are excluded.
pub(crate) fn wheel_areas(popup: Rect) -> (Rect, Rect) {
    let inner = Rect {
        x: popup.x.saturating_add(1),
        y: popup.y.saturating_add(1),
        width: popup.width.saturating_sub(2),
        height: popup.height.saturating_sub(3),
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    (columns[0], columns[1])
}

/// Returns the wheel under `position`, if any.
pub(crate) fn wheel_at(popup: Rect, position: Position) -> Option<TimeField> {
    let (hours, minutes) = wheel_areas(popup);
    if hours.contains(position) {
        Some(TimeField::Hour)
    } else if minutes.contains(position) {
        Some(TimeField::Minute)
    } else {
        None
    }
}

/// Creates a centered rectangle with the given percentage width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_area_is_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = popup_area(area);

        assert_eq!(popup.width, POPUP_WIDTH);
        assert_eq!(popup.height, POPUP_HEIGHT);
        assert_eq!(popup.x, (80 - POPUP_WIDTH) / 2);
        assert_eq!(popup.y, (24 - POPUP_HEIGHT) / 2);
    }

    #[test]
    fn test_popup_area_clamps_to_small_terminal() {
        let area = Rect::new(0, 0, 20, 8);
        let popup = popup_area(area);

        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 8);
    }

    #[test]
    fn test_trigger_area_below_header() {
        let area = Rect::new(0, 0, 80, 24);
        let trigger = trigger_area(area);

        assert_eq!(trigger.y, 3);
        assert_eq!(trigger.height, 3);
        assert_eq!(trigger.width, 80);
    }

    #[test]
    fn test_wheel_areas_split_popup() {
        let popup = popup_area(Rect::new(0, 0, 80, 24));
        let (hours, minutes) = wheel_areas(popup);

        assert!(hours.width > 0);
        assert!(minutes.width > 0);
        assert_eq!(hours.y, popup.y + 1);
        // Columns are adjacent and inside the popup.
        assert_eq!(hours.x + hours.width, minutes.x);
        assert!(minutes.x + minutes.width <= popup.x + popup.width);
    }

    #[test]
    fn test_wheel_at_hit_testing() {
        let popup = popup_area(Rect::new(0, 0, 80, 24));
        let (hours, minutes) = wheel_areas(popup);

        let in_hours = Position::new(hours.x + 1, hours.y + 1);
        assert_eq!(wheel_at(popup, in_hours), Some(TimeField::Hour));

        let in_minutes = Position::new(minutes.x + 1, minutes.y + 1);
        assert_eq!(wheel_at(popup, in_minutes), Some(TimeField::Minute));

        let outside = Position::new(0, 0);
        assert_eq!(wheel_at(popup, outside), None);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 100);
        let centered = centered_rect(50, 50, area);

        // Should be roughly centered
        assert!(centered.x > 0);
        assert!(centered.y > 0);
        assert!(centered.width < area.width);
        assert!(centered.height < area.height);
    }
}
