//! Application state and lifecycle management.
//!
//! This module provides the core [`App`] struct, which plays the host role
//! of the picker protocol: it owns the authoritative [`TimeValue`], feeds
//! user input to the [`Selector`], and accepts the value replacements the
//! selector proposes through its events.
//!
//! # Architecture
//!
//! ```text
//! App
//!  ├── value: TimeValue            # Authoritative host value
//!  ├── selector: Selector<LatchDismiss>
//!  ├── mode: AppMode               # Normal | Help overlay
//!  ├── status: Option<StatusMessage>
//!  └── emitted: Vec<String>        # Change-callback log
//! ```
//!
//! The widget never mutates `value` directly: commits surface as
//! [`PickerEvent::ValueChanged`] in [`App::tick`], where the host copies
//! them in and records the emission.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info};
use tw_core::{codec, Config, TimeError, TimeValue};
use tw_picker::{LatchDismiss, PickerEvent, Selector};

use crate::action::Action;
use crate::ui;

/// The current mode of the application UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal interaction mode.
    #[default]
    Normal,

    /// Help panel is displayed.
    Help,
}

/// Status message to display in the status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text.
    pub text: String,

    /// When the message was created.
    pub timestamp: Instant,

    /// Whether this is an error message.
    pub is_error: bool,
}

impl StatusMessage {
    /// Creates a new info message.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Instant::now(),
            is_error: false,
        }
    }

    /// Creates a new error message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Instant::now(),
            is_error: true,
        }
    }

    /// Returns `true` if the message should be auto-hidden.
    ///
    /// Messages are hidden after 5 seconds.
    #[must_use]
    pub fn should_hide(&self) -> bool {
        self.timestamp.elapsed().as_secs() > 5
    }
}

/// The main application state.
pub struct App {
    /// The configuration.
    pub config: Config,

    /// Display label for the widget (opaque to the protocol).
    pub label: String,

    /// Whether the field is marked required (presentation only).
    pub required: bool,

    /// The authoritative host value.
    value: TimeValue,

    /// Encoded form of `value`, shown on the trigger control.
    value_text: String,

    /// The picker state machine.
    selector: Selector<LatchDismiss>,

    /// Current UI mode.
    pub mode: AppMode,

    /// Status message to display.
    pub status: Option<StatusMessage>,

    /// Whether the application should quit.
    pub should_quit: bool,

    /// Terminal size (updated on resize).
    pub terminal_size: Rect,

    /// Every value text emitted to the host, oldest first.
    emitted: Vec<String>,
}

impl App {
    /// Creates a new application hosting the picker.
    #[must_use]
    pub fn new(config: Config, label: impl Into<String>, required: bool, initial: TimeValue) -> Self {
        let selector = Selector::with_dismiss(&config.wheel, initial, LatchDismiss::new());

        Self {
            config,
            label: label.into(),
            required,
            value: initial,
            value_text: codec::encode(initial),
            selector,
            mode: AppMode::default(),
            status: None,
            should_quit: false,
            terminal_size: Rect::default(),
            emitted: Vec::new(),
        }
    }

    /// Returns the authoritative host value.
    #[must_use]
    pub const fn value(&self) -> TimeValue {
        self.value
    }

    /// Returns the encoded form of the host value.
    #[must_use]
    pub fn value_text(&self) -> &str {
        &self.value_text
    }

    /// Returns the picker selector (for rendering).
    #[must_use]
    pub const fn selector(&self) -> &Selector<LatchDismiss> {
        &self.selector
    }

    /// Returns `true` while the picker popup is open.
    #[must_use]
    pub fn is_picker_open(&self) -> bool {
        self.selector.is_open()
    }

    /// Returns the change-callback log, oldest first.
    #[must_use]
    pub fn emitted(&self) -> &[String] {
        &self.emitted
    }

    /// Replaces the host value from text, reconciling the wheels.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError`] if the text is malformed; the previous value is
    /// kept.
    pub fn set_value_text(&mut self, text: &str) -> Result<(), TimeError> {
        let value = codec::decode(text)?;
        self.value = value;
        self.value_text = codec::encode(value);
        self.selector.set_value(value);
        Ok(())
    }

    /// Handles a key event and returns the resulting action.
    #[must_use]
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Global quit handling
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::Help => Self::handle_help_key(key),
        }
    }

    /// Handles a key event in normal mode.
    fn handle_normal_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ToggleHelp,
            KeyCode::Enter => {
                if self.selector.is_open() {
                    Action::ConfirmPicker
                } else {
                    Action::OpenPicker
                }
            }
            KeyCode::Char(' ') if !self.selector.is_open() => Action::OpenPicker,
            KeyCode::Esc if self.selector.is_open() => Action::DismissPicker,
            _ => Action::None,
        }
    }

    /// Handles a key event in help mode.
    fn handle_help_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => Action::HideHelp,
            _ => Action::None,
        }
    }

    /// Handles a mouse event and returns the resulting action.
    #[must_use]
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Action {
        let position = Position::new(event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(position),
            MouseEventKind::ScrollUp => self.scroll_action(position, -1),
            MouseEventKind::ScrollDown => self.scroll_action(position, 1),
            _ => Action::None,
        }
    }

    /// Handles a left click.
    ///
    /// A click outside the open popup is not translated to an action: it is
    /// reported to the dismiss watcher, and the close happens through the
    /// selector's own poll.
    fn handle_click(&mut self, position: Position) -> Action {
        if self.selector.is_open() {
            let popup = ui::popup_area(self.terminal_size);
            if !popup.contains(position) {
                debug!(?position, "click outside picker bounds");
                self.selector
                    .dismiss_watcher_mut()
                    .notify_outside_interaction();
            }
            Action::None
        } else if ui::trigger_area(self.terminal_size).contains(position) {
            Action::OpenPicker
        } else {
            Action::None
        }
    }

    /// Maps a scroll event over a wheel column to a scroll action.
    fn scroll_action(&self, position: Position, steps: i16) -> Action {
        if !self.selector.is_open() {
            return Action::None;
        }

        let popup = ui::popup_area(self.terminal_size);
        match ui::wheel_at(popup, position) {
            Some(field) => Action::ScrollWheel { field, steps },
            None => Action::None,
        }
    }

    /// Updates the application state based on an action.
    pub fn update(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::OpenPicker => {
                self.selector.open(now);
            }
            Action::ConfirmPicker => {
                let value = self.selector.confirm();
                self.status = Some(StatusMessage::info(format!("Confirmed {value}")));
            }
            Action::DismissPicker => {
                self.selector.dismiss();
                self.status = Some(StatusMessage::info("Dismissed"));
            }

            Action::ScrollWheel { field, steps } => {
                let delta = f32::from(steps) * f32::from(self.config.wheel.scroll_step);
                self.selector.scroll_by(field, delta, now);
            }

            Action::ToggleHelp => {
                self.mode = if self.mode == AppMode::Help {
                    AppMode::Normal
                } else {
                    AppMode::Help
                };
            }
            Action::HideHelp => {
                self.mode = AppMode::Normal;
            }

            Action::ShowStatus(text) => {
                self.status = Some(StatusMessage::info(text));
            }
            Action::ClearStatus => {
                self.status = None;
            }

            Action::Render | Action::None => {}
        }
    }

    /// Handles a tick event: drives the picker deadlines and applies the
    /// resulting events to the host state.
    pub fn tick(&mut self, now: Instant) {
        for event in self.selector.poll(now) {
            self.apply_picker_event(event);
        }

        // Clear stale status messages
        if let Some(ref status) = self.status {
            if status.should_hide() {
                self.status = None;
            }
        }
    }

    /// Applies one picker event to the host state.
    fn apply_picker_event(&mut self, event: PickerEvent) {
        match event {
            PickerEvent::ValueChanged { value, text } => {
                // The host accepts the proposed replacement.
                info!(%value, "host value updated");
                self.value = value;
                self.value_text.clone_from(&text);
                self.status = Some(StatusMessage::info(format!("Changed to {text}")));
                self.emitted.push(text);
            }
            PickerEvent::Dismissed => {
                self.status = Some(StatusMessage::info("Dismissed"));
            }
            // Snaps carry no host-visible state; the wheels are rendered
            // from their own offsets.
            PickerEvent::Snapped { .. } => {}
            _ => {}
        }
    }

    /// Updates the terminal size.
    pub fn set_terminal_size(&mut self, size: Rect) {
        self.terminal_size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tw_core::TimeField;

    const DEBOUNCE: Duration = Duration::from_millis(150);
    const SETTLE: Duration = Duration::from_millis(50);

    fn app() -> App {
        let mut app = App::new(Config::default(), "Start time", false, TimeValue::MIDNIGHT);
        app.set_terminal_size(Rect::new(0, 0, 80, 24));
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_opens_then_confirms() {
        let mut app = app();
        let t0 = Instant::now();

        let action = app.handle_key(key(KeyCode::Enter));
        assert_eq!(action, Action::OpenPicker);
        app.update(action, t0);
        assert!(app.is_picker_open());

        let action = app.handle_key(key(KeyCode::Enter));
        assert_eq!(action, Action::ConfirmPicker);
        app.update(action, t0);
        assert!(!app.is_picker_open());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        let action = app.handle_key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ));
        assert_eq!(action, Action::Quit);
    }

    #[test]
    fn test_scroll_commit_updates_host_value() {
        let mut app = app();
        let t0 = Instant::now();

        app.update(Action::OpenPicker, t0);
        app.tick(t0 + SETTLE);

        // item_height 8, scroll_step 4: two steps move one index.
        app.update(
            Action::ScrollWheel {
                field: TimeField::Hour,
                steps: 2,
            },
            t0 + SETTLE,
        );
        app.tick(t0 + SETTLE + DEBOUNCE);

        assert_eq!(app.value_text(), "01:00");
        assert_eq!(app.emitted(), ["01:00"]);
    }

    #[test]
    fn test_scroll_while_closed_does_nothing() {
        let mut app = app();
        let t0 = Instant::now();

        app.update(
            Action::ScrollWheel {
                field: TimeField::Minute,
                steps: 4,
            },
            t0,
        );
        app.tick(t0 + DEBOUNCE);

        assert_eq!(app.value_text(), "00:00");
        assert!(app.emitted().is_empty());
    }

    #[test]
    fn test_outside_click_dismisses_on_next_tick() {
        let mut app = app();
        let t0 = Instant::now();

        app.update(Action::OpenPicker, t0);
        assert!(app.is_picker_open());

        // Top-left corner is outside the centered popup.
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        let action = app.handle_mouse(click);
        assert_eq!(action, Action::None);
        // The close is routed through the protocol poll.
        assert!(app.is_picker_open());

        app.tick(t0 + Duration::from_millis(1));
        assert!(!app.is_picker_open());
    }

    #[test]
    fn test_click_on_trigger_opens() {
        let mut app = app();
        let trigger = ui::trigger_area(app.terminal_size);

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: trigger.x + 1,
            row: trigger.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(app.handle_mouse(click), Action::OpenPicker);
    }

    #[test]
    fn test_set_value_text_rejects_malformed_input() {
        let mut app = app();

        assert!(app.set_value_text("14:30").is_ok());
        assert_eq!(app.value_text(), "14:30");

        assert!(app.set_value_text("garbage").is_err());
        // Previous value kept.
        assert_eq!(app.value_text(), "14:30");
    }

    #[test]
    fn test_help_mode_keys() {
        let mut app = app();
        let t0 = Instant::now();

        app.update(Action::ToggleHelp, t0);
        assert_eq!(app.mode, AppMode::Help);

        let action = app.handle_key(key(KeyCode::Esc));
        assert_eq!(action, Action::HideHelp);
        app.update(action, t0);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_status_message() {
        let msg = StatusMessage::info("Test message");
        assert!(!msg.is_error);
        assert!(!msg.should_hide()); // Just created, shouldn't hide yet

        let err = StatusMessage::error("Error!");
        assert!(err.is_error);
    }
}
