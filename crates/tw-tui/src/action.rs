//! User actions for the TUI.
//!
//! This module defines the [`Action`] enum representing all user-initiated
//! actions that can be performed in the TUI. Actions are the result of
//! processing input events (key presses, mouse clicks, scrolls) and are
//! used to update application state.
//!
//! # Action Flow
//!
//! ```text
//! Key/Mouse Event → App::handle_* → Action → App::update → Selector
//! ```

use tw_core::TimeField;

/// User-initiated actions in the TUI.
///
/// Actions represent commands that modify application state. They are
/// produced in response to input events and processed by the application's
/// update loop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Action {
    // =========================================================================
    // Picker Lifecycle
    // =========================================================================
    /// Open the picker (explicit activation of the trigger control).
    OpenPicker,

    /// Confirm the current selection and close the picker.
    ConfirmPicker,

    /// Close the picker without an explicit confirmation.
    DismissPicker,

    // =========================================================================
    // Wheel Input
    // =========================================================================
    /// Scroll a wheel by a number of steps (positive scrolls downward,
    /// toward higher indices).
    ScrollWheel {
        /// The wheel to scroll.
        field: TimeField,
        /// Number of scroll steps; each step is `scroll_step` offset units.
        steps: i16,
    },

    // =========================================================================
    // UI State
    // =========================================================================
    /// Toggle the help panel.
    ToggleHelp,

    /// Hide the help panel.
    HideHelp,

    /// Show a status message.
    ShowStatus(String),

    /// Clear the status message.
    ClearStatus,

    // =========================================================================
    // Application Control
    // =========================================================================
    /// Quit the application.
    Quit,

    /// Render the UI.
    Render,

    /// No operation (used for event handling that doesn't produce an action).
    #[default]
    None,
}

impl Action {
    /// Returns `true` if this action requires a re-render.
    #[must_use]
    pub const fn needs_render(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns `true` if this is a picker lifecycle action.
    #[must_use]
    pub const fn is_lifecycle(&self) -> bool {
        matches!(
            self,
            Self::OpenPicker | Self::ConfirmPicker | Self::DismissPicker
        )
    }

    /// Returns `true` if this is wheel scroll input.
    #[must_use]
    pub const fn is_scroll(&self) -> bool {
        matches!(self, Self::ScrollWheel { .. })
    }
}
