//! Event types for the TUI event loop.
//!
//! This module provides the [`Event`] enum representing all events
//! that can be processed by the TUI application.
//!
//! # Event Sources
//!
//! - **Terminal**: Key presses, mouse events (clicks and scroll), resizing
//! - **Timer**: Periodic tick events that drive the debounce and settle
//!   deadlines of the picker protocol
//! - **Renderer**: Frame signals, decoupled from ticks

use crossterm::event::{KeyEvent, MouseEvent};

/// Events that can be processed by the TUI.
///
/// This enum unifies all event sources into a single type that can be
/// processed by the application's main event loop.
#[derive(Debug)]
#[non_exhaustive]
pub enum Event {
    /// A key press event from the terminal.
    Key(KeyEvent),

    /// A mouse event from the terminal.
    ///
    /// Scroll events over a wheel column and clicks on or outside the
    /// picker are the primary interaction channel.
    Mouse(MouseEvent),

    /// Terminal window was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Periodic tick.
    ///
    /// Ticks drive [`tw_picker::Selector::poll`], so the tick rate bounds
    /// the timing resolution of debounce commits. Configured via
    /// `TuiConfig::tick_rate_ms`.
    Tick,

    /// Signal to render a new frame.
    ///
    /// Separate from [`Event::Tick`] so the frame rate and the protocol
    /// polling rate can differ.
    Render,

    /// Focus gained by the terminal window.
    FocusGained,

    /// Focus lost by the terminal window.
    FocusLost,
}

impl Event {
    /// Returns `true` if this is a key event.
    #[inline]
    #[must_use]
    pub const fn is_key(&self) -> bool {
        matches!(self, Self::Key(_))
    }

    /// Returns `true` if this is a mouse event.
    #[inline]
    #[must_use]
    pub const fn is_mouse(&self) -> bool {
        matches!(self, Self::Mouse(_))
    }

    /// Returns `true` if this is a tick event.
    #[inline]
    #[must_use]
    pub const fn is_tick(&self) -> bool {
        matches!(self, Self::Tick)
    }

    /// Returns `true` if this is a render event.
    #[inline]
    #[must_use]
    pub const fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }

    /// Returns the key event if this is a Key variant.
    #[inline]
    #[must_use]
    pub const fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(key) => Some(key),
            _ => None,
        }
    }

    /// Returns the mouse event if this is a Mouse variant.
    #[inline]
    #[must_use]
    pub const fn as_mouse(&self) -> Option<&MouseEvent> {
        match self {
            Self::Mouse(mouse) => Some(mouse),
            _ => None,
        }
    }
}
