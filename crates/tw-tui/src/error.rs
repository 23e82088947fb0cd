//! TUI-specific error types.
//!
//! This module provides the [`TuiError`] type for handling errors
//! that can occur during TUI operations.

use thiserror::Error;

/// Errors that can occur in the TUI.
///
/// This enum captures all error conditions specific to the terminal
/// user interface, including terminal initialization failures and
/// malformed host values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TuiError {
    /// Terminal initialization or operation failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Event channel was closed unexpectedly.
    #[error("event channel closed unexpectedly")]
    ChannelClosed,

    /// The host supplied a malformed time value.
    #[error("invalid time value: {0}")]
    Time(#[from] tw_core::TimeError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl TuiError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns `true` if this error is recoverable.
    ///
    /// A malformed value can be corrected by the host; terminal and channel
    /// failures require restarting the TUI.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Time(_))
    }
}
