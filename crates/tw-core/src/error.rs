//! Error types for the tw-core crate.
//!
//! This module provides [`TimeError`] for malformed time values and
//! [`ConfigError`] for configuration loading and validation failures.

use camino::Utf8PathBuf;

use crate::time::TimeField;

/// Errors produced when decoding or constructing a time value.
///
/// Malformed host input is reported explicitly rather than clamped or
/// propagated as a garbage value.
///
/// # Examples
///
/// ```
/// use tw_core::codec;
///
/// let err = codec::decode("25:00").unwrap_err();
/// assert!(err.to_string().contains("25"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// The text does not contain the `:` separator.
    #[error("missing ':' separator in '{0}'")]
    MissingSeparator(String),

    /// A field is empty or non-numeric.
    #[error("invalid {field} field '{text}'")]
    InvalidField {
        /// The field that failed to parse.
        field: TimeField,
        /// The offending field text.
        text: String,
    },

    /// A field parses as a number but exceeds its valid range.
    #[error("{field} value {value} out of range 0..={max}")]
    FieldOutOfRange {
        /// The field that is out of range.
        field: TimeField,
        /// The parsed value.
        value: u32,
        /// The largest valid value for the field.
        max: u8,
    },
}

impl TimeError {
    /// Creates an [`TimeError::InvalidField`] for the given field text.
    #[must_use]
    pub fn invalid_field(field: TimeField, text: &str) -> Self {
        Self::InvalidField {
            field,
            text: text.to_owned(),
        }
    }

    /// Creates an [`TimeError::FieldOutOfRange`] for the given value.
    #[must_use]
    pub fn out_of_range(field: TimeField, value: u32) -> Self {
        Self::FieldOutOfRange {
            field,
            value,
            max: field.max_index(),
        }
    }
}

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("config file not found: {0}")]
    NotFound(Utf8PathBuf),

    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates an [`ConfigError::InvalidOption`] error.
    #[must_use]
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            reason: reason.into(),
        }
    }
}
