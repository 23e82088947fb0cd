//! Core types, errors, and configuration for the timewheel picker.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - [`TimeValue`] and [`TimeField`] — the domain model for a time-of-day
//! - [`codec`] — the `HH:MM` textual encoding shared with host applications
//! - Configuration structures with serde support
//! - Error types for consistent error handling

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod codec;
pub mod config;
pub mod error;
pub mod time;

pub use codec::{decode, encode};
pub use config::{ColorScheme, Config, TuiConfig, WheelConfig};
pub use error::{ConfigError, TimeError};
pub use time::{TimeField, TimeValue};
