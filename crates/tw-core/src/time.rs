//! Domain types for a time-of-day value.
//!
//! This module provides [`TimeValue`], the authoritative value exchanged
//! with host applications, and [`TimeField`], the identifier for one of the
//! two picker wheels.
//!
//! A `TimeValue` is always in range: construction validates both fields, so
//! every reachable value satisfies `hour <= 23 && minute <= 59`.

use std::fmt;
use std::str::FromStr;

use crate::error::TimeError;

/// Identifies one of the two time fields (and its picker wheel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    /// The hour field, valid indices `0..=23`.
    Hour,

    /// The minute field, valid indices `0..=59`.
    Minute,
}

impl TimeField {
    /// Both fields, in display order (hours before minutes).
    pub const ALL: [Self; 2] = [Self::Hour, Self::Minute];

    /// Returns the largest valid index for this field.
    #[inline]
    #[must_use]
    pub const fn max_index(self) -> u8 {
        match self {
            Self::Hour => 23,
            Self::Minute => 59,
        }
    }

    /// Returns the number of selectable options on this field's wheel.
    #[inline]
    #[must_use]
    pub const fn option_count(self) -> u8 {
        self.max_index() + 1
    }

    /// Returns the other field.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Hour => Self::Minute,
            Self::Minute => Self::Hour,
        }
    }

    /// Returns a lowercase label for log and error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Minute => "minute",
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated time-of-day value (hour and minute).
///
/// The host application owns the authoritative `TimeValue`; the picker holds
/// only a derived per-wheel view and proposes replacements through events.
///
/// # Examples
///
/// ```
/// use tw_core::{TimeField, TimeValue};
///
/// let value = TimeValue::new(8, 30).unwrap();
/// assert_eq!(value.hour(), 8);
/// assert_eq!(value.minute(), 30);
/// assert_eq!(value.field(TimeField::Minute), 30);
/// assert_eq!(value.to_string(), "08:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeValue {
    hour: u8,
    minute: u8,
}

impl TimeValue {
    /// Midnight (`00:00`), the default value.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Creates a new value, validating both fields.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::FieldOutOfRange`] if `hour > 23` or
    /// `minute > 59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour > TimeField::Hour.max_index() {
            return Err(TimeError::out_of_range(TimeField::Hour, u32::from(hour)));
        }
        if minute > TimeField::Minute.max_index() {
            return Err(TimeError::out_of_range(
                TimeField::Minute,
                u32::from(minute),
            ));
        }
        Ok(Self { hour, minute })
    }

    /// Returns the hour (`0..=23`).
    #[inline]
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (`0..=59`).
    #[inline]
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the value of the given field.
    #[inline]
    #[must_use]
    pub const fn field(self, field: TimeField) -> u8 {
        match field {
            TimeField::Hour => self.hour,
            TimeField::Minute => self.minute,
        }
    }

    /// Returns a copy with the given field replaced.
    ///
    /// The index is clamped into the field's valid range, preserving the
    /// range invariant without a fallible signature.
    #[must_use]
    pub fn with_field(self, field: TimeField, index: u8) -> Self {
        let index = index.min(field.max_index());
        match field {
            TimeField::Hour => Self {
                hour: index,
                ..self
            },
            TimeField::Minute => Self {
                minute: index,
                ..self
            },
        }
    }
}

impl Default for TimeValue {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::codec::encode(*self))
    }
}

impl FromStr for TimeValue {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::codec::decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_field_max_index() {
        assert_eq!(TimeField::Hour.max_index(), 23);
        assert_eq!(TimeField::Minute.max_index(), 59);
    }

    #[test]
    fn test_time_field_option_count() {
        assert_eq!(TimeField::Hour.option_count(), 24);
        assert_eq!(TimeField::Minute.option_count(), 60);
    }

    #[test]
    fn test_time_field_other() {
        assert_eq!(TimeField::Hour.other(), TimeField::Minute);
        assert_eq!(TimeField::Minute.other(), TimeField::Hour);
    }

    #[test]
    fn test_time_value_new_valid() {
        let value = TimeValue::new(23, 59).unwrap();
        assert_eq!(value.hour(), 23);
        assert_eq!(value.minute(), 59);
    }

    #[test]
    fn test_time_value_new_hour_out_of_range() {
        let err = TimeValue::new(24, 0).unwrap_err();
        assert!(matches!(
            err,
            TimeError::FieldOutOfRange {
                field: TimeField::Hour,
                value: 24,
                ..
            }
        ));
    }

    #[test]
    fn test_time_value_new_minute_out_of_range() {
        let err = TimeValue::new(0, 60).unwrap_err();
        assert!(matches!(
            err,
            TimeError::FieldOutOfRange {
                field: TimeField::Minute,
                value: 60,
                ..
            }
        ));
    }

    #[test]
    fn test_time_value_field_access() {
        let value = TimeValue::new(14, 30).unwrap();
        assert_eq!(value.field(TimeField::Hour), 14);
        assert_eq!(value.field(TimeField::Minute), 30);
    }

    #[test]
    fn test_time_value_with_field() {
        let value = TimeValue::MIDNIGHT.with_field(TimeField::Hour, 8);
        assert_eq!(value.hour(), 8);
        assert_eq!(value.minute(), 0);

        let value = value.with_field(TimeField::Minute, 45);
        assert_eq!(value.hour(), 8);
        assert_eq!(value.minute(), 45);
    }

    #[test]
    fn test_time_value_with_field_clamps() {
        let value = TimeValue::MIDNIGHT.with_field(TimeField::Hour, 200);
        assert_eq!(value.hour(), 23);

        let value = TimeValue::MIDNIGHT.with_field(TimeField::Minute, 200);
        assert_eq!(value.minute(), 59);
    }

    #[test]
    fn test_time_value_default_is_midnight() {
        assert_eq!(TimeValue::default(), TimeValue::MIDNIGHT);
    }

    #[test]
    fn test_time_value_display() {
        let value = TimeValue::new(7, 5).unwrap();
        assert_eq!(value.to_string(), "07:05");
    }

    #[test]
    fn test_time_value_from_str() {
        let value: TimeValue = "14:30".parse().unwrap();
        assert_eq!(value, TimeValue::new(14, 30).unwrap());

        assert!("14-30".parse::<TimeValue>().is_err());
    }
}
