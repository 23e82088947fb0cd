//! Textual codec for the `HH:MM` wire form.
//!
//! Host applications exchange time values as text (`"08:30"`). This module
//! converts between that form and [`TimeValue`].
//!
//! Decoding is strict where it matters and lenient where it doesn't: fields
//! may be one or two digits wide (`"8:5"` decodes the same as `"08:05"`),
//! but a missing separator, a non-numeric field, or an out-of-range value is
//! reported as an explicit [`TimeError`] rather than silently clamped.
//!
//! # Round trip
//!
//! For every valid value `v`, `decode(&encode(v)) == Ok(v)`.

use crate::error::TimeError;
use crate::time::{TimeField, TimeValue};

/// Separator between the hour and minute fields.
pub const SEPARATOR: char = ':';

/// Encodes a value as zero-padded `HH:MM` text.
///
/// # Examples
///
/// ```
/// use tw_core::{codec, TimeValue};
///
/// let value = TimeValue::new(8, 5).unwrap();
/// assert_eq!(codec::encode(value), "08:05");
/// ```
#[must_use]
pub fn encode(value: TimeValue) -> String {
    format!("{:02}{SEPARATOR}{:02}", value.hour(), value.minute())
}

/// Decodes `HH:MM` text into a value.
///
/// Surrounding whitespace is ignored. Fields may be one or two digits.
///
/// # Errors
///
/// - [`TimeError::MissingSeparator`] if the text does not contain exactly
///   one `:` separating two fields.
/// - [`TimeError::InvalidField`] if a field is empty or non-numeric.
/// - [`TimeError::FieldOutOfRange`] if a field parses but exceeds its range.
///
/// # Examples
///
/// ```
/// use tw_core::{codec, TimeValue};
///
/// assert_eq!(codec::decode("14:30").unwrap(), TimeValue::new(14, 30).unwrap());
/// assert_eq!(codec::decode("8:5").unwrap(), TimeValue::new(8, 5).unwrap());
/// assert!(codec::decode("24:00").is_err());
/// ```
pub fn decode(text: &str) -> Result<TimeValue, TimeError> {
    let trimmed = text.trim();
    let (hour_text, minute_text) = trimmed
        .split_once(SEPARATOR)
        .ok_or_else(|| TimeError::MissingSeparator(trimmed.to_owned()))?;

    let hour = decode_field(TimeField::Hour, hour_text)?;
    let minute = decode_field(TimeField::Minute, minute_text)?;

    TimeValue::new(hour, minute)
}

/// Parses and range-checks a single field.
fn decode_field(field: TimeField, text: &str) -> Result<u8, TimeError> {
    let parsed: u32 = text
        .trim()
        .parse()
        .map_err(|_| TimeError::invalid_field(field, text))?;

    if parsed > u32::from(field.max_index()) {
        return Err(TimeError::out_of_range(field, parsed));
    }

    // Range check above guarantees the value fits in u8.
    #[allow(clippy::cast_possible_truncation)]
    let value = parsed as u8;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_zero_pads() {
        let value = TimeValue::new(8, 0).unwrap();
        assert_eq!(encode(value), "08:00");

        let value = TimeValue::new(0, 7).unwrap();
        assert_eq!(encode(value), "00:07");
    }

    #[test]
    fn test_decode_two_digit_fields() {
        assert_eq!(decode("23:59").unwrap(), TimeValue::new(23, 59).unwrap());
        assert_eq!(decode("00:00").unwrap(), TimeValue::MIDNIGHT);
    }

    #[test]
    fn test_decode_single_digit_fields() {
        assert_eq!(decode("8:5").unwrap(), TimeValue::new(8, 5).unwrap());
    }

    #[test]
    fn test_decode_trims_whitespace() {
        assert_eq!(decode(" 14:30 ").unwrap(), TimeValue::new(14, 30).unwrap());
    }

    #[test]
    fn test_decode_missing_separator() {
        assert!(matches!(
            decode("1430").unwrap_err(),
            TimeError::MissingSeparator(_)
        ));
        assert!(matches!(
            decode("14-30").unwrap_err(),
            TimeError::MissingSeparator(_)
        ));
    }

    #[test]
    fn test_decode_non_numeric_field() {
        assert!(matches!(
            decode("aa:30").unwrap_err(),
            TimeError::InvalidField {
                field: TimeField::Hour,
                ..
            }
        ));
        assert!(matches!(
            decode("14:").unwrap_err(),
            TimeError::InvalidField {
                field: TimeField::Minute,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_out_of_range() {
        assert!(matches!(
            decode("24:00").unwrap_err(),
            TimeError::FieldOutOfRange {
                field: TimeField::Hour,
                value: 24,
                ..
            }
        ));
        assert!(matches!(
            decode("00:60").unwrap_err(),
            TimeError::FieldOutOfRange {
                field: TimeField::Minute,
                value: 60,
                ..
            }
        ));
        // Values past u8 still report as out-of-range, not invalid.
        assert!(matches!(
            decode("300:00").unwrap_err(),
            TimeError::FieldOutOfRange { value: 300, .. }
        ));
    }

    #[test]
    fn test_round_trip_all_valid_values() {
        for hour in 0..=23u8 {
            for minute in 0..=59u8 {
                let value = TimeValue::new(hour, minute).unwrap();
                assert_eq!(decode(&encode(value)).unwrap(), value);
            }
        }
    }
}
