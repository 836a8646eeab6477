//! Label-safe integer codec
//!
//! Label values must start and end with an alphanumeric character and are at
//! most 63 characters long. Non-negative `i64` values encoded in base 10 always
//! satisfy that, so the codec only deals in non-negative integers.

use crate::error::{LabelError, Result};

/// Encode an integer as a label value
///
/// Negative values are not label-safe and are clamped to 0.
pub fn format_i64_for_label(value: i64) -> String {
    if value < 0 {
        tracing::warn!("Clamping negative label value {} to 0", value);
        return "0".to_string();
    }
    value.to_string()
}

/// Decode a label value produced by [`format_i64_for_label`]
///
/// # Errors
/// Returns `LabelError::Parse` if the value is empty, contains anything other
/// than ASCII digits, or does not fit in an `i64`.
pub fn retrieve_i64_from_label(value: &str) -> Result<i64> {
    if value.is_empty() {
        return Err(LabelError::parse(value, "empty value"));
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LabelError::parse(value, "expected only ASCII digits"));
    }
    value
        .parse::<i64>()
        .map_err(|e| LabelError::parse(value, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_and_retrieve() {
        for value in [0, 1, 42, 1_700_000_000, i64::MAX] {
            let label = format_i64_for_label(value);
            assert_eq!(retrieve_i64_from_label(&label).unwrap(), value);
        }
    }

    #[test]
    fn test_format_clamps_negative() {
        assert_eq!(format_i64_for_label(-5), "0");
        assert_eq!(format_i64_for_label(i64::MIN), "0");
    }

    #[test]
    fn test_retrieve_rejects_malformed() {
        assert!(retrieve_i64_from_label("").is_err());
        assert!(retrieve_i64_from_label("abc").is_err());
        assert!(retrieve_i64_from_label("-5").is_err());
        assert!(retrieve_i64_from_label("+5").is_err());
        assert!(retrieve_i64_from_label("1.5").is_err());
        assert!(retrieve_i64_from_label(" 12").is_err());
    }

    #[test]
    fn test_retrieve_rejects_overflow() {
        let err = retrieve_i64_from_label("9223372036854775808").unwrap_err();
        assert!(matches!(err, LabelError::Parse { ref value, .. } if value == "9223372036854775808"));
    }
}
