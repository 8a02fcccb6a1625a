//! Polars AnyValue utility functions.
//!
//! Cells in a source table can be integers, floats, text, booleans or null
//! depending on what the reader inferred. These helpers read them back in a
//! single, predictable way.

use polars::prelude::*;

/// Converts a Polars AnyValue to a String representation.
/// Returns empty string for Null, formats floats without a trailing `.0`.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if b { "True" } else { "False" }.to_string(),
        other => other.to_string(),
    }
}

/// String form used when writing files: floats keep their decimals, so
/// `1.0` is written as `1.0` rather than `1`.
pub fn any_to_string_for_output(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Float64(v) if v.is_finite() && v.fract() == 0.0 => format!("{v:.1}"),
        AnyValue::Float32(v) if v.is_finite() && v.fract() == 0.0 => format!("{v:.1}"),
        AnyValue::Float64(v) => v.to_string(),
        AnyValue::Float32(v) => v.to_string(),
        other => any_to_string(other),
    }
}

/// Formats a floating-point number, dropping the fraction when it is zero.
pub fn format_numeric(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Converts an AnyValue to f64, returning None for non-numeric or null values.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Converts an AnyValue to i64, returning None for non-integer or null values.
pub fn any_to_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(i64::from(v)),
        AnyValue::Int16(v) => Some(i64::from(v)),
        AnyValue::Int32(v) => Some(i64::from(v)),
        AnyValue::Int64(v) => Some(v),
        AnyValue::UInt8(v) => Some(i64::from(v)),
        AnyValue::UInt16(v) => Some(i64::from(v)),
        AnyValue::UInt32(v) => Some(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).ok(),
        AnyValue::Float32(v) => Some(v as i64),
        AnyValue::Float64(v) => Some(v as i64),
        AnyValue::String(s) => parse_i64(s),
        AnyValue::StringOwned(s) => parse_i64(&s),
        _ => None,
    }
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_string() {
        assert_eq!(any_to_string(AnyValue::Null), "");
        assert_eq!(any_to_string(AnyValue::Int64(42)), "42");
        assert_eq!(any_to_string(AnyValue::Float64(3.0)), "3");
        assert_eq!(any_to_string(AnyValue::Float64(20.0)), "20");
        assert_eq!(any_to_string(AnyValue::Float64(1.75)), "1.75");
        assert_eq!(any_to_string(AnyValue::String("general")), "general");
        assert_eq!(any_to_string(AnyValue::Boolean(true)), "True");
    }

    #[test]
    fn test_any_to_string_for_output_keeps_float_marker() {
        assert_eq!(any_to_string_for_output(AnyValue::Float64(0.0)), "0.0");
        assert_eq!(any_to_string_for_output(AnyValue::Float64(1.65)), "1.65");
        assert_eq!(any_to_string_for_output(AnyValue::Int64(0)), "0");
        assert_eq!(any_to_string_for_output(AnyValue::Null), "");
    }

    #[test]
    fn test_numeric_conversions() {
        assert_eq!(any_to_f64(AnyValue::Int32(5)), Some(5.0));
        assert_eq!(any_to_f64(AnyValue::String(" 1.5 ")), Some(1.5));
        assert_eq!(any_to_f64(AnyValue::String("tall")), None);
        assert_eq!(any_to_i64(AnyValue::Float64(7.9)), Some(7));
        assert_eq!(any_to_i64(AnyValue::UInt64(u64::MAX)), None);
        assert_eq!(parse_i64(""), None);
    }
}
