//! Parsing of optional clinical measurements.
//!
//! Every numeric field on the forms is optional: a blank entry means "not
//! entered yet" and is carried as `None`. The scorers treat `None` (and any
//! non-finite value) as contributing nothing, so no parse failure can ever
//! reach the scoring logic.

use log::warn;
use serde::{Deserialize, Deserializer};

use crate::error::InputError;

/// Parses form text the way a browser number field hands it over.
///
/// Surrounding whitespace is ignored and the longest leading decimal literal
/// is taken, so `"42 mmHg"` reads as `42.0`. Blank text, text without a
/// numeric prefix, and values that overflow to infinity all yield `None`.
pub fn parse_lenient(raw: &str) -> Option<f64> {
    let text = raw.trim();
    let end = decimal_prefix_len(text);
    if end == 0 {
        return None;
    }
    text[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses form text, rejecting anything that is not entirely a finite decimal.
///
/// Blank text is still accepted as "not entered".
pub fn parse_strict(field: &str, raw: &str) -> Result<Option<f64>, InputError> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(None);
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(InputError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Parses a checkbox-style flag. Blank text is an unchecked box, and any
/// other finite number is checked when nonzero (`"2"`, `"1.0"`).
pub fn parse_flag(field: &str, raw: &str) -> Result<bool, InputError> {
    let text = raw.trim().to_ascii_lowercase();
    match text.as_str() {
        "" | "false" | "no" | "off" => Ok(false),
        "true" | "yes" | "on" | "checked" => Ok(true),
        _ => match text.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n != 0.0),
            _ => Err(InputError::InvalidFlag {
                field: field.to_string(),
                value: raw.to_string(),
            }),
        },
    }
}

/// Drops non-finite values so that `Some(NaN)` behaves like an absent field.
#[inline]
pub fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

// Length in bytes of the decimal literal at the start of `text`:
// [+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?
fn decimal_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i = 1;
    }
    let int_end = digits_from(i);
    let mut mantissa_digits = int_end - i;
    i = int_end;

    if bytes.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        let frac_digits = frac_end - (i + 1);
        if mantissa_digits > 0 || frac_digits > 0 {
            mantissa_digits += frac_digits;
            i = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            i = exp_end;
        }
    }
    i
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMeasurement {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Serde adapter for optional measurements: accepts a number, a string
/// (parsed leniently, `""` is absent), or `null`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawMeasurement>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawMeasurement::Number(v)) => present(Some(v)),
        Some(RawMeasurement::Text(text)) => parse_lenient(&text),
        None => None,
    })
}

/// Serde adapter for checkbox flags: accepts a bool, `0`/`1`, a flag word, or `null`.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawFlag>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawFlag::Bool(b)) => b,
        Some(RawFlag::Number(n)) => n != 0.0,
        Some(RawFlag::Text(text)) => parse_flag("flag", &text).unwrap_or_else(|err| {
            warn!("{err}; treating as unchecked");
            false
        }),
        None => false,
    })
}
