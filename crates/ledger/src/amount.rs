//! Conversions between the amount text field and `f64` amounts.
//!
//! The amount control holds free text. Every edit is converted with the same
//! rules as a JavaScript `Number()` call so that the observable behaviour of a
//! browser number field is kept:
//!
//! ```rust
//! use ledger::amount::parse_amount;
//!
//! assert_eq!(parse_amount(""), 0.0);
//! assert_eq!(parse_amount(" 12.5 "), 12.5);
//! assert_eq!(parse_amount("1e3"), 1000.0);
//! assert!(parse_amount("12,5").is_nan());
//! ```
//!
//! Formatting has two flavours: [`format_fixed`] for totals (always two
//! decimals) and [`format_plain`] for table cells (shortest form).

const INFINITY: &str = "Infinity";

/// Characters a number input accepts while typing.
#[must_use]
pub fn is_amount_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | '+' | '-' | 'e' | 'E')
}

/// Converts the amount field text into a number.
///
/// - surrounding whitespace is ignored and empty text is `0`
/// - a decimal literal with optional sign, fraction and exponent parses
/// - `Infinity` with an optional sign parses
/// - everything else is NaN
#[must_use]
pub fn parse_amount(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let (sign, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
        (-1.0, stripped)
    } else if let Some(stripped) = trimmed.strip_prefix('+') {
        (1.0, stripped)
    } else {
        (1.0, trimmed)
    };

    if rest == INFINITY {
        return sign * f64::INFINITY;
    }

    // `f64::from_str` also takes `inf`, `nan` and a second sign.
    if rest.starts_with(['+', '-']) || !rest.chars().all(is_amount_char) {
        return f64::NAN;
    }

    rest.parse::<f64>().map_or(f64::NAN, |value| sign * value)
}

/// Formats with exactly two decimals, as shown in the totals block.
///
/// Rounds to the nearest hundredth; a value exactly halfway goes away from
/// zero (`0.125` is `0.13`). Magnitudes from `1e21` up use [`format_plain`].
#[must_use]
pub fn format_fixed(value: f64) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }

    let abs = value.abs();
    if abs >= 1e21 {
        return format_plain(value);
    }

    // -0.0 prints as "0.00"
    let sign = if value < 0.0 { "-" } else { "" };
    if let Some(hundredths) = halfway_hundredths(abs) {
        return format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100);
    }
    format!("{sign}{abs:.2}")
}

/// Upper hundredth when `abs` sits exactly between two hundredths.
fn halfway_hundredths(abs: f64) -> Option<u64> {
    // abs * 100 = k + 0.5 only for odd multiples of 1/8
    let eighths = abs * 8.0;
    if eighths.fract() != 0.0 || eighths % 2.0 != 1.0 {
        return None;
    }
    let eighths = eighths as u64;
    Some((eighths * 25 + 1) / 2)
}

/// Formats in the shortest form (`100`, `40.5`), as shown in table cells.
#[must_use]
pub fn format_plain(value: f64) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if !(1e-6..1e21).contains(&abs) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }

    format!("{value}")
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some(INFINITY)
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}
