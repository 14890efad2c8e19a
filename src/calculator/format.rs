//! Number formatting for the display.
//!
//! The display string doubles as the engine's operand buffer, so whatever
//! [`format_number`] produces must parse back into the same `f64`.

/// Values at or above this magnitude switch to exponent notation.
const EXPONENT_ABOVE: f64 = 1e21;

/// Non-zero values below this magnitude switch to exponent notation.
const EXPONENT_BELOW: f64 = 1e-6;

/// Format a value as the shortest string that round-trips to it.
///
/// - `-0` renders as `"0"`
/// - very large and very small magnitudes use exponent form (`1e21`, `1.5e-7`)
/// - non-finite values render as `NaN`, `Infinity` and `-Infinity`
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

/// Parse display text back into a number.
///
/// Accepts everything [`format_number`] produces plus partial entries such
/// as `"5."`; surrounding whitespace is ignored.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Insert thousands separators into the integer part of a display string.
///
/// Only used for rendering. Strings that are not plain decimal numbers
/// (exponent form, `NaN`, an in-progress edit) are returned unchanged.
pub fn group_digits(display: &str) -> String {
    let (sign, unsigned) = match display.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", display),
    };

    let (int_part, rest) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    if int_part.is_empty()
        || !int_part.chars().all(|c| c.is_ascii_digit())
        || !rest.chars().skip(1).all(|c| c.is_ascii_digit())
    {
        return display.to_string();
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let int_grouped: String = grouped.chars().rev().collect();
    format!("{}{}{}", sign, int_grouped, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(1_000_000.0), "1000000");
    }

    #[test]
    fn test_decimals_are_shortest_round_trip() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_extreme_magnitudes_use_exponent() {
        assert_eq!(format_number(1e21), "1e21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(123456.0), "123456");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_formatted_values_parse_back() {
        for value in [0.5, -12.25, 1e21, 3e-9, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(parse_number(&format_number(value)), Some(value));
        }
        assert!(parse_number("NaN").is_some_and(f64::is_nan));
    }

    #[test]
    fn test_parse_partial_entry() {
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number(" 42 "), Some(42.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1000000"), "1,000,000");
        assert_eq!(group_digits("-1234.5678"), "-1,234.5678");
        assert_eq!(group_digits("999"), "999");
        assert_eq!(group_digits("1234."), "1,234.");
    }

    #[test]
    fn test_group_digits_leaves_other_text_alone() {
        assert_eq!(group_digits("1e21"), "1e21");
        assert_eq!(group_digits("NaN"), "NaN");
        assert_eq!(group_digits("-Infinity"), "-Infinity");
        assert_eq!(group_digits("12a4"), "12a4");
    }
}
