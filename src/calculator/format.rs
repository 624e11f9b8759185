//! Numeric formatting for the display and the history log.
//!
//! Values are rendered `%g`-style with a fixed number of significant
//! digits, then trimmed so `2.50000` shows as `2.5` and `3.0` as `3`.

use lazy_static::lazy_static;
use regex::Regex;

/// Significant digits used for the display and for history results.
pub const DISPLAY_DIGITS: usize = 12;

/// Significant digits used for operands in history lines and the expression preview.
pub const OPERAND_DIGITS: usize = 10;

lazy_static! {
    /// Leading numeral: sign, digits with at most one dot, optional exponent.
    /// Also accepts the `inf`/`nan` spellings the formatter itself produces.
    static ref NUMERAL_PREFIX: Regex = Regex::new(
        r"^(?i:[+-]?(?:\d+\.?\d*|\.\d+)(?:e[+-]?\d+)?|[+-]?(?:infinity|inf|nan))"
    ).unwrap();
}

/// Format a number for the display (12 significant digits).
pub fn format_number(value: f64) -> String {
    format_significant(value, DISPLAY_DIGITS)
}

/// Format a number with the given count of significant digits.
///
/// Uses fixed notation when the decimal exponent lies in `-4..digits`,
/// scientific notation (`1.5e+20`) otherwise, and strips trailing zeros
/// from the fraction in both cases.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() { "inf" } else { "-inf" };
        return text.to_string();
    }
    // Negative zero shows as plain zero
    if value == 0.0 {
        return "0".to_string();
    }

    let digits = digits.max(1);

    // Round once in scientific form; the exponent after rounding decides
    // the notation, exactly like %g.
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        let fixed = format!("{:.*}", decimals, value);
        trim_fraction(&fixed).to_string()
    }
}

/// Strip trailing zeros after a decimal point, then a dangling point.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Parse the leading numeral of a display string.
///
/// Lenient like `atof`: anything after the numeral is ignored, and input
/// without a numeral parses as `0.0`.
pub fn parse_number(text: &str) -> f64 {
    NUMERAL_PREFIX
        .find(text.trim_start())
        .and_then(|m| m.as_str().to_ascii_lowercase().parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(1_000_000.0), "1000000");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1.0 / 3.0), "0.333333333333");
        assert_eq!(format_number(2.0 / 3.0), "0.666666666667");
    }

    #[test]
    fn test_scientific_for_extreme_magnitudes() {
        assert_eq!(format_number(1.5e20), "1.5e+20");
        assert_eq!(format_number(1e12), "1e+12");
        assert_eq!(format_number(999_999_999_999.0), "999999999999");
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(0.00001234), "1.234e-05");
    }

    #[test]
    fn test_rounding_can_bump_the_exponent() {
        // 9.9999999999999e11 rounds to 1e12 at 12 digits
        assert_eq!(format_number(999_999_999_999.9), "1e+12");
    }

    #[test]
    fn test_operand_precision() {
        assert_eq!(format_significant(3.14159265358979, OPERAND_DIGITS), "3.141592654");
        assert_eq!(format_significant(3.14159265358979, DISPLAY_DIGITS), "3.14159265359");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert!(parse_number("nan").is_nan());
        assert_eq!(parse_number("-inf"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_lenient_parse() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("-7.25"), -7.25);
        assert_eq!(parse_number("0."), 0.0);
        assert_eq!(parse_number("12."), 12.0);
        assert_eq!(parse_number("1.5e+20"), 1.5e20);
        assert_eq!(parse_number("3abc"), 3.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("-"), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
    }

    #[test]
    fn test_round_trip_within_eleven_digits() {
        let mut rng = StdRng::seed_from_u64(0x00ca1c);
        for _ in 0..1000 {
            let x: f64 = rng.gen_range(-1e9..1e9);
            let back = parse_number(&format_number(x));
            if x == 0.0 {
                assert_eq!(back, 0.0);
            } else {
                let relative = ((back - x) / x).abs();
                assert!(relative <= 1e-11, "{x} came back as {back}");
            }
        }
    }
}
