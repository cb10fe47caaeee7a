//! Component values: parsing with units, formatting and tolerant equality.
//!
//! A component is a floating-point channel value, normally normalized to
//! `[0.0, 1.0]`. Angles are stored as a fraction of a full turn.

use std::f64::consts::PI;

use crate::error::{CoreError, Result};

/// Default tolerance used by [`numbers_equal`] callers without a space-specific epsilon.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Unit suffixes in match order. `grad` must be tried before `rad`.
const UNITS: [(&str, f64); 5] = [
    ("%", 100.0),
    ("°", 360.0),
    ("deg", 360.0),
    ("grad", 400.0),
    ("rad", 2.0 * PI),
];

/// Parse a component value, honouring a trailing unit.
///
/// A unit suffix (`%`, `°`, `deg`, `grad`, `rad`) always wins and yields a
/// proportion or turn fraction. Without a unit, the literal value is returned
/// unless `max` or `min` is given, in which case the value is rescaled to
/// `(value - min) / (max - min)` with `min` defaulting to zero.
pub fn parse_number(s: &str, max: Option<f64>, min: Option<f64>) -> Result<f64> {
    for (suffix, divisor) in UNITS {
        if let Some(number) = s.strip_suffix(suffix) {
            return Ok(parse_float(number)? / divisor);
        }
    }

    let value = parse_float(s)?;
    if max.is_none() && min.is_none() {
        return Ok(value);
    }
    let max = max.unwrap_or(0.0);
    let min = min.unwrap_or(0.0);
    Ok((value - min) / (max - min))
}

fn parse_float(s: &str) -> Result<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| CoreError::MalformedNumber(s.to_string()))
}

/// Round to the nearest integer with halves going towards positive infinity.
#[inline]
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Format a number rounded to the nearest multiple of `precision`.
///
/// Precisions of one or more produce integers. Finer precisions produce just
/// enough decimal digits, with trailing zeros and a dangling point removed.
pub fn format_number(v: f64, precision: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    } else if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if precision.is_nan() || precision <= 0.0 {
        return format!("{}", normalize_zero(v));
    }

    if precision < 1.0 {
        let digits = (-precision.log10() + 1e-9).trunc().max(0.0) as usize;
        let rounded = round_half_up(v / precision) * precision;
        let mut s = format!("{:.*}", digits, normalize_zero(rounded));
        if s.contains('.') {
            let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
            s.truncate(trimmed);
        }
        if s == "-0" {
            s = "0".to_string();
        }
        s
    } else {
        format!("{}", normalize_zero(round_half_up(v)) as i64)
    }
}

#[inline]
fn normalize_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// Whether two numbers differ by less than `epsilon`.
///
/// NaN never equals anything, including another NaN.
#[inline]
pub fn numbers_equal(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        true
    } else if a > b {
        (a - b) < epsilon
    } else {
        (b - a) < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_number("3", None, None).unwrap(), 3.0);
        assert!((parse_number("3.5", None, None).unwrap() - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_parse_numbers_in_range() {
        assert!((parse_number("128", Some(256.0), None).unwrap() - 0.5).abs() < 1e-12);
        assert!((parse_number("30", Some(35.0), Some(25.0)).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_parse_percent() {
        assert!((parse_number("50%", None, None).unwrap() - 0.5).abs() < 1e-12);
        assert!((parse_number("150%", None, None).unwrap() - 1.5).abs() < 1e-12);
        // Units override the range
        assert!((parse_number("50%", Some(255.0), Some(0.0)).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_parse_angles() {
        assert_eq!(parse_number("72", Some(360.0), None).unwrap(), 0.2);
        assert_eq!(parse_number("72°", None, None).unwrap(), 0.2);
        assert_eq!(parse_number("72deg", None, None).unwrap(), 0.2);
        let rad = parse_number("0.5rad", None, None).unwrap();
        assert!((rad - 1.0 / (4.0 * PI)).abs() < 1e-12);
        let grad = parse_number("100grad", None, None).unwrap();
        assert!((grad - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(
            parse_number("12px", None, None),
            Err(CoreError::MalformedNumber("12px".to_string()))
        );
        assert!(parse_number("%", None, None).is_err());
        assert!(parse_number("", Some(255.0), None).is_err());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.5, 1e-3), "0.5");
        assert_eq!(format_number(3.0, 1.0), "3");
        assert_eq!(format_number(2.5, 1.0), "3");
        assert_eq!(format_number(6.666_666, 1e-2), "6.67");
        assert_eq!(format_number(20.0, 1e-2), "20");
        assert_eq!(format_number(-1.77, 1e-2), "-1.77");
        assert_eq!(format_number(-0.001, 1e-2), "0");
        assert_eq!(format_number(0.123_456_789, 1e-6), "0.123457");
        assert_eq!(format_number(f64::NAN, 1e-2), "NaN");
    }

    #[test]
    fn test_format_number_without_precision() {
        assert_eq!(format_number(0.125, 0.0), "0.125");
        assert_eq!(format_number(-2.5, -1.0), "-2.5");
        assert_eq!(format_number(-0.0, 0.0), "0");
        assert_eq!(format_number(7.0, f64::NAN), "7");
    }

    #[test]
    fn test_numbers_equal() {
        assert!(numbers_equal(1.0, 1.0, DEFAULT_EPSILON));
        assert!(numbers_equal(1.0, 1.000_000_5, DEFAULT_EPSILON));
        assert!(!numbers_equal(1.0, 1.000_002, DEFAULT_EPSILON));
        assert!(!numbers_equal(f64::NAN, f64::NAN, DEFAULT_EPSILON));
    }

    proptest! {
        #[test]
        fn numbers_equal_is_symmetric(a in -1e3f64..1e3, b in -1e3f64..1e3, e in 1e-9f64..1.0) {
            prop_assert_eq!(numbers_equal(a, b, e), numbers_equal(b, a, e));
        }

        #[test]
        fn integer_format_parses_back(v in -1e6f64..1e6) {
            let s = format_number(v, 1.0);
            let parsed: f64 = s.parse().unwrap();
            prop_assert!((parsed - v).abs() <= 0.5);
        }
    }
}
