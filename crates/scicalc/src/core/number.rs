//! Number rendering and display parsing
//!
//! The display is a string buffer. Rendering follows the usual
//! shortest-round-trip convention of calculator UIs (`3.5`, `0.1`, `1e+21`),
//! and parsing reads the longest numeric prefix of the buffer, so `"3."`
//! reads as 3 and `"(2"` reads as NaN.

/// Magnitude from which numbers render in exponent form
const EXPONENT_UPPER: f64 = 1e21;

/// Magnitude below which non-zero numbers render in exponent form
const EXPONENT_LOWER: f64 = 1e-6;

/// Renders a number the way it appears on the display and in history.
///
/// ```rust
/// use scicalc::core::number::format_number;
///
/// assert_eq!(format_number(3.5), "3.5");
/// assert_eq!(format_number(20.0), "20");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers -0 as well
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let formatted = format!("{value:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else {
        format!("{value}")
    }
}

/// Reads the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped. Accepts an optional sign followed by
/// `Infinity` or a decimal literal with an optional exponent. Returns NaN
/// when no prefix is numeric.
///
/// ```rust
/// use scicalc::core::number::parse_display;
///
/// assert_eq!(parse_display("3."), 3.0);
/// assert_eq!(parse_display("-0.5"), -0.5);
/// assert_eq!(parse_display("12(3"), 12.0);
/// assert!(parse_display("Error").is_nan());
/// ```
#[must_use]
pub fn parse_display(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    if text[pos..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        pos += 1 + frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos..]);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    text[..pos].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== format_number =====

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(-120.0), "-120");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(0.000_001), "0.000001");
    }

    #[test]
    fn test_format_constants() {
        assert_eq!(format_number(std::f64::consts::PI), "3.141592653589793");
        assert_eq!(format_number(std::f64::consts::E), "2.718281828459045");
    }

    #[test]
    fn test_format_exponent_forms() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e300), "1.5e+300");
        assert_eq!(format_number(-2e25), "-2e+25");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(2.5e-10), "2.5e-10");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    // ===== parse_display =====

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_display("0"), 0.0);
        assert_eq!(parse_display("42"), 42.0);
        assert_eq!(parse_display("1.5"), 1.5);
        assert_eq!(parse_display("-7"), -7.0);
        assert_eq!(parse_display("+7"), 7.0);
    }

    #[test]
    fn test_parse_trailing_and_leading_point() {
        assert_eq!(parse_display("0."), 0.0);
        assert_eq!(parse_display("3."), 3.0);
        assert_eq!(parse_display(".5"), 0.5);
        assert_eq!(parse_display("-.5"), -0.5);
    }

    #[test]
    fn test_parse_exponents() {
        assert_eq!(parse_display("1e+21"), 1e21);
        assert_eq!(parse_display("2.5e-10"), 2.5e-10);
        assert_eq!(parse_display("3e"), 3.0);
        assert_eq!(parse_display("3e+"), 3.0);
    }

    #[test]
    fn test_parse_prefix_only() {
        assert_eq!(parse_display("12(3"), 12.0);
        assert_eq!(parse_display("3.14159265358979312"), std::f64::consts::PI);
        assert_eq!(parse_display("1.2.3"), 1.2);
        assert_eq!(parse_display("  8"), 8.0);
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_display("Infinity"), f64::INFINITY);
        assert_eq!(parse_display("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_display("Infinity5"), f64::INFINITY);
    }

    #[test]
    fn test_parse_non_numeric() {
        assert!(parse_display("Error").is_nan());
        assert!(parse_display("NaN").is_nan());
        assert!(parse_display("(").is_nan());
        assert!(parse_display("-").is_nan());
        assert!(parse_display(".").is_nan());
        assert!(parse_display("").is_nan());
        assert!(parse_display("--5").is_nan());
    }

    #[test]
    fn test_format_then_parse_is_exact() {
        for value in [0.1, 3.5, -2.75, 1e21, 1e-7, 123_456.789, std::f64::consts::E] {
            assert_eq!(parse_display(&format_number(value)), value);
        }
    }
}
