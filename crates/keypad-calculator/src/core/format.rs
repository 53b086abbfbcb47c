//! Number formatting for the display and the editable expression

/// Formats a value so it can be shown and edited again.
///
/// Uses the shortest text that round-trips, never exponent notation (the
/// tokenizer has no exponents), and prints negative zero as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluator::parse_number;

    #[test]
    fn test_format_integers_have_no_fraction() {
        assert_eq!(format_number(14.0), "14");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(420.0), "420");
    }

    #[test]
    fn test_format_decimals() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-0.12), "-0.12");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_zero_and_negative_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_extremes_avoid_exponent() {
        assert_eq!(format_number(1e21), "1000000000000000000000");
        assert_eq!(format_number(1e-7), "0.0000001");
    }

    #[test]
    fn test_formatted_text_parses_back() {
        for value in [1.5, -3.0, 1e-7, 123_456.789, 1e21, -0.001] {
            let text = format_number(value);
            assert_eq!(parse_number(&text), Ok(value), "{text}");
        }
    }
}
