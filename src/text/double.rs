use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that matches a floating point literal: optional `+`/`-`, digits
/// with at most one decimal point, at least one digit overall.
///
/// Consumption is maximal but stops at a second decimal point, so
/// `"3.14.15"` yields `3.14` and leaves `".15"`. Fails without consuming
/// anything when no valid numeric prefix exists.
pub fn double() -> DoubleParser {
    DoubleParser
}

pub struct DoubleParser;

impl<'a> Parser<&'a str> for DoubleParser {
    type Output = f64;

    fn parse(&self, input: &mut &'a str) -> Result<f64, ParseError> {
        let bytes = input.as_bytes();
        let mut end = 0;
        if matches!(bytes.first(), Some(b'+' | b'-')) {
            end = 1;
        }
        let mut digits = 0;
        while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
            end += 1;
            digits += 1;
        }
        if bytes.get(end) == Some(&b'.') {
            end += 1;
            while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
                end += 1;
                digits += 1;
            }
        }
        if digits == 0 {
            return Err(ParseError);
        }
        let value = input[..end].parse().map_err(|_| ParseError)?;
        *input = &input[end..];
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_double() {
        let mut input = "123.456abc";
        let value = double().parse(&mut input).unwrap();
        assert!((value - 123.456).abs() < f64::EPSILON);
        assert_eq!(input, "abc");
    }

    #[test]
    fn test_negative_double() {
        let mut input = "-42.789xyz";
        let value = double().parse(&mut input).unwrap();
        assert!((value + 42.789).abs() < f64::EPSILON);
        assert_eq!(input, "xyz");
    }

    #[test]
    fn test_integer_shaped_literal() {
        let mut input = "100 left";
        let value = double().parse(&mut input).unwrap();
        assert!((value - 100.0).abs() < f64::EPSILON);
        assert_eq!(input, " left");
    }

    #[test]
    fn test_second_decimal_point_stops_consumption() {
        let mut input = "3.14.15";
        let value = double().parse(&mut input).unwrap();
        assert!((value - 3.14).abs() < f64::EPSILON);
        assert_eq!(input, ".15");
    }

    #[test]
    fn test_leading_point() {
        let mut input = ".5rest";
        let value = double().parse(&mut input).unwrap();
        assert!((value - 0.5).abs() < f64::EPSILON);
        assert_eq!(input, "rest");
    }

    #[test]
    fn test_trailing_point_is_consumed() {
        let mut input = "12.x";
        let value = double().parse(&mut input).unwrap();
        assert!((value - 12.0).abs() < f64::EPSILON);
        assert_eq!(input, "x");
    }

    #[test]
    fn test_bare_point_fails() {
        let mut input = ".x";
        assert!(double().parse(&mut input).is_err());
        assert_eq!(input, ".x");
    }

    #[test]
    fn test_sign_without_digit_fails() {
        let mut input = "-abc";
        assert!(double().parse(&mut input).is_err());
        assert_eq!(input, "-abc");
    }

    #[test]
    fn test_no_match_fails() {
        let mut input = "abc";
        assert!(double().parse(&mut input).is_err());
        assert_eq!(input, "abc");
    }
}
