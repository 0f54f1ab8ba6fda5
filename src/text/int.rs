use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that matches a decimal integer with an optional leading `+`/`-`.
///
/// Consumes the maximal run of digits. Fails without consuming anything
/// when no digit follows the optional sign, or when the literal is out of
/// range for `i64`.
pub fn int() -> IntParser {
    IntParser
}

pub struct IntParser;

impl<'a> Parser<&'a str> for IntParser {
    type Output = i64;

    fn parse(&self, input: &mut &'a str) -> Result<i64, ParseError> {
        let bytes = input.as_bytes();
        let mut end = 0;
        if matches!(bytes.first(), Some(b'+' | b'-')) {
            end = 1;
        }
        let digits_start = end;
        while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
            end += 1;
        }
        if end == digits_start {
            return Err(ParseError);
        }
        let value = input[..end].parse().map_err(|_| ParseError)?;
        *input = &input[end..];
        Ok(value)
    }
}
