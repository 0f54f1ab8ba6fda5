use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that consumes and returns everything remaining. Always succeeds,
/// with an empty match on empty input.
pub fn rest() -> RestParser {
    RestParser
}

pub struct RestParser;

impl<'a> Parser<&'a str> for RestParser {
    type Output = &'a str;

    fn parse(&self, input: &mut &'a str) -> Result<&'a str, ParseError> {
        let all = *input;
        *input = "";
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumes_everything() {
        let mut input = "the rest";
        assert_eq!(rest().parse(&mut input).unwrap(), "the rest");
        assert_eq!(input, "");
    }

    #[test]
    fn test_empty_input_succeeds() {
        let mut input = "";
        assert_eq!(rest().parse(&mut input).unwrap(), "");
        assert_eq!(input, "");
    }

    #[test]
    fn test_after_other_parsers() {
        use crate::skip::SkipExt;
        use crate::text::prefix::prefix;

        let mut input = "key=value";
        let parser = prefix("key=").skip(rest());
        assert_eq!(parser.parse(&mut input).unwrap(), "value");
        assert_eq!(input, "");
    }
}
