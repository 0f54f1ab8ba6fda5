use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a mapping
/// function. The function is pure: it never inspects or consumes input, and
/// a failing inner parser fails the whole combinator with input untouched.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<I, P, F, U> Parser<I> for Map<P, F>
where
    P: Parser<I>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, input: &mut I) -> Result<Self::Output, ParseError> {
        let value = self.parser.parse(input)?;
        Ok((self.mapper)(value))
    }
}

/// Convenience function to create a Map parser
pub fn map<I, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<I>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<I>: Parser<I> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<I, P: Parser<I>> MapExt<I> for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::or::OrExt;
    use crate::text::int::int;
    use crate::text::prefix::prefix;

    #[derive(Debug, PartialEq)]
    enum Token {
        Number(i64),
        Bang,
    }

    #[test]
    fn test_map_int_to_string() {
        let mut input = "123 left";
        let parser = int().map(|n| format!("Number: {}", n));

        let value = parser.parse(&mut input).unwrap();
        assert_eq!(value, "Number: 123");
        assert_eq!(input, " left");
    }

    #[test]
    fn test_map_to_enum() {
        let mut input = "42";
        let parser = int().map(Token::Number);

        let value = parser.parse(&mut input).unwrap();
        assert_eq!(value, Token::Number(42));
        assert_eq!(input, "");
    }

    #[test]
    fn test_map_chaining() {
        let mut input = "7";
        let parser = int().map(|n| n * 2).map(|n| n + 1);

        let value = parser.parse(&mut input).unwrap();
        assert_eq!(value, 15);
    }

    #[test]
    fn test_map_with_or_common_enum() {
        let parser = int()
            .map(Token::Number)
            .or(prefix("!").map(|_| Token::Bang));

        let mut input = "!tail";
        assert_eq!(parser.parse(&mut input).unwrap(), Token::Bang);
        assert_eq!(input, "tail");
    }

    #[test]
    fn test_map_preserves_failure() {
        let mut input = "xyz";
        let parser = int().map(|n| n + 1);

        assert!(parser.parse(&mut input).is_err());
        assert_eq!(input, "xyz");
    }

    #[test]
    fn test_function_syntax() {
        let mut input = "9";
        let parser = map(int(), |n| n as f64);

        let value = parser.parse(&mut input).unwrap();
        assert!((value - 9.0).abs() < f64::EPSILON);
    }
}
