use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as
/// a tuple. The pair succeeds or fails atomically: if the second parser
/// fails, the input is rewound to its state before the first parser ran.
///
/// Note: chaining multiple `.zip()` calls produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples. This is due to Rust's lack of
/// variadic generics; the nested form is more general and the destructuring
/// pattern is explicit about the parsing order. [`zip3`] covers the common
/// flat triple.
pub struct Zip<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Zip<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Zip { parser1, parser2 }
    }
}

impl<I, P1, P2> Parser<I> for Zip<P1, P2>
where
    I: Clone,
    P1: Parser<I>,
    P2: Parser<I>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, input: &mut I) -> Result<Self::Output, ParseError> {
        let checkpoint = input.clone();
        let first = self.parser1.parse(input)?;
        match self.parser2.parse(input) {
            Ok(second) => Ok((first, second)),
            Err(error) => {
                *input = checkpoint;
                Err(error)
            }
        }
    }
}

/// Ordered triple of parsers with the same atomic rewind behavior as [`Zip`],
/// yielding a flat 3-tuple.
pub struct Zip3<P1, P2, P3> {
    parser1: P1,
    parser2: P2,
    parser3: P3,
}

impl<I, P1, P2, P3> Parser<I> for Zip3<P1, P2, P3>
where
    I: Clone,
    P1: Parser<I>,
    P2: Parser<I>,
    P3: Parser<I>,
{
    type Output = (P1::Output, P2::Output, P3::Output);

    fn parse(&self, input: &mut I) -> Result<Self::Output, ParseError> {
        let checkpoint = input.clone();
        let first = self.parser1.parse(input)?;
        let second = match self.parser2.parse(input) {
            Ok(value) => value,
            Err(error) => {
                *input = checkpoint;
                return Err(error);
            }
        };
        match self.parser3.parse(input) {
            Ok(third) => Ok((first, second, third)),
            Err(error) => {
                *input = checkpoint;
                Err(error)
            }
        }
    }
}

/// Convenience function to create a Zip parser
pub fn zip<I, P1, P2>(parser1: P1, parser2: P2) -> Zip<P1, P2>
where
    P1: Parser<I>,
    P2: Parser<I>,
{
    Zip::new(parser1, parser2)
}

/// Convenience function to create a Zip3 parser
pub fn zip3<I, P1, P2, P3>(parser1: P1, parser2: P2, parser3: P3) -> Zip3<P1, P2, P3>
where
    P1: Parser<I>,
    P2: Parser<I>,
    P3: Parser<I>,
{
    Zip3 {
        parser1,
        parser2,
        parser3,
    }
}

/// Extension trait to add .zip() method support for parsers
pub trait ZipExt<I>: Parser<I> + Sized {
    fn zip<P>(self, other: P) -> Zip<Self, P>
    where
        P: Parser<I>,
    {
        Zip::new(self, other)
    }
}

/// Implement ZipExt for all parsers
impl<I, P: Parser<I>> ZipExt<I> for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::int::int;
    use crate::text::prefix::prefix;

    #[test]
    fn test_zip_both_succeed() {
        let mut input = "12,34rest";
        let parser = int().zip(prefix(",")).zip(int());

        let ((first, ()), second) = parser.parse(&mut input).unwrap();
        assert_eq!(first, 12);
        assert_eq!(second, 34);
        assert_eq!(input, "rest");
    }

    #[test]
    fn test_zip_first_fails() {
        let mut input = "abc";
        let parser = int().zip(prefix(","));

        assert!(parser.parse(&mut input).is_err());
        assert_eq!(input, "abc");
    }

    #[test]
    fn test_zip_second_fails_rewinds_first() {
        let mut input = "12;34";
        let parser = int().zip(prefix(","));

        assert!(parser.parse(&mut input).is_err());
        assert_eq!(input, "12;34");
    }

    #[test]
    fn test_zip_function_syntax() {
        let mut input = "1x";
        let parser = zip(int(), prefix("x"));

        let (value, ()) = parser.parse(&mut input).unwrap();
        assert_eq!(value, 1);
        assert_eq!(input, "");
    }

    #[test]
    fn test_zip3_flat_triple() {
        let mut input = "1,2!";
        let parser = zip3(int(), prefix(","), int());

        let (first, (), second) = parser.parse(&mut input).unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(input, "!");
    }

    #[test]
    fn test_zip3_rewinds_on_late_failure() {
        let mut input = "1,x";
        let parser = zip3(int(), prefix(","), int());

        assert!(parser.parse(&mut input).is_err());
        assert_eq!(input, "1,x");
    }
}
