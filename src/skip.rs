use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that runs two parsers in order, discards the left
/// output, and yields the right. The pair is atomic: a failure in the second
/// parser rewinds whatever the first consumed.
///
/// Reads well in fluent chains where the left side is structural noise:
/// `prefix("$").skip(double())` consumes the currency sign and yields the
/// amount.
pub struct Skip<P1, P2> {
    discarded: P1,
    parser: P2,
}

impl<P1, P2> Skip<P1, P2> {
    pub fn new(discarded: P1, parser: P2) -> Self {
        Skip { discarded, parser }
    }
}

impl<I, P1, P2> Parser<I> for Skip<P1, P2>
where
    I: Clone,
    P1: Parser<I>,
    P2: Parser<I>,
{
    type Output = P2::Output;

    fn parse(&self, input: &mut I) -> Result<Self::Output, ParseError> {
        let checkpoint = input.clone();
        self.discarded.parse(input)?;
        match self.parser.parse(input) {
            Ok(value) => Ok(value),
            Err(error) => {
                *input = checkpoint;
                Err(error)
            }
        }
    }
}

/// Convenience function to create a Skip parser
pub fn skip<I, P1, P2>(discarded: P1, parser: P2) -> Skip<P1, P2>
where
    P1: Parser<I>,
    P2: Parser<I>,
{
    Skip::new(discarded, parser)
}

/// Extension trait to add .skip() method support for parsers
pub trait SkipExt<I>: Parser<I> + Sized {
    /// Discard this parser's output and yield `other`'s.
    fn skip<P>(self, other: P) -> Skip<Self, P>
    where
        P: Parser<I>,
    {
        Skip::new(self, other)
    }
}

/// Implement SkipExt for all parsers
impl<I, P: Parser<I>> SkipExt<I> for P {}
