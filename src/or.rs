use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries the
/// second parser against the same unconsumed input.
///
/// A failed candidate restores the input before the next one runs, so no
/// alternative sees pollution from an earlier attempt. Order is precedence:
/// when both could match, the first wins — there is no longest-match rule.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<I, P1, P2> Parser<I> for Or<P1, P2>
where
    P1: Parser<I>,
    P2: Parser<I, Output = P1::Output>,
{
    type Output = P1::Output;

    fn parse(&self, input: &mut I) -> Result<Self::Output, ParseError> {
        match self.parser1.parse(input) {
            Ok(value) => Ok(value),
            Err(_) => self.parser2.parse(input),
        }
    }
}

/// Convenience function to create an Or parser
pub fn or<I, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<I>,
    P2: Parser<I, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<I>: Parser<I> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<I, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<I, P: Parser<I>> OrExt<I> for P {}
