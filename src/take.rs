use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that runs two parsers in order, yields the left output,
/// and discards the right. The pair is atomic: a failure in the second
/// parser rewinds whatever the first consumed.
///
/// The mirror image of [`crate::skip::Skip`], for chains where the trailing
/// side is structural noise: `double().take(prefix("°"))` yields the number
/// and consumes the degree mark.
pub struct Take<P1, P2> {
    parser: P1,
    discarded: P2,
}

impl<P1, P2> Take<P1, P2> {
    pub fn new(parser: P1, discarded: P2) -> Self {
        Take { parser, discarded }
    }
}

impl<I, P1, P2> Parser<I> for Take<P1, P2>
where
    I: Clone,
    P1: Parser<I>,
    P2: Parser<I>,
{
    type Output = P1::Output;

    fn parse(&self, input: &mut I) -> Result<Self::Output, ParseError> {
        let checkpoint = input.clone();
        let value = self.parser.parse(input)?;
        match self.discarded.parse(input) {
            Ok(_) => Ok(value),
            Err(error) => {
                *input = checkpoint;
                Err(error)
            }
        }
    }
}

/// Convenience function to create a Take parser
pub fn take<I, P1, P2>(parser: P1, discarded: P2) -> Take<P1, P2>
where
    P1: Parser<I>,
    P2: Parser<I>,
{
    Take::new(parser, discarded)
}

/// Extension trait to add .take() method support for parsers
pub trait TakeExt<I>: Parser<I> + Sized {
    /// Yield this parser's output and discard `other`'s.
    fn take<P>(self, other: P) -> Take<Self, P>
    where
        P: Parser<I>,
    {
        Take::new(self, other)
    }
}

/// Implement TakeExt for all parsers
impl<I, P: Parser<I>> TakeExt<I> for P {}
