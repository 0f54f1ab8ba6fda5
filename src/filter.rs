use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that applies a predicate to the output of another parser.
///
/// A rejected output fails the whole combinator and rewinds everything the
/// inner parser consumed.
pub struct Filter<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> Filter<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Filter { parser, predicate }
    }
}

impl<I, P, F> Parser<I> for Filter<P, F>
where
    I: Clone,
    P: Parser<I>,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse(&self, input: &mut I) -> Result<Self::Output, ParseError> {
        let checkpoint = input.clone();
        let value = self.parser.parse(input)?;
        if (self.predicate)(&value) {
            Ok(value)
        } else {
            *input = checkpoint;
            Err(ParseError)
        }
    }
}

/// Convenience function to create a filtered parser
pub fn filter<I, P, F>(parser: P, predicate: F) -> Filter<P, F>
where
    P: Parser<I>,
    F: Fn(&P::Output) -> bool,
{
    Filter::new(parser, predicate)
}

/// Extension trait to add .filter() method support for parsers
pub trait FilterExt<I>: Parser<I> + Sized {
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, predicate)
    }
}

/// Implement FilterExt for all parsers
impl<I, P: Parser<I>> FilterExt<I> for P {}
