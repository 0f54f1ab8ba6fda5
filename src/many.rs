use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given
/// parser. Never fails: zero matches is success with input unconsumed.
///
/// Repetition is loop-based, so stack depth is independent of input length.
/// An element parser that can succeed without consuming anything will loop
/// forever here; callers must ensure each match makes progress.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<I, P> Parser<I> for Many<P>
where
    P: Parser<I>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &mut I) -> Result<Self::Output, ParseError> {
        let mut values = Vec::new();
        // A failed element restores the input itself, so the loop just stops.
        while let Ok(value) = self.parser.parse(input) {
            values.push(value);
        }
        Ok(values)
    }
}

/// Convenience function to create a Many parser
pub fn many<I, P>(parser: P) -> Many<P>
where
    P: Parser<I>,
{
    Many::new(parser)
}
