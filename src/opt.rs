use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that makes another parser optional. Never fails: a
/// failed inner parse yields `None` with input unconsumed.
pub struct Opt<P> {
    parser: P,
}

impl<P> Opt<P> {
    pub fn new(parser: P) -> Self {
        Opt { parser }
    }
}

impl<I, P> Parser<I> for Opt<P>
where
    P: Parser<I>,
{
    type Output = Option<P::Output>;

    fn parse(&self, input: &mut I) -> Result<Self::Output, ParseError> {
        Ok(self.parser.parse(input).ok())
    }
}

/// Convenience function to create an Opt parser
pub fn opt<I, P>(parser: P) -> Opt<P>
where
    P: Parser<I>,
{
    Opt::new(parser)
}
