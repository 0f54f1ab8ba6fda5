use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator for output-dependent continuation: runs the first
/// parser, builds a second parser from its output, and runs that against the
/// remaining input.
///
/// The two stages form one attempt. If the second stage fails, the input is
/// rewound to its state before the first stage ran, not merely before the
/// second.
pub struct AndThen<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> AndThen<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        AndThen { parser, binder }
    }
}

impl<I, P, F, Q> Parser<I> for AndThen<P, F>
where
    I: Clone,
    P: Parser<I>,
    F: Fn(P::Output) -> Q,
    Q: Parser<I>,
{
    type Output = Q::Output;

    fn parse(&self, input: &mut I) -> Result<Self::Output, ParseError> {
        let checkpoint = input.clone();
        let value = self.parser.parse(input)?;
        match (self.binder)(value).parse(input) {
            Ok(output) => Ok(output),
            Err(error) => {
                *input = checkpoint;
                Err(error)
            }
        }
    }
}

/// Convenience function to create an AndThen parser
pub fn and_then<I, P, F, Q>(parser: P, binder: F) -> AndThen<P, F>
where
    P: Parser<I>,
    F: Fn(P::Output) -> Q,
    Q: Parser<I>,
{
    AndThen::new(parser, binder)
}

/// Extension trait to add .and_then() method support for parsers
pub trait AndThenExt<I>: Parser<I> + Sized {
    fn and_then<F, Q>(self, binder: F) -> AndThen<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<I>,
    {
        AndThen::new(self, binder)
    }
}

/// Implement AndThenExt for all parsers
impl<I, P: Parser<I>> AndThenExt<I> for P {}
