use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that feeds the output of one parser to another as its
/// input.
///
/// The upstream parser consumes from the outer input and produces a value;
/// the downstream parser then consumes from that value. Downstream failure
/// rewinds the outer input to before the upstream ran. Whatever the
/// downstream leaves unconsumed of the intermediate value is discarded;
/// compose the downstream with an end-of-input check when full consumption
/// matters.
pub struct Pipe<P1, P2> {
    upstream: P1,
    downstream: P2,
}

impl<P1, P2> Pipe<P1, P2> {
    pub fn new(upstream: P1, downstream: P2) -> Self {
        Pipe {
            upstream,
            downstream,
        }
    }
}

impl<I, P1, P2> Parser<I> for Pipe<P1, P2>
where
    I: Clone,
    P1: Parser<I>,
    P2: Parser<P1::Output>,
{
    type Output = P2::Output;

    fn parse(&self, input: &mut I) -> Result<Self::Output, ParseError> {
        let checkpoint = input.clone();
        let mut intermediate = self.upstream.parse(input)?;
        match self.downstream.parse(&mut intermediate) {
            Ok(value) => Ok(value),
            Err(error) => {
                *input = checkpoint;
                Err(error)
            }
        }
    }
}

/// Convenience function to create a Pipe parser
pub fn pipe<I, P1, P2>(upstream: P1, downstream: P2) -> Pipe<P1, P2>
where
    P1: Parser<I>,
    P2: Parser<P1::Output>,
{
    Pipe::new(upstream, downstream)
}

/// Extension trait to add .pipe() method support for parsers
pub trait PipeExt<I>: Parser<I> + Sized {
    fn pipe<P>(self, downstream: P) -> Pipe<Self, P>
    where
        P: Parser<Self::Output>,
    {
        Pipe::new(self, downstream)
    }
}

/// Implement PipeExt for all parsers
impl<I, P: Parser<I>> PipeExt<I> for P {}
