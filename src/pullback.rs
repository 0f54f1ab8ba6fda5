use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that adapts a parser over a narrow input type to run
/// against one field of a larger input type, located by an explicit get/set
/// accessor pair.
///
/// The getter extracts the field by value; the parser runs against that
/// working copy; the setter writes the consumed-down field back only on
/// success. On failure the larger structure is never touched, so the field
/// keeps its prior value and everything else is untouched by construction.
pub struct Pullback<P, G, S> {
    parser: P,
    get: G,
    set: S,
}

impl<P, G, S> Pullback<P, G, S> {
    pub fn new(parser: P, get: G, set: S) -> Self {
        Pullback { parser, get, set }
    }
}

impl<I, J, P, G, S> Parser<J> for Pullback<P, G, S>
where
    P: Parser<I>,
    G: Fn(&J) -> I,
    S: Fn(&mut J, I),
{
    type Output = P::Output;

    fn parse(&self, input: &mut J) -> Result<Self::Output, ParseError> {
        let mut field = (self.get)(input);
        let value = self.parser.parse(&mut field)?;
        (self.set)(input, field);
        Ok(value)
    }
}

/// Convenience function to create a Pullback parser
pub fn pullback<I, J, P, G, S>(parser: P, get: G, set: S) -> Pullback<P, G, S>
where
    P: Parser<I>,
    G: Fn(&J) -> I,
    S: Fn(&mut J, I),
{
    Pullback::new(parser, get, set)
}

/// Extension trait to add .pullback() method support for parsers
pub trait PullbackExt<I>: Parser<I> + Sized {
    fn pullback<J, G, S>(self, get: G, set: S) -> Pullback<Self, G, S>
    where
        G: Fn(&J) -> I,
        S: Fn(&mut J, I),
    {
        Pullback::new(self, get, set)
    }
}

/// Implement PullbackExt for all parsers
impl<I, P: Parser<I>> PullbackExt<I> for P {}
