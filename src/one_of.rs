use crate::error::ParseError;
use crate::parser::Parser;

/// First-match alternation over an ordered array of same-signature parsers.
///
/// Each candidate runs against the original unconsumed input; a failed
/// candidate restores it before the next one is tried. If every candidate
/// fails, the whole parser fails with input unchanged. The alternatives are
/// fixed at composition time — there is no dynamic dispatch.
///
/// Heterogeneous alternatives are expressed by unifying outputs with `map`
/// and chaining [`crate::or::Or`]; this array form fits grammars whose
/// branches share one parser type, such as plain `fn` parsers.
pub struct OneOf<P, const N: usize> {
    alternatives: [P; N],
}

impl<I, P, const N: usize> Parser<I> for OneOf<P, N>
where
    P: Parser<I>,
{
    type Output = P::Output;

    fn parse(&self, input: &mut I) -> Result<Self::Output, ParseError> {
        for alternative in &self.alternatives {
            if let Ok(value) = alternative.parse(input) {
                return Ok(value);
            }
        }
        Err(ParseError)
    }
}

/// Convenience function to create a OneOf parser
pub fn one_of<I, P, const N: usize>(alternatives: [P; N]) -> OneOf<P, N>
where
    P: Parser<I>,
{
    OneOf { alternatives }
}
