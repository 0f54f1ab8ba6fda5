use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that succeeds with a constant value, consuming nothing.
///
/// Mostly useful as the fallback arm of an alternation, e.g. supplying a
/// default when an optional branch is absent.
pub struct Always<O> {
    value: O,
}

impl<I, O> Parser<I> for Always<O>
where
    O: Clone,
{
    type Output = O;

    fn parse(&self, _input: &mut I) -> Result<Self::Output, ParseError> {
        Ok(self.value.clone())
    }
}

/// Convenience function to create an Always parser
pub fn always<O: Clone>(value: O) -> Always<O> {
    Always { value }
}
