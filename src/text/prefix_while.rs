use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that consumes the maximal prefix whose characters all satisfy the
/// predicate. Always succeeds; the match may be empty.
pub fn prefix_while<F>(predicate: F) -> PrefixWhile<F>
where
    F: Fn(char) -> bool,
{
    PrefixWhile { predicate }
}

pub struct PrefixWhile<F> {
    predicate: F,
}

impl<'a, F> Parser<&'a str> for PrefixWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'a str;

    fn parse(&self, input: &mut &'a str) -> Result<&'a str, ParseError> {
        let end = input
            .char_indices()
            .find(|(_, c)| !(self.predicate)(*c))
            .map_or(input.len(), |(index, _)| index);
        let (matched, rest) = input.split_at(end);
        *input = rest;
        Ok(matched)
    }
}
