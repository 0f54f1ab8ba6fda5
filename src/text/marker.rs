use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that finds the first occurrence of a marker and consumes
/// everything before it, returning the consumed text. The marker itself is
/// left unconsumed. Fails with input unchanged when the marker is absent.
pub fn up_to(marker: &str) -> UpTo<'_> {
    UpTo { marker }
}

pub struct UpTo<'m> {
    marker: &'m str,
}

impl<'a, 'm> Parser<&'a str> for UpTo<'m> {
    type Output = &'a str;

    fn parse(&self, input: &mut &'a str) -> Result<&'a str, ParseError> {
        let at = input.find(self.marker).ok_or(ParseError)?;
        let (before, rest) = input.split_at(at);
        *input = rest;
        Ok(before)
    }
}

/// Parser that finds the first occurrence of a marker and consumes
/// everything up to and including it, returning the whole consumed text.
/// Fails with input unchanged when the marker is absent.
pub fn through(marker: &str) -> Through<'_> {
    Through { marker }
}

pub struct Through<'m> {
    marker: &'m str,
}

impl<'a, 'm> Parser<&'a str> for Through<'m> {
    type Output = &'a str;

    fn parse(&self, input: &mut &'a str) -> Result<&'a str, ParseError> {
        let at = input.find(self.marker).ok_or(ParseError)?;
        let (consumed, rest) = input.split_at(at + self.marker.len());
        *input = rest;
        Ok(consumed)
    }
}
