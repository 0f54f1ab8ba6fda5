//! Parsers over string-keyed map input.
//!
//! A keyed map is consumed field by field: each successfully parsed field is
//! removed, so later parsers see only what remains unclaimed.

use std::collections::BTreeMap;

use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that runs a text parser against the value of one named field.
///
/// The field's value must be consumed entirely; on success the field is
/// removed from the map. On failure, or when the sub-parser leaves part of
/// the value unconsumed, the map is untouched and the operation fails.
pub fn field<P>(name: impl Into<String>, parser: P) -> Field<P> {
    Field {
        name: name.into(),
        parser,
    }
}

pub struct Field<P> {
    name: String,
    parser: P,
}

impl<P, O> Parser<BTreeMap<String, String>> for Field<P>
where
    P: for<'v> Parser<&'v str, Output = O>,
{
    type Output = O;

    fn parse(&self, input: &mut BTreeMap<String, String>) -> Result<O, ParseError> {
        let value = input.get(&self.name).ok_or(ParseError)?;
        let mut remaining = value.as_str();
        let output = self.parser.parse(&mut remaining)?;
        if !remaining.is_empty() {
            return Err(ParseError);
        }
        input.remove(&self.name);
        Ok(output)
    }
}
