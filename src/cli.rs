//! Parsers over command-line token input (an ordered argument list).
//!
//! Unlike text parsers, flag parsers scan the whole list rather than the
//! front: options may appear anywhere among positional arguments.

use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that pops and returns the first token, typically the program
/// name. Fails only on an empty list.
pub fn head() -> Head {
    Head
}

pub struct Head;

impl Parser<Vec<String>> for Head {
    type Output = String;

    fn parse(&self, input: &mut Vec<String>) -> Result<String, ParseError> {
        if input.is_empty() {
            return Err(ParseError);
        }
        Ok(input.remove(0))
    }
}

/// Parser that scans the entire list for a flag in short (`-x`) or long
/// (`--name`) form, removes every occurrence, and reports whether at least
/// one existed. Always succeeds.
pub fn flag(short: char, long: &str) -> Flag {
    Flag {
        short: format!("-{}", short),
        long: format!("--{}", long),
    }
}

pub struct Flag {
    short: String,
    long: String,
}

impl Parser<Vec<String>> for Flag {
    type Output = bool;

    fn parse(&self, input: &mut Vec<String>) -> Result<bool, ParseError> {
        let before = input.len();
        input.retain(|token| *token != self.short && *token != self.long);
        Ok(input.len() != before)
    }
}

/// Parser that removes and returns, in original order, every token not
/// starting with `-` (or equal to bare `-`, the conventional stdin name).
/// Always succeeds, possibly with an empty result.
pub fn operands() -> Operands {
    Operands
}

pub struct Operands;

fn is_operand(token: &str) -> bool {
    token == "-" || !token.starts_with('-')
}

impl Parser<Vec<String>> for Operands {
    type Output = Vec<String>;

    fn parse(&self, input: &mut Vec<String>) -> Result<Vec<String>, ParseError> {
        let mut found = Vec::new();
        input.retain(|token| {
            if is_operand(token) {
                found.push(token.clone());
                false
            } else {
                true
            }
        });
        Ok(found)
    }
}

/// Parser that succeeds only when no tokens remain.
pub fn end() -> End {
    End
}

pub struct End;

impl Parser<Vec<String>> for End {
    type Output = ();

    fn parse(&self, input: &mut Vec<String>) -> Result<(), ParseError> {
        if input.is_empty() {
            Ok(())
        } else {
            Err(ParseError)
        }
    }
}
