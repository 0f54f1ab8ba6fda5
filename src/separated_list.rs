use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches zero or more elements with a separator
/// between them.
///
/// Never fails: zero matches is success with input unconsumed. After each
/// element a last-good snapshot is taken before the separator is attempted,
/// so a trailing separator with no following element is left unconsumed in
/// the residual input: an int list over `"1,2,"` yields `[1, 2]` with `","`
/// remaining.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `["a", "b", "c"]`
/// - `"1;2;3"` with separator `;` → `[1, 2, 3]`
pub struct SeparatedList<P, S> {
    element: P,
    separator: S,
}

impl<P, S> SeparatedList<P, S> {
    pub fn new(element: P, separator: S) -> Self {
        SeparatedList { element, separator }
    }
}

impl<I, P, S> Parser<I> for SeparatedList<P, S>
where
    I: Clone,
    P: Parser<I>,
    S: Parser<I>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &mut I) -> Result<Self::Output, ParseError> {
        let mut values = Vec::new();
        // Last-good state: after the most recent element, before any
        // separator has been tried.
        let mut rest = input.clone();

        loop {
            match self.element.parse(input) {
                Ok(value) => {
                    values.push(value);
                    rest = input.clone();
                }
                Err(_) => {
                    // Drop a dangling separator consumed on the previous turn.
                    *input = rest;
                    break;
                }
            }
            if self.separator.parse(input).is_err() {
                break;
            }
        }

        Ok(values)
    }
}

/// Convenience function to create a SeparatedList parser
pub fn separated_list<I, P, S>(element: P, separator: S) -> SeparatedList<P, S>
where
    P: Parser<I>,
    S: Parser<I>,
{
    SeparatedList::new(element, separator)
}

/// Extension trait to add .separated_by() method support for parsers
pub trait SeparatedByExt<I>: Parser<I> + Sized {
    fn separated_by<S>(self, separator: S) -> SeparatedList<Self, S>
    where
        S: Parser<I>,
    {
        SeparatedList::new(self, separator)
    }
}

/// Implement SeparatedByExt for all parsers
impl<I, P: Parser<I>> SeparatedByExt<I> for P {}
