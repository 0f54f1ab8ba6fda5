use thiserror::Error;

/// Failure marker returned by every parser.
///
/// A failing parser communicates exactly one thing: nothing was matched and
/// nothing was consumed. There are no error codes, messages, or positions at
/// this level; callers needing diagnostics layer their own reporting on top
/// of the residual input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no match")]
pub struct ParseError;
