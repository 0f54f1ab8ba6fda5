//! Parsers over structured request input: a method, ordered path segments,
//! and named query parameters.
//!
//! Routing grammars consume the request piece by piece — the method marker,
//! then path segments from the front, then query parameters by name — and
//! finish with [`end`] to insist that nothing of the path remains.

use std::collections::{BTreeMap, VecDeque};

use crate::error::ParseError;
use crate::parser::Parser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Option<String>,
    pub path: VecDeque<String>,
    pub query: BTreeMap<String, String>,
}

impl Request {
    /// Build a request from a method name and a URI like
    /// `"/episodes/1?t=120"`. Empty path segments collapse, so leading and
    /// doubled slashes are tolerated.
    pub fn new(method: &str, uri: &str) -> Self {
        let (path_part, query_part) = uri.split_once('?').unwrap_or((uri, ""));
        let path = path_part
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(String::from)
            .collect();
        let query = query_part
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((name, value)) => (name.to_string(), value.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect();
        Request {
            method: Some(method.to_string()),
            path,
            query,
        }
    }
}

/// Parser that matches the request method case-insensitively and consumes
/// the method marker.
pub fn method(name: impl Into<String>) -> Method {
    Method { name: name.into() }
}

pub struct Method {
    name: String,
}

impl Parser<Request> for Method {
    type Output = ();

    fn parse(&self, input: &mut Request) -> Result<(), ParseError> {
        match &input.method {
            Some(found) if found.eq_ignore_ascii_case(&self.name) => {
                input.method = None;
                Ok(())
            }
            _ => Err(ParseError),
        }
    }
}

/// Parser that matches the front path segment exactly and pops it.
pub fn path(name: impl Into<String>) -> Path {
    Path { name: name.into() }
}

pub struct Path {
    name: String,
}

impl Parser<Request> for Path {
    type Output = ();

    fn parse(&self, input: &mut Request) -> Result<(), ParseError> {
        match input.path.front() {
            Some(segment) if *segment == self.name => {
                input.path.pop_front();
                Ok(())
            }
            _ => Err(ParseError),
        }
    }
}

/// Parser that runs a text parser against exactly the front path segment.
///
/// Fails unless the segment is entirely consumed; pops the segment on
/// success and leaves the request untouched otherwise.
pub fn segment<P>(parser: P) -> Segment<P> {
    Segment { parser }
}

pub struct Segment<P> {
    parser: P,
}

impl<P, O> Parser<Request> for Segment<P>
where
    P: for<'v> Parser<&'v str, Output = O>,
{
    type Output = O;

    fn parse(&self, input: &mut Request) -> Result<O, ParseError> {
        let segment = input.path.front().ok_or(ParseError)?;
        let mut remaining = segment.as_str();
        let output = self.parser.parse(&mut remaining)?;
        if !remaining.is_empty() {
            return Err(ParseError);
        }
        input.path.pop_front();
        Ok(output)
    }
}

/// Parser that runs a text parser against the named query parameter.
///
/// The parameter's value must be consumed entirely; it is removed on
/// success and left untouched on partial or failed matches.
pub fn query<P>(name: impl Into<String>, parser: P) -> Query<P> {
    Query {
        name: name.into(),
        parser,
    }
}

pub struct Query<P> {
    name: String,
    parser: P,
}

impl<P, O> Parser<Request> for Query<P>
where
    P: for<'v> Parser<&'v str, Output = O>,
{
    type Output = O;

    fn parse(&self, input: &mut Request) -> Result<O, ParseError> {
        let value = input.query.get(&self.name).ok_or(ParseError)?;
        let mut remaining = value.as_str();
        let output = self.parser.parse(&mut remaining)?;
        if !remaining.is_empty() {
            return Err(ParseError);
        }
        input.query.remove(&self.name);
        Ok(output)
    }
}

/// Parser that succeeds only when no path segments remain.
pub fn end() -> End {
    End
}

pub struct End;

impl Parser<Request> for End {
    type Output = ();

    fn parse(&self, input: &mut Request) -> Result<(), ParseError> {
        if input.path.is_empty() {
            Ok(())
        } else {
            Err(ParseError)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skip::SkipExt;
    use crate::text::int::int;

    #[test]
    fn test_request_constructor() {
        let request = Request::new("GET", "/episodes/1?t=120");
        assert_eq!(request.method.as_deref(), Some("GET"));
        assert_eq!(
            request.path,
            VecDeque::from(vec!["episodes".to_string(), "1".to_string()])
        );
        assert_eq!(request.query.get("t").map(String::as_str), Some("120"));
    }

    #[test]
    fn test_method_case_insensitive() {
        let mut input = Request::new("get", "/");
        method("GET").parse(&mut input).unwrap();
        assert_eq!(input.method, None);
    }

    #[test]
    fn test_method_mismatch() {
        let mut input = Request::new("POST", "/");
        assert!(method("GET").parse(&mut input).is_err());
        assert_eq!(input.method.as_deref(), Some("POST"));
    }

    #[test]
    fn test_method_consumed_once() {
        let mut input = Request::new("GET", "/");
        method("GET").parse(&mut input).unwrap();
        assert!(method("GET").parse(&mut input).is_err());
    }

    #[test]
    fn test_path_pops_matching_segment() {
        let mut input = Request::new("GET", "/episodes/1");
        path("episodes").parse(&mut input).unwrap();
        assert_eq!(input.path, VecDeque::from(vec!["1".to_string()]));
    }

    #[test]
    fn test_path_mismatch_leaves_request() {
        let mut input = Request::new("GET", "/episodes/1");
        assert!(path("users").parse(&mut input).is_err());
        assert_eq!(input.path.len(), 2);
    }

    #[test]
    fn test_segment_requires_full_consumption() {
        let mut input = Request::new("GET", "/1x");
        assert!(segment(int()).parse(&mut input).is_err());
        assert_eq!(input.path, VecDeque::from(vec!["1x".to_string()]));
    }

    #[test]
    fn test_segment_parses_and_pops() {
        let mut input = Request::new("GET", "/42/comments");
        assert_eq!(segment(int()).parse(&mut input).unwrap(), 42);
        assert_eq!(input.path, VecDeque::from(vec!["comments".to_string()]));
    }

    #[test]
    fn test_query_full_consumption() {
        let mut input = Request::new("GET", "/?t=120");
        assert_eq!(query("t", int()).parse(&mut input).unwrap(), 120);
        assert!(input.query.is_empty());
    }

    #[test]
    fn test_query_partial_match_restored() {
        let mut input = Request::new("GET", "/?t=120s");
        assert!(query("t", int()).parse(&mut input).is_err());
        assert_eq!(input.query.get("t").map(String::as_str), Some("120s"));
    }

    #[test]
    fn test_query_missing_parameter() {
        let mut input = Request::new("GET", "/");
        assert!(query("t", int()).parse(&mut input).is_err());
    }

    #[test]
    fn test_end_only_on_exhausted_path() {
        let mut input = Request::new("GET", "/episodes");
        assert!(end().parse(&mut input).is_err());

        path("episodes").parse(&mut input).unwrap();
        end().parse(&mut input).unwrap();
    }

    #[test]
    fn test_composed_route() {
        use crate::take::TakeExt;

        let mut input = Request::new("GET", "/episodes/7");
        let parser = method("GET")
            .skip(path("episodes"))
            .skip(segment(int()))
            .take(end());

        assert_eq!(parser.parse(&mut input).unwrap(), 7);
    }
}
