//! # Backcomb - Backtracking Parser Combinators
//!
//! A parser combinator library over consumable inputs with mutate-and-rewind
//! semantics, designed for building recursive-descent grammars out of small
//! reusable pieces.
//!
//! Backcomb provides composable, type-safe parsers that can be combined to
//! build complex parsing logic from simple building blocks. The library
//! emphasizes:
//!
//! - **Transactional failure**: a failing parser leaves its input exactly as
//!   it found it, recursively through every combinator nesting level
//! - **Composability**: small parsers combine into larger ones using
//!   combinators
//! - **Input polymorphism**: the same combinators run over text slices,
//!   string-keyed tables, structured requests, and argument lists
//! - **No hidden state**: parsers are immutable once built and safe to share
//!   across invocations

pub mod always;
pub mod and_then;
pub mod cli;
pub mod error;
pub mod filter;
pub mod keyed;
pub mod many;
pub mod map;
pub mod one_of;
pub mod opt;
pub mod or;
pub mod parser;
pub mod pipe;
pub mod pullback;
pub mod request;
pub mod separated_list;
pub mod skip;
pub mod take;
pub mod text;
pub mod zip;

pub use always::always;
pub use and_then::AndThenExt;
pub use error::ParseError;
pub use filter::FilterExt;
pub use many::many;
pub use map::MapExt;
pub use one_of::one_of;
pub use opt::opt;
pub use or::OrExt;
pub use parser::Parser;
pub use pipe::PipeExt;
pub use pullback::{PullbackExt, pullback};
pub use separated_list::{SeparatedByExt, separated_list};
pub use skip::SkipExt;
pub use take::TakeExt;
pub use zip::{ZipExt, zip, zip3};
