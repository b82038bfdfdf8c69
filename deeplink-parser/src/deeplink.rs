//! Deep link parsing engine
//!
//!     A link arrives already split into path segments and query pairs. The [Cursor] holds
//!     what is left to match and what has been matched; parsers move segments and query
//!     entries from the first set to the second, one at a time, and never back.
//!
//!     Primitive parsers consume at most one segment or entry and leave the cursor untouched
//!     when they fail. Combinators compose them and only inherit that guarantee where
//!     explicitly stated: a failed [Group] keeps whatever its leading members consumed,
//!     while [Atomic] restores the cursor on failure.
//!
//!     Top-level parsing runs a tuple of parsers in order against one cursor and either
//!     returns a [ParsedLink] or a [ParseError] carrying the cursor as it was left.

pub mod combinators;
pub mod component;
pub mod cursor;
pub mod error;
pub mod matching;
pub mod parser;
pub mod parsers;
pub mod parsing;
pub mod preprocess;

pub use combinators::{Atomic, Group, Map, Optional, ParserSet, Repeated};
pub use component::ParsedComponent;
pub use cursor::{Cursor, LinkKind, QueryMap};
pub use error::ParseError;
pub use matching::{Captures, MatchStrategy, Pattern, PatternError};
pub use parser::{LinkParser, ParserExt, ParserKind};
pub use parsers::{
    EnumPathMatch, EnumQueryMatch, ExactMatch, KeyMatcher, NoOp, PatternPathMatch,
    PatternQueryMatch,
};
pub use parsing::ParsedLink;
pub use preprocess::Preprocessing;
