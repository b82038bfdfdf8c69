//! Primitive parsers
//!
//! Each primitive consumes at most one path segment or one query entry and is written purely
//! in terms of [Cursor::consume_next_path_if](super::cursor::Cursor::consume_next_path_if) and
//! [Cursor::consume_query_if](super::cursor::Cursor::consume_query_if), so a failed parse
//! never leaves a trace on the cursor.
//!
//! | Parser              | Consumes      | Succeeds when                                  |
//! |---------------------|---------------|------------------------------------------------|
//! | [ExactMatch]        | path segment  | segment equals the literal                     |
//! | [EnumPathMatch]     | path segment  | raw value builds a valid enum case             |
//! | [EnumQueryMatch]    | query entry   | key matches and value builds a valid enum case |
//! | [PatternPathMatch]  | path segment  | pattern matches and the transform accepts      |
//! | [PatternQueryMatch] | query entry   | key and value match and the transform accepts  |
//! | [NoOp]              | nothing       | never                                          |

pub mod enumerated;
pub mod exact;
pub mod key;
pub mod noop;
pub mod pattern;

pub use enumerated::{EnumPathMatch, EnumQueryMatch};
pub use exact::ExactMatch;
pub use key::KeyMatcher;
pub use noop::NoOp;
pub use pattern::{PatternPathMatch, PatternQueryMatch};
