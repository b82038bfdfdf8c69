//! The parser contract
//!
//!     A parser inspects the cursor and either returns one [ParsedComponent] after consuming
//!     exactly what it matched, or returns `None`. Primitive parsers leave the cursor
//!     untouched on `None`; combinators document their own guarantees.
//!
//!     Writing a parser only takes the cursor primitives:
//!
//!         struct Exactly(&'static str);
//!
//!         impl LinkParser for Exactly {
//!             type Output = String;
//!
//!             fn parse(&self, cursor: &mut Cursor) -> Option<ParsedComponent<String>> {
//!                 cursor
//!                     .consume_next_path_if(|next| (next == self.0).then(|| next.to_string()))
//!                     .map(ParsedComponent::new)
//!             }
//!         }

use super::combinators::{Atomic, Map, Optional, Repeated};
use super::component::ParsedComponent;
use super::cursor::Cursor;
use std::any::type_name;
use std::fmt;

/// Parses one component out of a [Cursor].
pub trait LinkParser {
    type Output;

    /// Attempt to parse at the cursor's current state.
    fn parse(&self, cursor: &mut Cursor) -> Option<ParsedComponent<Self::Output>>;

    /// Identity reported in errors. Compared by kind only, never by configuration.
    fn kind(&self) -> ParserKind {
        ParserKind::new::<Self::Output>(type_name::<Self>())
    }
}

/// What kind of parser failed.
///
/// Two parsers are the same kind when they share a name and an output type. Literals,
/// patterns, and closures they were configured with play no part, which keeps errors
/// comparable in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParserKind {
    name: &'static str,
    output: &'static str,
}

impl ParserKind {
    pub fn new<T: ?Sized>(name: &'static str) -> Self {
        Self {
            name,
            output: type_name::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn output(&self) -> &'static str {
        self.output
    }
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{}>", self.name, self.output)
    }
}

impl<P: LinkParser + ?Sized> LinkParser for &P {
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor) -> Option<ParsedComponent<Self::Output>> {
        (**self).parse(cursor)
    }

    fn kind(&self) -> ParserKind {
        (**self).kind()
    }
}

impl<P: LinkParser + ?Sized> LinkParser for Box<P> {
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor) -> Option<ParsedComponent<Self::Output>> {
        (**self).parse(cursor)
    }

    fn kind(&self) -> ParserKind {
        (**self).kind()
    }
}

/// Combinator methods available on every parser.
pub trait ParserExt: LinkParser + Sized {
    /// Zero or one: see [Optional].
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// One or more until no progress: see [Repeated].
    fn repeated(self) -> Repeated<Self> {
        Repeated::new(self)
    }

    /// Restore the cursor when this parser fails: see [Atomic].
    fn atomic(self) -> Atomic<Self> {
        Atomic::new(self)
    }

    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

impl<P: LinkParser> ParserExt for P {}
