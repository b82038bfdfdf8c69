//! Top-level parsing
//!
//!     A cursor is parsed by a tuple of parsers run in declaration order:
//!
//!         let link = cursor
//!             .without_leading_slash()
//!             .parse((EnumPathMatch::<PageA>::new(), EnumPathMatch::<PageB>::new()))?
//!             .ensure_fully_parsed()?;
//!         let (page_a, page_b) = link.components();
//!
//!     The first parser that fails ends the run with [ParseError::UnableToParse]. Nothing is
//!     rolled back: the error carries the cursor with everything the earlier parsers
//!     consumed. Leftover segments or entries are not an error by themselves; callers that
//!     require a complete match ask for it with `ensure_fully_parsed`.

use super::combinators::ParserSet;
use super::component::ParsedComponent;
use super::cursor::Cursor;
use super::error::ParseError;
use super::parser::LinkParser;
use serde::Serialize;
use tracing::debug;

/// A successful top-level parse: the final cursor and one component per parser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedLink<C> {
    cursor: Cursor,
    components: C,
}

impl<C> ParsedLink<C> {
    pub fn new(cursor: Cursor, components: C) -> Self {
        Self { cursor, components }
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// The parsed components, in parser declaration order.
    pub fn components(&self) -> &C {
        &self.components
    }

    pub fn into_parts(self) -> (Cursor, C) {
        (self.cursor, self.components)
    }

    pub fn is_fully_parsed(&self) -> bool {
        self.cursor.is_fully_parsed()
    }

    /// Pass the link through only if nothing is left unmatched.
    pub fn ensure_fully_parsed(self) -> Result<Self, ParseError> {
        self.cursor.ensure_fully_parsed()?;
        Ok(self)
    }
}

impl Cursor {
    /// Run `parsers` in order against this cursor.
    pub fn parse<S: ParserSet>(mut self, parsers: S) -> Result<ParsedLink<S::Components>, ParseError> {
        match parsers.parse_each(&mut self) {
            Ok(components) => Ok(ParsedLink::new(self, components)),
            Err(parser) => {
                debug!(%parser, cursor = %self, "top-level parser failed");
                Err(ParseError::UnableToParse {
                    cursor: self,
                    parser,
                })
            }
        }
    }

    /// Run a single parser against this cursor.
    pub fn parse_with<P: LinkParser>(
        mut self,
        parser: P,
    ) -> Result<ParsedLink<ParsedComponent<P::Output>>, ParseError> {
        match parser.parse(&mut self) {
            Some(component) => Ok(ParsedLink::new(self, component)),
            None => {
                let parser = parser.kind();
                debug!(%parser, cursor = %self, "top-level parser failed");
                Err(ParseError::UnableToParse {
                    cursor: self,
                    parser,
                })
            }
        }
    }

    /// [ParseError::NotFullyParsed] when segments or query entries are left over.
    pub fn ensure_fully_parsed(&self) -> Result<(), ParseError> {
        if self.is_fully_parsed() {
            Ok(())
        } else {
            Err(ParseError::NotFullyParsed {
                cursor: self.clone(),
            })
        }
    }
}
