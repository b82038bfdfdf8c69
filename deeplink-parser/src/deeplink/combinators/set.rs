//! Fixed-arity parser tuples
//!
//! A tuple of up to eight parsers with unrelated output types runs as a sequence. Both
//! [Group](super::Group) and the top-level [Cursor::parse](crate::deeplink::Cursor::parse)
//! are built on this.

use crate::deeplink::component::ParsedComponent;
use crate::deeplink::cursor::Cursor;
use crate::deeplink::parser::{LinkParser, ParserKind};

/// An ordered tuple of parsers.
pub trait ParserSet {
    /// One [ParsedComponent] per parser, in declaration order.
    type Components;
    /// The unwrapped values, in declaration order.
    type Values;

    /// Run every parser in order, stopping at the first failure.
    ///
    /// On failure the kind of the failing parser is returned and whatever the parsers before
    /// it consumed stays consumed.
    fn parse_each(&self, cursor: &mut Cursor) -> Result<Self::Components, ParserKind>;

    fn values(components: Self::Components) -> Self::Values;
}

macro_rules! parser_set {
    ($($P:ident $idx:tt),+) => {
        impl<$($P: LinkParser),+> ParserSet for ($($P,)+) {
            type Components = ($(ParsedComponent<$P::Output>,)+);
            type Values = ($($P::Output,)+);

            fn parse_each(&self, cursor: &mut Cursor) -> Result<Self::Components, ParserKind> {
                Ok(($(
                    match self.$idx.parse(cursor) {
                        Some(component) => component,
                        None => return Err(self.$idx.kind()),
                    },
                )+))
            }

            fn values(components: Self::Components) -> Self::Values {
                ($(components.$idx.into_value(),)+)
            }
        }
    };
}

parser_set!(P0 0);
parser_set!(P0 0, P1 1);
parser_set!(P0 0, P1 1, P2 2);
parser_set!(P0 0, P1 1, P2 2, P3 3);
parser_set!(P0 0, P1 1, P2 2, P3 3, P4 4);
parser_set!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5);
parser_set!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6);
parser_set!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7);
