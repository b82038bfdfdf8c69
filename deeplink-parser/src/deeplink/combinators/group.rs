use super::set::ParserSet;
use crate::deeplink::component::ParsedComponent;
use crate::deeplink::cursor::Cursor;
use crate::deeplink::parser::{LinkParser, ParserKind};
use tracing::debug;

/// A fixed sequence of parsers producing one combined value.
///
/// The parsers run in declaration order. When all of them succeed their values go through
/// the transform, which may still reject them. When one fails, or the transform returns
/// `None`, the group fails but the cursor is not rolled back: segments and entries consumed
/// by the leading parsers stay consumed. Use [Atomic](super::Atomic) for all-or-nothing.
pub struct Group<S, F> {
    parsers: S,
    transform: F,
}

impl<S: ParserSet> Group<S, fn(S::Values) -> Option<S::Values>> {
    /// Outputs the tuple of values.
    pub fn new(parsers: S) -> Self {
        Group {
            parsers,
            transform: Some,
        }
    }
}

impl<S, F, T> Group<S, F>
where
    S: ParserSet,
    F: Fn(S::Values) -> Option<T>,
{
    /// Outputs `transform(values)`.
    pub fn with_transform(parsers: S, transform: F) -> Self {
        Group { parsers, transform }
    }
}

impl<S, F, T> LinkParser for Group<S, F>
where
    S: ParserSet,
    F: Fn(S::Values) -> Option<T>,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor) -> Option<ParsedComponent<T>> {
        let components = match self.parsers.parse_each(cursor) {
            Ok(components) => components,
            Err(parser) => {
                debug!(%parser, "group member failed, keeping partial consumption");
                return None;
            }
        };
        let value = (self.transform)(S::values(components));
        if value.is_none() {
            debug!("group transform rejected values");
        }
        value.map(ParsedComponent::new)
    }

    fn kind(&self) -> ParserKind {
        ParserKind::new::<T>("Group")
    }
}
