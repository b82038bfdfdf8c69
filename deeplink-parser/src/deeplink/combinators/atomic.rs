use crate::deeplink::component::ParsedComponent;
use crate::deeplink::cursor::Cursor;
use crate::deeplink::parser::{LinkParser, ParserKind};
use tracing::debug;

/// Restores the cursor when the inner parser fails.
///
/// Takes a snapshot before parsing, so a failed [Group](super::Group) or
/// [Repeated](super::Repeated) wrapped in `Atomic` leaves no partial consumption behind.
#[derive(Debug, Clone)]
pub struct Atomic<P> {
    inner: P,
}

impl<P: LinkParser> Atomic<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: LinkParser> LinkParser for Atomic<P> {
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor) -> Option<ParsedComponent<Self::Output>> {
        let snapshot = cursor.clone();
        let parsed = self.inner.parse(cursor);
        if parsed.is_none() && *cursor != snapshot {
            debug!(parser = %self.inner.kind(), "rolling back partial consumption");
            *cursor = snapshot;
        }
        parsed
    }

    fn kind(&self) -> ParserKind {
        self.inner.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deeplink::combinators::Group;
    use crate::deeplink::parser::ParserExt;
    use crate::deeplink::parsers::test_support::link;
    use crate::deeplink::parsers::{ExactMatch, NoOp};

    #[test]
    fn test_restores_after_partial_group() {
        let mut cursor = link(&["a", "b"], &[]);
        let before = cursor.clone();
        let parser = Group::new((ExactMatch::new("a"), NoOp)).atomic();
        assert!(parser.parse(&mut cursor).is_none());
        assert_eq!(cursor, before);
    }

    #[test]
    fn test_success_is_untouched() {
        let mut cursor = link(&["a", "b"], &[]);
        let parser = Group::new((ExactMatch::new("a"), ExactMatch::new("b"))).atomic();
        assert!(parser.parse(&mut cursor).is_some());
        assert!(cursor.is_fully_parsed());
    }

    #[test]
    fn test_reports_inner_kind() {
        assert_eq!(NoOp.atomic().kind(), NoOp.kind());
    }
}
