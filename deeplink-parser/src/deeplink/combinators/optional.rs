use crate::deeplink::component::ParsedComponent;
use crate::deeplink::cursor::Cursor;
use crate::deeplink::parser::{LinkParser, ParserKind};

/// Zero or one occurrence of the inner parser. Never fails.
#[derive(Debug, Clone)]
pub struct Optional<P> {
    inner: P,
}

impl<P: LinkParser> Optional<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: LinkParser> LinkParser for Optional<P> {
    type Output = Option<P::Output>;

    fn parse(&self, cursor: &mut Cursor) -> Option<ParsedComponent<Self::Output>> {
        let value = self.inner.parse(cursor).map(ParsedComponent::into_value);
        Some(ParsedComponent::new(value))
    }

    fn kind(&self) -> ParserKind {
        ParserKind::new::<Self::Output>("Optional")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deeplink::parser::ParserExt;
    use crate::deeplink::parsers::test_support::link;
    use crate::deeplink::parsers::{ExactMatch, NoOp};

    #[test]
    fn test_wraps_success() {
        let mut cursor = link(&["a"], &[]);
        let component = ExactMatch::new("a").optional().parse(&mut cursor).unwrap();
        assert_eq!(component.into_value().as_deref(), Some("a"));
        assert!(cursor.is_fully_parsed());
    }

    #[test]
    fn test_succeeds_with_none_on_failure() {
        let mut cursor = link(&["b"], &[]);
        let before = cursor.clone();
        let component = ExactMatch::new("a").optional().parse(&mut cursor).unwrap();
        assert_eq!(component.into_value(), None);
        assert_eq!(cursor, before);
    }

    #[test]
    fn test_succeeds_on_empty_cursor() {
        let mut cursor = link(&[], &[]);
        assert_eq!(NoOp.optional().parse(&mut cursor).map(|c| c.into_value()), Some(None));
    }
}
