use crate::deeplink::component::ParsedComponent;
use crate::deeplink::cursor::Cursor;
use crate::deeplink::parser::{LinkParser, ParserKind};
use tracing::debug;

/// One or more occurrences of the inner parser, collected in order.
///
/// Runs the inner parser until it fails, stops making progress, or the cursor is fully
/// parsed. An iteration only counts when it consumed something, so an inner parser that
/// succeeds without consuming (an [Optional](super::Optional), say) ends the loop instead of
/// spinning. Fails when no iteration counted.
///
/// A success that consumed nothing is discarded, not collected: keeping it would make
/// `Optional(NoOp).repeated()` succeed with one `None` instead of failing with the cursor
/// untouched.
#[derive(Debug, Clone)]
pub struct Repeated<P> {
    inner: P,
}

impl<P: LinkParser> Repeated<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: LinkParser> LinkParser for Repeated<P> {
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Cursor) -> Option<ParsedComponent<Self::Output>> {
        let mut values = Vec::new();
        while !cursor.is_fully_parsed() {
            let before = cursor.remaining();
            match self.inner.parse(cursor) {
                Some(component) if cursor.remaining() < before => {
                    values.push(component.into_value());
                }
                Some(_) => {
                    debug!(parser = %self.inner.kind(), "repetition stalled");
                    break;
                }
                None => break,
            }
        }
        if values.is_empty() {
            debug!(parser = %self.inner.kind(), "repetition matched nothing");
            return None;
        }
        Some(ParsedComponent::new(values))
    }

    fn kind(&self) -> ParserKind {
        ParserKind::new::<Self::Output>("Repeated")
    }
}
