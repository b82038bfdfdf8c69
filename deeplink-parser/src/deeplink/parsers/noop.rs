use crate::deeplink::component::ParsedComponent;
use crate::deeplink::cursor::Cursor;
use crate::deeplink::parser::{LinkParser, ParserKind};

/// Never matches anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOp;

impl LinkParser for NoOp {
    type Output = ();

    fn parse(&self, _cursor: &mut Cursor) -> Option<ParsedComponent<()>> {
        None
    }

    fn kind(&self) -> ParserKind {
        ParserKind::new::<()>("NoOp")
    }
}
