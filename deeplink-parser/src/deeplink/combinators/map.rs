use crate::deeplink::component::ParsedComponent;
use crate::deeplink::cursor::Cursor;
use crate::deeplink::parser::{LinkParser, ParserKind};

/// Projects the inner parser's output. Consumption and failure are the inner parser's.
pub struct Map<P, F> {
    inner: P,
    mapper: F,
}

impl<P, F, U> Map<P, F>
where
    P: LinkParser,
    F: Fn(P::Output) -> U,
{
    pub fn new(inner: P, mapper: F) -> Self {
        Self { inner, mapper }
    }
}

impl<P, F, U> LinkParser for Map<P, F>
where
    P: LinkParser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor) -> Option<ParsedComponent<U>> {
        self.inner
            .parse(cursor)
            .map(|component| component.map(&self.mapper))
    }

    fn kind(&self) -> ParserKind {
        ParserKind::new::<U>("Map")
    }
}
