use crate::deeplink::component::ParsedComponent;
use crate::deeplink::cursor::Cursor;
use crate::deeplink::parser::{LinkParser, ParserKind};
use std::marker::PhantomData;

/// Matches one path segment equal to a literal.
pub struct ExactMatch<T = String, F = fn(&str) -> String> {
    literal: String,
    transform: F,
    _output: PhantomData<fn() -> T>,
}

fn owned(literal: &str) -> String {
    literal.to_owned()
}

impl ExactMatch {
    /// Outputs the literal itself.
    pub fn new(literal: impl Into<String>) -> Self {
        ExactMatch::with_transform(literal, owned as fn(&str) -> String)
    }
}

impl<T, F> ExactMatch<T, F>
where
    F: Fn(&str) -> T,
{
    /// Outputs `transform(literal)` on a match.
    pub fn with_transform(literal: impl Into<String>, transform: F) -> Self {
        Self {
            literal: literal.into(),
            transform,
            _output: PhantomData,
        }
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl<T, F> LinkParser for ExactMatch<T, F>
where
    F: Fn(&str) -> T,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor) -> Option<ParsedComponent<T>> {
        cursor
            .consume_next_path_if(|next| (next == self.literal).then(|| (self.transform)(next)))
            .map(ParsedComponent::new)
    }

    fn kind(&self) -> ParserKind {
        ParserKind::new::<T>("ExactMatch")
    }
}
