//! Pattern parsers
//!
//! Both parsers run a [Pattern] under a [MatchStrategy] and hand the captures to a transform.
//! The transform has the last word: returning `None` rejects the input even though the
//! pattern matched, and nothing is consumed.

use crate::deeplink::component::ParsedComponent;
use crate::deeplink::cursor::Cursor;
use crate::deeplink::matching::{matched_text, Captures, MatchStrategy, Pattern};
use crate::deeplink::parser::{LinkParser, ParserKind};
use std::marker::PhantomData;

/// Matches one path segment against a pattern.
pub struct PatternPathMatch<T = String, F = fn(&Captures<'_>) -> Option<String>> {
    pattern: Pattern,
    strategy: MatchStrategy,
    transform: F,
    _output: PhantomData<fn() -> T>,
}

impl PatternPathMatch {
    /// Outputs the matched text.
    pub fn new(pattern: Pattern) -> Self {
        PatternPathMatch::with_transform(
            pattern,
            matched_text as fn(&Captures<'_>) -> Option<String>,
        )
    }
}

impl<T, F> PatternPathMatch<T, F>
where
    F: Fn(&Captures<'_>) -> Option<T>,
{
    pub fn with_transform(pattern: Pattern, transform: F) -> Self {
        Self {
            pattern,
            strategy: MatchStrategy::default(),
            transform,
            _output: PhantomData,
        }
    }

    /// Apply the pattern with `strategy` instead of whole-segment matching.
    pub fn strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

impl<T, F> LinkParser for PatternPathMatch<T, F>
where
    F: Fn(&Captures<'_>) -> Option<T>,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor) -> Option<ParsedComponent<T>> {
        cursor
            .consume_next_path_if(|next| {
                let captures = self.pattern.captures(next, self.strategy)?;
                (self.transform)(&captures)
            })
            .map(ParsedComponent::new)
    }

    fn kind(&self) -> ParserKind {
        ParserKind::new::<T>("PatternPathMatch")
    }
}

fn value_text(_key: &Captures<'_>, value: &Captures<'_>) -> Option<String> {
    matched_text(value)
}

/// Matches one query entry whose key and value both match their patterns.
///
/// The same strategy applies to key and value. Entries are tried in insertion order and
/// the first one accepted by the transform is consumed.
pub struct PatternQueryMatch<T = String, F = fn(&Captures<'_>, &Captures<'_>) -> Option<String>> {
    key: Pattern,
    value: Pattern,
    strategy: MatchStrategy,
    transform: F,
    _output: PhantomData<fn() -> T>,
}

impl PatternQueryMatch {
    /// Outputs the value's matched text.
    pub fn new(key: Pattern, value: Pattern) -> Self {
        PatternQueryMatch::with_transform(
            key,
            value,
            value_text as fn(&Captures<'_>, &Captures<'_>) -> Option<String>,
        )
    }
}

impl<T, F> PatternQueryMatch<T, F>
where
    F: Fn(&Captures<'_>, &Captures<'_>) -> Option<T>,
{
    /// `transform` receives the key's captures, then the value's.
    pub fn with_transform(key: Pattern, value: Pattern, transform: F) -> Self {
        Self {
            key,
            value,
            strategy: MatchStrategy::default(),
            transform,
            _output: PhantomData,
        }
    }

    pub fn strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

impl<T, F> LinkParser for PatternQueryMatch<T, F>
where
    F: Fn(&Captures<'_>, &Captures<'_>) -> Option<T>,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor) -> Option<ParsedComponent<T>> {
        cursor
            .consume_query_if(|key, value| {
                let key_captures = self.key.captures(key, self.strategy)?;
                let value_captures = self.value.captures(value, self.strategy)?;
                (self.transform)(&key_captures, &value_captures)
            })
            .map(ParsedComponent::new)
    }

    fn kind(&self) -> ParserKind {
        ParserKind::new::<T>("PatternQueryMatch")
    }
}
