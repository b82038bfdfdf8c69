//! Enum parsers
//!
//! An enum case is built in two steps: a transform turns the raw text into the enum's raw
//! value, then the raw value is converted into a case. String-backed enums implement
//! `FromStr` and use `new`; enums backed by other raw values implement `TryFrom<R>` and use
//! `with_raw` with a transform producing `R`.

use super::key::KeyMatcher;
use crate::deeplink::component::ParsedComponent;
use crate::deeplink::cursor::Cursor;
use crate::deeplink::parser::{LinkParser, ParserKind};
use std::str::FromStr;

fn raw_text(text: &str) -> Option<String> {
    Some(text.to_owned())
}

/// Parses one path segment into an enum case.
pub struct EnumPathMatch<E, R = String, F = fn(&str) -> Option<String>> {
    transform: F,
    construct: fn(R) -> Option<E>,
}

impl<E: FromStr> EnumPathMatch<E> {
    /// The segment is the raw value.
    pub fn new() -> Self {
        Self {
            transform: raw_text,
            construct: |raw| raw.parse().ok(),
        }
    }
}

impl<E: FromStr> Default for EnumPathMatch<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, R, F> EnumPathMatch<E, R, F>
where
    E: TryFrom<R>,
    F: Fn(&str) -> Option<R>,
{
    /// `transform` turns the segment into a raw value, if it can.
    pub fn with_raw(transform: F) -> Self {
        Self {
            transform,
            construct: |raw| E::try_from(raw).ok(),
        }
    }
}

impl<E, R, F> LinkParser for EnumPathMatch<E, R, F>
where
    F: Fn(&str) -> Option<R>,
{
    type Output = E;

    fn parse(&self, cursor: &mut Cursor) -> Option<ParsedComponent<E>> {
        cursor
            .consume_next_path_if(|next| (self.construct)((self.transform)(next)?))
            .map(ParsedComponent::new)
    }

    fn kind(&self) -> ParserKind {
        ParserKind::new::<E>("EnumPathMatch")
    }
}

/// Parses one query entry into an enum case.
///
/// Only entries whose key satisfies the [KeyMatcher] are considered; the first of them, in
/// insertion order, whose value builds a valid case is consumed.
pub struct EnumQueryMatch<E, R = String, F = fn(&str) -> Option<String>> {
    key: KeyMatcher,
    transform: F,
    construct: fn(R) -> Option<E>,
}

impl<E: FromStr> EnumQueryMatch<E> {
    /// The entry's value is the raw value.
    pub fn new(key: impl Into<KeyMatcher>) -> Self {
        Self {
            key: key.into(),
            transform: raw_text,
            construct: |raw| raw.parse().ok(),
        }
    }
}

impl<E, R, F> EnumQueryMatch<E, R, F>
where
    E: TryFrom<R>,
    F: Fn(&str) -> Option<R>,
{
    /// `transform` turns the entry's value into a raw value, if it can.
    pub fn with_raw(key: impl Into<KeyMatcher>, transform: F) -> Self {
        Self {
            key: key.into(),
            transform,
            construct: |raw| E::try_from(raw).ok(),
        }
    }
}

impl<E, R, F> LinkParser for EnumQueryMatch<E, R, F>
where
    F: Fn(&str) -> Option<R>,
{
    type Output = E;

    fn parse(&self, cursor: &mut Cursor) -> Option<ParsedComponent<E>> {
        cursor
            .consume_query_if(|key, value| {
                if !self.key.matches(key) {
                    return None;
                }
                (self.construct)((self.transform)(value)?)
            })
            .map(ParsedComponent::new)
    }

    fn kind(&self) -> ParserKind {
        ParserKind::new::<E>("EnumQueryMatch")
    }
}
