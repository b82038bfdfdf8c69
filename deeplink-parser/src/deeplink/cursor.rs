//! Consumption state of a single link
//!
//!     A cursor is created once from a decomposed link and then mutated by parsers. Every
//!     path segment and query entry starts out unmatched and moves to matched at most once.
//!     Nothing ever moves back, so `matched + unmatched` stays equal to the original
//!     decomposition for the whole life of the cursor.
//!
//!     The unmatched path is stored reversed so the next segment to consume is at the end of
//!     the vector and consuming it is a `pop`. Accessors hand it back in forward order.
//!
//!     Query entries live in a [QueryMap], which keeps insertion order. When more than one
//!     entry satisfies a predicate, the earliest inserted one is consumed.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use tracing::trace;

/// How the link reached the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
    /// E.g. `https://www.app.com/path/to/page`
    Universal,
    /// E.g. `com.app://path/to/page`
    SchemeBased,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkKind::Universal => write!(f, "universal"),
            LinkKind::SchemeBased => write!(f, "scheme-based"),
        }
    }
}

/// Insertion-ordered query parameters with unique keys.
///
/// Inserting an existing key replaces its value in place. Equality ignores order, like any
/// other map.
#[derive(Debug, Clone, Default, Eq)]
pub struct QueryMap {
    entries: Vec<(String, String)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace, returning the previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn take_at(&mut self, index: usize) -> (String, String) {
        self.entries.remove(index)
    }
}

impl PartialEq for QueryMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = QueryMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl Serialize for QueryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl fmt::Display for QueryMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {:?}", key, value)?;
        }
        write!(f, "}}")
    }
}

/// The consumption state of one link.
///
/// A plain value: cloning it duplicates the whole state and no two cursors share storage.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Cursor {
    original: String,
    kind: LinkKind,
    /// Reversed: the next segment to match is the last element.
    #[serde(serialize_with = "serialize_reversed")]
    unmatched_path: Vec<String>,
    matched_path: Vec<String>,
    unmatched_query: QueryMap,
    matched_query: QueryMap,
}

fn serialize_reversed<S: Serializer>(path: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(path.iter().rev())
}

impl Cursor {
    /// Create a cursor from a decomposed link.
    ///
    /// `path` is given in forward order, exactly as the link spells it. For scheme-based
    /// links the host is expected to be the first segment.
    pub fn new<P, Q, K, V>(original: impl Into<String>, kind: LinkKind, path: P, query: Q) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        Q: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut unmatched_path: Vec<String> = path.into_iter().map(Into::into).collect();
        unmatched_path.reverse();
        Cursor {
            original: original.into(),
            kind,
            unmatched_path,
            matched_path: Vec::new(),
            unmatched_query: query.into_iter().collect(),
            matched_query: QueryMap::new(),
        }
    }

    /// The full link this cursor was created from.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    /// The segment that would be consumed next, without consuming it.
    pub fn next_path(&self) -> Option<&str> {
        self.unmatched_path.last().map(String::as_str)
    }

    /// Segments still to match, in forward order.
    pub fn unmatched_path(&self) -> Vec<&str> {
        self.unmatched_path.iter().rev().map(String::as_str).collect()
    }

    /// Segments already matched, in the order they were consumed.
    pub fn matched_path(&self) -> &[String] {
        &self.matched_path
    }

    pub fn unmatched_query(&self) -> &QueryMap {
        &self.unmatched_query
    }

    pub fn matched_query(&self) -> &QueryMap {
        &self.matched_query
    }

    /// Number of path segments and query entries not matched yet.
    ///
    /// Strictly decreases on every consumption, so comparing it before and after a parser
    /// call tells whether the call made progress.
    pub fn remaining(&self) -> usize {
        self.unmatched_path.len() + self.unmatched_query.len()
    }

    /// True when no path segment and no query entry is left to match.
    pub fn is_fully_parsed(&self) -> bool {
        self.unmatched_path.is_empty() && self.unmatched_query.is_empty()
    }

    /// Consume the next segment if `transform` accepts it.
    ///
    /// On `Some`, the untransformed segment moves to the matched path and the transformed
    /// value is returned. On `None` the cursor is left as it was.
    pub fn consume_next_path_if<T, F>(&mut self, transform: F) -> Option<T>
    where
        F: FnOnce(&str) -> Option<T>,
    {
        let value = transform(self.next_path()?)?;
        if let Some(segment) = self.unmatched_path.pop() {
            trace!(segment = %segment, "consumed path segment");
            self.matched_path.push(segment);
        }
        Some(value)
    }

    /// Consume the first query entry, in insertion order, that `transform` accepts.
    ///
    /// Only that one entry moves to the matched query. When no entry is accepted the
    /// cursor is left as it was.
    pub fn consume_query_if<T, F>(&mut self, mut transform: F) -> Option<T>
    where
        F: FnMut(&str, &str) -> Option<T>,
    {
        let (index, value) = self
            .unmatched_query
            .iter()
            .enumerate()
            .find_map(|(index, (key, value))| transform(key, value).map(|t| (index, t)))?;
        let (key, raw) = self.unmatched_query.take_at(index);
        trace!(key = %key, value = %raw, "consumed query entry");
        self.matched_query.insert(key, raw);
        Some(value)
    }

    /// Drop root segments (`"/"`) left behind by naive path splitting.
    pub fn filter_leading_slash(&mut self) {
        let before = self.unmatched_path.len();
        self.unmatched_path.retain(|segment| segment != "/");
        trace!(removed = before - self.unmatched_path.len(), "filtered slash segments");
    }

    /// Drop empty segments.
    pub fn filter_empty_path(&mut self) {
        let before = self.unmatched_path.len();
        self.unmatched_path.retain(|segment| !segment.is_empty());
        trace!(removed = before - self.unmatched_path.len(), "filtered empty segments");
    }

    /// [Cursor::filter_leading_slash] by value, for chaining.
    pub fn without_leading_slash(mut self) -> Self {
        self.filter_leading_slash();
        self
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cursor(original: {:?}, kind: {}, matched_path: {:?}, unmatched_path: {:?}, matched_query: {}, unmatched_query: {})",
            self.original,
            self.kind,
            self.matched_path,
            self.unmatched_path(),
            self.matched_query,
            self.unmatched_query,
        )
    }
}
