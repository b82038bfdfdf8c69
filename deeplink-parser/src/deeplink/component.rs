//! Parsed values handed out by parsers

use serde::{Deserialize, Serialize};

/// One successfully parsed value.
///
/// Serializes as the wrapped value, so a navigation layer can persist components directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedComponent<T> {
    value: T,
}

impl<T> ParsedComponent<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParsedComponent<U> {
        ParsedComponent::new(f(self.value))
    }
}

impl<T> From<T> for ParsedComponent<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
