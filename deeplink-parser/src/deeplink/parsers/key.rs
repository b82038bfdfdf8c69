use crate::deeplink::matching::{MatchStrategy, Pattern};
use std::fmt;

/// Decides which query keys a query parser looks at.
pub enum KeyMatcher {
    /// The key equals this name.
    Exact(String),
    /// The key matches this pattern under the strategy.
    Pattern(Pattern, MatchStrategy),
    /// The closure accepts the key.
    Predicate(Box<dyn Fn(&str) -> bool + Send + Sync>),
}

impl KeyMatcher {
    pub fn exact(key: impl Into<String>) -> Self {
        KeyMatcher::Exact(key.into())
    }

    /// Whole-match the key against `pattern`.
    pub fn pattern(pattern: Pattern) -> Self {
        KeyMatcher::Pattern(pattern, MatchStrategy::Whole)
    }

    pub fn pattern_with(pattern: Pattern, strategy: MatchStrategy) -> Self {
        KeyMatcher::Pattern(pattern, strategy)
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        KeyMatcher::Predicate(Box::new(predicate))
    }

    pub fn matches(&self, key: &str) -> bool {
        match self {
            KeyMatcher::Exact(expected) => expected == key,
            KeyMatcher::Pattern(pattern, strategy) => pattern.is_match(key, *strategy),
            KeyMatcher::Predicate(predicate) => predicate(key),
        }
    }
}

impl fmt::Debug for KeyMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyMatcher::Exact(key) => f.debug_tuple("Exact").field(key).finish(),
            KeyMatcher::Pattern(pattern, strategy) => f
                .debug_tuple("Pattern")
                .field(&pattern.as_str())
                .field(strategy)
                .finish(),
            KeyMatcher::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<&str> for KeyMatcher {
    fn from(key: &str) -> Self {
        KeyMatcher::exact(key)
    }
}

impl From<String> for KeyMatcher {
    fn from(key: String) -> Self {
        KeyMatcher::Exact(key)
    }
}

impl From<Pattern> for KeyMatcher {
    fn from(pattern: Pattern) -> Self {
        KeyMatcher::pattern(pattern)
    }
}
