//! Pattern adapter over the regex engine
//!
//! Parsers never talk to `regex` directly. They hold a [Pattern] and ask it for captures
//! under a [MatchStrategy]:
//!
//! - `Whole`: the expression must span the entire input
//! - `First`: the leftmost match anywhere in the input
//! - `Prefix`: a match that starts at the beginning of the input
//!
//! The anchored variants are compiled once, next to the unanchored expression, so picking a
//! strategy at parse time costs nothing.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use regex::Captures;

/// How a [Pattern] is applied to an input string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    #[default]
    Whole,
    First,
    Prefix,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStrategy::Whole => write!(f, "whole"),
            MatchStrategy::First => write!(f, "first"),
            MatchStrategy::Prefix => write!(f, "prefix"),
        }
    }
}

impl std::str::FromStr for MatchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "whole" => Ok(MatchStrategy::Whole),
            "first" => Ok(MatchStrategy::First),
            "prefix" => Ok(MatchStrategy::Prefix),
            other => Err(format!(
                "unknown match strategy '{}', expected one of: whole, first, prefix",
                other
            )),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid pattern `{pattern}`: {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A compiled expression usable under any [MatchStrategy].
///
/// Cloning is cheap: the compiled programs are shared.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    first: Regex,
    prefix: Regex,
    whole: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let compile = |expression: &str| {
            Regex::new(expression).map_err(|source| PatternError::Invalid {
                pattern: pattern.to_string(),
                source,
            })
        };
        Ok(Self {
            source: pattern.to_string(),
            first: compile(pattern)?,
            prefix: compile(&format!(r"\A(?:{})", pattern))?,
            whole: compile(&format!(r"\A(?:{})\z", pattern))?,
        })
    }

    /// The expression as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn captures<'h>(&self, haystack: &'h str, strategy: MatchStrategy) -> Option<Captures<'h>> {
        self.regex(strategy).captures(haystack)
    }

    pub fn is_match(&self, haystack: &str, strategy: MatchStrategy) -> bool {
        self.regex(strategy).is_match(haystack)
    }

    fn regex(&self, strategy: MatchStrategy) -> &Regex {
        match strategy {
            MatchStrategy::Whole => &self.whole,
            MatchStrategy::First => &self.first,
            MatchStrategy::Prefix => &self.prefix,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.source)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = PatternError;

    fn try_from(pattern: &str) -> Result<Self, Self::Error> {
        Pattern::new(pattern)
    }
}

/// Text of the whole match.
pub(crate) fn matched_text(captures: &Captures<'_>) -> Option<String> {
    captures.get(0).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn digits() -> Pattern {
        Pattern::new("[0-9]+").unwrap()
    }

    #[rstest]
    #[case("0123", MatchStrategy::Whole, Some("0123"))]
    #[case("abc0123abc", MatchStrategy::Whole, None)]
    #[case("0123abc", MatchStrategy::Whole, None)]
    #[case("abc0123abc", MatchStrategy::First, Some("0123"))]
    #[case("0123abc", MatchStrategy::Prefix, Some("0123"))]
    #[case("abc0123", MatchStrategy::Prefix, None)]
    #[case("abc", MatchStrategy::First, None)]
    fn test_strategies(
        #[case] input: &str,
        #[case] strategy: MatchStrategy,
        #[case] expected: Option<&str>,
    ) {
        let found = digits()
            .captures(input, strategy)
            .and_then(|c| matched_text(&c));
        assert_eq!(found.as_deref(), expected);
        assert_eq!(digits().is_match(input, strategy), expected.is_some());
    }

    #[test]
    fn test_whole_match_respects_alternation() {
        // Without grouping, `\A` would only bind to the first alternative.
        let pattern = Pattern::new("a|ab").unwrap();
        assert!(pattern.is_match("ab", MatchStrategy::Whole));
        assert!(!pattern.is_match("abc", MatchStrategy::Whole));
    }

    #[test]
    fn test_capture_groups_survive_anchoring() {
        let pattern = Pattern::new(r"(?P<name>[a-z]+)-(\d+)").unwrap();
        let captures = pattern.captures("item-7", MatchStrategy::Whole).unwrap();
        assert_eq!(&captures["name"], "item");
        assert_eq!(&captures[2], "7");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Pattern::new("(a").unwrap_err();
        assert!(err.to_string().starts_with("invalid pattern `(a`"));
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("prefix".parse::<MatchStrategy>(), Ok(MatchStrategy::Prefix));
        assert!("longest".parse::<MatchStrategy>().is_err());
    }

    #[test]
    fn test_default_strategy_is_whole() {
        assert_eq!(MatchStrategy::default(), MatchStrategy::Whole);
    }
}
