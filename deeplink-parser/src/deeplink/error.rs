//! Errors surfaced by top-level parsing

use super::cursor::Cursor;
use super::parser::ParserKind;

/// Why a link was not turned into a [ParsedLink](super::parsing::ParsedLink).
///
/// Both variants carry the cursor exactly as parsing left it, so callers can inspect what
/// was matched before giving up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Parsing succeeded but segments or query entries are left over.
    #[error("not fully parsed: {cursor}")]
    NotFullyParsed { cursor: Cursor },
    /// A top-level parser returned nothing.
    #[error("unable to parse: {cursor} with parser: {parser}")]
    UnableToParse { cursor: Cursor, parser: ParserKind },
}

impl ParseError {
    pub fn cursor(&self) -> &Cursor {
        match self {
            ParseError::NotFullyParsed { cursor } => cursor,
            ParseError::UnableToParse { cursor, .. } => cursor,
        }
    }

    pub fn into_cursor(self) -> Cursor {
        match self {
            ParseError::NotFullyParsed { cursor } => cursor,
            ParseError::UnableToParse { cursor, .. } => cursor,
        }
    }

    /// The parser that failed, for [ParseError::UnableToParse].
    pub fn parser(&self) -> Option<ParserKind> {
        match self {
            ParseError::NotFullyParsed { .. } => None,
            ParseError::UnableToParse { parser, .. } => Some(*parser),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deeplink::cursor::LinkKind;

    fn cursor() -> Cursor {
        Cursor::new(
            "app://more",
            LinkKind::SchemeBased,
            ["more"],
            Vec::<(String, String)>::new(),
        )
    }

    #[test]
    fn test_not_fully_parsed_display() {
        let err = ParseError::NotFullyParsed { cursor: cursor() };
        insta::assert_snapshot!(
            err,
            @r#"not fully parsed: Cursor(original: "app://more", kind: scheme-based, matched_path: [], unmatched_path: ["more"], matched_query: {}, unmatched_query: {})"#
        );
    }

    #[test]
    fn test_unable_to_parse_equality_is_kind_only() {
        let a = ParseError::UnableToParse {
            cursor: cursor(),
            parser: ParserKind::new::<String>("ExactMatch"),
        };
        let b = ParseError::UnableToParse {
            cursor: cursor(),
            parser: ParserKind::new::<String>("ExactMatch"),
        };
        let other = ParseError::UnableToParse {
            cursor: cursor(),
            parser: ParserKind::new::<u32>("ExactMatch"),
        };
        assert_eq!(a, b);
        assert_ne!(a, other);
        assert_eq!(a.parser().map(|p| p.name()), Some("ExactMatch"));
        assert_eq!(a.into_cursor(), cursor());
    }
}
