//! The demo application's link grammar
//!
//! A destination is a name, a numeric id, an optional page and an optional color:
//!
//!     https://www.app.com/profile/42/page2?color=blue
//!
//! Name and id are required; page and color may be left out.

use deeplink_parser::{
    Captures, Cursor, EnumPathMatch, EnumQueryMatch, MatchStrategy, ParseError, ParserExt,
    Pattern, PatternPathMatch,
};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::str::FromStr;

static LETTERS: Lazy<Pattern> =
    Lazy::new(|| Pattern::new("[a-zA-Z]+").expect("letters pattern to compile"));
static NUMBER: Lazy<Pattern> =
    Lazy::new(|| Pattern::new("[0-9]+").expect("number pattern to compile"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Page1,
    Page2,
    Page3,
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page1" => Ok(Page::Page1),
            "page2" => Ok(Page::Page2),
            "page3" => Ok(Page::Page3),
            other => Err(format!("unknown page '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppColor {
    Red,
    Blue,
    Green,
}

impl FromStr for AppColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(AppColor::Red),
            "blue" => Ok(AppColor::Blue),
            "green" => Ok(AppColor::Green),
            other => Err(format!("unknown color '{}'", other)),
        }
    }
}

/// Where a link should take the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Destination {
    pub name: String,
    pub id: u64,
    pub page: Option<Page>,
    pub color: Option<AppColor>,
    pub fully_parsed: bool,
}

fn text(captures: &Captures<'_>) -> Option<String> {
    captures.get(0).map(|m| m.as_str().to_string())
}

fn number(captures: &Captures<'_>) -> Option<u64> {
    captures.get(0)?.as_str().parse().ok()
}

/// Run the grammar over a preprocessed cursor.
///
/// Leftover segments or query entries are an error unless `partial` is set.
pub fn parse_destination(
    cursor: Cursor,
    strategy: MatchStrategy,
    partial: bool,
) -> Result<Destination, ParseError> {
    let parsed = cursor.parse((
        PatternPathMatch::with_transform(Pattern::clone(&LETTERS), text).strategy(strategy),
        PatternPathMatch::with_transform(Pattern::clone(&NUMBER), number).strategy(strategy),
        EnumPathMatch::<Page>::new().optional(),
        EnumQueryMatch::<AppColor>::new("color").optional(),
    ))?;
    let parsed = if partial {
        parsed
    } else {
        parsed.ensure_fully_parsed()?
    };

    let fully_parsed = parsed.is_fully_parsed();
    let (_, (name, id, page, color)) = parsed.into_parts();
    Ok(Destination {
        name: name.into_value(),
        id: id.into_value(),
        page: page.into_value(),
        color: color.into_value(),
        fully_parsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use deeplink_parser::{LinkKind, Preprocessing};
    use rstest::rstest;

    fn cursor(path: &[&str], query: &[(&str, &str)]) -> Cursor {
        let mut cursor = Cursor::new(
            "https://www.app.com",
            LinkKind::Universal,
            path.iter().copied(),
            query.iter().copied(),
        );
        Preprocessing::default().apply(&mut cursor);
        cursor
    }

    #[test]
    fn parses_full_destination() {
        let destination = parse_destination(
            cursor(&["/", "profile", "42", "page2"], &[("color", "blue")]),
            MatchStrategy::Whole,
            false,
        )
        .unwrap();
        assert_eq!(
            destination,
            Destination {
                name: "profile".into(),
                id: 42,
                page: Some(Page::Page2),
                color: Some(AppColor::Blue),
                fully_parsed: true,
            }
        );
    }

    #[test]
    fn page_and_color_are_optional() {
        let destination =
            parse_destination(cursor(&["/", "profile", "7"], &[]), MatchStrategy::Whole, false)
                .unwrap();
        assert_eq!(destination.page, None);
        assert_eq!(destination.color, None);
    }

    #[rstest]
    #[case(&["/", "42"])]
    #[case(&["/", "profile"])]
    #[case(&["/", "profile", "x42"])]
    fn missing_required_parts_fail(#[case] path: &[&str]) {
        let err = parse_destination(cursor(path, &[]), MatchStrategy::Whole, false).unwrap_err();
        assert!(matches!(err, ParseError::UnableToParse { .. }));
    }

    #[test]
    fn leftovers_fail_unless_partial() {
        let link = cursor(&["/", "profile", "42", "extra"], &[("ref", "mail")]);
        let err = parse_destination(link.clone(), MatchStrategy::Whole, false).unwrap_err();
        assert!(matches!(err, ParseError::NotFullyParsed { .. }));

        let destination = parse_destination(link, MatchStrategy::Whole, true).unwrap();
        assert!(!destination.fully_parsed);
        assert_eq!(destination.id, 42);
    }

    #[test]
    fn strategy_applies_to_patterns() {
        let link = cursor(&["/", "profile1", "42abc"], &[]);
        assert!(parse_destination(link.clone(), MatchStrategy::Whole, false).is_err());
        let destination = parse_destination(link, MatchStrategy::Prefix, false).unwrap();
        assert_eq!(destination.name, "profile");
        assert_eq!(destination.id, 42);
    }

    #[test]
    fn serializes_lowercase_variants() {
        let json = serde_json::to_value(Destination {
            name: "profile".into(),
            id: 1,
            page: Some(Page::Page3),
            color: None,
            fully_parsed: true,
        })
        .unwrap();
        assert_eq!(json["page"], "page3");
        assert!(json["color"].is_null());
    }
}
