//! Property-based tests for the cursor and parser invariants

use deeplink_parser::{
    Cursor, EnumPathMatch, EnumQueryMatch, ExactMatch, Group, LinkKind, LinkParser, NoOp, ParserExt, Pattern,
    PatternPathMatch, PatternQueryMatch,
};
use once_cell::sync::Lazy;
use proptest::prelude::*;
use std::str::FromStr;

static LETTERS: Lazy<Pattern> = Lazy::new(|| Pattern::new("[a-c]+").unwrap());
static DIGITS: Lazy<Pattern> = Lazy::new(|| Pattern::new("[0-9]+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Letter {
    A,
    B,
}

impl FromStr for Letter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match s {
            "a" => Ok(Letter::A),
            "b" => Ok(Letter::B),
            _ => Err(()),
        }
    }
}

const PRIMITIVES: usize = 7;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[a-c]{1,3}", "[0-9]{1,3}", "[a-c0-9]{1,3}", Just("/".to_string()), Just(String::new())]
}

fn cursor_strategy() -> impl Strategy<Value = Cursor> {
    (
        prop::collection::vec(segment_strategy(), 0..6),
        prop::collection::vec(("[a-c]{1,2}", "[a-c0-9]{0,3}"), 0..4),
    )
        .prop_map(|(path, query)| Cursor::new("app://generated", LinkKind::SchemeBased, path, query))
}

/// Every primitive under test, boxed to a common output so they can be picked at random.
fn primitive(index: usize) -> Box<dyn LinkParser<Output = String>> {
    match index % PRIMITIVES {
        0 => Box::new(ExactMatch::new("a")),
        1 => Box::new(PatternPathMatch::new(Pattern::clone(&LETTERS))),
        2 => Box::new(PatternPathMatch::new(Pattern::clone(&DIGITS))),
        3 => Box::new(PatternQueryMatch::new(Pattern::clone(&LETTERS), Pattern::clone(&DIGITS))),
        4 => Box::new(EnumQueryMatch::<String>::new("b")),
        5 => Box::new(EnumPathMatch::<Letter>::new().map(|letter| format!("{:?}", letter))),
        _ => Box::new(NoOp.map(|()| String::new())),
    }
}

proptest! {
    #[test]
    fn failed_primitive_leaves_cursor_untouched(cursor in cursor_strategy(), index in 0..PRIMITIVES) {
        let mut after = cursor.clone();
        if primitive(index).parse(&mut after).is_none() {
            prop_assert_eq!(after, cursor);
        }
    }

    #[test]
    fn consumption_is_monotonic(cursor in cursor_strategy(), picks in prop::collection::vec(0..PRIMITIVES, 0..12)) {
        let total_path = cursor.matched_path().len() + cursor.unmatched_path().len();
        let total_query = cursor.matched_query().len() + cursor.unmatched_query().len();
        let mut cursor = cursor;
        for index in picks {
            let matched_before = cursor.matched_path().to_vec();
            let remaining_before = cursor.remaining();
            let parsed = primitive(index).parse(&mut cursor);

            prop_assert_eq!(cursor.matched_path().len() + cursor.unmatched_path().len(), total_path);
            prop_assert_eq!(cursor.matched_query().len() + cursor.unmatched_query().len(), total_query);
            prop_assert!(cursor.matched_path().starts_with(&matched_before));
            if parsed.is_some() {
                prop_assert_eq!(cursor.remaining() + 1, remaining_before);
            } else {
                prop_assert_eq!(cursor.remaining(), remaining_before);
            }
        }
    }

    #[test]
    fn filters_are_idempotent(cursor in cursor_strategy()) {
        let mut once = cursor.clone();
        once.filter_leading_slash();
        once.filter_empty_path();
        let mut twice = once.clone();
        twice.filter_leading_slash();
        twice.filter_empty_path();
        prop_assert_eq!(&twice, &once);
        prop_assert!(once.unmatched_path().iter().all(|s| *s != "/" && !s.is_empty()));
    }

    #[test]
    fn each_filter_is_idempotent(cursor in cursor_strategy()) {
        let mut slash = cursor.clone();
        slash.filter_leading_slash();
        let mut slash_twice = slash.clone();
        slash_twice.filter_leading_slash();
        prop_assert_eq!(&slash_twice, &slash);

        let mut empty = cursor;
        empty.filter_empty_path();
        let mut empty_twice = empty.clone();
        empty_twice.filter_empty_path();
        prop_assert_eq!(&empty_twice, &empty);
    }

    #[test]
    fn filters_commute(cursor in cursor_strategy()) {
        let mut slash_first = cursor.clone();
        slash_first.filter_leading_slash();
        slash_first.filter_empty_path();

        let mut empty_first = cursor;
        empty_first.filter_empty_path();
        empty_first.filter_leading_slash();
        prop_assert_eq!(slash_first, empty_first);
    }

    #[test]
    fn repeating_non_consuming_parser_fails(cursor in cursor_strategy()) {
        let mut after = cursor.clone();
        prop_assert!(NoOp.optional().repeated().parse(&mut after).is_none());
        prop_assert_eq!(after, cursor);
    }

    #[test]
    fn repetition_is_bounded_by_input(cursor in cursor_strategy()) {
        let mut after = cursor.clone();
        let remaining = cursor.remaining();
        let parser = PatternPathMatch::new(Pattern::clone(&LETTERS)).optional().repeated();
        if let Some(values) = parser.parse(&mut after) {
            let values = values.into_value();
            prop_assert!(!values.is_empty());
            prop_assert!(values.len() <= remaining);
            prop_assert_eq!(after.remaining() + values.len(), remaining);
        } else {
            prop_assert_eq!(after, cursor);
        }
    }

    #[test]
    fn atomic_group_is_all_or_nothing(cursor in cursor_strategy()) {
        let mut after = cursor.clone();
        let parser = Group::new((
            PatternPathMatch::new(Pattern::clone(&LETTERS)),
            PatternPathMatch::new(Pattern::clone(&DIGITS)),
        ))
        .atomic();
        match parser.parse(&mut after) {
            Some(_) => prop_assert_eq!(after.remaining() + 2, cursor.remaining()),
            None => prop_assert_eq!(after, cursor),
        }
    }
}
