use pretty_assertions::assert_eq;

use super::*;
use crate::combinator::{maybe, repeat, N};
use crate::producer::{delimiter, quoted_string, token};

#[test]
fn ensure_no_remaining_content_allows_trailing_whitespace() {
    let mut cursor = Cursor::new(" \t ");
    assert!(ensure_no_remaining_content(&mut cursor));
    assert!(cursor.at_end());

    let mut cursor = Cursor::new("  x");
    assert!(!ensure_no_remaining_content(&mut cursor));
    assert_eq!(cursor.position(), 2);

    assert!(ensure_no_remaining_content(&mut Cursor::new("")));
}

#[test]
fn try_parse_requires_full_match() {
    assert_eq!(try_parse("token", token()), Ok("token".to_owned()));
    assert_eq!(try_parse("token  ", token()), Ok("token".to_owned()));
    assert_eq!(try_parse("token x", token()), Err(NoMatch));
    assert_eq!(try_parse("", token()), Err(NoMatch));
}

#[test]
fn try_parse_rejects_leading_whitespace() {
    assert_eq!(try_parse(" token", token()), Err(NoMatch));
}

#[test]
fn try_parse_reuses_grammar_by_reference() {
    let grammar = quoted_string();
    assert_eq!(try_parse("\"a\"", &grammar), Ok("a".to_owned()));
    assert_eq!(try_parse("\"b\"", &grammar), Ok("b".to_owned()));
}

#[test]
fn try_parse_clauses_builds_default_target() {
    let words: Result<Vec<String>, NoMatch> = try_parse_clauses(
        "a,b",
        (
            token().to_container(),
            repeat(0, N, (delimiter(','), token().to_container())),
        ),
    );
    assert_eq!(words, Ok(vec!["a".to_owned(), "b".to_owned()]));

    let words: Result<Vec<String>, NoMatch> =
        try_parse_clauses("a,", (token().to_container(), maybe((delimiter(';'),))));
    assert_eq!(words, Err(NoMatch));
}

// === Whole field ===

#[test]
fn whole_field_matches_name_case_insensitively() {
    assert_eq!(
        try_parse_whole_field("CACHE-control: no-cache", "cache-control", token()),
        Ok("no-cache".to_owned())
    );
    assert_eq!(
        try_parse_whole_field("cache-control:no-cache \t", "Cache-Control", token()),
        Ok("no-cache".to_owned())
    );
}

#[test]
fn whole_field_rejects_wrong_name_or_missing_colon() {
    assert_eq!(
        try_parse_whole_field("Pragma: no-cache", "cache-control", token()),
        Err(NoMatch)
    );
    assert_eq!(
        try_parse_whole_field("cache-control no-cache", "cache-control", token()),
        Err(NoMatch)
    );
    assert_eq!(
        try_parse_whole_field("cache-control : no-cache", "cache-control", token()),
        Err(NoMatch)
    );
    assert_eq!(
        try_parse_whole_field("cache-controls: x", "cache-control", token()),
        Err(NoMatch)
    );
}

#[test]
fn whole_field_value_must_be_complete() {
    assert_eq!(
        try_parse_whole_field("x-id: a b", "x-id", token()),
        Err(NoMatch)
    );
}
