use pretty_assertions::assert_eq;

use super::*;

fn directives(pairs: &[(&str, Option<&str>)]) -> Directives {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_owned(), value.map(str::to_owned)))
        .collect()
}

#[test]
fn parses_mixed_directives() {
    let cc = CacheControl::try_parse("max-age=5, no-transform, only-if-cached, min-fresh=20");
    assert_eq!(
        cc.map(|c| c.directives),
        Ok(directives(&[
            ("max-age", Some("5")),
            ("no-transform", None),
            ("only-if-cached", None),
            ("min-fresh", Some("20")),
        ]))
    );
}

#[test]
fn names_are_lowercased_values_are_not() {
    let cc = CacheControl::try_parse("Private=\"Set-Cookie, X-Id\", NO-CACHE");
    assert_eq!(
        cc.map(|c| c.directives),
        Ok(directives(&[
            ("private", Some("Set-Cookie, X-Id")),
            ("no-cache", None),
        ]))
    );
}

#[test]
fn first_duplicate_wins() {
    let cc = CacheControl::try_parse("max-age=5, MAX-AGE=10").unwrap_or_default();
    assert_eq!(cc.max_age(), Some(5));
    assert_eq!(cc.directives.len(), 1);
}

#[test]
fn tolerates_empty_list_elements() {
    let cc = CacheControl::try_parse(", no-store,, public ,").unwrap_or_default();
    assert!(cc.contains("no-store"));
    assert!(cc.contains("Public"));
    assert_eq!(cc.directives.len(), 2);
}

#[test]
fn rejects_empty_and_malformed() {
    for input in ["", ",", "max-age=", "max-age=5 public", "=5", "no-cache; x"] {
        assert_eq!(CacheControl::try_parse(input), Err(NoMatch), "input: {input:?}");
    }
}

#[test]
fn accessors() {
    let cc = CacheControl::try_parse("no-cache, max-age=abc").unwrap_or_default();
    assert_eq!(cc.get("no-cache"), Some(None));
    assert_eq!(cc.get("max-age"), Some(Some("abc")));
    assert_eq!(cc.get("s-maxage"), None);
    assert_eq!(cc.max_age(), None);
}

#[test]
fn whole_field_line() {
    let cc = CacheControl::try_parse_field("Cache-Control: no-store");
    assert_eq!(cc.map(|c| c.contains("no-store")), Ok(true));
    assert_eq!(CacheControl::try_parse_field("Pragma: no-cache"), Err(NoMatch));
}

#[test]
fn from_str() {
    let cc: Result<CacheControl, _> = "public".parse();
    assert!(cc.is_ok_and(|c| c.contains("public")));
}
