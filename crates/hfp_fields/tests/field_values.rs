//! Field values as they arrive in real requests.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use hfp_fields::{Accept, CacheControl, ContentType, Directives, MediaType};
use hfp_parse::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn cache_control_directive_map() {
    hfp_parse::init_tracing();

    let cc = CacheControl::try_parse("max-age=5, no-transform, only-if-cached, min-fresh=20")
        .unwrap();
    let expected: Directives = [
        ("max-age", Some("5")),
        ("no-transform", None),
        ("only-if-cached", None),
        ("min-fresh", Some("20")),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v.map(str::to_owned)))
    .collect();
    assert_eq!(cc.directives, expected);
    assert_eq!(cc.directives.len(), 4);
}

#[test]
fn content_type_trailing_garbage_fails() {
    assert_eq!(
        ContentType::try_parse("multipart/form-data; boundary=---12345; bla-bla-bla"),
        Err(NoMatch)
    );
    let ok = ContentType::try_parse("multipart/form-data; boundary=---12345  ").unwrap();
    assert_eq!(ok.boundary(), Some("---12345"));
}

#[test]
fn browser_accept_header() {
    let accept = Accept::try_parse_field(
        "Accept: text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
    )
    .unwrap();
    assert_eq!(accept.items.len(), 6);

    let best: Vec<String> = accept
        .by_preference()
        .iter()
        .map(|i| i.media_type.to_string())
        .collect();
    assert_eq!(
        best,
        vec![
            "text/html",
            "application/xhtml+xml",
            "image/avif",
            "image/webp",
            "application/xml",
            "*/*",
        ]
    );
    assert!(accept.accepts(&"image/png".parse::<MediaType>().unwrap()));
}

#[test]
fn grammars_embed_in_larger_grammars() {
    // `type/subtype` pairs separated by `|`, reusing the media-type grammar.
    let grammar = separated_list::<Vec<MediaType>, _, _>(symbol('|'), MediaType::make_parser());
    let parsed = try_parse("text/html|image/png; x=1", grammar).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[1].parameter("x"), Some("1"));
}

#[test]
fn parsers_are_reusable_values() {
    let parser = CacheControl::make_parser();
    for input in ["no-cache", "public, max-age=1", "private=\"a\""] {
        assert!(try_parse(input, &parser).is_ok(), "input: {input:?}");
    }
}
