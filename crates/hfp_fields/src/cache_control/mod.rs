//! `Cache-Control` (RFC 7234 §5.2).
//!
//! ```text
//! Cache-Control   = 1#cache-directive
//! cache-directive = token [ "=" ( token / quoted-string ) ]
//! ```
//!
//! Directive names are case-insensitive and stored lower-cased. When a
//! directive repeats, the first occurrence wins.

use std::collections::BTreeMap;
use std::str::FromStr;

use hfp_parse::prelude::*;
use tracing::trace;

use crate::basics::non_empty_comma_separated_list;

/// One directive: name and optional argument.
type Directive = (String, Option<String>);

/// Directives keyed by lower-cased name.
pub type Directives = BTreeMap<String, Option<String>>;

/// Value of a `Cache-Control` field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheControl {
    pub directives: Directives,
}

fn directive() -> impl Producer<Output = Directive> + Clone {
    produce::<Directive, _>((
        token()
            .transform(to_lower())
            .to_field(|d: &mut Directive| &mut d.0),
        maybe((
            delimiter('='),
            alternatives((
                token().to_field(|d: &mut Directive| &mut d.1),
                quoted_string().to_field(|d: &mut Directive| &mut d.1),
            )),
        )),
    ))
}

impl CacheControl {
    /// Canonical field name.
    pub const FIELD_NAME: &'static str = "cache-control";

    pub fn make_parser() -> impl Producer<Output = CacheControl> + Clone {
        produce::<CacheControl, _>((non_empty_comma_separated_list::<Directives, _>(directive())
            .to_field(|c: &mut CacheControl| &mut c.directives),))
    }

    pub fn try_parse(what: &str) -> Result<CacheControl, NoMatch> {
        trace!(input = what, "parsing Cache-Control");
        try_parse(what, Self::make_parser())
    }

    /// Parse a whole `Cache-Control: ...` line.
    pub fn try_parse_field(line: &str) -> Result<CacheControl, NoMatch> {
        try_parse_whole_field(line, Self::FIELD_NAME, Self::make_parser())
    }

    /// Whether directive `name` is present, with or without an argument.
    pub fn contains(&self, name: &str) -> bool {
        self.directives.contains_key(&name.to_ascii_lowercase())
    }

    /// Argument of directive `name`.
    ///
    /// `None` if the directive is absent, `Some(None)` if it has no argument.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.directives
            .get(&name.to_ascii_lowercase())
            .map(Option::as_deref)
    }

    /// `max-age` in seconds, if present and numeric.
    pub fn max_age(&self) -> Option<u64> {
        self.get("max-age")??.parse().ok()
    }
}

impl FromStr for CacheControl {
    type Err = NoMatch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CacheControl::try_parse(s)
    }
}

#[cfg(test)]
mod tests;
