//! Media types (`type/subtype; name=value`).
//!
//! ```text
//! media-type = type "/" subtype *( OWS ";" OWS parameter )
//! ```
//!
//! Type and subtype are case-insensitive and stored lower-cased.

use std::fmt;
use std::str::FromStr;

use hfp_parse::prelude::*;
use hfp_parse::Cursor;
use tracing::trace;

use crate::basics::{find_parameter, parameter, parameter_list, Parameters};

/// A parsed media type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaType {
    /// Top-level type, such as `text` or `*`.
    pub main_type: String,
    /// Subtype, such as `html` or `*`.
    pub subtype: String,
    /// Parameters in input order.
    pub parameters: Parameters,
}

impl MediaType {
    /// Grammar for a media type with any parameters.
    pub fn make_parser() -> impl Producer<Output = MediaType> + Clone {
        produce::<MediaType, _>((
            token()
                .transform(to_lower())
                .to_field(|m: &mut MediaType| &mut m.main_type),
            delimiter('/'),
            token()
                .transform(to_lower())
                .to_field(|m: &mut MediaType| &mut m.subtype),
            parameter_list().to_field(|m: &mut MediaType| &mut m.parameters),
        ))
    }

    /// Grammar for a media range inside `Accept`.
    ///
    /// Parameter collection stops in front of a `q` parameter, which starts
    /// the item's weight rather than belonging to the media type.
    pub fn make_weight_aware_parser() -> impl Producer<Output = MediaType> + Clone {
        produce::<MediaType, _>((
            token()
                .transform(to_lower())
                .to_field(|m: &mut MediaType| &mut m.main_type),
            delimiter('/'),
            token()
                .transform(to_lower())
                .to_field(|m: &mut MediaType| &mut m.subtype),
            repeat(
                0,
                N,
                (
                    not_clause((
                        ows(),
                        delimiter(';'),
                        ows(),
                        caseless_symbol('q').skip(),
                        ows(),
                        delimiter('='),
                    )),
                    parameter().custom(|m: &mut MediaType, p| m.parameters.push(p)),
                ),
            ),
        ))
    }

    /// Parse a media type, allowing only whitespace after it.
    pub fn try_parse(what: &str) -> Result<MediaType, NoMatch> {
        trace!(input = what, "parsing media type");
        try_parse(what, Self::make_parser())
    }

    /// `true` for `*/*`.
    pub fn is_wildcard(&self) -> bool {
        self.main_type == "*" && self.subtype == "*"
    }

    /// Whether `other` (a concrete media type) falls in this range.
    ///
    /// `*` matches any type or subtype; parameters are not compared.
    pub fn matches(&self, other: &MediaType) -> bool {
        let type_ok = self.main_type == "*" || self.main_type == other.main_type;
        let subtype_ok = self.subtype == "*" || self.subtype == other.subtype;
        type_ok && subtype_ok
    }

    /// Value of the first parameter named `name`, ignoring case.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        find_parameter(&self.parameters, name)
    }
}

impl FromStr for MediaType {
    type Err = NoMatch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaType::try_parse(s)
    }
}

/// `type/subtype;name=value`, quoting values that are not tokens.
impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.main_type, self.subtype)?;
        for p in &self.parameters {
            write!(f, ";{}=", p.name)?;
            write_value(f, &p.value)?;
        }
        Ok(())
    }
}

/// Write `value` as a token when it is one, otherwise as a quoted string.
pub(crate) fn write_value(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    let mut cursor = Cursor::new(value);
    if token().try_parse(&mut cursor).is_some() && cursor.at_end() {
        return f.write_str(value);
    }
    f.write_str("\"")?;
    for c in value.chars() {
        if c == '"' || c == '\\' {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("\"")
}
