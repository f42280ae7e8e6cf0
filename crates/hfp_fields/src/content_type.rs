//! `Content-Type` (RFC 7231 §3.1.1.5).

use std::str::FromStr;

use hfp_parse::prelude::*;
use tracing::trace;

use crate::media_type::MediaType;

/// Value of a `Content-Type` field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentType {
    pub media_type: MediaType,
}

impl ContentType {
    /// Canonical field name.
    pub const FIELD_NAME: &'static str = "content-type";

    pub fn make_parser() -> impl Producer<Output = ContentType> + Clone {
        produce::<ContentType, _>((MediaType::make_parser()
            .to_field(|c: &mut ContentType| &mut c.media_type),))
    }

    pub fn try_parse(what: &str) -> Result<ContentType, NoMatch> {
        trace!(input = what, "parsing Content-Type");
        try_parse(what, Self::make_parser())
    }

    /// Parse a whole `Content-Type: ...` line.
    pub fn try_parse_field(line: &str) -> Result<ContentType, NoMatch> {
        try_parse_whole_field(line, Self::FIELD_NAME, Self::make_parser())
    }

    /// The `charset` parameter, if present.
    pub fn charset(&self) -> Option<&str> {
        self.media_type.parameter("charset")
    }

    /// The `boundary` parameter of a multipart body, if present.
    pub fn boundary(&self) -> Option<&str> {
        self.media_type.parameter("boundary")
    }
}

impl FromStr for ContentType {
    type Err = NoMatch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::try_parse(s)
    }
}
