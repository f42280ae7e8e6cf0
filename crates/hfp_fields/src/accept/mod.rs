//! `Accept` (RFC 7231 §5.3.2).
//!
//! ```text
//! Accept        = #( media-range [ accept-params ] )
//! accept-params = weight *( accept-ext )
//! accept-ext    = OWS ";" OWS token [ "=" ( token / quoted-string ) ]
//! ```
//!
//! An empty value is valid and means "no preference stated".

use std::str::FromStr;

use hfp_parse::prelude::*;
use tracing::trace;

use crate::basics::{
    maybe_empty_comma_separated_list, optional_value_parameter_list, weight,
    OptionalValueParameters, QValue,
};
use crate::media_type::MediaType;

/// One media range with its weight and extensions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcceptItem {
    pub media_type: MediaType,
    /// `q` parameter, if given.
    pub weight: Option<QValue>,
    /// Extensions after the weight.
    pub accept_params: OptionalValueParameters,
}

impl AcceptItem {
    /// Stated weight, or `1` if none.
    pub fn effective_weight(&self) -> QValue {
        self.weight.unwrap_or_default()
    }
}

/// Value of an `Accept` field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Accept {
    /// Items in input order.
    pub items: Vec<AcceptItem>,
}

fn item() -> impl Producer<Output = AcceptItem> + Clone {
    produce::<AcceptItem, _>((
        MediaType::make_weight_aware_parser().to_field(|i: &mut AcceptItem| &mut i.media_type),
        maybe((
            weight().to_field(|i: &mut AcceptItem| &mut i.weight),
            optional_value_parameter_list().to_field(|i: &mut AcceptItem| &mut i.accept_params),
        )),
    ))
}

impl Accept {
    /// Canonical field name.
    pub const FIELD_NAME: &'static str = "accept";

    pub fn make_parser() -> impl Producer<Output = Accept> + Clone {
        produce::<Accept, _>((maybe_empty_comma_separated_list::<Vec<AcceptItem>, _>(item())
            .to_field(|a: &mut Accept| &mut a.items),))
    }

    pub fn try_parse(what: &str) -> Result<Accept, NoMatch> {
        trace!(input = what, "parsing Accept");
        try_parse(what, Self::make_parser())
    }

    /// Parse a whole `Accept: ...` line.
    pub fn try_parse_field(line: &str) -> Result<Accept, NoMatch> {
        try_parse_whole_field(line, Self::FIELD_NAME, Self::make_parser())
    }

    /// Items ordered by descending weight.
    ///
    /// Ties keep input order. Items with `q=0` are dropped.
    pub fn by_preference(&self) -> Vec<&AcceptItem> {
        let mut items: Vec<&AcceptItem> = self
            .items
            .iter()
            .filter(|item| item.effective_weight() > QValue::ZERO)
            .collect();
        items.sort_by_key(|item| std::cmp::Reverse(item.effective_weight()));
        items
    }

    /// Whether `media_type` is acceptable.
    ///
    /// An empty `Accept` accepts everything. Otherwise the most specific
    /// matching range decides, and `q=0` means refused.
    pub fn accepts(&self, media_type: &MediaType) -> bool {
        if self.items.is_empty() {
            return true;
        }
        self.items
            .iter()
            .filter(|item| item.media_type.matches(media_type))
            .max_by_key(|item| specificity(&item.media_type))
            .is_some_and(|item| item.effective_weight() > QValue::ZERO)
    }
}

/// `*/*` < `type/*` < `type/subtype`.
fn specificity(range: &MediaType) -> u8 {
    match (range.main_type.as_str(), range.subtype.as_str()) {
        ("*", _) => 0,
        (_, "*") => 1,
        _ => 2,
    }
}

impl FromStr for Accept {
    type Err = NoMatch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Accept::try_parse(s)
    }
}
