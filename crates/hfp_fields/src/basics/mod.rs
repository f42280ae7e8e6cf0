//! Grammar pieces shared by several field values.
//!
//! # Grammar Reference (RFC 7230 §7, RFC 7231 §3.1.1.1, §5.3.1)
//!
//! ```text
//! 1#element   = *( "," OWS ) element *( OWS "," [ OWS element ] )
//! #element    = [ 1#element ]      ; also accepts a bare run of commas
//! parameter   = token "=" ( token / quoted-string )
//! weight      = OWS ";" OWS "q=" qvalue
//! qvalue      = ( "0" [ "." 0*3DIGIT ] ) / ( "1" [ "." 0*3("0") ] )
//! ```
//!
//! Lists accept empty elements (`a,,b`, a trailing `a,`) because RFC 7230
//! §7 requires recipients to.

use std::fmt;

use hfp_parse::prelude::*;
use hfp_parse::Accumulator;
use smallvec::SmallVec;

// === Comma-separated lists ===

/// `1#element`: one or more `element`s, collected into `C`.
pub fn non_empty_comma_separated_list<C, E>(element: E) -> impl Producer<Output = C> + Clone
where
    C: Default + Clone + Accumulator<E::Output>,
    E: Producer + Clone,
{
    produce::<C, _>((
        repeat(0, N, (delimiter(','), ows())),
        element.clone().to_container(),
        repeat(
            0,
            N,
            (ows(), delimiter(','), maybe((ows(), element.to_container()))),
        ),
    ))
}

/// `#element`: zero or more `element`s, collected into `C`.
///
/// Empty input, or input made only of commas and whitespace, yields an
/// empty `C`.
pub fn maybe_empty_comma_separated_list<C, E>(element: E) -> impl Producer<Output = C> + Clone
where
    C: Default + Clone + Accumulator<E::Output>,
    E: Producer + Clone,
{
    produce::<C, _>((alternatives((
        non_empty_comma_separated_list::<C, E>(element).as_result(),
        repeat(0, N, (delimiter(','), ows())),
    )),))
}

// === Quality values ===

/// A quality value in thousandths, `0` to `1000`.
///
/// Defaults to `1000`, the weight of an item that states none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
pub struct QValue(u16);

/// A number of thousandths above `1000`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("quality value {0} is above 1000 thousandths")]
pub struct QValueOutOfRange(pub u16);

impl QValue {
    /// `q=1`.
    pub const MAX: QValue = QValue(1000);
    /// `q=0`: not acceptable.
    pub const ZERO: QValue = QValue(0);

    /// A quality value of `thousandths / 1000`, or `None` above `1000`.
    pub const fn new(thousandths: u16) -> Option<QValue> {
        if thousandths <= 1000 {
            Some(QValue(thousandths))
        } else {
            None
        }
    }

    /// The value in thousandths.
    pub const fn as_thousandths(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for QValue {
    type Error = QValueOutOfRange;

    fn try_from(thousandths: u16) -> Result<Self, Self::Error> {
        QValue::new(thousandths).ok_or(QValueOutOfRange(thousandths))
    }
}

impl From<QValue> for u16 {
    fn from(q: QValue) -> u16 {
        q.0
    }
}

impl Default for QValue {
    fn default() -> Self {
        QValue::MAX
    }
}

/// Shortest decimal form: `1`, `0`, `0.5`, `0.25`, `0.001`.
impl fmt::Display for QValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1000 => f.write_str("1"),
            0 => f.write_str("0"),
            n => {
                let digits = format!("{n:03}");
                write!(f, "0.{}", digits.trim_end_matches('0'))
            }
        }
    }
}

/// Digits of a qvalue seen so far.
#[derive(Clone, Copy, Default)]
struct QValueDigits {
    thousandths: u16,
    /// Weight of the next fractional digit: 100, 10, 1, then 0.
    place: u16,
}

fn digit_value(c: char) -> u16 {
    c.to_digit(10)
        .and_then(|d| u16::try_from(d).ok())
        .unwrap_or(0)
}

/// `qvalue`.
pub fn qvalue() -> impl Producer<Output = QValue> + Clone {
    let fraction_start = || symbol('.').custom(|q: &mut QValueDigits, _| q.place = 100);

    produce::<QValueDigits, _>((alternatives((
        sequence((
            delimiter('0'),
            maybe((
                fraction_start(),
                repeat(
                    0,
                    3,
                    (digit().custom(|q: &mut QValueDigits, c: char| {
                        q.thousandths += digit_value(c) * q.place;
                        q.place /= 10;
                    }),),
                ),
            )),
        )),
        sequence((
            symbol('1').custom(|q: &mut QValueDigits, _| q.thousandths = 1000),
            maybe((fraction_start(), repeat(0, 3, (delimiter('0'),)))),
        )),
    )),))
    .transform(convert(|q: QValueDigits| QValue(q.thousandths)))
}

/// `weight`: `;q=` and a qvalue, with optional whitespace before and
/// after the semicolon. The `q` is case-insensitive.
pub fn weight() -> impl Producer<Output = QValue> + Clone {
    produce::<QValue, _>((
        ows(),
        delimiter(';'),
        ows(),
        caseless_symbol('q').skip(),
        delimiter('='),
        qvalue().as_result(),
    ))
}

// === Parameters ===

/// `name=value` with a lower-cased name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

/// `name[=value]` with a lower-cased name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionalValueParameter {
    pub name: String,
    pub value: Option<String>,
}

/// Parameters in input order. Duplicates are kept.
pub type Parameters = SmallVec<[Parameter; 2]>;

/// Parameters whose value may be absent, in input order.
pub type OptionalValueParameters = SmallVec<[OptionalValueParameter; 2]>;

/// `OWS ";" OWS token "=" ( token / quoted-string )`.
pub fn parameter() -> impl Producer<Output = Parameter> + Clone {
    produce::<Parameter, _>((
        ows(),
        delimiter(';'),
        ows(),
        token()
            .transform(to_lower())
            .to_field(|p: &mut Parameter| &mut p.name),
        delimiter('='),
        alternatives((
            token().to_field(|p: &mut Parameter| &mut p.value),
            quoted_string().to_field(|p: &mut Parameter| &mut p.value),
        )),
    ))
}

/// `OWS ";" OWS token [ "=" ( token / quoted-string ) ]`.
pub fn optional_value_parameter() -> impl Producer<Output = OptionalValueParameter> + Clone {
    produce::<OptionalValueParameter, _>((
        ows(),
        delimiter(';'),
        ows(),
        token()
            .transform(to_lower())
            .to_field(|p: &mut OptionalValueParameter| &mut p.name),
        maybe((
            delimiter('='),
            alternatives((
                token().to_field(|p: &mut OptionalValueParameter| &mut p.value),
                quoted_string().to_field(|p: &mut OptionalValueParameter| &mut p.value),
            )),
        )),
    ))
}

/// Zero or more [`parameter`]s.
pub fn parameter_list() -> impl Producer<Output = Parameters> + Clone {
    produce::<Parameters, _>((repeat(0, N, (parameter().to_container(),)),))
}

/// Zero or more [`optional_value_parameter`]s.
pub fn optional_value_parameter_list() -> impl Producer<Output = OptionalValueParameters> + Clone {
    produce::<OptionalValueParameters, _>((repeat(
        0,
        N,
        (optional_value_parameter().to_container(),),
    ),))
}

/// Value of the first parameter named `name`, ignoring case.
pub fn find_parameter<'p>(parameters: &'p [Parameter], name: &str) -> Option<&'p str> {
    parameters
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .map(|p| p.value.as_str())
}
