//! Entry points that run a grammar over a whole field value.
//!
//! A value parses only if the grammar matches and nothing but whitespace
//! follows the match.

use hfp_core::char_class::is_space;
use hfp_core::Cursor;
use tracing::{debug, trace};

use crate::combinator::produce;
use crate::entity::{ClauseList, Producer};
use crate::error::NoMatch;
use crate::producer::{caseless_literal, symbol};

/// Skip trailing whitespace and report whether the input is exhausted.
pub fn ensure_no_remaining_content(from: &mut Cursor<'_>) -> bool {
    from.skip_while(is_space);
    from.at_end()
}

/// Run `producer` over `from`; succeed only if the whole input is used.
pub fn try_parse<P: Producer>(from: &str, producer: P) -> Result<P::Output, NoMatch> {
    let mut cursor = Cursor::new(from);
    trace!(len = from.len(), "parsing field value");
    run_to_end(&mut cursor, &producer)
}

/// Run `clauses` against `T::default()` over the whole of `from`.
pub fn try_parse_clauses<T, L>(from: &str, clauses: L) -> Result<T, NoMatch>
where
    T: Default,
    L: ClauseList<T>,
{
    try_parse(from, produce::<T, L>(clauses))
}

/// Parse a complete header line: `field_name ":" OWS value OWS`.
///
/// The field name is matched without regard to case.
///
/// ```
/// use hfp_parse::prelude::*;
///
/// let value = try_parse_whole_field("Content-Type: text/html", "content-type", token());
/// assert!(value.is_err());
///
/// let value = try_parse_whole_field("X-Id:  abc ", "x-id", token());
/// assert_eq!(value, Ok("abc".to_owned()));
/// ```
pub fn try_parse_whole_field<P: Producer>(
    from: &str,
    field_name: &str,
    producer: P,
) -> Result<P::Output, NoMatch> {
    let mut cursor = Cursor::new(from);
    let named = caseless_literal(field_name)
        .try_parse(&mut cursor)
        .and_then(|()| symbol(':').try_parse(&mut cursor));
    if named.is_none() {
        debug!(field_name, "field name mismatch");
        return Err(NoMatch);
    }
    cursor.skip_while(is_space);
    run_to_end(&mut cursor, &producer)
}

fn run_to_end<P: Producer>(cursor: &mut Cursor<'_>, producer: &P) -> Result<P::Output, NoMatch> {
    let Some(value) = producer.try_parse(cursor) else {
        debug!(position = cursor.position(), "grammar did not match");
        return Err(NoMatch);
    };
    if !ensure_no_remaining_content(cursor) {
        debug!(position = cursor.position(), "trailing content after value");
        return Err(NoMatch);
    }
    Ok(value)
}

#[cfg(test)]
mod tests;
