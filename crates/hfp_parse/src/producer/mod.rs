//! Built-in producers for the RFC 7230 lexical primitives.
//!
//! ```text
//! token          = 1*tchar
//! quoted-string  = DQUOTE *( qdtext / quoted-pair ) DQUOTE
//! OWS            = *( SP / HTAB )
//! ```
//!
//! Every producer here leaves the cursor untouched when it fails.

use hfp_core::case_fold::eq_ignore_case;
use hfp_core::char_class::{
    is_digit, is_qdtext, is_quoted_pair_char, is_space, is_tchar, BACKSLASH, DQUOTE,
};
use hfp_core::Cursor;
use tracing::trace;

use crate::consumer::{ConsumeClause, Skip};
use crate::entity::Producer;

/// Matches one exact ASCII byte and yields it as a `char`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolProducer {
    expected: Option<u8>,
}

impl Producer for SymbolProducer {
    type Output = char;

    #[inline]
    fn try_parse(&self, from: &mut Cursor<'_>) -> Option<char> {
        let b = from.next_byte()?;
        if Some(b) == self.expected {
            Some(char::from(b))
        } else {
            from.unget();
            None
        }
    }
}

/// Matches one ASCII digit and yields it as a `char`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DigitProducer;

impl Producer for DigitProducer {
    type Output = char;

    #[inline]
    fn try_parse(&self, from: &mut Cursor<'_>) -> Option<char> {
        let b = from.next_byte()?;
        if is_digit(b) {
            Some(char::from(b))
        } else {
            from.unget();
            None
        }
    }
}

/// Matches one ASCII byte, ignoring case, and yields it as read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaselessSymbol {
    expected: Option<u8>,
}

impl Producer for CaselessSymbol {
    type Output = char;

    #[inline]
    fn try_parse(&self, from: &mut Cursor<'_>) -> Option<char> {
        let b = from.next_byte()?;
        match self.expected {
            Some(expected) if eq_ignore_case(b, expected) => Some(char::from(b)),
            _ => {
                from.unget();
                None
            }
        }
    }
}

/// Matches a fixed ASCII string, ignoring case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaselessLiteral<'s> {
    text: &'s str,
}

impl Producer for CaselessLiteral<'_> {
    type Output = ();

    fn try_parse(&self, from: &mut Cursor<'_>) -> Option<()> {
        let mut tx = from.begin();
        for &expected in self.text.as_bytes() {
            if !eq_ignore_case(tx.next_byte()?, expected) {
                return None;
            }
        }
        tx.commit();
        Some(())
    }
}

/// `1*tchar`, yielded verbatim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenProducer;

impl Producer for TokenProducer {
    type Output = String;

    fn try_parse(&self, from: &mut Cursor<'_>) -> Option<String> {
        let mut tx = from.begin();
        let start = tx.mark();
        if tx.skip_while(is_tchar) == 0 {
            return None;
        }
        let token = tx.slice_from(start)?.to_owned();
        tx.commit();
        Some(token)
    }
}

/// A quoted string, yielded without the quotes and with escapes removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuotedStringProducer;

impl Producer for QuotedStringProducer {
    type Output = String;

    fn try_parse(&self, from: &mut Cursor<'_>) -> Option<String> {
        let mut tx = from.begin();
        if tx.next_byte()? != DQUOTE {
            return None;
        }

        let mut value = Vec::new();
        loop {
            match tx.next_byte()? {
                DQUOTE => break,
                BACKSLASH => {
                    let escaped = tx.next_byte()?;
                    if !is_quoted_pair_char(escaped) {
                        trace!(byte = escaped, "invalid quoted-pair");
                        return None;
                    }
                    value.push(escaped);
                }
                b if is_qdtext(b) => value.push(b),
                b => {
                    trace!(byte = b, "invalid byte in quoted string");
                    return None;
                }
            }
        }

        // Escapes only ever drop a backslash in front of a whole byte, so a
        // valid UTF-8 input stays valid; this only rejects split sequences.
        let value = String::from_utf8(value).ok()?;
        tx.commit();
        Some(value)
    }
}

/// `OWS`. Always succeeds.
///
/// Yields `Some(' ')` if any whitespace was consumed, `None` otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OwsProducer;

impl Producer for OwsProducer {
    type Output = Option<char>;

    #[inline]
    fn try_parse(&self, from: &mut Cursor<'_>) -> Option<Option<char>> {
        Some((from.skip_while(is_space) > 0).then_some(' '))
    }
}

fn ascii_byte(c: char) -> Option<u8> {
    u8::try_from(c).ok().filter(u8::is_ascii)
}

/// Exactly `c`. A non-ASCII `c` never matches.
pub fn symbol(c: char) -> SymbolProducer {
    SymbolProducer {
        expected: ascii_byte(c),
    }
}

/// One of `0`-`9`.
pub fn digit() -> DigitProducer {
    DigitProducer
}

/// `c` in either case. A non-ASCII `c` never matches.
pub fn caseless_symbol(c: char) -> CaselessSymbol {
    CaselessSymbol {
        expected: ascii_byte(c),
    }
}

/// `text` in any mix of case.
pub fn caseless_literal(text: &str) -> CaselessLiteral<'_> {
    CaselessLiteral { text }
}

/// An RFC 7230 token.
pub fn token() -> TokenProducer {
    TokenProducer
}

/// An RFC 7230 quoted string.
pub fn quoted_string() -> QuotedStringProducer {
    QuotedStringProducer
}

/// Optional whitespace.
pub fn optional_whitespace() -> OwsProducer {
    OwsProducer
}

/// Clause matching exactly `c` and discarding it.
pub fn delimiter(c: char) -> ConsumeClause<SymbolProducer, Skip> {
    symbol(c).skip()
}

/// Clause skipping optional whitespace. Always succeeds.
pub fn ows() -> ConsumeClause<OwsProducer, Skip> {
    optional_whitespace().skip()
}
