//! RFC 7230 byte classes.
//!
//! Every byte value maps to a [`CharClass`] set, computed once at compile
//! time into a 256-entry table. Classification is a single indexed read.
//!
//! # Grammar Reference (RFC 7230 §3.2.6, RFC 5234 Appendix B.1)
//!
//! ```text
//! tchar          = "!" / "#" / "$" / "%" / "&" / "'" / "*"
//!                / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
//!                / DIGIT / ALPHA
//! qdtext         = HTAB / SP / %x21 / %x23-5B / %x5D-7E / obs-text
//! quoted-pair    = "\" ( HTAB / SP / VCHAR / obs-text )
//! obs-text       = %x80-FF
//! VCHAR          = %x21-7E
//! OWS            = *( SP / HTAB )
//! ```

use bitflags::bitflags;

/// Space.
pub const SP: u8 = b' ';
/// Horizontal tab.
pub const HTAB: u8 = b'\t';
/// Double quote, delimiting quoted strings.
pub const DQUOTE: u8 = b'"';
/// Backslash, introducing a quoted-pair.
pub const BACKSLASH: u8 = b'\\';

bitflags! {
    /// Lexical categories a byte belongs to.
    ///
    /// A byte can be in several categories at once: `a` is `ALPHA`,
    /// `TCHAR`, `QDTEXT` and `VCHAR`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct CharClass: u8 {
        /// `SP` or `HTAB`.
        const WHITESPACE = 1 << 0;
        /// `0`-`9`.
        const DIGIT = 1 << 1;
        /// `A`-`Z`, `a`-`z`.
        const ALPHA = 1 << 2;
        /// Token constituent.
        const TCHAR = 1 << 3;
        /// Allowed unescaped inside a quoted string.
        const QDTEXT = 1 << 4;
        /// Visible (printing) ASCII.
        const VCHAR = 1 << 5;
        /// Obsolete non-ASCII text, `0x80`-`0xFF`.
        const OBS_TEXT = 1 << 6;
    }
}

impl CharClass {
    /// Bytes allowed after a backslash in a quoted-pair.
    pub const QUOTED_PAIR: Self = Self::WHITESPACE
        .union(Self::VCHAR)
        .union(Self::OBS_TEXT);
}

const fn classify(b: u8) -> CharClass {
    let mut class = CharClass::empty();
    if b == SP || b == HTAB {
        class = class.union(CharClass::WHITESPACE);
    }
    if b.is_ascii_digit() {
        class = class.union(CharClass::DIGIT);
    }
    if b.is_ascii_alphabetic() {
        class = class.union(CharClass::ALPHA);
    }
    if b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
    {
        class = class.union(CharClass::TCHAR);
    }
    if matches!(b, 0x21..=0x7E) {
        class = class.union(CharClass::VCHAR);
    }
    if b >= 0x80 {
        class = class.union(CharClass::OBS_TEXT);
    }
    if b == SP || b == HTAB || b == 0x21 || matches!(b, 0x23..=0x5B | 0x5D..=0x7E) || b >= 0x80 {
        class = class.union(CharClass::QDTEXT);
    }
    class
}

/// 256-entry classification table, indexed by byte value.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static CLASS_TABLE: [CharClass; 256] = {
    let mut table = [CharClass::empty(); 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = classify(i as u8);
        i += 1;
    }
    table
};

/// All categories `b` belongs to.
#[inline]
pub fn class_of(b: u8) -> CharClass {
    CLASS_TABLE[usize::from(b)]
}

/// `SP` or `HTAB`.
#[inline]
pub fn is_space(b: u8) -> bool {
    class_of(b).contains(CharClass::WHITESPACE)
}

/// ASCII decimal digit.
#[inline]
pub fn is_digit(b: u8) -> bool {
    class_of(b).contains(CharClass::DIGIT)
}

/// Token constituent (`tchar`).
#[inline]
pub fn is_tchar(b: u8) -> bool {
    class_of(b).contains(CharClass::TCHAR)
}

/// Allowed unescaped inside a quoted string (`qdtext`).
#[inline]
pub fn is_qdtext(b: u8) -> bool {
    class_of(b).contains(CharClass::QDTEXT)
}

/// Visible ASCII (`VCHAR`).
#[inline]
pub fn is_vchar(b: u8) -> bool {
    class_of(b).contains(CharClass::VCHAR)
}

/// `obs-text`.
#[inline]
pub fn is_obs_text(b: u8) -> bool {
    class_of(b).contains(CharClass::OBS_TEXT)
}

/// Allowed as the escaped byte of a `quoted-pair`.
#[inline]
pub fn is_quoted_pair_char(b: u8) -> bool {
    class_of(b).intersects(CharClass::QUOTED_PAIR)
}
