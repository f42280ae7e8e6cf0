//! ASCII case folding through a 256-entry lookup table.
//!
//! Field names, media types and directive names are case-insensitive. The
//! table maps `A`-`Z` to `a`-`z` and every other byte to itself, so folding
//! never changes the length of a string or touches non-ASCII bytes.

/// Lower-casing table, indexed by byte value.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
pub static TO_LOWER: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = (i as u8).to_ascii_lowercase();
        i += 1;
    }
    table
};

/// Fold a single byte.
#[inline]
pub fn to_lower(b: u8) -> u8 {
    TO_LOWER[usize::from(b)]
}

/// Compare two bytes case-insensitively.
#[inline]
pub fn eq_ignore_case(a: u8, b: u8) -> bool {
    to_lower(a) == to_lower(b)
}

/// Fold every byte of `text`, reusing its buffer.
pub fn fold(text: String) -> String {
    let mut bytes = text.into_bytes();
    for b in &mut bytes {
        *b = to_lower(*b);
    }
    // Only ASCII letters change and they map to ASCII letters, so the
    // buffer is still valid UTF-8.
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}
