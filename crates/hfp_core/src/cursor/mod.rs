//! Byte cursor over a borrowed field value.
//!
//! The cursor never copies or mutates the input. All run state is a single
//! byte offset, which makes positions cheap to save ([`Mark`]) and restore.
//!
//! # Backtracking
//!
//! Two styles are available:
//!
//! - Manual: [`Cursor::mark`] / [`Cursor::reset_to`].
//! - Scoped: [`Cursor::begin`] returns a [`Transaction`] that restores the
//!   starting position when dropped, unless [`Transaction::commit`] was
//!   called first.
//!
//! ```
//! use hfp_core::Cursor;
//!
//! let mut cursor = Cursor::new("ab");
//! {
//!     let mut tx = cursor.begin();
//!     assert_eq!(tx.next_byte(), Some(b'a'));
//!     // dropped without commit: rolled back
//! }
//! assert_eq!(cursor.position(), 0);
//!
//! let mut tx = cursor.begin();
//! assert_eq!(tx.next_byte(), Some(b'a'));
//! tx.commit();
//! assert_eq!(cursor.position(), 1);
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};

/// Opaque saved position of a [`Cursor`].
///
/// Only meaningful for the cursor (or a cursor over the same input) that
/// produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mark(usize);

impl Mark {
    /// Byte offset this mark refers to.
    #[inline]
    pub fn offset(self) -> usize {
        self.0
    }
}

/// Read-only cursor over a field value.
///
/// # Invariant
///
/// `pos <= text.len()` at all times.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

/// Size assertion: a cursor is a fat pointer plus an offset.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at offset 0.
    pub fn new(text: &'a str) -> Self {
        Cursor { text, pos: 0 }
    }

    /// Returns the byte at the current offset and advances past it.
    ///
    /// Returns `None` at end of input; the offset does not move in that case.
    #[inline]
    pub fn next_byte(&mut self) -> Option<u8> {
        let b = *self.text.as_bytes().get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    /// Returns the byte at the current offset without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Move back by one byte. No-op at offset 0.
    ///
    /// Undoes a [`next_byte`](Self::next_byte) that returned `Some`.
    #[inline]
    pub fn unget(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// Save the current position.
    #[inline]
    pub fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    /// Restore a position saved with [`mark`](Self::mark).
    ///
    /// A mark past the end of the input is ignored.
    #[inline]
    pub fn reset_to(&mut self, mark: Mark) {
        if mark.0 <= self.text.len() {
            self.pos = mark.0;
        }
    }

    /// Returns `true` if every byte has been consumed.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Length of the input in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Bytes from the current offset to the end.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        self.text.as_bytes().get(self.pos..).unwrap_or_default()
    }

    /// Text between `start` and the current offset.
    ///
    /// Returns `None` if `start` is ahead of the cursor or either end falls
    /// inside a multi-byte character.
    pub fn slice_from(&self, start: Mark) -> Option<&'a str> {
        self.text.get(start.0..self.pos)
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// Returns the number of bytes consumed.
    pub fn skip_while(&mut self, mut pred: impl FnMut(u8) -> bool) -> usize {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    /// Open a scoped backtracking guard at the current position.
    ///
    /// The guard dereferences to this cursor. Dropping it without calling
    /// [`Transaction::commit`] restores the position it was opened at.
    #[inline]
    pub fn begin(&mut self) -> Transaction<'_, 'a> {
        let started_at = self.mark();
        Transaction {
            cursor: self,
            started_at,
            committed: false,
        }
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("len", &self.text.len())
            .finish()
    }
}

/// Scoped backtracking guard.
///
/// Created by [`Cursor::begin`]. Rolls the cursor back to the opening
/// position on drop unless committed, so early returns and panics leave
/// the cursor where it started.
#[must_use = "dropping a transaction immediately rolls it back"]
pub struct Transaction<'c, 'a> {
    cursor: &'c mut Cursor<'a>,
    started_at: Mark,
    committed: bool,
}

impl Transaction<'_, '_> {
    /// Keep everything consumed since the transaction was opened.
    #[inline]
    pub fn commit(mut self) {
        self.committed = true;
    }

    /// Position the transaction was opened at.
    #[inline]
    pub fn started_at(&self) -> Mark {
        self.started_at
    }

    /// Number of bytes consumed since the transaction was opened.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.cursor.pos.saturating_sub(self.started_at.0)
    }
}

impl<'a> Deref for Transaction<'_, 'a> {
    type Target = Cursor<'a>;

    #[inline]
    fn deref(&self) -> &Cursor<'a> {
        self.cursor
    }
}

impl<'a> DerefMut for Transaction<'_, 'a> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Cursor<'a> {
        self.cursor
    }
}

impl Drop for Transaction<'_, '_> {
    fn drop(&mut self) {
        if !self.committed {
            self.cursor.reset_to(self.started_at);
        }
    }
}

impl fmt::Debug for Transaction<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transaction")
            .field("started_at", &self.started_at)
            .field("pos", &self.cursor.pos)
            .field("committed", &self.committed)
            .finish()
    }
}

#[cfg(test)]
mod tests;
