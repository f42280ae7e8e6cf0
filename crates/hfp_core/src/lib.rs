//! Low-level scanning primitives for HTTP field values.
//!
//! This crate is standalone: it has no `hfp_*` dependencies. It provides
//! the three leaves everything else is built on:
//!
//! - [`Cursor`]: a position over a borrowed, immutable `&str`, with
//!   explicit mark/reset backtracking and a scoped [`Transaction`] guard.
//! - [`char_class`]: RFC 7230 byte classes (`tchar`, `qdtext`, `VCHAR`,
//!   `obs-text`, `SP`/`HTAB`, `DIGIT`) as a 256-entry lookup table.
//! - [`case_fold`]: the 256-entry ASCII lower-casing table used for
//!   case-insensitive matching.
//!
//! The grammar is byte-oriented. Non-ASCII bytes are only ever accepted as
//! `obs-text` inside quoted strings.

pub mod case_fold;
pub mod char_class;
mod cursor;

pub use char_class::CharClass;
pub use cursor::{Cursor, Mark, Transaction};
