//! Parsers for common HTTP field values, built on `hfp_parse`.
//!
//! Each value type exposes the same surface:
//!
//! - `make_parser()` returns the grammar, for embedding in larger grammars;
//! - `try_parse(value)` parses a bare field value;
//! - `try_parse_field(line)` parses `Name: value`, matching the name
//!   case-insensitively;
//! - `FromStr`, equivalent to `try_parse`.
//!
//! ```
//! use hfp_fields::{Accept, CacheControl, ContentType};
//!
//! let cc: CacheControl = "no-cache, max-age=60".parse().unwrap();
//! assert_eq!(cc.max_age(), Some(60));
//!
//! let ct = ContentType::try_parse_field("Content-Type: text/html; charset=utf-8").unwrap();
//! assert_eq!(ct.charset(), Some("utf-8"));
//!
//! let accept = Accept::try_parse("text/html, */*;q=0.1").unwrap();
//! assert_eq!(accept.items.len(), 2);
//! ```
//!
//! With the `serde` feature, every parsed value type implements
//! `Serialize` and `Deserialize`.

pub mod basics;

mod accept;
mod cache_control;
mod content_type;
mod media_type;

pub use accept::{Accept, AcceptItem};
pub use basics::{OptionalValueParameter, Parameter, QValue, QValueOutOfRange};
pub use cache_control::{CacheControl, Directives};
pub use content_type::ContentType;
pub use media_type::MediaType;
