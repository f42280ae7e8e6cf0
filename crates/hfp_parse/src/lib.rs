//! Backtracking parser combinators for HTTP field values.
//!
//! Grammars are built from four kinds of entities (see [`entity`]):
//! producers yield values, transformers map them, consumers store them and
//! clauses combine the lot. A grammar is an ordinary value: build it once and
//! run it over as many inputs as needed.
//!
//! ```
//! use hfp_parse::prelude::*;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct MediaType {
//!     main_type: String,
//!     subtype: String,
//! }
//!
//! let grammar = produce::<MediaType, _>((
//!     token().transform(to_lower()).to_field(|m: &mut MediaType| &mut m.main_type),
//!     delimiter('/'),
//!     token().transform(to_lower()).to_field(|m: &mut MediaType| &mut m.subtype),
//! ));
//!
//! let parsed = try_parse("Text/HTML", &grammar);
//! assert_eq!(
//!     parsed,
//!     Ok(MediaType { main_type: "text".into(), subtype: "html".into() })
//! );
//! assert_eq!(try_parse("text/", &grammar), Err(NoMatch));
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` events at `debug` (whole-value failures) and
//! `trace` (individual combinator decisions). Call [`init_tracing`] to print
//! them when `RUST_LOG` is set.

use std::sync::Once;

pub mod combinator;
pub mod consumer;
pub mod container;
mod driver;
pub mod entity;
mod error;
pub mod producer;
pub mod transformer;

pub use combinator::{
    alternatives, and_clause, maybe, not_clause, optional, produce, repeat, separated_list,
    sequence, N, UNBOUNDED,
};
pub use consumer::{as_result, assign_to_field, custom, skip, to_container, to_container_with};
pub use container::{Accumulator, ContainerAdaptor, DefaultContainerAdaptor, Nothing};
pub use driver::{ensure_no_remaining_content, try_parse, try_parse_clauses, try_parse_whole_field};
pub use entity::{Clause, ClauseList, Consumer, Producer, Transformer};
pub use error::NoMatch;
pub use hfp_core::Cursor;
pub use producer::{
    caseless_literal, caseless_symbol, delimiter, digit, optional_whitespace, ows, quoted_string,
    symbol, token,
};
pub use transformer::{convert, to_lower};

/// Everything needed to write a grammar.
pub mod prelude {
    pub use crate::{
        alternatives, and_clause, as_result, assign_to_field, caseless_literal, caseless_symbol,
        convert, custom, delimiter, digit, maybe, not_clause, optional, optional_whitespace, ows,
        produce, quoted_string, repeat, separated_list, sequence, skip, symbol, to_container,
        to_container_with, to_lower, token, try_parse, try_parse_clauses, try_parse_whole_field,
        Clause, NoMatch, Nothing, Producer, N,
    };
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber that prints to stderr.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once, and
/// leaves an already-installed global subscriber alone.
/// Enable with `RUST_LOG=hfp_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Fails only when the host already installed a global
            // subscriber, which then keeps receiving our events.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
