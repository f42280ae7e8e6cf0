//! The single failure reported by the driver functions.

/// The input does not match the grammar.
///
/// Carries no position or expectation. Grammars backtrack freely, so there
/// is no one place the input "went wrong".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, thiserror::Error)]
#[error("input does not match the grammar")]
pub struct NoMatch;
