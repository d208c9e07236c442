//! Defines the custom error type for the `core` module.

use thiserror::Error;

/// The primary error type for the `core` module.
///
/// Only conditions that abort a conversion live here. Tolerated input
/// (malformed statements, duplicate child claims, unreachable nodes) is
/// reported through [`Diagnostics`](super::Diagnostics) instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The input text or diagram was empty or whitespace-only.
    #[error("input is empty")]
    EmptyInput,

    /// The input was non-empty but contained no recognizable node syntax.
    #[error("no valid nodes found in input")]
    NoValidNodes,
}
