//! Error types for the dark book.
//!
//! The taxonomy is deliberately thin. Matching itself cannot fail: a
//! settlement step either yields a transaction or yields nothing.

use thiserror::Error;

/// Errors surfaced by the session engine and the diagnostic checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    /// A submission was attempted while every slot of the book may be live.
    #[error("book capacity of {capacity} orders exhausted")]
    CapacityExceeded {
        /// Fixed capacity of the book
        capacity: usize,
    },

    /// A container was found out of order. This is a bug in the
    /// conditional swap and is never corrected silently.
    #[error("{side} container out of order at index {index}")]
    InvariantViolation {
        /// "ask" or "bid"
        side: &'static str,
        /// Index `i` such that `(e[i], e[i+1])` is out of order
        index: usize,
    },

    /// SSZ encoding failed while extending the log root.
    #[error("failed to encode transaction: {0}")]
    Encoding(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BookError>;
