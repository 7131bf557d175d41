//! MaskError: error type shared by masked views and the lookahead iterator.
//!
//! Queries on a view are total and never fail; errors only come from
//! retrieving past the end of an iteration session, from mutation attempts
//! through a read-only view, and from invariant validation.

use thiserror::Error;

/// Error type for graph-mask operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// `next_element` was called after the session ran out of elements.
    #[error("iteration exhausted: no further unmasked elements")]
    IterationExhausted,
    /// Mutation through a read-only view (insert, remove).
    #[error("Unsupported view operation: {0}")]
    UnsupportedOperation(&'static str),
    /// `size()` and a full iteration session disagree.
    #[error("Invariant violation: size() counted {counted} vertices but iteration yielded {iterated}")]
    SizeMismatch { counted: usize, iterated: usize },
    /// Iteration produced a vertex that `contains` rejects.
    #[error("Invariant violation: iteration yielded vertex `{0}` which is masked or absent")]
    MaskedVertexYielded(String),
}
