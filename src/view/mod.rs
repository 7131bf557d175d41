//! Masked views over vertex collections.
//!
//! This module provides:
//! - [`VertexSet`], the collection capability a view borrows
//! - [`VertexMask`] predicates and ready-made masks
//! - [`PrefetchIter`], the lookahead iterator behind every filtered view
//! - [`MaskedVertexSet`], the set-like view itself
//!
//! Most users build a [`MaskedVertexSet`] from a vertex collection and a
//! mask closure and then query it like a read-only set.

pub mod bounds;
pub mod mask;
pub mod masked_vertex_set;
pub mod prefetch;
pub mod vertex_set;

pub use bounds::VertexLike;
pub use mask::{NoMask, Not, SetMask, VertexMask};
pub use masked_vertex_set::{MaskedStep, MaskedVertexIter, MaskedVertexSet};
pub use prefetch::{NextElement, PrefetchIter};
pub use vertex_set::VertexSet;
