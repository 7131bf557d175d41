#![cfg_attr(docsrs, feature(doc_cfg))]
//! # graph-mask
//!
//! graph-mask provides masked views over graph vertex collections: read-only,
//! non-copying projections that hide every vertex an external predicate marks
//! as masked. They are the building block for subgraph views such as "this
//! graph minus these vertices" without materializing a new vertex set.
//!
//! ## Features
//! - [`MaskedVertexSet`](view::MaskedVertexSet): set-like view with
//!   `contains`, `size`, `iter` and `is_empty`, always recomputed from the
//!   live collection and mask
//! - [`PrefetchIter`](view::PrefetchIter): a reusable lookahead iterator that
//!   turns a "scan and skip until the next match" step into `has_next`/`next`
//! - [`VertexMask`](view::VertexMask) predicates: closures, `SetMask`, `Not`
//! - Invariant validation through [`DebugInvariants`]
//!
//! ## Usage
//!
//! ```
//! use std::collections::HashSet;
//! use graph_mask::prelude::*;
//!
//! let vertices = vec![1u32, 2, 3, 4, 5];
//! let removed: HashSet<u32> = [2, 4].into_iter().collect();
//! let mask = SetMask::new(&removed);
//! let view = MaskedVertexSet::new(&vertices, &mask);
//!
//! assert_eq!(view.size(), 3);
//! assert!(!view.contains(&2));
//! assert_eq!(view.iter().collect::<Vec<_>>(), vec![1, 3, 5]);
//! ```
//!
//! ## Invariant checks
//! Enable the `check-invariants` or `strict-invariants` feature to keep
//! [`debug_invariants!`] checks in release builds.

pub mod debug_invariants;
pub mod mask_error;
pub mod view;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mask_error::MaskError;
    pub use crate::view::{
        MaskedVertexIter, MaskedVertexSet, NextElement, NoMask, Not, PrefetchIter, SetMask,
        VertexLike, VertexMask, VertexSet,
    };
}
