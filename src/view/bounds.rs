//! Bound aliases for vertex identifiers.
//!
//! Blanket-implemented, so any type meeting the underlying bounds qualifies.

/// Canonical bound set for vertices seen through a view.
///
/// - `Copy` so iteration hands out vertices by value
/// - `Eq + Hash` for hash-backed vertex sets and masks
/// - `Debug` for invariant reports
pub trait VertexLike: Copy + Eq + std::hash::Hash + std::fmt::Debug {}
impl<T> VertexLike for T where T: Copy + Eq + std::hash::Hash + std::fmt::Debug {}
