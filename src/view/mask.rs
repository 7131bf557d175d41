//! Mask predicates: "is this vertex excluded?"
//!
//! A mask is owned by whoever builds the view. Views call it on every query
//! and never cache its answers, so a mask backed by interior-mutable state
//! (e.g. a `RefCell<HashSet<V>>`) is observed live.

use super::bounds::VertexLike;
use super::vertex_set::VertexSet;

/// Vertex exclusion test.
pub trait VertexMask<V> {
    /// Returns `true` if `v` must be hidden from views.
    fn is_masked(&self, v: &V) -> bool;
}

impl<V, F> VertexMask<V> for F
where
    F: Fn(&V) -> bool,
{
    #[inline]
    fn is_masked(&self, v: &V) -> bool {
        self(v)
    }
}

/// Masks nothing; a view over `NoMask` mirrors its collection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoMask;

impl<V> VertexMask<V> for NoMask {
    #[inline]
    fn is_masked(&self, _v: &V) -> bool {
        false
    }
}

/// Masks every vertex contained in a borrowed vertex set.
#[derive(Debug)]
pub struct SetMask<'a, S: ?Sized> {
    excluded: &'a S,
}

impl<'a, S: ?Sized> SetMask<'a, S> {
    #[inline]
    pub fn new(excluded: &'a S) -> Self {
        Self { excluded }
    }
}

impl<S: ?Sized> Clone for SetMask<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<S: ?Sized> Copy for SetMask<'_, S> {}

impl<V: VertexLike, S: VertexSet<V> + ?Sized> VertexMask<V> for SetMask<'_, S> {
    #[inline]
    fn is_masked(&self, v: &V) -> bool {
        self.excluded.contains(v)
    }
}

/// Inverts a mask: keeps exactly what the inner mask hides.
#[derive(Copy, Clone, Debug, Default)]
pub struct Not<M>(pub M);

impl<V, M: VertexMask<V>> VertexMask<V> for Not<M> {
    #[inline]
    fn is_masked(&self, v: &V) -> bool {
        !self.0.is_masked(v)
    }
}
