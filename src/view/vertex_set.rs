//! The collection capability a masked view is built over.
//!
//! A [`VertexSet`] answers membership and iterates its current vertices in
//! its own order. Views only ever borrow it.

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;
use std::iter::Copied;

use super::bounds::VertexLike;

/// Read access to a collection of vertices.
pub trait VertexSet<V: VertexLike> {
    /// Iterator over the vertices currently in the collection.
    type Iter<'a>: Iterator<Item = V> + 'a
    where
        Self: 'a;

    /// Membership test.
    fn contains(&self, v: &V) -> bool;

    /// Iterates current vertices in the collection's own order.
    fn vertices(&self) -> Self::Iter<'_>;

    /// Number of vertices, masked or not.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}

impl<V: VertexLike, S: BuildHasher> VertexSet<V> for HashSet<V, S> {
    type Iter<'a>
        = Copied<std::collections::hash_set::Iter<'a, V>>
    where
        Self: 'a;

    #[inline]
    fn contains(&self, v: &V) -> bool {
        HashSet::contains(self, v)
    }
    #[inline]
    fn vertices(&self) -> Self::Iter<'_> {
        self.iter().copied()
    }
    #[inline]
    fn vertex_count(&self) -> usize {
        self.len()
    }
}

impl<V: VertexLike, S: BuildHasher> VertexSet<V> for hashbrown::HashSet<V, S> {
    type Iter<'a>
        = Copied<hashbrown::hash_set::Iter<'a, V>>
    where
        Self: 'a;

    #[inline]
    fn contains(&self, v: &V) -> bool {
        hashbrown::HashSet::contains(self, v)
    }
    #[inline]
    fn vertices(&self) -> Self::Iter<'_> {
        self.iter().copied()
    }
    #[inline]
    fn vertex_count(&self) -> usize {
        self.len()
    }
}

impl<V: VertexLike + Ord> VertexSet<V> for BTreeSet<V> {
    type Iter<'a>
        = Copied<std::collections::btree_set::Iter<'a, V>>
    where
        Self: 'a;

    #[inline]
    fn contains(&self, v: &V) -> bool {
        BTreeSet::contains(self, v)
    }
    #[inline]
    fn vertices(&self) -> Self::Iter<'_> {
        self.iter().copied()
    }
    #[inline]
    fn vertex_count(&self) -> usize {
        self.len()
    }
}

/// Insertion-ordered vertices; membership is a linear probe.
impl<V: VertexLike> VertexSet<V> for [V] {
    type Iter<'a>
        = Copied<std::slice::Iter<'a, V>>
    where
        Self: 'a;

    #[inline]
    fn contains(&self, v: &V) -> bool {
        <[V]>::contains(self, v)
    }
    #[inline]
    fn vertices(&self) -> Self::Iter<'_> {
        self.iter().copied()
    }
    #[inline]
    fn vertex_count(&self) -> usize {
        self.len()
    }
}

impl<V: VertexLike> VertexSet<V> for Vec<V> {
    type Iter<'a>
        = Copied<std::slice::Iter<'a, V>>
    where
        Self: 'a;

    #[inline]
    fn contains(&self, v: &V) -> bool {
        self.as_slice().contains(v)
    }
    #[inline]
    fn vertices(&self) -> Self::Iter<'_> {
        self.iter().copied()
    }
    #[inline]
    fn vertex_count(&self) -> usize {
        self.len()
    }
}

impl<V: VertexLike, T: VertexSet<V> + ?Sized> VertexSet<V> for &T {
    type Iter<'a>
        = T::Iter<'a>
    where
        Self: 'a;

    #[inline]
    fn contains(&self, v: &V) -> bool {
        (**self).contains(v)
    }
    #[inline]
    fn vertices(&self) -> Self::Iter<'_> {
        (**self).vertices()
    }
    #[inline]
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }
}
