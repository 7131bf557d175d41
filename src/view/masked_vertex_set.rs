//! Masked vertex view: a live, non-copying projection of a vertex set that
//! hides every vertex the mask marks.
//!
//! The view holds two borrows and nothing else. Membership, size and
//! iteration are recomputed from the underlying set and the mask on every
//! call, so they always agree with each other and with the current state of
//! the mask.

use std::any::Any;
use std::marker::PhantomData;

use super::bounds::VertexLike;
use super::mask::VertexMask;
use super::prefetch::{NextElement, PrefetchIter};
use super::vertex_set::VertexSet;
use crate::debug_invariants::DebugInvariants;
use crate::mask_error::MaskError;

/// Read-only view of `vertices` minus the vertices `mask` hides.
pub struct MaskedVertexSet<'a, V, S: ?Sized, M: ?Sized> {
    vertices: &'a S,
    mask: &'a M,
    _vertex: PhantomData<fn() -> V>,
}

impl<V, S: ?Sized, M: ?Sized> Clone for MaskedVertexSet<'_, V, S, M> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<V, S: ?Sized, M: ?Sized> Copy for MaskedVertexSet<'_, V, S, M> {}

impl<V, S, M> std::fmt::Debug for MaskedVertexSet<'_, V, S, M>
where
    V: VertexLike,
    S: VertexSet<V> + ?Sized,
    M: VertexMask<V> + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Scans the underlying iterator past masked vertices.
pub struct MaskedStep<'a, V, S, M>
where
    V: VertexLike,
    S: VertexSet<V> + ?Sized + 'a,
    M: ?Sized,
{
    iter: S::Iter<'a>,
    mask: &'a M,
}

impl<'a, V, S, M> NextElement<V> for MaskedStep<'a, V, S, M>
where
    V: VertexLike,
    S: VertexSet<V> + ?Sized + 'a,
    M: VertexMask<V> + ?Sized,
{
    #[inline]
    fn next_element(&mut self) -> Option<V> {
        let mask = self.mask;
        self.iter.find(|v| !mask.is_masked(v))
    }
}

/// One iteration session over a [`MaskedVertexSet`].
pub type MaskedVertexIter<'a, V, S, M> = PrefetchIter<V, MaskedStep<'a, V, S, M>>;

impl<'a, V, S, M> MaskedVertexSet<'a, V, S, M>
where
    V: VertexLike,
    S: VertexSet<V> + ?Sized,
    M: VertexMask<V> + ?Sized,
{
    /// Builds a view over `vertices` hiding whatever `mask` marks.
    #[inline]
    pub fn new(vertices: &'a S, mask: &'a M) -> Self {
        Self {
            vertices,
            mask,
            _vertex: PhantomData,
        }
    }

    /// The collection this view projects.
    #[inline]
    pub fn underlying(&self) -> &'a S {
        self.vertices
    }

    #[inline]
    pub fn mask(&self) -> &'a M {
        self.mask
    }

    /// `true` iff `v` is in the underlying set and not masked.
    ///
    /// The mask is only consulted for vertices the underlying set contains.
    #[inline]
    pub fn contains(&self, v: &V) -> bool {
        self.vertices.contains(v) && !self.mask.is_masked(v)
    }

    /// Type-erased membership: values of any type other than `V` are never
    /// members.
    pub fn contains_any(&self, x: &dyn Any) -> bool
    where
        V: 'static,
    {
        x.downcast_ref::<V>().is_some_and(|v| self.contains(v))
    }

    /// Number of unmasked vertices, counted by scanning the whole
    /// underlying set. Never cached.
    pub fn size(&self) -> usize {
        let mut scanned = 0usize;
        let mut kept = 0usize;
        for v in self.vertices.vertices() {
            scanned += 1;
            if self.contains(&v) {
                kept += 1;
            }
        }
        log::trace!("masked vertex set: scanned {scanned} vertices, {kept} unmasked");
        kept
    }

    /// Alias for [`size`](Self::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Stops at the first unmasked vertex instead of counting all of them.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.iter().has_next()
    }

    /// Starts a fresh iteration session in underlying order.
    #[inline]
    pub fn iter(&self) -> MaskedVertexIter<'a, V, S, M> {
        PrefetchIter::new(MaskedStep {
            iter: self.vertices.vertices(),
            mask: self.mask,
        })
    }

    /// Collects the unmasked vertices in iteration order.
    pub fn to_vec(&self) -> Vec<V> {
        self.iter().collect()
    }

    /// Views never add to their underlying set.
    ///
    /// # Errors
    /// Always [`MaskError::UnsupportedOperation`].
    pub fn insert(&self, v: V) -> Result<bool, MaskError> {
        log::debug!("rejected insert of {v:?} into masked vertex set");
        Err(MaskError::UnsupportedOperation("insert on MaskedVertexSet"))
    }

    /// Views hold a shared borrow of their set and cannot remove from it.
    ///
    /// # Errors
    /// Always [`MaskError::UnsupportedOperation`].
    pub fn remove(&self, v: &V) -> Result<bool, MaskError> {
        log::debug!("rejected removal of {v:?} from masked vertex set");
        Err(MaskError::UnsupportedOperation("remove on MaskedVertexSet"))
    }
}

impl<'a, V, S, M> IntoIterator for &MaskedVertexSet<'a, V, S, M>
where
    V: VertexLike,
    S: VertexSet<V> + ?Sized,
    M: VertexMask<V> + ?Sized,
{
    type Item = V;
    type IntoIter = MaskedVertexIter<'a, V, S, M>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Views compose: a view can be the underlying set of another view.
impl<'a, V, S, M> VertexSet<V> for MaskedVertexSet<'a, V, S, M>
where
    V: VertexLike,
    S: VertexSet<V> + ?Sized,
    M: VertexMask<V> + ?Sized,
{
    type Iter<'b>
        = MaskedVertexIter<'a, V, S, M>
    where
        Self: 'b;

    #[inline]
    fn contains(&self, v: &V) -> bool {
        MaskedVertexSet::contains(self, v)
    }
    #[inline]
    fn vertices(&self) -> Self::Iter<'_> {
        self.iter()
    }
    #[inline]
    fn vertex_count(&self) -> usize {
        self.size()
    }
}

impl<V, S, M> DebugInvariants for MaskedVertexSet<'_, V, S, M>
where
    V: VertexLike,
    S: VertexSet<V> + ?Sized,
    M: VertexMask<V> + ?Sized,
{
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "MaskedVertexSet");
    }

    fn validate_invariants(&self) -> Result<(), MaskError> {
        let counted = self.size();
        let mut iterated = 0usize;
        for v in self.iter() {
            if !self.contains(&v) {
                return Err(MaskError::MaskedVertexYielded(format!("{v:?}")));
            }
            iterated += 1;
        }
        if counted != iterated {
            return Err(MaskError::SizeMismatch { counted, iterated });
        }
        Ok(())
    }
}
