//! Lookahead iteration over a "produce the next qualifying element" step.
//!
//! [`PrefetchIter`] turns a step producer, which may scan and discard an
//! unbounded number of source values before yielding one, into a pull
//! iterator with `has_next`/`next_element` semantics. The next element is
//! buffered on demand, so asking "is there more?" never changes what the
//! following retrieval returns.

use std::iter::FusedIterator;

use crate::mask_error::MaskError;

/// Step producer driven by [`PrefetchIter`].
///
/// Each call consumes from the producer's source until a qualifying value is
/// found (`Some`) or the source runs dry (`None`).
pub trait NextElement<T> {
    fn next_element(&mut self) -> Option<T>;
}

impl<T, F> NextElement<T> for F
where
    F: FnMut() -> Option<T>,
{
    #[inline]
    fn next_element(&mut self) -> Option<T> {
        self()
    }
}

#[derive(Debug, Clone)]
enum Slot<T> {
    /// No element buffered; the next probe invokes the step.
    NotStarted,
    Buffered(T),
    Exhausted,
}

/// Pull iterator with one element of lookahead over a [`NextElement`] step.
#[derive(Debug, Clone)]
pub struct PrefetchIter<T, F> {
    step: F,
    slot: Slot<T>,
}

impl<T, F> PrefetchIter<T, F>
where
    F: NextElement<T>,
{
    #[inline]
    pub fn new(step: F) -> Self {
        Self {
            step,
            slot: Slot::NotStarted,
        }
    }

    /// Returns `true` if another element is available.
    ///
    /// Calls the step at most once between two retrievals; repeated calls
    /// with no intervening [`next_element`](Self::next_element) are free.
    /// After exhaustion the step is never called again.
    pub fn has_next(&mut self) -> bool {
        self.probe();
        matches!(self.slot, Slot::Buffered(_))
    }

    /// Takes the next element, probing the step if nothing is buffered.
    ///
    /// # Errors
    /// [`MaskError::IterationExhausted`] once the step has signalled the end.
    pub fn next_element(&mut self) -> Result<T, MaskError> {
        self.probe();
        match std::mem::replace(&mut self.slot, Slot::NotStarted) {
            Slot::Buffered(v) => Ok(v),
            other => {
                // probe() never leaves NotStarted behind, so this is Exhausted.
                self.slot = other;
                Err(MaskError::IterationExhausted)
            }
        }
    }

    /// Borrows the next element without consuming it.
    pub fn peek(&mut self) -> Option<&T> {
        self.probe();
        match &self.slot {
            Slot::Buffered(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    fn probe(&mut self) {
        if let Slot::NotStarted = self.slot {
            self.slot = match self.step.next_element() {
                Some(v) => Slot::Buffered(v),
                None => Slot::Exhausted,
            };
        }
    }
}

impl<T, F> Iterator for PrefetchIter<T, F>
where
    F: NextElement<T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_element().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.slot {
            Slot::Buffered(_) => (1, None),
            Slot::Exhausted => (0, Some(0)),
            Slot::NotStarted => (0, None),
        }
    }
}

impl<T, F> FusedIterator for PrefetchIter<T, F> where F: NextElement<T> {}
