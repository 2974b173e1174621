//! [`BackingContainer`] implementation for [`SmallVec`].
//!
//! Inline storage makes `SmallVec` a good fit for many small sets; it behaves
//! like `Vec` otherwise and is selected for the sorting engine.

use smallvec::SmallVec;

use super::{BackingContainer, ReserveCapacity, SortInPlace, Supported};

impl<T: Ord, const N: usize> SortInPlace for SmallVec<[T; N]> {
    #[inline]
    fn sort_in_place(&mut self) {
        self.as_mut_slice().sort();
    }
}

impl<T, const N: usize> ReserveCapacity for SmallVec<[T; N]> {
    #[inline]
    fn reserve_capacity(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T: Ord, const N: usize> BackingContainer<T> for SmallVec<[T; N]> {
    type Sortable = Supported;
    type Reservable = Supported;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    #[inline]
    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a,
    {
        self.as_slice().iter()
    }

    #[inline]
    fn insert_value(&mut self, value: T) {
        self.push(value);
    }

    fn remove_at(&mut self, position: usize) -> Option<T> {
        (position < SmallVec::len(self)).then(|| self.remove(position))
    }

    #[inline]
    fn clear(&mut self) {
        SmallVec::clear(self);
    }
}
