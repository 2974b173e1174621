//! [`BackingContainer`] implementation for [`ArrayVec`].
//!
//! `ArrayVec` sorts like a slice but has a fixed capacity, so it is sortable
//! without being reservable. Inserting past the capacity panics, exactly as
//! [`ArrayVec::push`] does.

use arrayvec::ArrayVec;

use super::{BackingContainer, SortInPlace, Supported, Unsupported};

impl<T: Ord, const CAP: usize> SortInPlace for ArrayVec<T, CAP> {
    #[inline]
    fn sort_in_place(&mut self) {
        self.as_mut_slice().sort();
    }
}

impl<T: Ord, const CAP: usize> BackingContainer<T> for ArrayVec<T, CAP> {
    type Sortable = Supported;
    type Reservable = Unsupported;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        ArrayVec::len(self)
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
        (position < ArrayVec::len(self)).then(|| self.remove(position))
    }

    #[inline]
    fn clear(&mut self) {
        ArrayVec::clear(self);
    }
}
