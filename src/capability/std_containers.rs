//! [`BackingContainer`] implementations for standard library collections.

use std::collections::{BTreeSet, LinkedList, VecDeque, btree_set, linked_list, vec_deque};

use super::{BackingContainer, ReserveCapacity, SortInPlace, Supported, Unsupported};

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T: Ord> SortInPlace for Vec<T> {
    #[inline]
    fn sort_in_place(&mut self) {
        self.as_mut_slice().sort();
    }
}

impl<T> ReserveCapacity for Vec<T> {
    #[inline]
    fn reserve_capacity(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T: Ord> BackingContainer<T> for Vec<T> {
    type Sortable = Supported;
    type Reservable = Supported;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
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
        (position < Vec::len(self)).then(|| self.remove(position))
    }

    #[inline]
    fn clear(&mut self) {
        Vec::clear(self);
    }
}

// =============================================================================
// VecDeque<T> Implementation
// =============================================================================

impl<T: Ord> SortInPlace for VecDeque<T> {
    #[inline]
    fn sort_in_place(&mut self) {
        self.make_contiguous().sort();
    }
}

impl<T> ReserveCapacity for VecDeque<T> {
    #[inline]
    fn reserve_capacity(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T: Ord> BackingContainer<T> for VecDeque<T> {
    type Sortable = Supported;
    type Reservable = Supported;
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a,
    {
        VecDeque::iter(self)
    }

    #[inline]
    fn insert_value(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn remove_at(&mut self, position: usize) -> Option<T> {
        self.remove(position)
    }

    #[inline]
    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

// =============================================================================
// LinkedList<T> Implementation
// =============================================================================

impl<T: Ord> BackingContainer<T> for LinkedList<T> {
    type Sortable = Unsupported;
    type Reservable = Unsupported;
    type Iter<'a>
        = linked_list::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    #[inline]
    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a,
    {
        LinkedList::iter(self)
    }

    #[inline]
    fn insert_value(&mut self, value: T) {
        self.push_back(value);
    }

    fn remove_at(&mut self, position: usize) -> Option<T> {
        if position >= LinkedList::len(self) {
            return None;
        }
        let mut tail = self.split_off(position);
        let removed = tail.pop_front();
        self.append(&mut tail);
        removed
    }

    #[inline]
    fn clear(&mut self) {
        LinkedList::clear(self);
    }
}

// =============================================================================
// BTreeSet<T> Implementation
// =============================================================================

impl<T: Ord> BackingContainer<T> for BTreeSet<T> {
    type Sortable = Unsupported;
    type Reservable = Unsupported;
    type Iter<'a>
        = btree_set::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    #[inline]
    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a,
    {
        BTreeSet::iter(self)
    }

    #[inline]
    fn insert_value(&mut self, value: T) {
        self.insert(value);
    }

    fn remove_at(&mut self, position: usize) -> Option<T> {
        if position >= BTreeSet::len(self) {
            return None;
        }
        // Rebuilding from the already sorted sequence uses the bulk path.
        let mut removed = None;
        *self = std::mem::take(self)
            .into_iter()
            .enumerate()
            .filter_map(|(index, element)| {
                if index == position {
                    removed = Some(element);
                    None
                } else {
                    Some(element)
                }
            })
            .collect();
        removed
    }

    #[inline]
    fn clear(&mut self) {
        BTreeSet::clear(self);
    }
}
