//! Compile-time capabilities of backing containers.
//!
//! A [`MathSet`](crate::set::MathSet) can be stored in any container that
//! implements [`BackingContainer`]. Each implementation declares two
//! capabilities as type-level booleans:
//!
//! - [`BackingContainer::Sortable`]: the container can be sorted in place
//!   through positional access.
//! - [`BackingContainer::Reservable`]: the container can pre-allocate storage
//!   for a number of elements without changing its content.
//!
//! The flags are not just descriptive. `Sortable` selects the algebra engine
//! through [`EngineSelector`], and `Reservable` selects the pre-allocation step
//! through [`ReserveDispatch`]. A container that claims a capability without
//! implementing the matching operation trait ([`SortInPlace`] or
//! [`ReserveCapacity`]) does not compile.
//!
//! # Capability Table
//!
//! | Container          | Sortable | Reservable | Engine              |
//! |--------------------|----------|------------|---------------------|
//! | `Vec<T>`           | yes      | yes        | [`SortingEngine`]   |
//! | `VecDeque<T>`      | yes      | yes        | [`SortingEngine`]   |
//! | `LinkedList<T>`    | no       | no         | [`OrderPreservingEngine`] |
//! | `BTreeSet<T>`      | no       | no         | [`OrderPreservingEngine`] |
//! | `SmallVec<[T; N]>` | yes      | yes        | [`SortingEngine`]   |
//! | `ArrayVec<T, N>`   | yes      | no         | [`SortingEngine`]   |
//!
//! # Examples
//!
//! ```rust
//! use mathset::capability::{is_sortable, supports_reservation};
//! use std::collections::{BTreeSet, LinkedList};
//!
//! assert!(is_sortable::<i32, Vec<i32>>());
//! assert!(supports_reservation::<i32, Vec<i32>>());
//!
//! assert!(!is_sortable::<i32, BTreeSet<i32>>());
//! assert!(!supports_reservation::<i32, LinkedList<i32>>());
//! ```

#[cfg(feature = "arrayvec")]
mod arrayvec_container;
#[cfg(feature = "smallvec")]
mod smallvec_container;
mod std_containers;

use crate::engine::{OrderPreservingEngine, SetAlgebraEngine, SortingEngine};

// =============================================================================
// Type-level Booleans
// =============================================================================

/// A type-level boolean describing whether a container has a capability.
///
/// Implemented only by [`Supported`] and [`Unsupported`].
pub trait Capability {
    /// The value of the flag.
    const SUPPORTED: bool;
}

/// The container has the capability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Supported;

/// The container lacks the capability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unsupported;

impl Capability for Supported {
    const SUPPORTED: bool = true;
}

impl Capability for Unsupported {
    const SUPPORTED: bool = false;
}

// =============================================================================
// Capability Operations
// =============================================================================

/// Containers whose whole element range can be sorted in place.
///
/// Implementors must expose their elements as a positionally addressable
/// range; traversal-only containers such as linked lists do not qualify.
pub trait SortInPlace {
    /// Sorts the elements in ascending order.
    fn sort_in_place(&mut self);
}

/// Containers that can pre-allocate storage.
pub trait ReserveCapacity {
    /// Reserves room for at least `additional` more elements.
    ///
    /// Must not change the logical content of the container.
    fn reserve_capacity(&mut self, additional: usize);
}

// =============================================================================
// Dispatch
// =============================================================================

/// Selects the pre-allocation behavior for a container from its
/// [`BackingContainer::Reservable`] flag.
pub trait ReserveDispatch<C> {
    /// Reserves room for `additional` elements if the container supports it,
    /// otherwise does nothing.
    fn reserve_for(container: &mut C, additional: usize);
}

impl<C: ReserveCapacity> ReserveDispatch<C> for Supported {
    #[inline]
    fn reserve_for(container: &mut C, additional: usize) {
        log::trace!("reserving capacity for {additional} elements");
        container.reserve_capacity(additional);
    }
}

impl<C> ReserveDispatch<C> for Unsupported {
    #[inline]
    fn reserve_for(_container: &mut C, _additional: usize) {}
}

/// Selects the algebra engine for a container from its
/// [`BackingContainer::Sortable`] flag.
///
/// - [`Supported`] selects [`SortingEngine`], which sorts both operands before
///   merging.
/// - [`Unsupported`] selects [`OrderPreservingEngine`], which merges the
///   operands as they are.
pub trait EngineSelector<T, C> {
    /// The selected engine type.
    type Engine;
}

impl<T, C: SortInPlace> EngineSelector<T, C> for Supported {
    type Engine = SortingEngine<T, C>;
}

impl<T, C> EngineSelector<T, C> for Unsupported {
    type Engine = OrderPreservingEngine<T, C>;
}

// =============================================================================
// BackingContainer
// =============================================================================

/// A container that can hold the elements of a [`MathSet`](crate::set::MathSet).
///
/// The container decides the observable behavior of the set: a container that
/// rejects duplicates yields a true mathematical set, one that keeps them
/// yields a multiset, and iteration follows whatever order the container
/// exposes.
///
/// # Order-preserving Containers
///
/// A container whose `Sortable` flag is [`Unsupported`] is never re-sorted.
/// Its set-algebra results are only meaningful when
/// [`insert_value`](Self::insert_value) keeps the elements ascending (as
/// `BTreeSet` does) or the caller keeps them ascending.
pub trait BackingContainer<T>: Default + FromIterator<T> + PartialEq {
    /// Whether the container can be sorted in place.
    type Sortable: Capability + EngineSelector<T, Self>;

    /// Whether the container can pre-allocate storage.
    type Reservable: Capability + ReserveDispatch<Self>;

    /// Forward iterator over the elements in container order.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements in container order.
    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a;

    /// Inserts an element at the container's natural insertion point.
    ///
    /// Sequences append; ordered containers insert in order and may reject
    /// duplicates.
    fn insert_value(&mut self, value: T);

    /// Removes and returns the element at `position` in iteration order.
    ///
    /// Returns `None` if `position` is out of bounds.
    fn remove_at(&mut self, position: usize) -> Option<T>;

    /// Removes all elements.
    fn clear(&mut self);
}

/// The engine type selected for container `C` holding elements of type `T`.
pub type EngineOf<T, C> =
    <<C as BackingContainer<T>>::Sortable as EngineSelector<T, C>>::Engine;

/// A [`BackingContainer`] whose selected engine is usable for set algebra.
///
/// Implemented automatically for every container whose capability flags
/// resolve to a working engine; it exists so that generic code can name
/// `C::Engine` with a single bound.
pub trait SetBacking<T>: BackingContainer<T> {
    /// The engine selected by the container's `Sortable` flag.
    type Engine: SetAlgebraEngine<T, Self>;
}

impl<T, C> SetBacking<T> for C
where
    C: BackingContainer<T>,
    EngineOf<T, C>: SetAlgebraEngine<T, C>,
{
    type Engine = EngineOf<T, C>;
}

/// Returns `true` if `C` can be sorted in place.
///
/// # Examples
///
/// ```rust
/// use mathset::capability::is_sortable;
/// use std::collections::VecDeque;
///
/// assert!(is_sortable::<u8, VecDeque<u8>>());
/// ```
#[inline]
#[must_use]
pub const fn is_sortable<T, C: BackingContainer<T>>() -> bool {
    <C::Sortable as Capability>::SUPPORTED
}

/// Returns `true` if `C` can pre-allocate storage.
///
/// # Examples
///
/// ```rust
/// use mathset::capability::supports_reservation;
/// use std::collections::BTreeSet;
///
/// assert!(!supports_reservation::<u8, BTreeSet<u8>>());
/// ```
#[inline]
#[must_use]
pub const fn supports_reservation<T, C: BackingContainer<T>>() -> bool {
    <C::Reservable as Capability>::SUPPORTED
}

/// The container used when `MathSet<T>` is written without one.
///
/// `BTreeSet<T>` unless the `vec-default` feature is enabled.
#[cfg(not(feature = "vec-default"))]
pub type DefaultContainer<T> = std::collections::BTreeSet<T>;

/// The container used when `MathSet<T>` is written without one.
///
/// `Vec<T>` because the `vec-default` feature is enabled.
#[cfg(feature = "vec-default")]
pub type DefaultContainer<T> = Vec<T>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::{BTreeSet, LinkedList, VecDeque};

    #[rstest]
    fn test_flag_values() {
        assert!(Supported::SUPPORTED);
        assert!(!Unsupported::SUPPORTED);
    }

    #[rstest]
    #[case::vec(is_sortable::<i32, Vec<i32>>(), true)]
    #[case::vec_deque(is_sortable::<i32, VecDeque<i32>>(), true)]
    #[case::linked_list(is_sortable::<i32, LinkedList<i32>>(), false)]
    #[case::btree_set(is_sortable::<i32, BTreeSet<i32>>(), false)]
    fn test_is_sortable(#[case] actual: bool, #[case] expected: bool) {
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::vec(supports_reservation::<i32, Vec<i32>>(), true)]
    #[case::vec_deque(supports_reservation::<i32, VecDeque<i32>>(), true)]
    #[case::linked_list(supports_reservation::<i32, LinkedList<i32>>(), false)]
    #[case::btree_set(supports_reservation::<i32, BTreeSet<i32>>(), false)]
    fn test_supports_reservation(#[case] actual: bool, #[case] expected: bool) {
        assert_eq!(actual, expected);
    }

    #[rstest]
    fn test_reserve_dispatch_supported_grows_capacity() {
        let mut container: Vec<i32> = Vec::new();
        <Supported as ReserveDispatch<Vec<i32>>>::reserve_for(&mut container, 32);
        assert!(container.capacity() >= 32);
        assert!(container.is_empty());
    }

    #[rstest]
    fn test_reserve_dispatch_unsupported_is_noop() {
        let mut container: LinkedList<i32> = LinkedList::new();
        <Unsupported as ReserveDispatch<LinkedList<i32>>>::reserve_for(&mut container, 32);
        assert!(container.is_empty());
    }

    #[rstest]
    fn test_const_evaluation() {
        const VEC_SORTABLE: bool = is_sortable::<i32, Vec<i32>>();
        const TREE_RESERVABLE: bool = supports_reservation::<i32, BTreeSet<i32>>();
        assert!(VEC_SORTABLE);
        assert!(!TREE_RESERVABLE);
    }
}
