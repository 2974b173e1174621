//! Value-semantic mathematical sets over any backing container.
//!
//! This module provides [`MathSet`], a handle that owns exactly one
//! set-algebra engine. The engine variant is chosen at compile time from the
//! capabilities of the backing container (see [`crate::capability`]).
//!
//! # Overview
//!
//! - Sortable containers (`Vec`, `VecDeque`, `SmallVec`, `ArrayVec`) keep
//!   elements in insertion order and are sorted in place whenever a set
//!   operation needs a merge.
//! - Order-preserving containers (`BTreeSet`, `LinkedList`) are never
//!   reordered; the merge trusts them to be ascending already.
//!
//! The container's own behavior shows through: `MathSet<T, Vec<T>>` keeps
//! duplicates and behaves like a multiset, `MathSet<T, BTreeSet<T>>` drops
//! them.
//!
//! # Time Complexity
//!
//! | Operation            | Sortable container | Order-preserving container |
//! |----------------------|--------------------|----------------------------|
//! | `insert`             | container insert   | container insert           |
//! | `union`              | O(n log n + m log m) | O(n + m)                 |
//! | `intersection`       | O(n log n + m log m) | O(n + m)                 |
//! | `difference`         | O(n log n + m log m) | O(n + m)                 |
//! | `contain`            | O(n * m)           | O(n * m)                   |
//! | `contain_with_order` | O(n + m)           | O(n + m)                   |
//! | `erase`              | O(n)               | O(n)                       |
//!
//! # Examples
//!
//! ```rust
//! use mathset::MathSet;
//!
//! let mut left: MathSet<i32, Vec<i32>> = MathSet::from([9, 7, 8, 1, 2, 3]);
//! let mut right: MathSet<i32, Vec<i32>> = MathSet::from([4, 5, 1, 2]);
//!
//! let union = left.union(&mut right);
//! assert_eq!(union.to_string(), "[1, 2, 3, 4, 5, 7, 8, 9]");
//!
//! // Both operands were sorted by the operation.
//! assert_eq!(right.to_string(), "[1, 2, 4, 5]");
//! ```

use std::borrow::Borrow;
use std::fmt;

use crate::capability::{DefaultContainer, SetBacking};
use crate::engine::{SetAlgebraEngine, merge};
use crate::error::{MathSetError, Operand};

/// A mathematical set stored in a container of type `C`.
///
/// The set owns its engine, and the engine owns the container; no two sets
/// ever share storage. Cloning rebuilds the container from the elements.
///
/// # Ordering Preconditions
///
/// `union`, `intersection` and `difference` merge two ascending sequences.
/// With a sortable container the operands are sorted first, so the
/// precondition always holds. With an order-preserving container the caller
/// must keep both operands ascending; otherwise the result is wrong (but no
/// panic occurs). The `try_*` variants verify the precondition instead.
///
/// # Type Parameters
///
/// * `T` - The element type.
/// * `C` - The backing container. Defaults to [`DefaultContainer`].
///
/// # Examples
///
/// ```rust
/// use mathset::MathSet;
/// use std::collections::BTreeSet;
///
/// let mut left: MathSet<i32, BTreeSet<i32>> = MathSet::from_range(1..=5);
/// let mut right: MathSet<i32, BTreeSet<i32>> = MathSet::from_range(4..=8);
///
/// let intersection = left.intersection(&mut right);
/// assert_eq!(intersection.iter().copied().collect::<Vec<_>>(), vec![4, 5]);
/// ```
pub struct MathSet<T, C = DefaultContainer<T>>
where
    C: SetBacking<T>,
{
    engine: C::Engine,
}

impl<T, C: SetBacking<T>> MathSet<T, C> {
    /// Creates an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::MathSet;
    ///
    /// let set: MathSet<i32> = MathSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_container(C::default())
    }

    /// Creates a set that takes ownership of an existing container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::MathSet;
    ///
    /// let set: MathSet<i32, Vec<i32>> = MathSet::from_container(vec![3, 1, 2]);
    /// assert_eq!(set.container(), &vec![3, 1, 2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_container(container: C) -> Self {
        Self {
            engine: <C::Engine as SetAlgebraEngine<T, C>>::from_container(container),
        }
    }

    /// Creates a set from the elements of any iterable, in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::MathSet;
    /// use std::collections::LinkedList;
    ///
    /// let set: MathSet<i32, LinkedList<i32>> = MathSet::from_range(vec![1, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[must_use]
    pub fn from_range<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_container(elements.into_iter().collect())
    }

    /// Creates a set from a fixed list of values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::MathSet;
    ///
    /// let set: MathSet<&str, Vec<&str>> = MathSet::from_slice(&["b", "a"]);
    /// assert_eq!(set.to_string(), "[b, a]");
    /// ```
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_range(values.iter().cloned())
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.engine.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    /// Inserts an element at the container's natural insertion point.
    ///
    /// Duplicates are handled by the container: `Vec` keeps them, `BTreeSet`
    /// ignores them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::MathSet;
    /// use std::collections::BTreeSet;
    ///
    /// let mut set: MathSet<i32, BTreeSet<i32>> = MathSet::new();
    /// set.insert(5);
    /// set.insert(1);
    /// set.insert(5);
    /// assert_eq!(set.to_string(), "[1, 5]");
    /// ```
    #[inline]
    pub fn insert(&mut self, value: T) {
        self.engine.insert(value);
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.engine.container_mut().clear();
    }

    /// Returns an iterator over the elements in container order.
    #[inline]
    pub fn iter(&self) -> C::Iter<'_> {
        self.engine.container().iter()
    }

    /// Returns a reference to the backing container.
    #[inline]
    #[must_use]
    pub fn container(&self) -> &C {
        self.engine.container()
    }

    /// Consumes the set and returns the backing container.
    #[inline]
    #[must_use]
    pub fn into_container(self) -> C {
        self.engine.into_container()
    }

    /// Removes the element at `position` (in iteration order) and returns the
    /// position of the element that followed it.
    ///
    /// # Errors
    ///
    /// Returns [`MathSetError::PositionOutOfBounds`] if `position` does not
    /// name an element; the set is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::MathSet;
    ///
    /// let mut set: MathSet<i32, Vec<i32>> = MathSet::from([2, 4, 5]);
    /// assert_eq!(set.erase_at(0), Ok(0));
    /// assert_eq!(set.to_string(), "[4, 5]");
    /// assert!(set.erase_at(2).is_err());
    /// ```
    pub fn erase_at(&mut self, position: usize) -> Result<usize, MathSetError> {
        let len = self.len();
        self.engine
            .container_mut()
            .remove_at(position)
            .map(|_| position)
            .ok_or(MathSetError::PositionOutOfBounds { position, len })
    }

    /// Removes the first element equal to `value` and returns the position of
    /// the element that followed it.
    ///
    /// Returns the end position (`len()`) if no element matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::MathSet;
    ///
    /// let mut set: MathSet<i32, Vec<i32>> = MathSet::from([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(set.erase(&3), 2);
    /// assert_eq!(set.to_string(), "[1, 2, 4, 5, 6]");
    /// assert_eq!(set.erase(&42), set.len());
    /// ```
    pub fn erase<Q>(&mut self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let found = self
            .iter()
            .position(|element| <T as Borrow<Q>>::borrow(element) == value);
        match found {
            Some(position) => {
                self.engine.container_mut().remove_at(position);
                position
            }
            None => self.len(),
        }
    }

    /// Returns the union of both sets.
    ///
    /// Elements present in either operand appear in the result. With
    /// duplicates, each value appears as often as in the operand holding
    /// more copies of it.
    ///
    /// Takes both operands mutably: with a sortable container, both are
    /// sorted in place before merging and stay sorted afterward.
    ///
    /// # Panics
    ///
    /// Panics if the result does not fit a fixed-capacity container. The
    /// union of two `ArrayVec<T, CAP>` sets holding more than `CAP` distinct
    /// elements panics in `ArrayVec::push`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::MathSet;
    ///
    /// let mut left: MathSet<i32, Vec<i32>> = MathSet::from([1, 2, 3, 7, 8, 9]);
    /// let mut right: MathSet<i32, Vec<i32>> = MathSet::from([1, 2, 4, 5]);
    /// assert_eq!(left.union(&mut right).to_string(), "[1, 2, 3, 4, 5, 7, 8, 9]");
    /// ```
    #[must_use]
    pub fn union(&mut self, other: &mut Self) -> Self {
        Self::from_container(self.engine.union(&mut other.engine))
    }

    /// Alias of [`union`](Self::union).
    #[inline]
    #[must_use]
    pub fn oneon(&mut self, other: &mut Self) -> Self {
        self.union(other)
    }

    /// Returns the intersection of both sets.
    ///
    /// With duplicates, each value appears as often as in the operand holding
    /// fewer copies of it. Operand mutation is as for [`union`](Self::union).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::MathSet;
    ///
    /// let mut left: MathSet<i32, Vec<i32>> = MathSet::from([1, 2, 3, 7, 8, 9]);
    /// let mut right: MathSet<i32, Vec<i32>> = MathSet::from([1, 2, 4, 5]);
    /// assert_eq!(left.intersection(&mut right).to_string(), "[1, 2]");
    /// ```
    #[must_use]
    pub fn intersection(&mut self, other: &mut Self) -> Self {
        Self::from_container(self.engine.intersection(&mut other.engine))
    }

    /// Returns the elements of `self` that are not in `other`.
    ///
    /// With duplicates, each copy in `other` cancels one copy in `self`.
    /// Operand mutation is as for [`union`](Self::union).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::MathSet;
    ///
    /// let mut left: MathSet<i32, Vec<i32>> = MathSet::from([1, 2, 3, 7, 8, 9]);
    /// let mut right: MathSet<i32, Vec<i32>> = MathSet::from([1, 2, 4, 5]);
    /// assert_eq!(left.difference(&mut right).to_string(), "[3, 7, 8, 9]");
    /// ```
    #[must_use]
    pub fn difference(&mut self, other: &mut Self) -> Self {
        Self::from_container(self.engine.difference(&mut other.engine))
    }

    /// Returns `true` if every element of `other` occurs somewhere in `self`.
    ///
    /// Uses a linear scan per element, so neither operand needs any ordering
    /// and neither is modified. A receiver with fewer elements than `other`
    /// never contains it.
    ///
    /// # Complexity
    ///
    /// O(n * m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::MathSet;
    ///
    /// let set: MathSet<i32, Vec<i32>> = MathSet::from([7, 1, 5, 2, 4]);
    /// assert!(!set.contain(&MathSet::from([2, 3, 4])));
    /// assert!(set.contain(&MathSet::from([7, 4, 1])));
    /// ```
    #[must_use]
    pub fn contain(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        if self.len() < other.len() {
            return false;
        }
        other
            .iter()
            .all(|wanted| self.iter().any(|candidate| candidate == wanted))
    }

    /// Returns `true` if the elements of `other` appear in `self` during a
    /// simultaneous ascending sweep of both sets.
    ///
    /// Both operands must already be ascending. This is not checked; see
    /// [`try_contain_with_order`](Self::try_contain_with_order).
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::MathSet;
    ///
    /// let set: MathSet<i32, Vec<i32>> = MathSet::from([1, 2, 4, 5, 7]);
    /// assert!(set.contain_with_order(&MathSet::from([1, 4, 7])));
    /// assert!(!set.contain_with_order(&MathSet::from([3])));
    /// ```
    #[must_use]
    pub fn contain_with_order(&self, other: &Self) -> bool
    where
        T: Ord,
    {
        self.len() >= other.len() && merge::contains_in_order(self.iter(), other.iter())
    }

    /// Returns `true` if the set iterates in non-decreasing order.
    #[must_use]
    pub fn is_ascending(&self) -> bool
    where
        T: Ord,
    {
        merge::is_ascending(self.iter())
    }

    /// Checked [`union`](Self::union).
    ///
    /// Runs the engine's arrangement step (sorting, for sortable containers)
    /// once, then verifies that both operands are ascending before merging.
    ///
    /// # Errors
    ///
    /// Returns [`MathSetError::UnsortedOperand`] if an operand of an
    /// order-preserving container is not ascending. Never fails for sortable
    /// containers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::MathSet;
    /// use mathset::error::{MathSetError, Operand};
    /// use std::collections::LinkedList;
    ///
    /// let mut left: MathSet<i32, LinkedList<i32>> = MathSet::from([1, 3]);
    /// let mut right: MathSet<i32, LinkedList<i32>> = MathSet::from([4, 2]);
    /// assert_eq!(
    ///     left.try_union(&mut right).err(),
    ///     Some(MathSetError::UnsortedOperand { operand: Operand::Argument })
    /// );
    /// ```
    pub fn try_union(&mut self, other: &mut Self) -> Result<Self, MathSetError>
    where
        T: Ord,
    {
        self.arrange_checked(other)?;
        Ok(Self::from_container(self.engine.merge_union(&other.engine)))
    }

    /// Checked [`intersection`](Self::intersection).
    ///
    /// # Errors
    ///
    /// Returns [`MathSetError::UnsortedOperand`] under the same conditions as
    /// [`try_union`](Self::try_union).
    pub fn try_intersection(&mut self, other: &mut Self) -> Result<Self, MathSetError>
    where
        T: Ord,
    {
        self.arrange_checked(other)?;
        Ok(Self::from_container(
            self.engine.merge_intersection(&other.engine),
        ))
    }

    /// Checked [`difference`](Self::difference).
    ///
    /// # Errors
    ///
    /// Returns [`MathSetError::UnsortedOperand`] under the same conditions as
    /// [`try_union`](Self::try_union).
    pub fn try_difference(&mut self, other: &mut Self) -> Result<Self, MathSetError>
    where
        T: Ord,
    {
        self.arrange_checked(other)?;
        Ok(Self::from_container(self.engine.merge_difference(&other.engine)))
    }

    /// Checked [`contain_with_order`](Self::contain_with_order).
    ///
    /// Neither operand is modified, not even for sortable containers.
    ///
    /// # Errors
    ///
    /// Returns [`MathSetError::UnsortedOperand`] if either operand is not
    /// ascending.
    pub fn try_contain_with_order(&self, other: &Self) -> Result<bool, MathSetError>
    where
        T: Ord,
    {
        self.ensure_ascending(Operand::Receiver)?;
        other.ensure_ascending(Operand::Argument)?;
        Ok(self.contain_with_order(other))
    }

    fn arrange_checked(&mut self, other: &mut Self) -> Result<(), MathSetError>
    where
        T: Ord,
    {
        self.engine.arrange(&mut other.engine);
        self.ensure_ascending(Operand::Receiver)?;
        other.ensure_ascending(Operand::Argument)
    }

    fn ensure_ascending(&self, operand: Operand) -> Result<(), MathSetError>
    where
        T: Ord,
    {
        if self.is_ascending() {
            Ok(())
        } else {
            log::debug!("{operand} operand of {} elements is not ascending", self.len());
            Err(MathSetError::UnsortedOperand { operand })
        }
    }
}

impl<T, C: SetBacking<T>> Default for MathSet<T, C> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, C: SetBacking<T>> Clone for MathSet<T, C> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

/// Compares sizes and then the containers element by element, in current
/// iteration order.
///
/// This is not set-theoretic equality: two `Vec`-backed sets holding the same
/// elements in different orders are not equal.
///
/// # Examples
///
/// ```rust
/// use mathset::MathSet;
///
/// let left: MathSet<i32, Vec<i32>> = MathSet::from([1, 2]);
/// let right: MathSet<i32, Vec<i32>> = MathSet::from([2, 1]);
/// assert_ne!(left, right);
/// ```
impl<T, C: SetBacking<T>> PartialEq for MathSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.container() == other.container()
    }
}

impl<T, C: SetBacking<T> + Eq> Eq for MathSet<T, C> {}

impl<T: fmt::Debug, C: SetBacking<T>> fmt::Debug for MathSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, C: SetBacking<T>> fmt::Display for MathSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T, C: SetBacking<T>> FromIterator<T> for MathSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_range(iter)
    }
}

impl<T, C: SetBacking<T>> Extend<T> for MathSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T, C: SetBacking<T>, const N: usize> From<[T; N]> for MathSet<T, C> {
    fn from(values: [T; N]) -> Self {
        Self::from_range(values)
    }
}

impl<'a, T: 'a, C: SetBacking<T> + 'a> IntoIterator for &'a MathSet<T, C> {
    type Item = &'a T;
    type IntoIter = C::Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for MathSet<T, C>
where
    C: SetBacking<T> + IntoIterator<Item = T>,
{
    type Item = T;
    type IntoIter = C::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_container().into_iter()
    }
}
