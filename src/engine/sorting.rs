use std::fmt;

use super::{OrderPreservingEngine, SetAlgebraEngine};
use crate::capability::{BackingContainer, SortInPlace};

/// The engine for containers that can be sorted in place.
///
/// Before each union, intersection or difference, both the receiver's and the
/// argument's containers are sorted in place by
/// [`arrange`](SetAlgebraEngine::arrange), and then the shared merge of
/// [`OrderPreservingEngine`] runs. The merge precondition therefore always
/// holds, at the cost of an O(n log n) sort of both operands on every call.
///
/// # Side Effect
///
/// The argument operand is reordered too. After `left.union(&mut right)`,
/// `right` iterates in ascending order.
///
/// # Examples
///
/// ```rust
/// use mathset::engine::{SetAlgebraEngine, SortingEngine};
///
/// let mut left: SortingEngine<i32, Vec<i32>> =
///     SortingEngine::from_container(vec![9, 7, 8, 1, 2, 3]);
/// let mut right: SortingEngine<i32, Vec<i32>> =
///     SortingEngine::from_container(vec![4, 5, 1, 2]);
///
/// assert_eq!(left.union(&mut right), vec![1, 2, 3, 4, 5, 7, 8, 9]);
/// assert_eq!(right.container(), &vec![1, 2, 4, 5]);
/// ```
pub struct SortingEngine<T, C> {
    base: OrderPreservingEngine<T, C>,
}

impl<T, C> SortingEngine<T, C> {
    /// Creates an engine that takes ownership of `container`.
    #[inline]
    #[must_use]
    pub const fn new(container: C) -> Self {
        Self {
            base: OrderPreservingEngine::new(container),
        }
    }
}

impl<T, C> SetAlgebraEngine<T, C> for SortingEngine<T, C>
where
    T: Ord + Clone,
    C: BackingContainer<T> + SortInPlace,
{
    #[inline]
    fn from_container(container: C) -> Self {
        Self::new(container)
    }

    #[inline]
    fn container(&self) -> &C {
        self.base.container()
    }

    #[inline]
    fn container_mut(&mut self) -> &mut C {
        self.base.container_mut()
    }

    #[inline]
    fn into_container(self) -> C {
        self.base.into_container()
    }

    fn arrange(&mut self, other: &mut Self) {
        log::trace!(
            "sorting operands of {} and {} elements",
            self.base.len(),
            other.base.len()
        );
        self.base.container_mut().sort_in_place();
        other.base.container_mut().sort_in_place();
    }

    #[inline]
    fn merge_union(&self, other: &Self) -> C {
        self.base.merge_union(&other.base)
    }

    #[inline]
    fn merge_intersection(&self, other: &Self) -> C {
        self.base.merge_intersection(&other.base)
    }

    #[inline]
    fn merge_difference(&self, other: &Self) -> C {
        self.base.merge_difference(&other.base)
    }
}

impl<T, C: fmt::Debug> fmt::Debug for SortingEngine<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SortingEngine")
            .field("base", &self.base)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::VecDeque;

    fn engine(elements: &[i32]) -> SortingEngine<i32, Vec<i32>> {
        SortingEngine::new(elements.to_vec())
    }

    #[rstest]
    fn test_unsorted_operands_are_sorted_before_merge() {
        let mut left = engine(&[9, 7, 8, 1, 2, 3]);
        let mut right = engine(&[4, 5, 1, 2]);

        assert_eq!(left.union(&mut right), vec![1, 2, 3, 4, 5, 7, 8, 9]);
        assert_eq!(left.intersection(&mut right), vec![1, 2]);
        assert_eq!(left.difference(&mut right), vec![3, 7, 8, 9]);
    }

    #[rstest]
    fn test_argument_is_sorted_as_side_effect() {
        let mut left = engine(&[3, 1]);
        let mut right = engine(&[6, 5, 4]);
        let _ = left.intersection(&mut right);

        assert_eq!(left.container(), &vec![1, 3]);
        assert_eq!(right.container(), &vec![4, 5, 6]);
    }

    #[rstest]
    fn test_result_is_reserved_for_both_operands() {
        let mut left = engine(&[1, 2, 3]);
        let mut right = engine(&[4, 5]);
        let result = left.intersection(&mut right);

        assert!(result.is_empty());
        assert!(result.capacity() >= 5);
    }

    #[rstest]
    fn test_vec_deque_operands() {
        let mut left: SortingEngine<i32, VecDeque<i32>> =
            SortingEngine::new(VecDeque::from(vec![3, 1, 2]));
        let mut right: SortingEngine<i32, VecDeque<i32>> =
            SortingEngine::new(VecDeque::from(vec![2, 4]));

        assert_eq!(left.union(&mut right), VecDeque::from(vec![1, 2, 3, 4]));
    }
}
