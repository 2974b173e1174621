use std::fmt;
use std::marker::PhantomData;

use super::SetAlgebraEngine;
use super::merge;
use crate::capability::{BackingContainer, ReserveDispatch};

/// The engine for containers that must not be reordered.
///
/// Union, intersection and difference run a single linear merge over both
/// containers exactly as they are. The engine trusts that both containers are
/// ascending, either because their insertion keeps them ordered (`BTreeSet`)
/// or because the caller keeps them ordered (`LinkedList`). Nothing checks
/// this: unordered operands produce a wrong result, never a panic.
///
/// The result container is pre-sized to the sum of both operand sizes when
/// the container supports reservation.
///
/// # Examples
///
/// ```rust
/// use mathset::engine::{OrderPreservingEngine, SetAlgebraEngine};
/// use std::collections::BTreeSet;
///
/// let mut left: OrderPreservingEngine<i32, _> =
///     OrderPreservingEngine::from_container(BTreeSet::from([1, 2, 3]));
/// let mut right: OrderPreservingEngine<i32, _> =
///     OrderPreservingEngine::from_container(BTreeSet::from([2, 3, 4]));
///
/// let union = left.union(&mut right);
/// assert_eq!(union, BTreeSet::from([1, 2, 3, 4]));
/// ```
pub struct OrderPreservingEngine<T, C> {
    container: C,
    _element: PhantomData<fn() -> T>,
}

impl<T, C> OrderPreservingEngine<T, C> {
    /// Creates an engine that takes ownership of `container`.
    #[inline]
    #[must_use]
    pub const fn new(container: C) -> Self {
        Self {
            container,
            _element: PhantomData,
        }
    }
}

impl<T, C> OrderPreservingEngine<T, C>
where
    T: Ord + Clone,
    C: BackingContainer<T>,
{
    /// Creates an empty result container, reserved for both operands if the
    /// container supports it.
    fn result_container(&self, other: &Self) -> C {
        let mut result = C::default();
        <C::Reservable as ReserveDispatch<C>>::reserve_for(
            &mut result,
            self.container.len() + other.container.len(),
        );
        result
    }
}

impl<T, C> SetAlgebraEngine<T, C> for OrderPreservingEngine<T, C>
where
    T: Ord + Clone,
    C: BackingContainer<T>,
{
    #[inline]
    fn from_container(container: C) -> Self {
        Self::new(container)
    }

    #[inline]
    fn container(&self) -> &C {
        &self.container
    }

    #[inline]
    fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    #[inline]
    fn into_container(self) -> C {
        self.container
    }

    #[inline]
    fn arrange(&mut self, _other: &mut Self) {}

    fn merge_union(&self, other: &Self) -> C {
        log::trace!(
            "merging union of {} and {} elements",
            self.container.len(),
            other.container.len()
        );
        let mut result = self.result_container(other);
        merge::union_into(self.container.iter(), other.container.iter(), |element| {
            result.insert_value(element.clone());
        });
        result
    }

    fn merge_intersection(&self, other: &Self) -> C {
        log::trace!(
            "merging intersection of {} and {} elements",
            self.container.len(),
            other.container.len()
        );
        let mut result = self.result_container(other);
        merge::intersection_into(self.container.iter(), other.container.iter(), |element| {
            result.insert_value(element.clone());
        });
        result
    }

    fn merge_difference(&self, other: &Self) -> C {
        log::trace!(
            "merging difference of {} and {} elements",
            self.container.len(),
            other.container.len()
        );
        let mut result = self.result_container(other);
        merge::difference_into(self.container.iter(), other.container.iter(), |element| {
            result.insert_value(element.clone());
        });
        result
    }
}

impl<T, C: fmt::Debug> fmt::Debug for OrderPreservingEngine<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OrderPreservingEngine")
            .field("container", &self.container)
            .finish()
    }
}
