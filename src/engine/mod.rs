//! Set-algebra engines.
//!
//! An engine owns exactly one backing container and implements union,
//! intersection and difference on top of the linear kernels in [`merge`].
//! Two variants exist, and the container's
//! [`Sortable`](crate::capability::BackingContainer::Sortable) flag picks one
//! at compile time:
//!
//! - [`OrderPreservingEngine`]: merges the operands as they are. The operands
//!   must already be ascending.
//! - [`SortingEngine`]: sorts both operands in place, then runs the same merge.
//!
//! # Operand Mutation
//!
//! Every algebra operation takes both operands by `&mut`. The sorting engine
//! reorders the argument's container as well as the receiver's, and that new
//! order stays visible to the caller afterward.

pub mod merge;
mod order_preserving;
mod sorting;

pub use order_preserving::OrderPreservingEngine;
pub use sorting::SortingEngine;

use crate::capability::BackingContainer;

/// The interface shared by both engine variants.
///
/// `T` is the element type and `C` the backing container.
pub trait SetAlgebraEngine<T, C>: Sized {
    /// Creates an engine that takes ownership of `container`.
    fn from_container(container: C) -> Self;

    /// Returns a reference to the owned container.
    fn container(&self) -> &C;

    /// Returns a mutable reference to the owned container.
    fn container_mut(&mut self) -> &mut C;

    /// Consumes the engine and returns the owned container.
    fn into_container(self) -> C;

    /// Establishes the merge precondition for both operands.
    ///
    /// The sorting engine sorts both containers in place; the
    /// order-preserving engine leaves them untouched.
    fn arrange(&mut self, other: &mut Self);

    /// Merges the union of both operands without arranging them first.
    ///
    /// Both operands must already satisfy the merge precondition, either
    /// through [`arrange`](Self::arrange) or because they are ascending.
    fn merge_union(&self, other: &Self) -> C;

    /// Merges the intersection of both operands without arranging them first.
    fn merge_intersection(&self, other: &Self) -> C;

    /// Merges the difference of both operands without arranging them first.
    fn merge_difference(&self, other: &Self) -> C;

    /// Returns a new container holding the union of both operands.
    #[inline]
    fn union(&mut self, other: &mut Self) -> C {
        self.arrange(other);
        self.merge_union(other)
    }

    /// Returns a new container holding the intersection of both operands.
    #[inline]
    fn intersection(&mut self, other: &mut Self) -> C {
        self.arrange(other);
        self.merge_intersection(other)
    }

    /// Returns a new container holding the elements of `self` that are not
    /// matched in `other`.
    #[inline]
    fn difference(&mut self, other: &mut Self) -> C {
        self.arrange(other);
        self.merge_difference(other)
    }

    /// Returns the number of elements in the owned container.
    #[inline]
    fn len(&self) -> usize
    where
        C: BackingContainer<T>,
    {
        self.container().len()
    }

    /// Returns `true` if the owned container is empty.
    #[inline]
    fn is_empty(&self) -> bool
    where
        C: BackingContainer<T>,
    {
        self.container().is_empty()
    }

    /// Inserts `value` at the container's natural insertion point.
    #[inline]
    fn insert(&mut self, value: T)
    where
        C: BackingContainer<T>,
    {
        self.container_mut().insert_value(value);
    }
}
