//! Linear merge kernels over ascending sequences.
//!
//! Each kernel walks two ascending sequences with one cursor per input and
//! hands every result element to an output callback, so the result can be
//! inserted into any container at its natural insertion point.
//!
//! Duplicates follow the usual sorted-range semantics. For an element with
//! `a` copies on the left and `b` copies on the right:
//!
//! | Kernel                | Copies emitted      |
//! |-----------------------|---------------------|
//! | [`union_into`]        | `max(a, b)`         |
//! | [`intersection_into`] | `min(a, b)`         |
//! | [`difference_into`]   | `a.saturating_sub(b)` |
//!
//! # Preconditions
//!
//! Both inputs must be ascending. This is not checked: unsorted input yields a
//! wrong result, never a panic. [`is_ascending`] can be used to verify it.

use std::cmp::Ordering;

/// Emits the union of two ascending sequences in ascending order.
///
/// # Complexity
///
/// O(n + m) comparisons.
///
/// # Examples
///
/// ```rust
/// use mathset::engine::merge::union_into;
///
/// let mut result = Vec::new();
/// union_into(&[1, 3, 5], &[2, 3, 4], |element| result.push(*element));
/// assert_eq!(result, vec![1, 2, 3, 4, 5]);
/// ```
pub fn union_into<'a, T, L, R, F>(left: L, right: R, mut emit: F)
where
    T: Ord + 'a,
    L: IntoIterator<Item = &'a T>,
    R: IntoIterator<Item = &'a T>,
    F: FnMut(&'a T),
{
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(left_element), Some(right_element)) =
        (left.peek().copied(), right.peek().copied())
    {
        match left_element.cmp(right_element) {
            Ordering::Less => {
                emit(left_element);
                left.next();
            }
            Ordering::Greater => {
                emit(right_element);
                right.next();
            }
            Ordering::Equal => {
                emit(left_element);
                left.next();
                right.next();
            }
        }
    }

    left.for_each(&mut emit);
    right.for_each(emit);
}

/// Emits the intersection of two ascending sequences in ascending order.
///
/// # Complexity
///
/// O(n + m) comparisons.
///
/// # Examples
///
/// ```rust
/// use mathset::engine::merge::intersection_into;
///
/// let mut result = Vec::new();
/// intersection_into(&[1, 2, 2, 3], &[2, 2, 2, 4], |element| result.push(*element));
/// assert_eq!(result, vec![2, 2]);
/// ```
pub fn intersection_into<'a, T, L, R, F>(left: L, right: R, mut emit: F)
where
    T: Ord + 'a,
    L: IntoIterator<Item = &'a T>,
    R: IntoIterator<Item = &'a T>,
    F: FnMut(&'a T),
{
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(left_element), Some(right_element)) =
        (left.peek().copied(), right.peek().copied())
    {
        match left_element.cmp(right_element) {
            Ordering::Less => {
                left.next();
            }
            Ordering::Greater => {
                right.next();
            }
            Ordering::Equal => {
                emit(left_element);
                left.next();
                right.next();
            }
        }
    }
}

/// Emits the elements of the left sequence that are not matched in the right
/// sequence, in ascending order.
///
/// # Complexity
///
/// O(n + m) comparisons.
///
/// # Examples
///
/// ```rust
/// use mathset::engine::merge::difference_into;
///
/// let mut result = Vec::new();
/// difference_into(&[1, 2, 3, 7, 8, 9], &[1, 2, 4, 5], |element| result.push(*element));
/// assert_eq!(result, vec![3, 7, 8, 9]);
/// ```
pub fn difference_into<'a, T, L, R, F>(left: L, right: R, mut emit: F)
where
    T: Ord + 'a,
    L: IntoIterator<Item = &'a T>,
    R: IntoIterator<Item = &'a T>,
    F: FnMut(&'a T),
{
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(left_element), Some(right_element)) =
        (left.peek().copied(), right.peek().copied())
    {
        match left_element.cmp(right_element) {
            Ordering::Less => {
                emit(left_element);
                left.next();
            }
            Ordering::Greater => {
                right.next();
            }
            Ordering::Equal => {
                left.next();
                right.next();
            }
        }
    }

    left.for_each(emit);
}

/// Returns `true` if the sequence is non-decreasing.
///
/// # Examples
///
/// ```rust
/// use mathset::engine::merge::is_ascending;
///
/// assert!(is_ascending(&[1, 1, 2, 5]));
/// assert!(!is_ascending(&[1, 3, 2]));
/// assert!(is_ascending::<i32, _>(&[]));
/// ```
pub fn is_ascending<'a, T, I>(elements: I) -> bool
where
    T: Ord + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut elements = elements.into_iter();
    let Some(mut previous) = elements.next() else {
        return true;
    };
    for current in elements {
        if current < previous {
            return false;
        }
        previous = current;
    }
    true
}

/// Returns `true` if every element of `target` is found in `receiver` by a
/// simultaneous ascending sweep.
///
/// Both cursors advance on a match; only the receiver's cursor advances while
/// the receiver's element is smaller. The sweep stops with `false` as soon as
/// the receiver's element exceeds the wanted one or the receiver runs out.
///
/// # Complexity
///
/// O(n + m) comparisons.
///
/// # Examples
///
/// ```rust
/// use mathset::engine::merge::contains_in_order;
///
/// assert!(contains_in_order(&[1, 2, 4, 7], &[2, 7]));
/// assert!(!contains_in_order(&[1, 2, 4, 7], &[3]));
/// ```
pub fn contains_in_order<'a, T, R, W>(receiver: R, target: W) -> bool
where
    T: Ord + 'a,
    R: IntoIterator<Item = &'a T>,
    W: IntoIterator<Item = &'a T>,
{
    let mut receiver = receiver.into_iter();

    'targets: for wanted in target {
        for candidate in receiver.by_ref() {
            match candidate.cmp(wanted) {
                Ordering::Equal => continue 'targets,
                Ordering::Greater => return false,
                Ordering::Less => {}
            }
        }
        return false;
    }

    true
}
