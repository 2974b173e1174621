//! Error types for checked set operations.
//!
//! The unchecked operations of [`MathSet`](crate::set::MathSet) never fail:
//! a broken ordering precondition only produces a wrong result. The checked
//! `try_*` operations and positional erasure report their failures through
//! [`MathSetError`] instead.

/// Identifies one operand of a binary set operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// The set the operation was called on.
    Receiver,
    /// The set passed as the argument.
    Argument,
}

impl std::fmt::Display for Operand {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Receiver => write!(formatter, "receiver"),
            Self::Argument => write!(formatter, "argument"),
        }
    }
}

/// Represents errors reported by checked set operations.
///
/// # Examples
///
/// ```rust
/// use mathset::error::{MathSetError, Operand};
///
/// let error = MathSetError::UnsortedOperand {
///     operand: Operand::Argument,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "argument operand is not in ascending order"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathSetError {
    /// A position passed to `erase_at` does not name an element.
    PositionOutOfBounds {
        /// The requested position.
        position: usize,
        /// The number of elements in the set.
        len: usize,
    },
    /// An operand does not satisfy the ascending-order precondition of a
    /// merge-based operation.
    UnsortedOperand {
        /// The offending operand.
        operand: Operand,
    },
}

impl std::fmt::Display for MathSetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PositionOutOfBounds { position, len } => write!(
                formatter,
                "position {position} is out of bounds for a set of {len} elements"
            ),
            Self::UnsortedOperand { operand } => {
                write!(formatter, "{operand} operand is not in ascending order")
            }
        }
    }
}

impl std::error::Error for MathSetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_out_of_bounds_display() {
        let error = MathSetError::PositionOutOfBounds {
            position: 7,
            len: 3,
        };
        assert_eq!(
            format!("{error}"),
            "position 7 is out of bounds for a set of 3 elements"
        );
    }

    #[test]
    fn test_unsorted_receiver_display() {
        let error = MathSetError::UnsortedOperand {
            operand: Operand::Receiver,
        };
        assert_eq!(
            format!("{error}"),
            "receiver operand is not in ascending order"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(MathSetError::UnsortedOperand {
            operand: Operand::Argument,
        });
        assert!(error.source().is_none());
    }
}
