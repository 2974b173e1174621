//! # mathset
//!
//! Mathematical sets over any backing container, with the set-algebra
//! strategy chosen at compile time from the container's capabilities.
//!
//! ## Overview
//!
//! - **Capabilities**: each container declares whether it can be sorted in
//!   place and whether it can pre-allocate storage ([`capability`]).
//! - **Engines**: a sorting engine for sortable containers and an
//!   order-preserving engine for everything else, sharing one linear merge
//!   ([`engine`]).
//! - **Sets**: [`MathSet`], a value-semantic handle owning one engine
//!   ([`set`]).
//!
//! ## Feature Flags
//!
//! - `smallvec` (default): `smallvec::SmallVec` as a backing container
//! - `arrayvec`: `arrayvec::ArrayVec` as a backing container
//! - `vec-default`: use `Vec<T>` instead of `BTreeSet<T>` as the default
//!   backing container
//! - `full`: enable all backing containers
//!
//! ## Example
//!
//! ```rust
//! use mathset::prelude::*;
//! use std::collections::BTreeSet;
//!
//! let mut evens: MathSet<u32, BTreeSet<u32>> = (0..10).step_by(2).collect();
//! let mut small: MathSet<u32, BTreeSet<u32>> = (0..5).collect();
//!
//! assert_eq!(evens.intersection(&mut small).to_string(), "[0, 2, 4]");
//! assert_eq!(evens.difference(&mut small).to_string(), "[6, 8]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use mathset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::capability::{
        BackingContainer, Capability, ReserveCapacity, SetBacking, SortInPlace, Supported,
        Unsupported, is_sortable, supports_reservation,
    };
    pub use crate::engine::SetAlgebraEngine;
    pub use crate::error::{MathSetError, Operand};
    pub use crate::set::MathSet;
}

pub mod capability;
pub mod engine;
pub mod error;
pub mod set;

pub use crate::error::MathSetError;
pub use crate::set::MathSet;

static_assertions::assert_impl_all!(MathSet<i32, Vec<i32>>: Send, Sync, Clone, Default);
static_assertions::assert_type_eq_all!(
    capability::EngineOf<i32, Vec<i32>>,
    engine::SortingEngine<i32, Vec<i32>>
);
static_assertions::assert_type_eq_all!(
    capability::EngineOf<i32, std::collections::BTreeSet<i32>>,
    engine::OrderPreservingEngine<i32, std::collections::BTreeSet<i32>>
);
