// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `inplace-vec`
//!
//! A `no_std`, fixed-capacity vector that stores its elements inline and
//! never allocates.
//!
//! The core type, [`InplaceVec<T, N>`], reserves room for `N` elements inside
//! the value itself and tracks a logical length `len ∈ 0..=N`. Only the
//! occupied prefix holds constructed values: an empty vector constructs no
//! `T`, removed elements are dropped immediately, and `T` needs neither
//! `Copy` nor `Default`.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You are in a `no_std` or embedded environment.
//! - The maximum number of elements is known at compile time.
//! - You want `Vec`-like insert/erase/resize semantics with predictable,
//!   allocation-free behavior.
//!
//! It may not be the best fit if:
//!
//! - You need very large capacities (the whole buffer lives wherever the
//!   vector lives, usually the stack).
//! - You move vectors around by value a lot (a move copies the full buffer).
//!
//! ## Error policy
//!
//! Operations with preconditions return `Result<_, Error>`. The response to a
//! violation is fixed at build time by the `recoverable-errors` feature and
//! exposed as [`FAIL_FAST`]:
//!
//! - **default (fail fast)**: the call panics with the error text (e.g.
//!   `"capacity exceeded"`) before the vector is modified;
//! - **`recoverable-errors`**: the call returns `Err` and the vector is
//!   unchanged.
//!
//! Code written against the `Result` signatures behaves correctly under
//! either policy. A few entry points bypass the policy:
//!
//! - [`InplaceVec::at`] / [`InplaceVec::at_mut`] always return
//!   [`Error::OutOfBounds`];
//! - `try_*` methods, [`TryFrom`], and [`InplaceVec::pop`] report failure
//!   through their return value;
//! - `Index`/`IndexMut`, [`InplaceVec::drain`] with an invalid range, and
//!   [`Extend`]/[`FromIterator`] on overflow always panic, like their `Vec`
//!   and slice counterparts.
//!
//! ## Features
//!
//! - `recoverable-errors`: return errors instead of panicking (see above).
//! - `serde`: `Serialize` / `Deserialize` for `InplaceVec<T, N>`.
//!   Deserializing more than `N` elements is an error.
//!
//! ## Example
//!
//! ```rust
//! use inplace_vec::{erase_if, InplaceVec};
//!
//! let mut v: InplaceVec<String, 4> = InplaceVec::new();
//! v.push("a".into()).unwrap();
//! v.push("c".into()).unwrap();
//! v.insert(1, "b".into()).unwrap();
//! assert_eq!(v, ["a", "b", "c"]);
//!
//! assert_eq!(erase_if(&mut v, |s| s == "b"), 1);
//! assert_eq!(v.len(), 2);
//! assert_eq!(v.spare_capacity(), 2);
//! ```
//!
//! See [`InplaceVec`] for detailed behavior, including insertion strategy and
//! iterator semantics.

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod cmp;
mod erase;
mod error;
mod index;
mod iter;
mod policy;
#[cfg(feature = "serde")]
mod serde;
mod storage;
#[cfg(test)]
mod test_util;
mod vec;

// Public exports (crate API surface)
pub use cmp::synth_three_way;
pub use erase::{erase, erase_if};
pub use error::Error;
pub use iter::IntoIter;
pub use policy::FAIL_FAST;
pub use vec::{Drain, InplaceVec};
