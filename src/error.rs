// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `InplaceVec`.
//!
//! These errors represent capacity, bounds and emptiness conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors reported by operations on [`InplaceVec`](crate::InplaceVec).
///
/// Whether a given check reports one of these as `Err` or fails fast is decided
/// by the error policy; see [`FAIL_FAST`](crate::FAIL_FAST).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation would exceed the fixed capacity (`N`).
    Full,
    /// An index, position or range was outside the current logical bounds.
    OutOfBounds,
    /// The operation requires at least one live element.
    Empty,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::Empty => f.write_str("container is empty"),
        }
    }
}

impl CoreError for Error {}
