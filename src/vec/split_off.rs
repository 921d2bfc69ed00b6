// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, policy::ensure, vec::InplaceVec};

// Core imports
use core::ptr;

impl<T, const N: usize> InplaceVec<T, N> {
    /// Splits the vector into two at index `at`.
    ///
    /// On success:
    /// - `self` is left containing the prefix `[0, at)`,
    /// - the returned vector contains the tail `[at, len)`, moved, not cloned.
    ///
    /// Reports [`Error::OutOfBounds`] through the error policy if `at > len`;
    /// `self` is unchanged in that case.
    #[track_caller]
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        ensure(at <= self.len, Error::OutOfBounds)?;
        Ok(self.move_tail(at))
    }

    /// Moves `[at, len)` into a new vector. Requires `at <= len`.
    pub(crate) fn move_tail(&mut self, at: usize) -> Self {
        debug_assert!(at <= self.len);
        let tail_len = self.len - at;
        let mut other = Self::new();
        if tail_len > 0 {
            // SAFETY: `[at, len)` are live in `self` and `other` is empty with
            // the same capacity. Ownership transfers by updating both lengths
            // with nothing in between that can panic.
            unsafe {
                ptr::copy_nonoverlapping(self.storage.slot(at), other.as_mut_ptr(), tail_len);
                self.set_len(at);
                other.set_len(tail_len);
            }
        }
        other
    }
}
