// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, policy::ensure, vec::InplaceVec};

// Core imports
use core::ptr;

impl<T, const N: usize> InplaceVec<T, N> {
    /// Drops every live element and sets `len = 0`.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops the elements in `[new_len, len)` if `new_len < len`; otherwise a no-op.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail_len = self.len - new_len;
        let tail = ptr::slice_from_raw_parts_mut(self.storage.slot_mut(new_len), tail_len);
        // `len` shrinks first so a panicking `Drop` cannot cause a double drop.
        self.len = new_len;
        // SAFETY: `[new_len, old_len)` were live and are no longer counted.
        unsafe { ptr::drop_in_place(tail) }
    }

    /// Resizes to `new_len`, filling with clones of `value` when growing.
    ///
    /// Reports [`Error::Full`] through the error policy if `new_len > N`; the
    /// vector is unchanged in that case.
    #[track_caller]
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone())
    }

    /// Resizes to `new_len`, filling with `T::default()` when growing.
    #[track_caller]
    pub fn resize_default(&mut self, new_len: usize) -> Result<(), Error>
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Resizes to `new_len`, filling with values produced by `f` when growing.
    #[track_caller]
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, f: F) -> Result<(), Error> {
        ensure(new_len <= N, Error::Full)?;
        if new_len < self.len {
            self.truncate(new_len);
        } else {
            self.fill_to(new_len, f);
        }
        Ok(())
    }

    /// Checks that `n` elements fit; never grows the storage.
    ///
    /// `Ok(())` if `n <= N`, otherwise [`Error::Full`] through the error policy.
    #[inline]
    #[track_caller]
    pub fn reserve(&self, n: usize) -> Result<(), Error> {
        ensure(n <= N, Error::Full)
    }

    /// No-op: the storage is inline and its size is fixed.
    #[inline]
    pub fn shrink_to_fit(&mut self) {}
}
