// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, policy::report, vec::InplaceVec};

impl<T, const N: usize> InplaceVec<T, N> {
    /// Checked access: `Err(Error::OutOfBounds)` when `index >= len`.
    ///
    /// Always returns the error, whatever the error policy.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.as_slice().get(index).ok_or(Error::OutOfBounds)
    }

    /// Mutable variant of [`at`](InplaceVec::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.as_mut_slice().get_mut(index).ok_or(Error::OutOfBounds)
    }

    /// Returns the first element. An empty vector reports [`Error::Empty`]
    /// through the error policy.
    #[inline]
    #[track_caller]
    pub fn front(&self) -> Result<&T, Error> {
        self.as_slice().first().ok_or_else(|| report(Error::Empty))
    }

    /// Mutable variant of [`front`](InplaceVec::front).
    #[inline]
    #[track_caller]
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        self.as_mut_slice().first_mut().ok_or_else(|| report(Error::Empty))
    }

    /// Returns the last element. An empty vector reports [`Error::Empty`]
    /// through the error policy.
    #[inline]
    #[track_caller]
    pub fn back(&self) -> Result<&T, Error> {
        self.as_slice().last().ok_or_else(|| report(Error::Empty))
    }

    /// Mutable variant of [`back`](InplaceVec::back).
    #[inline]
    #[track_caller]
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        self.as_mut_slice().last_mut().ok_or_else(|| report(Error::Empty))
    }

    /// Returns a pointer to the first live element.
    ///
    /// An empty vector has no element to point at and reports [`Error::Empty`]
    /// through the error policy. Use [`as_ptr`](InplaceVec::as_ptr) for the
    /// unchecked base address.
    #[inline]
    #[track_caller]
    pub fn data(&self) -> Result<*const T, Error> {
        if self.is_empty() {
            return Err(report(Error::Empty));
        }
        Ok(self.as_ptr())
    }

    /// Mutable variant of [`data`](InplaceVec::data).
    #[inline]
    #[track_caller]
    pub fn data_mut(&mut self) -> Result<*mut T, Error> {
        if self.is_empty() {
            return Err(report(Error::Empty));
        }
        Ok(self.as_mut_ptr())
    }
}
