// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`InplaceVec`](crate::InplaceVec).
//!
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Elements it does not yield are
//!   dropped with it.
//! - `&InplaceVec` and `&mut InplaceVec` iterate as slices.

// Crate imports
use crate::{storage::RawStorage, vec::InplaceVec};

// Core imports
use core::{fmt, iter::FusedIterator, mem::ManuallyDrop, ptr};

/// Owned iterator returned by `InplaceVec::into_iter()`.
///
/// Slots `[front, back)` of `storage` are live; everything else has been
/// moved out or was never initialized.
pub struct IntoIter<T, const N: usize> {
    pub(crate) storage: RawStorage<T, N>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T, const N: usize> IntoIter<T, N> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        let base = self.storage.as_ptr().wrapping_add(self.front);
        // SAFETY: `[front, back)` are live and `front <= back <= N`.
        unsafe { core::slice::from_raw_parts(base, self.back - self.front) }
    }

    /// Returns the elements not yet yielded, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let base = self.storage.as_mut_ptr().wrapping_add(self.front);
        // SAFETY: as in `as_slice`, with exclusive access through `&mut self`.
        unsafe { core::slice::from_raw_parts_mut(base, self.back - self.front) }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let i = self.front;
        self.front += 1;
        // SAFETY: slot `i` was live and is now outside `[front, back)`, so it
        // is read exactly once.
        Some(unsafe { self.storage.slot(i).read() })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let skip = n.min(self.back - self.front);
        let skipped = ptr::slice_from_raw_parts_mut(
            self.storage.as_mut_ptr().wrapping_add(self.front),
            skip,
        );
        self.front += skip;
        // SAFETY: the skipped slots were live and are no longer tracked.
        unsafe { ptr::drop_in_place(skipped) };
        self.next()
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: slot `back` was live and is now outside `[front, back)`.
        Some(unsafe { self.storage.slot(self.back).read() })
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let skip = n.min(self.back - self.front);
        self.back -= skip;
        let skipped =
            ptr::slice_from_raw_parts_mut(self.storage.as_mut_ptr().wrapping_add(self.back), skip);
        // SAFETY: the skipped slots were live and are no longer tracked.
        unsafe { ptr::drop_in_place(skipped) };
        self.next_back()
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        // SAFETY: `[front, back)` are the remaining live values.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a InplaceVec<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut InplaceVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for InplaceVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        let this = ManuallyDrop::new(self);
        let back = this.len;
        // SAFETY: `this` is never dropped, so the storage and the live values
        // in it move into the iterator exactly once.
        let storage = unsafe { ptr::read(&this.storage) };
        IntoIter {
            storage,
            front: 0,
            back,
        }
    }
}
