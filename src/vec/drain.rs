// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{iter::IntoIter, vec::remove::checked_range, vec::InplaceVec};

// Core imports
use core::{
    fmt,
    iter::FusedIterator,
    ops::{Range, RangeBounds},
};

/// Iterator returned by [`InplaceVec::drain`].
///
/// - Holds a mutable borrow of the parent vector for the iterator's lifetime.
/// - The drained elements have already been moved out of the parent into a
///   temporary `InplaceVec`; this wraps an `IntoIter` over that temporary.
/// - Elements not yielded are dropped with the iterator.
pub struct Drain<'a, T, const N: usize> {
    pub(crate) _parent: &'a mut InplaceVec<T, N>,
    pub(crate) iter: IntoIter<T, N>,
}

impl<T, const N: usize> Drain<'_, T, N> {
    /// Returns the drained elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        self.iter.as_slice()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Drain<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.as_slice()).finish()
    }
}

impl<T, const N: usize> Iterator for Drain<'_, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        self.iter.nth(n)
    }
}

impl<T, const N: usize> DoubleEndedIterator for Drain<'_, T, N> {
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }

    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.iter.nth_back(n)
    }
}

impl<T, const N: usize> ExactSizeIterator for Drain<'_, T, N> {}
impl<T, const N: usize> FusedIterator for Drain<'_, T, N> {}

impl<T, const N: usize> InplaceVec<T, N> {
    /// Removes the elements in `range` and returns them as an iterator.
    ///
    /// The elements are removed immediately and the tail is moved left to
    /// close the gap, as with `Vec::drain`.
    ///
    /// # Panics
    ///
    /// Panics if the range is invalid, like slice indexing:
    /// - `start > end`
    /// - `end > self.len()`
    ///
    /// (A range with `start == end` yields an empty iterator and leaves
    /// the vector unchanged.)
    ///
    /// # Examples
    /// ```
    /// # use inplace_vec::InplaceVec;
    /// let mut v: InplaceVec<_, 4> = [1, 2, 3, 4].into();
    /// let drained: InplaceVec<_, 4> = v.drain(1..3).collect();
    /// assert_eq!(drained, [2, 3]);
    /// assert_eq!(v, [1, 4]);
    /// ```
    #[track_caller]
    pub fn drain<R: RangeBounds<usize>>(&mut self, range: R) -> Drain<'_, T, N> {
        let len = self.len;
        let Some(Range { start, end }) = checked_range(&range, len) else {
            panic!("drain range out of bounds for length {len}");
        };

        // Move the drained block to the end, then lift it off.
        let count = end - start;
        self.as_mut_slice()[start..].rotate_left(count);
        let drained = self.move_tail(len - count);

        Drain {
            _parent: self,
            iter: drained.into_iter(),
        }
    }
}
