// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    policy::{ensure, report},
    vec::InplaceVec,
};

// Core imports
use core::ops::{Bound, Range, RangeBounds};

/// Resolves `range` against `len`; `None` if it is inverted or exceeds `len`.
pub(crate) fn checked_range<R: RangeBounds<usize>>(range: &R, len: usize) -> Option<Range<usize>> {
    let start = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i.checked_add(1)?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&i) => i.checked_add(1)?,
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };
    (start <= end && end <= len).then_some(start..end)
}

impl<T, const N: usize> InplaceVec<T, N> {
    /// Removes and returns the last element, or `None` if the vector is empty.
    ///
    /// Never consults the error policy.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` was live and is no longer
        // counted, so ownership moves out exactly once.
        Some(unsafe { self.storage.slot(self.len).read() })
    }

    /// Removes and returns the last element.
    ///
    /// An empty vector reports [`Error::Empty`] through the error policy.
    #[inline]
    #[track_caller]
    pub fn pop_back(&mut self) -> Result<T, Error> {
        self.pop().ok_or_else(|| report(Error::Empty))
    }

    /// Removes and returns the element at `index`, moving the tail left.
    ///
    /// Reports [`Error::OutOfBounds`] through the error policy if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        ensure(index < self.len, Error::OutOfBounds)?;
        self.as_mut_slice()[index..].rotate_left(1);
        // SAFETY: `len > index >= 0`, so the vector is not empty.
        Ok(unsafe { self.pop().unwrap_unchecked() })
    }

    /// Removes and returns the element at `index`, replacing it with the last
    /// element. Does not preserve order; O(1).
    ///
    /// Reports [`Error::OutOfBounds`] through the error policy if `index >= len`.
    #[track_caller]
    pub fn swap_remove(&mut self, index: usize) -> Result<T, Error> {
        ensure(index < self.len, Error::OutOfBounds)?;
        let last = self.len - 1;
        self.as_mut_slice().swap(index, last);
        // SAFETY: `len > index >= 0`, so the vector is not empty.
        Ok(unsafe { self.pop().unwrap_unchecked() })
    }

    /// Erases the elements in `range` and returns the range start.
    ///
    /// The tail `[end, len)` is moved left into the hole, then the erased
    /// elements, now trailing, are dropped. An empty range is a no-op.
    ///
    /// Reports [`Error::OutOfBounds`] through the error policy if the range is
    /// inverted or ends past `len`; the vector is unchanged in that case.
    #[track_caller]
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> Result<usize, Error> {
        let Some(Range { start, end }) = checked_range(&range, self.len) else {
            return Err(report(Error::OutOfBounds));
        };
        let erased = end - start;
        if erased == 0 {
            return Ok(start);
        }
        self.as_mut_slice()[start..].rotate_left(erased);
        self.truncate(self.len - erased);
        Ok(start)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::checked_range;
    use crate::test_util::{signals, values, Tracked};
    use crate::{Error, InplaceVec};
    use core::ops::Bound;

    #[test]
    fn test_pop_and_pop_back() {
        let mut v: InplaceVec<i32, 2> = InplaceVec::try_from(&[1, 2][..]).unwrap();
        assert_eq!(v.pop_back(), Ok(2));
        assert_eq!(v.pop(), Some(1));
        assert_eq!(v.pop(), None);
        signals(Error::Empty, || v.pop_back());
    }

    #[test]
    fn test_remove_and_swap_remove() {
        let mut r: InplaceVec<i32, 5> = InplaceVec::from([1, 2, 3, 4, 5]);
        assert_eq!(r.remove(2), Ok(3));
        assert_eq!(r, [1, 2, 4, 5]);
        assert_eq!(r.swap_remove(0), Ok(1));
        assert_eq!(r, [5, 2, 4]);
        assert_eq!(r.swap_remove(2), Ok(4));
        assert_eq!(r, [5, 2]);
    }

    #[test]
    fn test_remove_first_and_last() {
        let mut v: InplaceVec<i32, 4> = InplaceVec::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v.remove(0), Ok(1));
        assert_eq!(v.remove(1), Ok(3));
        assert_eq!(v, [2]);
    }

    #[test]
    fn test_remove_out_of_bounds_is_reported() {
        let mut v: InplaceVec<i32, 4> = InplaceVec::try_from(&[1, 2][..]).unwrap();
        signals(Error::OutOfBounds, || v.remove(2));
        signals(Error::OutOfBounds, || v.swap_remove(5));
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn test_erase_range_moves_tail_and_drops_erased() {
        let base = Tracked::live();
        let mut v: InplaceVec<Tracked, 6> = (0..6).map(Tracked::new).collect();
        assert_eq!(v.erase_range(1..3), Ok(1));
        assert_eq!(values(&v), [0, 3, 4, 5]);
        assert_eq!(Tracked::live() - base, 4);
        assert_eq!(v.erase_range(2..), Ok(2));
        assert_eq!(values(&v), [0, 3]);
        assert_eq!(v.erase_range(..), Ok(0));
        assert!(v.is_empty());
        assert_eq!(Tracked::live(), base);
    }

    #[test]
    fn test_erase_empty_range_is_noop() {
        let mut v: InplaceVec<i32, 4> = InplaceVec::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v.erase_range(1..1), Ok(1));
        assert_eq!(v.erase_range(3..3), Ok(3));
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_erase_invalid_range_is_reported() {
        let mut v: InplaceVec<i32, 4> = InplaceVec::try_from(&[1, 2, 3][..]).unwrap();
        signals(Error::OutOfBounds, || v.erase_range(2..1));
        signals(Error::OutOfBounds, || v.erase_range(1..4));
        signals(Error::OutOfBounds, || v.erase_range(..=3));
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn test_checked_range_bounds() {
        assert_eq!(checked_range(&(..), 3), Some(0..3));
        assert_eq!(checked_range(&(1..=2), 3), Some(1..3));
        assert_eq!(checked_range(&(Bound::Excluded(0), Bound::Unbounded), 3), Some(1..3));
        assert_eq!(checked_range(&(..=usize::MAX), 3), None);
        assert_eq!(checked_range(&(Bound::Excluded(usize::MAX), Bound::Unbounded), 3), None);
        assert_eq!(checked_range(&(4..), 3), None);
    }
}
