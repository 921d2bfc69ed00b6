// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    policy::{ensure, fail_fast},
    vec::InplaceVec,
};

/// Appends every item. Overflow always fails fast: the trait signature cannot
/// carry an error. Use [`InplaceVec::append_range`] or
/// [`InplaceVec::try_append_range`] to handle overflow.
impl<T, const N: usize> Extend<T> for InplaceVec<T, N> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            if self.try_push(item).is_err() {
                fail_fast(Error::Full);
            }
        }
    }
}

impl<'a, T: Copy + 'a, const N: usize> Extend<&'a T> for InplaceVec<T, N> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> InplaceVec<T, N> {
    /// Appends clones of `src` if they all fit.
    ///
    /// Otherwise reports [`Error::Full`] through the error policy without
    /// cloning anything.
    #[inline]
    #[track_caller]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        ensure(src.len() <= self.spare_capacity(), Error::Full)?;
        for item in src {
            // SAFETY: `src.len() <= N - len` checked above.
            unsafe { self.push_unchecked(item.clone()) };
        }
        Ok(())
    }

    /// Appends every element of `iter`, all-or-nothing.
    ///
    /// If the input does not fit, the elements appended by this call are
    /// dropped again and [`Error::Full`] is reported through the error policy.
    #[inline]
    #[track_caller]
    pub fn append_range<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        self.insert_iter(self.len, iter).map(|_| ())
    }

    /// Appends elements from `iter` until the input ends or the vector is full,
    /// and returns the unconsumed remainder of the input.
    ///
    /// An element is only pulled from the iterator when there is room for it,
    /// so nothing is lost: the returned iterator starts at the first element
    /// that did not fit. Elements appended before the vector filled up stay
    /// appended. Never consults the error policy.
    ///
    /// ```rust
    /// use inplace_vec::InplaceVec;
    ///
    /// let mut v: InplaceVec<u8, 3> = InplaceVec::new();
    /// let rest = v.try_append_range(1..=5);
    /// assert_eq!(v, [1, 2, 3]);
    /// assert_eq!(rest.collect::<Vec<_>>(), [4, 5]);
    /// ```
    pub fn try_append_range<I: IntoIterator<Item = T>>(&mut self, iter: I) -> I::IntoIter {
        let mut iter = iter.into_iter();
        while self.len < N {
            let Some(item) = iter.next() else { break };
            // SAFETY: `len < N` is the loop condition.
            unsafe { self.push_unchecked(item) };
        }
        iter
    }
}
