// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    policy::{ensure, report},
    vec::InplaceVec,
};

impl<T, const N: usize> InplaceVec<T, N> {
    /// Replaces the contents with the elements of `iter`.
    ///
    /// Assignment is "clear, then construct": every current element is dropped
    /// first, then the new elements are appended in order. If the input is
    /// known up front (from its `size_hint`) to exceed `N`, [`Error::Full`] is
    /// reported before anything changes. If the overflow is only discovered
    /// while appending, the `N` elements placed so far stay in the vector and
    /// [`Error::Full`] is reported.
    #[track_caller]
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let iter = iter.into_iter();
        ensure(iter.size_hint().0 <= N, Error::Full)?;
        self.clear();
        for item in iter {
            if self.len == N {
                return Err(report(Error::Full));
            }
            // SAFETY: `len < N` checked above.
            unsafe { self.push_unchecked(item) };
        }
        Ok(())
    }

    /// Replaces the contents with clones of `src`.
    ///
    /// Reports [`Error::Full`] before touching the vector if `src.len() > N`.
    #[track_caller]
    pub fn assign_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        ensure(src.len() <= N, Error::Full)?;
        self.clear();
        self.extend_from_slice(src)
    }

    /// Replaces the contents with `n` clones of `value`.
    ///
    /// Reports [`Error::Full`] before touching the vector if `n > N`.
    #[track_caller]
    pub fn assign_elem(&mut self, n: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        ensure(n <= N, Error::Full)?;
        self.clear();
        self.fill_to(n, || value.clone());
        Ok(())
    }
}
