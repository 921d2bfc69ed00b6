// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, policy::ensure, storage::RawStorage, vec::InplaceVec};

impl<T, const N: usize> InplaceVec<T, N> {
    /// Constructs an empty vector. No `T` is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            storage: RawStorage::uninit(),
            len: 0,
        }
    }

    /// Constructs a vector holding `n` clones of `value`.
    ///
    /// Reports [`Error::Full`] through the error policy if `n > N`.
    #[track_caller]
    pub fn from_elem(n: usize, value: T) -> Result<Self, Error>
    where
        T: Clone,
    {
        ensure(n <= N, Error::Full)?;
        let mut v = Self::new();
        v.fill_to(n, || value.clone());
        Ok(v)
    }

    /// Constructs a vector holding `n` default values.
    ///
    /// Reports [`Error::Full`] through the error policy if `n > N`.
    #[track_caller]
    pub fn from_default(n: usize) -> Result<Self, Error>
    where
        T: Default,
    {
        ensure(n <= N, Error::Full)?;
        let mut v = Self::new();
        v.fill_to(n, T::default);
        Ok(v)
    }

    /// Appends values from `f` until `len == n`. Requires `n <= N`.
    pub(crate) fn fill_to(&mut self, n: usize, mut f: impl FnMut() -> T) {
        debug_assert!(n <= N);
        while self.len < n {
            // SAFETY: `len < n <= N`.
            unsafe { self.push_unchecked(f()) };
        }
    }
}

impl<T, const N: usize> Default for InplaceVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
