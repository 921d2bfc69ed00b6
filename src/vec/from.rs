// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::InplaceVec};

impl<T, const N: usize> From<[T; N]> for InplaceVec<T, N> {
    fn from(src: [T; N]) -> Self {
        let mut v = Self::new();
        for item in src {
            // SAFETY: the array holds exactly `N` items.
            unsafe { v.push_unchecked(item) };
        }
        v
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for InplaceVec<T, N> {
    type Error = Error;

    /// Clones `src` into a new vector, or returns [`Error::Full`] without
    /// cloning anything if `src.len() > N`. Never consults the error policy.
    fn try_from(src: &[T]) -> Result<Self, Error> {
        if src.len() > N {
            return Err(Error::Full);
        }
        let mut v = Self::new();
        for item in src {
            // SAFETY: `src.len() <= N`.
            unsafe { v.push_unchecked(item.clone()) };
        }
        Ok(v)
    }
}

impl<T, const N: usize> FromIterator<T> for InplaceVec<T, N> {
    /// Collects every item. Overflow always fails fast; use
    /// [`InplaceVec::try_from_iter`] to handle it.
    #[track_caller]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T, const N: usize> InplaceVec<T, N> {
    /// Tries to construct from an iterator, returning [`Error::Full`] if it
    /// yields more than `N` elements.
    ///
    /// - Elements are appended in iterator order.
    /// - On overflow, the elements collected so far are dropped; at most `N + 1`
    ///   items are pulled from the iterator.
    /// - Never consults the error policy.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut v = Self::new();
        let mut rest = v.try_append_range(iter);
        if rest.next().is_some() {
            return Err(Error::Full);
        }
        Ok(v)
    }
}
