// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`InplaceVec`](crate::InplaceVec).
//!
//! `Index` and `IndexMut` mirror slice behavior over the live prefix
//! `[0, len)`: every `usize` and range form is accepted, and out-of-bounds or
//! inverted ranges panic, independently of the error policy. Use
//! [`InplaceVec::at`](crate::InplaceVec::at) or `get` for checked access.

// Crate imports
use crate::vec::InplaceVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for InplaceVec<T, N> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for InplaceVec<T, N> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
