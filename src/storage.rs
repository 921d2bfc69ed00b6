// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw inline storage for `N` values of `T`.
//!
//! `RawStorage` is an inert, correctly sized and aligned block. It never
//! constructs, drops or tracks values: which slots are live is decided
//! entirely by the owning [`InplaceVec`](crate::InplaceVec).

// Core imports
use core::mem::MaybeUninit;

pub(crate) struct RawStorage<T, const N: usize> {
    slots: [MaybeUninit<T>; N],
}

impl<T, const N: usize> RawStorage<T, N> {
    /// A block with every slot uninitialized. No `T` is constructed.
    #[inline]
    pub(crate) const fn uninit() -> Self {
        Self {
            slots: [const { MaybeUninit::uninit() }; N],
        }
    }

    /// Address of slot 0. Dangling but aligned when `N == 0`.
    #[inline]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.slots.as_ptr().cast()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr().cast()
    }

    /// Address of slot `i`. Requires `i < N`.
    #[inline]
    pub(crate) fn slot(&self, i: usize) -> *const T {
        debug_assert!(i < N, "slot {i} out of range for capacity {N}");
        self.as_ptr().wrapping_add(i)
    }

    /// Mutable address of slot `i`. Requires `i < N`.
    #[inline]
    pub(crate) fn slot_mut(&mut self, i: usize) -> *mut T {
        debug_assert!(i < N, "slot {i} out of range for capacity {N}");
        self.as_mut_ptr().wrapping_add(i)
    }
}
