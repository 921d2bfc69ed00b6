// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `InplaceVec` type and its inherent API.
//!
//! `InplaceVec<T, N>` is a fixed-capacity vector that stores its elements in an
//! inline, uninitialized buffer and tracks a logical length. Methods mirror
//! slice/`Vec` semantics, with explicit capacity checks and fallible variants
//! where appropriate.
//!
//! No heap allocations are performed.

// Invariants:
// - `0 <= len <= N` always holds.
// - Slots `storage[..len]` hold live `T` values.
// - Slots `storage[len..N]` are uninitialized and must never be read as `T`.
// - `len` is lowered *before* dropping values, so a panicking `Drop` can leak
//   but never double-drop.

mod access;
mod assign;
mod drain;
mod extend;
mod from;
mod insert;
mod new;
mod push;
mod remove;
mod resize;
mod retain;
mod slice;
mod split_off;

pub use drain::Drain;

// Crate imports
use crate::storage::RawStorage;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
    ptr,
};

/// A fixed-capacity vector whose elements live inline, inside the value itself.
///
/// `InplaceVec<T, N>` owns a buffer of `N` slots and a logical length
/// `len ∈ 0..=N`. Only the prefix `[0, len)` holds live values; the rest of the
/// buffer is uninitialized memory that is never read, compared or dropped.
///
/// - capacity is known at compile time (`N`) and never changes;
/// - creating an empty vector constructs no `T` at all;
/// - elements are dropped exactly once, in index order, when they leave the
///   vector or when the vector itself is dropped;
/// - no heap allocations are performed.
///
/// # Error reporting
///
/// Operations with preconditions (capacity, positions, non-emptiness) return
/// `Result<_, Error>`. What happens on a violation depends on the build-time
/// policy (see [`FAIL_FAST`](crate::FAIL_FAST)): by default the call panics
/// before touching the vector; with the `recoverable-errors` feature it
/// returns the error and the vector is unchanged.
///
/// Some entry points never consult the policy:
///
/// - [`at`](InplaceVec::at) always returns [`Error::OutOfBounds`](crate::Error::OutOfBounds);
/// - `try_*` methods, [`TryFrom`] and [`pop`](InplaceVec::pop) report failure
///   through their return value (`Err`, `None`, or a remainder iterator).
///
/// # Insertion
///
/// Every positional insert appends the new elements at the end of the live
/// prefix and then rotates them into place, so each element is constructed
/// exactly once and only moved afterwards.
///
/// # Examples
///
/// ```rust
/// use inplace_vec::InplaceVec;
///
/// let mut v: InplaceVec<u8, 4> = InplaceVec::new();
/// v.push(1).unwrap();
/// v.extend_from_slice(&[2, 3]).unwrap();
/// v.insert(1, 9).unwrap();
/// assert_eq!(v, [1, 9, 2, 3]);
/// assert!(v.is_full());
/// assert!(v.try_push(5).is_err());
/// ```
pub struct InplaceVec<T, const N: usize> {
    pub(crate) storage: RawStorage<T, N>,
    pub(crate) len: usize,
}

impl<T, const N: usize> InplaceVec<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the largest number of elements the vector can ever hold (always `N`).
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`. A zero-capacity vector is always full.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that fit.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Forces the length of the vector to `new_len`.
    ///
    /// # Safety
    ///
    /// - `new_len` must be `<= N`.
    /// - Slots `[0, new_len)` must hold initialized values.
    /// - Values in `[new_len, old_len)` are forgotten, not dropped.
    #[inline]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= N);
        self.len = new_len;
    }

    /// Moves every element into a new vector, leaving `self` empty and reusable.
    ///
    /// This is the equivalent of a move that leaves its source valid: after
    /// `let b = a.take();`, `a.len() == 0` and `b` holds what `a` held.
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Exchanges contents and lengths with `other`.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, const N: usize> Drop for InplaceVec<T, N> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` are live; `drop_in_place` on a slice drops them in
        // index order and they are never touched again.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for InplaceVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InplaceVec")
            .field("len", &self.len)
            .field("capacity", &N)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: Hash, const N: usize> Hash for InplaceVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Clone, const N: usize> Clone for InplaceVec<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for item in self {
            // SAFETY: `out.len < self.len <= N` before every push.
            unsafe { out.push_unchecked(item.clone()) };
        }
        out
    }

    /// Clears `self`, then clones every element of `source` into it.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for item in source {
            // SAFETY: `self.len < source.len <= N` before every push.
            unsafe { self.push_unchecked(item.clone()) };
        }
    }
}

impl<T, const N: usize> Deref for InplaceVec<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for InplaceVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for InplaceVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for InplaceVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for InplaceVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for InplaceVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
