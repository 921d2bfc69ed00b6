// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Equality and ordering for [`InplaceVec`](crate::InplaceVec).
//!
//! Only the occupied prefix `[0, len)` takes part; uninitialized slots are
//! never read. Ordering is lexicographic. For partially ordered elements each
//! pair is compared with [`synth_three_way`], so `partial_cmp` on the
//! container always yields `Some`.

// Crate imports
use crate::vec::InplaceVec;

// Core imports
use core::cmp::Ordering;

/// Three-way comparison for types that may only be partially ordered.
///
/// Uses `partial_cmp` when it gives an answer. Otherwise falls back to `<`,
/// then `>`, and treats the pair as equal when neither holds (e.g. `NaN`).
///
/// ```rust
/// use core::cmp::Ordering;
/// use inplace_vec::synth_three_way;
///
/// assert_eq!(synth_three_way(&1.0, &2.0), Ordering::Less);
/// assert_eq!(synth_three_way(&f64::NAN, &1.0), Ordering::Equal);
/// ```
#[inline]
pub fn synth_three_way<T: PartialOrd<U> + ?Sized, U: ?Sized>(lhs: &T, rhs: &U) -> Ordering {
    if let Some(ord) = lhs.partial_cmp(rhs) {
        return ord;
    }
    if lhs < rhs {
        Ordering::Less
    } else if lhs > rhs {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

fn lexicographic<T: PartialOrd>(lhs: &[T], rhs: &[T]) -> Ordering {
    for (a, b) in lhs.iter().zip(rhs) {
        match synth_three_way(a, b) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    lhs.len().cmp(&rhs.len())
}

fn slice_eq<T: PartialEq<U>, U>(lhs: &[T], rhs: &[U]) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(a, b)| a == b)
}

impl<T, U, const N: usize, const M: usize> PartialEq<InplaceVec<U, M>> for InplaceVec<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &InplaceVec<U, M>) -> bool {
        slice_eq(self.as_slice(), other.as_slice())
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U]> for InplaceVec<T, N> {
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        slice_eq(self.as_slice(), other)
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<&[U]> for InplaceVec<T, N> {
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        slice_eq(self.as_slice(), *other)
    }
}

impl<T: PartialEq<U>, U, const N: usize, const M: usize> PartialEq<[U; M]> for InplaceVec<T, N> {
    #[inline]
    fn eq(&self, other: &[U; M]) -> bool {
        slice_eq(self.as_slice(), other.as_slice())
    }
}

impl<T: Eq, const N: usize> Eq for InplaceVec<T, N> {}

impl<T: PartialOrd, const N: usize, const M: usize> PartialOrd<InplaceVec<T, M>>
    for InplaceVec<T, N>
{
    #[inline]
    fn partial_cmp(&self, other: &InplaceVec<T, M>) -> Option<Ordering> {
        Some(lexicographic(self.as_slice(), other.as_slice()))
    }
}

impl<T: Ord, const N: usize> Ord for InplaceVec<T, N> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
