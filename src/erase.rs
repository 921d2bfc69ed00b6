// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Free-function removal by value or predicate.

// Crate imports
use crate::vec::InplaceVec;

/// Moves every element for which `keep` returns `true` to the front, in
/// their original order, and returns how many were kept.
///
/// The removed elements end up in `[kept, len)` in unspecified order. Every
/// element stays live, so a panic in `keep` leaves the slice consistent.
pub(crate) fn stable_partition<T>(slice: &mut [T], mut keep: impl FnMut(&mut T) -> bool) -> usize {
    let mut kept = 0;
    for i in 0..slice.len() {
        if keep(&mut slice[i]) {
            slice.swap(kept, i);
            kept += 1;
        }
    }
    kept
}

/// Removes every element equal to `value` and returns how many were removed.
///
/// ```rust
/// use inplace_vec::{erase, InplaceVec};
///
/// let mut v: InplaceVec<i32, 6> = [1, 2, 1, 3, 1, 4].into();
/// assert_eq!(erase(&mut v, &1), 3);
/// assert_eq!(v, [2, 3, 4]);
/// ```
pub fn erase<T: PartialEq, const N: usize>(v: &mut InplaceVec<T, N>, value: &T) -> usize {
    erase_if(v, |x| x == value)
}

/// Removes every element matching `pred` and returns how many were removed.
///
/// Survivors keep their relative order. The predicate runs once per element,
/// front to back, and the removed block is dropped in one pass afterwards.
pub fn erase_if<T, F, const N: usize>(v: &mut InplaceVec<T, N>, mut pred: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let before = v.len();
    let kept = stable_partition(v.as_mut_slice(), |x| !pred(x));
    v.truncate(kept);
    before - kept
}
