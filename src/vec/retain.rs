// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{erase::stable_partition, vec::InplaceVec};

impl<T, const N: usize> InplaceVec<T, N> {
    /// Retains only the elements for which `f` returns `true`, preserving order.
    ///
    /// The predicate is applied to each element once, in index order.
    #[inline]
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        self.retain_mut(|x| f(x));
    }

    /// Like [`retain`](InplaceVec::retain), but the predicate may mutate.
    pub fn retain_mut<F: FnMut(&mut T) -> bool>(&mut self, f: F) {
        let kept = stable_partition(self.as_mut_slice(), f);
        self.truncate(kept);
    }
}
