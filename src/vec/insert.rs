// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    policy::{ensure, report},
    vec::InplaceVec,
};

impl<T, const N: usize> InplaceVec<T, N> {
    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// - Reports [`Error::OutOfBounds`] if `index > len`.
    /// - Reports [`Error::Full`] if the vector is full.
    ///
    /// Both go through the error policy and leave the vector unchanged.
    #[inline]
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T, Error> {
        self.insert_with(index, || value)
    }

    /// Constructs an element from `f` and places it at `index`.
    ///
    /// `f` is only called once both checks of [`insert`](InplaceVec::insert)
    /// have passed.
    #[track_caller]
    pub fn insert_with<F: FnOnce() -> T>(&mut self, index: usize, f: F) -> Result<&mut T, Error> {
        ensure(index <= self.len, Error::OutOfBounds)?;
        ensure(self.len < N, Error::Full)?;
        let old_len = self.len;
        // SAFETY: `len < N` checked above.
        unsafe { self.push_unchecked(f()) };
        Ok(&mut self.rotate_into_place(index, old_len)[0])
    }

    /// Inserts `n` clones of `value` at `index` and returns them as a slice.
    #[track_caller]
    pub fn insert_n(&mut self, index: usize, n: usize, value: T) -> Result<&mut [T], Error>
    where
        T: Clone,
    {
        ensure(index <= self.len, Error::OutOfBounds)?;
        ensure(n <= self.spare_capacity(), Error::Full)?;
        let old_len = self.len;
        self.fill_to(old_len + n, || value.clone());
        Ok(self.rotate_into_place(index, old_len))
    }

    /// Inserts clones of every element of `src` at `index` and returns them as
    /// a slice.
    #[track_caller]
    pub fn insert_slice(&mut self, index: usize, src: &[T]) -> Result<&mut [T], Error>
    where
        T: Clone,
    {
        ensure(index <= self.len, Error::OutOfBounds)?;
        ensure(src.len() <= self.spare_capacity(), Error::Full)?;
        let old_len = self.len;
        for item in src {
            // SAFETY: `src.len() <= N - old_len` checked above.
            unsafe { self.push_unchecked(item.clone()) };
        }
        Ok(self.rotate_into_place(index, old_len))
    }

    /// Inserts every element yielded by `iter` at `index`, in order, and
    /// returns them as a slice.
    ///
    /// If the iterator yields more elements than fit, every element appended by
    /// this call is dropped again, [`Error::Full`] is reported, and the vector
    /// is left as it was. The iterator may have been partially consumed.
    #[track_caller]
    pub fn insert_iter<I: IntoIterator<Item = T>>(
        &mut self,
        index: usize,
        iter: I,
    ) -> Result<&mut [T], Error> {
        ensure(index <= self.len, Error::OutOfBounds)?;
        let iter = iter.into_iter();
        ensure(iter.size_hint().0 <= self.spare_capacity(), Error::Full)?;

        let old_len = self.len;
        for item in iter {
            if self.len == N {
                self.truncate(old_len);
                return Err(report(Error::Full));
            }
            // SAFETY: `len < N` checked above.
            unsafe { self.push_unchecked(item) };
        }
        Ok(self.rotate_into_place(index, old_len))
    }

    /// Rotates the block appended since `old_len` so it starts at `index`, and
    /// returns that block.
    fn rotate_into_place(&mut self, index: usize, old_len: usize) -> &mut [T] {
        let added = self.len - old_len;
        let tail = &mut self.as_mut_slice()[index..];
        tail.rotate_right(added);
        &mut tail[..added]
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::test_util::{panics, signals, values, Tracked};
    use crate::{Error, InplaceVec};

    #[test]
    fn test_insert_at_bounds_and_shift_correctly() {
        let mut v: InplaceVec<i32, 4> = InplaceVec::new();
        v.insert(0, 1).unwrap(); // front of empty
        v.insert(1, 3).unwrap(); // tail
        v.insert(1, 2).unwrap(); // middle
        assert_eq!(v, [1, 2, 3]);
        v.insert(3, 4).unwrap(); // exactly at len
        assert_eq!(v, [1, 2, 3, 4]);
        signals(Error::Full, || v.insert(0, 9).map(|_| ()));
        assert_eq!(v, [1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_err_is_noop() {
        let mut v: InplaceVec<i32, 3> = InplaceVec::try_from(&[1, 2][..]).unwrap();
        signals(Error::OutOfBounds, || v.insert(3, 99).map(|_| ()));
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn test_insert_returns_reference_to_inserted() {
        let mut v: InplaceVec<i32, 4> = InplaceVec::try_from(&[1, 3][..]).unwrap();
        let r = v.insert(1, 2).unwrap();
        assert_eq!(*r, 2);
        *r = 20;
        assert_eq!(v, [1, 20, 3]);
    }

    #[test]
    fn test_insert_with_constructs_in_place() {
        let mut v: InplaceVec<String, 3> = InplaceVec::new();
        v.push(String::from("a")).unwrap();
        v.push(String::from("c")).unwrap();
        v.insert_with(1, || String::from("b")).unwrap();
        assert_eq!(v, ["a", "b", "c"]);
    }

    #[test]
    fn test_insert_n_copies() {
        let mut v: InplaceVec<i32, 6> = InplaceVec::try_from(&[1, 2][..]).unwrap();
        let inserted = v.insert_n(1, 3, 7).unwrap();
        assert_eq!(inserted, &[7, 7, 7]);
        assert_eq!(v, [1, 7, 7, 7, 2]);
        signals(Error::Full, || v.insert_n(0, 2, 0).map(|_| ()));
        assert_eq!(v, [1, 7, 7, 7, 2]);
        assert_eq!(v.insert_n(5, 0, 0).map(|s| s.len()), Ok(0));
    }

    #[test]
    fn test_insert_slice_preserves_order() {
        let mut v: InplaceVec<i32, 6> = InplaceVec::try_from(&[1, 5][..]).unwrap();
        v.insert_slice(1, &[2, 3, 4]).unwrap();
        assert_eq!(v, [1, 2, 3, 4, 5]);
        signals(Error::Full, || v.insert_slice(0, &[8, 9]).map(|_| ()));
        signals(Error::OutOfBounds, || v.insert_slice(6, &[]).map(|_| ()));
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insert_iter_at_front() {
        let mut v: InplaceVec<i32, 5> = InplaceVec::try_from(&[4, 5][..]).unwrap();
        v.insert_iter(0, 1..=3).unwrap();
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insert_iter_overflow_rolls_back() {
        let base = Tracked::live();
        let mut v: InplaceVec<Tracked, 4> = (0..2).map(Tracked::new).collect();
        // `filter` hides the length from `size_hint`, so overflow is only
        // discovered while appending.
        let src = (10..13).filter(|_| true).map(Tracked::new);
        signals(Error::Full, || v.insert_iter(1, src).map(|_| ()));
        assert_eq!(values(&v), [0, 1]);
        assert_eq!(Tracked::live() - base, 2);
    }

    #[test]
    fn test_insert_iter_rejects_known_overflow_up_front() {
        let mut v: InplaceVec<i32, 2> = InplaceVec::new();
        let mut pulled = 0;
        signals(Error::Full, || {
            v.insert_iter(
                0,
                [1, 2, 3].into_iter().inspect(|_| pulled += 1),
            )
            .map(|_| ())
        });
        assert_eq!(pulled, 0);
        assert!(v.is_empty());
    }

    #[test]
    fn test_insert_each_element_constructed_once() {
        let base = Tracked::live();
        let mut v: InplaceVec<Tracked, 5> = (0..4).map(Tracked::new).collect();
        v.insert(2, Tracked::new(9)).unwrap();
        assert_eq!(values(&v), [0, 1, 9, 2, 3]);
        assert_eq!(Tracked::live() - base, 5);
    }

    #[test]
    fn test_insert_n_clone_panic_leaves_appended_prefix_counted() {
        let base = Tracked::live();
        let mut v: InplaceVec<Tracked, 6> = (0..2).map(Tracked::new).collect();
        let value = Tracked::panics_after_clones(9, 1);
        panics(|| {
            let _ = v.insert_n(1, 2, value);
        });
        // The first clone was appended but not yet rotated into place.
        assert_eq!(values(&v), [0, 1, 9]);
        assert_eq!(Tracked::live() - base, v.len() as isize);
        drop(v);
        assert_eq!(Tracked::live(), base);
    }

    #[test]
    fn test_insert_iter_next_panic_keeps_len_consistent() {
        let base = Tracked::live();
        let mut v: InplaceVec<Tracked, 6> = [7, 8].map(Tracked::new).into_iter().collect();
        let src = (0..4).map(|i| {
            if i == 2 {
                panic!("source exhausted early");
            }
            Tracked::new(i)
        });
        panics(|| {
            let _ = v.insert_iter(0, src);
        });
        assert_eq!(values(&v), [7, 8, 0, 1]);
        assert_eq!(Tracked::live() - base, v.len() as isize);
        drop(v);
        assert_eq!(Tracked::live(), base);
    }

    #[test]
    fn test_insert_with_closure_panic_is_noop() {
        let base = Tracked::live();
        let mut v: InplaceVec<Tracked, 4> = (0..2).map(Tracked::new).collect();
        panics(|| {
            let _ = v.insert_with(0, || panic!("constructor failed"));
        });
        assert_eq!(values(&v), [0, 1]);
        assert_eq!(Tracked::live() - base, 2);
    }
}
