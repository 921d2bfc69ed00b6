// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`InplaceVec`](crate::InplaceVec).
//!
//! - **Serialize**: as a sequence of the `len` occupied elements.
//! - **Deserialize**: from any sequence of at most `N` elements. Longer input
//!   is rejected with a `too many elements (capacity N)` error.
//!
//! Elements are written straight into uninitialized storage as they arrive,
//! so `T` needs neither `Default` nor `Clone`.

// Crate imports
use crate::vec::InplaceVec;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize, const N: usize> Serialize for InplaceVec<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Deserialize<'de>, const N: usize> de::Visitor<'de> for VecVisitor<T, N> {
    type Value = InplaceVec<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        if a.size_hint().is_some_and(|n| n > N) {
            return Err(de::Error::custom(format_args!("too many elements (capacity {N})")));
        }
        let mut out = InplaceVec::<T, N>::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.try_push(elem)
                .map_err(|_| de::Error::custom(format_args!("too many elements (capacity {N})")))?;
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for InplaceVec<T, N> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T, N>(PhantomData))
    }
}
