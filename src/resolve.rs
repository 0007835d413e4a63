//! The trait resolution table.
//!
//! Maps a `(scalar type, lane count)` pair to its concrete vector type and
//! the four companion types: unsigned sibling, signed sibling, mask and
//! swizzle. The table is a pure compile-time function — one [`Entry`]
//! record per supported cell, established once and never edited; a new cell
//! is a new record. Requesting an absent cell does not compile, which is
//! the table's whole error model.
//!
//! The half-width column lives on the vector type itself as
//! [`Packable::Half`](crate::Packable::Half), because only even lane counts
//! have one.

use crate::iface::{SignedVector, UnsignedVector, Vector};
use crate::mask::Mask;
use crate::swizzle::Swizzle;
use crate::vec::*;

use core::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// Compile-time tag for a `(scalar, lane count)` request.
pub struct Lookup<T, const N: usize>(PhantomData<T>);

/// One record of the resolution table.
pub trait Entry: sealed::Sealed {
    /// The concrete vector implementing this cell.
    type Vector: Vector;
    /// Unsigned sibling vector of the same width and lane count.
    type Unsigned: UnsignedVector;
    /// Signed sibling vector of the same width and lane count.
    type Signed: SignedVector;
    /// Paired mask type.
    type Mask: Copy;
    /// Paired permutation descriptor.
    type Swizzle: Copy;
}

macro_rules! resolve_entry {
    { $scalar:ty, $lanes:literal, $vec:ty, $uvec:ty, $ivec:ty } => {
        impl sealed::Sealed for Lookup<$scalar, $lanes> {}

        impl Entry for Lookup<$scalar, $lanes> {
            type Vector = $vec;
            type Unsigned = $uvec;
            type Signed = $ivec;
            type Mask = Mask<$lanes>;
            type Swizzle = Swizzle<$lanes>;
        }
    };
}

resolve_entry! { u32, 1, u32x1, u32x1, i32x1 }
resolve_entry! { u32, 2, u32x2, u32x2, i32x2 }
resolve_entry! { u32, 4, u32x4, u32x4, i32x4 }
resolve_entry! { u32, 8, u32x8, u32x8, i32x8 }
resolve_entry! { u32, 16, u32x16, u32x16, i32x16 }

resolve_entry! { i32, 1, i32x1, u32x1, i32x1 }
resolve_entry! { i32, 2, i32x2, u32x2, i32x2 }
resolve_entry! { i32, 4, i32x4, u32x4, i32x4 }
resolve_entry! { i32, 8, i32x8, u32x8, i32x8 }
resolve_entry! { i32, 16, i32x16, u32x16, i32x16 }

resolve_entry! { f32, 1, f32x1, u32x1, i32x1 }
resolve_entry! { f32, 2, f32x2, u32x2, i32x2 }
resolve_entry! { f32, 4, f32x4, u32x4, i32x4 }
resolve_entry! { f32, 8, f32x8, u32x8, i32x8 }
resolve_entry! { f32, 16, f32x16, u32x16, i32x16 }

resolve_entry! { u64, 1, u64x1, u64x1, i64x1 }
resolve_entry! { u64, 2, u64x2, u64x2, i64x2 }
resolve_entry! { u64, 4, u64x4, u64x4, i64x4 }
resolve_entry! { u64, 8, u64x8, u64x8, i64x8 }

resolve_entry! { i64, 1, i64x1, u64x1, i64x1 }
resolve_entry! { i64, 2, i64x2, u64x2, i64x2 }
resolve_entry! { i64, 4, i64x4, u64x4, i64x4 }
resolve_entry! { i64, 8, i64x8, u64x8, i64x8 }

resolve_entry! { f64, 1, f64x1, u64x1, i64x1 }
resolve_entry! { f64, 2, f64x2, u64x2, i64x2 }
resolve_entry! { f64, 4, f64x4, u64x4, i64x4 }
resolve_entry! { f64, 8, f64x8, u64x8, i64x8 }

/// The vector type for `(T, N)`; does not compile for an absent cell.
pub type VecOf<T, const N: usize> = <Lookup<T, N> as Entry>::Vector;
/// The unsigned sibling for `(T, N)`.
pub type UintOf<T, const N: usize> = <Lookup<T, N> as Entry>::Unsigned;
/// The signed sibling for `(T, N)`.
pub type IntOf<T, const N: usize> = <Lookup<T, N> as Entry>::Signed;
/// The mask type for `(T, N)`.
pub type MaskOf<T, const N: usize> = <Lookup<T, N> as Entry>::Mask;
/// The swizzle type for `(T, N)`.
pub type SwizzleOf<T, const N: usize> = <Lookup<T, N> as Entry>::Swizzle;
