//! 64-bit element cells: `u64`, `i64`, `f64` at 1, 2, 4 and 8 lanes.

use crate::iface::{FloatVector, IntVector, Packable, SignedVector, UnsignedVector, Vector};
use crate::mask::Mask;
use crate::storage::ScalarReg;
use crate::swizzle::Swizzle;

simd_u_ty! { u64x1, u64, 1, align(8), i64x1, i64, u64k,
    /// A 64-bit vector with one `u64` lane.
}
simd_u_ty! { u64x2, u64, 2, align(16), i64x2, i64, u64k,
    /// A 128-bit vector with two `u64` lanes.
}
simd_u_ty! { u64x4, u64, 4, align(32), i64x4, i64, u64k,
    /// A 256-bit vector with four `u64` lanes.
}
simd_u_ty! { u64x8, u64, 8, align(64), i64x8, i64, u64k,
    /// A 512-bit vector with eight `u64` lanes.
}

simd_i_ty! { i64x1, i64, 1, align(8), u64x1, u64, i64k,
    /// A 64-bit vector with one `i64` lane.
}
simd_i_ty! { i64x2, i64, 2, align(16), u64x2, u64, i64k,
    /// A 128-bit vector with two `i64` lanes.
}
simd_i_ty! { i64x4, i64, 4, align(32), u64x4, u64, i64k,
    /// A 256-bit vector with four `i64` lanes.
}
simd_i_ty! { i64x8, i64, 8, align(64), u64x8, u64, i64k,
    /// A 512-bit vector with eight `i64` lanes.
}

simd_f_ty! { f64x1, f64, 1, align(8), u64x1, u64, i64x1, i64, f64k,
    /// A 64-bit vector with one `f64` lane.
}
simd_f_ty! { f64x2, f64, 2, align(16), u64x2, u64, i64x2, i64, f64k,
    /// A 128-bit vector with two `f64` lanes.
}
simd_f_ty! { f64x4, f64, 4, align(32), u64x4, u64, i64x4, i64, f64k,
    /// A 256-bit vector with four `f64` lanes.
}
simd_f_ty! { f64x8, f64, 8, align(64), u64x8, u64, i64x8, i64, f64k,
    /// A 512-bit vector with eight `f64` lanes.
}

impl_packable! { u64x2, u64x1, 2, 1 }
impl_packable! { u64x4, u64x2, 4, 2 }
impl_packable! { u64x8, u64x4, 8, 4 }

impl_packable! { i64x2, i64x1, 2, 1 }
impl_packable! { i64x4, i64x2, 4, 2 }
impl_packable! { i64x8, i64x4, 8, 4 }

impl_packable! { f64x2, f64x1, 2, 1 }
impl_packable! { f64x4, f64x2, 4, 2 }
impl_packable! { f64x8, f64x4, 8, 4 }
