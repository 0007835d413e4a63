//! 32-bit element cells: `u32`, `i32`, `f32` at 1, 2, 4, 8 and 16 lanes.

use crate::iface::{FloatVector, IntVector, Packable, SignedVector, UnsignedVector, Vector};
use crate::mask::Mask;
use crate::storage::ScalarReg;
use crate::swizzle::Swizzle;

simd_u_ty! { u32x1, u32, 1, align(4), i32x1, i32, u32k,
    /// A 32-bit vector with one `u32` lane.
}
simd_u_ty! { u32x2, u32, 2, align(8), i32x2, i32, u32k,
    /// A 64-bit vector with two `u32` lanes.
}
simd_u_ty! { u32x4, u32, 4, align(16), i32x4, i32, u32k,
    /// A 128-bit vector with four `u32` lanes.
}
simd_u_ty! { u32x8, u32, 8, align(32), i32x8, i32, u32k,
    /// A 256-bit vector with eight `u32` lanes.
}
simd_u_ty! { u32x16, u32, 16, align(64), i32x16, i32, u32k,
    /// A 512-bit vector with 16 `u32` lanes.
}

simd_i_ty! { i32x1, i32, 1, align(4), u32x1, u32, i32k,
    /// A 32-bit vector with one `i32` lane.
}
simd_i_ty! { i32x2, i32, 2, align(8), u32x2, u32, i32k,
    /// A 64-bit vector with two `i32` lanes.
}
simd_i_ty! { i32x4, i32, 4, align(16), u32x4, u32, i32k,
    /// A 128-bit vector with four `i32` lanes.
}
simd_i_ty! { i32x8, i32, 8, align(32), u32x8, u32, i32k,
    /// A 256-bit vector with eight `i32` lanes.
}
simd_i_ty! { i32x16, i32, 16, align(64), u32x16, u32, i32k,
    /// A 512-bit vector with 16 `i32` lanes.
}

simd_f_ty! { f32x1, f32, 1, align(4), u32x1, u32, i32x1, i32, f32k,
    /// A 32-bit vector with one `f32` lane.
}
simd_f_ty! { f32x2, f32, 2, align(8), u32x2, u32, i32x2, i32, f32k,
    /// A 64-bit vector with two `f32` lanes.
}
simd_f_ty! { f32x4, f32, 4, align(16), u32x4, u32, i32x4, i32, f32k,
    /// A 128-bit vector with four `f32` lanes.
}
simd_f_ty! { f32x8, f32, 8, align(32), u32x8, u32, i32x8, i32, f32k,
    /// A 256-bit vector with eight `f32` lanes.
}
simd_f_ty! { f32x16, f32, 16, align(64), u32x16, u32, i32x16, i32, f32k,
    /// A 512-bit vector with 16 `f32` lanes.
}

impl_packable! { u32x2, u32x1, 2, 1 }
impl_packable! { u32x4, u32x2, 4, 2 }
impl_packable! { u32x8, u32x4, 8, 4 }
impl_packable! { u32x16, u32x8, 16, 8 }

impl_packable! { i32x2, i32x1, 2, 1 }
impl_packable! { i32x4, i32x2, 4, 2 }
impl_packable! { i32x8, i32x4, 8, 4 }
impl_packable! { i32x16, i32x8, 16, 8 }

impl_packable! { f32x2, f32x1, 2, 1 }
impl_packable! { f32x4, f32x2, 4, 2 }
impl_packable! { f32x8, f32x4, 8, 4 }
impl_packable! { f32x16, f32x8, 16, 8 }
