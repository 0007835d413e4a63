//! Portable SIMD vector types with compile-time backend dispatch.
//!
//! `lanewise` gives algorithmic code one API over hardware vector registers
//! of varying element type and lane count. A logical request — "four `f32`
//! lanes" — resolves at compile time, through the [`resolve`](Entry) table,
//! to a concrete type ([`f32x4`]) whose operations are bound statically to
//! the fastest backend the build targets: SSE2/AVX/FMA sub-register kernels
//! on x86, a per-lane scalar fallback everywhere else. Semantics are
//! bit-identical across backends (the fused multiply family's documented
//! last-bit divergence excepted), so results do not depend on where the
//! code runs.
//!
//! ```
//! use lanewise::{f32x4, FloatVector, Mask, Vector};
//!
//! let a = f32x4::from_array([1.0, 2.0, 3.0, 4.0]);
//! let b = f32x4::splat(10.0);
//! assert_eq!((a + b).to_array(), [11.0, 12.0, 13.0, 14.0]);
//!
//! // Comparisons produce masks; masked operations touch only chosen lanes.
//! let odd = Mask::from_array([true, false, true, false]);
//! assert_eq!(a.masked_add(odd, b).to_array(), [11.0, 2.0, 13.0, 4.0]);
//!
//! assert_eq!(a.horizontal_sum(), 10.0);
//! assert_eq!(a.mul_add(b, a).to_array(), [11.0, 22.0, 33.0, 44.0]);
//! ```
//!
//! # Design
//!
//! - **No runtime dispatch.** Backend choice is a `cfg` decision; every
//!   operation inlines to either intrinsics or a lane loop. There are no
//!   trait objects, no function pointers, no feature probes.
//! - **No allocation, no error paths.** Vectors are plain `Copy` values.
//!   Lane indices wrap modulo the lane count; gather/scatter is raw
//!   pointer arithmetic with the caller owning validity; float errors
//!   follow IEEE-754. The only panicking arithmetic is integer division by
//!   zero, exactly as for scalars.
//! - **Widths beyond the hardware compose.** A 512-bit request on an
//!   SSE2-only build runs as four 128-bit sub-operations internally, and
//!   the public [`Packable`] pack/unpack recursion lets callers split and
//!   rejoin vectors down to single lanes.
//!
//! The capability contracts: [`Vector`] for every family,
//! [`UnsignedVector`]/[`SignedVector`]/[`FloatVector`] per element family,
//! [`Packable`] for even lane counts.

mod backend;
mod iface;
mod mask;
mod resolve;
mod storage;
mod swizzle;
mod vec;

pub use iface::{FloatVector, IntVector, Packable, SignedVector, UnsignedVector, Vector};
pub use mask::Mask;
pub use resolve::{Entry, IntOf, Lookup, MaskOf, SwizzleOf, UintOf, VecOf};
pub use swizzle::Swizzle;
pub use vec::*;

/// Everything needed to write generic lane-parallel code.
pub mod prelude {
    pub use crate::iface::{
        FloatVector, IntVector, Packable, SignedVector, UnsignedVector, Vector,
    };
    pub use crate::mask::Mask;
    pub use crate::resolve::{IntOf, MaskOf, SwizzleOf, UintOf, VecOf};
    pub use crate::swizzle::Swizzle;
    pub use crate::vec::*;
}
