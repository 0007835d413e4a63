//! Per-lane emulation kernels.
//!
//! These are the reference semantics for every operation family: a plain
//! loop over the lanes. Targets without a native backend use them directly;
//! the native backends fall through to them for widths that do not fill a
//! whole sub-register.
//!
//! Integer arithmetic wraps (`wrapping_*`), so vector overflow matches
//! plain scalar overflow on the same platform. Float arithmetic is whatever
//! the scalar FPU does, which is IEEE-754. The fused kernels here perform
//! two sequential roundings — see the note on `fma` below.

#[inline(always)]
pub(crate) fn map<T: Copy, const N: usize>(a: [T; N], f: impl Fn(T) -> T) -> [T; N] {
    let mut out = a;
    for i in 0..N {
        out[i] = f(a[i]);
    }
    out
}

#[inline(always)]
pub(crate) fn zip<T: Copy, const N: usize>(a: [T; N], b: [T; N], f: impl Fn(T, T) -> T) -> [T; N] {
    let mut out = a;
    for i in 0..N {
        out[i] = f(a[i], b[i]);
    }
    out
}

#[inline(always)]
pub(crate) fn zip3<T: Copy, const N: usize>(
    a: [T; N],
    b: [T; N],
    c: [T; N],
    f: impl Fn(T, T, T) -> T,
) -> [T; N] {
    let mut out = a;
    for i in 0..N {
        out[i] = f(a[i], b[i], c[i]);
    }
    out
}

macro_rules! int_kernels {
    { $mod_name:ident, $scalar:ty } => {
        pub(crate) mod $mod_name {
            use super::{map, zip};

            #[inline(always)]
            pub(crate) fn add<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                zip(a, b, <$scalar>::wrapping_add)
            }

            #[inline(always)]
            pub(crate) fn sub<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                zip(a, b, <$scalar>::wrapping_sub)
            }

            #[inline(always)]
            pub(crate) fn mul<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                zip(a, b, <$scalar>::wrapping_mul)
            }

            // Division by zero panics, exactly like scalar division.
            #[inline(always)]
            pub(crate) fn div<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                zip(a, b, <$scalar>::wrapping_div)
            }

            #[inline(always)]
            pub(crate) fn min<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                zip(a, b, |x, y| if y < x { y } else { x })
            }

            #[inline(always)]
            pub(crate) fn max<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                zip(a, b, |x, y| if y > x { y } else { x })
            }

            #[inline(always)]
            pub(crate) fn and<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                zip(a, b, |x, y| x & y)
            }

            #[inline(always)]
            pub(crate) fn or<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                zip(a, b, |x, y| x | y)
            }

            #[inline(always)]
            pub(crate) fn xor<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                zip(a, b, |x, y| x ^ y)
            }

            #[inline(always)]
            pub(crate) fn not<const N: usize>(a: [$scalar; N]) -> [$scalar; N] {
                map(a, |x| !x)
            }
        }
    };
}

macro_rules! float_kernels {
    { $mod_name:ident, $scalar:ty } => {
        pub(crate) mod $mod_name {
            use super::{map, zip, zip3};

            #[inline(always)]
            pub(crate) fn add<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                zip(a, b, |x, y| x + y)
            }

            #[inline(always)]
            pub(crate) fn sub<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                zip(a, b, |x, y| x - y)
            }

            #[inline(always)]
            pub(crate) fn mul<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                zip(a, b, |x, y| x * y)
            }

            #[inline(always)]
            pub(crate) fn div<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                zip(a, b, |x, y| x / y)
            }

            // Scalar `min`/`max` are used on every backend: the x86 `minps`
            // family resolves NaN and signed-zero operands asymmetrically,
            // which would break cross-backend bit-identity.
            #[inline(always)]
            pub(crate) fn min<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                zip(a, b, <$scalar>::min)
            }

            #[inline(always)]
            pub(crate) fn max<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                zip(a, b, <$scalar>::max)
            }

            #[inline(always)]
            pub(crate) fn sqrt<const N: usize>(a: [$scalar; N]) -> [$scalar; N] {
                map(a, <$scalar>::sqrt)
            }

            /// `a * b + c` with two roundings.
            ///
            /// The emulated kernel deliberately does not call the scalar
            /// `mul_add`: the contract is "multiply, round, add, round", and
            /// backends with a genuine fused instruction are allowed to
            /// differ from this in the last bit.
            #[inline(always)]
            pub(crate) fn fma<const N: usize>(
                a: [$scalar; N],
                b: [$scalar; N],
                c: [$scalar; N],
            ) -> [$scalar; N] {
                zip3(a, b, c, |x, y, z| x * y + z)
            }

            /// `a * b - c` with two roundings; see `fma`.
            #[inline(always)]
            pub(crate) fn fms<const N: usize>(
                a: [$scalar; N],
                b: [$scalar; N],
                c: [$scalar; N],
            ) -> [$scalar; N] {
                zip3(a, b, c, |x, y, z| x * y - z)
            }
        }
    };
}

int_kernels! { u32k, u32 }
int_kernels! { i32k, i32 }
int_kernels! { u64k, u64 }
int_kernels! { i64k, i64 }
float_kernels! { f32k, f32 }
float_kernels! { f64k, f64 }
