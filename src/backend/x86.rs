//! x86/x86_64 leaf kernels.
//!
//! Each kernel function dispatches a whole `N`-lane operation onto native
//! sub-register operations: 256-bit chunks where AVX/AVX2 is compiled in,
//! 128-bit SSE2 chunks otherwise, with the per-lane emulation kernels as
//! the tail for widths that do not fill a sub-register. A 16-lane `f32`
//! vector therefore runs as four `__m128` operations on baseline x86_64 and
//! two `__m256` operations under AVX — callers never observe the split.
//!
//! Feature tests use `cfg!`, so the untaken branch is still type-checked
//! and then discarded as dead code; no AVX instruction is emitted unless
//! the build enables the feature. The closures handed to the chunk drivers
//! are the per-instruction-set primitives; everything else in this module
//! is plumbing that honors the interface contract's numeric semantics.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::scalar;

// ---------------------------------------------------------------------------
// Chunk drivers: split an N-lane array into native register operations.
// Unaligned loads/stores throughout; by-value arrays live on the stack and
// the vector types' own alignment is not visible here.
// ---------------------------------------------------------------------------

#[inline(always)]
fn zip_ps<const N: usize>(
    a: &[f32; N],
    b: &[f32; N],
    op: impl Fn(__m128, __m128) -> __m128,
) -> [f32; N] {
    let mut out = *a;
    let mut i = 0;
    while i < N {
        unsafe {
            let va = _mm_loadu_ps(a.as_ptr().add(i));
            let vb = _mm_loadu_ps(b.as_ptr().add(i));
            _mm_storeu_ps(out.as_mut_ptr().add(i), op(va, vb));
        }
        i += 4;
    }
    out
}

#[inline(always)]
fn map_ps<const N: usize>(a: &[f32; N], op: impl Fn(__m128) -> __m128) -> [f32; N] {
    let mut out = *a;
    let mut i = 0;
    while i < N {
        unsafe {
            let va = _mm_loadu_ps(a.as_ptr().add(i));
            _mm_storeu_ps(out.as_mut_ptr().add(i), op(va));
        }
        i += 4;
    }
    out
}

#[inline(always)]
fn zip3_ps<const N: usize>(
    a: &[f32; N],
    b: &[f32; N],
    c: &[f32; N],
    op: impl Fn(__m128, __m128, __m128) -> __m128,
) -> [f32; N] {
    let mut out = *a;
    let mut i = 0;
    while i < N {
        unsafe {
            let va = _mm_loadu_ps(a.as_ptr().add(i));
            let vb = _mm_loadu_ps(b.as_ptr().add(i));
            let vc = _mm_loadu_ps(c.as_ptr().add(i));
            _mm_storeu_ps(out.as_mut_ptr().add(i), op(va, vb, vc));
        }
        i += 4;
    }
    out
}

#[inline(always)]
fn zip_pd<const N: usize>(
    a: &[f64; N],
    b: &[f64; N],
    op: impl Fn(__m128d, __m128d) -> __m128d,
) -> [f64; N] {
    let mut out = *a;
    let mut i = 0;
    while i < N {
        unsafe {
            let va = _mm_loadu_pd(a.as_ptr().add(i));
            let vb = _mm_loadu_pd(b.as_ptr().add(i));
            _mm_storeu_pd(out.as_mut_ptr().add(i), op(va, vb));
        }
        i += 2;
    }
    out
}

#[inline(always)]
fn map_pd<const N: usize>(a: &[f64; N], op: impl Fn(__m128d) -> __m128d) -> [f64; N] {
    let mut out = *a;
    let mut i = 0;
    while i < N {
        unsafe {
            let va = _mm_loadu_pd(a.as_ptr().add(i));
            _mm_storeu_pd(out.as_mut_ptr().add(i), op(va));
        }
        i += 2;
    }
    out
}

#[inline(always)]
fn zip3_pd<const N: usize>(
    a: &[f64; N],
    b: &[f64; N],
    c: &[f64; N],
    op: impl Fn(__m128d, __m128d, __m128d) -> __m128d,
) -> [f64; N] {
    let mut out = *a;
    let mut i = 0;
    while i < N {
        unsafe {
            let va = _mm_loadu_pd(a.as_ptr().add(i));
            let vb = _mm_loadu_pd(b.as_ptr().add(i));
            let vc = _mm_loadu_pd(c.as_ptr().add(i));
            _mm_storeu_pd(out.as_mut_ptr().add(i), op(va, vb, vc));
        }
        i += 2;
    }
    out
}

/// Integer chunk driver, shared by every integer element width; a `__m128i`
/// holds `16 / size_of::<T>()` lanes.
#[inline(always)]
fn zip_si128<T: Copy, const N: usize>(
    a: &[T; N],
    b: &[T; N],
    op: impl Fn(__m128i, __m128i) -> __m128i,
) -> [T; N] {
    let per = 16 / core::mem::size_of::<T>();
    let mut out = *a;
    let mut i = 0;
    while i < N {
        unsafe {
            let va = _mm_loadu_si128(a.as_ptr().add(i) as *const __m128i);
            let vb = _mm_loadu_si128(b.as_ptr().add(i) as *const __m128i);
            _mm_storeu_si128(out.as_mut_ptr().add(i) as *mut __m128i, op(va, vb));
        }
        i += per;
    }
    out
}

#[inline(always)]
fn zip_ps256<const N: usize>(
    a: &[f32; N],
    b: &[f32; N],
    op: impl Fn(__m256, __m256) -> __m256,
) -> [f32; N] {
    let mut out = *a;
    let mut i = 0;
    while i < N {
        unsafe {
            let va = _mm256_loadu_ps(a.as_ptr().add(i));
            let vb = _mm256_loadu_ps(b.as_ptr().add(i));
            _mm256_storeu_ps(out.as_mut_ptr().add(i), op(va, vb));
        }
        i += 8;
    }
    out
}

#[inline(always)]
fn map_ps256<const N: usize>(a: &[f32; N], op: impl Fn(__m256) -> __m256) -> [f32; N] {
    let mut out = *a;
    let mut i = 0;
    while i < N {
        unsafe {
            let va = _mm256_loadu_ps(a.as_ptr().add(i));
            _mm256_storeu_ps(out.as_mut_ptr().add(i), op(va));
        }
        i += 8;
    }
    out
}

#[inline(always)]
fn zip3_ps256<const N: usize>(
    a: &[f32; N],
    b: &[f32; N],
    c: &[f32; N],
    op: impl Fn(__m256, __m256, __m256) -> __m256,
) -> [f32; N] {
    let mut out = *a;
    let mut i = 0;
    while i < N {
        unsafe {
            let va = _mm256_loadu_ps(a.as_ptr().add(i));
            let vb = _mm256_loadu_ps(b.as_ptr().add(i));
            let vc = _mm256_loadu_ps(c.as_ptr().add(i));
            _mm256_storeu_ps(out.as_mut_ptr().add(i), op(va, vb, vc));
        }
        i += 8;
    }
    out
}

#[inline(always)]
fn zip_pd256<const N: usize>(
    a: &[f64; N],
    b: &[f64; N],
    op: impl Fn(__m256d, __m256d) -> __m256d,
) -> [f64; N] {
    let mut out = *a;
    let mut i = 0;
    while i < N {
        unsafe {
            let va = _mm256_loadu_pd(a.as_ptr().add(i));
            let vb = _mm256_loadu_pd(b.as_ptr().add(i));
            _mm256_storeu_pd(out.as_mut_ptr().add(i), op(va, vb));
        }
        i += 4;
    }
    out
}

#[inline(always)]
fn map_pd256<const N: usize>(a: &[f64; N], op: impl Fn(__m256d) -> __m256d) -> [f64; N] {
    let mut out = *a;
    let mut i = 0;
    while i < N {
        unsafe {
            let va = _mm256_loadu_pd(a.as_ptr().add(i));
            _mm256_storeu_pd(out.as_mut_ptr().add(i), op(va));
        }
        i += 4;
    }
    out
}

#[inline(always)]
fn zip3_pd256<const N: usize>(
    a: &[f64; N],
    b: &[f64; N],
    c: &[f64; N],
    op: impl Fn(__m256d, __m256d, __m256d) -> __m256d,
) -> [f64; N] {
    let mut out = *a;
    let mut i = 0;
    while i < N {
        unsafe {
            let va = _mm256_loadu_pd(a.as_ptr().add(i));
            let vb = _mm256_loadu_pd(b.as_ptr().add(i));
            let vc = _mm256_loadu_pd(c.as_ptr().add(i));
            _mm256_storeu_pd(out.as_mut_ptr().add(i), op(va, vb, vc));
        }
        i += 4;
    }
    out
}

#[inline(always)]
fn zip_si256<T: Copy, const N: usize>(
    a: &[T; N],
    b: &[T; N],
    op: impl Fn(__m256i, __m256i) -> __m256i,
) -> [T; N] {
    let per = 32 / core::mem::size_of::<T>();
    let mut out = *a;
    let mut i = 0;
    while i < N {
        unsafe {
            let va = _mm256_loadu_si256(a.as_ptr().add(i) as *const __m256i);
            let vb = _mm256_loadu_si256(b.as_ptr().add(i) as *const __m256i);
            _mm256_storeu_si256(out.as_mut_ptr().add(i) as *mut __m256i, op(va, vb));
        }
        i += per;
    }
    out
}

// ---------------------------------------------------------------------------
// Kernel modules. One per scalar type, same API as `scalar`'s modules.
// ---------------------------------------------------------------------------

pub(crate) mod f32k {
    use super::*;

    #[inline(always)]
    pub(crate) fn add<const N: usize>(a: [f32; N], b: [f32; N]) -> [f32; N] {
        if cfg!(target_feature = "avx") && N % 8 == 0 {
            return zip_ps256(&a, &b, |x, y| unsafe { _mm256_add_ps(x, y) });
        }
        if N % 4 == 0 {
            return zip_ps(&a, &b, |x, y| unsafe { _mm_add_ps(x, y) });
        }
        scalar::f32k::add(a, b)
    }

    #[inline(always)]
    pub(crate) fn sub<const N: usize>(a: [f32; N], b: [f32; N]) -> [f32; N] {
        if cfg!(target_feature = "avx") && N % 8 == 0 {
            return zip_ps256(&a, &b, |x, y| unsafe { _mm256_sub_ps(x, y) });
        }
        if N % 4 == 0 {
            return zip_ps(&a, &b, |x, y| unsafe { _mm_sub_ps(x, y) });
        }
        scalar::f32k::sub(a, b)
    }

    #[inline(always)]
    pub(crate) fn mul<const N: usize>(a: [f32; N], b: [f32; N]) -> [f32; N] {
        if cfg!(target_feature = "avx") && N % 8 == 0 {
            return zip_ps256(&a, &b, |x, y| unsafe { _mm256_mul_ps(x, y) });
        }
        if N % 4 == 0 {
            return zip_ps(&a, &b, |x, y| unsafe { _mm_mul_ps(x, y) });
        }
        scalar::f32k::mul(a, b)
    }

    #[inline(always)]
    pub(crate) fn div<const N: usize>(a: [f32; N], b: [f32; N]) -> [f32; N] {
        if cfg!(target_feature = "avx") && N % 8 == 0 {
            return zip_ps256(&a, &b, |x, y| unsafe { _mm256_div_ps(x, y) });
        }
        if N % 4 == 0 {
            return zip_ps(&a, &b, |x, y| unsafe { _mm_div_ps(x, y) });
        }
        scalar::f32k::div(a, b)
    }

    // `minps`/`maxps` pick operands asymmetrically for NaN and signed zero;
    // the scalar kernel keeps every backend bit-identical.
    #[inline(always)]
    pub(crate) fn min<const N: usize>(a: [f32; N], b: [f32; N]) -> [f32; N] {
        scalar::f32k::min(a, b)
    }

    #[inline(always)]
    pub(crate) fn max<const N: usize>(a: [f32; N], b: [f32; N]) -> [f32; N] {
        scalar::f32k::max(a, b)
    }

    #[inline(always)]
    pub(crate) fn sqrt<const N: usize>(a: [f32; N]) -> [f32; N] {
        if cfg!(target_feature = "avx") && N % 8 == 0 {
            return map_ps256(&a, |x| unsafe { _mm256_sqrt_ps(x) });
        }
        if N % 4 == 0 {
            return map_ps(&a, |x| unsafe { _mm_sqrt_ps(x) });
        }
        scalar::f32k::sqrt(a)
    }

    /// Single rounding when compiled with FMA, two roundings otherwise.
    #[inline(always)]
    pub(crate) fn fma<const N: usize>(a: [f32; N], b: [f32; N], c: [f32; N]) -> [f32; N] {
        if cfg!(target_feature = "fma") {
            if N % 8 == 0 {
                return zip3_ps256(&a, &b, &c, |x, y, z| unsafe { _mm256_fmadd_ps(x, y, z) });
            }
            if N % 4 == 0 {
                return zip3_ps(&a, &b, &c, |x, y, z| unsafe { _mm_fmadd_ps(x, y, z) });
            }
        }
        scalar::f32k::fma(a, b, c)
    }

    /// Single rounding when compiled with FMA, two roundings otherwise.
    #[inline(always)]
    pub(crate) fn fms<const N: usize>(a: [f32; N], b: [f32; N], c: [f32; N]) -> [f32; N] {
        if cfg!(target_feature = "fma") {
            if N % 8 == 0 {
                return zip3_ps256(&a, &b, &c, |x, y, z| unsafe { _mm256_fmsub_ps(x, y, z) });
            }
            if N % 4 == 0 {
                return zip3_ps(&a, &b, &c, |x, y, z| unsafe { _mm_fmsub_ps(x, y, z) });
            }
        }
        scalar::f32k::fms(a, b, c)
    }
}

pub(crate) mod f64k {
    use super::*;

    #[inline(always)]
    pub(crate) fn add<const N: usize>(a: [f64; N], b: [f64; N]) -> [f64; N] {
        if cfg!(target_feature = "avx") && N % 4 == 0 {
            return zip_pd256(&a, &b, |x, y| unsafe { _mm256_add_pd(x, y) });
        }
        if N % 2 == 0 {
            return zip_pd(&a, &b, |x, y| unsafe { _mm_add_pd(x, y) });
        }
        scalar::f64k::add(a, b)
    }

    #[inline(always)]
    pub(crate) fn sub<const N: usize>(a: [f64; N], b: [f64; N]) -> [f64; N] {
        if cfg!(target_feature = "avx") && N % 4 == 0 {
            return zip_pd256(&a, &b, |x, y| unsafe { _mm256_sub_pd(x, y) });
        }
        if N % 2 == 0 {
            return zip_pd(&a, &b, |x, y| unsafe { _mm_sub_pd(x, y) });
        }
        scalar::f64k::sub(a, b)
    }

    #[inline(always)]
    pub(crate) fn mul<const N: usize>(a: [f64; N], b: [f64; N]) -> [f64; N] {
        if cfg!(target_feature = "avx") && N % 4 == 0 {
            return zip_pd256(&a, &b, |x, y| unsafe { _mm256_mul_pd(x, y) });
        }
        if N % 2 == 0 {
            return zip_pd(&a, &b, |x, y| unsafe { _mm_mul_pd(x, y) });
        }
        scalar::f64k::mul(a, b)
    }

    #[inline(always)]
    pub(crate) fn div<const N: usize>(a: [f64; N], b: [f64; N]) -> [f64; N] {
        if cfg!(target_feature = "avx") && N % 4 == 0 {
            return zip_pd256(&a, &b, |x, y| unsafe { _mm256_div_pd(x, y) });
        }
        if N % 2 == 0 {
            return zip_pd(&a, &b, |x, y| unsafe { _mm_div_pd(x, y) });
        }
        scalar::f64k::div(a, b)
    }

    #[inline(always)]
    pub(crate) fn min<const N: usize>(a: [f64; N], b: [f64; N]) -> [f64; N] {
        scalar::f64k::min(a, b)
    }

    #[inline(always)]
    pub(crate) fn max<const N: usize>(a: [f64; N], b: [f64; N]) -> [f64; N] {
        scalar::f64k::max(a, b)
    }

    #[inline(always)]
    pub(crate) fn sqrt<const N: usize>(a: [f64; N]) -> [f64; N] {
        if cfg!(target_feature = "avx") && N % 4 == 0 {
            return map_pd256(&a, |x| unsafe { _mm256_sqrt_pd(x) });
        }
        if N % 2 == 0 {
            return map_pd(&a, |x| unsafe { _mm_sqrt_pd(x) });
        }
        scalar::f64k::sqrt(a)
    }

    /// Single rounding when compiled with FMA, two roundings otherwise.
    #[inline(always)]
    pub(crate) fn fma<const N: usize>(a: [f64; N], b: [f64; N], c: [f64; N]) -> [f64; N] {
        if cfg!(target_feature = "fma") {
            if N % 4 == 0 {
                return zip3_pd256(&a, &b, &c, |x, y, z| unsafe { _mm256_fmadd_pd(x, y, z) });
            }
            if N % 2 == 0 {
                return zip3_pd(&a, &b, &c, |x, y, z| unsafe { _mm_fmadd_pd(x, y, z) });
            }
        }
        scalar::f64k::fma(a, b, c)
    }

    /// Single rounding when compiled with FMA, two roundings otherwise.
    #[inline(always)]
    pub(crate) fn fms<const N: usize>(a: [f64; N], b: [f64; N], c: [f64; N]) -> [f64; N] {
        if cfg!(target_feature = "fma") {
            if N % 4 == 0 {
                return zip3_pd256(&a, &b, &c, |x, y, z| unsafe { _mm256_fmsub_pd(x, y, z) });
            }
            if N % 2 == 0 {
                return zip3_pd(&a, &b, &c, |x, y, z| unsafe { _mm_fmsub_pd(x, y, z) });
            }
        }
        scalar::f64k::fms(a, b, c)
    }
}

macro_rules! int32_kernels {
    { $mod_name:ident, $scalar:ty, $scalar_mod:ident } => {
        pub(crate) mod $mod_name {
            use super::*;

            #[inline(always)]
            pub(crate) fn add<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                if cfg!(target_feature = "avx2") && N % 8 == 0 {
                    return zip_si256(&a, &b, |x, y| unsafe { _mm256_add_epi32(x, y) });
                }
                if N % 4 == 0 {
                    return zip_si128(&a, &b, |x, y| unsafe { _mm_add_epi32(x, y) });
                }
                scalar::$scalar_mod::add(a, b)
            }

            #[inline(always)]
            pub(crate) fn sub<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                if cfg!(target_feature = "avx2") && N % 8 == 0 {
                    return zip_si256(&a, &b, |x, y| unsafe { _mm256_sub_epi32(x, y) });
                }
                if N % 4 == 0 {
                    return zip_si128(&a, &b, |x, y| unsafe { _mm_sub_epi32(x, y) });
                }
                scalar::$scalar_mod::sub(a, b)
            }

            #[inline(always)]
            pub(crate) fn mul<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                if cfg!(target_feature = "avx2") && N % 8 == 0 {
                    return zip_si256(&a, &b, |x, y| unsafe { _mm256_mullo_epi32(x, y) });
                }
                if cfg!(target_feature = "sse4.1") && N % 4 == 0 {
                    return zip_si128(&a, &b, |x, y| unsafe { _mm_mullo_epi32(x, y) });
                }
                scalar::$scalar_mod::mul(a, b)
            }

            // No integer division instruction exists; always emulated.
            #[inline(always)]
            pub(crate) fn div<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                scalar::$scalar_mod::div(a, b)
            }

            #[inline(always)]
            pub(crate) fn min<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                scalar::$scalar_mod::min(a, b)
            }

            #[inline(always)]
            pub(crate) fn max<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                scalar::$scalar_mod::max(a, b)
            }

            #[inline(always)]
            pub(crate) fn and<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                if N % 4 == 0 {
                    return zip_si128(&a, &b, |x, y| unsafe { _mm_and_si128(x, y) });
                }
                scalar::$scalar_mod::and(a, b)
            }

            #[inline(always)]
            pub(crate) fn or<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                if N % 4 == 0 {
                    return zip_si128(&a, &b, |x, y| unsafe { _mm_or_si128(x, y) });
                }
                scalar::$scalar_mod::or(a, b)
            }

            #[inline(always)]
            pub(crate) fn xor<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                if N % 4 == 0 {
                    return zip_si128(&a, &b, |x, y| unsafe { _mm_xor_si128(x, y) });
                }
                scalar::$scalar_mod::xor(a, b)
            }

            #[inline(always)]
            pub(crate) fn not<const N: usize>(a: [$scalar; N]) -> [$scalar; N] {
                scalar::$scalar_mod::not(a)
            }
        }
    };
}

macro_rules! int64_kernels {
    { $mod_name:ident, $scalar:ty, $scalar_mod:ident } => {
        pub(crate) mod $mod_name {
            use super::*;

            #[inline(always)]
            pub(crate) fn add<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                if cfg!(target_feature = "avx2") && N % 4 == 0 {
                    return zip_si256(&a, &b, |x, y| unsafe { _mm256_add_epi64(x, y) });
                }
                if N % 2 == 0 {
                    return zip_si128(&a, &b, |x, y| unsafe { _mm_add_epi64(x, y) });
                }
                scalar::$scalar_mod::add(a, b)
            }

            #[inline(always)]
            pub(crate) fn sub<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                if cfg!(target_feature = "avx2") && N % 4 == 0 {
                    return zip_si256(&a, &b, |x, y| unsafe { _mm256_sub_epi64(x, y) });
                }
                if N % 2 == 0 {
                    return zip_si128(&a, &b, |x, y| unsafe { _mm_sub_epi64(x, y) });
                }
                scalar::$scalar_mod::sub(a, b)
            }

            // 64-bit lane multiply has no pre-AVX-512 instruction.
            #[inline(always)]
            pub(crate) fn mul<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                scalar::$scalar_mod::mul(a, b)
            }

            #[inline(always)]
            pub(crate) fn div<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                scalar::$scalar_mod::div(a, b)
            }

            #[inline(always)]
            pub(crate) fn min<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                scalar::$scalar_mod::min(a, b)
            }

            #[inline(always)]
            pub(crate) fn max<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                scalar::$scalar_mod::max(a, b)
            }

            #[inline(always)]
            pub(crate) fn and<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                if N % 2 == 0 {
                    return zip_si128(&a, &b, |x, y| unsafe { _mm_and_si128(x, y) });
                }
                scalar::$scalar_mod::and(a, b)
            }

            #[inline(always)]
            pub(crate) fn or<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                if N % 2 == 0 {
                    return zip_si128(&a, &b, |x, y| unsafe { _mm_or_si128(x, y) });
                }
                scalar::$scalar_mod::or(a, b)
            }

            #[inline(always)]
            pub(crate) fn xor<const N: usize>(a: [$scalar; N], b: [$scalar; N]) -> [$scalar; N] {
                if N % 2 == 0 {
                    return zip_si128(&a, &b, |x, y| unsafe { _mm_xor_si128(x, y) });
                }
                scalar::$scalar_mod::xor(a, b)
            }

            #[inline(always)]
            pub(crate) fn not<const N: usize>(a: [$scalar; N]) -> [$scalar; N] {
                scalar::$scalar_mod::not(a)
            }
        }
    };
}

int32_kernels! { u32k, u32, u32k }
int32_kernels! { i32k, i32, i32k }
int64_kernels! { u64k, u64, u64k }
int64_kernels! { i64k, i64, i64k }
