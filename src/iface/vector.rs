//! The base vector contract shared by every element family.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Operations every vector provides, regardless of element family.
///
/// Unmasked vector-vector arithmetic rides on the operator supertraits;
/// vector-scalar operator forms exist on every concrete type as well. The
/// masked variants declared here update only the lanes whose mask bit is
/// set and leave the remaining lanes bit-identical — an all-false mask is a
/// no-op, an all-true mask matches the unmasked operation exactly.
///
/// Arithmetic semantics per family: IEEE-754 for floats (NaN propagation,
/// signed zero and infinities preserved), wraparound for unsigned overflow,
/// wrapping (platform-scalar-consistent) for signed overflow. Integer
/// division by zero panics, exactly as scalar division does; no other
/// operation has a runtime error path.
pub trait Vector:
    Copy
    + Clone
    + Default
    + PartialEq
    + Debug
    + Sized
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Element type of each lane.
    type Scalar: Copy + PartialEq + Debug;
    /// Unsigned integer of the same width as `Scalar`; the gather/scatter
    /// index element.
    type UScalar: Copy;
    /// Paired mask type (same lane count).
    type Mask: Copy;
    /// Paired permutation descriptor (same lane count).
    type Swizzle: Copy;
    /// Unsigned sibling vector (same width, same lane count).
    type Unsigned: Copy;
    /// Signed sibling vector (same width, same lane count).
    type Signed: Copy;

    /// Number of lanes.
    const LANES: usize;

    /// Broadcasts one scalar to every lane.
    fn splat(value: Self::Scalar) -> Self;

    /// All lanes zero. Same as `Default::default()`.
    fn zero() -> Self;

    /// Loads the first `LANES` elements of `src`.
    ///
    /// # Panics
    /// Panics if `src.len() < LANES`.
    fn from_slice(src: &[Self::Scalar]) -> Self;

    /// Writes all lanes to the front of `dst`.
    ///
    /// # Panics
    /// Panics if `dst.len() < LANES`.
    fn write_to_slice(self, dst: &mut [Self::Scalar]);

    /// Loads `LANES` contiguous scalars from `src`, any alignment.
    ///
    /// # Safety
    /// `src` must be valid for reading `LANES` scalars.
    unsafe fn load(src: *const Self::Scalar) -> Self;

    /// Loads `LANES` contiguous scalars from `src`.
    ///
    /// # Safety
    /// `src` must be valid for reading `LANES` scalars and aligned to the
    /// vector's own alignment (its full register footprint).
    unsafe fn load_aligned(src: *const Self::Scalar) -> Self;

    /// Replaces the selected lanes with values loaded from `src`; the rest
    /// keep their current contents.
    ///
    /// # Safety
    /// `src` must be valid for reading `LANES` scalars.
    unsafe fn masked_load(self, mask: Self::Mask, src: *const Self::Scalar) -> Self;

    /// Aligned variant of [`masked_load`](Vector::masked_load).
    ///
    /// # Safety
    /// As [`load_aligned`](Vector::load_aligned).
    unsafe fn masked_load_aligned(self, mask: Self::Mask, src: *const Self::Scalar) -> Self;

    /// Stores all lanes to `dst`, any alignment.
    ///
    /// # Safety
    /// `dst` must be valid for writing `LANES` scalars.
    unsafe fn store(self, dst: *mut Self::Scalar);

    /// Stores all lanes to `dst`.
    ///
    /// # Safety
    /// `dst` must be valid for writing `LANES` scalars and aligned to the
    /// vector's own alignment.
    unsafe fn store_aligned(self, dst: *mut Self::Scalar);

    /// Stores only the selected lanes; unselected destination memory is not
    /// touched.
    ///
    /// # Safety
    /// `dst` must be valid for writing `LANES` scalars.
    unsafe fn masked_store(self, mask: Self::Mask, dst: *mut Self::Scalar);

    /// Aligned variant of [`masked_store`](Vector::masked_store).
    ///
    /// # Safety
    /// As [`store_aligned`](Vector::store_aligned).
    unsafe fn masked_store_aligned(self, mask: Self::Mask, dst: *mut Self::Scalar);

    /// Reads one lane. The index wraps modulo `LANES`.
    fn extract(self, index: usize) -> Self::Scalar;

    /// Overwrites one lane in place. The index wraps modulo `LANES`.
    fn insert(&mut self, index: usize, value: Self::Scalar) -> &mut Self;

    /// Copies the selected lanes of `other` into `self`.
    fn masked_assign(&mut self, mask: Self::Mask, other: Self);

    /// Sets the selected lanes to `value`.
    fn masked_assign_scalar(&mut self, mask: Self::Mask, value: Self::Scalar);

    /// Per-lane merge: selected lanes come from `other`, the rest from
    /// `self`.
    fn blend(self, mask: Self::Mask, other: Self) -> Self;

    /// Per-lane merge against a broadcast scalar.
    fn blend_scalar(self, mask: Self::Mask, value: Self::Scalar) -> Self;

    /// Reorders lanes: output lane `i` is input lane `swizzle[i]`.
    fn swizzle(self, swizzle: Self::Swizzle) -> Self;

    /// In-place [`swizzle`](Vector::swizzle).
    fn swizzle_assign(&mut self, swizzle: Self::Swizzle);

    // Comparisons. Float comparisons follow IEEE-754: any comparison with a
    // NaN lane is false (so `simd_ne` is true there).

    fn simd_eq(self, other: Self) -> Self::Mask;
    fn simd_ne(self, other: Self) -> Self::Mask;
    fn simd_lt(self, other: Self) -> Self::Mask;
    fn simd_le(self, other: Self) -> Self::Mask;
    fn simd_gt(self, other: Self) -> Self::Mask;
    fn simd_ge(self, other: Self) -> Self::Mask;
    fn simd_eq_scalar(self, value: Self::Scalar) -> Self::Mask;
    fn simd_ne_scalar(self, value: Self::Scalar) -> Self::Mask;
    fn simd_lt_scalar(self, value: Self::Scalar) -> Self::Mask;
    fn simd_le_scalar(self, value: Self::Scalar) -> Self::Mask;
    fn simd_gt_scalar(self, value: Self::Scalar) -> Self::Mask;
    fn simd_ge_scalar(self, value: Self::Scalar) -> Self::Mask;

    // Masked arithmetic. Unselected lanes are untouched; in particular a
    // masked-off divisor lane is never evaluated, so masking away a zero
    // divisor is well-defined for integers.

    fn masked_add(self, mask: Self::Mask, other: Self) -> Self;
    fn masked_add_scalar(self, mask: Self::Mask, value: Self::Scalar) -> Self;
    fn masked_add_assign(&mut self, mask: Self::Mask, other: Self);
    fn masked_add_scalar_assign(&mut self, mask: Self::Mask, value: Self::Scalar);

    fn masked_sub(self, mask: Self::Mask, other: Self) -> Self;
    fn masked_sub_scalar(self, mask: Self::Mask, value: Self::Scalar) -> Self;
    fn masked_sub_assign(&mut self, mask: Self::Mask, other: Self);
    fn masked_sub_scalar_assign(&mut self, mask: Self::Mask, value: Self::Scalar);

    fn masked_mul(self, mask: Self::Mask, other: Self) -> Self;
    fn masked_mul_scalar(self, mask: Self::Mask, value: Self::Scalar) -> Self;
    fn masked_mul_assign(&mut self, mask: Self::Mask, other: Self);
    fn masked_mul_scalar_assign(&mut self, mask: Self::Mask, value: Self::Scalar);

    fn masked_div(self, mask: Self::Mask, other: Self) -> Self;
    fn masked_div_scalar(self, mask: Self::Mask, value: Self::Scalar) -> Self;
    fn masked_div_assign(&mut self, mask: Self::Mask, other: Self);
    fn masked_div_scalar_assign(&mut self, mask: Self::Mask, value: Self::Scalar);

    // Per-lane minimum/maximum. Float lanes use the scalar `min`/`max`
    // semantics of the element type on every backend.

    fn min(self, other: Self) -> Self;
    fn min_scalar(self, value: Self::Scalar) -> Self;
    fn min_assign(&mut self, other: Self);
    fn min_scalar_assign(&mut self, value: Self::Scalar);
    fn masked_min(self, mask: Self::Mask, other: Self) -> Self;
    fn masked_min_scalar(self, mask: Self::Mask, value: Self::Scalar) -> Self;
    fn masked_min_assign(&mut self, mask: Self::Mask, other: Self);
    fn masked_min_scalar_assign(&mut self, mask: Self::Mask, value: Self::Scalar);

    fn max(self, other: Self) -> Self;
    fn max_scalar(self, value: Self::Scalar) -> Self;
    fn max_assign(&mut self, other: Self);
    fn max_scalar_assign(&mut self, value: Self::Scalar);
    fn masked_max(self, mask: Self::Mask, other: Self) -> Self;
    fn masked_max_scalar(self, mask: Self::Mask, value: Self::Scalar) -> Self;
    fn masked_max_assign(&mut self, mask: Self::Mask, other: Self);
    fn masked_max_scalar_assign(&mut self, mask: Self::Mask, value: Self::Scalar);

    // Horizontal reductions. Masked variants fold only the selected lanes,
    // seeding unselected positions with the operation's identity element
    // (0 for sum, 1 for product, the type's maximum/minimum — or +∞/−∞ —
    // for min/max).

    fn horizontal_sum(self) -> Self::Scalar;
    fn horizontal_product(self) -> Self::Scalar;
    fn horizontal_min(self) -> Self::Scalar;
    fn horizontal_max(self) -> Self::Scalar;
    fn masked_horizontal_sum(self, mask: Self::Mask) -> Self::Scalar;
    fn masked_horizontal_product(self, mask: Self::Mask) -> Self::Scalar;
    fn masked_horizontal_min(self, mask: Self::Mask) -> Self::Scalar;
    fn masked_horizontal_max(self, mask: Self::Mask) -> Self::Scalar;

    /// Index of the first lane holding the minimum value.
    fn min_index(self) -> usize;
    /// Index of the first lane holding the maximum value.
    fn max_index(self) -> usize;
    /// Index of the first selected lane holding the minimum among selected
    /// lanes; 0 when no lane is selected.
    fn masked_min_index(self, mask: Self::Mask) -> usize;
    /// As [`masked_min_index`](Vector::masked_min_index), for the maximum.
    fn masked_max_index(self, mask: Self::Mask) -> usize;

    // Gather/scatter. Lane `i` reads or writes `base.add(indices[i])` —
    // plain pointer arithmetic, no bounds checking, no implicit scaling
    // beyond the element size. Out-of-range indices are undefined behavior,
    // the same contract as raw pointer arithmetic.

    /// # Safety
    /// `indices` must hold at least `LANES` entries and every addressed
    /// element must be valid for reading.
    unsafe fn gather(base: *const Self::Scalar, indices: &[Self::UScalar]) -> Self;

    /// # Safety
    /// Every addressed element must be valid for reading.
    unsafe fn gather_indexed(base: *const Self::Scalar, indices: Self::Unsigned) -> Self;

    /// Gathers only the selected lanes; unselected lanes keep their current
    /// contents and their indices are never dereferenced.
    ///
    /// # Safety
    /// As [`gather`](Vector::gather), restricted to selected lanes.
    unsafe fn masked_gather(
        self,
        mask: Self::Mask,
        base: *const Self::Scalar,
        indices: &[Self::UScalar],
    ) -> Self;

    /// # Safety
    /// As [`gather_indexed`](Vector::gather_indexed), restricted to
    /// selected lanes.
    unsafe fn masked_gather_indexed(
        self,
        mask: Self::Mask,
        base: *const Self::Scalar,
        indices: Self::Unsigned,
    ) -> Self;

    /// # Safety
    /// `indices` must hold at least `LANES` entries and every addressed
    /// element must be valid for writing.
    unsafe fn scatter(self, base: *mut Self::Scalar, indices: &[Self::UScalar]);

    /// # Safety
    /// Every addressed element must be valid for writing.
    unsafe fn scatter_indexed(self, base: *mut Self::Scalar, indices: Self::Unsigned);

    /// Scatters only the selected lanes; unselected destination memory is
    /// untouched and unselected indices are never dereferenced.
    ///
    /// # Safety
    /// As [`scatter`](Vector::scatter), restricted to selected lanes.
    unsafe fn masked_scatter(self, mask: Self::Mask, base: *mut Self::Scalar, indices: &[Self::UScalar]);

    /// # Safety
    /// As [`scatter_indexed`](Vector::scatter_indexed), restricted to
    /// selected lanes.
    unsafe fn masked_scatter_indexed(self, mask: Self::Mask, base: *mut Self::Scalar, indices: Self::Unsigned);
}
