//! Floating-point family contract.

use core::ops::Neg;

use super::Vector;

/// The floating-point family. All arithmetic is IEEE-754: division by zero
/// and overflow produce infinities or NaNs, nothing signals.
///
/// The fused operations (`mul_add`, `mul_sub`) round once on backends
/// compiled with a genuine fused instruction (`target_feature = "fma"`) and
/// twice on the scalar-emulated path. The two results may differ in the
/// last bit; this divergence is part of the contract, not a defect —
/// forcing either behavior on the other backend would cost the fused
/// instruction or the emulation's simplicity.
pub trait FloatVector: Vector + Neg<Output = Self> {
    fn neg_assign(&mut self);
    fn masked_neg(self, mask: Self::Mask) -> Self;
    fn masked_neg_assign(&mut self, mask: Self::Mask);

    fn abs(self) -> Self;
    fn abs_assign(&mut self);
    fn masked_abs(self, mask: Self::Mask) -> Self;
    fn masked_abs_assign(&mut self, mask: Self::Mask);

    /// `1 / x` per lane, computed through the division kernel — never an
    /// approximate reciprocal instruction, so every backend agrees bitwise.
    fn recip(self) -> Self;
    fn recip_assign(&mut self);
    fn masked_recip(self, mask: Self::Mask) -> Self;
    fn masked_recip_assign(&mut self, mask: Self::Mask);
    /// `numerator / x` per lane.
    fn recip_scalar(self, numerator: Self::Scalar) -> Self;
    fn masked_recip_scalar(self, mask: Self::Mask, numerator: Self::Scalar) -> Self;

    /// `x * x` per lane.
    fn sqr(self) -> Self;
    fn sqr_assign(&mut self);
    fn masked_sqr(self, mask: Self::Mask) -> Self;
    fn masked_sqr_assign(&mut self, mask: Self::Mask);

    fn sqrt(self) -> Self;
    fn sqrt_assign(&mut self);
    fn masked_sqrt(self, mask: Self::Mask) -> Self;
    fn masked_sqrt_assign(&mut self, mask: Self::Mask);

    /// `x^e` per lane, exponents from a vector.
    fn powf(self, exponent: Self) -> Self;
    fn masked_powf(self, mask: Self::Mask, exponent: Self) -> Self;
    /// `x^e` per lane, one scalar exponent.
    fn powf_scalar(self, exponent: Self::Scalar) -> Self;
    fn masked_powf_scalar(self, mask: Self::Mask, exponent: Self::Scalar) -> Self;

    /// Rounds half away from zero, like the scalar `round`.
    fn round(self) -> Self;
    fn masked_round(self, mask: Self::Mask) -> Self;
    fn floor(self) -> Self;
    fn masked_floor(self, mask: Self::Mask) -> Self;
    fn ceil(self) -> Self;
    fn masked_ceil(self, mask: Self::Mask) -> Self;

    /// Truncates toward zero into the signed sibling vector. Values outside
    /// the target range saturate; NaN becomes 0 (Rust `as` semantics).
    fn trunc_to_int(self) -> Self::Signed;
    /// Masked [`trunc_to_int`](FloatVector::trunc_to_int); unselected lanes
    /// of the integer result are 0.
    fn masked_trunc_to_int(self, mask: Self::Mask) -> Self::Signed;

    /// Same as [`trunc_to_int`](FloatVector::trunc_to_int).
    fn to_int(self) -> Self::Signed;
    /// Truncates toward zero into the unsigned sibling; negative values and
    /// NaN become 0, overflow saturates.
    fn to_uint(self) -> Self::Unsigned;
    /// Converts lane-wise from the signed sibling (rounds to nearest for
    /// values beyond the mantissa).
    fn from_int(value: Self::Signed) -> Self;
    /// Converts lane-wise from the unsigned sibling.
    fn from_uint(value: Self::Unsigned) -> Self;

    /// `self * b + c`.
    fn mul_add(self, b: Self, c: Self) -> Self;
    fn masked_mul_add(self, mask: Self::Mask, b: Self, c: Self) -> Self;
    /// `self * b - c`.
    fn mul_sub(self, b: Self, c: Self) -> Self;
    fn masked_mul_sub(self, mask: Self::Mask, b: Self, c: Self) -> Self;
    /// `(self + b) * c`. Never fused; two roundings on every backend.
    fn add_mul(self, b: Self, c: Self) -> Self;
    fn masked_add_mul(self, mask: Self::Mask, b: Self, c: Self) -> Self;
    /// `(self - b) * c`. Never fused; two roundings on every backend.
    fn sub_mul(self, b: Self, c: Self) -> Self;
    fn masked_sub_mul(self, mask: Self::Mask, b: Self, c: Self) -> Self;

    fn is_nan(self) -> Self::Mask;
    fn is_infinite(self) -> Self::Mask;
    fn is_finite(self) -> Self::Mask;
    /// True for `+0.0` and `-0.0`.
    fn is_zero(self) -> Self::Mask;
    fn is_subnormal(self) -> Self::Mask;

    /// Per-lane `|self - other| <= margin` with one scalar margin. NaN
    /// lanes compare unequal.
    fn eq_within(self, other: Self, margin: Self::Scalar) -> Self::Mask;
    /// Per-lane margins from a vector.
    fn eq_within_vec(self, other: Self, margin: Self) -> Self::Mask;
}
