//! Integer family contracts.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Neg, Not};

use super::Vector;

/// Operations shared by the unsigned and signed integer families.
///
/// Bitwise operators work on the underlying bit pattern. The horizontal
/// bitwise reductions use the identity element of the operation for
/// unselected lanes in their masked forms: all-ones for AND, zero for OR
/// and XOR.
pub trait IntVector:
    Vector
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
{
    fn masked_bitand(self, mask: Self::Mask, other: Self) -> Self;
    fn masked_bitand_scalar(self, mask: Self::Mask, value: Self::Scalar) -> Self;
    fn masked_bitand_assign(&mut self, mask: Self::Mask, other: Self);
    fn masked_bitand_scalar_assign(&mut self, mask: Self::Mask, value: Self::Scalar);

    fn masked_bitor(self, mask: Self::Mask, other: Self) -> Self;
    fn masked_bitor_scalar(self, mask: Self::Mask, value: Self::Scalar) -> Self;
    fn masked_bitor_assign(&mut self, mask: Self::Mask, other: Self);
    fn masked_bitor_scalar_assign(&mut self, mask: Self::Mask, value: Self::Scalar);

    fn masked_bitxor(self, mask: Self::Mask, other: Self) -> Self;
    fn masked_bitxor_scalar(self, mask: Self::Mask, value: Self::Scalar) -> Self;
    fn masked_bitxor_assign(&mut self, mask: Self::Mask, other: Self);
    fn masked_bitxor_scalar_assign(&mut self, mask: Self::Mask, value: Self::Scalar);

    /// Complements the selected lanes.
    fn masked_not(self, mask: Self::Mask) -> Self;
    fn masked_not_assign(&mut self, mask: Self::Mask);

    fn horizontal_and(self) -> Self::Scalar;
    fn horizontal_or(self) -> Self::Scalar;
    fn horizontal_xor(self) -> Self::Scalar;
    fn masked_horizontal_and(self, mask: Self::Mask) -> Self::Scalar;
    fn masked_horizontal_or(self, mask: Self::Mask) -> Self::Scalar;
    fn masked_horizontal_xor(self, mask: Self::Mask) -> Self::Scalar;

    /// True when no two lanes hold the same value.
    fn unique(self) -> bool;
}

/// The unsigned integer family. Overflow wraps.
pub trait UnsignedVector: IntVector {
    /// Reinterprets the bit pattern as the signed sibling vector.
    fn reinterpret_signed(self) -> Self::Signed;
}

/// The signed integer family. Overflow wraps, consistent with the
/// platform's scalar wrapping arithmetic; `abs` of the minimum value is the
/// minimum value again (wrapping), and `neg` follows the same rule.
pub trait SignedVector: IntVector + Neg<Output = Self> {
    fn neg_assign(&mut self);
    fn masked_neg(self, mask: Self::Mask) -> Self;
    fn masked_neg_assign(&mut self, mask: Self::Mask);

    fn abs(self) -> Self;
    fn abs_assign(&mut self);
    fn masked_abs(self, mask: Self::Mask) -> Self;
    fn masked_abs_assign(&mut self, mask: Self::Mask);

    /// Reinterprets the bit pattern as the unsigned sibling vector.
    fn reinterpret_unsigned(self) -> Self::Unsigned;
}
