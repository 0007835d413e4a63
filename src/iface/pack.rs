//! Half-width composition.

use super::Vector;

/// Composition between a vector and its two half-width siblings.
///
/// Implemented by every vector with an even lane count; the 1-lane types
/// are the recursion's base case and provide nothing here. The half-width
/// relationship is transitive (16 → 8 → 4 → 2 → 1), which is how lane
/// counts wider than any native register are synthesized: a width-N
/// operation decomposes into two width-N/2 operations until a native (or
/// 1-lane) width is reached.
///
/// Law: `Self::pack(lo, hi).unpack() == (lo, hi)` for all halves, and
/// `Self::pack(v.unpack().0, v.unpack().1) == v` for all `v`.
pub trait Packable: Vector {
    /// The vector with the same element type and half the lanes.
    type Half: Vector<Scalar = Self::Scalar>;

    /// Concatenates two half-width vectors; `lo` supplies lanes
    /// `[0, LANES/2)`, `hi` supplies lanes `[LANES/2, LANES)`.
    fn pack(lo: Self::Half, hi: Self::Half) -> Self;

    /// Replaces the low half in place.
    fn pack_lo(&mut self, lo: Self::Half);

    /// Replaces the high half in place.
    fn pack_hi(&mut self, hi: Self::Half);

    /// Splits into `(low half, high half)`.
    fn unpack(self) -> (Self::Half, Self::Half);

    /// The low half alone.
    fn unpack_lo(self) -> Self::Half;

    /// The high half alone.
    fn unpack_hi(self) -> Self::Half;
}
