//! Lane access, blending, swizzles, and masked assignment.

use lanewise::{f32x4, i32x4, u32x4, Mask, Swizzle, Vector};

#[test]
fn insert_then_extract() {
    let mut v = u32x4::splat(0);
    for i in 0..4 {
        v.insert(i, (i as u32 + 1) * 10);
    }
    assert_eq!(v.to_array(), [10, 20, 30, 40]);
    for i in 0..4 {
        assert_eq!(v.extract(i), (i as u32 + 1) * 10);
    }
}

#[test]
fn insert_leaves_other_lanes() {
    let mut v = i32x4::from_array([1, 2, 3, 4]);
    v.insert(2, 99);
    assert_eq!(v.to_array(), [1, 2, 99, 4]);
}

#[test]
fn indices_wrap_modulo_lanes() {
    let mut v = u32x4::from_array([1, 2, 3, 4]);
    assert_eq!(v.extract(5), 2);
    v.insert(7, 44);
    assert_eq!(v.to_array(), [1, 2, 3, 44]);
}

#[test]
fn blend_selects_per_lane() {
    let a = f32x4::splat(0.0);
    let b = f32x4::from_array([1.0, 2.0, 3.0, 4.0]);
    let m = Mask::from_array([true, false, true, false]);
    assert_eq!(a.blend(m, b).to_array(), [1.0, 0.0, 3.0, 0.0]);
    assert_eq!(a.blend_scalar(m, 7.0).to_array(), [7.0, 0.0, 7.0, 0.0]);
}

#[test]
fn masked_assign_matches_blend() {
    let mut v = u32x4::from_array([1, 2, 3, 4]);
    let other = u32x4::splat(9);
    let m = Mask::from_array([false, true, false, true]);
    v.masked_assign(m, other);
    assert_eq!(v.to_array(), [1, 9, 3, 9]);

    let mut w = u32x4::from_array([1, 2, 3, 4]);
    w.masked_assign_scalar(m, 0);
    assert_eq!(w.to_array(), [1, 0, 3, 0]);
}

#[test]
fn swizzle_reorders() {
    let v = u32x4::from_array([10, 20, 30, 40]);
    assert_eq!(v.swizzle(Swizzle::identity()), v);
    assert_eq!(v.swizzle(Swizzle::reverse()).to_array(), [40, 30, 20, 10]);

    let broadcast_lane2 = Swizzle::from_array([2, 2, 2, 2]);
    assert_eq!(v.swizzle(broadcast_lane2).to_array(), [30, 30, 30, 30]);

    // Source indices wrap.
    let wrapped = Swizzle::from_array([4, 5, 6, 7]);
    assert_eq!(v.swizzle(wrapped), v);
}

#[test]
fn swizzle_assign_in_place() {
    let mut v = i32x4::from_array([1, 2, 3, 4]);
    v.swizzle_assign(Swizzle::reverse());
    assert_eq!(v.to_array(), [4, 3, 2, 1]);
}

#[test]
fn comparisons_produce_masks() {
    let a = i32x4::from_array([1, 5, 3, 7]);
    let b = i32x4::from_array([1, 2, 4, 7]);
    assert_eq!(a.simd_eq(b).to_array(), [true, false, false, true]);
    assert_eq!(a.simd_ne(b).to_array(), [false, true, true, false]);
    assert_eq!(a.simd_lt(b).to_array(), [false, false, true, false]);
    assert_eq!(a.simd_le(b).to_array(), [true, false, true, true]);
    assert_eq!(a.simd_gt(b).to_array(), [false, true, false, false]);
    assert_eq!(a.simd_ge(b).to_array(), [true, true, false, true]);

    assert_eq!(a.simd_gt_scalar(3).to_array(), [false, true, false, true]);
    assert_eq!(a.simd_eq_scalar(5).to_array(), [false, true, false, false]);
}

#[test]
fn nan_compares_unequal() {
    let a = f32x4::from_array([f32::NAN, 1.0, f32::NAN, 2.0]);
    let b = f32x4::from_array([f32::NAN, 1.0, 0.0, 3.0]);
    assert_eq!(a.simd_eq(b).to_array(), [false, true, false, false]);
    assert_eq!(a.simd_ne(b).to_array(), [true, false, true, true]);
    assert_eq!(a.simd_lt(b).to_array(), [false, false, false, true]);
}
