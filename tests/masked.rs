//! Masked-variant laws: all-false is the identity, all-true matches the
//! unmasked operation, partial masks touch only selected lanes.

use lanewise::{f32x4, i32x4, u32x4, FloatVector, IntVector, Mask, SignedVector, Vector};

#[test]
fn all_false_mask_is_identity() {
    let v = u32x4::from_array([1, 2, 3, 4]);
    let rhs = u32x4::splat(100);
    let none = Mask::splat(false);
    assert_eq!(v.masked_add(none, rhs), v);
    assert_eq!(v.masked_sub(none, rhs), v);
    assert_eq!(v.masked_mul(none, rhs), v);
    assert_eq!(v.masked_div(none, rhs), v);
    assert_eq!(v.masked_min(none, rhs), v);
    assert_eq!(v.masked_max(none, rhs), v);
    assert_eq!(v.masked_bitand(none, rhs), v);
    assert_eq!(v.masked_bitor(none, rhs), v);
    assert_eq!(v.masked_bitxor(none, rhs), v);
    assert_eq!(v.masked_not(none), v);
}

#[test]
fn all_false_mask_is_bit_identity_for_floats() {
    let v = f32x4::from_array([1.5, -0.0, f32::NAN, f32::INFINITY]);
    let none = Mask::splat(false);
    let out = v.masked_add(none, f32x4::splat(1.0));
    for i in 0..4 {
        assert_eq!(out.extract(i).to_bits(), v.extract(i).to_bits());
    }
    let out = v.masked_sqrt(none);
    for i in 0..4 {
        assert_eq!(out.extract(i).to_bits(), v.extract(i).to_bits());
    }
}

#[test]
fn all_true_mask_matches_unmasked() {
    let a = f32x4::from_array([1.0, 2.0, 3.0, 4.0]);
    let b = f32x4::from_array([0.5, 0.25, 8.0, -1.0]);
    let all = Mask::splat(true);
    assert_eq!(a.masked_add(all, b), a + b);
    assert_eq!(a.masked_sub(all, b), a - b);
    assert_eq!(a.masked_mul(all, b), a * b);
    assert_eq!(a.masked_div(all, b), a / b);
    assert_eq!(a.masked_min(all, b), a.min(b));
    assert_eq!(a.masked_sqrt(all), a.sqrt());
    // Fused ops must agree between masked and unmasked forms on every
    // backend, including FMA builds.
    assert_eq!(a.masked_mul_add(all, b, a), a.mul_add(b, a));
}

#[test]
fn partial_mask_touches_only_selected_lanes() {
    let v = i32x4::from_array([1, 2, 3, 4]);
    let m = Mask::from_array([true, false, false, true]);
    assert_eq!(v.masked_add(m, i32x4::splat(10)).to_array(), [11, 2, 3, 14]);
    assert_eq!(v.masked_add_scalar(m, 10).to_array(), [11, 2, 3, 14]);
    assert_eq!(v.masked_neg(m).to_array(), [-1, 2, 3, -4]);

    let mut w = v;
    w.masked_add_assign(m, i32x4::splat(10));
    assert_eq!(w.to_array(), [11, 2, 3, 14]);

    let mut x = v;
    x.masked_add_scalar_assign(m, 10);
    assert_eq!(x.to_array(), [11, 2, 3, 14]);
}

#[test]
fn masked_div_skips_unselected_zero_divisors() {
    // An unselected lane holding a zero divisor must never be evaluated.
    let v = u32x4::from_array([8, 9, 12, 15]);
    let d = u32x4::from_array([2, 0, 3, 0]);
    let m = Mask::from_array([true, false, true, false]);
    assert_eq!(v.masked_div(m, d).to_array(), [4, 9, 4, 15]);
}

#[test]
fn masked_scalar_forms() {
    let v = u32x4::from_array([1, 2, 3, 4]);
    let m = Mask::from_array([false, true, true, false]);
    assert_eq!(v.masked_mul_scalar(m, 3).to_array(), [1, 6, 9, 4]);
    assert_eq!(v.masked_bitor_scalar(m, 0b1000).to_array(), [1, 10, 11, 4]);
    assert_eq!(v.masked_min_scalar(m, 2).to_array(), [1, 2, 2, 4]);
}

#[test]
fn masked_float_families() {
    let v = f32x4::from_array([1.0, 4.0, 9.0, 16.0]);
    let m = Mask::from_array([true, false, true, false]);
    assert_eq!(v.masked_sqrt(m).to_array(), [1.0, 4.0, 3.0, 16.0]);
    assert_eq!(v.masked_sqr(m).to_array(), [1.0, 4.0, 81.0, 16.0]);
    assert_eq!(v.masked_recip(m).to_array(), [1.0, 4.0, 1.0 / 9.0, 16.0]);
    assert_eq!(v.masked_abs(Mask::splat(true)), v.abs());
    assert_eq!(v.masked_round(m).to_array(), [1.0, 4.0, 9.0, 16.0]);

    let mut w = v;
    w.masked_sqrt_assign(m);
    assert_eq!(w.to_array(), [1.0, 4.0, 3.0, 16.0]);
}

#[test]
fn masked_int_assign_families() {
    let mut v = i32x4::from_array([1, -2, 3, -4]);
    let m = Mask::from_array([true, true, false, false]);
    v.masked_abs_assign(m);
    assert_eq!(v.to_array(), [1, 2, 3, -4]);

    let mut w = i32x4::from_array([1, -2, 3, -4]);
    w.masked_neg_assign(m);
    assert_eq!(w.to_array(), [-1, 2, 3, -4]);

    let mut x = u32x4::from_array([0b01, 0b10, 0b11, 0b00]);
    x.masked_not_assign(Mask::from_array([true, false, false, false]));
    assert_eq!(x.extract(0), !0b01u32);
    assert_eq!(x.extract(1), 0b10);
}
