//! Floating-point families: IEEE arithmetic, fused ops and their
//! per-backend rounding contract, classification, conversions.

use lanewise::{f32x4, f32x8, f64x2, FloatVector, Vector};

#[test]
fn ieee_arithmetic() {
    let a = f32x4::from_array([1.0, -2.0, 0.5, 8.0]);
    let b = f32x4::from_array([2.0, 4.0, 0.25, -2.0]);
    assert_eq!((a + b).to_array(), [3.0, 2.0, 0.75, 6.0]);
    assert_eq!((a - b).to_array(), [-1.0, -6.0, 0.25, 10.0]);
    assert_eq!((a * b).to_array(), [2.0, -8.0, 0.125, -16.0]);
    assert_eq!((a / b).to_array(), [0.5, -0.5, 2.0, -4.0]);
    assert_eq!((a + 1.0).to_array(), [2.0, -1.0, 1.5, 9.0]);

    let mut c = a;
    c += b;
    assert_eq!(c, a + b);
    c -= b;
    assert_eq!(c, a);
    c *= 2.0;
    assert_eq!(c, a * 2.0);
}

#[test]
fn division_by_zero_follows_ieee() {
    let a = f32x4::from_array([1.0, -1.0, 0.0, 5.0]);
    let z = f32x4::splat(0.0);
    let q = a / z;
    assert_eq!(q.extract(0), f32::INFINITY);
    assert_eq!(q.extract(1), f32::NEG_INFINITY);
    assert!(q.extract(2).is_nan());
}

#[test]
fn fused_multiply_add_rounding_contract() {
    let a = f32x4::splat(1.0 + f32::EPSILON);
    let b = f32x4::splat(1.0 - f32::EPSILON);
    let c = f32x4::splat(-1.0);

    let fused = a.mul_add(b, c).extract(0);
    let expected = if cfg!(target_feature = "fma") {
        // Genuine fused instruction: one rounding.
        (1.0 + f32::EPSILON).mul_add(1.0 - f32::EPSILON, -1.0)
    } else {
        // Emulated: multiply, round, add, round.
        (1.0 + f32::EPSILON) * (1.0 - f32::EPSILON) + -1.0
    };
    assert_eq!(fused.to_bits(), expected.to_bits());
}

#[test]
fn fused_family_values() {
    let a = f32x4::from_array([1.0, 2.0, 3.0, 4.0]);
    let b = f32x4::splat(2.0);
    let c = f32x4::splat(1.0);
    assert_eq!(a.mul_add(b, c).to_array(), [3.0, 5.0, 7.0, 9.0]);
    assert_eq!(a.mul_sub(b, c).to_array(), [1.0, 3.0, 5.0, 7.0]);
    assert_eq!(a.add_mul(b, c).to_array(), [3.0, 4.0, 5.0, 6.0]);
    assert_eq!(a.sub_mul(b, c).to_array(), [-1.0, 0.0, 1.0, 2.0]);
}

#[test]
fn fused_wide_matches_narrow() {
    // The 8-lane vector runs as two sub-register operations; results must
    // match the 4-lane ones lane for lane.
    let a8 = f32x8::from_array([1.0, 2.0, 3.0, 4.0, 1.0, 2.0, 3.0, 4.0]);
    let r8 = a8.mul_add(f32x8::splat(2.0), f32x8::splat(1.0));
    let a4 = f32x4::from_array([1.0, 2.0, 3.0, 4.0]);
    let r4 = a4.mul_add(f32x4::splat(2.0), f32x4::splat(1.0));
    for i in 0..4 {
        assert_eq!(r8.extract(i).to_bits(), r4.extract(i).to_bits());
        assert_eq!(r8.extract(i + 4).to_bits(), r4.extract(i).to_bits());
    }
}

#[test]
fn equal_within_margin() {
    let v = f32x4::splat(1.005);
    assert!(v.eq_within(f32x4::splat(1.0), 0.01).all());
    let w = f32x4::splat(1.02);
    assert!(w.eq_within(f32x4::splat(1.0), 0.01).none());

    let margins = f32x4::from_array([0.001, 0.01, 0.1, 1.0]);
    let m = f32x4::splat(1.05).eq_within_vec(f32x4::splat(1.0), margins);
    assert_eq!(m.to_array(), [false, false, true, true]);
}

#[test]
fn classification_predicates() {
    let v = f32x4::from_array([f32::NAN, f32::INFINITY, -0.0, 1.0e-40]);
    assert_eq!(v.is_nan().to_array(), [true, false, false, false]);
    assert_eq!(v.is_infinite().to_array(), [false, true, false, false]);
    assert_eq!(v.is_finite().to_array(), [false, false, true, true]);
    assert_eq!(v.is_zero().to_array(), [false, false, true, false]);
    assert_eq!(v.is_subnormal().to_array(), [false, false, false, true]);
}

#[test]
fn unary_families() {
    let v = f32x4::from_array([4.0, 9.0, 16.0, 25.0]);
    assert_eq!(v.sqrt().to_array(), [2.0, 3.0, 4.0, 5.0]);
    assert_eq!(v.sqr().to_array(), [16.0, 81.0, 256.0, 625.0]);
    assert_eq!(v.recip().to_array(), [0.25, 1.0 / 9.0, 0.0625, 0.04]);
    assert_eq!(v.recip_scalar(2.0).to_array(), [0.5, 2.0 / 9.0, 0.125, 0.08]);
    assert_eq!((-v).to_array(), [-4.0, -9.0, -16.0, -25.0]);
    assert_eq!(f32x4::splat(-3.5).abs().to_array(), [3.5; 4]);

    let mut w = v;
    w.sqrt_assign();
    assert_eq!(w, v.sqrt());
}

#[test]
fn sqrt_wide_uses_same_semantics() {
    let v8 = f32x8::from_array([1.0, 4.0, 9.0, 16.0, 25.0, 36.0, 49.0, 64.0]);
    assert_eq!(v8.sqrt().to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    assert!(f32x4::splat(-1.0).sqrt().extract(0).is_nan());
}

#[test]
fn rounding_families() {
    let v = f32x4::from_array([1.4, 1.5, -1.5, -2.6]);
    assert_eq!(v.round().to_array(), [1.0, 2.0, -2.0, -3.0]);
    assert_eq!(v.floor().to_array(), [1.0, 1.0, -2.0, -3.0]);
    assert_eq!(v.ceil().to_array(), [2.0, 2.0, -1.0, -2.0]);
}

#[test]
fn powf_families() {
    let v = f32x4::from_array([2.0, 3.0, 4.0, 10.0]);
    assert_eq!(v.powf_scalar(2.0).to_array(), [4.0, 9.0, 16.0, 100.0]);
    let e = f32x4::from_array([1.0, 2.0, 0.5, 0.0]);
    assert_eq!(v.powf(e).to_array(), [2.0, 9.0, 2.0, 1.0]);
}

#[test]
fn conversions() {
    let v = f32x4::from_array([1.9, -2.9, 0.0, 3.0e9]);
    assert_eq!(v.trunc_to_int().to_array(), [1, -2, 0, i32::MAX]);
    assert_eq!(v.to_int(), v.trunc_to_int());
    assert_eq!(v.to_uint().to_array(), [1, 0, 0, 3_000_000_000]);

    let i = lanewise::i32x4::from_array([-3, 0, 7, 100]);
    assert_eq!(f32x4::from_int(i).to_array(), [-3.0, 0.0, 7.0, 100.0]);
    let u = lanewise::u32x4::from_array([3, 0, 7, 100]);
    assert_eq!(f32x4::from_uint(u).to_array(), [3.0, 0.0, 7.0, 100.0]);

    let m = lanewise::Mask::from_array([true, false, true, false]);
    assert_eq!(v.masked_trunc_to_int(m).to_array(), [1, 0, 0, 0]);
}

#[test]
fn f64_cells_mirror_f32_behavior() {
    let a = f64x2::from_array([2.0, -8.0]);
    assert_eq!(a.sqr().to_array(), [4.0, 64.0]);
    assert_eq!(a.abs().to_array(), [2.0, 8.0]);
    assert_eq!(a.horizontal_sum(), -6.0);
    assert!(a.eq_within(f64x2::from_array([2.005, -8.005]), 0.01).all());
}
