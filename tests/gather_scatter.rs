//! Gather/scatter with index arrays and index vectors, masked and not.

use lanewise::{f64x2, u32x2, u32x4, Mask, Vector};

#[test]
fn gather_then_scatter_roundtrip() {
    let base = [10u32, 20, 30, 40];
    let indices = [3u32, 1];
    let v = unsafe { u32x2::gather(base.as_ptr(), &indices) };
    assert_eq!(v.to_array(), [40, 20]);

    let mut out = [0u32; 4];
    unsafe { v.scatter(out.as_mut_ptr(), &indices) };
    assert_eq!(out, [0, 20, 0, 40]);
}

#[test]
fn gather_with_index_vector() {
    let base = [1.5f64, 2.5, 3.5, 4.5];
    let idx = lanewise::u64x2::from_array([2, 0]);
    let v = unsafe { f64x2::gather_indexed(base.as_ptr(), idx) };
    assert_eq!(v.to_array(), [3.5, 1.5]);

    let mut out = [0.0f64; 4];
    unsafe { v.scatter_indexed(out.as_mut_ptr(), idx) };
    assert_eq!(out, [1.5, 0.0, 3.5, 0.0]);
}

#[test]
fn masked_gather_keeps_unselected_lanes() {
    let base = [10u32, 20, 30, 40];
    let indices = [0u32, 1, 2, 3];
    let v = u32x4::splat(7);
    let m = Mask::from_array([true, false, true, false]);
    let out = unsafe { v.masked_gather(m, base.as_ptr(), &indices) };
    assert_eq!(out.to_array(), [10, 7, 30, 7]);
}

#[test]
fn masked_gather_never_dereferences_unselected_indices() {
    let base = [5u32];
    // Index 1000 is far out of range but sits behind a false mask lane.
    let indices = [0u32, 1000];
    let v = u32x2::splat(0);
    let m = Mask::from_array([true, false]);
    let out = unsafe { v.masked_gather(m, base.as_ptr(), &indices) };
    assert_eq!(out.to_array(), [5, 0]);
}

#[test]
fn masked_scatter_leaves_unselected_memory() {
    let v = u32x4::from_array([1, 2, 3, 4]);
    let indices = [0u32, 1, 2, 3];
    let mut out = [9u32; 4];
    let m = Mask::from_array([false, true, false, true]);
    unsafe { v.masked_scatter(m, out.as_mut_ptr(), &indices) };
    assert_eq!(out, [9, 2, 9, 4]);
}

#[test]
fn scatter_last_write_wins_on_duplicate_index() {
    let v = u32x2::from_array([1, 2]);
    let indices = [0u32, 0];
    let mut out = [0u32; 1];
    unsafe { v.scatter(out.as_mut_ptr(), &indices) };
    assert_eq!(out[0], 2);
}

#[test]
fn masked_indexed_forms() {
    let base = [10u32, 20, 30, 40];
    let idx = u32x4::from_array([3, 2, 1, 0]);
    let m = Mask::from_array([true, true, false, false]);
    let v = unsafe { u32x4::splat(0).masked_gather_indexed(m, base.as_ptr(), idx) };
    assert_eq!(v.to_array(), [40, 30, 0, 0]);

    let mut out = [0u32; 4];
    unsafe { v.masked_scatter_indexed(m, out.as_mut_ptr(), idx) };
    assert_eq!(out, [0, 0, 30, 40]);
}
