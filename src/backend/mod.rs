//! Backend kernels and their compile-time selection.
//!
//! Every arithmetic operation on a vector routes through one kernel module
//! per scalar type (`f32k`, `i32k`, ...). Which implementation backs those
//! modules is decided here, once, at compile time — there is no runtime
//! feature detection and no indirection in the operation path.

pub(crate) mod scalar;

cfg_if::cfg_if! {
    if #[cfg(all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2"
    ))] {
        mod x86;
        pub(crate) use x86::{f32k, f64k, i32k, i64k, u32k, u64k};
    } else {
        pub(crate) use scalar::{f32k, f64k, i32k, i64k, u32k, u64k};
    }
}
