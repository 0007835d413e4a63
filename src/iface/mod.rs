//! Capability interface contracts.
//!
//! Every concrete vector type satisfies one of three family contracts —
//! [`UnsignedVector`], [`SignedVector`], [`FloatVector`] — on top of the
//! shared [`Vector`] base, plus [`Packable`] for every lane count that has
//! a half-width sibling. Conformance is purely static: generic code takes
//! `V: FloatVector` bounds and the compiler specializes per concrete type.
//! Nothing here is object-safe by intent and nothing dispatches at runtime.

mod float;
mod int;
mod pack;
mod vector;

pub use float::FloatVector;
pub use int::{IntVector, SignedVector, UnsignedVector};
pub use pack::Packable;
pub use vector::Vector;
