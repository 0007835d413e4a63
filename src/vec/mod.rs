//! Concrete vector types, one per `(scalar, lane count)` cell.

#[macro_use]
mod macros;

mod vec32;
mod vec64;

pub use vec32::*;
pub use vec64::*;
