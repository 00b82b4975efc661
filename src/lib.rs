//! Bit-parallel conversions between 2D coordinates and positions on a Hilbert
//! space-filling curve
//!
//! Every axis is 32 bits wide, so curve indices span the full 64-bit range.
//! All transforms are branch-free `const fn`s built out of a handful of
//! word-parallel bit manipulation primitives, see the [`bits`] module.

pub mod bits;
mod error;
pub mod halves;
pub mod hilbert;
pub mod morton;

pub use self::error::*;
pub use self::halves::IndexHalves;

/// Integer type suitable for counting number of bits
///
/// Although 32-bit is very much overkill for this purpose, I am using this type
/// for interface compatibility with standard Rust integer methods.
///
pub type NumBits = u32;

/// Index of a point on a space-filling curve
pub type CurveIdx = u64;

/// Coordinate of a point on a space-filling curve
///
/// The bit-parallel algorithms of this crate operate on words of this size, and
/// a curve index packs two of them.
///
pub type Coordinate = u32;

/// Coordinates of a 2D point on a space-filling curve (in x, y order)
pub type Coordinates2D = [Coordinate; 2];
