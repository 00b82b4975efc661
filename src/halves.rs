//! Curve indices as pairs of 32-bit words
//!
//! Some environments that curve indices are exchanged with have no native
//! 64-bit integer type. They store an index as two 32-bit halves, and may also
//! pass it around as a double-precision float, which only holds 53 significant
//! bits. This module converts between these representations and `CurveIdx`.

use crate::{CurveIdx, Error, Result};

/// Largest curve index that can be carried by an `f64` without ambiguity
///
/// Above this, several curve indices round to the same float.
///
pub const MAX_EXACT_F64_INDEX: CurveIdx = (1 << f64::MANTISSA_DIGITS) - 1;

/// Weight of the high-order half of a curve index
const HI_WEIGHT: f64 = 4_294_967_296.0;

/// Curve index split into its low-order and high-order 32-bit halves
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct IndexHalves {
    /// 32 least significant bits of the index
    pub lo: u32,

    /// 32 most significant bits of the index
    pub hi: u32,
}

impl IndexHalves {
    /// Split a curve index into halves
    #[inline]
    pub const fn from_index(index: CurveIdx) -> Self {
        Self {
            lo: index as u32,
            hi: (index >> 32) as u32,
        }
    }

    /// Join the halves back into a curve index
    #[inline]
    pub const fn to_index(self) -> CurveIdx {
        ((self.hi as CurveIdx) << 32) | (self.lo as CurveIdx)
    }

    /// Approximate the curve index as a float
    ///
    /// The result is exact up to `MAX_EXACT_F64_INDEX` and rounded to the
    /// nearest representable float above that. This is a limitation of the
    /// float format, not of the curve, so prefer `to_index()` when possible.
    ///
    #[inline]
    pub fn to_f64(self) -> f64 {
        // hi * 2^32 is exact, so the sum is rounded only once
        f64::from(self.hi) * HI_WEIGHT + f64::from(self.lo)
    }

    /// Recover a curve index from its float approximation
    ///
    /// Only floats that can be produced by `to_f64()` without rounding are
    /// accepted, so that a successful conversion is always exact.
    ///
    pub fn try_from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
            return Err(Error::NonIntegralIndex { value });
        }
        if value > MAX_EXACT_F64_INDEX as f64 {
            return Err(Error::InexactIndex { value });
        }
        Ok(Self::from_index(value as CurveIdx))
    }
}

impl From<CurveIdx> for IndexHalves {
    fn from(index: CurveIdx) -> Self {
        Self::from_index(index)
    }
}

impl From<IndexHalves> for CurveIdx {
    fn from(halves: IndexHalves) -> Self {
        halves.to_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn split_and_join() {
        let halves = IndexHalves::from_index(0x0000_0001_0000_0002);
        assert_eq!(halves, IndexHalves { lo: 2, hi: 1 });
        assert_eq!(halves.to_index(), 0x0000_0001_0000_0002);
        assert_eq!(
            IndexHalves::from(CurveIdx::MAX),
            IndexHalves {
                lo: u32::MAX,
                hi: u32::MAX
            }
        );
        assert_eq!(CurveIdx::from(IndexHalves::default()), 0);
    }

    #[test]
    fn max_exact_f64_index() {
        assert_eq!(MAX_EXACT_F64_INDEX, 0x001f_ffff_ffff_ffff);
        let halves = IndexHalves::from_index(MAX_EXACT_F64_INDEX);
        assert_eq!(halves.to_f64(), 9_007_199_254_740_991.0);
        assert_eq!(IndexHalves::try_from_f64(halves.to_f64()), Ok(halves));
    }

    #[test]
    fn try_from_f64_rejects_non_integers() {
        for value in [-1.0, 0.5, -0.25, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(
                    IndexHalves::try_from_f64(value),
                    Err(Error::NonIntegralIndex { .. })
                ),
                "{} should have been rejected as non-integral",
                value
            );
        }
    }

    #[test]
    fn try_from_f64_rejects_rounded_indices() {
        for value in [(MAX_EXACT_F64_INDEX + 1) as f64, 1e19, u64::MAX as f64] {
            assert_eq!(
                IndexHalves::try_from_f64(value),
                Err(Error::InexactIndex { value })
            );
        }
    }

    quickcheck! {
        fn from_index_to_index(index: CurveIdx) -> bool {
            IndexHalves::from_index(index).to_index() == index
        }

        fn to_f64_rounds_once(index: CurveIdx) -> bool {
            IndexHalves::from_index(index).to_f64() == index as f64
        }

        fn exact_f64_round_trip(index: CurveIdx) -> bool {
            let index = index & MAX_EXACT_F64_INDEX;
            let halves = IndexHalves::from_index(index);
            IndexHalves::try_from_f64(halves.to_f64()) == Ok(halves)
        }
    }
}
