//! Utilities related to the Morton space-filling curve

use crate::{
    bits::{self, LOW_HALF},
    Coordinate, Coordinates2D, CurveIdx, IndexHalves,
};

/// Encode two 32-bit integers into a 2-dimensional Morton code
///
/// A Morton code combines two integers with bit patterns [ x1 x2 ... xN ] and
/// [ y1 y2 ... yN ] into the interleaved bit pattern [ y1 x1 y2 x2 ... yN xN ].
///
/// Decoding the set of Morton codes produces a fractal space-filling curve with
/// a recuring Z-shaped pattern that has reasonable spatial locality properties,
/// though it does brutally jump from one area of 2D space to another at times.
/// Here, we mostly use it to pack and unpack the two bit planes of a Hilbert
/// curve index.
///
#[inline]
pub const fn encode_2d(coords: Coordinates2D) -> CurveIdx {
    // Each half of the output gets 16 bits of each input, which we spread out
    // with interleave() and then merge, the second input going to odd bits:
    // [ y1 x1 y2 x2 ... y16 x16 ] [ y17 x17 ... y32 x32 ]
    let [x, y] = coords;
    IndexHalves {
        lo: encode_half(x & LOW_HALF, y & LOW_HALF),
        hi: encode_half(x >> 16, y >> 16),
    }
    .to_index()
}

/// Interleave the low-order 16 bits of two integers
#[inline(always)]
const fn encode_half(x: Coordinate, y: Coordinate) -> u32 {
    (bits::interleave(y as u16) << 1) | bits::interleave(x as u16)
}

/// Decode a 2-dimensional Morton code into its two inner indices
///
/// This is the inverse of `encode_2d()`.
///
#[inline]
pub const fn decode_2d(code: CurveIdx) -> Coordinates2D {
    // Even bits of each half hold the first coordinate, odd bits the second
    // one. Shifting odd bits down to even positions lets us decode both with
    // deinterleave(), and then we just need to glue the halves back together.
    let IndexHalves { lo, hi } = IndexHalves::from_index(code);
    [decode_halves(lo, hi), decode_halves(lo >> 1, hi >> 1)]
}

/// Deinterleave two halves of a Morton code and glue the results together
#[inline(always)]
const fn decode_halves(lo: u32, hi: u32) -> Coordinate {
    ((bits::deinterleave(hi) as Coordinate) << 16) | (bits::deinterleave(lo) as Coordinate)
}
