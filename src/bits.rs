//! Binary arithmetic utilities used for space-filling curve computations

use crate::{Coordinate, NumBits};

/// Count the number of bits of an integer
#[inline(always)]
pub const fn num_bits<T>() -> NumBits {
    (core::mem::size_of::<T>() * 8) as _
}

/// Generate a mask that selects a certain number of low-order bits: 0000...0011
#[inline(always)]
pub const fn low_order_mask(length: NumBits) -> Coordinate {
    if length < num_bits::<Coordinate>() {
        (1 << length) - 1
    } else {
        Coordinate::MAX
    }
}

/// Generate a mask with an alternating "striped" bit pattern: 00110011...0011
#[inline(always)]
pub const fn striped_mask(stripe_length: NumBits) -> Coordinate {
    // Generate the stripes
    let mut stripes = low_order_mask(stripe_length);
    let mut curr_length = 2 * stripe_length;
    while curr_length < num_bits::<Coordinate>() {
        // Iteration 0: 00...00000000000000011
        // Iteration 1: 00...00000000000110011
        // Iteration 2: 00...00011001100110011
        stripes |= stripes << curr_length;
        curr_length *= 2;
    }
    stripes
}

/// Keep every other bit: 0x55555555
pub const EVERY_OTHER_BIT: Coordinate = striped_mask(1);

/// Keep every other pair of bits: 0x33333333
pub const EVERY_OTHER_PAIR: Coordinate = striped_mask(2);

/// Keep every other nibble: 0x0f0f0f0f
pub const EVERY_OTHER_NIBBLE: Coordinate = striped_mask(4);

/// Keep every other byte: 0x00ff00ff
pub const EVERY_OTHER_BYTE: Coordinate = striped_mask(8);

/// Keep the low-order half of a word: 0x0000ffff
pub const LOW_HALF: Coordinate = low_order_mask(num_bits::<Coordinate>() / 2);

/// Spread the bits of a 16-bit integer into the even bits of a 32-bit integer
///
/// Given an integer with bits [ x1 x2 ... x16 ], this produces an integer with
/// bits [ 0 x1 0 x2 ... 0 x16 ]. In other words, input bit i lands on output
/// bit 2i and all odd output bits are zero. This is a Morton code where the
/// other coordinate is zero.
///
#[inline(always)]
pub const fn interleave(half: u16) -> Coordinate {
    // Starting from packed bits, recursively split groups of bits in two
    // halves separated by as many zeroes, down to groups of one bit.
    // Iteration 1: [ 0000 0000 x1..x8 0000 0000 x9..x16 ]
    // Iteration 2: [ 0000 x1..x4 0000 x5..x8 ... 0000 x13..x16 ]
    let mut bits = half as Coordinate;
    bits = (bits | (bits << 8)) & EVERY_OTHER_BYTE;
    bits = (bits | (bits << 4)) & EVERY_OTHER_NIBBLE;
    bits = (bits | (bits << 2)) & EVERY_OTHER_PAIR;
    (bits | (bits << 1)) & EVERY_OTHER_BIT
}

/// Pack the even bits of a 32-bit integer into a 16-bit integer
///
/// This is the inverse of `interleave()`. Odd input bits are discarded.
///
#[inline(always)]
pub const fn deinterleave(bits: Coordinate) -> u16 {
    // We start with the bits of interest interleaved with irrelevant junk:
    // [ XX a1 XX a2 XX a3 XX a4 ... XX aN-1 XX aN ]
    // Let's clean that up by zeroing out the junk:
    // [  0 a1  0 a2  0 a3  0 a4 ...  0 aN-1  0 aN ]
    let mut bits = bits & EVERY_OTHER_BIT;
    // Then pack the bits together by recursively grouping them in pairs,
    // groups of 4, and so on, zeroing out the leftovers of each step.
    // Iteration 1: [  0  0 a1 a2  0  0 a3 a4 ...    0    0 aN-1 aN ]
    // Iteration 2: [  0  0  0  0 a1 a2 a3 a4 ... aN-3 aN-2 aN-1 aN ]
    bits = (bits | (bits >> 1)) & EVERY_OTHER_PAIR;
    bits = (bits | (bits >> 2)) & EVERY_OTHER_NIBBLE;
    bits = (bits | (bits >> 4)) & EVERY_OTHER_BYTE;
    ((bits | (bits >> 8)) & LOW_HALF) as u16
}

/// Compute the reflected binary Gray code of an integer
///
/// Given an integer with bits [ x1 x2 x3 ... ], this produces another integer
/// with bits [ x1  x1^x2  x2^x3 ... ]. Undone by `prefix_scan()`.
///
#[inline(always)]
pub const fn gray_code(bits: Coordinate) -> Coordinate {
    bits ^ (bits >> 1)
}

/// Compute the left-to-right inclusive XOR scan of an integer's bits
///
/// Given an integer with bits [ x1 x2 x3 ... ], this produces another integer
/// with bits [ x1  x1^x2  x1^x2^x3 ... ], i.e. every bit becomes the parity of
/// itself and all higher-order bits. This is the inverse of `gray_code()`.
///
#[inline(always)]
pub const fn prefix_scan(mut bits: Coordinate) -> Coordinate {
    // This is a bitwise implementation of the Hillis/Steele parallel inclusive
    // scan algorithm, with strides 1, 2, 4, 8 and 16.
    let mut stride = 1;
    while stride < num_bits::<Coordinate>() {
        // Iteration 0: [ x1     x2        x3           x4           x5 ... ]
        // Iteration 1: [ x1  x1^x2     x2^x3        x3^x4        x4^x5 ... ]
        // Iteration 2: [ x1  x1^x2  x1^x2^x3  x1^x2^x3^x4  x2^x3^x4^x5 ... ]
        bits ^= bits >> stride;
        stride *= 2;
    }
    bits
}
