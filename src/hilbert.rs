//! Utilities related to the Hilbert space-filling curve

use crate::{
    bits::{gray_code, prefix_scan},
    morton, Coordinates2D, CurveIdx, IndexHalves, NumBits,
};

/// Compute the coordinates of the i-th point of the Hilbert curve
///
/// Compared to the Morton curve, the Hilbert curve never jumps across space, it
/// always moves from one point of space to one of its direct neighbors. The
/// price to pay for this superior spatial locality is that it follows a more
/// complex geometrical pattern, based on recursively rotated and flipped
/// U-like shapes.
///
/// At the finest scale, the curve starts at the origin and goes through (0, 0),
/// (1, 0), (1, 1), (0, 1), then on to (0, 2). The first 4^N points always fill
/// the 2^N x 2^N square in the corner of the origin.
///
/// Several orientations of the curve are equally valid, and they are not
/// compatible with each other. This function and `encode_2d()` must be kept
/// bit-for-bit stable, as previously computed indices depend on them.
///
#[inline]
pub const fn decode_2d(code: CurveIdx) -> Coordinates2D {
    // When written out in binary, the index of a point on the curve is
    // [ i1 j1 i2 j2 ... iN jN ] where (ix, jx) selects one of the four
    // quadrants of the curve's basic pattern at recursion depth x.
    //
    // Morton decoding separates that into [ j1 j2 ... jN ] and
    // [ i1 i2 ... iN ], giving us the pattern choice at all depths at once.
    //
    let [low_order, high_order] = morton::decode_2d(code);

    // Within the basic pattern, j says whether we are off the diagonal going
    // through the first and third quadrants (x != y) or on it (x == y), so y
    // is always x ^ j. The remaining difficulty is x itself.
    //
    // Before any transform, x is i. But sub-patterns get swapped and inverted
    // depending on the quadrants selected at shallower depths, and since these
    // transforms are their own inverse, whether x ends up flipped at a given
    // depth is the parity of some control bits at all shallower depths. This
    // is what the prefix scan computes:
    //
    // - Off the diagonal, x is flipped by the parity of the number of first
    //   quadrant (i = j = 0) selections above.
    // - On the diagonal, x is flipped by the parity of the number of last
    //   quadrant (i = j = 1) selections above.
    //
    // The inclusive scan can be used in both cases because the current depth
    // cannot be a first quadrant when off the diagonal, nor a last quadrant
    // when on it.
    //
    let first_quadrants = prefix_scan(!(low_order | high_order));
    let last_quadrants = prefix_scan(low_order & high_order);
    let x = (low_order & first_quadrants) ^ (!low_order & last_quadrants) ^ high_order;
    [x, x ^ low_order]
}

/// Compute the Hilbert curve index of a point, inverse of `decode_2d()`
///
/// Following the curve from the top-level pattern down, one would compute the
/// index two bits at a time, applying the accumulated swaps and inversions of
/// shallower depths to the remaining coordinate bits along the way. This
/// function does the same for all depths at once, in five rounds of
/// bit-parallel state propagation.
///
#[inline]
pub const fn encode_2d(coords: Coordinates2D) -> CurveIdx {
    let [x, y] = coords;

    // Per depth, whether the point is off the curve pattern's diagonal
    let low_order = x ^ y;

    // a and b track the sub-pattern transform that applies at each depth,
    // starting from the point's quadrant at that depth alone
    let mut a = x & !y;
    let mut b = !(x | y);

    // Like prefix_scan(), merge the transform state of depths 1, 2, 4... apart.
    // The first round is simpler because the diagonal bits are known exactly.
    let t = a >> 1;
    a ^= (low_order & (b >> 1)) ^ t;
    b ^= (b >> 1) ^ (t & !low_order);

    // c and d track how the merged spans of depths combine their own
    // transforms, and must be merged at the same pace as a and b.
    let mut c = (low_order >> 1) ^ low_order;
    let mut d = low_order | (!low_order >> 1);

    let mut stride: NumBits = 2;
    while stride < 16 {
        let t = a >> stride;
        a ^= (c & (b >> stride)) ^ (t & (d ^ c));
        b ^= (d & (b >> stride)) ^ (t & c);

        let t = c;
        c = (d & (c >> stride)) ^ (c & ((d ^ c) >> stride));
        d = (d & (d >> stride)) ^ (t & (t >> stride));

        stride *= 2;
    }

    // Last round, after which c and d are not needed anymore
    let t = a >> 16;
    a ^= (c & (b >> 16)) ^ (t & (d ^ c));
    b ^= (d & (b >> 16)) ^ (t & c);

    // Translate the transform state back into quadrant selection bits
    let high_order = gray_code(a) | !(low_order | gray_code(b));
    morton::encode_2d([low_order, high_order])
}

/// Version of `decode_2d()` that takes the index as two 32-bit halves
#[inline]
pub const fn decode_2d_halves(halves: IndexHalves) -> Coordinates2D {
    decode_2d(halves.to_index())
}

/// Version of `encode_2d()` that returns the index as two 32-bit halves
///
/// Use `IndexHalves::to_f64()` if a floating-point index is needed.
///
#[inline]
pub const fn encode_2d_halves(coords: Coordinates2D) -> IndexHalves {
    IndexHalves::from_index(encode_2d(coords))
}

/// Iterate over the 2D Hilbert curve
///
/// Be warned that the curve has 2^64 points, so you will usually want to stop
/// iterating well before the end.
///
pub fn iter_2d() -> impl Iterator<Item = Coordinates2D> {
    iter_from_2d(CurveIdx::MIN)
}

/// Iterate over the 2D Hilbert curve, starting from a certain index
///
/// This is equivalent to running `decode_2d()` on the sequence of curve
/// indices (start..=CurveIdx::MAX).
///
pub fn iter_from_2d(start: CurveIdx) -> impl Iterator<Item = Coordinates2D> {
    // TODO: Study if there's a faster way to iterate over the 2D Hilbert curve
    //       than by repeatedly decoding increasing Hilbert curve indices
    (start..=CurveIdx::MAX).map(decode_2d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bits, halves::MAX_EXACT_F64_INDEX, Coordinate};
    use bits::test_utils::*;
    use quickcheck::quickcheck;

    // Sequential decoder, which follows the curve from the top-level pattern
    // down while keeping track of sub-pattern swaps and inversions
    fn bitwise_decode_2d(input: CurveIdx) -> Coordinates2D {
        let mut input_buf = input.reverse_bits();
        let mut results = [0 as Coordinate; 2];
        let mut swap = false;
        let mut invert = false;
        for _bit_idx in 0..(bits::num_bits::<Coordinate>()) {
            let high_order_bit = pop_bit(&mut input_buf);
            let low_order_bit = pop_bit(&mut input_buf);
            let mut x_bit = high_order_bit;
            let mut y_bit = high_order_bit ^ low_order_bit;
            if swap {
                core::mem::swap(&mut x_bit, &mut y_bit);
            }
            push_bit(&mut results[0], x_bit ^ invert);
            push_bit(&mut results[1], y_bit ^ invert);
            swap ^= !(high_order_bit ^ low_order_bit);
            invert ^= high_order_bit & low_order_bit;
        }
        results
    }

    fn is_neighbor(coords1: Coordinates2D, coords2: Coordinates2D) -> bool {
        let distance = |a: Coordinate, b: Coordinate| a.max(b) - a.min(b);
        let dx = distance(coords1[0], coords2[0]);
        let dy = distance(coords1[1], coords2[1]);
        dx.max(dy) == 1 && dx + dy == 1
    }

    #[test]
    fn origin() {
        assert_eq!(super::decode_2d(0), [0, 0]);
        assert_eq!(super::encode_2d([0, 0]), 0);
    }

    #[test]
    fn known_values() {
        let expected = [[0, 0], [1, 0], [1, 1], [0, 1], [0, 2]];
        for (idx, &coords) in expected.iter().enumerate() {
            assert_eq!(super::decode_2d(idx as CurveIdx), coords);
            assert_eq!(super::encode_2d(coords), idx as CurveIdx);
        }
    }

    #[test]
    fn decode_2d() {
        for input in 0..=(u16::MAX as CurveIdx) {
            assert_eq!(
                super::decode_2d(input),
                bitwise_decode_2d(input),
                "Unexpected 2D Hilbert code decoding result for input {:016b}",
                input
            );
        }
    }

    #[test]
    fn squares() {
        for order in 0..=5 {
            let side = 1 << order;
            let mut visited = vec![false; side * side];
            for idx in 0..(side * side) as CurveIdx {
                let [x, y] = super::decode_2d(idx);
                assert!(
                    (x as usize) < side && (y as usize) < side,
                    "Point {} is outside of the {}x{} square",
                    idx,
                    side,
                    side
                );
                let cell = y as usize * side + x as usize;
                assert!(!visited[cell], "Cell ({}, {}) was visited twice", x, y);
                visited[cell] = true;
            }
        }
    }

    #[test]
    fn locality() {
        let mut prev = super::decode_2d(0);
        for idx in 1..(1 << 20) {
            let curr = super::decode_2d(idx);
            assert!(
                is_neighbor(prev, curr),
                "Curve jumps from {:?} to {:?} at index {}",
                prev,
                curr,
                idx
            );
            assert_eq!(super::encode_2d(curr), idx);
            prev = curr;
        }
    }

    #[test]
    fn halves() {
        let halves = IndexHalves { lo: 0xdead_beef, hi: 0x0bad_cafe };
        let coords = super::decode_2d_halves(halves);
        assert_eq!(coords, super::decode_2d(halves.to_index()));
        assert_eq!(super::encode_2d_halves(coords), halves);
    }

    #[test]
    fn iter_2d() {
        for (idx, coords) in super::iter_2d().take(1 << 12).enumerate() {
            assert_eq!(coords, super::decode_2d(idx as CurveIdx));
        }
    }

    #[test]
    fn iter_from_2d() {
        let start = CurveIdx::MAX - 3;
        let coords = super::iter_from_2d(start).collect::<Vec<_>>();
        assert_eq!(coords.len(), 4);
        for (coords, idx) in coords.into_iter().zip(start..=CurveIdx::MAX) {
            assert_eq!(coords, super::decode_2d(idx));
        }
    }

    // Decode random float-sized indices and check that re-encoding brings
    // them back, both as halves and as floats
    fn fuzz(num_samples: usize) {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..num_samples {
            let key = rng.gen_range(0..=MAX_EXACT_F64_INDEX);
            let halves = IndexHalves::from_index(key);
            let coords = super::decode_2d_halves(halves);
            let reencoded = super::encode_2d_halves(coords);
            assert_eq!(reencoded, halves, "{} != {}", key, reencoded.to_index());
            assert_eq!(reencoded.to_f64(), key as f64);
        }
    }

    #[test]
    fn fuzz_quick() {
        fuzz(1 << 12);
    }

    // This one takes a while to run in debug mode...
    #[test]
    #[ignore]
    fn fuzz_full() {
        fuzz(1 << 24);
    }

    quickcheck! {
        fn decode_2d_random(input: CurveIdx) -> bool {
            super::decode_2d(input) == bitwise_decode_2d(input)
        }

        fn encode_then_decode(x: Coordinate, y: Coordinate) -> bool {
            super::decode_2d(super::encode_2d([x, y])) == [x, y]
        }

        fn decode_then_encode(input: CurveIdx) -> bool {
            super::encode_2d(super::decode_2d(input)) == input
        }

        fn random_locality(input: CurveIdx) -> bool {
            let input = input.min(CurveIdx::MAX - 1);
            is_neighbor(super::decode_2d(input), super::decode_2d(input + 1))
        }
    }
}
