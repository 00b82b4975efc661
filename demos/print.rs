//! Hilbert curves in your terminal!
//!
//! The first 4^N points of the curve fill a 2^N x 2^N square, so the curve can
//! be drawn at any order by decoding a prefix of it. Along the way, every point
//! is checked to encode back to its index.

use hilbert_2d::{hilbert, Coordinates2D, CurveIdx, IndexHalves};

/// Unit step between two neighboring points of the curve
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Step {
    Left,
    Right,
    Up,
    Down,
}

impl Step {
    fn between(src: Coordinates2D, dst: Coordinates2D) -> Self {
        match (
            i64::from(dst[0]) - i64::from(src[0]),
            i64::from(dst[1]) - i64::from(src[1]),
        ) {
            (-1, 0) => Self::Left,
            (1, 0) => Self::Right,
            (0, -1) => Self::Up,
            (0, 1) => Self::Down,
            other => unreachable!("Hilbert curve moved by {other:?}"),
        }
    }
}

/// Pick the box-drawing character for a point reached by `incoming` and left
/// by `outgoing`, either of which is missing at the ends of the curve
fn glyph(incoming: Option<Step>, outgoing: Option<Step>) -> char {
    use Step::*;
    match (incoming, outgoing) {
        (None, Some(Right)) => '├',
        (None, Some(Left)) => '┤',
        (None, Some(Down)) => '┬',
        (None, Some(Up)) => '┴',
        (Some(Right), None) => '>',
        (Some(Left), None) => '<',
        (Some(Down), None) => 'v',
        (Some(Up), None) => '^',
        (Some(Left | Right), Some(Left | Right)) => '─',
        (Some(Up | Down), Some(Up | Down)) => '│',
        (Some(Left), Some(Up)) | (Some(Down), Some(Right)) => '└',
        (Some(Left), Some(Down)) | (Some(Up), Some(Right)) => '┌',
        (Some(Right), Some(Up)) | (Some(Down), Some(Left)) => '┘',
        (Some(Right), Some(Down)) | (Some(Up), Some(Left)) => '┐',
        (None, None) => '·',
    }
}

// Display a Hilbert curve of specified order
fn print_hilbert(order: u32) {
    println!("--- At order {order} ---\n");

    let side = 1usize << order;
    let points = hilbert::iter_2d().take(side * side).collect::<Vec<_>>();
    for (idx, &coords) in points.iter().enumerate() {
        assert_eq!(
            hilbert::encode_2d(coords),
            idx as CurveIdx,
            "Encoding does not invert decoding at {coords:?}"
        );
    }

    let mut grid = vec![vec!['@'; side]; side];
    for (idx, &[x, y]) in points.iter().enumerate() {
        let incoming = idx.checked_sub(1).map(|prev| Step::between(points[prev], [x, y]));
        let outgoing = points.get(idx + 1).map(|&next| Step::between([x, y], next));
        grid[y as usize][x as usize] = glyph(incoming, outgoing);
    }
    for row in grid {
        println!("{}", row.into_iter().collect::<String>());
    }
    println!();
}

// Display the Hilbert curve at a few orders, then a far away point
fn main() {
    println!();
    for order in 0..=6 {
        print_hilbert(order);
    }

    let far = [u32::MAX - 1, 0x1234_5678];
    let halves = hilbert::encode_2d_halves(far);
    println!(
        "Point {far:?} is at index {} (hi = {:#010x}, lo = {:#010x}, as float {:e})",
        halves.to_index(),
        halves.hi,
        halves.lo,
        halves.to_f64()
    );
    assert_eq!(hilbert::decode_2d_halves(IndexHalves::from(halves.to_index())), far);
}
