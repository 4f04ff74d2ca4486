//! Static lookup tables shared by the board model and move generation.
//!
//! Squares are indexed 0..64 with square 0 at the top-left of the printed
//! board (a8) and square 63 at the bottom-right (h1), so White pawns advance
//! toward lower indices. `MASK[sq]` is the single-bit bitboard for `sq`.
//!
//! The 10x12 mailbox pair detects horizontal edge crossings: a step of ±1 in
//! board-index space is also ±1 in mailbox space, and off-board mailbox cells
//! hold -1.

use crate::board::chess_types::Square;

/// Single-bit masks, one per square. Exactly one bit set in each entry.
pub const MASK: [u64; 64] = build_masks();

const fn build_masks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0;
    while sq < 64 {
        table[sq] = 1u64 << sq;
        sq += 1;
    }
    table
}

/// 10x12 mailbox: interior cells hold the board index, border cells hold -1.
pub const MAILBOX: [i32; 120] = build_mailbox();

/// Board index -> mailbox index.
pub const MAILBOX64: [usize; 64] = build_mailbox64();

const fn build_mailbox() -> [i32; 120] {
    let mut table = [-1i32; 120];
    let mut sq = 0;
    while sq < 64 {
        table[21 + (sq / 8) * 10 + (sq % 8)] = sq as i32;
        sq += 1;
    }
    table
}

const fn build_mailbox64() -> [usize; 64] {
    let mut table = [0usize; 64];
    let mut sq = 0;
    while sq < 64 {
        table[sq] = 21 + (sq / 8) * 10 + (sq % 8);
        sq += 1;
    }
    table
}

/// Knight jump offsets in board-index space.
pub const KNIGHT_OFFSETS: [i32; 8] = [-17, -15, -6, -10, 17, 15, 6, 10];

/// King step offsets in board-index space.
pub const KING_OFFSETS: [i32; 8] = [1, -1, 8, -8, 9, -9, 7, -7];

#[inline]
pub const fn row(square: Square) -> usize {
    square / 8
}

#[inline]
pub const fn col(square: Square) -> usize {
    square % 8
}

/// Target of a ±1 horizontal step, or `None` when the step leaves the board.
#[inline]
pub fn horizontal_target(square: Square, step: i32) -> Option<Square> {
    let cell = MAILBOX[(MAILBOX64[square] as i32 + step) as usize];
    if cell < 0 {
        None
    } else {
        Some(cell as Square)
    }
}
