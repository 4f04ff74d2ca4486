//! Move representations produced by the generators.
//!
//! Generators emit `CandidateMove`s as bitboard pairs; the board engine and
//! the user-facing API work in `CoordMove` (row, col) pairs. Conversion is
//! fallible because a candidate mask must hold exactly one bit.

use crate::board::chess_types::{PieceKind, Square};
use crate::board::tables::MASK;
use crate::errors::{EngineError, EngineResult};

/// Ordering weight of capturing a piece of `kind`; bigger victims sort first.
#[inline]
pub fn capture_weight(kind: PieceKind) -> i32 {
    kind.index() as i32 + 1
}

/// A pseudo-legal move as a pair of single-bit bitboards, with an ordering
/// key the pruned search sorts on (captures carry the victim's kind weight,
/// quiet moves carry zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMove {
    pub source: u64,
    pub dest: u64,
    pub score: i32,
}

impl CandidateMove {
    #[inline]
    pub fn new(source_square: Square, dest_square: Square) -> Self {
        Self::scored(source_square, dest_square, 0)
    }

    #[inline]
    pub fn scored(source_square: Square, dest_square: Square, score: i32) -> Self {
        Self {
            source: MASK[source_square],
            dest: MASK[dest_square],
            score,
        }
    }

    /// Converts the bitboard pair into row/col coordinates.
    pub fn coord(&self) -> EngineResult<CoordMove> {
        Ok(CoordMove {
            from: split_coord(self.source)?,
            to: split_coord(self.dest)?,
        })
    }
}

fn split_coord(mask: u64) -> EngineResult<(u8, u8)> {
    if mask.count_ones() != 1 {
        return Err(EngineError::NotASingleBit(mask));
    }
    let square = mask.trailing_zeros() as u8;
    Ok((square / 8, square % 8))
}

/// A move in (row, col) coordinates, row 0 being rank 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordMove {
    pub from: (u8, u8),
    pub to: (u8, u8),
}

impl CoordMove {
    #[inline]
    pub fn new(from: (u8, u8), to: (u8, u8)) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn source_index(&self) -> Square {
        self.from.0 as Square * 8 + self.from.1 as Square
    }

    #[inline]
    pub fn dest_index(&self) -> Square {
        self.to.0 as Square * 8 + self.to.1 as Square
    }
}
