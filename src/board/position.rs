//! Bitboard position model.
//!
//! `Position` keeps a square-indexed occupant array alongside the per-kind
//! bitboards and per-color occupancy caches. All mutation goes through
//! `place` / `clear` so the three views never disagree; `is_consistent`
//! verifies that in tests.

use crate::board::chess_types::{Color, Occupant, PieceKind, Square};
use crate::board::tables::MASK;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Square-indexed occupants, square 0 at a8.
    squares: [Option<Occupant>; 64],
    /// Bitboards addressed as `pieces[color][kind]`.
    pieces: [[u64; 6]; 2],
    /// Occupancy caches, one per color.
    occupancy_by_color: [u64; 2],
}

impl Position {
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
        }
    }

    /// The standard starting arrangement.
    pub fn starting() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut position = Self::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            position.place(file, Color::Black, kind);
            position.place(8 + file, Color::Black, PieceKind::Pawn);
            position.place(48 + file, Color::White, PieceKind::Pawn);
            position.place(56 + file, Color::White, kind);
        }
        position
    }

    /// Places a piece, replacing whatever occupied the square.
    pub fn place(&mut self, square: Square, color: Color, kind: PieceKind) {
        self.clear(square);
        self.squares[square] = Some(Occupant { color, kind });
        self.pieces[color.index()][kind.index()] |= MASK[square];
        self.occupancy_by_color[color.index()] |= MASK[square];
    }

    /// Empties a square, keeping the bitboards in sync.
    pub fn clear(&mut self, square: Square) {
        if let Some(occupant) = self.squares[square].take() {
            self.pieces[occupant.color.index()][occupant.kind.index()] &= !MASK[square];
            self.occupancy_by_color[occupant.color.index()] &= !MASK[square];
        }
    }

    /// Removes any piece of `color` from `square`, clearing every kind mask
    /// for that color at the bit. Used for capture removal, where the victim
    /// kind is known from the occupant array but the masks must all agree.
    pub fn clear_color_at(&mut self, square: Square, color: Color) {
        let bit = !MASK[square];
        for kind_board in self.pieces[color.index()].iter_mut() {
            *kind_board &= bit;
        }
        self.occupancy_by_color[color.index()] &= bit;
        if matches!(self.squares[square], Some(occ) if occ.color == color) {
            self.squares[square] = None;
        }
    }

    #[inline]
    pub fn occupant(&self, square: Square) -> Option<Occupant> {
        self.squares[square]
    }

    #[inline]
    pub fn bitboard(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupancy_all(&self) -> u64 {
        self.occupancy_by_color[0] | self.occupancy_by_color[1]
    }

    /// Checks that the occupant array, kind bitboards, and occupancy caches
    /// all describe the same arrangement, with no bit shared between boards.
    pub fn is_consistent(&self) -> bool {
        let mut union = 0u64;
        for color in [Color::White, Color::Black] {
            let mut color_union = 0u64;
            for kind in PieceKind::ALL {
                let board = self.bitboard(color, kind);
                if board & union != 0 {
                    return false;
                }
                union |= board;
                color_union |= board;
            }
            if color_union != self.occupancy_by_color[color.index()] {
                return false;
            }
        }
        for square in 0..64 {
            let expected = self.squares[square].map(|occ| {
                self.bitboard(occ.color, occ.kind) & MASK[square] != 0
            });
            match expected {
                Some(true) => {}
                Some(false) => return false,
                None => {
                    if union & MASK[square] != 0 {
                        return false;
                    }
                }
            }
        }
        true
    }
}
