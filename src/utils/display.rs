//! Plain-text board rendering for logs and test diagnostics.

use crate::board::chess_types::{Color, PieceKind};
use crate::board::position::Position;
use crate::board::tables::MASK;

/// Renders a position as eight rows of piece letters, rank 8 first.
/// Empty squares print as dots.
pub fn render_position(position: &Position) -> String {
    let mut out = String::with_capacity(9 * 8);
    for row in 0..8 {
        for col in 0..8 {
            let ch = match position.occupant(row * 8 + col) {
                None => '.',
                Some(occupant) => {
                    let ch = match occupant.kind {
                        PieceKind::Pawn => 'p',
                        PieceKind::Knight => 'n',
                        PieceKind::Bishop => 'b',
                        PieceKind::Rook => 'r',
                        PieceKind::Queen => 'q',
                        PieceKind::King => 'k',
                    };
                    match occupant.color {
                        Color::White => ch.to_ascii_uppercase(),
                        Color::Black => ch,
                    }
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Renders a bitboard as an 8x8 grid of `x` and `.`, rank 8 first.
pub fn render_bitboard(board: u64) -> String {
    let mut out = String::with_capacity(9 * 8);
    for row in 0..8 {
        for col in 0..8 {
            out.push(if board & MASK[row * 8 + col] != 0 { 'x' } else { '.' });
        }
        out.push('\n');
    }
    out
}
