//! Queen move and capture generation: the rook and bishop rays combined.

use crate::board::chess_types::{Color, Square};
use crate::board::position::Position;
use crate::movegen::candidate::CandidateMove;
use crate::movegen::ray::{ray_captures, ray_moves, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::movegen::summary::GenerationSummary;

pub fn generate_moves(
    position: &Position,
    turn: Color,
    square: Square,
    out: &mut Vec<CandidateMove>,
    summary: &mut GenerationSummary,
) {
    ray_moves(position, turn, square, &ROOK_DIRECTIONS, out, summary);
    ray_moves(position, turn, square, &BISHOP_DIRECTIONS, out, summary);
}

pub fn generate_captures(
    position: &Position,
    turn: Color,
    square: Square,
    out: &mut Vec<CandidateMove>,
    summary: &mut GenerationSummary,
) {
    ray_captures(position, turn, square, &ROOK_DIRECTIONS, out, summary);
    ray_captures(position, turn, square, &BISHOP_DIRECTIONS, out, summary);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_types::PieceKind;

    #[test]
    fn lone_queen_on_d5_has_twenty_seven_quiet_moves() {
        let mut position = Position::empty();
        position.place(27, Color::White, PieceKind::Queen);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_moves(&position, Color::White, 27, &mut out, &mut summary);

        assert_eq!(out.len(), 27);
    }

    #[test]
    fn queen_defends_neighbors_on_both_ray_families() {
        let mut position = Position::empty();
        position.place(27, Color::White, PieceKind::Queen);
        position.place(28, Color::White, PieceKind::Pawn);
        position.place(36, Color::White, PieceKind::Pawn);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_moves(&position, Color::White, 27, &mut out, &mut summary);

        assert_eq!(summary.safety_board[28], 1);
        assert_eq!(summary.safety_board[36], 1);
    }
}
