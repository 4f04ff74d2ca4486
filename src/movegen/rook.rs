//! Rook move and capture generation.

use crate::board::chess_types::{Color, Square};
use crate::board::position::Position;
use crate::movegen::candidate::CandidateMove;
use crate::movegen::ray::{ray_captures, ray_moves, ROOK_DIRECTIONS};
use crate::movegen::summary::GenerationSummary;

pub fn generate_moves(
    position: &Position,
    turn: Color,
    square: Square,
    out: &mut Vec<CandidateMove>,
    summary: &mut GenerationSummary,
) {
    ray_moves(position, turn, square, &ROOK_DIRECTIONS, out, summary);
}

pub fn generate_captures(
    position: &Position,
    turn: Color,
    square: Square,
    out: &mut Vec<CandidateMove>,
    summary: &mut GenerationSummary,
) {
    ray_captures(position, turn, square, &ROOK_DIRECTIONS, out, summary);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_types::PieceKind;
    use crate::movegen::candidate::capture_weight;

    #[test]
    fn lone_rook_on_d5_has_fourteen_quiet_moves() {
        let mut position = Position::empty();
        position.place(27, Color::White, PieceKind::Rook);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_moves(&position, Color::White, 27, &mut out, &mut summary);

        assert_eq!(out.len(), 14);
    }

    #[test]
    fn friendly_blocker_ends_the_ray_and_counts_defense() {
        let mut position = Position::empty();
        position.place(27, Color::White, PieceKind::Rook);
        position.place(29, Color::White, PieceKind::Knight);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_moves(&position, Color::White, 27, &mut out, &mut summary);

        // Rightward ray yields only d5-e5; the knight square is defended.
        assert!(out.contains(&CandidateMove::new(27, 28)));
        assert!(!out.contains(&CandidateMove::new(27, 29)));
        assert!(!out.contains(&CandidateMove::new(27, 30)));
        assert_eq!(summary.safety_board[29], 1);
    }

    #[test]
    fn enemy_king_capture_registers_a_check() {
        let mut position = Position::empty();
        position.place(27, Color::White, PieceKind::Rook);
        position.place(3, Color::Black, PieceKind::King);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_captures(&position, Color::White, 27, &mut out, &mut summary);

        assert_eq!(
            out,
            vec![CandidateMove::scored(27, 3, capture_weight(PieceKind::King))]
        );
        assert_eq!(summary.checks, 1);
    }
}
