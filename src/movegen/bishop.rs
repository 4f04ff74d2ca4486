//! Bishop move and capture generation.

use crate::board::chess_types::{Color, Square};
use crate::board::position::Position;
use crate::movegen::candidate::CandidateMove;
use crate::movegen::ray::{ray_captures, ray_moves, BISHOP_DIRECTIONS};
use crate::movegen::summary::GenerationSummary;

pub fn generate_moves(
    position: &Position,
    turn: Color,
    square: Square,
    out: &mut Vec<CandidateMove>,
    summary: &mut GenerationSummary,
) {
    ray_moves(position, turn, square, &BISHOP_DIRECTIONS, out, summary);
}

pub fn generate_captures(
    position: &Position,
    turn: Color,
    square: Square,
    out: &mut Vec<CandidateMove>,
    summary: &mut GenerationSummary,
) {
    ray_captures(position, turn, square, &BISHOP_DIRECTIONS, out, summary);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_types::PieceKind;
    use crate::movegen::candidate::capture_weight;

    #[test]
    fn lone_bishop_on_d5_has_thirteen_quiet_moves() {
        let mut position = Position::empty();
        position.place(27, Color::Black, PieceKind::Bishop);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_moves(&position, Color::Black, 27, &mut out, &mut summary);

        assert_eq!(out.len(), 13);
    }

    #[test]
    fn bishop_in_the_corner_sees_one_diagonal() {
        let mut position = Position::empty();
        position.place(56, Color::White, PieceKind::Bishop);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_moves(&position, Color::White, 56, &mut out, &mut summary);

        assert_eq!(out.len(), 7);
        assert!(out.contains(&CandidateMove::new(56, 49)));
        assert!(out.contains(&CandidateMove::new(56, 7)));
    }

    #[test]
    fn capture_stops_behind_the_victim() {
        let mut position = Position::empty();
        position.place(27, Color::White, PieceKind::Bishop);
        position.place(9, Color::Black, PieceKind::Pawn);
        position.place(0, Color::Black, PieceKind::Rook);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_captures(&position, Color::White, 27, &mut out, &mut summary);

        assert_eq!(
            out,
            vec![CandidateMove::scored(27, 9, capture_weight(PieceKind::Pawn))]
        );
        assert_eq!(summary.checks, 0);
    }
}
