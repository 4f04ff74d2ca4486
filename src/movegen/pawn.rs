//! Pawn move and capture generation.
//!
//! White pawns advance toward lower indices, Black toward higher. A pawn on
//! its color's starting rank may push two squares when both are empty. Moves
//! and captures that reach the far rank are tallied as pending promotions.
//! A diagonal that lands on a friendly piece records heavy pawn cover.

use crate::board::chess_types::{Color, PieceKind, Square};
use crate::board::position::Position;
use crate::board::tables::{col, row};
use crate::movegen::candidate::{capture_weight, CandidateMove};
use crate::movegen::summary::GenerationSummary;

struct PawnFrame {
    push: i32,
    start_row: usize,
    promotion_row: usize,
    capture_left: i32,
    capture_right: i32,
}

const fn frame(turn: Color) -> PawnFrame {
    match turn {
        Color::White => PawnFrame {
            push: -8,
            start_row: 6,
            promotion_row: 1,
            capture_left: -9,
            capture_right: -7,
        },
        Color::Black => PawnFrame {
            push: 8,
            start_row: 1,
            promotion_row: 6,
            capture_left: 7,
            capture_right: 9,
        },
    }
}

pub fn generate_moves(
    position: &Position,
    turn: Color,
    square: Square,
    out: &mut Vec<CandidateMove>,
    summary: &mut GenerationSummary,
) {
    let frame = frame(turn);
    let single = square as i32 + frame.push;
    if !(0..64).contains(&single) {
        return;
    }
    let single = single as Square;
    if position.occupant(single).is_none() {
        out.push(CandidateMove::new(square, single));
        if row(square) == frame.promotion_row {
            summary.promotions += 1;
        }
        if row(square) == frame.start_row {
            let double = (single as i32 + frame.push) as Square;
            if position.occupant(double).is_none() {
                out.push(CandidateMove::new(square, double));
            }
        }
    }
}

pub fn generate_captures(
    position: &Position,
    turn: Color,
    square: Square,
    out: &mut Vec<CandidateMove>,
    summary: &mut GenerationSummary,
) {
    let frame = frame(turn);
    let mut diagonal = |offset: i32| {
        let target = square as i32 + offset;
        if !(0..64).contains(&target) {
            return;
        }
        let target = target as Square;
        match position.occupant(target) {
            None => {}
            Some(occupant) if occupant.color == turn => {
                summary.safety_board[target] += 100;
            }
            Some(occupant) => {
                out.push(CandidateMove::scored(
                    square,
                    target,
                    capture_weight(occupant.kind),
                ));
                if occupant.kind == PieceKind::King {
                    summary.checks += 1;
                }
                if row(square) == frame.promotion_row {
                    summary.promotions += 1;
                }
            }
        }
    };

    if col(square) > 0 {
        diagonal(frame.capture_left);
    }
    if col(square) < 7 {
        diagonal(frame.capture_right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_pawn_on_its_start_rank_may_double_push() {
        let mut position = Position::empty();
        position.place(52, Color::White, PieceKind::Pawn);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_moves(&position, Color::White, 52, &mut out, &mut summary);

        assert_eq!(
            out,
            vec![CandidateMove::new(52, 44), CandidateMove::new(52, 36)]
        );
    }

    #[test]
    fn blocked_pawn_has_no_push() {
        let mut position = Position::empty();
        position.place(52, Color::White, PieceKind::Pawn);
        position.place(44, Color::Black, PieceKind::Knight);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_moves(&position, Color::White, 52, &mut out, &mut summary);

        assert!(out.is_empty());
    }

    #[test]
    fn black_pawn_advances_toward_higher_rows() {
        let mut position = Position::empty();
        position.place(12, Color::Black, PieceKind::Pawn);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_moves(&position, Color::Black, 12, &mut out, &mut summary);

        assert_eq!(
            out,
            vec![CandidateMove::new(12, 20), CandidateMove::new(12, 28)]
        );
    }

    #[test]
    fn push_to_the_far_rank_counts_a_promotion() {
        let mut position = Position::empty();
        position.place(10, Color::White, PieceKind::Pawn);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_moves(&position, Color::White, 10, &mut out, &mut summary);

        assert_eq!(out, vec![CandidateMove::new(10, 2)]);
        assert_eq!(summary.promotions, 1);
    }

    #[test]
    fn diagonal_captures_respect_the_files() {
        let mut position = Position::empty();
        position.place(52, Color::White, PieceKind::Pawn);
        position.place(43, Color::Black, PieceKind::Rook);
        position.place(45, Color::Black, PieceKind::Bishop);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_captures(&position, Color::White, 52, &mut out, &mut summary);

        assert_eq!(out.len(), 2);
        assert!(out.contains(&CandidateMove::scored(
            52,
            43,
            capture_weight(PieceKind::Rook)
        )));
        assert!(out.contains(&CandidateMove::scored(
            52,
            45,
            capture_weight(PieceKind::Bishop)
        )));
    }

    #[test]
    fn a_file_pawn_never_captures_leftward() {
        let mut position = Position::empty();
        position.place(48, Color::White, PieceKind::Pawn);
        position.place(39, Color::Black, PieceKind::Rook);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_captures(&position, Color::White, 48, &mut out, &mut summary);

        // Square 39 is h4; capturing it from a2 would wrap around the board.
        assert!(out.is_empty());
    }

    #[test]
    fn defended_friend_gets_heavy_pawn_cover() {
        let mut position = Position::empty();
        position.place(52, Color::White, PieceKind::Pawn);
        position.place(43, Color::White, PieceKind::Knight);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_captures(&position, Color::White, 52, &mut out, &mut summary);

        assert!(out.is_empty());
        assert_eq!(summary.safety_board[43], 100);
    }
}
