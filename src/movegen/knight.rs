//! Knight move and capture generation.
//!
//! Jump offsets are plain board-index deltas; the per-offset row/col guards
//! reject jumps that would wrap around a file or rank edge, so no further
//! bounds check is needed.

use crate::board::chess_types::{Color, PieceKind, Square};
use crate::board::position::Position;
use crate::board::tables::{col, row, KNIGHT_OFFSETS};
use crate::movegen::candidate::{capture_weight, CandidateMove};
use crate::movegen::summary::GenerationSummary;

fn jump_target(square: Square, offset: i32) -> Option<Square> {
    let (r, c) = (row(square), col(square));
    let allowed = match offset {
        -17 => r >= 2 && c >= 1,
        -15 => r >= 2 && c <= 6,
        -10 => r >= 1 && c >= 2,
        -6 => r >= 1 && c <= 5,
        6 => r <= 6 && c >= 2,
        10 => r <= 6 && c <= 5,
        15 => r <= 5 && c >= 1,
        17 => r <= 5 && c <= 6,
        _ => false,
    };
    if allowed {
        Some((square as i32 + offset) as Square)
    } else {
        None
    }
}

pub fn generate_moves(
    position: &Position,
    turn: Color,
    square: Square,
    out: &mut Vec<CandidateMove>,
    summary: &mut GenerationSummary,
) {
    for offset in KNIGHT_OFFSETS {
        if let Some(target) = jump_target(square, offset) {
            match position.occupant(target) {
                None => out.push(CandidateMove::new(square, target)),
                Some(occupant) if occupant.color == turn => {
                    summary.safety_board[target] += 1;
                }
                Some(_) => {}
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
    for offset in KNIGHT_OFFSETS {
        if let Some(target) = jump_target(square, offset) {
            if let Some(occupant) = position.occupant(target) {
                if occupant.color != turn {
                    out.push(CandidateMove::scored(
                        square,
                        target,
                        capture_weight(occupant.kind),
                    ));
                    if occupant.kind == PieceKind::King {
                        summary.checks += 1;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_knight_has_eight_jumps() {
        let mut position = Position::empty();
        position.place(35, Color::White, PieceKind::Knight);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_moves(&position, Color::White, 35, &mut out, &mut summary);

        assert_eq!(out.len(), 8);
    }

    #[test]
    fn cornered_knight_has_two_jumps() {
        let mut position = Position::empty();
        position.place(56, Color::Black, PieceKind::Knight);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_moves(&position, Color::Black, 56, &mut out, &mut summary);

        // a1 knight reaches only b3 and c2.
        assert_eq!(out.len(), 2);
        assert!(out.contains(&CandidateMove::new(56, 41)));
        assert!(out.contains(&CandidateMove::new(56, 50)));
    }

    #[test]
    fn jumps_never_wrap_across_the_h_file() {
        let mut position = Position::empty();
        position.place(39, Color::White, PieceKind::Knight);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_moves(&position, Color::White, 39, &mut out, &mut summary);

        // h4 knight: g2, f3, f5, g6.
        assert_eq!(out.len(), 4);
        for mv in &out {
            let coord = mv.coord().unwrap();
            assert!((coord.to.1 as i32 - 7).abs() <= 2);
        }
    }

    #[test]
    fn knight_fork_on_the_king_counts_a_check() {
        let mut position = Position::empty();
        position.place(35, Color::White, PieceKind::Knight);
        position.place(18, Color::Black, PieceKind::King);
        position.place(25, Color::Black, PieceKind::Rook);

        let mut out = Vec::new();
        let mut summary = GenerationSummary::new();
        generate_captures(&position, Color::White, 35, &mut out, &mut summary);

        assert_eq!(out.len(), 2);
        assert_eq!(summary.checks, 1);
    }
}
