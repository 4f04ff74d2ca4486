//! Heuristic position evaluation.
//!
//! Scores are one-sided: only the side to move is examined, so the same
//! arrangement yields different numbers depending on whose turn it is. The
//! evaluator runs the piece generators against its own scratch summary and
//! never touches the engine's cached state.

use crate::board::board_engine::{generate_piece_captures, generate_piece_moves, BoardEngine};
use crate::board::chess_types::{Color, PieceKind, Score};
use crate::board::tables::row;
use crate::movegen::summary::GenerationSummary;

/// Bonus per own pawn that has left its starting rank.
const PAWN_ADVANCE_CREDIT: Score = 0.3;

/// Bonus while castling remains available to the side to move.
const CASTLING_CREDIT: Score = 1.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Scores the position from the perspective of the side to move.
    ///
    /// The total combines, for the mover's pieces only: material, square-root
    /// mobility (captures weighted double), pawn advancement, defensive cover,
    /// checks being delivered, pending promotions, and castling availability.
    pub fn evaluate(&self, engine: &BoardEngine) -> Score {
        let position = engine.position();
        let turn = engine.turn();
        let mut summary = GenerationSummary::new();
        let mut score = 0.0;

        for square in 0..64 {
            let Some(occupant) = position.occupant(square) else {
                continue;
            };
            if occupant.color != turn {
                continue;
            }

            let mut quiet = Vec::new();
            let mut captures = Vec::new();
            generate_piece_moves(position, turn, square, occupant.kind, &mut quiet, &mut summary);
            generate_piece_captures(
                position,
                turn,
                square,
                occupant.kind,
                &mut captures,
                &mut summary,
            );
            score += ((quiet.len() + 2 * captures.len()) as Score).sqrt();

            score += engine.piece_value(occupant.kind);

            if occupant.kind == PieceKind::Pawn && is_advanced(turn, square) {
                score += PAWN_ADVANCE_CREDIT;
            }
        }

        for square in 0..64 {
            if matches!(position.occupant(square), Some(occ) if occ.color == turn) {
                score += safety_term(summary.safety_board[square]);
            }
        }

        score += summary.checks as Score;
        score += summary.promotions as Score * engine.piece_value(PieceKind::Queen);

        if engine.castling_possible(turn) {
            score += CASTLING_CREDIT;
        }

        score
    }
}

fn is_advanced(turn: Color, square: usize) -> bool {
    match turn {
        Color::White => row(square) < 6,
        Color::Black => row(square) > 1,
    }
}

/// Collapses a raw defense counter into its scoring tier. Pawn cover (100 or
/// more) is a small steady bonus; cover by two or more pieces caps at 2.0;
/// anything less passes through unchanged.
fn safety_term(counter: i32) -> Score {
    if counter >= 100 {
        0.3
    } else if counter > 1 {
        2.0
    } else {
        counter as Score
    }
}
