//! King move and capture generation.
//!
//! Single steps in all eight directions. Horizontal steps use the mailbox
//! border, vertical steps the index range, and diagonal steps a file guard.
//! A king's captures never count as checks; kings cannot give check.

use crate::board::chess_types::{Color, Square};
use crate::board::position::Position;
use crate::board::tables::{col, horizontal_target, KING_OFFSETS};
use crate::movegen::candidate::{capture_weight, CandidateMove};
use crate::movegen::summary::GenerationSummary;

fn step_target(square: Square, offset: i32) -> Option<Square> {
    match offset {
        1 | -1 => horizontal_target(square, offset),
        -7 | 9 if col(square) == 7 => None,
        -9 | 7 if col(square) == 0 => None,
        _ => {
            let target = square as i32 + offset;
            if (0..64).contains(&target) {
                Some(target as Square)
            } else {
                None
            }
        }
    }
}

pub fn generate_moves(
    position: &Position,
    turn: Color,
    square: Square,
    out: &mut Vec<CandidateMove>,
    summary: &mut GenerationSummary,
) {
    for offset in KING_OFFSETS {
        if let Some(target) = step_target(square, offset) {
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
    _summary: &mut GenerationSummary,
) {
    for offset in KING_OFFSETS {
        if let Some(target) = step_target(square, offset) {
            if let Some(occupant) = position.occupant(target) {
                if occupant.color != turn {
                    out.push(CandidateMove::scored(
                        square,
                        target,
                        capture_weight(occupant.kind),
                    ));
                }
            }
        }
    }
}
