//! FEN parsing and generation.
//!
//! Only the fields this engine models are honored: piece placement, side to
//! move, and the castling field (which folds into the per-side castling
//! availability flags). En passant and the move counters are accepted and
//! ignored on input, and emitted as placeholders on output.

use crate::board::board_engine::BoardEngine;
use crate::board::chess_types::{Color, Occupant, PieceKind};
use crate::board::position::Position;
use crate::errors::{EngineError, EngineResult};

pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub fn parse_fen(fen: &str) -> EngineResult<BoardEngine> {
    let mut fields = fen.split_whitespace();
    let placement = fields
        .next()
        .ok_or_else(|| EngineError::InvalidFen("empty string".into()))?;
    let side = fields.next().unwrap_or("w");
    let castling = fields.next().unwrap_or("-");

    let mut position = Position::empty();
    let mut row = 0usize;
    let mut col = 0usize;
    for ch in placement.chars() {
        match ch {
            '/' => {
                if col != 8 || row >= 7 {
                    return Err(EngineError::InvalidFen(format!(
                        "rank break after {col} files on row {row}"
                    )));
                }
                row += 1;
                col = 0;
            }
            '1'..='8' => {
                col += ch as usize - '0' as usize;
                if col > 8 {
                    return Err(EngineError::InvalidFen(format!("rank overflow on row {row}")));
                }
            }
            _ => {
                let (color, kind) = decode_piece(ch)
                    .ok_or_else(|| EngineError::InvalidFen(format!("unknown piece '{ch}'")))?;
                if col > 7 {
                    return Err(EngineError::InvalidFen(format!("rank overflow on row {row}")));
                }
                position.place(row * 8 + col, color, kind);
                col += 1;
            }
        }
    }
    if row != 7 || col != 8 {
        return Err(EngineError::InvalidFen(
            "placement does not cover eight ranks".into(),
        ));
    }

    let turn = match side {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(EngineError::InvalidFen(format!(
                "side to move must be 'w' or 'b', got '{other}'"
            )))
        }
    };

    let mut engine = BoardEngine::with_position(position, turn);
    engine.set_castling_possible(Color::White, castling.contains(['K', 'Q']));
    engine.set_castling_possible(Color::Black, castling.contains(['k', 'q']));
    Ok(engine)
}

pub fn generate_fen(engine: &BoardEngine) -> String {
    let mut placement = String::new();
    for row in 0..8 {
        if row > 0 {
            placement.push('/');
        }
        let mut empty_run = 0;
        for col in 0..8 {
            match engine.position().occupant(row * 8 + col) {
                None => empty_run += 1,
                Some(occupant) => {
                    if empty_run > 0 {
                        placement.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    placement.push(encode_piece(occupant));
                }
            }
        }
        if empty_run > 0 {
            placement.push(char::from(b'0' + empty_run));
        }
    }

    let side = match engine.turn() {
        Color::White => 'w',
        Color::Black => 'b',
    };

    let mut castling = String::new();
    if engine.castling_possible(Color::White) {
        castling.push_str("KQ");
    }
    if engine.castling_possible(Color::Black) {
        castling.push_str("kq");
    }
    if castling.is_empty() {
        castling.push('-');
    }

    format!("{placement} {side} {castling} - 0 1")
}

fn decode_piece(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some((color, kind))
}

fn encode_piece(occupant: Occupant) -> char {
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
