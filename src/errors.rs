//! Unified error type for the engine core.
//!
//! Precondition violations (unbalanced undo, moving from an empty square,
//! malformed candidate masks) surface as typed errors instead of silently
//! corrupting board state; callers propagate them with `?`.

use std::error::Error;
use std::fmt;

use crate::movegen::candidate::CoordMove;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// `make_move` was asked to move from a square that holds no piece.
    EmptySourceSquare(CoordMove),
    /// `undo_move` was called with no snapshot left to restore.
    EmptyHistory,
    /// A candidate move carried a mask that is not exactly one set bit.
    NotASingleBit(u64),
    /// A FEN string could not be parsed into a position.
    InvalidFen(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::EmptySourceSquare(mv) => {
                write!(
                    f,
                    "no piece on source square ({}, {})",
                    mv.from.0, mv.from.1
                )
            }
            EngineError::EmptyHistory => {
                write!(f, "undo requested with an empty history stack")
            }
            EngineError::NotASingleBit(mask) => {
                write!(f, "candidate mask {mask:#018x} is not a single set bit")
            }
            EngineError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
        }
    }
}

impl Error for EngineError {}
