//! The board engine: move generation dispatch, make/undo, and legality.
//!
//! `BoardEngine` owns a `Position` plus the game-level state around it (side
//! to move, material values, castling availability, generation summary, and
//! the snapshot stack for undo). Making a move never flips the turn; callers
//! advance the turn explicitly, which keeps probing workflows (`is it check
//! after this move?`) free of hidden state changes.

use log::trace;

use crate::board::chess_types::{Color, Occupant, PieceKind, Score, Square};
use crate::board::position::Position;
use crate::board::tables::row;
use crate::errors::{EngineError, EngineResult};
use crate::movegen::candidate::{CandidateMove, CoordMove};
use crate::movegen::summary::GenerationSummary;
use crate::movegen::{bishop, king, knight, pawn, queen, rook};

/// Default material values indexed by `PieceKind::index()`.
pub const DEFAULT_PIECE_VALUES: [Score; 6] = [1.0, 3.0, 3.5, 5.0, 10.0, 10000.0];

/// A finished game, tagged with the side that has no legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate(Color),
    Stalemate(Color),
}

#[derive(Debug, Clone)]
struct Snapshot {
    position: Position,
    turn: Color,
    castling_possible: [bool; 2],
}

#[derive(Debug, Clone)]
pub struct BoardEngine {
    position: Position,
    turn: Color,
    piece_values: [Score; 6],
    /// Whether each side could still plausibly castle. This is a heuristic
    /// flag for the evaluator, cleared once the king or a home-corner rook
    /// moves; castling itself is not executed as a move.
    castling_possible: [bool; 2],
    summary: GenerationSummary,
    outcome: Option<Outcome>,
    best_move: Option<CoordMove>,
    history: Vec<Snapshot>,
}

impl BoardEngine {
    pub fn new() -> Self {
        Self::with_position(Position::starting(), Color::White)
    }

    pub fn with_position(position: Position, turn: Color) -> Self {
        Self {
            position,
            turn,
            piece_values: DEFAULT_PIECE_VALUES,
            castling_possible: [true, true],
            summary: GenerationSummary::new(),
            outcome: None,
            best_move: None,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    #[inline]
    pub fn next_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    #[inline]
    pub fn summary(&self) -> &GenerationSummary {
        &self.summary
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }

    #[inline]
    pub fn best_move(&self) -> Option<CoordMove> {
        self.best_move
    }

    #[inline]
    pub fn set_best_move(&mut self, mv: CoordMove) {
        self.best_move = Some(mv);
    }

    #[inline]
    pub fn clear_best_move(&mut self) {
        self.best_move = None;
    }

    /// Replaces the position outright. History and cached annotations are
    /// left alone; callers managing a game reset the rest explicitly.
    #[inline]
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    #[inline]
    pub fn piece_value(&self, kind: PieceKind) -> Score {
        self.piece_values[kind.index()]
    }

    #[inline]
    pub fn set_piece_value(&mut self, kind: PieceKind, value: Score) {
        self.piece_values[kind.index()] = value;
    }

    #[inline]
    pub fn castling_possible(&self, color: Color) -> bool {
        self.castling_possible[color.index()]
    }

    #[inline]
    pub fn set_castling_possible(&mut self, color: Color, possible: bool) {
        self.castling_possible[color.index()] = possible;
    }

    /// All pseudo-legal moves for the side to move, quiet moves and captures
    /// per origin square in ascending square order. Refreshes the generation
    /// summary and resets any stale outcome.
    pub fn generate_moves(&mut self) -> Vec<CandidateMove> {
        self.summary.clear();
        self.outcome = None;

        let mut out = Vec::new();
        for square in 0..64 {
            if let Some(Occupant { color, kind }) = self.position.occupant(square) {
                if color == self.turn {
                    generate_piece_moves(
                        &self.position,
                        self.turn,
                        square,
                        kind,
                        &mut out,
                        &mut self.summary,
                    );
                    generate_piece_captures(
                        &self.position,
                        self.turn,
                        square,
                        kind,
                        &mut out,
                        &mut self.summary,
                    );
                }
            }
        }
        out
    }

    /// Applies `mv` for the side to move. Pushes a snapshot first so
    /// `undo_move` can restore the previous state exactly. The turn is not
    /// flipped. A pawn arriving on the far rank becomes a queen here.
    pub fn make_move(&mut self, mv: CoordMove) -> EngineResult<()> {
        let from = mv.source_index();
        let to = mv.dest_index();
        let Occupant { color, kind } = self
            .position
            .occupant(from)
            .ok_or(EngineError::EmptySourceSquare(mv))?;

        self.history.push(Snapshot {
            position: self.position.clone(),
            turn: self.turn,
            castling_possible: self.castling_possible,
        });

        if let Some(victim) = self.position.occupant(to) {
            trace!(
                "capture on square {to}: {:?} {:?} taken by {:?} {:?}",
                victim.color,
                victim.kind,
                color,
                kind
            );
            self.position.clear_color_at(to, victim.color);
        }

        self.position.clear(from);
        let promoted = kind == PieceKind::Pawn && (row(to) == 0 || row(to) == 7);
        let final_kind = if promoted { PieceKind::Queen } else { kind };
        self.position.place(to, color, final_kind);

        match kind {
            PieceKind::King => self.castling_possible[color.index()] = false,
            PieceKind::Rook => {
                let home = match color {
                    Color::White => from == 56 || from == 63,
                    Color::Black => from == 0 || from == 7,
                };
                if home {
                    self.castling_possible[color.index()] = false;
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Restores the most recent snapshot.
    pub fn undo_move(&mut self) -> EngineResult<()> {
        let snapshot = self.history.pop().ok_or(EngineError::EmptyHistory)?;
        self.position = snapshot.position;
        self.turn = snapshot.turn;
        self.castling_possible = snapshot.castling_possible;
        Ok(())
    }

    /// A lightweight clone for probing: position, turn, material values, and
    /// castling flags only. No history, no summary, no cached best move.
    pub fn probe_clone(&self) -> Self {
        let mut probe = Self::with_position(self.position.clone(), self.turn);
        probe.piece_values = self.piece_values;
        probe.castling_possible = self.castling_possible;
        probe
    }

    /// The position after `mv`, as a probe clone with the turn advanced.
    pub fn probe_after(&self, mv: CoordMove) -> EngineResult<Self> {
        let mut probe = self.probe_clone();
        probe.make_move(mv)?;
        probe.next_turn();
        Ok(probe)
    }

    /// Whether `color`'s king is currently attacked.
    pub fn in_check(&self, color: Color) -> bool {
        captures_hit_king(&self.position, color.opposite())
    }

    /// Whether making `mv` would leave the mover's own king attacked.
    pub fn is_check_situation(&self, mv: CoordMove) -> EngineResult<bool> {
        let mut probe = self.probe_clone();
        probe.make_move(mv)?;
        Ok(probe.in_check(self.turn))
    }

    /// Self-check legality: the source square must hold the mover's piece
    /// and the move must not leave the mover's king attacked. Structural
    /// legality (an unblocked path, a shape the piece can actually make) is
    /// not checked here; sessions accepting outside input cross-check
    /// against `is_generated_move` as well.
    pub fn is_valid_move(&self, mv: CoordMove) -> EngineResult<bool> {
        match self.position.occupant(mv.source_index()) {
            Some(Occupant { color, .. }) if color == self.turn => {
                Ok(!self.is_check_situation(mv)?)
            }
            _ => Ok(false),
        }
    }

    /// Whether `mv` is among the candidates generation would emit for the
    /// current position.
    pub fn is_generated_move(&self, mv: CoordMove) -> bool {
        let mut probe = self.probe_clone();
        probe
            .generate_moves()
            .iter()
            .any(|candidate| matches!(candidate.coord(), Ok(coord) if coord == mv))
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Quiet-move dispatch for a single piece.
pub fn generate_piece_moves(
    position: &Position,
    turn: Color,
    square: Square,
    kind: PieceKind,
    out: &mut Vec<CandidateMove>,
    summary: &mut GenerationSummary,
) {
    match kind {
        PieceKind::Pawn => pawn::generate_moves(position, turn, square, out, summary),
        PieceKind::Knight => knight::generate_moves(position, turn, square, out, summary),
        PieceKind::Bishop => bishop::generate_moves(position, turn, square, out, summary),
        PieceKind::Rook => rook::generate_moves(position, turn, square, out, summary),
        PieceKind::Queen => queen::generate_moves(position, turn, square, out, summary),
        PieceKind::King => king::generate_moves(position, turn, square, out, summary),
    }
}

/// Capture dispatch for a single piece.
pub fn generate_piece_captures(
    position: &Position,
    turn: Color,
    square: Square,
    kind: PieceKind,
    out: &mut Vec<CandidateMove>,
    summary: &mut GenerationSummary,
) {
    match kind {
        PieceKind::Pawn => pawn::generate_captures(position, turn, square, out, summary),
        PieceKind::Knight => knight::generate_captures(position, turn, square, out, summary),
        PieceKind::Bishop => bishop::generate_captures(position, turn, square, out, summary),
        PieceKind::Rook => rook::generate_captures(position, turn, square, out, summary),
        PieceKind::Queen => queen::generate_captures(position, turn, square, out, summary),
        PieceKind::King => king::generate_captures(position, turn, square, out, summary),
    }
}

/// Whether any of `attacker`'s pieces has a capture landing on the enemy
/// king. Kings are skipped; a king can never deliver check.
pub fn captures_hit_king(position: &Position, attacker: Color) -> bool {
    let mut scratch_moves = Vec::new();
    let mut scratch = GenerationSummary::new();
    for square in 0..64 {
        if let Some(Occupant { color, kind }) = position.occupant(square) {
            if color == attacker && kind != PieceKind::King {
                generate_piece_captures(
                    position,
                    attacker,
                    square,
                    kind,
                    &mut scratch_moves,
                    &mut scratch,
                );
                if scratch.checks > 0 {
                    return true;
                }
            }
        }
    }
    false
}
