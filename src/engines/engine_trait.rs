//! Engine abstraction so different move-selection strategies sit behind one
//! trait interface.

use crate::board::board_engine::BoardEngine;
use crate::errors::EngineResult;
use crate::movegen::candidate::CoordMove;

/// Per-move search parameters.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Search depth override; movers that do not search ignore it.
    pub depth: Option<u32>,
    /// Time budget override in seconds.
    pub max_time: Option<f64>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Picks a move for the side to move, or `None` when no legal move
    /// exists. The board is handed over mutably so movers can run make/undo
    /// probing and leave annotations (best move, outcome) behind.
    fn choose_move(
        &mut self,
        board: &mut BoardEngine,
        params: &SearchParams,
    ) -> EngineResult<Option<CoordMove>>;
}
