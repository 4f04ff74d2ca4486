//! Search-backed mover.
//!
//! Wraps `SearchEngine` behind the `Engine` trait. Either search flavor can
//! be selected; alpha-beta is the default and the only one that honors the
//! time budget.

use log::debug;

use crate::board::board_engine::BoardEngine;
use crate::engines::engine_trait::{Engine, SearchParams};
use crate::errors::EngineResult;
use crate::movegen::candidate::CoordMove;
use crate::search::search_engine::{SearchEngine, INFINITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    Minimax,
    AlphaBeta,
}

pub struct SearchMover {
    search: SearchEngine,
    strategy: SearchStrategy,
}

impl SearchMover {
    pub fn new() -> Self {
        Self::with_strategy(SearchStrategy::AlphaBeta)
    }

    pub fn with_strategy(strategy: SearchStrategy) -> Self {
        Self {
            search: SearchEngine::new(),
            strategy,
        }
    }
}

impl Default for SearchMover {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for SearchMover {
    fn name(&self) -> &str {
        match self.strategy {
            SearchStrategy::Minimax => "garnet-minimax",
            SearchStrategy::AlphaBeta => "garnet-alphabeta",
        }
    }

    fn choose_move(
        &mut self,
        board: &mut BoardEngine,
        params: &SearchParams,
    ) -> EngineResult<Option<CoordMove>> {
        let depth = params.depth.unwrap_or(self.search.min_depth());
        if let Some(max_time) = params.max_time {
            self.search.set_max_time(max_time);
        }

        board.clear_best_move();
        self.search.init_timer();

        let score = match self.strategy {
            SearchStrategy::Minimax => self.search.minimax(board, depth)?,
            SearchStrategy::AlphaBeta => {
                self.search.alpha_beta(board, -INFINITY, INFINITY, depth)?
            }
        };
        debug!(
            "{} picked {:?} at depth {depth} scoring {score:.3}",
            self.name(),
            board.best_move()
        );

        Ok(board.best_move())
    }
}
