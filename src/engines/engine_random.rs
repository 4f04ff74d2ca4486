//! Random-move mover.
//!
//! Selects uniformly from the legal moves; used for diagnostics, playout
//! tests, and as a weak sparring partner.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::board_engine::BoardEngine;
use crate::engines::engine_trait::{Engine, SearchParams};
use crate::errors::EngineResult;
use crate::movegen::candidate::CoordMove;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible playouts.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "garnet-random"
    }

    fn choose_move(
        &mut self,
        board: &mut BoardEngine,
        _params: &SearchParams,
    ) -> EngineResult<Option<CoordMove>> {
        let mut legal = Vec::new();
        for candidate in board.generate_moves() {
            let coord = candidate.coord()?;
            if !board.is_check_situation(coord)? {
                legal.push(coord);
            }
        }
        Ok(legal.as_slice().choose(&mut self.rng).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen::parse_fen;

    #[test]
    fn picked_moves_are_always_legal() {
        let mut board = BoardEngine::new();
        let mut mover = RandomEngine::seeded(7);

        for _ in 0..20 {
            let Some(mv) = mover.choose_move(&mut board, &SearchParams::default()).unwrap() else {
                break;
            };
            assert!(board.is_valid_move(mv).unwrap());
            assert!(board.is_generated_move(mv));
            board.make_move(mv).unwrap();
            board.next_turn();
            assert!(board.position().is_consistent());
        }
    }

    #[test]
    fn stalemated_side_gets_no_move() {
        let mut board = parse_fen("k7/8/8/8/8/6q1/8/7K w - - 0 1").unwrap();
        let mut mover = RandomEngine::seeded(7);

        let picked = mover.choose_move(&mut board, &SearchParams::default()).unwrap();
        assert_eq!(picked, None);
    }
}
