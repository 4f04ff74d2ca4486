//! Game-tree search: plain negamax and an alpha-beta variant with
//! principal-variation probing.
//!
//! Both searches are negamax-shaped: every node scores the position for the
//! side to move there and negates child results. Illegal candidates (those
//! leaving the mover's own king attacked) are rejected at each node; a node
//! whose candidates are all rejected is terminal and gets flagged on the
//! board as checkmate or stalemate depending on whether the mover stands in
//! check.
//!
//! The window sentinel is a large finite value rather than `f64::INFINITY`
//! so the null-window arithmetic (`-alpha - 1.0`) stays meaningful.

use log::debug;

use crate::board::board_engine::{BoardEngine, Outcome};
use crate::board::chess_types::Score;
use crate::errors::EngineResult;
use crate::eval::evaluator::Evaluator;
use crate::search::clock::{TimeSource, WallClock};

pub const INFINITY: Score = 1.0e7;

const DEFAULT_MAX_TIME: f64 = 60.0;
const DEFAULT_MIN_DEPTH: u32 = 3;

pub struct SearchEngine<C: TimeSource = WallClock> {
    evaluator: Evaluator,
    clock: C,
    /// Time budget in seconds; alpha-beta hands back its best answer so far
    /// once this is exceeded.
    max_time: f64,
    /// Depth the movers search to.
    min_depth: u32,
}

impl SearchEngine<WallClock> {
    pub fn new() -> Self {
        Self::with_clock(WallClock::new())
    }
}

impl Default for SearchEngine<WallClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TimeSource> SearchEngine<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            evaluator: Evaluator::new(),
            clock,
            max_time: DEFAULT_MAX_TIME,
            min_depth: DEFAULT_MIN_DEPTH,
        }
    }

    /// Restarts the time budget measurement.
    pub fn init_timer(&mut self) {
        self.clock.reset();
    }

    #[inline]
    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    #[inline]
    pub fn set_max_time(&mut self, seconds: f64) {
        self.max_time = seconds;
    }

    #[inline]
    pub fn min_depth(&self) -> u32 {
        self.min_depth
    }

    #[inline]
    pub fn set_min_depth(&mut self, depth: u32) {
        self.min_depth = depth;
    }

    #[cfg(test)]
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Full-width negamax. No window, no time cutoff; useful as the
    /// reference the pruned search must agree with.
    pub fn minimax(&mut self, engine: &mut BoardEngine, depth: u32) -> EngineResult<Score> {
        if depth == 0 {
            return Ok(self.evaluator.evaluate(engine));
        }

        let moves = engine.generate_moves();
        let mut best = -INFINITY;
        let mut rejected = 0;

        for mv in &moves {
            let coord = mv.coord()?;
            if engine.is_check_situation(coord)? {
                rejected += 1;
                continue;
            }

            let mut child = engine.probe_after(coord)?;
            let score = -self.minimax(&mut child, depth - 1)?;
            if score > best {
                best = score;
                engine.set_best_move(coord);
            }
        }

        if rejected == moves.len() {
            flag_terminal(engine);
        }
        Ok(best)
    }

    /// Negamax over an `(alpha, beta)` window. After the first legal child,
    /// each move is probed with a null window around alpha and re-searched
    /// at full width only when the probe lands strictly inside the window.
    /// The clock is polled once per candidate; on expiry the best score so
    /// far is returned immediately.
    pub fn alpha_beta(
        &mut self,
        engine: &mut BoardEngine,
        alpha: Score,
        beta: Score,
        depth: u32,
    ) -> EngineResult<Score> {
        if depth == 0 {
            return Ok(self.evaluator.evaluate(engine));
        }

        let mut moves = engine.generate_moves();
        // Heavier victims first; stable, so quiet moves keep generation order.
        moves.sort_by(|a, b| b.score.cmp(&a.score));

        let mut best = -INFINITY;
        let mut alpha = alpha;
        let mut rejected = 0;
        let mut searched_any = false;

        for mv in &moves {
            if best >= beta {
                return Ok(best);
            }
            if self.clock.elapsed_seconds() > self.max_time {
                debug!("time budget exhausted at depth {depth}, returning best so far");
                return Ok(best);
            }

            let coord = mv.coord()?;
            if engine.is_check_situation(coord)? {
                rejected += 1;
                continue;
            }

            if best > alpha {
                alpha = best;
            }

            let mut child = engine.probe_after(coord)?;
            let score = if searched_any {
                let probe = -self.alpha_beta(&mut child, -alpha - 1.0, -alpha, depth - 1)?;
                if probe > alpha && probe < beta {
                    -self.alpha_beta(&mut child, -beta, -alpha, depth - 1)?
                } else {
                    probe
                }
            } else {
                -self.alpha_beta(&mut child, -beta, -alpha, depth - 1)?
            };
            searched_any = true;

            if score > best {
                best = score;
                engine.set_best_move(coord);
                debug!(
                    "depth {depth}: new best {:?} -> {:?} scoring {score:.3}",
                    coord.from, coord.to
                );
            }
        }

        if rejected == moves.len() {
            flag_terminal(engine);
        }
        Ok(best)
    }
}

/// Marks a position with no legal moves as finished for the side to move.
fn flag_terminal(engine: &mut BoardEngine) {
    let mover = engine.turn();
    let outcome = if engine.in_check(mover) {
        Outcome::Checkmate(mover)
    } else {
        Outcome::Stalemate(mover)
    };
    debug!("terminal position for {mover:?}: {outcome:?}");
    engine.set_outcome(outcome);
}
