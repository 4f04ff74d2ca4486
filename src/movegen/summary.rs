//! Side data collected while generating moves.
//!
//! The generators report defensive cover, discovered checks, and pending
//! promotions through an explicit `GenerationSummary` owned by the caller.
//! The board engine keeps one for the position it manages; the evaluator
//! runs the generators against a scratch summary so probing never disturbs
//! engine state.

/// Aggregated observations from one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Per-square defense counters. A friendly piece covered by a pawn gets
    /// +100; cover from any other piece adds +1.
    pub safety_board: [i32; 64],
    /// Number of generated captures that land on the enemy king.
    pub checks: u32,
    /// Number of generated pawn moves that reach the back rank.
    pub promotions: u32,
}

impl GenerationSummary {
    pub fn new() -> Self {
        Self {
            safety_board: [0; 64],
            checks: 0,
            promotions: 0,
        }
    }

    pub fn clear(&mut self) {
        self.safety_board = [0; 64];
        self.checks = 0;
        self.promotions = 0;
    }
}

impl Default for GenerationSummary {
    fn default() -> Self {
        Self::new()
    }
}
