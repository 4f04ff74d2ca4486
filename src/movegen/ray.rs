//! Parameterized ray walking for the sliding pieces.
//!
//! Rook, bishop, and queen generation all run the same walk; only the step
//! and the edge test differ. Horizontal rays lean on the mailbox border,
//! vertical rays on the 0..64 index range, and diagonal rays on a per-file
//! step budget (a left-leaning ray can take at most `col` steps before it
//! falls off the a-file).

use crate::board::chess_types::{Color, PieceKind, Square};
use crate::board::position::Position;
use crate::board::tables::{col, horizontal_target};
use crate::movegen::candidate::{capture_weight, CandidateMove};
use crate::movegen::summary::GenerationSummary;

/// How a ray direction detects the board edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayBound {
    /// ±1 steps, fenced by the 10x12 mailbox border.
    Horizontal,
    /// ±8 steps, fenced by the 0..64 index range.
    Vertical,
    /// -9 / +7 steps; at most `col` steps before the a-file edge.
    DiagonalLeft,
    /// -7 / +9 steps; at most `7 - col` steps before the h-file edge.
    DiagonalRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayDirection {
    pub step: i32,
    pub bound: RayBound,
}

pub const ROOK_DIRECTIONS: [RayDirection; 4] = [
    RayDirection { step: 1, bound: RayBound::Horizontal },
    RayDirection { step: -1, bound: RayBound::Horizontal },
    RayDirection { step: 8, bound: RayBound::Vertical },
    RayDirection { step: -8, bound: RayBound::Vertical },
];

pub const BISHOP_DIRECTIONS: [RayDirection; 4] = [
    RayDirection { step: -9, bound: RayBound::DiagonalLeft },
    RayDirection { step: 7, bound: RayBound::DiagonalLeft },
    RayDirection { step: -7, bound: RayBound::DiagonalRight },
    RayDirection { step: 9, bound: RayBound::DiagonalRight },
];

/// Visitor verdict after seeing one target square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayStep {
    Continue,
    Stop,
}

/// Walks outward from `square` along `direction`, calling `visit` on each
/// successive target until the board edge or until the visitor stops.
pub fn walk_ray<F>(square: Square, direction: RayDirection, mut visit: F)
where
    F: FnMut(Square) -> RayStep,
{
    match direction.bound {
        RayBound::Horizontal => {
            let mut current = square;
            while let Some(next) = horizontal_target(current, direction.step) {
                if visit(next) == RayStep::Stop {
                    break;
                }
                current = next;
            }
        }
        RayBound::Vertical => {
            let mut target = square as i32 + direction.step;
            while (0..64).contains(&target) {
                if visit(target as Square) == RayStep::Stop {
                    break;
                }
                target += direction.step;
            }
        }
        RayBound::DiagonalLeft | RayBound::DiagonalRight => {
            let budget = match direction.bound {
                RayBound::DiagonalLeft => col(square),
                _ => 7 - col(square),
            };
            let mut target = square as i32 + direction.step;
            let mut taken = 0;
            while taken < budget && (0..64).contains(&target) {
                if visit(target as Square) == RayStep::Stop {
                    break;
                }
                target += direction.step;
                taken += 1;
            }
        }
    }
}

/// Quiet moves for a sliding piece: each ray runs until the first occupied
/// square. A friendly blocker earns a defense point; any blocker ends the ray.
pub fn ray_moves(
    position: &Position,
    turn: Color,
    square: Square,
    directions: &[RayDirection],
    out: &mut Vec<CandidateMove>,
    summary: &mut GenerationSummary,
) {
    for &direction in directions {
        walk_ray(square, direction, |target| match position.occupant(target) {
            None => {
                out.push(CandidateMove::new(square, target));
                RayStep::Continue
            }
            Some(occupant) => {
                if occupant.color == turn {
                    summary.safety_board[target] += 1;
                }
                RayStep::Stop
            }
        });
    }
}

/// Captures for a sliding piece: each ray skips empty squares and captures
/// the first enemy blocker. A capture landing on the enemy king is a check.
pub fn ray_captures(
    position: &Position,
    turn: Color,
    square: Square,
    directions: &[RayDirection],
    out: &mut Vec<CandidateMove>,
    summary: &mut GenerationSummary,
) {
    for &direction in directions {
        walk_ray(square, direction, |target| match position.occupant(target) {
            None => RayStep::Continue,
            Some(occupant) => {
                if occupant.color != turn {
                    out.push(CandidateMove::scored(
                        square,
                        target,
                        capture_weight(occupant.kind),
                    ));
                    if occupant.kind == PieceKind::King {
                        summary.checks += 1;
                    }
                }
                RayStep::Stop
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(square: Square, direction: RayDirection) -> Vec<Square> {
        let mut visited = Vec::new();
        walk_ray(square, direction, |sq| {
            visited.push(sq);
            RayStep::Continue
        });
        visited
    }

    #[test]
    fn horizontal_ray_stops_at_the_file_edge() {
        // d4 is square 35 (row 4, col 3).
        assert_eq!(collect(35, ROOK_DIRECTIONS[0]), vec![36, 37, 38, 39]);
        assert_eq!(collect(35, ROOK_DIRECTIONS[1]), vec![34, 33, 32]);
    }

    #[test]
    fn vertical_ray_covers_the_full_file() {
        assert_eq!(collect(35, ROOK_DIRECTIONS[2]), vec![43, 51, 59]);
        assert_eq!(collect(35, ROOK_DIRECTIONS[3]), vec![27, 19, 11, 3]);
    }

    #[test]
    fn diagonal_budget_respects_the_files() {
        // Up-left from d4 can take three steps before the a-file.
        assert_eq!(collect(35, BISHOP_DIRECTIONS[0]), vec![26, 17, 8]);
        // Down-right from d4 runs to the h-file or the bottom edge.
        assert_eq!(collect(35, BISHOP_DIRECTIONS[3]), vec![44, 53, 62]);
    }

    #[test]
    fn visitor_stop_halts_the_walk() {
        let mut visited = Vec::new();
        walk_ray(35, ROOK_DIRECTIONS[0], |sq| {
            visited.push(sq);
            if sq == 37 { RayStep::Stop } else { RayStep::Continue }
        });
        assert_eq!(visited, vec![36, 37]);
    }

    #[test]
    fn corner_rays_from_a1() {
        // a1 is square 56.
        assert_eq!(collect(56, BISHOP_DIRECTIONS[0]), Vec::<Square>::new());
        assert_eq!(collect(56, BISHOP_DIRECTIONS[2]), vec![49, 42, 35, 28, 21, 14, 7]);
    }
}
