use crate::debug_log;
use super::board::{any_empty, board_size, PlacedMark};
use super::error::BoardError;
use super::evaluator::evaluate_sized;
use super::types::{Mark, Move, Score, INFINITY};

/// Counters collected while the value function walks the game tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// One per value-function call, terminal or not.
    pub nodes_visited: u64,
    pub max_depth: usize,
    /// Wins, losses and full boards reached.
    pub terminal_positions: u64,
}

/// Value of `board` with `is_maximizing` telling whose turn it is: the Player
/// maximizes, the Opponent minimizes.
///
/// Every reachable position below `board` is visited; there is no pruning and
/// `depth` is only recorded, never used as a cutoff. The board is mutated while
/// exploring and is back in its original state when this returns.
pub fn minimax(
    board: &mut [Vec<Mark>],
    depth: usize,
    is_maximizing: bool,
) -> Result<Score, BoardError> {
    let mut stats = SearchStats::default();
    minimax_with_stats(board, depth, is_maximizing, &mut stats)
}

pub fn minimax_with_stats(
    board: &mut [Vec<Mark>],
    depth: usize,
    is_maximizing: bool,
    stats: &mut SearchStats,
) -> Result<Score, BoardError> {
    let size = board_size(board)?;
    Ok(search(board, size, depth, is_maximizing, stats))
}

fn search(
    board: &mut [Vec<Mark>],
    size: usize,
    depth: usize,
    is_maximizing: bool,
    stats: &mut SearchStats,
) -> Score {
    stats.nodes_visited += 1;
    stats.max_depth = stats.max_depth.max(depth);

    let score = evaluate_sized(board, size);
    if score == INFINITY || score == -INFINITY {
        stats.terminal_positions += 1;
        return score;
    }

    if !any_empty(board) {
        stats.terminal_positions += 1;
        return 0;
    }

    let mark = Mark::for_turn(is_maximizing);
    let mut best = if is_maximizing { -INFINITY } else { INFINITY };

    for row in 0..size {
        for column in 0..size {
            if board[row][column] != Mark::Empty {
                continue;
            }

            let mut placed = PlacedMark::place(board, Move::new(row, column), mark);
            let value = search(placed.board_mut(), size, depth + 1, !is_maximizing, stats);

            best = if is_maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
    }

    best
}

/// Best cell for the Player, trying empty cells in row-major order.
///
/// Each candidate is scored by `minimax(board, 0, false)` after placing it. A
/// later cell replaces the current choice only with a strictly higher score,
/// so ties go to the earliest cell. Returns `None` when the board is full.
pub fn find_best_move(board: &mut [Vec<Mark>]) -> Result<Option<Move>, BoardError> {
    let mut stats = SearchStats::default();
    find_best_move_with_stats(board, &mut stats)
}

pub fn find_best_move_with_stats(
    board: &mut [Vec<Mark>],
    stats: &mut SearchStats,
) -> Result<Option<Move>, BoardError> {
    best_move_for(board, true, stats)
}

/// Mirror of [`find_best_move`] for the Opponent: places `o`, scores with the
/// Player to move and keeps strictly lower scores.
pub fn find_best_opponent_move(board: &mut [Vec<Mark>]) -> Result<Option<Move>, BoardError> {
    let mut stats = SearchStats::default();
    best_move_for(board, false, &mut stats)
}

fn best_move_for(
    board: &mut [Vec<Mark>],
    is_maximizing: bool,
    stats: &mut SearchStats,
) -> Result<Option<Move>, BoardError> {
    let size = board_size(board)?;
    let mark = Mark::for_turn(is_maximizing);
    let mut best: Option<(Move, Score)> = None;

    for row in 0..size {
        for column in 0..size {
            if board[row][column] != Mark::Empty {
                continue;
            }

            let candidate = Move::new(row, column);
            let score = {
                let mut placed = PlacedMark::place(board, candidate, mark);
                search(placed.board_mut(), size, 0, !is_maximizing, stats)
            };
            debug_log!("Candidate {} for {} scores {}", candidate, mark.symbol(), score);

            let improves = match best {
                None => true,
                Some((_, best_score)) if is_maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((candidate, score));
            }
        }
    }

    Ok(best.map(|(best_move, _)| best_move))
}
