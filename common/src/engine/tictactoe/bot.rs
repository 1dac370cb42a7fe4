use rand::Rng;
use serde::{Deserialize, Serialize};

use super::board::{available_moves, board_size};
use super::error::BoardError;
use super::search::{find_best_move, find_best_opponent_move};
use super::types::{Mark, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OpponentKind {
    #[default]
    Minimax,
    Random,
}

/// Move for `side` on `board`, or `None` when the board is full or `side` is
/// `Mark::Empty`. The caller's board is not touched.
pub fn calculate_move<R: Rng + ?Sized>(
    kind: OpponentKind,
    board: &[Vec<Mark>],
    side: Mark,
    rng: &mut R,
) -> Result<Option<Move>, BoardError> {
    board_size(board)?;
    match kind {
        OpponentKind::Minimax => calculate_minimax_move(board, side),
        OpponentKind::Random => Ok(calculate_random_move(board, side, rng)),
    }
}

fn calculate_minimax_move(board: &[Vec<Mark>], side: Mark) -> Result<Option<Move>, BoardError> {
    let mut board = board.to_vec();
    match side {
        Mark::Player => find_best_move(&mut board),
        Mark::Opponent => find_best_opponent_move(&mut board),
        Mark::Empty => Ok(None),
    }
}

fn calculate_random_move<R: Rng + ?Sized>(
    board: &[Vec<Mark>],
    side: Mark,
    rng: &mut R,
) -> Option<Move> {
    if side == Mark::Empty {
        return None;
    }

    let moves = available_moves(board);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.random_range(0..moves.len())])
}
