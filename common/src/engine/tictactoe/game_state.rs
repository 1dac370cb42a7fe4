use rand::Rng;

use super::board::empty_board;
use super::bot::{calculate_move, OpponentKind};
use super::evaluator::game_status;
use super::types::{Board, GameStatus, Mark, Move};

/// A game between the minimax Player (`x`, moves first) and an Opponent
/// driven by an [`OpponentKind`].
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub history: Vec<(Mark, Move)>,
}

impl TicTacToeGameState {
    pub fn new(size: usize) -> Self {
        Self {
            board: empty_board(size),
            current_mark: Mark::Player,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|&(_, at)| at)
    }

    pub fn place_mark(&mut self, at: Move) -> Result<(), String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }

        let size = self.board.len();
        if at.row >= size || at.column >= size {
            return Err(format!("Position {} out of bounds", at));
        }

        if self.board[at.row][at.column] != Mark::Empty {
            return Err(format!("Cell {} is already marked", at));
        }

        self.board[at.row][at.column] = self.current_mark;
        self.history.push((self.current_mark, at));

        self.status = game_status(&self.board).map_err(|e| e.to_string())?;

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }
}

/// Plays a game to the end. `on_move` sees the state after every placement.
pub fn run_self_play<R: Rng + ?Sized>(
    size: usize,
    opponent: OpponentKind,
    rng: &mut R,
    mut on_move: impl FnMut(&TicTacToeGameState),
) -> Result<TicTacToeGameState, String> {
    let mut state = TicTacToeGameState::new(size);
    state.status = game_status(&state.board).map_err(|e| e.to_string())?;

    while !state.status.is_over() {
        let kind = match state.current_mark {
            Mark::Player => OpponentKind::Minimax,
            _ => opponent,
        };

        let chosen = calculate_move(kind, &state.board, state.current_mark, rng)
            .map_err(|e| e.to_string())?
            .ok_or_else(|| "No move available in an unfinished game".to_string())?;

        state.place_mark(chosen)?;
        on_move(&state);
    }

    Ok(state)
}
