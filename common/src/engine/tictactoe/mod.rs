mod abstract_tree;
mod board;
mod bot;
mod error;
mod evaluator;
mod game_state;
pub mod lines;
mod notation;
mod search;
mod types;

pub use abstract_tree::{minimax_abstract, tree_height};
pub use board::{available_moves, board_size, empty_board, has_moves_remaining};
pub use bot::{calculate_move, OpponentKind};
pub use error::{BoardError, ParseBoardError};
pub use evaluator::{evaluate, game_status, winning_line};
pub use game_state::{run_self_play, TicTacToeGameState};
pub use lines::Line;
pub use notation::{format_board, parse_board};
pub use search::{
    find_best_move, find_best_move_with_stats, find_best_opponent_move, minimax,
    minimax_with_stats, SearchStats,
};
pub use types::{Board, GameStatus, Mark, Move, Score, INFINITY};
