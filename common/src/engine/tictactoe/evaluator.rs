use super::board::{any_empty, board_size};
use super::error::BoardError;
use super::lines::{scan_order, Line, LineCells};
use super::types::{GameStatus, Mark, Score, INFINITY};

/// Scores a board: `INFINITY` if the Player owns a full line, `-INFINITY` if
/// the Opponent does, `0` otherwise.
///
/// A zero does not tell a draw from a game in progress; pair it with
/// `has_moves_remaining` or use [`game_status`].
/// Lines are scanned in [`scan_order`] and the first full one decides.
pub fn evaluate(board: &[Vec<Mark>]) -> Result<Score, BoardError> {
    let size = board_size(board)?;
    Ok(evaluate_sized(board, size))
}

pub(crate) fn evaluate_sized(board: &[Vec<Mark>], size: usize) -> Score {
    match find_winning_line(board, size) {
        Some((_, Mark::Player)) => INFINITY,
        Some((_, Mark::Opponent)) => -INFINITY,
        _ => 0,
    }
}

/// First full line and the mark that owns it.
pub fn winning_line(board: &[Vec<Mark>]) -> Result<Option<(Line, Mark)>, BoardError> {
    let size = board_size(board)?;
    Ok(find_winning_line(board, size))
}

pub fn game_status(board: &[Vec<Mark>]) -> Result<GameStatus, BoardError> {
    let score = evaluate(board)?;
    let status = if score == INFINITY {
        GameStatus::PlayerWon
    } else if score == -INFINITY {
        GameStatus::OpponentWon
    } else if any_empty(board) {
        GameStatus::InProgress
    } else {
        GameStatus::Draw
    };
    Ok(status)
}

fn find_winning_line(board: &[Vec<Mark>], size: usize) -> Option<(Line, Mark)> {
    // a line of zero cells is not a win
    if size == 0 {
        return None;
    }

    for line in scan_order(size) {
        if let Some(mark) = line_owner(LineCells::new(board, size, line)) {
            return Some((line, mark));
        }
    }
    None
}

fn line_owner(cells: LineCells<'_>) -> Option<Mark> {
    [Mark::Player, Mark::Opponent]
        .into_iter()
        .find(|&mark| cells.clone().all(|cell| cell == mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tictactoe::notation::parse_board;

    fn eval(text: &str) -> Score {
        evaluate(&parse_board(text).unwrap()).unwrap()
    }

    #[test]
    fn test_uneven_board_dimensions_fail() {
        let board = parse_board("xxx/__o").unwrap();
        assert_eq!(
            evaluate(&board),
            Err(BoardError::InvalidBoardShape { rows: 2, columns: 3 })
        );
    }

    #[test]
    fn test_row_x_win() {
        assert_eq!(eval("xxx/_oo/__o"), INFINITY);
    }

    #[test]
    fn test_row_o_win() {
        assert_eq!(eval("__x/_xx/ooo"), -INFINITY);
    }

    #[test]
    fn test_column_x_win() {
        assert_eq!(eval("__x/_ox/oox"), INFINITY);
    }

    #[test]
    fn test_column_o_win() {
        assert_eq!(eval("o__/ox_/oxx"), -INFINITY);
    }

    #[test]
    fn test_main_diagonal_x_win() {
        assert_eq!(eval("x_o/_xo/__x"), INFINITY);
    }

    #[test]
    fn test_anti_diagonal_x_win() {
        assert_eq!(eval("o_x/_xo/x_o"), INFINITY);
    }

    #[test]
    fn test_main_diagonal_o_win() {
        assert_eq!(eval("o_x/xo_/x_o"), -INFINITY);
    }

    #[test]
    fn test_anti_diagonal_o_win() {
        assert_eq!(eval("x_o/_ox/o_x"), -INFINITY);
    }

    #[test]
    fn test_no_winner_yet_scores_zero() {
        let board = parse_board("oxo/xxo/o_x").unwrap();
        assert_eq!(evaluate(&board), Ok(0));
        assert_eq!(game_status(&board), Ok(GameStatus::InProgress));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = parse_board("oxo/xxo/oox").unwrap();
        assert_eq!(evaluate(&board), Ok(0));
        assert_eq!(game_status(&board), Ok(GameStatus::Draw));
    }

    #[test]
    fn test_larger_board_column_win() {
        assert_eq!(eval("_o__/_o_x/xo__/_ox_"), -INFINITY);
    }

    #[test]
    fn test_first_scanned_line_decides_impossible_boards() {
        // row 0 is scanned before row 2
        assert_eq!(eval("xxx/___/ooo"), INFINITY);
        assert_eq!(eval("ooo/___/xxx"), -INFINITY);
    }

    #[test]
    fn test_winning_line_reports_line() {
        let board = parse_board("o_x/_xo/x_o").unwrap();
        assert_eq!(
            winning_line(&board),
            Ok(Some((Line::AntiDiagonal, Mark::Player)))
        );
        assert_eq!(game_status(&board), Ok(GameStatus::PlayerWon));
    }

    #[test]
    fn test_empty_grid_has_no_winner() {
        let board: Vec<Vec<Mark>> = Vec::new();
        assert_eq!(evaluate(&board), Ok(0));
        assert_eq!(game_status(&board), Ok(GameStatus::Draw));
    }
}
