use super::error::BoardError;
use super::types::{Mark, Move};

/// Side length of a square board.
pub fn board_size(board: &[Vec<Mark>]) -> Result<usize, BoardError> {
    let rows = board.len();
    if let Some(row) = board.iter().find(|row| row.len() != rows) {
        return Err(BoardError::InvalidBoardShape {
            rows,
            columns: row.len(),
        });
    }
    Ok(rows)
}

pub fn has_moves_remaining(board: &[Vec<Mark>]) -> Result<bool, BoardError> {
    board_size(board)?;
    Ok(any_empty(board))
}

pub(crate) fn any_empty(board: &[Vec<Mark>]) -> bool {
    board
        .iter()
        .any(|row| row.iter().any(|&cell| cell == Mark::Empty))
}

/// Empty cells in row-major order.
pub fn available_moves(board: &[Vec<Mark>]) -> Vec<Move> {
    let mut moves = Vec::new();
    for (row, cells) in board.iter().enumerate() {
        for (column, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Move::new(row, column));
            }
        }
    }
    moves
}

pub fn empty_board(size: usize) -> Vec<Vec<Mark>> {
    vec![vec![Mark::Empty; size]; size]
}

/// A mark written into the board for the lifetime of the guard.
///
/// The cell gets its previous value back on drop, so every exit path of the
/// code holding the guard undoes the move.
pub(crate) struct PlacedMark<'a> {
    board: &'a mut [Vec<Mark>],
    row: usize,
    column: usize,
    previous: Mark,
}

impl<'a> PlacedMark<'a> {
    pub(crate) fn place(board: &'a mut [Vec<Mark>], at: Move, mark: Mark) -> Self {
        let previous = board[at.row][at.column];
        board[at.row][at.column] = mark;
        Self {
            board,
            row: at.row,
            column: at.column,
            previous,
        }
    }

    pub(crate) fn board_mut(&mut self) -> &mut [Vec<Mark>] {
        &mut *self.board
    }
}

impl Drop for PlacedMark<'_> {
    fn drop(&mut self) {
        self.board[self.row][self.column] = self.previous;
    }
}
