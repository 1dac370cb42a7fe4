use std::fmt;

use super::types::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Cell at `offset` along the line, as (row, column).
    fn cell(&self, size: usize, offset: usize) -> (usize, usize) {
        match *self {
            Line::Row(row) => (row, offset),
            Line::Column(column) => (offset, column),
            Line::MainDiagonal => (offset, offset),
            Line::AntiDiagonal => (offset, size - offset - 1),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Row(row) => write!(f, "row {}", row),
            Line::Column(column) => write!(f, "column {}", column),
            Line::MainDiagonal => write!(f, "main diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Lazy view over the `size` cells of one line. A clone continues from the
/// same offset independently of the original.
#[derive(Clone)]
pub struct LineCells<'a> {
    board: &'a [Vec<Mark>],
    line: Line,
    size: usize,
    offset: usize,
}

impl<'a> LineCells<'a> {
    pub fn new(board: &'a [Vec<Mark>], size: usize, line: Line) -> Self {
        Self {
            board,
            line,
            size,
            offset: 0,
        }
    }
}

impl Iterator for LineCells<'_> {
    type Item = Mark;

    fn next(&mut self) -> Option<Mark> {
        if self.offset >= self.size {
            return None;
        }
        let (row, column) = self.line.cell(self.size, self.offset);
        self.offset += 1;
        Some(self.board[row][column])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size - self.offset;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineCells<'_> {}

pub fn row(board: &[Vec<Mark>], size: usize, index: usize) -> LineCells<'_> {
    LineCells::new(board, size, Line::Row(index))
}

pub fn column(board: &[Vec<Mark>], size: usize, index: usize) -> LineCells<'_> {
    LineCells::new(board, size, Line::Column(index))
}

pub fn main_diagonal(board: &[Vec<Mark>], size: usize) -> LineCells<'_> {
    LineCells::new(board, size, Line::MainDiagonal)
}

pub fn anti_diagonal(board: &[Vec<Mark>], size: usize) -> LineCells<'_> {
    LineCells::new(board, size, Line::AntiDiagonal)
}

/// Every line of a board in evaluation order: row and column of each index
/// interleaved, then the two diagonals.
pub fn scan_order(size: usize) -> impl Iterator<Item = Line> {
    (0..size)
        .flat_map(|i| [Line::Row(i), Line::Column(i)])
        .chain([Line::MainDiagonal, Line::AntiDiagonal])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tictactoe::notation::parse_board;

    fn symbols(cells: LineCells<'_>) -> String {
        cells.map(|mark| mark.symbol()).collect()
    }

    #[test]
    fn test_row_and_column_slices() {
        let board = parse_board("xo_/_x_/o_x").unwrap();
        assert_eq!(symbols(row(&board, 3, 0)), "xo_");
        assert_eq!(symbols(row(&board, 3, 2)), "o_x");
        assert_eq!(symbols(column(&board, 3, 0)), "x_o");
        assert_eq!(symbols(column(&board, 3, 1)), "ox_");
    }

    #[test]
    fn test_diagonal_slices() {
        let board = parse_board("xo_/_x_/o_x").unwrap();
        assert_eq!(symbols(main_diagonal(&board, 3)), "xxx");
        assert_eq!(symbols(anti_diagonal(&board, 3)), "_xo");
    }

    #[test]
    fn test_line_cells_are_restartable() {
        let board = parse_board("xo_/_x_/o_x").unwrap();
        let line = column(&board, 3, 2);
        assert_eq!(line.len(), 3);
        assert_eq!(symbols(line.clone()), symbols(line));
    }

    #[test]
    fn test_scan_order_interleaves_rows_and_columns() {
        let order: Vec<Line> = scan_order(2).collect();
        assert_eq!(
            order,
            vec![
                Line::Row(0),
                Line::Column(0),
                Line::Row(1),
                Line::Column(1),
                Line::MainDiagonal,
                Line::AntiDiagonal,
            ]
        );
    }
}
