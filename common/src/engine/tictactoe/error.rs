#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The grid is not square. `columns` is the length of the first row that
    /// differs from the row count.
    InvalidBoardShape { rows: usize, columns: usize },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidBoardShape { rows, columns } => {
                write!(f, "The board dimensions must be equal: {} rows, {} columns", rows, columns)
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    EmptyInput,
    InvalidSymbol { row: usize, column: usize, symbol: char },
}

impl std::fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseBoardError::EmptyInput => write!(f, "Empty board text"),
            ParseBoardError::InvalidSymbol { row, column, symbol } => write!(
                f,
                "Invalid symbol '{}' at row {}, column {} (expected x, o or _)",
                symbol, row, column
            ),
        }
    }
}

impl std::error::Error for ParseBoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_shape_display() {
        let err = BoardError::InvalidBoardShape { rows: 2, columns: 3 };
        assert_eq!(
            err.to_string(),
            "The board dimensions must be equal: 2 rows, 3 columns"
        );
    }

    #[test]
    fn test_invalid_symbol_display() {
        let err = ParseBoardError::InvalidSymbol { row: 1, column: 0, symbol: 'z' };
        assert_eq!(
            err.to_string(),
            "Invalid symbol 'z' at row 1, column 0 (expected x, o or _)"
        );
    }
}
