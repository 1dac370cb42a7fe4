use super::error::ParseBoardError;
use super::types::{Board, Mark};

/// Parses a board written as rows of `x`, `o` and `_`, separated by `/` or
/// newlines. Whitespace inside a row is ignored. The result is not checked for
/// squareness; the engine does that when the board is used.
pub fn parse_board(text: &str) -> Result<Board, ParseBoardError> {
    let mut board = Vec::new();

    for (row, line) in text
        .split(['/', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
    {
        let cells = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(column, symbol)| {
                Mark::from_symbol(symbol).ok_or(ParseBoardError::InvalidSymbol {
                    row,
                    column,
                    symbol,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        board.push(cells);
    }

    if board.is_empty() {
        return Err(ParseBoardError::EmptyInput);
    }
    Ok(board)
}

/// One line of symbols per row.
pub fn format_board(board: &[Vec<Mark>]) -> String {
    board
        .iter()
        .map(|row| row.iter().map(|mark| mark.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
