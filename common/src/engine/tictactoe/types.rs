use std::fmt;

/// Value of a searched or terminal position, from the Player's point of view.
pub type Score = i32;

/// Player has completed a line. `-INFINITY` means the Opponent has.
///
/// This is a flag value: compare it by equality, never do arithmetic with it.
pub const INFINITY: Score = Score::MAX;

pub type Board = Vec<Vec<Mark>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    Player,
    Opponent,
}

impl Mark {
    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '_',
            Mark::Player => 'x',
            Mark::Opponent => 'o',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol {
            '_' => Some(Mark::Empty),
            'x' | 'X' => Some(Mark::Player),
            'o' | 'O' => Some(Mark::Opponent),
            _ => None,
        }
    }

    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::Player => Some(Mark::Opponent),
            Mark::Opponent => Some(Mark::Player),
            Mark::Empty => None,
        }
    }

    /// Mark placed by the side to move at a maximizing or minimizing ply.
    pub fn for_turn(is_maximizing: bool) -> Mark {
        if is_maximizing {
            Mark::Player
        } else {
            Mark::Opponent
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub column: usize,
}

impl Move {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Outcome of a position once the search reaches it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    OpponentWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::InProgress => "in progress",
            GameStatus::PlayerWon => "x wins",
            GameStatus::OpponentWon => "o wins",
            GameStatus::Draw => "draw",
        };
        write!(f, "{}", text)
    }
}
