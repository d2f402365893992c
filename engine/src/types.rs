use std::fmt;

use serde::{Deserialize, Serialize};

/// Cell contents. `X` and `O` double as the two competing sides; which party
/// owns a side is tracked separately by the game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Mark::Empty => ".",
            Mark::X => "X",
            Mark::O => "O",
        };
        write!(f, "{symbol}")
    }
}

/// Classic: each mover places their own fixed mark and the bot searches
/// exhaustively. Random: every move places a uniformly random mark and the
/// bot picks random cells; sides are assigned to parties once per game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Classic,
    Random,
}

/// Who moves: the human or the automated opponent. The human always moves
/// first. In random mode the mover still alternates even though the mark
/// placed is independent of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Party {
    Human,
    Bot,
}

impl Party {
    pub fn other(self) -> Party {
        match self {
            Party::Human => Party::Bot,
            Party::Bot => Party::Human,
        }
    }
}

/// Terminal classification of a board, recomputed after every single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

/// Party-level result, resolved from the winning side through the game's
/// side assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameWinner {
    Human,
    Bot,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}
