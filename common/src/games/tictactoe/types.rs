use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn opponent(&self) -> Option<Cell> {
        match self {
            Cell::X => Some(Cell::O),
            Cell::O => Some(Cell::X),
            Cell::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::X => 'X',
            Cell::O => 'O',
            Cell::Empty => ' ',
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parses a player mark. `Empty` is never produced.
impl FromStr for Cell {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Cell::X),
            "o" | "O" => Ok(Cell::O),
            other => Err(format!("Invalid mark '{}', expected X or O", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Cell> {
        match self {
            GameStatus::XWon => Some(Cell::X),
            GameStatus::OWon => Some(Cell::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    pub(crate) fn won_by(mark: Cell) -> Option<GameStatus> {
        match mark {
            Cell::X => Some(GameStatus::XWon),
            Cell::O => Some(GameStatus::OWon),
            Cell::Empty => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: Cell,
}

impl Move {
    pub fn new(row: usize, col: usize, player: Cell) -> Self {
        Self { row, col, player }
    }

    pub fn at(position: Position, player: Cell) -> Self {
        Self::new(position.row, position.col, player)
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ({}, {})", self.player, self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Cell,
    pub cells: [Position; 3],
}

impl WinningLine {
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Cell::X.opponent(), Some(Cell::O));
        assert_eq!(Cell::O.opponent(), Some(Cell::X));
        assert_eq!(Cell::Empty.opponent(), None);
    }

    #[test]
    fn test_parse_mark() {
        assert_eq!("x".parse::<Cell>(), Ok(Cell::X));
        assert_eq!(" O ".parse::<Cell>(), Ok(Cell::O));
        assert!("".parse::<Cell>().is_err());
        assert!("empty".parse::<Cell>().is_err());
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::XWon.winner(), Some(Cell::X));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert!(GameStatus::Draw.is_over());
        assert!(!GameStatus::InProgress.is_over());
    }
}
