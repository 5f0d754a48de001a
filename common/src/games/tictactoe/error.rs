use super::types::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    OutOfBounds { row: usize, col: usize },
    WrongTurn { expected: Cell, found: Cell },
    CellOccupied { row: usize, col: usize },
    InvalidStartingPlayer,
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Move ({}, {}) is out of bounds", row, col)
            }
            BoardError::WrongTurn { expected, found } => {
                write!(f, "It is not {}'s turn, {} is to move", found.symbol(), expected.symbol())
            }
            BoardError::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is already occupied", row, col)
            }
            BoardError::InvalidStartingPlayer => write!(f, "Starting player must be X or O"),
        }
    }
}

impl std::error::Error for BoardError {}
