use std::fmt;

use super::error::BoardError;
use super::types::{BOARD_SIZE, Cell, GameStatus, Move, Position, WinningLine};
use super::win_detector::{Grid, find_winning_line};

/// Immutable 3x3 position plus the mark to move. Applying a move yields a new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Grid,
    current_player: Cell,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            current_player: Cell::X,
        }
    }
}

impl Board {
    pub fn new(starting_player: Cell) -> Result<Self, BoardError> {
        if starting_player == Cell::Empty {
            return Err(BoardError::InvalidStartingPlayer);
        }
        Ok(Self {
            current_player: starting_player,
            ..Self::default()
        })
    }

    /// Builds a board from raw cell contents, e.g. a puzzle position.
    /// The move history is not checked, only that someone is to move.
    pub fn from_grid(cells: Grid, current_player: Cell) -> Result<Self, BoardError> {
        if current_player == Cell::Empty {
            return Err(BoardError::InvalidStartingPlayer);
        }
        Ok(Self {
            cells,
            current_player,
        })
    }

    pub fn current_player(&self) -> Cell {
        self.current_player
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn grid(&self) -> &Grid {
        &self.cells
    }

    pub fn apply(&self, mv: Move) -> Result<Board, BoardError> {
        if !mv.position().is_on_board() {
            return Err(BoardError::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }

        if mv.player != self.current_player {
            return Err(BoardError::WrongTurn {
                expected: self.current_player,
                found: mv.player,
            });
        }

        if self.cells[mv.row][mv.col] != Cell::Empty {
            return Err(BoardError::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = *self;
        next.cells[mv.row][mv.col] = mv.player;
        next.current_player = mv.player.opponent().ok_or(BoardError::InvalidStartingPlayer)?;
        Ok(next)
    }

    /// Derived from the cells on every call; a completed line wins even on a full board.
    pub fn status(&self) -> GameStatus {
        if let Some(status) = self.winning_line().and_then(|line| GameStatus::won_by(line.mark)) {
            return status;
        }

        if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        find_winning_line(&self.cells)
    }

    /// Unoccupied cells in row-major order. Strategies rely on this order for tie-breaks.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + Clone + '_ {
        (0..BOARD_SIZE * BOARD_SIZE)
            .map(|index| Position::new(index / BOARD_SIZE, index % BOARD_SIZE))
            .filter(move |pos| self.cells[pos.row][pos.col] == Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| *cell != Cell::Empty)
    }

    pub fn move_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| **cell != Cell::Empty).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f, "-+-+-")?;
            }
            writeln!(f, "{}|{}|{}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
