use super::types::{BOARD_SIZE, Cell, Position, WinningLine};

pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

const fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Rows, then columns, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

fn at(grid: &Grid, position: Position) -> Cell {
    grid[position.row][position.col]
}

pub fn find_winning_line(grid: &Grid) -> Option<WinningLine> {
    LINES.iter().find_map(|line| {
        let mark = at(grid, line[0]);
        if mark != Cell::Empty && line.iter().all(|&pos| at(grid, pos) == mark) {
            Some(WinningLine { mark, cells: *line })
        } else {
            None
        }
    })
}

pub fn check_win(grid: &Grid) -> Option<Cell> {
    find_winning_line(grid).map(|line| line.mark)
}

/// True if placing `mark` on the empty `position` completes a line for `mark`.
pub fn would_win(grid: &Grid, position: Position, mark: Cell) -> bool {
    if mark == Cell::Empty || !position.is_on_board() || at(grid, position) != Cell::Empty {
        return false;
    }

    LINES
        .iter()
        .filter(|line| line.contains(&position))
        .any(|line| {
            line.iter()
                .all(|&pos| pos == position || at(grid, pos) == mark)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Cell::{Empty as E, O, X};

    #[test]
    fn test_no_winner_on_empty_grid() {
        assert_eq!(check_win(&[[E; 3]; 3]), None);
    }

    #[test]
    fn test_column_win() {
        let grid = [[E, O, X], [E, O, X], [X, O, E]];
        let line = find_winning_line(&grid).unwrap();
        assert_eq!(line.mark, O);
        assert_eq!(line.cells, [p(0, 1), p(1, 1), p(2, 1)]);
    }

    #[test]
    fn test_anti_diagonal_win() {
        let grid = [[O, O, X], [E, X, E], [X, E, O]];
        assert_eq!(check_win(&grid), Some(X));
    }

    #[test]
    fn test_would_win_detects_gap_in_line() {
        let grid = [[X, E, X], [O, O, E], [E, E, E]];
        assert!(would_win(&grid, p(0, 1), X));
        assert!(would_win(&grid, p(1, 2), O));
        assert!(!would_win(&grid, p(1, 2), X));
        assert!(!would_win(&grid, p(2, 2), X));
    }

    #[test]
    fn test_would_win_rejects_occupied_cell() {
        let grid = [[X, X, O], [E, E, E], [E, E, E]];
        assert!(!would_win(&grid, p(0, 2), X));
    }
}
