use super::board::Board;
use super::types::{Move, Position};
use super::win_detector::would_win;

const CENTER: Position = Position::new(1, 1);
const CORNERS: [Position; 4] = [
    Position::new(0, 0),
    Position::new(0, 2),
    Position::new(2, 0),
    Position::new(2, 2),
];
const EDGES: [Position; 4] = [
    Position::new(0, 1),
    Position::new(1, 0),
    Position::new(1, 2),
    Position::new(2, 1),
];

/// One-ply bot: win, block, then center, corners, edges.
/// Cheap and predictable, but a forking opponent can beat it.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicBot;

impl HeuristicBot {
    pub fn new() -> Self {
        Self
    }

    pub fn choose_move(&self, board: &Board) -> Option<Move> {
        if board.status().is_over() {
            return None;
        }

        let bot_mark = board.current_player();
        let opponent_mark = bot_mark.opponent()?;
        let grid = board.grid();

        let target = board
            .empty_cells()
            .find(|&pos| would_win(grid, pos, bot_mark))
            .or_else(|| {
                board
                    .empty_cells()
                    .find(|&pos| would_win(grid, pos, opponent_mark))
            })
            .or_else(|| preferred_cell(board))
            .or_else(|| board.empty_cells().next())?;

        Some(Move::at(target, bot_mark))
    }
}

fn preferred_cell(board: &Board) -> Option<Position> {
    let is_free = |pos: &Position| board.get(pos.row, pos.col).is_some_and(|c| c.is_empty());

    Some(CENTER)
        .filter(is_free)
        .or_else(|| CORNERS.into_iter().find(is_free))
        .or_else(|| EDGES.into_iter().find(is_free))
}
