use super::board::Board;
use super::types::{Cell, GameStatus, Move};

const WIN_SCORE: i32 = 10;

/// Exhaustive minimax for the side to move. No depth limit and no pruning:
/// a 3x3 game is at most nine plies deep.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxSolver;

impl MinimaxSolver {
    pub fn new() -> Self {
        Self
    }

    /// Optimal move for `board.current_player()`, or `None` on a finished board.
    /// Among equally scored moves the first in row-major order wins.
    pub fn best_move(&self, board: &Board) -> Option<Move> {
        let mut best: Option<(Move, i32)> = None;

        for (mv, score) in self.score_moves(board) {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        best.map(|(mv, _)| mv)
    }

    /// Minimax value of every legal move, in row-major order.
    pub fn score_moves(&self, board: &Board) -> Vec<(Move, i32)> {
        if board.status().is_over() {
            return Vec::new();
        }

        let bot_mark = board.current_player();
        board
            .empty_cells()
            .filter_map(|pos| {
                let mv = Move::at(pos, bot_mark);
                let child = board.apply(mv).ok()?;
                Some((mv, minimax(&child, 0, bot_mark)))
            })
            .collect()
    }
}

fn minimax(board: &Board, depth: i32, bot_mark: Cell) -> i32 {
    match board.status() {
        GameStatus::Draw => return 0,
        GameStatus::InProgress => {}
        status => {
            return if status.winner() == Some(bot_mark) {
                WIN_SCORE - depth
            } else {
                depth - WIN_SCORE
            };
        }
    }

    let mover = board.current_player();
    let child_scores = board.empty_cells().filter_map(|pos| {
        board
            .apply(Move::at(pos, mover))
            .ok()
            .map(|child| minimax(&child, depth + 1, bot_mark))
    });

    let best = if mover == bot_mark {
        child_scores.max()
    } else {
        child_scores.min()
    };

    best.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Cell::{Empty as E, O, X};

    #[test]
    fn test_first_move_on_empty_board_is_top_left_corner() {
        let solver = MinimaxSolver::new();
        let mv = solver.best_move(&Board::default()).unwrap();
        assert_eq!(mv, Move::new(0, 0, X));
    }

    #[test]
    fn test_every_opening_move_is_a_draw() {
        let scores = MinimaxSolver::new().score_moves(&Board::default());
        assert_eq!(scores.len(), 9);
        assert!(scores.iter().all(|(_, score)| *score == 0));
    }

    #[test]
    fn test_self_play_ends_in_draw() {
        let solver = MinimaxSolver::new();
        let mut board = Board::default();
        while !board.status().is_over() {
            let mv = solver.best_move(&board).unwrap();
            board = board.apply(mv).unwrap();
        }
        assert_eq!(board.status(), GameStatus::Draw);
    }

    #[test]
    fn test_self_play_with_o_starting_ends_in_draw() {
        let solver = MinimaxSolver::new();
        let mut board = Board::new(O).unwrap();
        while !board.status().is_over() {
            board = board.apply(solver.best_move(&board).unwrap()).unwrap();
        }
        assert_eq!(board.status(), GameStatus::Draw);
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = Board::from_grid([[X, X, E], [O, O, E], [E, E, E]], X).unwrap();
        let solver = MinimaxSolver::new();
        assert_eq!(solver.best_move(&board), Some(Move::new(0, 2, X)));

        let scores = solver.score_moves(&board);
        assert_eq!(scores[0], (Move::new(0, 2, X), WIN_SCORE));
    }

    #[test]
    fn test_blocks_opponent_threat() {
        let board = Board::from_grid([[X, X, E], [E, O, E], [E, E, E]], O).unwrap();
        let mv = MinimaxSolver::new().best_move(&board).unwrap();
        assert_eq!(mv, Move::new(0, 2, O));
    }

    #[test]
    fn test_prefers_faster_win() {
        // X can finish the diagonal now; any slower win scores lower.
        let board = Board::from_grid([[X, E, E], [O, X, E], [O, E, E]], X).unwrap();
        let scores = MinimaxSolver::new().score_moves(&board);
        let (best, best_score) = scores.iter().max_by_key(|(_, s)| *s).copied().unwrap();
        assert_eq!(best, Move::new(2, 2, X));
        assert_eq!(best_score, WIN_SCORE);
        assert_eq!(MinimaxSolver::new().best_move(&board), Some(best));
    }

    #[test]
    fn test_delays_unavoidable_loss() {
        // O faces two X threats; whatever O does, X wins next ply.
        let board = Board::from_grid([[X, E, X], [E, O, E], [X, E, O]], O).unwrap();
        let scores = MinimaxSolver::new().score_moves(&board);
        assert!(scores.iter().all(|(_, s)| *s == 1 - WIN_SCORE));
    }

    #[test]
    fn test_is_deterministic() {
        let board = Board::from_grid([[E, E, E], [E, X, E], [E, E, E]], O).unwrap();
        let solver = MinimaxSolver::new();
        let first = solver.best_move(&board);
        for _ in 0..3 {
            assert_eq!(solver.best_move(&board), first);
        }
        assert_eq!(first, Some(Move::new(0, 0, O)));
    }

    #[test]
    fn test_finished_board_has_no_move() {
        let full = Board::from_grid([[X, O, X], [X, O, O], [O, X, X]], O).unwrap();
        assert_eq!(MinimaxSolver::new().best_move(&full), None);

        let won = Board::from_grid([[X, X, X], [O, O, E], [E, E, E]], O).unwrap();
        assert_eq!(MinimaxSolver::new().best_move(&won), None);
        assert!(MinimaxSolver::new().score_moves(&won).is_empty());
    }

    #[test]
    fn test_search_does_not_touch_input() {
        let board = Board::from_grid([[X, E, E], [E, O, E], [E, E, E]], X).unwrap();
        let before = board;
        let _ = MinimaxSolver::new().best_move(&board);
        assert_eq!(board, before);
    }
}
