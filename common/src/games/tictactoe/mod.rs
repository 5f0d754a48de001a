mod board;
mod bot_controller;
mod error;
mod heuristic;
mod history;
mod scoreboard;
mod solver;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotStrategy, BotType, RandomBot, calculate_move, create_bot};
pub use error::BoardError;
pub use heuristic::HeuristicBot;
pub use history::GameHistory;
pub use scoreboard::Scoreboard;
pub use solver::MinimaxSolver;
pub use types::{BOARD_SIZE, Cell, GameStatus, Move, Position, WinningLine};
pub use win_detector::{Grid, LINES, check_win, find_winning_line, would_win};
