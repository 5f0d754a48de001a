use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::debug_log;
use crate::games::SessionRng;
use super::board::Board;
use super::heuristic::HeuristicBot;
use super::solver::MinimaxSolver;
use super::types::Move;

/// Picks a legal move for the side to move. Returns `None` on a finished board.
pub trait BotStrategy {
    fn choose_move(&mut self, board: &Board) -> Option<Move>;
}

impl BotStrategy for MinimaxSolver {
    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        self.best_move(board)
    }
}

impl BotStrategy for HeuristicBot {
    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        HeuristicBot::choose_move(self, board)
    }
}

pub struct RandomBot<'a> {
    rng: &'a mut SessionRng,
}

impl<'a> RandomBot<'a> {
    pub fn new(rng: &'a mut SessionRng) -> Self {
        Self { rng }
    }
}

impl BotStrategy for RandomBot<'_> {
    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        if board.status().is_over() {
            return None;
        }
        let count = board.empty_cells().count();
        let idx = self.rng.random_range(0..count);
        board
            .empty_cells()
            .nth(idx)
            .map(|pos| Move::at(pos, board.current_player()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotType {
    Random,
    Heuristic,
    #[default]
    Minimax,
}

impl fmt::Display for BotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BotType::Random => "random",
            BotType::Heuristic => "heuristic",
            BotType::Minimax => "minimax",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for BotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(BotType::Random),
            "heuristic" => Ok(BotType::Heuristic),
            "minimax" => Ok(BotType::Minimax),
            other => Err(format!(
                "Unknown bot type '{}', expected random, heuristic or minimax",
                other
            )),
        }
    }
}

pub fn create_bot(bot_type: BotType, rng: &mut SessionRng) -> Box<dyn BotStrategy + '_> {
    match bot_type {
        BotType::Random => Box::new(RandomBot::new(rng)),
        BotType::Heuristic => Box::new(HeuristicBot::new()),
        BotType::Minimax => Box::new(MinimaxSolver::new()),
    }
}

pub fn calculate_move(bot_type: BotType, board: &Board, rng: &mut SessionRng) -> Option<Move> {
    let chosen = create_bot(bot_type, rng).choose_move(board);

    match chosen {
        Some(mv) => debug_log!("{} bot plays {}", bot_type, mv),
        None => debug_log!("{} bot has no move, status {:?}", bot_type, board.status()),
    }

    chosen
}
