use serde::{Deserialize, Serialize};

use super::types::GameStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. `InProgress` is ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.x_wins += 1,
            GameStatus::OWon => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {} | O: {} | Draws: {}", self.x_wins, self.o_wins, self.draws)
    }
}
