mod difficulty;
mod round;
mod score;

pub use difficulty::Difficulty;
pub use round::{Direction, GuessError, GuessOutcome, GuessRound, Trend};
pub use score::{BestScore, calculate_score};
