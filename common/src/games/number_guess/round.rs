use std::fmt;

use crate::games::SessionRng;
use super::difficulty::Difficulty;
use super::score::calculate_score;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TooLow,
    TooHigh,
}

/// Distance to the secret compared with the previous miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    None,
    Warmer,
    Colder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct { attempts: u32, score: u32 },
    Miss { direction: Direction, trend: Trend },
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessOutcome::Correct { attempts, .. } => {
                write!(f, "Correct! You got it in {} attempt(s).", attempts)
            }
            GuessOutcome::Miss { direction, trend } => {
                match trend {
                    Trend::Warmer => write!(f, "Warmer! ")?,
                    Trend::Colder => write!(f, "Colder! ")?,
                    Trend::None => {}
                }
                match direction {
                    Direction::TooLow => write!(f, "Too low. Try higher."),
                    Direction::TooHigh => write!(f, "Too high. Try lower."),
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    OutOfRange { lower: i64, upper: i64 },
    RoundOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessError::OutOfRange { lower, upper } => write!(
                f,
                "Out of range. Please enter a number between {} and {}.",
                lower, upper
            ),
            GuessError::RoundOver => write!(f, "This round is already solved"),
        }
    }
}

impl std::error::Error for GuessError {}

#[derive(Debug, Clone)]
pub struct GuessRound {
    difficulty: Difficulty,
    secret: i64,
    attempts: u32,
    previous_distance: Option<u64>,
    solved: bool,
}

impl GuessRound {
    pub fn new(difficulty: Difficulty, rng: &mut SessionRng) -> Self {
        let (lower, upper) = difficulty.range();
        let secret = rng.random_range(lower..=upper);
        Self::from_parts(difficulty, secret)
    }

    pub fn with_secret(difficulty: Difficulty, secret: i64) -> Result<Self, GuessError> {
        let (lower, upper) = difficulty.range();
        if !(lower..=upper).contains(&secret) {
            return Err(GuessError::OutOfRange { lower, upper });
        }
        Ok(Self::from_parts(difficulty, secret))
    }

    fn from_parts(difficulty: Difficulty, secret: i64) -> Self {
        Self {
            difficulty,
            secret,
            attempts: 0,
            previous_distance: None,
            solved: false,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn range(&self) -> (i64, i64) {
        self.difficulty.range()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Out-of-range guesses are rejected without counting as an attempt.
    pub fn guess(&mut self, value: i64) -> Result<GuessOutcome, GuessError> {
        if self.solved {
            return Err(GuessError::RoundOver);
        }

        let (lower, upper) = self.range();
        if !(lower..=upper).contains(&value) {
            return Err(GuessError::OutOfRange { lower, upper });
        }

        self.attempts += 1;

        if value == self.secret {
            self.solved = true;
            return Ok(GuessOutcome::Correct {
                attempts: self.attempts,
                score: calculate_score(self.attempts, self.difficulty.range_size()),
            });
        }

        let distance = value.abs_diff(self.secret);
        let trend = match self.previous_distance {
            Some(previous) if distance < previous => Trend::Warmer,
            Some(previous) if distance > previous => Trend::Colder,
            _ => Trend::None,
        };
        self.previous_distance = Some(distance);

        let direction = if value < self.secret {
            Direction::TooLow
        } else {
            Direction::TooHigh
        };

        Ok(GuessOutcome::Miss { direction, trend })
    }
}
