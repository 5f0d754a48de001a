use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Inclusive bounds of the secret number.
    pub fn range(&self) -> (i64, i64) {
        match self {
            Difficulty::Easy => (1, 50),
            Difficulty::Normal => (1, 100),
            Difficulty::Hard => (1, 500),
        }
    }

    pub fn range_size(&self) -> u32 {
        let (lower, upper) = self.range();
        (upper - lower + 1) as u32
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "Unknown difficulty '{}', expected easy, normal or hard",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert_eq!(Difficulty::Easy.range(), (1, 50));
        assert_eq!(Difficulty::Normal.range_size(), 100);
        assert_eq!(Difficulty::Hard.range_size(), 500);
    }

    #[test]
    fn test_parse() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("insane".parse::<Difficulty>().is_err());
    }
}
