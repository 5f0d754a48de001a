use mini_games_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use mini_games_common::games::number_guess::Difficulty;
use mini_games_common::games::tictactoe::{BotType, Cell};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_FILE: &str = "mini_games_config.yaml";

pub fn get_config_manager(
    file_path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartingPlayer {
    #[default]
    Human,
    Bot,
}

impl fmt::Display for StartingPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartingPlayer::Human => write!(f, "human"),
            StartingPlayer::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for StartingPlayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(StartingPlayer::Human),
            "bot" => Ok(StartingPlayer::Bot),
            other => Err(format!("Invalid starting player '{}', use human or bot", other)),
        }
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub tictactoe: TicTacToeConfig,
    pub guess: GuessConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TicTacToeConfig {
    pub bot: BotType,
    pub human_mark: Cell,
    pub start: StartingPlayer,
    pub seed: Option<u64>,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            bot: BotType::Minimax,
            human_mark: Cell::X,
            start: StartingPlayer::Human,
            seed: None,
        }
    }
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Cell::Empty {
            return Err("human_mark must be X or O".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GuessConfig {
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mini_games_common::config::{ConfigContentProvider, ConfigError, ConfigSerializer};

    fn get_temp_file_path() -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_mini_games_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_by_manager() {
        let file_path = get_temp_file_path();
        let config = Config {
            tictactoe: TicTacToeConfig {
                bot: BotType::Heuristic,
                human_mark: Cell::O,
                start: StartingPlayer::Bot,
                seed: Some(5),
            },
            guess: GuessConfig {
                difficulty: Difficulty::Hard,
                seed: None,
            },
        };

        get_config_manager(&file_path).set_config(&config).unwrap();
        let loaded = get_config_manager(&file_path).get_config().unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_missing_file_gives_default() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(&file_path);
        assert!(provider.get_config_content().unwrap().is_none());
        assert_eq!(get_config_manager(&file_path).get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer
            .deserialize("tictactoe:\n  bot: random\n")
            .unwrap();
        assert_eq!(config.tictactoe.bot, BotType::Random);
        assert_eq!(config.tictactoe.human_mark, Cell::X);
        assert_eq!(config.guess, GuessConfig::default());
    }

    #[test]
    fn test_empty_human_mark_fails_validation() {
        let file_path = get_temp_file_path();
        std::fs::write(&file_path, "tictactoe:\n  human_mark: Empty\n").unwrap();

        let result = get_config_manager(&file_path).get_config();
        assert!(matches!(result, Err(ConfigError::Validation(_))));

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_starting_player_parse() {
        assert_eq!("Bot".parse::<StartingPlayer>(), Ok(StartingPlayer::Bot));
        assert!("nobody".parse::<StartingPlayer>().is_err());
    }
}
