use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::game::{Board, BotType, Mark, count_marks, winner};

const CONFIG_FILE_NAME: &str = "tictactoe_solver_config.yaml";

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Print the optimal move for the starting board.
    Solve,
    /// Play the game out from the starting board.
    Play,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub starting_board: Board,
    pub mode: RunMode,
    /// Who plays O in `play` mode. X is always the minimax bot.
    pub opponent: BotType,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        let counts = count_marks(&self.starting_board);
        if counts.x != counts.o && counts.x != counts.o + 1 {
            return Err(format!(
                "starting_board is unreachable: {} X marks and {} O marks (X moves first and turns alternate)",
                counts.x, counts.o
            ));
        }
        if counts.x == counts.o && winner(&self.starting_board) == Some(Mark::X) {
            return Err("starting_board is unreachable: X has won but O has moved since".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_board: Board::from_rows([
                [Mark::Empty, Mark::Empty, Mark::Empty],
                [Mark::X, Mark::Empty, Mark::Empty],
                [Mark::Empty, Mark::Empty, Mark::Empty],
            ]),
            mode: RunMode::Solve,
            opponent: BotType::Minimax,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_solver_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.starting_board.to_string(), "...\nX..\n...");
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
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            starting_board: "XO./.X./O..".parse().unwrap(),
            mode: RunMode::Play,
            opponent: BotType::Random,
            seed: Some(99),
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));
        manager.set_config(&config).unwrap();

        let reloaded = get_config_manager(Some(file_path.clone()));
        assert_eq!(reloaded.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_hand_written_yaml_is_accepted() {
        let yaml = "starting_board:\n  - X.O\n  - .X.\n  - O..\nmode: play\nopponent: random\n";
        let config: Config = YamlConfigSerializer::new().deserialize(yaml).unwrap();
        assert_eq!(config.mode, RunMode::Play);
        assert_eq!(config.opponent, BotType::Random);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_unbalanced_board_is_rejected() {
        let config = Config {
            starting_board: "XX./.../...".parse().unwrap(),
            ..Config::default()
        };
        assert!(config.validate().unwrap_err().contains("unreachable"));

        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content("starting_board:\n  - OO.\n  - '...'\n  - '...'\nmode: solve\nopponent: minimax\n")
            .unwrap();
        let err = get_config_manager(Some(file_path.clone())).get_config().unwrap_err();
        assert!(err.starts_with("Config validation error"));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_x_win_with_equal_counts_is_rejected() {
        let config = Config {
            starting_board: "XXX/OO./..O".parse().unwrap(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
