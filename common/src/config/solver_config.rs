use serde::{Deserialize, Serialize};

use crate::engine::tictactoe::{available_moves, Mark, OpponentKind};
use super::Validate;

/// Largest board `play` accepts. Anything bigger cannot be searched
/// exhaustively anyway.
pub const MAX_BOARD_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub board_size: usize,
    pub opponent: OpponentKind,
    pub seed: Option<u64>,
    /// Exhaustive search is refused on boards with more empty cells.
    pub max_search_cells: usize,
    pub verbose: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            opponent: OpponentKind::Minimax,
            seed: None,
            max_search_cells: 9,
            verbose: false,
        }
    }
}

impl Validate for SolverConfig {
    fn validate(&self) -> Result<(), String> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "Board size must be between 1 and {}",
                MAX_BOARD_SIZE
            ));
        }
        if self.max_search_cells == 0 {
            return Err("Max search cells must be at least 1".to_string());
        }
        Ok(())
    }
}

impl SolverConfig {
    pub fn check_search_budget(&self, board: &[Vec<Mark>]) -> Result<(), String> {
        let empty_cells = available_moves(board).len();
        if empty_cells > self.max_search_cells {
            return Err(format!(
                "Board has {} empty cells, exhaustive search is limited to {} (max_search_cells)",
                empty_cells, self.max_search_cells
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigContentProvider, ConfigManager, ConfigSerializer, FileContentConfigProvider,
        InMemoryConfigProvider, YamlConfigSerializer,
    };
    use crate::engine::tictactoe::{empty_board, parse_board};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_minimax_solver_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SolverConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_survives_yaml() {
        let config = SolverConfig::default();
        let serializer = YamlConfigSerializer;
        let text = serializer.serialize(&config).unwrap();
        let parsed: SolverConfig = serializer.deserialize(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let provider = InMemoryConfigProvider::with_content("opponent: Random\nseed: 17\n");
        let manager: ConfigManager<SolverConfig, _, _> =
            ConfigManager::new(provider, YamlConfigSerializer);
        let config = manager.get_config().unwrap();
        assert_eq!(config.opponent, OpponentKind::Random);
        assert_eq!(config.seed, Some(17));
        assert_eq!(config.board_size, 3);
        assert_eq!(config.max_search_cells, 9);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let provider = InMemoryConfigProvider::with_content("win_count: 3\n");
        let manager: ConfigManager<SolverConfig, _, _> =
            ConfigManager::new(provider, YamlConfigSerializer);
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_out_of_range_board_size_fails_validation() {
        let provider = InMemoryConfigProvider::with_content("board_size: 9\n");
        let manager: ConfigManager<SolverConfig, _, _> =
            ConfigManager::new(provider, YamlConfigSerializer);
        let err = manager.get_config().unwrap_err();
        assert!(err.starts_with("Config validation error"), "{}", err);
    }

    #[test]
    fn test_missing_file_returns_default_config() {
        let manager: ConfigManager<SolverConfig> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), SolverConfig::default());
    }

    #[test]
    fn test_config_saved_to_file_is_loaded_back() {
        let file_path = get_temp_file_path();
        let config = SolverConfig {
            board_size: 4,
            opponent: OpponentKind::Random,
            seed: Some(3),
            max_search_cells: 12,
            verbose: true,
        };

        let writer: ConfigManager<SolverConfig> = ConfigManager::from_yaml_file(&file_path);
        writer.set_config(&config).unwrap();

        let provider = FileContentConfigProvider::new(&file_path);
        assert!(provider.get_config_content().unwrap().is_some());

        let reader: ConfigManager<SolverConfig> = ConfigManager::from_yaml_file(&file_path);
        assert_eq!(reader.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let manager: ConfigManager<SolverConfig, _, _> =
            ConfigManager::new(InMemoryConfigProvider::default(), YamlConfigSerializer);
        let config = SolverConfig {
            max_search_cells: 0,
            ..SolverConfig::default()
        };
        assert!(manager.set_config(&config).is_err());
        assert_eq!(manager.get_config().unwrap(), SolverConfig::default());
    }

    #[test]
    fn test_search_budget() {
        let config = SolverConfig::default();
        assert!(config.check_search_budget(&empty_board(3)).is_ok());
        assert!(config.check_search_budget(&empty_board(4)).is_err());
        let board = parse_board("xo__/o_x_/__xo/ox__").unwrap();
        assert!(config.check_search_budget(&board).is_ok());
    }
}
