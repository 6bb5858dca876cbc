use std::path::{Path, PathBuf};
use common::config::Validate;
use common::games::tictactoe::Difficulty;
use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn get_default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Uses `path` when given, otherwise the file next to the executable.
pub fn get_config_manager(path: Option<&Path>) -> ClientConfigManager {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_default_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub difficulty: Difficulty,
    /// Fixed seed for the engine's random choices; random when absent.
    pub seed: Option<u64>,
    pub human_symbol: char,
    pub engine_symbol: char,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        for symbol in [self.human_symbol, self.engine_symbol] {
            if symbol.is_whitespace() {
                return Err("Player symbols must not be whitespace".to_string());
            }
            if symbol.is_ascii_digit() {
                return Err(format!(
                    "Player symbol '{}' clashes with cell numbers",
                    symbol
                ));
            }
        }
        if self.human_symbol == self.engine_symbol {
            return Err(format!(
                "Human and engine symbols must differ, both are '{}'",
                self.human_symbol
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            seed: None,
            human_symbol: 'X',
            engine_symbol: 'O',
        }
    }
}
