use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::{Mark, SearchMode};

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub type ConsoleConfigManager =
    ConfigManager<FileContentConfigProvider, ConsoleConfig, YamlConfigSerializer>;

pub fn get_config_manager(path: Option<&str>) -> ConsoleConfigManager {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ConsoleConfig {
    /// Side played by the engine in `play`.
    pub automated_mark: Mark,
    pub first_mark: Mark,
    #[serde(default)]
    pub search_mode: SearchMode,
    #[serde(default)]
    pub log_search_stats: bool,
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> Result<(), String> {
        if self.automated_mark == Mark::Empty {
            return Err("automated_mark must be X or O".to_string());
        }
        if self.first_mark == Mark::Empty {
            return Err("first_mark must be X or O".to_string());
        }
        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            automated_mark: Mark::X,
            first_mark: Mark::X,
            search_mode: SearchMode::Exhaustive,
            log_search_stats: false,
        }
    }
}
