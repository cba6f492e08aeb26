use serde::{Deserialize, Serialize};
use tictactoe_common::config::{GameSettings, Validate, YamlConfigFile};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_file(path_override: Option<&str>) -> YamlConfigFile<Config> {
    match path_override {
        Some(path) => YamlConfigFile::new(path),
        None => YamlConfigFile::new(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl WindowConfig {
    const MIN_SIZE: f32 = 300.0;
    const MAX_SIZE: f32 = 2000.0;
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        let range = Self::MIN_SIZE..=Self::MAX_SIZE;
        if !range.contains(&self.width) || !range.contains(&self.height) {
            return Err(format!(
                "Window size must be between {} and {} in both dimensions, got {}x{}",
                Self::MIN_SIZE,
                Self::MAX_SIZE,
                self.width,
                self.height
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 600.0,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameSettings,
    #[serde(default)]
    pub window: WindowConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.window.validate()?;
        Ok(())
    }
}
