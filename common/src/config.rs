use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::tictactoe::{BotType, FirstPlayerMode};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

/// A YAML file holding one validated config value.
///
/// A missing file loads as `TConfig::default()` and is not created until
/// [`YamlConfigFile::save`] is called. The last loaded or saved value is cached.
pub struct YamlConfigFile<TConfig> {
    path: PathBuf,
    serializer: YamlConfigSerializer,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> YamlConfigFile<TConfig>
where
    TConfig: Clone + Default + Validate + Serialize + for<'de> Deserialize<'de>,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            serializer: YamlConfigSerializer::new(),
            cached: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<TConfig, String> {
        let mut cached = self.cached.lock().map_err(|_| "Config cache is poisoned".to_string())?;
        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(TConfig::default()),
            Err(err) => return Err(format!("Failed to read config file: {}", err)),
        };

        let config: TConfig = self.serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn save(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.serializer.serialize(config)?;
        std::fs::write(&self.path, content)
            .map_err(|e| format!("Failed to write config file: {}", e))?;

        let mut cached = self.cached.lock().map_err(|_| "Config cache is poisoned".to_string())?;
        *cached = Some(config.clone());
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpponentKind {
    Human,
    RandomBot,
    #[default]
    MinimaxBot,
}

impl OpponentKind {
    pub fn bot_type(self) -> Option<BotType> {
        match self {
            OpponentKind::Human => None,
            OpponentKind::RandomBot => Some(BotType::Random),
            OpponentKind::MinimaxBot => Some(BotType::Minimax),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameSettings {
    #[serde(default)]
    pub opponent: OpponentKind,
    #[serde(default)]
    pub first_player: FirstPlayerMode,
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
