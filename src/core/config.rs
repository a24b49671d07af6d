use crate::core::headset::{HANDS_FREE_FRIENDLY_NAME, HEADPHONES_FRIENDLY_NAME};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_hands_free_name() -> String {
    HANDS_FREE_FRIENDLY_NAME.to_string()
}

fn default_headphones_name() -> String {
    HEADPHONES_FRIENDLY_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Friendly name of the node reporting the battery level
    #[serde(default = "default_hands_free_name")]
    pub hands_free_name: String,
    /// Friendly name of the node reporting the connection state
    #[serde(default = "default_headphones_name")]
    pub headphones_name: String,
    /// Print JSON instead of formatted text by default
    #[serde(default)]
    pub json_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hands_free_name: default_hands_free_name(),
            headphones_name: default_headphones_name(),
            json_output: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load from an explicit path. A missing, empty or unreadable file yields
    /// the defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_json::from_str(&data).unwrap_or_else(|e| {
            log::warn!("Ignoring corrupt config file {:?}: {}", config_path, e);
            Config::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("wmipnp").join("config.json"))
    }

    pub fn set_hands_free_name(&mut self, name: String) {
        self.hands_free_name = name;
    }

    pub fn set_headphones_name(&mut self, name: String) {
        self.headphones_name = name;
    }
}
