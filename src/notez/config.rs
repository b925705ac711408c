use crate::error::{NotezError, Result};
use crate::ids::IdStyle;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const CONFIG_DIR_ENV: &str = "NOTEZ_CONFIG_DIR";
pub const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:8080/notes";

/// Keys accepted by [`NotezConfig::get`] and [`NotezConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["share-base-url", "id-style", "clipboard"];

/// Configuration for notez, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotezConfig {
    /// Base URL share links are built on
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    /// How new note ids are generated
    #[serde(default)]
    pub id_style: IdStyle,

    /// Copy share links to the system clipboard
    #[serde(default = "default_clipboard")]
    pub clipboard: bool,
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

fn default_clipboard() -> bool {
    true
}

impl Default for NotezConfig {
    fn default() -> Self {
        Self {
            share_base_url: default_share_base_url(),
            id_style: IdStyle::default(),
            clipboard: default_clipboard(),
        }
    }
}

impl NotezConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: NotezConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "share-base-url" => Some(self.share_base_url.clone()),
            "id-style" => Some(self.id_style.to_string()),
            "clipboard" => Some(self.clipboard.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "share-base-url" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("share-base-url cannot be empty".to_string());
                }
                self.share_base_url = value.to_string();
            }
            "id-style" => self.id_style = value.parse()?,
            "clipboard" => {
                self.clipboard = match value.to_ascii_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => true,
                    "false" | "off" | "no" | "0" => false,
                    other => return Err(format!("Invalid boolean for clipboard: {}", other)),
                }
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.share_base_url.trim().is_empty() {
            return Err(NotezError::Config(
                "share_base_url cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolves the config directory: explicit override, then `NOTEZ_CONFIG_DIR`,
/// then the platform config directory.
pub fn config_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "notez", "notez")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| NotezError::Config("Could not determine config dir".to_string()))
}
