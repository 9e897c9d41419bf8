use crate::error::{PromptzError, Result};
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORAGE_FILE: &str = "storage.json";

/// Keys accepted by [`PromptzConfig::get`] and [`PromptzConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["storage-file", "storage-key"];

/// Configuration for promptz, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptzConfig {
    /// Storage file name, relative to the data directory unless absolute
    #[serde(default = "default_storage_file")]
    pub storage_file: String,

    /// Key the prompt collection is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_file() -> String {
    DEFAULT_STORAGE_FILE.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for PromptzConfig {
    fn default() -> Self {
        Self {
            storage_file: default_storage_file(),
            storage_key: default_storage_key(),
        }
    }
}

impl PromptzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PromptzConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Full path of the storage file for a data directory.
    pub fn storage_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.storage_file)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-file" => Some(self.storage_file.clone()),
            "storage-key" => Some(self.storage_key.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(PromptzError::Api(format!("{} cannot be empty", key)));
        }
        match key {
            "storage-file" => self.storage_file = value.to_string(),
            "storage-key" => self.storage_key = value.to_string(),
            _ => {
                return Err(PromptzError::Api(format!(
                    "Unknown config key: {} (expected one of: {})",
                    key,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PromptzConfig::default();
        assert_eq!(config.storage_file, "storage.json");
        assert_eq!(config.storage_key, "savedPrompts");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = PromptzConfig::load(dir.path()).unwrap();
        assert_eq!(config, PromptzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data");

        let mut config = PromptzConfig::default();
        config.set("storage-key", "work").unwrap();
        config.save(&nested).unwrap();

        let loaded = PromptzConfig::load(&nested).unwrap();
        assert_eq!(loaded.storage_key, "work");
        assert_eq!(loaded.storage_file, "storage.json");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"storage_key": "k"}"#).unwrap();

        let config = PromptzConfig::load(dir.path()).unwrap();
        assert_eq!(config.storage_key, "k");
        assert_eq!(config.storage_file, "storage.json");
    }

    #[test]
    fn test_get_and_set() {
        let mut config = PromptzConfig::default();
        config.set("storage-file", " prompts.json ").unwrap();
        assert_eq!(config.get("storage-file").as_deref(), Some("prompts.json"));
        assert!(config.get("nope").is_none());
    }

    #[test]
    fn test_set_rejects_unknown_and_empty() {
        let mut config = PromptzConfig::default();
        assert!(config.set("file-ext", ".md").is_err());
        assert!(config.set("storage-key", "   ").is_err());
        assert_eq!(config, PromptzConfig::default());
    }

    #[test]
    fn test_storage_path() {
        let config = PromptzConfig::default();
        assert_eq!(
            config.storage_path("/data"),
            PathBuf::from("/data/storage.json")
        );
    }
}
