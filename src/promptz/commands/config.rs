use crate::commands::{CmdMessage, CmdResult};
use crate::config::PromptzConfig;
use crate::error::{PromptzError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = PromptzConfig::load(data_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = PromptzConfig::load(data_dir)?;
            let val = config
                .get(&key)
                .ok_or_else(|| PromptzError::Api(format!("Unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(val));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = PromptzConfig::load(data_dir)?;
            config.set(&key, &value)?;
            config.save(data_dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn show_all_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(PromptzConfig::default()));
    }

    #[test]
    fn set_persists() {
        let dir = TempDir::new().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("storage-key".into(), "work".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "storage-key set to work");

        let shown = run(dir.path(), ConfigAction::ShowKey("storage-key".into())).unwrap();
        assert_eq!(shown.messages[0].content, "work");
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = run(dir.path(), ConfigAction::ShowKey("color".into())).unwrap_err();
        assert!(matches!(err, PromptzError::Api(msg) if msg.contains("color")));

        let err = run(dir.path(), ConfigAction::Set("color".into(), "red".into())).unwrap_err();
        assert!(matches!(err, PromptzError::Api(_)));
        assert!(!dir.path().join("config.json").exists());
    }
}
