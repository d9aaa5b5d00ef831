use crate::commands::{CmdMessage, CmdResult};
use crate::config::ArtisortConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or updates the config file at `path`. Bad keys and values are
/// reported as error messages; the file is left untouched.
pub fn run(path: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ArtisortConfig::load(path)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => {
            match config.get(&key) {
                Some(value) => result.add_message(CmdMessage::info(value)),
                None => result.add_message(CmdMessage::error(format!(
                    "Unknown config key: {}",
                    key
                ))),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(path)?;
            tracing::debug!(path = %path.display(), key = %key, "Saved configuration");

            let shown = config.get(&key).unwrap_or_default();
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::CONFIG_FILENAME;
    use std::path::PathBuf;

    #[test]
    fn show_all_on_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);

        let result = run(&path, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(ArtisortConfig::default()));
        assert!(!path.exists());
    }

    #[test]
    fn set_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artisort").join(CONFIG_FILENAME);

        let result = run(
            &path,
            ConfigAction::Set("rules_file".into(), "/data/rules.json".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "rules_file set to /data/rules.json");

        let loaded = ArtisortConfig::load(&path).unwrap();
        assert_eq!(loaded.rules_file, Some(PathBuf::from("/data/rules.json")));

        let shown = run(&path, ConfigAction::ShowKey("rules_file".into())).unwrap();
        assert_eq!(shown.messages[0].content, "/data/rules.json");
    }

    #[test]
    fn bad_value_is_reported_and_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);

        let result = run(&path, ConfigAction::Set("active_sheet".into(), "".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.config.is_none());
        assert!(!path.exists());
    }

    #[test]
    fn unknown_key_is_an_error_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);

        let result = run(&path, ConfigAction::ShowKey("theme".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert_eq!(result.messages[0].content, "Unknown config key: theme");
    }
}
