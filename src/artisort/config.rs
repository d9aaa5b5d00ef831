use crate::error::{ArtisortError, Result};
use crate::source::DEFAULT_ACTIVE_SHEET;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";

pub const CONFIG_KEYS: [&str; 2] = ["rules_file", "active_sheet"];

/// Configuration for artisort, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtisortConfig {
    /// Rule workbook used when none is given on the command line.
    /// Unset means the built-in heuristic.
    #[serde(default)]
    pub rules_file: Option<PathBuf>,

    /// Sheet to use when the workbook has more than one
    #[serde(default = "default_active_sheet")]
    pub active_sheet: String,
}

fn default_active_sheet() -> String {
    DEFAULT_ACTIVE_SHEET.to_string()
}

impl Default for ArtisortConfig {
    fn default() -> Self {
        Self {
            rules_file: None,
            active_sheet: default_active_sheet(),
        }
    }
}

impl ArtisortConfig {
    /// Load config from a file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(config_path).map_err(|e| ArtisortError::read(config_path, e))?;
        let config: ArtisortConfig = serde_json::from_str(&content)?;
        if config.active_sheet.trim().is_empty() {
            return Err(ArtisortError::Config(format!(
                "active_sheet in {} is empty",
                config_path.display()
            )));
        }
        Ok(config)
    }

    /// Save config to a file, creating its directory if needed
    pub fn save<P: AsRef<Path>>(&self, config_path: P) -> Result<()> {
        let config_path = config_path.as_ref();

        if let Some(dir) = config_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Text form of a key's value; an unset `rules_file` reads as empty.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "rules_file" => Some(
                self.rules_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "active_sheet" => Some(self.active_sheet.clone()),
            _ => None,
        }
    }

    /// Sets a key from its text form. An empty `rules_file` unsets it.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "rules_file" => {
                self.rules_file = (!value.is_empty()).then(|| PathBuf::from(value));
                Ok(())
            }
            "active_sheet" if value.is_empty() => Err("active_sheet cannot be empty".to_string()),
            "active_sheet" => {
                self.active_sheet = value.to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .map(|key| (*key, self.get(key).unwrap_or_default()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ArtisortConfig::default();
        assert_eq!(config.rules_file, None);
        assert_eq!(config.active_sheet, "Active");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = ArtisortConfig::load(dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, ArtisortConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILENAME);

        let config = ArtisortConfig {
            rules_file: Some(PathBuf::from("/home/me/rules.json")),
            active_sheet: "Main".to_string(),
        };
        config.save(&path).unwrap();

        let loaded = ArtisortConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: ArtisortConfig = serde_json::from_str(r#"{"rules_file": "r.tsv"}"#).unwrap();
        assert_eq!(parsed.rules_file, Some(PathBuf::from("r.tsv")));
        assert_eq!(parsed.active_sheet, "Active");
    }

    #[test]
    fn test_get_and_set() {
        let mut config = ArtisortConfig::default();
        assert_eq!(config.get("rules_file").as_deref(), Some(""));

        config.set("rules_file", " rules.json ").unwrap();
        assert_eq!(config.rules_file, Some(PathBuf::from("rules.json")));
        config.set("rules_file", "").unwrap();
        assert_eq!(config.rules_file, None);

        config.set("active_sheet", "Main").unwrap();
        assert_eq!(config.get("active_sheet").as_deref(), Some("Main"));
        assert!(config.set("active_sheet", "  ").is_err());
        assert_eq!(config.active_sheet, "Main");
    }

    #[test]
    fn test_unknown_key() {
        let mut config = ArtisortConfig::default();
        assert_eq!(config.get("colour"), None);
        assert_eq!(
            config.set("colour", "red"),
            Err("Unknown config key: colour".to_string())
        );
    }

    #[test]
    fn test_list_all_covers_every_key() {
        let keys: Vec<_> = ArtisortConfig::default()
            .list_all()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, CONFIG_KEYS);
    }

    #[test]
    fn test_empty_active_sheet_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"{"active_sheet": " "}"#).unwrap();
        assert!(matches!(
            ArtisortConfig::load(&path),
            Err(ArtisortError::Config(_))
        ));
    }
}
