use selah_engine::{HtmlOptions, InlineOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_VAR: &str = "SELAH_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Renderer settings. Every section and key is optional; missing values
/// take the engine defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub inline: InlineOptions,
    #[serde(default)]
    pub html: HtmlOptions,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    /// `$SELAH_CONFIG` if set and non-empty, else `~/.config/selah/config.toml`.
    pub fn config_path() -> PathBuf {
        if let Ok(custom) = std::env::var(CONFIG_PATH_VAR)
            && !custom.trim().is_empty()
        {
            let custom = PathBuf::from(custom);
            return Self::expand_path(&custom).unwrap_or(custom);
        }
        Self::default_config_path()
    }

    fn default_config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/selah");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_path() {
        let config_path = Config::default_config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/selah/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            inline: InlineOptions { max_depth: 8 },
            html: HtmlOptions {
                max_heading_level: 2,
                external_links: false,
            },
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.inline.max_depth, 64);
        assert_eq!(config.html.max_heading_level, 4);
        assert!(config.html.external_links);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[html]\nexternal_links = false\n").unwrap();
        assert!(!config.html.external_links);
        assert_eq!(config.html.max_heading_level, 4);
        assert_eq!(config.inline, InlineOptions::default());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/selah/custom.toml");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().ends_with("selah/custom.toml"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/config.toml");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_expand_path_with_unknown_var_fails() {
        let path = PathBuf::from("$SELAH_TEST_SURELY_UNSET_VAR/config.toml");
        assert!(Config::expand_path(&path).is_none());
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&config_path).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested/dir/config.toml");

        let original = Config {
            inline: InlineOptions { max_depth: 12 },
            html: HtmlOptions::default(),
        };
        original.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap().unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_save_and_load_follow_config_path_var() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom/selah.toml");

        unsafe {
            env::set_var(CONFIG_PATH_VAR, &config_path);
        }
        let saved = Config::default().save();
        let resolved = Config::config_path();
        let loaded = Config::load();
        unsafe {
            env::remove_var(CONFIG_PATH_VAR);
        }

        saved.unwrap();
        assert_eq!(resolved, config_path);
        assert!(config_path.exists());
        assert_eq!(loaded.unwrap(), Some(Config::default()));
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[html]\nmax_heading_level = \"big\"\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_read_error_on_directory() {
        let temp_dir = TempDir::new().unwrap();

        let err = Config::load_from_path(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigReadError { .. }));
    }
}
