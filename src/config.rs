use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::case::{CaseStyle, Policy};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_style")]
    pub style: CaseStyle,

    /// Overrides the style's default policy when set.
    #[serde(default)]
    pub policy: Option<Policy>,
}

fn default_style() -> CaseStyle {
    CaseStyle::Camel
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: default_style(),
            policy: None,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(cli_style: Option<CaseStyle>, cli_policy: Option<Policy>) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".recase.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(style) = cli_style {
            config.style = style;
        }
        if let Some(policy) = cli_policy {
            config.policy = Some(policy);
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.style != default_style() {
            self.style = other.style;
        }
        if other.policy.is_some() {
            self.policy = other.policy;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.style, CaseStyle::Camel);
        assert!(config.policy.is_none());
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default();
        let override_config = Config {
            style: CaseStyle::Kebab,
            policy: Some(Policy::Strict),
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.style, CaseStyle::Kebab);
        assert_eq!(merged.policy, Some(Policy::Strict));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "style = \"snake\"\npolicy = \"strict\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.style, CaseStyle::Snake);
        assert_eq!(config.policy, Some(Policy::Strict));
    }

    #[test]
    fn test_from_file_defaults_missing_fields() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "style = \"dot\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.style, CaseStyle::Dot);
        assert!(config.policy.is_none());
    }

    #[test]
    fn test_from_file_rejects_unknown_style() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "style = \"pascal\"").unwrap();

        assert!(Config::from_file(file.path()).is_err());
    }
}
