//! Doctor configuration
//!
//! Settings persisted as TOML in the user configuration directory:
//! - an explicit Android SDK root override
//! - the report output format

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Doctor configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorConfig {
    /// Explicit Android SDK root; takes precedence over environment variables
    pub sdk_path: Option<PathBuf>,
    /// Report output format
    pub format: ReportFormat,
}

impl DoctorConfig {
    /// Default configuration file location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("droid-doctor")
            .join("config.toml")
    }

    /// Load the configuration from `path`, creating it with defaults when
    /// no file exists yet.
    pub async fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            debug!("Loading configuration from {:?}", path);
            let content = tokio::fs::read_to_string(path).await?;
            Ok(toml::from_str(&content)?)
        } else {
            info!("Creating default configuration at {:?}", path);
            let config = Self::default();
            config.save(path).await?;
            Ok(config)
        }
    }

    /// Persist the configuration as TOML
    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DoctorConfig::default();
        assert!(config.sdk_path.is_none());
        assert_eq!(config.format, ReportFormat::Text);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DoctorConfig {
            sdk_path: Some(PathBuf::from("/opt/android-sdk")),
            format: ReportFormat::Json,
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let restored: DoctorConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(restored.sdk_path, config.sdk_path);
        assert_eq!(restored.format, ReportFormat::Json);
    }

    #[test]
    fn test_unknown_fields_use_defaults() {
        let restored: DoctorConfig = toml::from_str("").unwrap();
        assert!(restored.sdk_path.is_none());
        assert_eq!(restored.format, ReportFormat::Text);
    }

    #[tokio::test]
    async fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("droid-doctor").join("config.toml");

        let config = DoctorConfig::load_or_create(&path).await.unwrap();
        assert!(path.exists());
        assert!(config.sdk_path.is_none());

        // Second load reads the file it just wrote.
        let reloaded = DoctorConfig::load_or_create(&path).await.unwrap();
        assert_eq!(reloaded.format, ReportFormat::Text);
    }
}
