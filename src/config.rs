//! Layered application configuration.
//!
//! Sources, lowest to highest priority:
//! 1. Built-in defaults
//! 2. User-level `config.toml` in the platform config directory
//! 3. `labqms.toml` in the working directory
//! 4. `LABQMS_*` environment variables (`__` separates nested keys)

use std::path::PathBuf;

use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::domain::query::spec::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

pub const ENV_PREFIX: &str = "LABQMS_";
pub const LOCAL_CONFIG_FILE: &str = "labqms.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Figment(#[from] figment::Error),

    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("unable to resolve platform directories")]
    NoProjectDirs,
}

/// Where list views get their records from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Mock,
    Sqlite,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_log_filter() -> String {
    "labqms=info".to_string()
}

fn default_window_title() -> String {
    "LabQMS".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: Backend,

    /// Overrides the SQLite file location; defaults to the platform data dir.
    #[serde(default)]
    pub db_path: Option<PathBuf>,

    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// `tracing_subscriber` directive, used when `LABQMS_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default = "default_window_title")]
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            db_path: None,
            default_page_size: default_page_size(),
            log_filter: default_log_filter(),
            window_title: default_window_title(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(user_path) = user_config_path() {
            if user_path.exists() {
                figment = figment.merge(Toml::file(user_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !PAGE_SIZE_OPTIONS.contains(&self.default_page_size) {
            return Err(ConfigError::InvalidValue {
                field: "default_page_size".to_string(),
                reason: format!(
                    "{} is not one of {:?}",
                    self.default_page_size, PAGE_SIZE_OPTIONS
                ),
            });
        }

        EnvFilter::try_new(&self.log_filter).map_err(|err| ConfigError::InvalidValue {
            field: "log_filter".to_string(),
            reason: err.to_string(),
        })?;

        Ok(())
    }

    pub fn resolved_db_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => Ok(project_dirs()?.data_local_dir().join("labqms.sqlite")),
        }
    }
}

pub fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from("com", "labqms", "labqms").ok_or(ConfigError::NoProjectDirs)
}

fn user_config_path() -> Option<PathBuf> {
    project_dirs()
        .ok()
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert_eq!(config.backend, Backend::Mock);
        assert_eq!(config.default_page_size, 10);
        assert!(config.db_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn local_file_and_env_are_layered() {
        Jail::expect_with(|jail| {
            jail.create_file(
                LOCAL_CONFIG_FILE,
                r#"
                backend = "sqlite"
                default_page_size = 20
                window_title = "Lab A"
                "#,
            )?;
            jail.set_env("LABQMS_DEFAULT_PAGE_SIZE", "50");

            let config = AppConfig::load().map_err(|err| err.to_string())?;
            assert_eq!(config.backend, Backend::Sqlite);
            assert_eq!(config.default_page_size, 50);
            assert_eq!(config.window_title, "Lab A");
            Ok(())
        });
    }

    #[test]
    fn unsupported_page_size_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("LABQMS_DEFAULT_PAGE_SIZE", "7");

            let err = AppConfig::load().expect_err("page size 7 should be rejected");
            assert!(matches!(
                err,
                ConfigError::InvalidValue { ref field, .. } if field == "default_page_size"
            ));
            Ok(())
        });
    }

    #[test]
    fn explicit_db_path_wins() {
        let config = AppConfig {
            db_path: Some(PathBuf::from("/tmp/qms.sqlite")),
            ..AppConfig::default()
        };
        assert_eq!(
            config.resolved_db_path().expect("explicit path"),
            PathBuf::from("/tmp/qms.sqlite")
        );
    }
}
