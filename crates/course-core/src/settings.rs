use crate::theme::ThemePreference;
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

const ENV_PREFIX: &str = "COURSE_LIST_";
const CONFIG_PATH_VAR: &str = "COURSE_LIST_CONFIG";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_FILE_NAME: &str = "course-list.log";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

impl From<figment::Error> for SettingsError {
    fn from(err: figment::Error) -> Self {
        Self::Extract(Box::new(err))
    }
}

/// Runtime configuration. Read once at start-up and never written back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    pub theme: ThemePreference,
    pub catalog_path: Option<PathBuf>,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            catalog_path: None,
            log_level: "info".to_string(),
            log_file: None,
            tick_rate_ms: 50,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "courselist", "course-list")
}

impl Settings {
    /// Loads defaults, then the config file, then `COURSE_LIST_*` variables.
    pub fn new() -> Result<Self, SettingsError> {
        Self::load_from(Self::config_path().as_deref())
    }

    pub fn load_from(config_file: Option<&Path>) -> Result<Self, SettingsError> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));
        if let Some(path) = config_file {
            // A missing file is not an error; Toml::file yields nothing.
            figment = figment.merge(Toml::file(path));
        }
        let settings: Settings = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        settings.log_filter()?;
        Ok(settings)
    }

    /// `COURSE_LIST_CONFIG` if set, else `config.toml` in the platform config dir.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_VAR) {
            return Some(PathBuf::from(path));
        }
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Explicit `log_file`, else `course-list.log` in the platform data dir.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
        })
    }

    pub fn log_filter(&self) -> Result<LevelFilter, SettingsError> {
        self.log_level
            .trim()
            .parse()
            .map_err(|_| SettingsError::LogLevel(self.log_level.clone()))
    }
}
