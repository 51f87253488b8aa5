//! File logging. The terminal belongs to the UI, so events never go to stdout.

use anyhow::{Context, Result};
use course_core::settings::Settings;
use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;

/// An opened log file and the level it records at.
pub struct LogTarget {
    pub path: PathBuf,
    pub file: File,
    pub level: LevelFilter,
}

/// Resolves the level and path, creating the parent directory and the file.
///
/// Returns `None` when the level is `off` or no log path can be determined.
pub fn prepare_log_file(settings: &Settings) -> Result<Option<LogTarget>> {
    let level = settings.log_filter()?;
    if level == LevelFilter::OFF {
        return Ok(None);
    }
    let Some(path) = settings.log_path() else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    Ok(Some(LogTarget { path, file, level }))
}

/// Installs the global subscriber. Returns the log path, or `None` when logging is off.
pub fn init(settings: &Settings) -> Result<Option<PathBuf>> {
    let Some(LogTarget { path, file, level }) = prepare_log_file(settings)? else {
        return Ok(None);
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with(level: &str, path: PathBuf) -> Settings {
        Settings {
            log_level: level.to_string(),
            log_file: Some(path),
            ..Settings::default()
        }
    }

    #[test]
    fn test_off_level_opens_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("course-list.log");
        let target = prepare_log_file(&settings_with("off", path.clone())).unwrap();
        assert!(target.is_none());
        assert!(!path.exists());
        assert!(!dir.path().join("logs").exists());
    }

    #[test]
    fn test_creates_nested_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("course-list.log");
        let target = prepare_log_file(&settings_with("debug", path.clone()))
            .unwrap()
            .unwrap();
        assert_eq!(target.path, path);
        assert_eq!(target.level, LevelFilter::DEBUG);
        assert!(path.is_file());
    }

    #[test]
    fn test_existing_log_is_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("course-list.log");
        fs::write(&path, "earlier run\n").unwrap();
        {
            use std::io::Write;
            let mut target = prepare_log_file(&settings_with("info", path.clone()))
                .unwrap()
                .unwrap();
            writeln!(target.file, "later run").unwrap();
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "earlier run\nlater run\n");
    }

    #[test]
    fn test_unknown_level_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = prepare_log_file(&settings_with("loud", dir.path().join("x.log")));
        assert!(result.is_err());
    }
}
