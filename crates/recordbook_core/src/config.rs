//! Runtime configuration defaults.
//!
//! # Responsibility
//! - Name the fixed file locations each exercise reads and writes.
//! - Pick the log level and log directory for the current build.
//!
//! # Invariants
//! - Defaults are constants; only file paths may be overridden by callers.
//! - `log_dir` is always absolute.

use std::path::{Path, PathBuf};

pub const DEFAULT_STUDENTS_PATH: &str = "students.txt";
pub const DEFAULT_REPORT_PATH: &str = "grade_report.txt";
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub students_path: PathBuf,
    pub report_path: PathBuf,
    pub inventory_path: PathBuf,
    pub log_level: &'static str,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Builds defaults with logs under `<base_dir>/logs`.
    ///
    /// A relative `base_dir` is resolved against the current directory when
    /// possible.
    pub fn with_base_dir(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref();
        let base_dir = if base_dir.is_absolute() {
            base_dir.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(base_dir))
                .unwrap_or_else(|_| std::env::temp_dir().join(base_dir))
        };
        Self {
            students_path: PathBuf::from(DEFAULT_STUDENTS_PATH),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_PATH),
            log_level: default_log_level(),
            log_dir: base_dir.join(LOG_DIR_NAME),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_base_dir(".")
    }
}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DEFAULT_INVENTORY_PATH, DEFAULT_REPORT_PATH, DEFAULT_STUDENTS_PATH};
    use std::path::Path;

    #[test]
    fn defaults_use_fixed_file_names_and_absolute_log_dir() {
        let config = AppConfig::default();
        assert_eq!(config.students_path, Path::new(DEFAULT_STUDENTS_PATH));
        assert_eq!(config.report_path, Path::new(DEFAULT_REPORT_PATH));
        assert_eq!(config.inventory_path, Path::new(DEFAULT_INVENTORY_PATH));
        assert!(config.log_dir.is_absolute());
        assert!(config.log_dir.ends_with("logs"));
    }
}
