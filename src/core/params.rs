use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::AutomergePolicy;

/// File name of the append-only log written next to the executable.
pub const LOG_FILE_NAME: &str = "calibre-import.log";

#[cfg(windows)]
pub const DEFAULT_CALIBREDB: &str = "C:\\Program Files\\Calibre2\\calibredb.exe";
#[cfg(target_os = "macos")]
pub const DEFAULT_CALIBREDB: &str = "/Applications/calibre.app/Contents/MacOS/calibredb";
#[cfg(not(any(windows, target_os = "macos")))]
pub const DEFAULT_CALIBREDB: &str = "/usr/bin/calibredb";

#[cfg(windows)]
pub const CALIBRE_PROCESS_NAME: &str = "calibre.exe";
#[cfg(not(windows))]
pub const CALIBRE_PROCESS_NAME: &str = "calibre";

/// Logging switches. `verbose` lets debug-level messages through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    pub enabled: bool,
    pub verbose: bool,
    pub log_file: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            verbose: false,
            log_file: default_log_file(),
        }
    }
}

/// Settings for one import run. Built once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    pub logging: LogSettings,
    /// Path to the calibredb executable
    pub calibredb: PathBuf,
    pub automerge: AutomergePolicy,
    /// Kill a running calibre without asking
    pub auto_kill: bool,
    /// Overrides calibre's configuration directory; None means discover it
    pub config_dir: Option<PathBuf>,
    /// Executable name of the calibre GUI process
    pub process_name: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            logging: LogSettings::default(),
            calibredb: PathBuf::from(DEFAULT_CALIBREDB),
            automerge: AutomergePolicy::default(),
            auto_kill: false,
            config_dir: None,
            process_name: CALIBRE_PROCESS_NAME.to_string(),
        }
    }
}

fn default_log_file() -> PathBuf {
    std::env::current_exe()
        .ok()
        .as_deref()
        .and_then(Path::parent)
        .map(|dir| dir.join(LOG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
}
