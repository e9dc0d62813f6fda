//! Reader for calibre's GUI settings (`gui.json`).
//!
//! Only the keys of `library_usage_stats` are consumed: each is the absolute
//! path of a library calibre has opened. Their values (open counts) are ignored.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::types::Library;

/// Settings file inside calibre's configuration directory.
pub const GUI_SETTINGS_FILE: &str = "gui.json";

/// Field of `gui.json` listing known libraries.
pub const LIBRARY_USAGE_FIELD: &str = "library_usage_stats";

/// Environment variable calibre itself honours to relocate its configuration.
pub const CONFIG_DIR_ENV: &str = "CALIBRE_CONFIG_DIRECTORY";

/// Resolve calibre's configuration directory.
///
/// Order: explicit override, `CALIBRE_CONFIG_DIRECTORY`, then the platform
/// configuration directory (`%APPDATA%` on Windows) joined with `calibre`.
pub fn calibre_config_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    resolve_config_dir(std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from), dirs::config_dir())
}

fn resolve_config_dir(from_env: Option<PathBuf>, platform: Option<PathBuf>) -> Result<PathBuf> {
    match from_env.filter(|dir| !dir.as_os_str().is_empty()) {
        Some(dir) => Ok(dir),
        None => platform
            .map(|dir| dir.join("calibre"))
            .ok_or(Error::ConfigDirUnknown),
    }
}

/// Read the known libraries from a `gui.json` file, in the file's key order.
pub fn read_libraries(settings_path: &Path) -> Result<Vec<Library>> {
    let result = parse_libraries(settings_path);
    if let Err(e) = &result {
        error!("{e}");
    }
    result
}

fn parse_libraries(path: &Path) -> Result<Vec<Library>> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::ConfigMalformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })?;
    debug!("Read {} bytes from {}", text.len(), path.display());

    let document: Value = serde_json::from_str(&text).map_err(|e| Error::ConfigMalformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let stats = document
        .get(LIBRARY_USAGE_FIELD)
        .and_then(Value::as_object)
        .ok_or_else(|| Error::ConfigMalformed {
            path: path.to_path_buf(),
            reason: format!("missing `{LIBRARY_USAGE_FIELD}` object"),
        })?;

    let libraries: Vec<Library> = stats.keys().map(Library::from_path).collect();
    if libraries.is_empty() {
        return Err(Error::NoLibrariesFound {
            path: path.to_path_buf(),
        });
    }
    Ok(libraries)
}
