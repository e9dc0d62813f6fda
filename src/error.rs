//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Variants are split into fatal failures, which end the run with exit code 1,
//! and recoverable ones that are logged and absorbed by the import flow.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("calibre settings file not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("calibre settings file {} is malformed: {reason}", .path.display())]
    ConfigMalformed { path: PathBuf, reason: String },

    #[error("no calibre libraries found in {}", .path.display())]
    NoLibrariesFound { path: PathBuf },

    #[error("could not determine the calibre configuration directory")]
    ConfigDirUnknown,

    #[error("calibredb not found at {}", .path.display())]
    ToolPathInvalid { path: PathBuf },

    #[error("failed to terminate {name} (pid {pid})")]
    ProcessTerminationFailed { name: String, pid: u32 },

    #[error("calibre is running and must be closed before importing")]
    UserDeclinedTermination,

    #[error("invalid library selection '{input}': expected a number between 1 and {count}")]
    InvalidSelection { input: String, count: usize },

    #[error("calibredb exited with {}: {output}", describe_status(.code))]
    ImportFailed { code: Option<i32>, output: String },
}

fn describe_status(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "no status code".to_string(),
    }
}

impl Error {
    /// Whether this error aborts the run. Only import failures are absorbed.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::ImportFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_failure_is_the_only_recoverable_error() {
        let failed = Error::ImportFailed {
            code: Some(2),
            output: "boom".into(),
        };
        assert!(!failed.is_fatal());
        assert!(Error::UserDeclinedTermination.is_fatal());
        assert!(
            Error::InvalidSelection {
                input: "0".into(),
                count: 3
            }
            .is_fatal()
        );
    }

    #[test]
    fn import_failure_message_mentions_status_and_output() {
        let msg = Error::ImportFailed {
            code: Some(1),
            output: "database locked".into(),
        }
        .to_string();
        assert!(msg.contains("status 1"));
        assert!(msg.contains("database locked"));

        let msg = Error::ImportFailed {
            code: None,
            output: String::new(),
        }
        .to_string();
        assert!(msg.contains("no status code"));
    }
}
