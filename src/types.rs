//! Shared types used across calibre-import.
//! Includes `AutomergePolicy` and the `Library` record discovered from calibre's settings.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How calibredb treats an imported book that looks like a duplicate of an existing entry.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AutomergePolicy {
    #[default]
    Ignore,
    Overwrite,
    #[value(alias = "new_record")]
    NewRecord,
}

impl AutomergePolicy {
    /// The value passed to `calibredb add --automerge`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AutomergePolicy::Ignore => "ignore",
            AutomergePolicy::Overwrite => "overwrite",
            AutomergePolicy::NewRecord => "new_record",
        }
    }
}

impl std::fmt::Display for AutomergePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A calibre library directory.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Library {
    /// Directory path exactly as calibre recorded it
    pub path: String,
    /// Last segment of `path`
    pub name: String,
}

impl Library {
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = last_segment(&path).to_string();
        Self { path, name }
    }
}

impl std::fmt::Display for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.path)
    }
}

// calibre records Windows paths on Windows, so both separators count regardless of host.
fn last_segment(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        return path;
    }
    trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
}
