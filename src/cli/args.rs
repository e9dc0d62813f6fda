use clap::Parser;
use std::path::PathBuf;

use calibre_import::core::params::{CALIBRE_PROCESS_NAME, DEFAULT_CALIBREDB};
use calibre_import::{AutomergePolicy, ImportConfig, LogSettings};

use super::errors::AppError;

#[derive(Parser)]
#[command(
    name = "calibre-import",
    version,
    about = "Import ebook files into one of your calibre libraries"
)]
pub struct CliArgs {
    /// Ebook files to import
    pub files: Vec<PathBuf>,

    /// Path to the calibredb executable
    #[arg(long, default_value = DEFAULT_CALIBREDB)]
    pub calibredb: PathBuf,

    /// What calibredb does with books that look like duplicates
    #[arg(long, value_enum, default_value_t = AutomergePolicy::Ignore)]
    pub automerge: AutomergePolicy,

    /// Kill a running calibre without asking
    #[arg(long, default_value_t = false)]
    pub auto_kill: bool,

    /// calibre configuration directory (default: CALIBRE_CONFIG_DIRECTORY or the platform config dir)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Log file (default: calibre-import.log next to the executable)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable logging entirely
    #[arg(long, default_value_t = false)]
    pub no_log: bool,

    /// Executable name of the calibre GUI to look for
    #[arg(long, hide = true, default_value = CALIBRE_PROCESS_NAME)]
    pub process_name: String,

    /// Also log verbose messages, such as calibredb's full output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl CliArgs {
    /// Build the run configuration, rejecting unusable paths.
    pub fn to_config(&self) -> Result<ImportConfig, AppError> {
        if self.calibredb.as_os_str().is_empty() {
            return Err(AppError::InvalidArgument {
                arg: "--calibredb",
                reason: "path is empty".to_string(),
            });
        }

        let mut logging = LogSettings {
            enabled: !self.no_log,
            verbose: self.verbose,
            ..LogSettings::default()
        };
        if let Some(log_file) = &self.log_file {
            if log_file.is_dir() {
                return Err(AppError::InvalidArgument {
                    arg: "--log-file",
                    reason: format!("{} is a directory", log_file.display()),
                });
            }
            logging.log_file = log_file.clone();
        }

        Ok(ImportConfig {
            logging,
            calibredb: self.calibredb.clone(),
            automerge: self.automerge,
            auto_kill: self.auto_kill,
            config_dir: self.config_dir.clone(),
            process_name: self.process_name.clone(),
        })
    }
}
