//! High-level library API: one function that performs a complete import run.
//! The CLI is a thin wrapper around [`run_import`]; embedders supply their own
//! [`Host`] to script prompts, fake the process table, or capture calibredb calls.
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::core::guard::ensure_not_running;
use crate::core::importer::{check_tool, import_files};
use crate::core::params::ImportConfig;
use crate::core::selector::select_library;
use crate::core::validate::existing_files;
use crate::error::{Error, Result};
use crate::io::process::{ProcessTable, SystemProcessTable};
use crate::io::prompt::{InputProvider, StdinInput};
use crate::io::runner::{CommandRunner, SystemRunner};
use crate::io::settings::{GUI_SETTINGS_FILE, calibre_config_dir, read_libraries};
use crate::types::Library;

/// Usage line logged when no files are given.
pub const USAGE: &str =
    "Usage: calibre-import [OPTIONS] <FILES>... (drop ebook files onto the program to import them)";

/// The capabilities an import run talks to.
pub struct Host<'a> {
    pub processes: &'a mut dyn ProcessTable,
    pub input: &'a mut dyn InputProvider,
    pub runner: &'a dyn CommandRunner,
}

/// Host backed by the real process table, console, and child processes.
pub struct SystemHost {
    pub processes: SystemProcessTable,
    pub input: StdinInput,
    pub runner: SystemRunner,
}

impl SystemHost {
    pub fn new() -> Self {
        Self {
            processes: SystemProcessTable::new(),
            input: StdinInput,
            runner: SystemRunner,
        }
    }

    pub fn host(&mut self) -> Host<'_> {
        Host {
            processes: &mut self.processes,
            input: &mut self.input,
            runner: &self.runner,
        }
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

/// How a run that did not hit a fatal error ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No files were given; usage was shown.
    NoArguments,
    /// None of the given files exist.
    NoValidFiles,
    /// calibredb accepted the files.
    Imported { library: Library, files: Vec<PathBuf> },
    /// calibredb reported a failure. Logged but not fatal.
    ImportFailed {
        library: Library,
        code: Option<i32>,
        output: String,
    },
}

impl RunOutcome {
    /// Process exit code for this outcome. Every non-fatal outcome exits 0.
    pub fn exit_code(&self) -> u8 {
        0
    }
}

/// Process exit code for a fatal error.
pub const FATAL_EXIT_CODE: u8 = 1;

/// Run a complete import: guard against a running calibre, check arguments and
/// calibredb, pick a library, drop missing files, then call calibredb.
///
/// Fatal errors are returned after being logged. An import failure is
/// logged and reported as [`RunOutcome::ImportFailed`].
pub fn run_import<P: AsRef<Path>>(
    config: &ImportConfig,
    files: &[P],
    host: Host<'_>,
) -> Result<RunOutcome> {
    let Host {
        processes,
        input,
        runner,
    } = host;

    ensure_not_running(processes, input, &config.process_name, config.auto_kill)?;

    if files.is_empty() {
        info!("{USAGE}");
        return Ok(RunOutcome::NoArguments);
    }

    check_tool(&config.calibredb)?;

    let settings_path = settings_file(config)?;
    let libraries = read_libraries(&settings_path)?;
    let library = select_library(&libraries, input)?.clone();

    let files = existing_files(files);
    if files.is_empty() {
        info!("No valid files to import.");
        return Ok(RunOutcome::NoValidFiles);
    }

    match import_files(runner, &config.calibredb, &library, config.automerge, &files) {
        Ok(()) => Ok(RunOutcome::Imported { library, files }),
        Err(Error::ImportFailed { code, output }) => {
            error!(
                "Import into {} failed{}: {}",
                library.name,
                code.map(|c| format!(" (exit code {c})")).unwrap_or_default(),
                output.trim()
            );
            Ok(RunOutcome::ImportFailed {
                library,
                code,
                output,
            })
        }
        Err(other) => Err(other),
    }
}

fn settings_file(config: &ImportConfig) -> Result<PathBuf> {
    match calibre_config_dir(config.config_dir.as_deref()) {
        Ok(dir) => Ok(dir.join(GUI_SETTINGS_FILE)),
        Err(e) => {
            error!("{e}");
            Err(e)
        }
    }
}
