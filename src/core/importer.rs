//! `calibredb add` invocation.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::io::runner::CommandRunner;
use crate::types::{AutomergePolicy, Library};

/// Fail with `ToolPathInvalid` unless `calibredb` points at an existing file.
pub fn check_tool(calibredb: &Path) -> Result<()> {
    if calibredb.is_file() {
        debug!("Using calibredb at {}", calibredb.display());
        Ok(())
    } else {
        let err = Error::ToolPathInvalid {
            path: calibredb.to_path_buf(),
        };
        error!("{err}");
        Err(err)
    }
}

/// Arguments for `calibredb add`: subcommand, library, merge policy, then the files.
pub fn add_args(library: &Library, automerge: AutomergePolicy, files: &[PathBuf]) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "add".into(),
        "--library-path".into(),
        library.path.as_str().into(),
        "--automerge".into(),
        automerge.as_str().into(),
    ];
    args.extend(files.iter().map(|f| f.as_os_str().to_os_string()));
    args
}

/// Add `files` to `library`. Any non-zero exit, or failure to start calibredb,
/// is reported as `ImportFailed` carrying the captured output.
pub fn import_files(
    runner: &dyn CommandRunner,
    calibredb: &Path,
    library: &Library,
    automerge: AutomergePolicy,
    files: &[PathBuf],
) -> Result<()> {
    info!(
        "Importing {} file(s) into {} (automerge: {})",
        files.len(),
        library.name,
        automerge
    );

    let output = runner
        .run(calibredb, &add_args(library, automerge, files))
        .map_err(|e| Error::ImportFailed {
            code: None,
            output: e.to_string(),
        })?;
    debug!("calibredb output:\n{}", output.output);

    if output.success() {
        info!("Successfully imported: {}", join_paths(files));
        Ok(())
    } else {
        Err(Error::ImportFailed {
            code: output.exit_code,
            output: output.output,
        })
    }
}

fn join_paths(files: &[PathBuf]) -> String {
    files
        .iter()
        .map(|f| f.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
