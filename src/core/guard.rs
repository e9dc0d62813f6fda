//! Makes sure the calibre GUI is not holding the library open during an import.
use tracing::{error, info, warn};

use crate::error::{Error, Result};
use crate::io::process::{ProcessTable, RunningProcess};
use crate::io::prompt::InputProvider;

/// Check for a running calibre and close it, asking first unless `auto_kill` is set.
///
/// Returns whether calibre was running.
pub fn ensure_not_running(
    processes: &mut dyn ProcessTable,
    input: &mut dyn InputProvider,
    process_name: &str,
    auto_kill: bool,
) -> Result<bool> {
    let running = processes.find(process_name);
    if running.is_empty() {
        return Ok(false);
    }

    warn!("{} is running ({} instance(s))", process_name, running.len());

    if !auto_kill {
        let answer = input.read_line(&format!(
            "{process_name} must be closed before importing. Kill it now? [y/N] "
        ))?;
        if !is_yes(&answer) {
            let err = Error::UserDeclinedTermination;
            error!("{err}");
            return Err(err);
        }
    }

    for process in &running {
        kill(processes, process)?;
    }
    Ok(true)
}

fn kill(processes: &mut dyn ProcessTable, process: &RunningProcess) -> Result<()> {
    if processes.kill(process.pid) {
        info!("Killed {} (pid {})", process.name, process.pid);
        Ok(())
    } else {
        let err = Error::ProcessTerminationFailed {
            name: process.name.clone(),
            pid: process.pid,
        };
        error!("{err}");
        Err(err)
    }
}

fn is_yes(answer: &str) -> bool {
    answer.starts_with(['y', 'Y'])
}
