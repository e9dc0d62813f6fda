use tracing::{debug, info};

use calibre_import::{FATAL_EXIT_CODE, RunOutcome, SystemHost, logging, run_import};

use super::args::CliArgs;

/// Run one import from parsed arguments and return the process exit code.
pub fn run(args: CliArgs) -> u8 {
    let config = match args.to_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return FATAL_EXIT_CODE;
        }
    };

    logging::init(&config.logging);
    debug!(
        "calibredb: {}, automerge: {}, auto-kill: {}",
        config.calibredb.display(),
        config.automerge,
        config.auto_kill
    );

    let mut system = SystemHost::new();
    match run_import(&config, &args.files, system.host()) {
        Ok(outcome) => {
            if let RunOutcome::Imported { files, .. } = &outcome {
                info!("Done: {} file(s) imported", files.len());
            }
            outcome.exit_code()
        }
        Err(e) => {
            // Already logged where it was raised.
            if !config.logging.enabled {
                eprintln!("error: {e}");
            }
            FATAL_EXIT_CODE
        }
    }
}
