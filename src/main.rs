//! calibre-import CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run one import,
//! and exit with the resulting status. For programmatic use, prefer the
//! library API (`calibre_import::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    ExitCode::from(cli::run(args))
}
