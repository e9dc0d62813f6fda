//! Command Line Interface (CLI) layer for calibre-import.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that turns parsed options into an
//! `ImportConfig` and hands it to `calibre_import::api`.
//!
//! If you are embedding calibre-import into another application, prefer using
//! the high-level `calibre_import::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
