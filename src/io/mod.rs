//! I/O layer: calibre's settings file, the OS process table, console prompts,
//! and external command execution. Each collaborator sits behind a trait so an
//! import run can be driven without a real console, calibre, or calibredb.
pub mod settings;
pub use settings::{calibre_config_dir, read_libraries};

pub mod process;
pub use process::{ProcessTable, RunningProcess, SystemProcessTable};

pub mod prompt;
pub use prompt::{InputProvider, ScriptedInput, StdinInput};

pub mod runner;
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
