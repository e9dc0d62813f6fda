#![doc = r#"
calibre-import — add ebook files to one of your local calibre libraries.

The crate discovers the libraries calibre knows about from its `gui.json`
settings, lets the user pick one, makes sure the calibre GUI is not holding the
library open, and hands the files to `calibredb add`. It powers the
`calibre-import` CLI and can be embedded in your own Rust applications.

Requirements
------------
- calibre installed, with `calibredb` reachable at a known path.
- Rust 2024 edition toolchain.

Quick start
-----------
```rust,no_run
use calibre_import::{ImportConfig, AutomergePolicy, SystemHost, run_import};

fn main() -> calibre_import::Result<()> {
    let config = ImportConfig {
        automerge: AutomergePolicy::Overwrite,
        ..ImportConfig::default()
    };
    calibre_import::logging::init(&config.logging);

    let mut system = SystemHost::new();
    let outcome = run_import(&config, &["/downloads/book.epub"], system.host())?;
    println!("{outcome:?}");
    Ok(())
}
```

Scripted runs
-------------
Every interactive or external collaborator sits behind a trait
([`ProcessTable`], [`InputProvider`], [`CommandRunner`]), so a run can be
driven with canned answers, for example [`ScriptedInput`]:

```rust,no_run
use calibre_import::{Host, ImportConfig, ScriptedInput, SystemProcessTable, SystemRunner, run_import};

let config = ImportConfig::default();
let mut processes = SystemProcessTable::new();
let mut input = ScriptedInput::new(["y", "1"]);
let host = Host { processes: &mut processes, input: &mut input, runner: &SystemRunner };
let outcome = run_import(&config, &["book.epub"], host);
```

Error handling
--------------
Fatal problems come back as `calibre_import::Error`; `Error::is_fatal`
tells them apart from the import failures that the run absorbs and reports
through [`RunOutcome::ImportFailed`].

Useful modules
--------------
- [`api`] — the complete import run.
- [`io`] — calibre settings, process table, prompts, command execution.
- [`core`] — individual steps and the run configuration.
- [`logging`] — stdout and append-only file logging.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod types;

// Types
pub use core::params::{ImportConfig, LogSettings};
pub use error::{Error, Result};
pub use types::{AutomergePolicy, Library};

// Collaborators
pub use io::{
    CommandOutput, CommandRunner, InputProvider, ProcessTable, RunningProcess, ScriptedInput,
    StdinInput, SystemProcessTable, SystemRunner,
};

// High-level API re-exports
pub use api::{FATAL_EXIT_CODE, Host, RunOutcome, SystemHost, USAGE, run_import};
