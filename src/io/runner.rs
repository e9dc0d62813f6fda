//! External command execution with captured output.
//!
//! `calibredb` is the only tool run through here. Output is captured in full
//! and returned together with the exit status so callers decide what a
//! failure means.
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

/// Result of running an external command to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; None when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Standard output followed by standard error, lossily decoded.
    pub output: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs an executable and waits for it to exit.
pub trait CommandRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> std::io::Result<CommandOutput>;
}

/// Spawns real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> std::io::Result<CommandOutput> {
        debug!("Running {} {:?}", program.display(), args);
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            exit_code: output.status.code(),
            output: text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_requires_exit_code_zero() {
        let ok = CommandOutput {
            exit_code: Some(0),
            output: String::new(),
        };
        let failed = CommandOutput {
            exit_code: Some(1),
            output: String::new(),
        };
        let signalled = CommandOutput {
            exit_code: None,
            output: String::new(),
        };
        assert!(ok.success());
        assert!(!failed.success());
        assert!(!signalled.success());
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_captures_stdout_then_stderr() {
        let args: Vec<OsString> = vec!["-c".into(), "echo out; echo err >&2; exit 3".into()];
        let result = SystemRunner.run(Path::new("/bin/sh"), &args).unwrap();
        assert_eq!(result.exit_code, Some(3));
        assert_eq!(result.output, "out\nerr\n");
    }

    #[test]
    fn system_runner_reports_missing_program() {
        let missing = Path::new("/definitely/not/a/real/calibredb");
        assert!(SystemRunner.run(missing, &[]).is_err());
    }
}
