//! End-to-end tests for the calibre-import binary.
//!
//! calibredb is replaced by a small shell script that records its arguments,
//! and calibre's settings live in a temporary configuration directory.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn calibre_import() -> Command {
    Command::cargo_bin("calibre-import").expect("calibre-import binary should exist")
}

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new(libraries: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("calibre");
        fs::create_dir(&config_dir).unwrap();
        let stats: Vec<String> = libraries
            .iter()
            .map(|l| format!("{}: 1", serde_json::to_string(l).unwrap()))
            .collect();
        fs::write(
            config_dir.join("gui.json"),
            format!("{{\"library_usage_stats\": {{{}}}}}", stats.join(", ")),
        )
        .unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn book(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, b"book").unwrap();
        path
    }

    fn log(&self) -> String {
        fs::read_to_string(self.path("import.log")).unwrap_or_default()
    }

    fn command(&self) -> Command {
        let mut cmd = calibre_import();
        cmd.arg("--config-dir")
            .arg(self.path("calibre"))
            .arg("--log-file")
            .arg(self.path("import.log"))
            .args(["--process-name", "calibre-import-e2e-absent"])
            .env_remove("RUST_LOG");
        cmd
    }

    #[cfg(unix)]
    fn fake_calibredb(&self, exit_code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = self.path("calibredb");
        let args_file = self.path("calibredb.args");
        fs::write(
            &script,
            format!(
                "#!/bin/sh\nfor a in \"$@\"; do echo \"$a\" >> '{}'; done\necho 'calibredb says hi'\nexit {}\n",
                args_file.display(),
                exit_code
            ),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(self.path("calibredb.args"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn no_files_prints_usage_and_exits_zero() {
    let sandbox = Sandbox::new(&["/books/Fiction"]);
    sandbox
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: calibre-import"));
    assert!(sandbox.log().contains("Usage: calibre-import"));
}

#[test]
fn missing_calibredb_is_fatal() {
    let sandbox = Sandbox::new(&["/books/Fiction"]);
    let book = sandbox.book("a.epub");
    sandbox
        .command()
        .arg("--calibredb")
        .arg(sandbox.path("no-such-calibredb"))
        .arg(&book)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("calibredb not found"));
}

#[test]
fn missing_settings_file_is_fatal() {
    let sandbox = Sandbox::new(&["/books/Fiction"]);
    fs::remove_file(sandbox.path("calibre").join("gui.json")).unwrap();
    let tool = sandbox.book("calibredb");
    let book = sandbox.book("a.epub");
    sandbox
        .command()
        .arg("--calibredb")
        .arg(&tool)
        .arg(&book)
        .assert()
        .code(1);
    assert!(sandbox.log().contains("settings file not found"));
}

#[test]
fn disabled_logging_writes_no_log_file() {
    let sandbox = Sandbox::new(&["/books/Fiction"]);
    sandbox
        .command()
        .arg("--no-log")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").not());
    assert!(!sandbox.path("import.log").exists());
}

#[cfg(unix)]
#[test]
fn imports_existing_files_with_chosen_library() {
    let sandbox = Sandbox::new(&["/books/Fiction", "/books/Comics"]);
    let tool = sandbox.fake_calibredb(0);
    let present = sandbox.book("present.epub");
    let missing = sandbox.path("missing.epub");

    sandbox
        .command()
        .arg("--calibredb")
        .arg(&tool)
        .args(["--automerge", "overwrite"])
        .arg(&present)
        .arg(&missing)
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Fiction (/books/Fiction)"))
        .stdout(predicate::str::contains("2. Comics (/books/Comics)"));

    assert_eq!(
        sandbox.recorded_args(),
        [
            "add".to_string(),
            "--library-path".to_string(),
            "/books/Comics".to_string(),
            "--automerge".to_string(),
            "overwrite".to_string(),
            display(&present),
        ]
    );

    let log = sandbox.log();
    assert!(log.contains(&format!("Successfully imported: {}", display(&present))));
    assert!(log.contains("[WARN] File not found, skipping"));
}

#[cfg(unix)]
#[test]
fn calibredb_failure_still_exits_zero() {
    let sandbox = Sandbox::new(&["/books/Fiction"]);
    let tool = sandbox.fake_calibredb(3);
    let book = sandbox.book("a.epub");

    sandbox
        .command()
        .arg("--calibredb")
        .arg(&tool)
        .arg(&book)
        .write_stdin("1\n")
        .assert()
        .success();

    let log = sandbox.log();
    assert!(log.contains("[ERROR] Import into Fiction failed (exit code 3): calibredb says hi"));
    assert!(!log.contains("Successfully imported"));
}

#[cfg(unix)]
#[test]
fn invalid_selection_exits_one_without_importing() {
    let sandbox = Sandbox::new(&["/books/Fiction"]);
    let tool = sandbox.fake_calibredb(0);
    let book = sandbox.book("a.epub");

    sandbox
        .command()
        .arg("--calibredb")
        .arg(&tool)
        .arg(&book)
        .write_stdin("abc\n")
        .assert()
        .code(1);

    assert!(sandbox.recorded_args().is_empty());
    assert_eq!(
        sandbox.log().matches("invalid library selection 'abc'").count(),
        1
    );
}

#[cfg(unix)]
#[test]
fn no_existing_files_exits_zero_without_importing() {
    let sandbox = Sandbox::new(&["/books/Fiction"]);
    let tool = sandbox.fake_calibredb(0);

    sandbox
        .command()
        .arg("--calibredb")
        .arg(&tool)
        .arg(sandbox.path("gone.epub"))
        .write_stdin("1\n")
        .assert()
        .success();

    assert!(sandbox.recorded_args().is_empty());
    assert!(sandbox.log().contains("No valid files to import."));
}
