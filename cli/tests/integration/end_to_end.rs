//! Full runs against a loopback server and a stand-in interpreter.

#![allow(clippy::expect_used)]

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;

use crate::support::{StaticServer, stub_python, virtualenv_archive};

const BOOTSTRAP_BODY: &[u8] = b"# bootstrap-buildout stand-in\n";

const EXPECTED_BUILDOUT_CFG: &str = "[buildout]
parts = default

[default]
recipe = zc.recipe.egg
eggs = zc.recipe.egg
interpreter = python
";

struct Fixture {
    _tools: tempfile::TempDir,
    python: std::path::PathBuf,
    server: StaticServer,
}

impl Fixture {
    fn new() -> Self {
        let tools = tempfile::tempdir().expect("tempdir");
        let python = stub_python(tools.path());
        let server = StaticServer::start(vec![
            ("/virtualenv-1.11.6.tar.gz", virtualenv_archive()),
            ("/bootstrap-buildout.py", BOOTSTRAP_BODY.to_vec()),
        ]);
        Self {
            _tools: tools,
            python,
            server,
        }
    }

    fn command(&self, destination: &Path) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bootstrap-venv"));
        cmd.arg(destination)
            .env("NO_COLOR", "1")
            .env("BOOTSTRAP_VENV_CONFIG", destination.join("absent.yaml"))
            .env("BOOTSTRAP_VENV_PYTHON", &self.python)
            .env(
                "BOOTSTRAP_VENV_VIRTUALENV_URL",
                self.server.url("/virtualenv-1.11.6.tar.gz"),
            )
            .env(
                "BOOTSTRAP_VENV_BOOTSTRAP_URL",
                self.server.url("/bootstrap-buildout.py"),
            )
            .env_remove("STUB_BOOTSTRAP_EXIT");
        cmd
    }
}

#[test]
#[serial]
fn test_fresh_directory_is_fully_bootstrapped() {
    let fixture = Fixture::new();
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();

    fixture
        .command(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Buildout environment ready"));

    assert!(
        root.join("parts/venv-dist/virtualenv-1.11.6/virtualenv.py")
            .is_file()
    );
    assert!(root.join("parts/venv/bin/python").is_file());
    assert_eq!(
        std::fs::read(root.join("bootstrap.py")).expect("read"),
        BOOTSTRAP_BODY
    );
    assert_eq!(
        std::fs::read_to_string(root.join("buildout.cfg")).expect("read"),
        EXPECTED_BUILDOUT_CFG
    );
    assert!(root.join("bin/buildout").is_file());
    assert!(root.join("buildout-ran").exists());
}

#[test]
#[serial]
fn test_rerun_keeps_config_and_recreates_runtime() {
    let fixture = Fixture::new();
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();
    fixture.command(root).assert().success();

    let custom = "[buildout]\nparts = app\n";
    std::fs::write(root.join("buildout.cfg"), custom).expect("customize");
    std::fs::write(root.join("parts/venv/stale"), "left over").expect("marker");

    fixture.command(root).assert().success();

    assert_eq!(
        std::fs::read_to_string(root.join("buildout.cfg")).expect("read"),
        custom
    );
    assert!(!root.join("parts/venv/stale").exists());
    assert!(root.join("parts/venv/bin/python").is_file());
}

#[test]
#[serial]
fn test_failing_bootstrap_propagates_exit_code() {
    let fixture = Fixture::new();
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();

    fixture
        .command(root)
        .env("STUB_BOOTSTRAP_EXIT", "3")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("exited with status 3"));

    assert!(root.join("bootstrap.py").is_file());
    assert!(!root.join("buildout-ran").exists());
}

#[test]
#[serial]
fn test_missing_destination_is_created() {
    let fixture = Fixture::new();
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().join("new-project");

    fixture.command(&root).assert().success();

    assert!(root.join("buildout-ran").exists());
}
