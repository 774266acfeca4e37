//! Common test infrastructure for fuzzrank integration tests.
//!
//! Provides:
//! - TestProject: Temp directory with optional fuzzrank.toml and word lists
//! - Helpers to run the compiled binary with stdin and parse its output

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Get the path to the compiled fuzzrank binary
pub fn fuzzrank_binary() -> String {
    env!("CARGO_BIN_EXE_fuzzrank").to_string()
}

/// A test project with an isolated working directory.
pub struct TestProject {
    pub dir: tempfile::TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Project with a fuzzrank.toml holding the given contents
    pub fn with_config(config: &str) -> Self {
        let project = Self::new();
        project.write("fuzzrank.toml", config);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root and return its absolute path
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run fuzzrank with isolated environment
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_stdin(args, "")
    }

    /// Run fuzzrank, feeding `stdin` to the process
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        let mut child = Command::new(fuzzrank_binary())
            .args(args)
            .current_dir(self.dir.path())
            .env_clear()
            .env("HOME", self.dir.path())
            .env("PATH", std::env::var("PATH").unwrap_or_default())
            .env("NO_COLOR", "1")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to execute fuzzrank");

        // The command may exit without reading stdin
        if let Some(mut pipe) = child.stdin.take() {
            let _ = pipe.write_all(stdin.as_bytes());
        }

        child.wait_with_output().expect("Failed to wait for fuzzrank")
    }

    /// Run fuzzrank and assert success
    pub fn run_ok(&self, args: &[&str]) -> Output {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "fuzzrank {:?} failed (exit {:?}):\nstdout: {}\nstderr: {}",
            args,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        output
    }

    /// Run fuzzrank and assert failure with specific exit code
    pub fn run_fails(&self, args: &[&str], expected_code: i32) -> Output {
        let output = self.run(args);
        assert_exit(&output, args, expected_code);
        output
    }
}

pub fn assert_exit(output: &Output, args: &[&str], expected_code: i32) {
    assert_eq!(
        output.status.code(),
        Some(expected_code),
        "fuzzrank {:?} expected exit {} but got {:?}:\nstdout: {}\nstderr: {}",
        args,
        expected_code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Parse JSON from stdout, panicking with helpful message on failure
pub fn parse_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| {
        panic!(
            "Failed to parse JSON: {}\nstdout: {}\nstderr: {}",
            e,
            stdout,
            String::from_utf8_lossy(&output.stderr)
        )
    })
}
