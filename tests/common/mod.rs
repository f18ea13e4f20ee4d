//! Common test utilities for spooksearch integration tests
//!
//! - CLI invocation with an isolated config directory
//! - Query file fixtures

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::{NamedTempFile, TempDir};

pub const EMAIL: &str = "me@example.com";
pub const API_KEY: &str = "abc123";

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CliResponse {
    pub fn contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle)
    }

    pub fn count(&self, needle: &str) -> usize {
        self.stdout.matches(needle).count()
    }
}

/// Isolated environment for one CLI run
pub struct TestEnv {
    pub config_dir: TempDir,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            config_dir: TempDir::new().expect("Failed to create temp config dir"),
        }
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_dir.path().join("config.toml"), content)
            .expect("Failed to write config");
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_spooksearch"));
        cmd.env("SPOOKSEARCH_CONFIG_DIR", self.config_dir.path());
        cmd.env_remove("SPOOKSEARCH_EMAIL");
        cmd.env_remove("SPOOKSEARCH_API_KEY");
        cmd.env_remove("SPOOKSEARCH_ENDPOINT");
        cmd.env_remove("RUST_LOG");
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd
    }

    pub fn run(&self, args: &[&str]) -> CliResponse {
        let output = self.command().args(args).output().expect("Failed to execute command");
        parse_output(output)
    }
}

/// Run the CLI with the given arguments in a fresh environment
pub fn spooksearch(args: &[&str]) -> CliResponse {
    TestEnv::new().run(args)
}

/// Run a search batch against `endpoint` with the default credentials
pub fn search(endpoint: &str, file: &Path, extra: &[&str]) -> CliResponse {
    let file = file.to_string_lossy().to_string();
    let mut args = vec!["-e", EMAIL, "-k", API_KEY, "-f", file.as_str(), "--endpoint", endpoint];
    args.extend_from_slice(extra);
    spooksearch(&args)
}

/// Write a query file fixture
pub fn query_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create query file");
    file.write_all(content.as_bytes()).expect("Failed to write query file");
    file
}

fn parse_output(output: Output) -> CliResponse {
    CliResponse {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(1),
    }
}
