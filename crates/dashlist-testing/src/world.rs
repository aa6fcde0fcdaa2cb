//! TestWorld pattern for declarative integration test setup.
//!
//! Each world owns a temp directory with:
//! - `data/`: passed as `--data-dir` (config.toml, tabs.toml)
//! - `fixtures/`: JSON payloads handed to `--fixture`

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use dashlist_testing::{FixtureBuilder, TestWorld};
///
/// let world = TestWorld::new()
///     .with_fixture("shop", FixtureBuilder::channels_at_limit().build());
///
/// let result = world.run_list("channels", "shop", &[]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    fixtures_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        let fixtures_dir = temp_dir.path().join("fixtures");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        std::fs::create_dir_all(&fixtures_dir).expect("Failed to create fixtures dir");

        Self {
            temp_dir,
            data_dir,
            fixtures_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of a fixture written with `with_fixture`.
    pub fn fixture_path(&self, name: &str) -> PathBuf {
        self.fixtures_dir.join(format!("{}.json", name))
    }

    /// Write a fixture payload as `fixtures/<name>.json`.
    pub fn with_fixture(self, name: &str, payload: Value) -> Self {
        let content = serde_json::to_string_pretty(&payload).expect("Failed to encode fixture");
        std::fs::write(self.fixture_path(name), content).expect("Failed to write fixture");
        self
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), toml).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Read a file from the data directory, if it exists.
    pub fn read_data_file(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.data_dir.join(name)).ok()
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command, format: &str) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg(format);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("DASHLIST_PATH");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the CLI with plain output.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.execute(args, "plain")
    }

    /// Execute the CLI with JSON output.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        self.execute(args, "json")
    }

    /// `dashlist <list> --fixture <fixture> <extra...>` with JSON output.
    pub fn run_list(&self, list: &str, fixture: &str, extra: &[&str]) -> Result<CliResult> {
        let path = self.fixture_path(fixture);
        let path = path.to_string_lossy();

        let mut args = vec![list, "--fixture", path.as_ref()];
        args.extend_from_slice(extra);
        self.run_json(&args)
    }

    #[allow(deprecated)]
    fn execute(&self, args: &[&str], format: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("dashlist")
            .map_err(|e| anyhow::anyhow!("Failed to find dashlist binary: {}", e))?;

        self.configure_command(&mut cmd, format);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_world_layout() {
        let world = TestWorld::new()
            .with_fixture("empty", json!({"channels": []}))
            .with_config("rows_per_page = 10\n");

        assert!(world.data_dir().starts_with(world.temp_dir()));
        assert!(world.fixture_path("empty").exists());
        assert_eq!(
            world.read_data_file("config.toml").as_deref(),
            Some("rows_per_page = 10\n")
        );
        assert!(world.read_data_file("tabs.toml").is_none());
    }
}
