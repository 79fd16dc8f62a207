//! Fluent wrapper around assert_cmd::Command.

#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `marginalia` binary.
pub struct MarginaliaCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl MarginaliaCommand {
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    pub fn config(mut self, path: &Path) -> Self {
        self.args.push("--config".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    pub fn data(mut self, path: &Path) -> Self {
        self.args.push("--data".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("marginalia").expect("Failed to find marginalia binary");
        cmd.args(&self.args)
            .env_remove("RUST_LOG")
            .env_remove("MARGINALIA_DATA")
            .env_remove("MARGINALIA_BIND")
            .env_remove("MARGINALIA_PASSWORD_HASH")
            .env_remove("MARGINALIA_LOG_LEVEL");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.assert()
    }

    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    pub fn search(self, query: &str) -> Self {
        self.args(["search", query])
    }

    pub fn show(self, id: &str) -> Self {
        self.args(["show", id])
    }

    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for MarginaliaCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        MarginaliaCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_data() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.json");
        let cmd = MarginaliaCommand::new().data(&path);
        let args = cmd.get_args();
        assert_eq!(args[0], "--data");
        assert_eq!(args[1], path.to_string_lossy());
    }
}
