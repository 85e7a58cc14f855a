use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for negcycle with the user config isolated
pub fn negcycle() -> Command {
    let mut cmd = cargo_bin_cmd!("negcycle");
    cmd.env("NEGCYCLE_CONFIG_DIR", "/nonexistent/negcycle-test-config")
        .env_remove("RUST_LOG")
        .env_remove("NEGCYCLE_LOG")
        .env_remove("NEGCYCLE_LOG_LEVEL");
    cmd
}

/// Write a config.toml into `dir` and return its path
#[allow(dead_code)]
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
