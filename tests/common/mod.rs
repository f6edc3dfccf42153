#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const URL: &str = "http://example.com";
pub const EMAIL: &str = "johndoe@example.com";

pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        Self { _tmp: tmp, dir }
    }

    pub fn wordlist(&self, name: &str, lines: &[&str]) -> PathBuf {
        let mut body = lines.join("\n");
        body.push('\n');
        self.wordlist_bytes(name, body.as_bytes())
    }

    pub fn wordlist_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, bytes).expect("write wordlist");
        path
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("wordlist-demo");
        cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
        cmd
    }

    /// Command with all required flags set and the delay disabled.
    pub fn scan_cmd(&self, wordlist: &Path) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--url", URL, "--email", EMAIL, "--delay-ms", "0", "--wordlist"])
            .arg(wordlist);
        cmd
    }

    pub fn run_json(&self, wordlist: &Path) -> Value {
        let out = self
            .scan_cmd(wordlist)
            .arg("--json")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn numbered(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("guess{i}")).collect()
}
