use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;
use url::Url;

/// An isolated HOME plus a file-backed store for one test.
pub struct Sandbox {
    _dir: TempDir,
    pub home: PathBuf,
    pub store: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home");
        let store = dir.path().join("store");
        std::fs::create_dir_all(&home).unwrap();
        Self {
            _dir: dir,
            home,
            store,
        }
    }

    /// `file://` URL of the store directory.
    pub fn store_url(&self) -> String {
        file_url(&self.store)
    }

    /// Run the CLI against the store via `ROSTER_API`.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .env("ROSTER_API", self.store_url())
            .output()
            .expect("Failed to execute CLI")
    }

    /// Run the CLI without any backend configured in the environment.
    pub fn run_unconfigured(&self, args: &[&str]) -> Output {
        self.command(args)
            .env_remove("ROSTER_API")
            .output()
            .expect("Failed to execute CLI")
    }

    /// Run the CLI against the store and expect success.
    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_roster"));
        cmd.args(args);
        cmd.env("HOME", &self.home);
        cmd.env("XDG_CONFIG_HOME", self.home.join("config"));
        cmd.env("XDG_DATA_HOME", self.home.join("data"));
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

pub fn file_url(path: &Path) -> String {
    Url::from_directory_path(path)
        .expect("Failed to convert path to file URL")
        .to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
