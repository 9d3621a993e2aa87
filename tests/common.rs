#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn rcardio() -> Command {
    cargo_bin_cmd!("rcardio")
}

/// Isolated environment: a private config file and storage directory.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Sandbox whose configuration sets a home location, so the map is usable.
    pub fn with_home(lat: f64, lng: f64) -> Self {
        let sb = Self::new();
        fs::write(
            sb.config_path(),
            format!("home_location: [{lat}, {lng}]\n"),
        )
        .expect("write config");
        sb
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("rcardio.conf")
    }

    pub fn storage_dir(&self) -> PathBuf {
        self.dir.path().join("storage")
    }

    pub fn slot_path(&self) -> PathBuf {
        self.storage_dir().join("workouts.json")
    }

    /// Command preloaded with `--config` and `--storage` pointing into the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = rcardio();
        cmd.arg("--config")
            .arg(self.config_path())
            .arg("--storage")
            .arg(self.storage_dir());
        cmd
    }

    pub fn add_running(&self, lat: f64, lng: f64, distance: &str, duration: &str, cadence: &str) {
        self.cmd()
            .args(["add", "--kind", "running"])
            .args(["--lat", &lat.to_string(), "--lng", &lng.to_string()])
            .args(["--distance", distance, "--duration", duration])
            .args(["--cadence", cadence])
            .assert()
            .success();
    }

    pub fn add_cycling(&self, lat: f64, lng: f64, distance: &str, duration: &str, elevation: &str) {
        self.cmd()
            .args(["add", "--kind", "cycling"])
            .args(["--lat", &lat.to_string(), "--lng", &lng.to_string()])
            .args(["--distance", distance, "--duration", duration])
            .args(["--elevation", elevation])
            .assert()
            .success();
    }

    /// Stored records, as raw JSON.
    pub fn stored(&self) -> Vec<serde_json::Value> {
        read_records(&self.slot_path())
    }
}

pub fn read_records(path: &Path) -> Vec<serde_json::Value> {
    let raw = fs::read_to_string(path).expect("read storage slot");
    serde_json::from_str(&raw).expect("storage slot is a JSON array")
}
