#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tp() -> Command {
    cargo_bin_cmd!("timepairs")
}

/// Create a unique test store path inside the system temp dir and remove any
/// existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timepairs.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Initialize a store and add a small dataset useful for many tests
pub fn init_store_with_data(store_path: &str) {
    tp().args(["--store", store_path, "--test", "init"])
        .assert()
        .success();

    tp().args(["--store", store_path, "add", "09:00", "17:30"])
        .assert()
        .success();

    tp().args(["--store", store_path, "add", "12:00", "13:00"])
        .assert()
        .success();
}
