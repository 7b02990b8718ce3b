#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sr() -> Command {
    cargo_bin_cmd!("shiftroster")
}

/// Create a unique, empty test data directory inside the system temp dir
pub fn setup_test_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftroster", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path.to_string_lossy().to_string()
}

pub fn roster_path(dir: &str) -> PathBuf {
    PathBuf::from(dir).join("roster.csv")
}

pub fn shifts_path(dir: &str) -> PathBuf {
    PathBuf::from(dir).join("shifts.csv")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize both tables inside the given data dir (test mode: the user's
/// config file is never touched)
pub fn init_dir(dir: &str) {
    sr().args(["--dir", dir, "--test", "init"]).assert().success();
}

/// Add a manager via the CLI with optional extra flags
pub fn add_manager(dir: &str, name: &str, extra: &[&str]) {
    let mut args = vec!["--dir", dir, "add", name];
    args.extend_from_slice(extra);
    sr().args(args).assert().success();
}
