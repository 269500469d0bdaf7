#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::tempdir;

const SHIMCTL: &str = env!("CARGO_BIN_EXE_shimctl");

fn stand_in(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("make");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn run_reports_exit_status_cause() {
    let dir = tempdir().unwrap();
    let make = stand_in(dir.path(), "exit 2");
    let out = Command::new(SHIMCTL)
        .arg("run")
        .arg("--program")
        .arg(&make)
        .args(["--", "all"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("child exited with status 2"), "{stderr}");
}

#[test]
fn run_forwards_trailing_args() {
    let dir = tempdir().unwrap();
    let make = stand_in(dir.path(), "printf '%s\\n' \"$@\"");
    let out = Command::new(SHIMCTL)
        .arg("run")
        .arg("--program")
        .arg(&make)
        .args(["--", "build", "-j4"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"build\n-j4\n");
}

#[test]
fn report_prints_json() {
    let dir = tempdir().unwrap();
    let make = stand_in(dir.path(), "exit 0");
    let out = Command::new(SHIMCTL)
        .arg("report")
        .env("PATH", dir.path())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["name"], "gmake-shim");
    assert_eq!(json["resolved"], make.to_string_lossy().as_ref());
}
