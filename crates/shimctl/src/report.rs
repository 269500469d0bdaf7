use std::ffi::OsStr;
use std::process::Command;

use serde::Serialize;

/// Diagnostic snapshot printed by `shimctl report`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub name: &'static str,
    pub version: &'static str,
    pub code_rev: String,
    pub program: String,
    /// Absolute location of `program` on the search path, if any.
    pub resolved: Option<String>,
}

impl Report {
    pub fn collect(program: &OsStr, path_var: Option<&OsStr>) -> Self {
        let resolved = gmake_shim::resolve(program, path_var);
        if resolved.is_none() {
            tracing::warn!(program = ?program, "not found on PATH");
        }
        Self {
            name: "gmake-shim",
            version: gmake_shim::VERSION,
            code_rev: current_git_rev(),
            program: program.to_string_lossy().into_owned(),
            resolved: resolved.map(|p| p.to_string_lossy().into_owned()),
        }
    }
}

/// Commit the binary reports: `GIT_COMMIT` at build time, then at run time,
/// then `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    non_empty(option_env!("GIT_COMMIT").map(str::to_string))
        .or_else(|| non_empty(std::env::var("GIT_COMMIT").ok()))
        .or_else(|| non_empty(git_head()))
        .unwrap_or_else(|| "unknown".to_string())
}

fn non_empty(rev: Option<String>) -> Option<String> {
    rev.map(|r| r.trim().to_string()).filter(|r| !r.is_empty())
}

fn git_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}
