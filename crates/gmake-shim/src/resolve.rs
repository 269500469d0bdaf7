//! Search-path lookup, for reporting where a program would be found.
//!
//! The forwarder never calls this; it leaves lookup to the OS spawn. This
//! mirrors that lookup closely enough for diagnostics.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// First executable named `program` on `path_var`.
///
/// A `program` with more than one path component is checked as given.
pub fn resolve(program: &OsStr, path_var: Option<&OsStr>) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }
    std::env::split_paths(path_var?)
        .map(|dir| dir.join(program))
        .find(|p| is_executable(p))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
