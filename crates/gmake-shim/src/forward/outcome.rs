use std::io;
use std::process::{ExitCode, ExitStatus};

use anyhow::{bail, Result};

use crate::cfg::{EXIT_FAILURE, EXIT_SUCCESS};

/// How the child ended.
///
/// Only [`Outcome::Success`] maps to exit code 0; every other variant maps to 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Normal exit with a nonzero code.
    Exited(i32),
    /// Abnormal termination. `-1` when the platform reports no signal number.
    Signaled(i32),
    /// The child never started (missing executable, permission denied, ...).
    SpawnFailed(io::ErrorKind),
}

impl Outcome {
    pub fn from_status(status: ExitStatus) -> Self {
        if status.success() {
            return Outcome::Success;
        }
        if let Some(code) = status.code() {
            return Outcome::Exited(code);
        }
        Outcome::Signaled(signal_of(status).unwrap_or(-1))
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Collapsed exit code: 0 or 1.
    #[inline]
    pub fn code(&self) -> u8 {
        if self.is_success() {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    /// Error describing the failure cause, for callers that report it.
    pub fn into_result(self) -> Result<()> {
        match self {
            Outcome::Success => Ok(()),
            Outcome::Exited(code) => bail!("child exited with status {code}"),
            Outcome::Signaled(-1) => bail!("child terminated abnormally"),
            Outcome::Signaled(sig) => bail!("child terminated by signal {sig}"),
            Outcome::SpawnFailed(kind) => bail!("failed to start child: {kind}"),
        }
    }
}

#[cfg(unix)]
fn signal_of(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: ExitStatus) -> Option<i32> {
    None
}
