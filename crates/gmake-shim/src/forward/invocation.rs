use std::ffi::OsString;
use std::process::{Command, Stdio};

use super::Outcome;
use crate::cfg::DEFAULT_PROGRAM;

/// Everything handed to the child: program name, argument vector, environment.
///
/// Invariants:
/// - `args` excludes the program name and is passed through untouched.
/// - `env` is the complete child environment; nothing is inherited beyond it.
#[derive(Clone, Debug)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub env: Vec<(OsString, OsString)>,
}

impl Invocation {
    pub fn new<P, A, E, K, V>(program: P, args: A, env: E) -> Self
    where
        P: Into<OsString>,
        A: IntoIterator,
        A::Item: Into<OsString>,
        E: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            env: env.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Snapshot of the running process: `make`, argv minus argv[0], full environment.
    pub fn from_env() -> Self {
        Self::new(
            DEFAULT_PROGRAM,
            std::env::args_os().skip(1),
            std::env::vars_os(),
        )
    }

    /// Same snapshot as [`Invocation::from_env`] but with explicit arguments.
    pub fn with_args<P, A>(program: P, args: A) -> Self
    where
        P: Into<OsString>,
        A: IntoIterator,
        A::Item: Into<OsString>,
    {
        Self::new(program, args, std::env::vars_os())
    }

    /// Child command with the snapshot environment and inherited stdio.
    ///
    /// The program is looked up on the `PATH` carried by `env`.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .env_clear()
            .envs(self.env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Spawn, block until the child exits, and classify the result.
    pub fn run(&self) -> Outcome {
        tracing::debug!(
            program = ?self.program,
            args = ?self.args,
            env_vars = self.env.len(),
            "spawn"
        );
        let outcome = match self.command().status() {
            Ok(status) => Outcome::from_status(status),
            Err(err) => {
                tracing::warn!(program = ?self.program, error = %err, "spawn_failed");
                Outcome::SpawnFailed(err.kind())
            }
        };
        tracing::info!(outcome = ?outcome, exit = outcome.code(), "child_done");
        outcome
    }
}
