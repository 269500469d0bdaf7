//! Process forwarding for the `gmake` shim.
//!
//! The shim hands its whole invocation to an external `make`:
//! - arguments after the program name, verbatim and in order;
//! - the complete environment, unfiltered;
//! - inherited stdin/stdout/stderr, so output is live and unbuffered.
//!
//! The child's outcome is then collapsed to two exit codes: `0` when `make`
//! succeeded, `1` for anything else (nonzero exit, signal, spawn failure).
//! `make` flags and build semantics are not interpreted here.

pub mod cfg;
pub mod forward;
pub mod resolve;

pub use cfg::DEFAULT_PROGRAM;
pub use forward::{Invocation, Outcome};
pub use resolve::resolve;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
