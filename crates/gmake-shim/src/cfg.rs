//! Fixed forwarding defaults.
//!
//! The shim has no config file and defines no flags of its own; every
//! argument belongs to `make`. Anything tunable lives here as a constant.

/// Program the shim forwards to, resolved on the caller's `PATH`.
pub const DEFAULT_PROGRAM: &str = "make";

/// Exit code for a successful child.
pub(crate) const EXIT_SUCCESS: u8 = 0;
/// Exit code for every kind of failure; causes are not distinguished.
pub(crate) const EXIT_FAILURE: u8 = 1;
