//! `gmake`: forward every argument to `make`.
//!
//! No flags of its own and no output of its own. Exit status is 0 when `make`
//! succeeds and 1 otherwise.

use std::process::ExitCode;

use gmake_shim::Invocation;

fn main() -> ExitCode {
    Invocation::from_env().run().exit_code()
}
