//! Forward one invocation to a child process and collapse its outcome.
//!
//! `invocation.rs` builds and runs the child; `outcome.rs` classifies how it
//! ended and maps that to the shim's two exit codes.

mod invocation;
mod outcome;

pub use invocation::Invocation;
pub use outcome::Outcome;
