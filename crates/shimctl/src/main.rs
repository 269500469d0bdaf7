use std::ffi::OsString;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gmake_shim::{Invocation, DEFAULT_PROGRAM};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

#[derive(Parser)]
#[command(name = "shimctl")]
#[command(about = "Inspect and exercise the gmake shim")]
struct Cmd {
    /// Program to forward to
    #[arg(long, global = true, default_value = DEFAULT_PROGRAM)]
    program: OsString,

    /// Log spawn details at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print version, code revision and where the program resolves, as JSON
    Report,
    /// Forward the trailing arguments like `gmake`, reporting the failure cause
    Run {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<OsString>,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Report => report(cmd.program),
        Action::Run { args } => run(cmd.program, args),
    }
}

fn report(program: OsString) -> Result<()> {
    let path = std::env::var_os("PATH");
    let doc = report::Report::collect(&program, path.as_deref());
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn run(program: OsString, args: Vec<OsString>) -> Result<()> {
    tracing::info!(program = ?program, args = ?args, "run");
    Invocation::with_args(program, args).run().into_result()
}
