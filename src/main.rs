//! # streamcalc Main Entry Point
//!
//! Command-line calculator over streams of numbers.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use streamcalc::cmd_args::CommandLineArgs;
use streamcalc::{cli, logging};

fn main() -> Result<ExitCode> {
    let args = CommandLineArgs::parse();

    // Initialize tracing first before any other logs
    logging::init_tracing(args.verbose());

    let code = cli::run(&args, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(ExitCode::from(code))
}
