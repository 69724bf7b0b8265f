//! # CLI Frontend
//!
//! Wires parsed arguments, the input reader and the command processor
//! together, and decides what goes to stdout, stderr and the exit status.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;

use crate::cmd_args::CommandLineArgs;
use crate::commands::{CommandProcessor, CommandRegistry, HELP_COMMAND};
use crate::input::{InputSource, NumberReader};

const USAGE: &str = "Usage: streamcalc [command] [files or -]
Reads a list of numbers from the files or standard input if files are missing
and performs the calculation specified by the command.
Available Commands:";

/// Usage banner followed by the indented command list
pub fn usage(registry: &CommandRegistry) -> String {
    let commands: Vec<String> = registry
        .list_help()
        .lines()
        .map(|line| format!("\t{line}"))
        .collect();
    format!("{USAGE}\n{}", commands.join("\n"))
}

/// Run the calculator and return the process exit status
///
/// Unknown or missing commands are reported on `stderr` with status 1.
/// Unreadable or malformed input is returned as an error.
pub fn run<O: Write, E: Write>(
    args: &CommandLineArgs,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<u8> {
    let registry = Arc::new(CommandRegistry::standard());

    let Some(name) = args.command() else {
        writeln!(stderr, "{}", usage(&registry))?;
        return Ok(1);
    };

    if name == HELP_COMMAND {
        writeln!(stderr, "{}", usage(&registry))?;
        return Ok(0);
    }

    let processor = CommandProcessor::new(Arc::clone(&registry), args.config());
    let reader = NumberReader::new(InputSource::from_args(args.files()));

    let outcome =
        itertools::process_results(reader, |numbers| processor.process(name, Box::new(numbers)))?;

    match outcome {
        Ok(text) => {
            writeln!(stdout, "{text}")?;
            Ok(0)
        }
        Err(error) if error.unknown_command().is_some() => {
            writeln!(stderr, "{}", usage(&registry))?;
            writeln!(stderr, "{error}")?;
            Ok(1)
        }
        Err(error) => Err(error.into()),
    }
}
