use std::ffi::OsString;
use std::path::PathBuf;

pub use clap::Parser;

use crate::config::{self, CalcConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Command name
    /// Optional. Name of the calculation to run, e.g. 'sum' or 'hist'.
    /// When missing, the usage text and command list are printed.
    #[clap(help = "command to run (use 'help' to list commands)")]
    command: Option<String>,

    /// Input files
    /// Optional. Files to read numbers from, one per line. '-' reads
    /// standard input. With no files, standard input is read.
    #[clap(help = "files to read, '-' for standard input")]
    files: Vec<PathBuf>,

    /// Histogram bin count
    #[clap(
        short = 'b',
        long,
        default_value_t = config::DEFAULT_BIN_COUNT,
        help = "number of histogram bins"
    )]
    bins: usize,

    /// Histogram width
    #[clap(
        short = 'w',
        long,
        default_value_t = config::DEFAULT_MAX_WIDTH,
        help = "maximum width of histogram rows"
    )]
    width: usize,

    /// Histogram tick character
    #[clap(
        short = 't',
        long,
        default_value_t = config::DEFAULT_TICK_CHAR,
        help = "character used to draw histogram bars"
    )]
    tick: char,

    /// Verbose mode
    /// Optional. Print debug logs to standard error.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    command: Option<String>,
    files: Vec<PathBuf>,
    config: CalcConfig,
    verbose: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            command: args.command,
            files: args.files,
            config: CalcConfig::default()
                .with_bin_count(args.bins)
                .with_max_width(args.width)
                .with_tick_char(args.tick),
            verbose: args.verbose,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn config(&self) -> CalcConfig {
        self.config
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
