//! # streamcalc - Command-Line Calculator over Streams of Numbers
//!
//! Reads numbers (one per line) from files or standard input, applies a
//! named operation and prints the result. Output of series commands is one
//! number per line, so calculators chain through pipes:
//!
//! ```text
//! $ seq 1 10 | streamcalc cumsum | streamcalc max
//! 55.0
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  Result<f64>  ┌──────────────┐  lookup  ┌──────────────┐
//! │ NumberReader│──────────────►│  Command     │─────────►│  Command     │
//! │             │               │  Processor   │          │  Registry    │
//! │ - files     │               │              │◄─────────│              │
//! │ - stdin     │               │ - operation  │  Command │ - catalog    │
//! │ - comments  │               │ - formatter  │          │ - help text  │
//! └─────────────┘               └──────┬───────┘          └──────────────┘
//!                                      │ uses
//!                                      ▼
//!                               ┌──────────────┐
//!                               │    stats     │
//!                               │ - Welford    │
//!                               │ - histogram  │
//!                               └──────────────┘
//! ```
//!
//! ## Library use
//!
//! ```
//! use std::sync::Arc;
//! use streamcalc::{CalcConfig, CommandProcessor, CommandRegistry};
//!
//! let processor = CommandProcessor::new(Arc::new(CommandRegistry::standard()), CalcConfig::default());
//! let values = vec![1.0, 2.0, 3.0];
//! assert_eq!(processor.process("sum", Box::new(values.into_iter())).unwrap(), "6.0");
//! ```

pub mod cli;
pub mod cmd_args;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod logging;
pub mod stats;

// Re-export main types for easy access
pub use commands::{Command, CommandProcessor, CommandRegistry, Formatter, NumberStream, Value};
pub use config::CalcConfig;
pub use error::CalcError;
pub use stats::{mean_variance, Histogram, RunningStats};
