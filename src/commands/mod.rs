//! # Commands
//!
//! Registry pattern for the calculator. Each command pairs an operation
//! with a formatter; the processor looks a command up by name, applies the
//! operation to the input stream and formats the result.

// Core infrastructure
pub mod command;
pub mod processor;
pub mod registry;

// Operation implementations
pub mod builtin;

// Re-export main types
pub use command::{Command, Formatter, NumberStream, Operation, OperationFn, Value};
pub use processor::CommandProcessor;
pub use registry::{CommandRegistry, HELP_COMMAND};
