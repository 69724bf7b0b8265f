//! # Command Definition
//!
//! A command is an immutable pairing of an operation (what to compute) and
//! a formatter (how to show it), plus a line of help text. Both halves are
//! tagged variants with documented defaults instead of optional callbacks.

use std::fmt;

use crate::config::CalcConfig;
use crate::format;
use crate::stats::Histogram;

/// Once-iterable sequence of input numbers
pub type NumberStream<'a> = Box<dyn Iterator<Item = f64> + 'a>;

/// Signature shared by every computing operation
pub type OperationFn = fn(NumberStream<'_>, &CalcConfig) -> Value;

/// Raw result of applying an operation to a stream
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single number (sum, mean, ...)
    Scalar(f64),
    /// Two numbers reported together (mean and variance for `rstat`)
    Pair(f64, f64),
    /// A transformed sequence (cumsum, exp, passthrough, ...)
    Series(Vec<f64>),
    /// A binned distribution
    Histogram(Histogram),
}

/// What a command computes
#[derive(Clone, Copy, Default)]
pub enum Operation {
    /// Pass the input through unchanged
    #[default]
    Identity,
    /// Apply a function to the input
    Apply(OperationFn),
}

impl Operation {
    /// Run the operation, consuming the stream
    pub fn apply(&self, stream: NumberStream<'_>, config: &CalcConfig) -> Value {
        match self {
            Operation::Identity => Value::Series(stream.collect()),
            Operation::Apply(function) => function(stream, config),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Operation::Identity)
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Identity => f.write_str("Identity"),
            Operation::Apply(_) => f.write_str("Apply(..)"),
        }
    }
}

/// How a command's value is turned into display text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Formatter {
    /// Generic string conversion
    #[default]
    Display,
    /// One number per line, suitable for piping into another command
    Lines,
    /// Horizontal bar chart
    Histogram,
}

impl Formatter {
    pub fn format(&self, value: &Value, config: &CalcConfig) -> String {
        match (self, value) {
            (Formatter::Lines, Value::Series(values)) => format::format_lines(values),
            (Formatter::Lines, Value::Pair(a, b)) => format::format_lines(&[*a, *b]),
            (Formatter::Histogram, Value::Histogram(hist)) => {
                format::render_histogram(hist, config.tick_char, config.max_width)
            }
            (_, value) => display(value, config),
        }
    }
}

fn display(value: &Value, config: &CalcConfig) -> String {
    match value {
        Value::Scalar(x) => format::format_number(*x),
        Value::Pair(a, b) => format!(
            "({}, {})",
            format::format_number(*a),
            format::format_number(*b)
        ),
        Value::Series(values) => format::format_list(values),
        Value::Histogram(hist) => {
            format::render_histogram(hist, config.tick_char, config.max_width)
        }
    }
}

/// A registered command
#[derive(Debug, Clone, Copy)]
pub struct Command {
    operation: Operation,
    formatter: Formatter,
    help: &'static str,
}

impl Command {
    /// Create a command with the identity operation and display formatter
    pub fn new(help: &'static str) -> Self {
        Self {
            operation: Operation::default(),
            formatter: Formatter::default(),
            help,
        }
    }

    /// Set the function this command applies
    pub fn operation(mut self, function: OperationFn) -> Self {
        self.operation = Operation::Apply(function);
        self
    }

    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn help(&self) -> &'static str {
        self.help
    }

    pub fn get_operation(&self) -> Operation {
        self.operation
    }

    pub fn get_formatter(&self) -> Formatter {
        self.formatter
    }

    /// Apply the operation without formatting
    pub fn apply(&self, stream: NumberStream<'_>, config: &CalcConfig) -> Value {
        self.operation.apply(stream, config)
    }

    /// Apply the operation, then the formatter
    pub fn run(&self, stream: NumberStream<'_>, config: &CalcConfig) -> String {
        let value = self.apply(stream, config);
        self.formatter.format(&value, config)
    }
}
