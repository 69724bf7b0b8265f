//! # Command Registry
//!
//! Owns the catalog of named commands. Built once at startup and read-only
//! afterwards, so it can be shared behind an `Arc` without locking.

use std::collections::BTreeMap;

use crate::commands::{builtin, Command, Formatter};

/// Name of the sentinel command the frontend answers with the usage text
pub const HELP_COMMAND: &str = "help";

/// Mapping from command name to [`Command`]
///
/// Names are kept sorted so that [`list_help`](Self::list_help) is ordered
/// by name regardless of registration order.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Command>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the standard catalog
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register_default_commands();
        registry
    }

    /// Register all standard commands
    ///
    /// Registration order matters only for duplicate names: the last
    /// registration under a name wins.
    fn register_default_commands(&mut self) {
        use builtin::*;

        self.register("sum", Command::new("Add a list of numbers").operation(sum));
        self.register("add", Command::new("see sum").operation(sum));
        self.register("max", Command::new("Max").operation(max));
        self.register("min", Command::new("Min").operation(min));
        self.register(
            "prod",
            Command::new("Multiply a list of numbers").operation(product),
        );
        self.register(
            "hist",
            Command::new("Produce a histogram")
                .operation(histogram)
                .formatter(Formatter::Histogram),
        );
        self.register("mean", Command::new("Mean").operation(mean));
        self.register("median", Command::new("Median").operation(median));
        self.register("var", Command::new("Variance").operation(variance));
        self.register("std", Command::new("Standard Deviation").operation(std_dev));
        self.register(
            "cumsum",
            Command::new("Cumulative sum")
                .operation(cumulative_sum)
                .formatter(Formatter::Lines),
        );
        self.register(
            "cumprod",
            Command::new("Cumulative product")
                .operation(cumulative_product)
                .formatter(Formatter::Lines),
        );
        self.register(
            "exp",
            Command::new("Exponentiate every element in the list")
                .operation(exp)
                .formatter(Formatter::Lines),
        );
        self.register(
            "log",
            Command::new("Take the log of every element in the list")
                .operation(ln)
                .formatter(Formatter::Lines),
        );
        self.register(
            "print",
            Command::new("Just print the (cleaned) input").formatter(Formatter::Lines),
        );
        self.register(HELP_COMMAND, Command::new("Print this message"));
        self.register(
            "rstat",
            Command::new("Computes mean & variance with lower memory usage")
                .operation(running_stats),
        );
    }

    /// Insert a command, replacing any existing entry with the same name
    pub fn register(&mut self, name: impl Into<String>, command: Command) {
        let name = name.into();
        if self.commands.insert(name.clone(), command).is_some() {
            tracing::debug!("Replaced existing command: {}", name);
        } else {
            tracing::debug!("Registered command: {}", name);
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// Registered names in lexicographic order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// One `name<TAB>help` line per command, sorted by name
    pub fn list_help(&self) -> String {
        self.commands
            .iter()
            .map(|(name, command)| format!("{}\t{}", name, command.help()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Get count of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
