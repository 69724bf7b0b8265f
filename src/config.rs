//! Configuration constants and utilities for streamcalc
//!
//! Defaults for histogram rendering and logging, plus the runtime
//! [`CalcConfig`] handed to every command.

/// Default number of histogram bins
pub const DEFAULT_BIN_COUNT: usize = 10;

/// Default character used to draw histogram bars
pub const DEFAULT_TICK_CHAR: char = '#';

/// Default maximum width of a rendered histogram row
pub const DEFAULT_MAX_WIDTH: usize = 80;

/// Environment variable name for overriding the log level
pub const LOG_LEVEL_ENV_VAR: &str = "STREAMCALC_LOG_LEVEL";

/// Log level used when the environment variable is not set
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Get the log filter directive, checking environment variable first, then falling back to default
pub fn get_log_level() -> String {
    std::env::var_os(LOG_LEVEL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .filter(|val| !val.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Runtime settings shared by operations and formatters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcConfig {
    /// Number of equal-width bins used by `hist`
    pub bin_count: usize,
    /// Character repeated to draw each histogram bar
    pub tick_char: char,
    /// Maximum width of a rendered histogram row
    pub max_width: usize,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            bin_count: DEFAULT_BIN_COUNT,
            tick_char: DEFAULT_TICK_CHAR,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl CalcConfig {
    pub fn with_bin_count(mut self, bin_count: usize) -> Self {
        self.bin_count = bin_count.max(1);
        self
    }

    pub fn with_tick_char(mut self, tick_char: char) -> Self {
        self.tick_char = tick_char;
        self
    }

    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }
}
