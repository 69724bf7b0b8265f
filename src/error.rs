//! # Error Types
//!
//! Typed errors surfaced by the calculator library. The binary wraps these
//! in `anyhow` at the top level.

use thiserror::Error;

/// Errors raised while reading input or dispatching a command
#[derive(Debug, Error)]
pub enum CalcError {
    /// The requested command is not in the registry
    #[error("Command not found: {0}")]
    UnknownCommand(String),

    /// A non-blank, non-comment line that does not parse as a number
    #[error("{source_name}:{line}: cannot parse '{content}' as a number")]
    MalformedInput {
        source_name: String,
        line: usize,
        content: String,
    },

    /// A source could not be opened or read
    #[error("{source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },
}

impl CalcError {
    /// Name of the unknown command, if this is an `UnknownCommand` error
    pub fn unknown_command(&self) -> Option<&str> {
        match self {
            CalcError::UnknownCommand(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_message() {
        let err = CalcError::UnknownCommand("frobnicate".to_string());
        assert_eq!(err.to_string(), "Command not found: frobnicate");
        assert_eq!(err.unknown_command(), Some("frobnicate"));
    }

    #[test]
    fn test_malformed_input_message_names_line() {
        let err = CalcError::MalformedInput {
            source_name: "data.txt".to_string(),
            line: 3,
            content: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "data.txt:3: cannot parse 'abc' as a number"
        );
        assert!(err.unknown_command().is_none());
    }
}
