//! # Command Processor
//!
//! Single entry point that runs a named command against a stream and
//! returns display-ready text.

use std::sync::Arc;

use crate::commands::{CommandRegistry, NumberStream};
use crate::config::CalcConfig;
use crate::error::CalcError;

/// Dispatches command names to registry entries
#[derive(Debug, Clone)]
pub struct CommandProcessor {
    registry: Arc<CommandRegistry>,
    config: CalcConfig,
}

impl CommandProcessor {
    pub fn new(registry: Arc<CommandRegistry>, config: CalcConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Run `name` over `stream` and format the result
    ///
    /// The command is looked up before the stream is touched, so an unknown
    /// name never consumes any input.
    pub fn process(&self, name: &str, stream: NumberStream<'_>) -> Result<String, CalcError> {
        let Some(command) = self.registry.get(name) else {
            tracing::debug!("Unknown command requested: {}", name);
            return Err(CalcError::UnknownCommand(name.to_string()));
        };

        tracing::debug!(
            "Processing command '{}' with {:?}",
            name,
            command.get_operation()
        );
        Ok(command.run(stream, &self.config))
    }
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new(Arc::new(CommandRegistry::standard()), CalcConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn stream(values: &[f64]) -> NumberStream<'_> {
        Box::new(values.iter().copied())
    }

    #[test]
    fn processor_should_format_sum() {
        let processor = CommandProcessor::default();
        assert_eq!(processor.process("sum", stream(&[1.0, 2.0, 3.0])).unwrap(), "6.0");
        assert_eq!(processor.process("add", stream(&[1.0, 2.0, 3.0])).unwrap(), "6.0");
    }

    #[test]
    fn processor_should_reject_unknown_command() {
        let processor = CommandProcessor::default();
        let err = processor
            .process("nosuchcommand", stream(&[1.0]))
            .unwrap_err();
        assert_eq!(err.unknown_command(), Some("nosuchcommand"));
    }

    #[test]
    fn processor_should_not_consume_stream_for_unknown_command() {
        let processor = CommandProcessor::default();
        let pulled = Cell::new(0);
        let counting = Box::new(
            [1.0, 2.0]
                .into_iter()
                .inspect(|_| pulled.set(pulled.get() + 1)),
        );

        assert!(processor.process("bogus", counting).is_err());
        assert_eq!(pulled.get(), 0);
    }

    #[test]
    fn processor_should_pass_print_through_unchanged() {
        let processor = CommandProcessor::default();
        let first = processor.process("print", stream(&[1.0, 2.0])).unwrap();
        assert_eq!(first, "1.0\n2.0");

        let again = processor.process("print", stream(&[1.0, 2.0])).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn processor_should_apply_config_to_histogram() {
        let config = CalcConfig::default().with_bin_count(2).with_tick_char('*');
        let processor = CommandProcessor::new(Arc::new(CommandRegistry::standard()), config);

        let rendered = processor
            .process("hist", stream(&[1.0, 2.0, 2.0, 3.0]))
            .unwrap();
        assert_eq!(rendered, "[1,2): *\n[2,3]: ***");
    }

    #[test]
    fn processor_should_format_rstat_as_pair() {
        let processor = CommandProcessor::default();
        let rendered = processor
            .process("rstat", stream(&[1.0, 2.0, 3.0, 4.0]))
            .unwrap();
        assert_eq!(rendered, format!("(2.5, {:?})", 5.0f64 / 3.0));
    }
}
