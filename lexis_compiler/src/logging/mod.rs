//! Global logging for the Lexis front end
//!
//! A single `LoggingService` is installed once per process. Until then every
//! logging macro is a no-op, so the library can be used without setup.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// Install the configured logging service
pub fn init_global_logging() -> Result<(), String> {
    init_global_logging_with_service(Arc::new(LoggingService::with_config()))?;

    for code in [
        codes::system::INTERNAL_ERROR,
        codes::lexical::UNRECOGNIZED_TOKEN,
        codes::syntax::UNEXPECTED_TOKEN,
    ] {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!("Missing metadata for error code: {}", code));
        }
    }

    crate::log_success!(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized"
    );
    Ok(())
}

pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Attach span and context to `event` and hand it to the global logger
pub fn emit(
    mut event: LogEvent,
    span: Option<crate::utils::Span>,
    context: Vec<(&str, String)>,
) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    if let Some(s) = span {
        event = event.with_span(s);
    }
    for (key, value) in context {
        event = event.with_context(key, &value);
    }
    logger.log_event(event);
}

/// Warnings and errors buffered by the global logger since start-up
pub fn collected_diagnostics() -> Vec<LogEvent> {
    try_get_global_logger()
        .map(|logger| {
            logger
                .buffered_events()
                .into_iter()
                .filter(|e| e.level <= LogLevel::Warning)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_without_logger_is_noop() {
        if is_initialized() {
            return;
        }
        emit(LogEvent::info("ignored"), None, vec![("k", "v".to_string())]);
        assert!(collected_diagnostics().is_empty());
    }

    #[test]
    fn test_init_global_logging_installs_service() {
        let first = init_global_logging();
        assert!(is_initialized());
        if first.is_ok() {
            assert!(init_global_logging().is_err());
        }
    }
}
