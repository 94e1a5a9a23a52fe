//! Logger implementations and the level-filtering service around them

use super::codes::Code;
use super::config;
use super::events::{LogEvent, LogLevel};
use std::sync::{Arc, Mutex, MutexGuard};

pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);

    /// Events retained by this logger, oldest first
    fn buffered_events(&self) -> Vec<LogEvent> {
        Vec::new()
    }
}

pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Console or JSON output when console logging is enabled, otherwise an
    /// in-memory buffer the binary drains after a run
    pub fn with_config() -> Self {
        let min_level = config::get_min_log_level();
        let logger: Arc<dyn Logger> = if !config::use_console_logging() {
            Arc::new(MemoryLogger::new())
        } else if config::use_structured_logging() {
            Arc::new(StructuredLogger)
        } else {
            Arc::new(ConsoleLogger)
        };

        Self::new(logger, min_level)
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    pub fn log_event(&self, mut event: LogEvent) {
        if self.should_log(event.level) {
            event.message = config::truncate_message(&event.message);
            self.logger.log(&event);
        }
    }

    pub fn buffered_events(&self) -> Vec<LogEvent> {
        self.logger.buffered_events()
    }
}

/// Human-readable lines on stderr
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        eprintln!("{}", event.format());
    }
}

/// One JSON object per line on stderr
pub struct StructuredLogger;

impl Logger for StructuredLogger {
    fn log(&self, event: &LogEvent) {
        match event.format_json() {
            Ok(json) => eprintln!("{}", json),
            Err(_) => eprintln!("{}", event.format()),
        }
    }
}

/// Bounded in-memory logger; drops the oldest events once full
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
    capacity: usize,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::with_capacity(config::get_error_buffer_size())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            capacity: capacity.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get_events(&self) -> Vec<LogEvent> {
        self.lock().clone()
    }

    pub fn event_count(&self) -> usize {
        self.lock().len()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn get_warnings(&self) -> Vec<LogEvent> {
        self.lock()
            .iter()
            .filter(|e| e.is_warning())
            .cloned()
            .collect()
    }

    pub fn has_error_with_code(&self, code: Code) -> bool {
        self.lock().iter().any(|e| e.is_error() && e.code == code)
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        let mut events = self.lock();
        if events.len() >= self.capacity {
            let overflow = events.len() + 1 - self.capacity;
            events.drain(0..overflow);
        }
        events.push(event.clone());
    }

    fn buffered_events(&self) -> Vec<LogEvent> {
        self.get_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    #[test]
    fn test_service_filters_by_level() {
        let memory = Arc::new(MemoryLogger::with_capacity(16));
        let service = LoggingService::new(memory.clone(), LogLevel::Warning);

        service.log_event(LogEvent::debug("hidden"));
        service.log_event(LogEvent::info("hidden"));
        service.log_event(LogEvent::warning(
            codes::lexical::OPERATOR_TRUNCATED,
            "kept",
        ));
        service.log_event(LogEvent::error(codes::lexical::UNRECOGNIZED_TOKEN, "kept"));

        assert_eq!(memory.event_count(), 2);
        assert_eq!(memory.get_warnings().len(), 1);
        assert!(memory.has_error_with_code(codes::lexical::UNRECOGNIZED_TOKEN));
        assert_eq!(service.buffered_events().len(), 2);
    }

    #[test]
    fn test_memory_logger_drops_oldest() {
        let memory = MemoryLogger::with_capacity(2);
        for message in ["first", "second", "third"] {
            memory.log(&LogEvent::info(message));
        }

        let messages: Vec<_> = memory
            .get_events()
            .into_iter()
            .map(|e| e.message)
            .collect();
        assert_eq!(messages, vec!["second", "third"]);

        memory.clear();
        assert_eq!(memory.event_count(), 0);
    }

    #[test]
    fn test_console_logger_has_no_buffer() {
        assert!(ConsoleLogger.buffered_events().is_empty());
    }
}
