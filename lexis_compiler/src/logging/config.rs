//! Logging configuration: compile-time buffer limits plus runtime preferences

use crate::config::compile_time::logging::{LOG_BUFFER_SIZE, MAX_LOG_MESSAGE_LENGTH};
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

type EventsLogLevel = crate::logging::events::LogLevel;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Install preferences once; later calls fail
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized".to_string())
}

fn get_runtime_preferences() -> LoggingPreferences {
    RUNTIME_PREFERENCES.get().cloned().unwrap_or_default()
}

pub fn get_min_log_level() -> EventsLogLevel {
    get_runtime_preferences().min_log_level.to_events_log_level()
}

pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

pub fn use_console_logging() -> bool {
    get_runtime_preferences().enable_console_logging
}

/// Maximum events kept by a buffering logger
pub fn get_error_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}

/// Clamp a message to `MAX_LOG_MESSAGE_LENGTH` characters
pub fn truncate_message(message: &str) -> String {
    match message.char_indices().nth(MAX_LOG_MESSAGE_LENGTH) {
        Some((cut, _)) => format!("{}...", &message[..cut]),
        None => message.to_string(),
    }
}

pub fn get_config_summary() -> String {
    let preferences = get_runtime_preferences();
    format!(
        "Logging configuration:\n  min level: {}\n  console: {}\n  structured: {}\n  buffer size: {}",
        preferences.min_log_level.as_str(),
        preferences.enable_console_logging,
        preferences.use_structured_logging,
        LOG_BUFFER_SIZE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_untouched() {
        assert_eq!(truncate_message("Unknown token: [3.14]"), "Unknown token: [3.14]");
    }

    #[test]
    fn test_long_message_truncated() {
        let long = "x".repeat(MAX_LOG_MESSAGE_LENGTH + 10);
        let truncated = truncate_message(&long);
        assert_eq!(truncated.chars().count(), MAX_LOG_MESSAGE_LENGTH + 3);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_config_summary_mentions_buffer() {
        assert!(get_config_summary().contains(&LOG_BUFFER_SIZE.to_string()));
    }
}
