// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileProcessorPreferences {
    /// Whether to require the .lx extension on input files
    pub require_lx_extension: bool,

    /// Whether to log file size and line metrics after reading
    pub enable_performance_logging: bool,
}

impl Default for FileProcessorPreferences {
    fn default() -> Self {
        Self {
            require_lx_extension: env::var(env_vars::REQUIRE_LX_EXTENSION)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_performance_logging: env::var(env_vars::ENABLE_PERFORMANCE_LOGGING)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalPreferences {
    /// Reject fragments like `*x` instead of emitting the operator and
    /// discarding the trailing characters
    pub strict_operator_fragments: bool,

    /// Whether to collect per-kind token counts
    pub collect_detailed_metrics: bool,

    /// Whether to log a warning when an operator fragment is truncated
    pub warn_on_truncation: bool,

    /// Treat `\n` and `\r` as fragment delimiters in addition to the space
    pub split_on_newlines: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            strict_operator_fragments: env::var(env_vars::LEXICAL_STRICT_OPERATORS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            collect_detailed_metrics: env::var(env_vars::LEXICAL_DETAILED_METRICS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            warn_on_truncation: env::var(env_vars::LEXICAL_WARN_ON_TRUNCATION)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            split_on_newlines: env::var(env_vars::LEXICAL_SPLIT_ON_NEWLINES)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

/// Widest indentation the printer accepts, in spaces per depth level
pub const MAX_INDENT_WIDTH: usize = 16;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrinterPreferences {
    /// Spaces per depth level
    pub indent_width: usize,
}

impl Default for PrinterPreferences {
    fn default() -> Self {
        Self {
            indent_width: env::var(env_vars::PRINTER_INDENT_WIDTH)
                .ok()
                .and_then(|v| parse_indent_width(&v))
                .unwrap_or(crate::config::compile_time::printer::DEFAULT_INDENT_WIDTH),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output
    pub enable_console_logging: bool,

    /// Minimum level that reaches the logger
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var(env_vars::LOGGING_ENABLE_CONSOLE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Out-of-range widths are ignored so the compile-time default applies
fn parse_indent_width(value: &str) -> Option<usize> {
    value
        .trim()
        .parse()
        .ok()
        .filter(|width| *width <= MAX_INDENT_WIDTH)
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub file_processor: FileProcessorPreferences,
    pub lexical: LexicalPreferences,
    pub printer: PrinterPreferences,
    pub logging: LoggingPreferences,
}

/// Environment variable names for configuration
pub mod env_vars {
    // File Processor
    pub const REQUIRE_LX_EXTENSION: &str = "LEXIS_REQUIRE_LX_EXTENSION";
    pub const ENABLE_PERFORMANCE_LOGGING: &str = "LEXIS_ENABLE_PERFORMANCE_LOGGING";

    // Lexical
    pub const LEXICAL_STRICT_OPERATORS: &str = "LEXIS_LEXICAL_STRICT_OPERATORS";
    pub const LEXICAL_DETAILED_METRICS: &str = "LEXIS_LEXICAL_DETAILED_METRICS";
    pub const LEXICAL_WARN_ON_TRUNCATION: &str = "LEXIS_LEXICAL_WARN_ON_TRUNCATION";
    pub const LEXICAL_SPLIT_ON_NEWLINES: &str = "LEXIS_LEXICAL_SPLIT_ON_NEWLINES";

    // Printer
    pub const PRINTER_INDENT_WIDTH: &str = "LEXIS_PRINTER_INDENT_WIDTH";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "LEXIS_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "LEXIS_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "LEXIS_LOGGING_MIN_LEVEL";
}
