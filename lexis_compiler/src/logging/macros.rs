//! Logging macros; context values accept any `Display` type
//!
//! All macros are no-ops until `init_global_logging` has run.

/// Collect `"key" => value` pairs into owned strings
#[doc(hidden)]
#[macro_export]
macro_rules! __log_context {
    () => {
        ::std::vec::Vec::<(&str, String)>::new()
    };
    ($($key:expr => $value:expr),+) => {
        vec![$(($key, format!("{}", $value))),+]
    };
}

#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr, span = $span:expr $(, $key:expr => $value:expr)*) => {
        $crate::logging::emit(
            $crate::logging::LogEvent::error($code, $message),
            Some($span),
            $crate::__log_context!($($key => $value),*),
        )
    };

    ($code:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        $crate::logging::emit(
            $crate::logging::LogEvent::error($code, $message),
            None,
            $crate::__log_context!($($key => $value),*),
        )
    };
}

#[macro_export]
macro_rules! log_warning {
    ($code:expr, $message:expr, span = $span:expr $(, $key:expr => $value:expr)*) => {
        $crate::logging::emit(
            $crate::logging::LogEvent::warning($code, $message),
            Some($span),
            $crate::__log_context!($($key => $value),*),
        )
    };

    ($code:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        $crate::logging::emit(
            $crate::logging::LogEvent::warning($code, $message),
            None,
            $crate::__log_context!($($key => $value),*),
        )
    };
}

#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)*) => {{
        let event = $crate::logging::LogEvent::success($code, $message);
        $crate::logging::emit(event, None, $crate::__log_context!($($key => $value),*))
    }};
}

#[macro_export]
macro_rules! log_info {
    ($message:expr $(, $key:expr => $value:expr)*) => {{
        let event = $crate::logging::LogEvent::info($message);
        $crate::logging::emit(event, None, $crate::__log_context!($($key => $value),*))
    }};
}

/// Skips formatting entirely unless the configured level admits debug events
#[macro_export]
macro_rules! log_debug {
    ($message:expr $(, $key:expr => $value:expr)*) => {{
        if $crate::logging::config::get_min_log_level() >= $crate::logging::LogLevel::Debug {
            let event = $crate::logging::LogEvent::debug($message);
            $crate::logging::emit(event, None, $crate::__log_context!($($key => $value),*))
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::logging::codes;
    use crate::utils::{Position, Span};

    #[test]
    fn test_macros_accept_display_values_without_global_logger() {
        let span = Span::covering(Position::start(), "3.14");

        log_error!(codes::lexical::UNRECOGNIZED_TOKEN, "Unknown token: [3.14]");
        log_error!(codes::lexical::UNRECOGNIZED_TOKEN, "Unknown token",
            span = span,
            "fragment" => "3.14",
            "index" => 0usize
        );
        log_warning!(codes::lexical::OPERATOR_TRUNCATED, "Truncated", "fragment" => "*x");
        log_success!(codes::success::TOKENIZATION_COMPLETE, "Tokenization completed",
            "tokens" => 11,
            "duration_ms" => 0.25
        );
        log_info!("Processing source", "bytes" => 23);
        log_debug!("Classified fragment", "kind" => "NUMBER");
    }
}
