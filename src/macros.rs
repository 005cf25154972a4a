//! Logging macros with automatic call-site capture.
//!
//! The macros are the normal way to log: they capture the call site with
//! `file!`, `module_path!`, `line!` and `column!`, format the message like
//! `println!`, and optionally attach an error payload.
//!
//! # Examples
//!
//! ```
//! use fanlog::info;
//!
//! let logger = fanlog::get_logger("server");
//!
//! let port = 8080;
//! info!(logger, "listening on port {}", port);
//! ```

/// Capture the current call site as a [`LocationInfo`](crate::LocationInfo).
#[macro_export]
macro_rules! location {
    () => {
        $crate::LocationInfo::new(file!(), module_path!(), line!(), column!())
    };
}

/// Log at an explicit level, with optional `error = <expr>` payload.
///
/// # Examples
///
/// ```
/// use fanlog::{log, LogLevel};
///
/// let logger = fanlog::get_logger("jobs");
/// log!(logger, LogLevel::Info, "job {} finished", 7);
///
/// let err = std::io::Error::other("disk full");
/// log!(logger, LogLevel::Error, error = err, "job {} failed", 8);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, error = $err:expr, $($arg:tt)+) => {
        $logger.log(
            $level,
            Some(format!($($arg)+)),
            Some($err.to_string()),
            $crate::location!(),
        )
    };
    ($logger:expr, $level:expr, error = $err:expr) => {
        $logger.log($level, None, Some($err.to_string()), $crate::location!())
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, Some(format!($($arg)+)), None, $crate::location!())
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// use fanlog::debug;
///
/// let logger = fanlog::get_logger("cache");
/// debug!(logger, "hit ratio: {:.2}", 0.97);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message, optionally with an error payload.
///
/// # Examples
///
/// ```
/// use fanlog::error;
///
/// let logger = fanlog::get_logger("db");
/// let cause = std::io::Error::other("connection reset");
/// error!(logger, error = cause, "query failed after {} retries", 3);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::appenders::ConsoleAppender;
    use crate::core::{LevelSet, LogLevel, Logger};
    use std::sync::Arc;

    fn silent() -> Arc<Logger> {
        // Console appender with an empty level set renders nothing.
        Logger::with_appenders(
            "macros",
            vec![Arc::new(ConsoleAppender::new().with_levels(LevelSet::empty()))],
        )
    }

    #[test]
    fn test_log_macro() {
        let logger = silent();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
        assert_eq!(logger.metrics().delivered(), 2);
    }

    #[test]
    fn test_log_macro_with_error() {
        let logger = silent();
        let cause = std::io::Error::other("boom");
        log!(logger, LogLevel::Error, error = cause, "attempt {}", 1);
        let bare = std::io::Error::other("bare");
        log!(logger, LogLevel::Error, error = bare);
        assert_eq!(logger.metrics().delivered(), 2);
    }

    #[test]
    fn test_level_macros() {
        let logger = silent();
        trace!(logger, "Trace {}", 1);
        debug!(logger, "Debug {}", 2);
        info!(logger, "Info {}", 3);
        warning!(logger, "Warning {}", 4);
        error!(logger, "Error {}", 5);
        fatal!(logger, "Fatal {}", 6);
        assert_eq!(logger.metrics().delivered(), 6);
    }
}
