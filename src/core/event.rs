//! Log event structure

use super::level::LogLevel;
use super::location::LocationInfo;
use super::logger::Logger;
use std::sync::{Arc, Weak};

/// Immutable snapshot of one log call.
///
/// Built by [`Logger::log`] and handed to every appender in turn. The
/// timestamp is already rendered to text and the error payload is already
/// rendered through `Display`, so the event owns everything it carries.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub location: LocationInfo,
    pub timestamp: String,
    pub level: LogLevel,
    /// Name of the logger that produced this event
    pub name: String,
    /// Non-owning back-reference to the producing logger
    logger: Weak<Logger>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl LogEvent {
    /// Sanitize payload text to prevent log injection.
    ///
    /// Newlines, carriage returns, and tabs are escaped so one log call can
    /// never masquerade as several lines of output.
    fn sanitize(text: &str) -> String {
        text.replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        location: LocationInfo,
        timestamp: String,
        level: LogLevel,
        name: impl Into<String>,
        logger: Weak<Logger>,
        message: Option<String>,
        error: Option<String>,
    ) -> Self {
        Self {
            location,
            timestamp,
            level,
            name: name.into(),
            logger,
            message: message.map(|m| Self::sanitize(&m)),
            error: error.map(|e| Self::sanitize(&e)),
        }
    }

    /// The logger that produced this event, if it is still alive.
    pub fn logger(&self) -> Option<Arc<Logger>> {
        self.logger.upgrade()
    }
}
