//! Main logger implementation

use super::{
    appender::Appender, error::Result, event::LogEvent, level::LogLevel, location::LocationInfo,
    metrics::LoggerMetrics, timestamp::TimestampFormat,
};
use crate::appenders::ConsoleAppender;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};

/// A named fan-out point.
///
/// Every log call builds one [`LogEvent`] and pushes it to each appender in
/// list order; each appender decides via its own [`LevelSet`] whether to
/// render it. Loggers are always handled as `Arc<Logger>` so events can
/// carry a non-owning back-reference to their producer and so the
/// [`LoggerManager`](super::manager::LoggerManager) registry can observe
/// liveness without extending it.
///
/// [`LevelSet`]: super::level::LevelSet
pub struct Logger {
    name: String,
    appenders: RwLock<Vec<Arc<dyn Appender>>>,
    timestamp_format: TimestampFormat,
    metrics: Arc<LoggerMetrics>,
    me: Weak<Logger>,
}

impl Logger {
    /// Create a logger with the built-in default: a single verbose console
    /// appender accepting every level.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Self::with_appenders(name, vec![Arc::new(ConsoleAppender::new())])
    }

    /// Create a logger with exactly the given appender list.
    ///
    /// An empty list is honored as-is: such a logger discards everything.
    #[must_use]
    pub fn with_appenders(name: impl Into<String>, appenders: Vec<Arc<dyn Appender>>) -> Arc<Self> {
        Self::with_config(name, appenders, TimestampFormat::default())
    }

    #[must_use]
    pub fn with_config(
        name: impl Into<String>,
        appenders: Vec<Arc<dyn Appender>>,
        timestamp_format: TimestampFormat,
    ) -> Arc<Self> {
        Arc::new_cyclic(|me| Self {
            name: name.into(),
            appenders: RwLock::new(appenders),
            timestamp_format,
            metrics: Arc::new(LoggerMetrics::new()),
            me: me.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot of the current appender list.
    pub fn appenders(&self) -> Vec<Arc<dyn Appender>> {
        self.appenders.read().clone()
    }

    /// Replace the whole appender list.
    ///
    /// Used by the registry's `configure` to push a new list onto every
    /// live logger; the appenders themselves are shared, not cloned.
    pub fn set_appenders(&self, appenders: Vec<Arc<dyn Appender>>) {
        *self.appenders.write() = appenders;
    }

    pub fn add_appender(&self, appender: Arc<dyn Appender>) {
        self.appenders.write().push(appender);
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Build an event and fan it out to every appender in list order.
    ///
    /// Logging never fails at the call site: a failing appender is reported
    /// to stderr and counted in [`LoggerMetrics`], and the fan-out continues
    /// with the remaining appenders.
    pub fn log(
        &self,
        level: LogLevel,
        message: Option<String>,
        error: Option<String>,
        location: LocationInfo,
    ) {
        let event = LogEvent::new(
            location,
            self.timestamp_format.now(),
            level,
            self.name.clone(),
            self.me.clone(),
            message,
            error,
        );

        let appenders = self.appenders.read();
        for appender in appenders.iter() {
            if let Err(e) = appender.append(&event) {
                eprintln!("[fanlog] appender '{}' failed: {}", appender.name(), e);
                self.metrics.record_appender_failure();
            }
        }
        self.metrics.record_delivered();
    }

    pub fn trace(&self, message: Option<String>, error: Option<String>, location: LocationInfo) {
        self.log(LogLevel::Trace, message, error, location);
    }

    pub fn debug(&self, message: Option<String>, error: Option<String>, location: LocationInfo) {
        self.log(LogLevel::Debug, message, error, location);
    }

    pub fn info(&self, message: Option<String>, error: Option<String>, location: LocationInfo) {
        self.log(LogLevel::Info, message, error, location);
    }

    pub fn warning(&self, message: Option<String>, error: Option<String>, location: LocationInfo) {
        self.log(LogLevel::Warning, message, error, location);
    }

    pub fn error(&self, message: Option<String>, error: Option<String>, location: LocationInfo) {
        self.log(LogLevel::Error, message, error, location);
    }

    pub fn fatal(&self, message: Option<String>, error: Option<String>, location: LocationInfo) {
        self.log(LogLevel::Fatal, message, error, location);
    }

    /// Flush every appender. The first failure wins.
    pub fn flush(&self) -> Result<()> {
        let appenders = self.appenders.read();
        for appender in appenders.iter() {
            appender.flush()?;
        }
        Ok(())
    }
}
