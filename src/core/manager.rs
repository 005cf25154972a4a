//! Named-logger registry with weak caching
//!
//! The registry maps logger names to [`Weak`] references, so it observes
//! logger liveness without extending it: while any caller holds the `Arc`
//! for a name, every lookup of that name returns the same instance; once
//! the last `Arc` drops, the entry stops resolving and the next lookup
//! constructs a fresh logger from the current default appender list.

use super::appender::Appender;
use super::logger::Logger;
use crate::appenders::ConsoleAppender;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, Weak};

struct ManagerState {
    default_appenders: Vec<Arc<dyn Appender>>,
    loggers: HashMap<String, Weak<Logger>>,
}

/// Registry of named loggers plus the default appender list applied to
/// newly created ones.
///
/// Usable as an explicit context object; process-wide access goes through
/// the crate-level [`configure`] and [`get_logger`] functions, which funnel
/// into a single shared instance.
pub struct LoggerManager {
    state: Mutex<ManagerState>,
}

impl LoggerManager {
    /// A fresh, unconfigured registry. Its default appender list is a
    /// single verbose console appender accepting every level.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ManagerState {
                default_appenders: vec![Arc::new(ConsoleAppender::new())],
                loggers: HashMap::new(),
            }),
        }
    }

    /// Replace the default appender list and install the new list on every
    /// currently-live logger. Entries whose logger has been dropped are
    /// pruned in the same pass.
    pub fn configure(&self, appenders: Vec<Arc<dyn Appender>>) {
        let mut state = self.state.lock();
        state.loggers.retain(|_, entry| match entry.upgrade() {
            Some(logger) => {
                logger.set_appenders(appenders.clone());
                true
            }
            None => false,
        });
        state.default_appenders = appenders;
    }

    /// Return the live logger registered under `name`, or construct one
    /// with the current default appender list.
    ///
    /// Identity is reference identity: two calls while the first result is
    /// still held return the same `Arc` (testable with [`Arc::ptr_eq`]). A
    /// logger recreated after collection gets whatever the default list is
    /// at recreation time.
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        let mut state = self.state.lock();
        if let Some(logger) = state.loggers.get(name).and_then(Weak::upgrade) {
            return logger;
        }
        let logger = Logger::with_appenders(name, state.default_appenders.clone());
        state.loggers.insert(name.to_string(), Arc::downgrade(&logger));
        logger
    }

    /// Number of registry entries that still resolve to a live logger.
    pub fn live_count(&self) -> usize {
        self.state
            .lock()
            .loggers
            .values()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }
}

impl Default for LoggerManager {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: Lazy<LoggerManager> = Lazy::new(LoggerManager::new);

/// The process-wide registry behind [`configure`] and [`get_logger`].
pub fn global() -> &'static LoggerManager {
    &GLOBAL
}

/// Reconfigure the process-wide registry. See [`LoggerManager::configure`].
pub fn configure(appenders: Vec<Arc<dyn Appender>>) {
    GLOBAL.configure(appenders);
}

/// Fetch or create a named logger from the process-wide registry. See
/// [`LoggerManager::get_logger`].
pub fn get_logger(name: &str) -> Arc<Logger> {
    GLOBAL.get_logger(name)
}
