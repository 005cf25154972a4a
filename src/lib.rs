//! # fanlog
//!
//! Synchronous fan-out logging for service code, built around a named-logger
//! registry.
//!
//! ## Features
//!
//! - **Named loggers**: `get_logger("svc")` returns the same instance for as
//!   long as anyone holds it; the registry keeps only weak references
//! - **Multi-appender fan-out**: each logger pushes every event to an ordered
//!   appender list; each appender filters with its own level set
//! - **Retroactive reconfiguration**: `configure(..)` swaps the appender list
//!   on every live logger at once
//! - **Call-site capture**: the logging macros record file, module, line and
//!   column automatically
//!
//! ## Example
//!
//! ```
//! use fanlog::prelude::*;
//! use fanlog::info;
//! use std::sync::Arc;
//!
//! fanlog::configure(vec![Arc::new(
//!     MinimalAppender::new().with_levels(LevelSet::INFO | LevelSet::ERROR),
//! )]);
//!
//! let logger = fanlog::get_logger("payments");
//! info!(logger, "captured {} cents", 1250);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MinimalAppender};
    pub use crate::core::{
        Appender, LevelSet, LocationInfo, LogEvent, LogLevel, Logger, LoggerError, LoggerManager,
        LoggerMetrics, Result, TimestampFormat,
    };
}

pub use crate::appenders::{ConsoleAppender, MinimalAppender};
pub use crate::core::{
    configure, get_logger, global, Appender, LevelSet, LocationInfo, LogEvent, LogLevel, Logger,
    LoggerError, LoggerManager, LoggerMetrics, Result, TimestampFormat,
};
