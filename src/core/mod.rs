//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod event;
pub mod level;
pub mod location;
pub mod logger;
pub mod manager;
pub mod metrics;
pub mod timestamp;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use event::LogEvent;
pub use level::{LevelSet, LogLevel};
pub use location::LocationInfo;
pub use logger::Logger;
pub use manager::{configure, get_logger, global, LoggerManager};
pub use metrics::LoggerMetrics;
pub use timestamp::TimestampFormat;
