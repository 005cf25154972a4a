//! Appender trait for log output destinations

use super::{error::Result, event::LogEvent, level::LevelSet};

/// A sink that conditionally renders log events.
///
/// Appenders are shared as `Arc<dyn Appender>` so one configured list can be
/// installed on every live logger at once. `append` is responsible for its
/// own level filtering: events whose level is not in [`Appender::levels`]
/// are discarded silently, not an error.
pub trait Appender: Send + Sync {
    fn name(&self) -> &str;

    /// The set of severities this appender accepts.
    fn levels(&self) -> LevelSet;

    fn append(&self, event: &LogEvent) -> Result<()>;

    fn flush(&self) -> Result<()>;
}
