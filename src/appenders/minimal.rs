//! Minimal console appender

use crate::core::{Appender, LevelSet, LogEvent, Result};
use std::io::Write;

/// Minimal stdout appender.
///
/// Renders only `:<message>:<error>` (segments omitted when empty) and
/// flushes stdout after every line, so output is visible immediately even
/// if the process dies right after the call.
pub struct MinimalAppender {
    name: String,
    levels: LevelSet,
}

impl MinimalAppender {
    pub fn new() -> Self {
        Self {
            name: "minimal".to_string(),
            levels: LevelSet::ALL,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_levels(mut self, levels: LevelSet) -> Self {
        self.levels = levels;
        self
    }

    /// Render an event to its output line, or `None` when the event's level
    /// is not accepted.
    pub fn render(&self, event: &LogEvent) -> Option<String> {
        if !self.levels.accepts(event.level) {
            return None;
        }

        let mut line = String::new();

        if let Some(message) = &event.message {
            if !message.is_empty() {
                line.push(':');
                line.push_str(message);
            }
        }

        if let Some(error) = &event.error {
            if !error.is_empty() {
                line.push(':');
                line.push_str(error);
            }
        }

        Some(line)
    }
}

impl Default for MinimalAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for MinimalAppender {
    fn name(&self) -> &str {
        &self.name
    }

    fn levels(&self) -> LevelSet {
        self.levels
    }

    fn append(&self, event: &LogEvent) -> Result<()> {
        let Some(line) = self.render(event) else {
            return Ok(());
        };

        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }
}
