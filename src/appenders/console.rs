//! Verbose console appender

use crate::core::{Appender, LevelSet, LogEvent, Result};
use std::io::Write;

/// Verbose stdout appender.
///
/// Renders `[<timestamp>][<file>:<function>:<line>:<column>]:<message>:<error>`;
/// the `:<message>` and `:<error>` segments appear only when those payloads
/// are non-empty. Events outside the configured level set are discarded
/// silently.
pub struct ConsoleAppender {
    name: String,
    levels: LevelSet,
    #[cfg(feature = "console")]
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            name: "console".to_string(),
            levels: LevelSet::ALL,
            #[cfg(feature = "console")]
            use_colors: false,
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

    /// Tint whole lines by level. Off by default, so the rendered bytes
    /// match the documented format exactly.
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Render an event to its output line, or `None` when the event's level
    /// is not accepted.
    pub fn render(&self, event: &LogEvent) -> Option<String> {
        if !self.levels.accepts(event.level) {
            return None;
        }

        let mut line = format!("[{}][{}]", event.timestamp, event.location);

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

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
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

        #[cfg(feature = "console")]
        {
            if self.use_colors {
                use colored::Colorize;
                let mut out = std::io::stdout().lock();
                writeln!(out, "{}", line.color(event.level.color_code()))?;
                return Ok(());
            }
        }

        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", line)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }
}
