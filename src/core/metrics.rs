//! Logger metrics for observability
//!
//! Appender failures are swallowed by the fan-out rather than surfaced to
//! the logging call site; these counters are how that policy stays visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters tracking fan-out health for one logger.
///
/// # Example
///
/// ```
/// use fanlog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_delivered();
/// metrics.record_appender_failure();
///
/// assert_eq!(metrics.delivered(), 1);
/// assert_eq!(metrics.appender_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Number of events fanned out to the appender list
    delivered: AtomicU64,

    /// Number of individual appender append calls that returned an error
    appender_failures: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            delivered: AtomicU64::new(0),
            appender_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn appender_failures(&self) -> u64 {
        self.appender_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_appender_failure(&self) -> u64 {
        self.appender_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Failure rate as a percentage of delivered events (0.0 - 100.0).
    ///
    /// Returns 0.0 if nothing has been delivered.
    pub fn failure_rate(&self) -> f64 {
        let delivered = self.delivered() as f64;
        if delivered == 0.0 {
            0.0
        } else {
            (self.appender_failures() as f64 / delivered) * 100.0
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.delivered.store(0, Ordering::Relaxed);
        self.appender_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            delivered: AtomicU64::new(self.delivered()),
            appender_failures: AtomicU64::new(self.appender_failures()),
        }
    }
}
