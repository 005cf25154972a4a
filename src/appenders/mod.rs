//! Appender implementations

pub mod console;
pub mod minimal;

pub use console::ConsoleAppender;
pub use minimal::MinimalAppender;

// Re-export the trait for convenience
pub use crate::core::Appender;
