//! Error types for the logging crate

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error while writing to an output
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Appender-specific failure
    #[error("Appender '{name}' failed: {message}")]
    AppenderError { name: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an appender failure with the appender's name
    pub fn appender(name: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::AppenderError {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
