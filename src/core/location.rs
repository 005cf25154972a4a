//! Call-site location metadata

use std::fmt;

/// Where a log call happened, captured at the call site.
///
/// The logging macros fill this in with `file!`, `module_path!`, `line!` and
/// `column!`; it is never synthesized after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationInfo {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
    pub column: u32,
}

impl LocationInfo {
    pub const fn new(file: &'static str, function: &'static str, line: u32, column: u32) -> Self {
        Self {
            file,
            function,
            line,
            column,
        }
    }
}

impl fmt::Display for LocationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.file, self.function, self.line, self.column
        )
    }
}
