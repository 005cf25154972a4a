//! Log level and level-set definitions
//!
//! A single event carries exactly one [`LogLevel`]; an appender's filter is a
//! [`LevelSet`]. The two are deliberately distinct types: a level names one
//! severity, a set names which severities pass a filter.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warning = 3,
    Error = 4,
    Fatal = 5,
}

impl LogLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// The distinct power-of-two bit assigned to this level.
    ///
    /// Bits line up with the flags in [`LevelSet`], so a raw mask can be
    /// tested against a single level with one AND.
    #[inline]
    pub const fn bit(&self) -> u32 {
        1 << (*self as u32)
    }

    /// This level as a one-element [`LevelSet`].
    #[inline]
    pub const fn as_set(&self) -> LevelSet {
        LevelSet::from_bits_retain(self.bit())
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Trace => BrightBlack,
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

bitflags! {
    /// A set of severities an appender accepts.
    ///
    /// Any raw `u32` is a valid mask (`from_bits_retain` semantics); unknown
    /// bits are carried but never match a level.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LevelSet: u32 {
        const TRACE = 1 << 0;
        const DEBUG = 1 << 1;
        const INFO = 1 << 2;
        const WARNING = 1 << 3;
        const ERROR = 1 << 4;
        const FATAL = 1 << 5;
        const ALL = Self::TRACE.bits()
            | Self::DEBUG.bits()
            | Self::INFO.bits()
            | Self::WARNING.bits()
            | Self::ERROR.bits()
            | Self::FATAL.bits();
    }
}

impl LevelSet {
    /// True iff this set shares at least one bit with `level`.
    #[inline]
    pub const fn accepts(&self, level: LogLevel) -> bool {
        self.bits() & level.bit() != 0
    }
}

impl From<LogLevel> for LevelSet {
    fn from(level: LogLevel) -> Self {
        level.as_set()
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        LevelSet::ALL
    }
}

// Serialized as the raw mask so level sets round-trip through config files
// without depending on flag names.
impl Serialize for LevelSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LevelSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(LevelSet::from_bits_retain)
    }
}
