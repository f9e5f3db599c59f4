//! Severity levels.
//!
//! Levels are totally ordered by their numeric priority. The dispatcher only
//! ever compares priorities; the tag, marker, and native severity are used for
//! formatting and at the backend boundary.

use std::{fmt, str::FromStr};

/// Severity of a log entry, from least to most important.
///
/// Ordering (`<`, `>=`, ...) follows [`LogLevel::priority`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LogLevel {
    /// Development-only detail.
    Debug,
    /// Helpful but not essential information.
    Info,
    /// Normal but noteworthy conditions.
    Notice,
    /// Something unexpected that the program recovered from.
    Warning,
    /// An operation failed.
    Error,
    /// A failure that compromises a larger part of the program.
    Critical,
    /// A bug or system-level failure.
    Fault,
}

impl LogLevel {
    /// Every level, ordered by ascending priority.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Notice,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
        LogLevel::Fault,
    ];

    /// Upper-case tag used in message prefixes, e.g. `"WARNING"`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Notice => "NOTICE",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
            LogLevel::Fault => "FAULT",
        }
    }

    /// Numeric priority, `1` for [`LogLevel::Debug`] up to `7` for [`LogLevel::Fault`].
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            LogLevel::Debug => 1,
            LogLevel::Info => 2,
            LogLevel::Notice => 3,
            LogLevel::Warning => 4,
            LogLevel::Error => 5,
            LogLevel::Critical => 6,
            LogLevel::Fault => 7,
        }
    }

    /// Marker prepended to messages when the caller does not supply one.
    #[must_use]
    pub const fn default_marker(self) -> &'static str {
        match self {
            LogLevel::Debug => "🐛",
            LogLevel::Info => "ℹ️",
            LogLevel::Notice => "📌",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
            LogLevel::Critical => "🔥",
            LogLevel::Fault => "💥",
        }
    }

    /// The coarser severity understood by legacy backends.
    #[must_use]
    pub const fn native_severity(self) -> NativeSeverity {
        match self {
            LogLevel::Debug => NativeSeverity::Debug,
            LogLevel::Info => NativeSeverity::Info,
            LogLevel::Notice | LogLevel::Warning => NativeSeverity::Default,
            LogLevel::Error => NativeSeverity::Error,
            LogLevel::Critical | LogLevel::Fault => NativeSeverity::Fault,
        }
    }

    /// Returns `true` if an entry at `self` passes a `minimum` threshold.
    #[must_use]
    pub const fn is_at_least(self, minimum: LogLevel) -> bool {
        self.priority() >= minimum.priority()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseLevelError {
    input: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level `{}`", self.input)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    /// Parses a level tag case-insensitively (`"warning"`, `"WARNING"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLevelError {
                input: s.to_string(),
            })
    }
}

/// Severity type of the reduced-capability legacy backend tier.
///
/// Several [`LogLevel`]s collapse onto the same native severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NativeSeverity {
    /// Debug-only entries.
    Debug,
    /// Informational entries.
    Info,
    /// The backend's default persistence class.
    Default,
    /// Process-level errors.
    Error,
    /// System-level or multi-process faults.
    Fault,
}

impl NativeSeverity {
    /// Lower-case name, e.g. `"default"`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            NativeSeverity::Debug => "debug",
            NativeSeverity::Info => "info",
            NativeSeverity::Default => "default",
            NativeSeverity::Error => "error",
            NativeSeverity::Fault => "fault",
        }
    }
}
