//! Visibility policies: whether to log at all, and from which level.
//!
//! The dispatcher is generic over [`Visibility`] and reads it on every call.
//! Policies are read, never written, by the dispatcher.

use std::sync::{
    atomic::{AtomicBool, AtomicU8, Ordering},
    Arc,
};

use crate::level::LogLevel;

/// Policy queried before every log call.
pub trait Visibility {
    /// Global switch. When `false`, nothing is emitted.
    fn is_logging_enabled(&self) -> bool;

    /// Lowest level that is emitted.
    fn minimum_level(&self) -> LogLevel;

    /// Returns `true` if an entry at `level` should reach the backend.
    fn should_emit(&self, level: LogLevel) -> bool {
        self.is_logging_enabled() && level.is_at_least(self.minimum_level())
    }
}

impl<V: Visibility + ?Sized> Visibility for &V {
    fn is_logging_enabled(&self) -> bool {
        (**self).is_logging_enabled()
    }

    fn minimum_level(&self) -> LogLevel {
        (**self).minimum_level()
    }
}

impl<V: Visibility + ?Sized> Visibility for Box<V> {
    fn is_logging_enabled(&self) -> bool {
        (**self).is_logging_enabled()
    }

    fn minimum_level(&self) -> LogLevel {
        (**self).minimum_level()
    }
}

impl<V: Visibility + ?Sized> Visibility for Arc<V> {
    fn is_logging_enabled(&self) -> bool {
        (**self).is_logging_enabled()
    }

    fn minimum_level(&self) -> LogLevel {
        (**self).minimum_level()
    }
}

/// Permissive policy: everything is logged, from [`LogLevel::Debug`] up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultVisibility;

impl Visibility for DefaultVisibility {
    fn is_logging_enabled(&self) -> bool {
        true
    }

    fn minimum_level(&self) -> LogLevel {
        LogLevel::Debug
    }
}

/// Fixed policy chosen at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct StaticVisibility {
    /// Global switch.
    pub enabled: bool,
    /// Lowest emitted level.
    pub minimum_level: LogLevel,
}

impl StaticVisibility {
    /// Creates an enabled policy with the given threshold.
    #[must_use]
    pub const fn from_level(minimum_level: LogLevel) -> Self {
        Self {
            enabled: true,
            minimum_level,
        }
    }

    /// Creates a policy that suppresses every level.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            minimum_level: LogLevel::Debug,
        }
    }
}

impl Default for StaticVisibility {
    fn default() -> Self {
        Self::from_level(LogLevel::Debug)
    }
}

impl Visibility for StaticVisibility {
    fn is_logging_enabled(&self) -> bool {
        self.enabled
    }

    fn minimum_level(&self) -> LogLevel {
        self.minimum_level
    }
}

/// Policy that can be changed at runtime while dispatchers hold it.
///
/// Share it with `Arc<SharedVisibility>`. Each field is a separate relaxed
/// atomic, so a log call racing with [`SharedVisibility::set_enabled`] and
/// [`SharedVisibility::set_minimum_level`] may see the new value of one
/// field and the old value of the other. Each read is still a valid value.
#[derive(Debug)]
pub struct SharedVisibility {
    enabled: AtomicBool,
    minimum: AtomicU8,
}

impl SharedVisibility {
    /// Creates a policy with the given initial state.
    #[must_use]
    pub fn new(enabled: bool, minimum_level: LogLevel) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            minimum: AtomicU8::new(minimum_level.priority()),
        }
    }

    /// Turns logging on or off.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Changes the threshold.
    pub fn set_minimum_level(&self, level: LogLevel) {
        self.minimum.store(level.priority(), Ordering::Relaxed);
    }

    /// Copies the current state into a [`StaticVisibility`].
    #[must_use]
    pub fn snapshot(&self) -> StaticVisibility {
        StaticVisibility {
            enabled: self.is_logging_enabled(),
            minimum_level: self.minimum_level(),
        }
    }
}

impl Default for SharedVisibility {
    fn default() -> Self {
        Self::new(true, LogLevel::Debug)
    }
}

impl From<StaticVisibility> for SharedVisibility {
    fn from(policy: StaticVisibility) -> Self {
        Self::new(policy.enabled, policy.minimum_level)
    }
}

impl Visibility for SharedVisibility {
    fn is_logging_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    fn minimum_level(&self) -> LogLevel {
        let priority = self.minimum.load(Ordering::Relaxed);
        // Only `set_minimum_level` and `new` write here, both from a LogLevel.
        LogLevel::ALL
            .into_iter()
            .find(|level| level.priority() == priority)
            .unwrap_or(LogLevel::Debug)
    }
}
