//! Backends and the per-severity routing into them.
//!
//! A backend comes in one of two capability tiers:
//!
//! - **structured** ([`StructuredSink`]): one primitive per severity, each
//!   taking a [`RedactionDirective`];
//! - **legacy** ([`LegacySink`]): a single primitive taking a coarse
//!   [`NativeSeverity`] and no privacy information. Everything sent through
//!   this tier is public.
//!
//! The tier is fixed when a [`Backend`] is built, not checked per call.
//!
//! Routing is one function, [`SinkAdapter::emit`]: pick the primitive for the
//! level from a seven-entry table, translate the privacy option into a
//! directive, call the primitive. The translation is the same for every level.

mod memory;
#[cfg(feature = "slog")]
mod slog;
mod writer;

use std::{fmt, sync::Arc};

pub use memory::{Emission, MemorySink};
#[cfg(feature = "slog")]
pub use self::slog::SlogSink;
pub use writer::WriterSink;

use crate::{
    level::{LogLevel, NativeSeverity},
    privacy::{PrivacyOption, RedactionDirective},
};

/// Subsystem and category a backend logs under.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LogHandle {
    subsystem: String,
    category: String,
}

impl LogHandle {
    /// Creates a handle.
    #[must_use]
    pub fn new(subsystem: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            subsystem: subsystem.into(),
            category: category.into(),
        }
    }

    /// Subsystem, e.g. `com.example.app`.
    #[must_use]
    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    /// Category within the subsystem.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Backend with per-severity primitives that understand redaction.
///
/// Implementations must be infallible from the caller's point of view: swallow
/// I/O errors, never panic.
pub trait StructuredSink: Send + Sync {
    /// Returns the handle used for one log call.
    fn acquire_handle(&self, subsystem: &str, category: &str) -> LogHandle {
        LogHandle::new(subsystem, category)
    }

    /// Emits at [`LogLevel::Debug`].
    fn debug(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective);
    /// Emits at [`LogLevel::Info`].
    fn info(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective);
    /// Emits at [`LogLevel::Notice`].
    fn notice(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective);
    /// Emits at [`LogLevel::Warning`].
    fn warning(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective);
    /// Emits at [`LogLevel::Error`].
    fn error(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective);
    /// Emits at [`LogLevel::Critical`].
    fn critical(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective);
    /// Emits at [`LogLevel::Fault`].
    fn fault(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective);
}

/// Reduced-capability backend: coarse severity, no redaction.
pub trait LegacySink: Send + Sync {
    /// Returns the handle used for one log call.
    fn acquire_handle(&self, subsystem: &str, category: &str) -> LogHandle {
        LogHandle::new(subsystem, category)
    }

    /// Emits `message` as public content.
    fn emit_legacy(&self, handle: &LogHandle, severity: NativeSeverity, message: &str);
}

/// A structured primitive, as stored in the routing table.
pub type EmitPrimitive = fn(&dyn StructuredSink, &LogHandle, &str, RedactionDirective);

/// The primitive that handles `level`.
///
/// Adding a level means adding an arm here; there is no fallback.
#[must_use]
pub fn primitive_for(level: LogLevel) -> EmitPrimitive {
    match level {
        LogLevel::Debug => |sink, handle, message, redaction| sink.debug(handle, message, redaction),
        LogLevel::Info => |sink, handle, message, redaction| sink.info(handle, message, redaction),
        LogLevel::Notice => {
            |sink, handle, message, redaction| sink.notice(handle, message, redaction)
        }
        LogLevel::Warning => {
            |sink, handle, message, redaction| sink.warning(handle, message, redaction)
        }
        LogLevel::Error => |sink, handle, message, redaction| sink.error(handle, message, redaction),
        LogLevel::Critical => {
            |sink, handle, message, redaction| sink.critical(handle, message, redaction)
        }
        LogLevel::Fault => |sink, handle, message, redaction| sink.fault(handle, message, redaction),
    }
}

/// One routing decision: built per call, consumed by [`SinkAdapter::emit`].
pub struct SinkAdapter<'a> {
    sink: &'a dyn StructuredSink,
    handle: LogHandle,
    level: LogLevel,
    message: &'a str,
    privacy: PrivacyOption,
}

impl<'a> SinkAdapter<'a> {
    /// Prepares one call; nothing is emitted until [`SinkAdapter::emit`].
    #[must_use]
    pub fn new(
        sink: &'a dyn StructuredSink,
        handle: LogHandle,
        level: LogLevel,
        message: &'a str,
        privacy: PrivacyOption,
    ) -> Self {
        Self {
            sink,
            handle,
            level,
            message,
            privacy,
        }
    }

    /// Calls the level's primitive with the privacy option's directive.
    pub fn emit(self) {
        let primitive = primitive_for(self.level);
        primitive(self.sink, &self.handle, self.message, self.privacy.directive());
    }
}

/// Which tier a [`Backend`] uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    /// Per-severity primitives with redaction.
    Structured,
    /// Single coarse primitive, always public.
    Legacy,
}

/// A backend bound to its capability tier.
///
/// ```rust
/// use std::sync::Arc;
/// use privlog::{Backend, Capability, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let backend = Backend::Structured(sink.clone());
/// assert_eq!(backend.capability(), Capability::Structured);
/// ```
#[derive(Clone)]
pub enum Backend {
    /// Routed through the per-severity table.
    Structured(Arc<dyn StructuredSink>),
    /// Routed through the single coarse primitive.
    Legacy(Arc<dyn LegacySink>),
}

impl Backend {
    /// Wraps a structured backend.
    #[must_use]
    pub fn structured<S: StructuredSink + 'static>(sink: S) -> Self {
        Backend::Structured(Arc::new(sink))
    }

    /// Wraps a legacy backend.
    #[must_use]
    pub fn legacy<S: LegacySink + 'static>(sink: S) -> Self {
        Backend::Legacy(Arc::new(sink))
    }

    /// Binds a backend that supports both tiers to the tier detected at startup.
    #[must_use]
    pub fn with_capability<S>(sink: S, capability: Capability) -> Self
    where
        S: StructuredSink + LegacySink + 'static,
    {
        match capability {
            Capability::Structured => Self::structured(sink),
            Capability::Legacy => Self::legacy(sink),
        }
    }

    /// The tier this backend was bound to.
    #[must_use]
    pub fn capability(&self) -> Capability {
        match self {
            Backend::Structured(_) => Capability::Structured,
            Backend::Legacy(_) => Capability::Legacy,
        }
    }

    /// Sends an already formatted message to the backend.
    pub(crate) fn emit(
        &self,
        subsystem: &str,
        category: &str,
        level: LogLevel,
        message: &str,
        privacy: PrivacyOption,
    ) {
        match self {
            Backend::Structured(sink) => {
                let handle = sink.acquire_handle(subsystem, category);
                SinkAdapter::new(sink.as_ref(), handle, level, message, privacy).emit();
            }
            Backend::Legacy(sink) => {
                let handle = sink.acquire_handle(subsystem, category);
                sink.emit_legacy(&handle, level.native_severity(), message);
            }
        }
    }
}

impl Default for Backend {
    /// Structured output to standard error.
    fn default() -> Self {
        Backend::structured(WriterSink::stderr())
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Backend").field(&self.capability()).finish()
    }
}
