//! In-memory backend that records every primitive call.
//!
//! Useful for asserting on what the dispatcher routed, without redaction
//! applied: the message is stored exactly as the backend received it, next to
//! the directive it was asked to apply.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{LegacySink, LogHandle, StructuredSink};
use crate::{
    level::{LogLevel, NativeSeverity},
    privacy::RedactionDirective,
};

/// One recorded backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Emission {
    /// A structured primitive was called.
    Structured {
        /// Subsystem and category of the call.
        handle: LogHandle,
        /// Level whose primitive was invoked.
        primitive: LogLevel,
        /// Message as received, before redaction.
        message: String,
        /// Directive the backend was asked to apply.
        redaction: RedactionDirective,
    },
    /// The legacy primitive was called.
    Legacy {
        /// Subsystem and category of the call.
        handle: LogHandle,
        /// Coarse severity the level collapsed to.
        severity: NativeSeverity,
        /// Message as received, always public.
        message: String,
    },
}

impl Emission {
    /// The message as handed to the backend.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Emission::Structured { message, .. } | Emission::Legacy { message, .. } => message,
        }
    }

    /// Subsystem and category of the call.
    #[must_use]
    pub fn handle(&self) -> &LogHandle {
        match self {
            Emission::Structured { handle, .. } | Emission::Legacy { handle, .. } => handle,
        }
    }
}

/// Backend that keeps emissions in a `Vec`. Supports both tiers.
#[derive(Debug, Default)]
pub struct MemorySink {
    emissions: Mutex<Vec<Emission>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the recorded emissions.
    #[must_use]
    pub fn emissions(&self) -> Vec<Emission> {
        self.lock().clone()
    }

    /// Removes and returns the recorded emissions.
    #[must_use]
    pub fn take(&self) -> Vec<Emission> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of recorded emissions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Emission>> {
        self.emissions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(
        &self,
        handle: &LogHandle,
        primitive: LogLevel,
        message: &str,
        redaction: RedactionDirective,
    ) {
        self.lock().push(Emission::Structured {
            handle: handle.clone(),
            primitive,
            message: message.to_string(),
            redaction,
        });
    }
}

impl StructuredSink for MemorySink {
    fn debug(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.record(handle, LogLevel::Debug, message, redaction);
    }

    fn info(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.record(handle, LogLevel::Info, message, redaction);
    }

    fn notice(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.record(handle, LogLevel::Notice, message, redaction);
    }

    fn warning(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.record(handle, LogLevel::Warning, message, redaction);
    }

    fn error(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.record(handle, LogLevel::Error, message, redaction);
    }

    fn critical(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.record(handle, LogLevel::Critical, message, redaction);
    }

    fn fault(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.record(handle, LogLevel::Fault, message, redaction);
    }
}

impl LegacySink for MemorySink {
    fn emit_legacy(&self, handle: &LogHandle, severity: NativeSeverity, message: &str) {
        self.lock().push(Emission::Legacy {
            handle: handle.clone(),
            severity,
            message: message.to_string(),
        });
    }
}
