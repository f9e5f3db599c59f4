//! Backend that forwards entries to a `slog::Logger`.
//!
//! `slog` has no privacy concept, so the directive is applied to the message
//! before the record is built, and its tag is attached as the `privacy` key.
//! Every record also carries `subsystem`, `category`, and `level` (the
//! privlog level tag, since `slog` has fewer levels than we do).
//!
//! Level mapping:
//!
//! | Level | `slog` |
//! |-------|--------|
//! | debug | `Debug` |
//! | info, notice | `Info` |
//! | warning | `Warning` |
//! | error | `Error` |
//! | critical, fault | `Critical` |
//!
//! Every record that reaches the sink is handed to the logger's drain,
//! `Debug` included, whatever the build profile.

use slog::{Level, Logger, Record, RecordLocation, RecordStatic};

use super::{LegacySink, LogHandle, StructuredSink};
use crate::{
    level::{LogLevel, NativeSeverity},
    privacy::RedactionDirective,
};

// Records are built by hand rather than through `slog::info!` and friends:
// those macros also apply slog's compile-time level ceiling, which drops
// `Debug` in release builds. Filtering is the dispatcher's job.
static LOCATION: RecordLocation = RecordLocation {
    file: file!(),
    line: line!(),
    column: column!(),
    function: "",
    module: module_path!(),
};

/// Structured and legacy backend over `slog`.
#[derive(Clone, Debug)]
pub struct SlogSink {
    logger: Logger,
}

impl SlogSink {
    /// Wraps `logger`. Its drains decide where records end up.
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// The wrapped logger.
    #[must_use]
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    fn forward(
        &self,
        level: Level,
        tag: &str,
        handle: &LogHandle,
        message: &str,
        redaction: RedactionDirective,
    ) {
        let text = redaction.apply_to(message);
        let statics = RecordStatic {
            location: &LOCATION,
            tag: "",
            level,
        };
        self.logger.log(&Record::new(
            &statics,
            &format_args!("{text}"),
            slog::b!(
                "subsystem" => handle.subsystem(),
                "category" => handle.category(),
                "level" => tag,
                "privacy" => redaction.tag()
            ),
        ));
    }

    fn forward_level(
        &self,
        level: LogLevel,
        handle: &LogHandle,
        message: &str,
        redaction: RedactionDirective,
    ) {
        self.forward(slog_level(level), level.tag(), handle, message, redaction);
    }
}

/// The `slog` level a privlog level is recorded at.
fn slog_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Debug => Level::Debug,
        LogLevel::Info | LogLevel::Notice => Level::Info,
        LogLevel::Warning => Level::Warning,
        LogLevel::Error => Level::Error,
        LogLevel::Critical | LogLevel::Fault => Level::Critical,
    }
}

impl StructuredSink for SlogSink {
    fn debug(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.forward_level(LogLevel::Debug, handle, message, redaction);
    }

    fn info(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.forward_level(LogLevel::Info, handle, message, redaction);
    }

    fn notice(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.forward_level(LogLevel::Notice, handle, message, redaction);
    }

    fn warning(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.forward_level(LogLevel::Warning, handle, message, redaction);
    }

    fn error(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.forward_level(LogLevel::Error, handle, message, redaction);
    }

    fn critical(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.forward_level(LogLevel::Critical, handle, message, redaction);
    }

    fn fault(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.forward_level(LogLevel::Fault, handle, message, redaction);
    }
}

impl LegacySink for SlogSink {
    fn emit_legacy(&self, handle: &LogHandle, severity: NativeSeverity, message: &str) {
        let level = match severity {
            NativeSeverity::Debug => Level::Debug,
            NativeSeverity::Info | NativeSeverity::Default => Level::Info,
            NativeSeverity::Error => Level::Error,
            NativeSeverity::Fault => Level::Critical,
        };
        self.forward(
            level,
            severity.tag(),
            handle,
            message,
            RedactionDirective::Public,
        );
    }
}
