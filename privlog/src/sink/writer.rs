//! Line-oriented backend over any `io::Write`.
//!
//! The writer has no native notion of private data, so the directive is
//! applied to the message before it is written. One entry is one line:
//!
//! ```text
//! <subsystem> [<category>] <LEVEL>: <redacted message>
//! ```
//!
//! Legacy-tier lines use the native severity name instead of the level tag.
//! Write errors are dropped.

use std::{
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

use super::{LegacySink, LogHandle, StructuredSink};
use crate::{
    level::{LogLevel, NativeSeverity},
    privacy::RedactionDirective,
};

/// Backend writing redacted lines to `W`. Supports both tiers.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl WriterSink<io::Stderr> {
    /// Writes to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> WriterSink<W> {
    /// Writes to `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_line(&self, handle: &LogHandle, label: &str, text: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(
            writer,
            "{} [{}] {label}: {text}",
            handle.subsystem(),
            handle.category()
        );
        let _ = writer.flush();
    }

    fn write_redacted(
        &self,
        handle: &LogHandle,
        level: LogLevel,
        message: &str,
        redaction: RedactionDirective,
    ) {
        self.write_line(handle, level.tag(), &redaction.apply_to(message));
    }
}

impl<W: Write + Send> StructuredSink for WriterSink<W> {
    fn debug(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.write_redacted(handle, LogLevel::Debug, message, redaction);
    }

    fn info(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.write_redacted(handle, LogLevel::Info, message, redaction);
    }

    fn notice(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.write_redacted(handle, LogLevel::Notice, message, redaction);
    }

    fn warning(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.write_redacted(handle, LogLevel::Warning, message, redaction);
    }

    fn error(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.write_redacted(handle, LogLevel::Error, message, redaction);
    }

    fn critical(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.write_redacted(handle, LogLevel::Critical, message, redaction);
    }

    fn fault(&self, handle: &LogHandle, message: &str, redaction: RedactionDirective) {
        self.write_redacted(handle, LogLevel::Fault, message, redaction);
    }
}

impl<W: Write + Send> LegacySink for WriterSink<W> {
    fn emit_legacy(&self, handle: &LogHandle, severity: NativeSeverity, message: &str) {
        self.write_line(handle, severity.tag(), message);
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::WriterSink;
    use crate::{
        level::NativeSeverity,
        privacy::RedactionDirective,
        sink::{LegacySink, LogHandle, StructuredSink},
    };

    fn output(sink: WriterSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn structured_lines_are_redacted() {
        let sink = WriterSink::new(Vec::new());
        let handle = LogHandle::new("com.example", "Auth");
        sink.info(&handle, "login ok", RedactionDirective::Public);
        sink.error(&handle, "token=abc", RedactionDirective::Private);

        assert_eq!(
            output(sink),
            "com.example [Auth] INFO: login ok\ncom.example [Auth] ERROR: <private>\n"
        );
    }

    #[test]
    fn hashed_lines_do_not_contain_input() {
        let sink = WriterSink::new(Vec::new());
        let handle = LogHandle::new("com.example", "Auth");
        sink.fault(&handle, "alice", RedactionDirective::SensitiveHashed);

        let text = output(sink);
        assert!(text.starts_with("com.example [Auth] FAULT: <mask.hash: '"));
        assert!(!text.contains("alice"));
    }

    #[test]
    fn legacy_lines_are_public() {
        let sink = WriterSink::new(Vec::new());
        let handle = LogHandle::new("com.example", "Auth");
        sink.emit_legacy(&handle, NativeSeverity::Default, "token=abc");

        assert_eq!(output(sink), "com.example [Auth] default: token=abc\n");
    }

    struct Broken;

    impl io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn write_errors_are_swallowed() {
        let sink = WriterSink::new(Broken);
        let handle = LogHandle::new("com.example", "Auth");
        sink.critical(&handle, "still fine", RedactionDirective::Public);
        sink.emit_legacy(&handle, NativeSeverity::Fault, "still fine");
    }
}
