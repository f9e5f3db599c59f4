//! The logging façade.
//!
//! Every call runs the same steps: visibility gate, message assembly, routing
//! to the backend. A call rejected by the gate returns before anything is
//! formatted.
//!
//! ```rust
//! use std::sync::Arc;
//! use privlog::{
//!     configure, Backend, Dispatcher, LogLevel, MemorySink, MessageOptions, PrivacyOption,
//!     StaticVisibility,
//! };
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Dispatcher::with_backend(
//!     configure("com.example.shop", "Checkout"),
//!     StaticVisibility::from_level(LogLevel::Warning),
//!     Backend::Structured(sink.clone()),
//! );
//!
//! logger.log_message(LogLevel::Info, "cart loaded", MessageOptions::here());
//! logger.log_message(
//!     LogLevel::Error,
//!     "card declined",
//!     MessageOptions::here().privacy(PrivacyOption::Sensitive),
//! );
//! assert_eq!(sink.len(), 1);
//! ```

use std::fmt::{self, Write as _};

use crate::{
    config::Configuration,
    level::LogLevel,
    privacy::PrivacyOption,
    record::{CallSite, LogRecord},
    sink::Backend,
    visibility::{DefaultVisibility, Visibility},
};

// =============================================================================
// Per-call options
// =============================================================================

/// Optional parameters for [`Dispatcher::log_record`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordOptions<'a> {
    marker: Option<&'a str>,
    category: Option<&'a str>,
    privacy: PrivacyOption,
}

impl<'a> RecordOptions<'a> {
    /// Level marker, configured category, public.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the level's default marker.
    #[must_use]
    pub fn marker(mut self, marker: &'a str) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Logs under `category` instead of the configured default.
    #[must_use]
    pub fn category(mut self, category: &'a str) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the privacy option. Defaults to public.
    #[must_use]
    pub fn privacy(mut self, privacy: PrivacyOption) -> Self {
        self.privacy = privacy;
        self
    }
}

/// Optional parameters for [`Dispatcher::log_message`].
///
/// The call site is required; [`MessageOptions::here`] and the logging macros
/// fill it in.
#[derive(Clone, Debug)]
pub struct MessageOptions<'a> {
    module: Option<&'a str>,
    marker: Option<&'a str>,
    category: Option<&'a str>,
    privacy: PrivacyOption,
    call_site: CallSite,
}

impl<'a> MessageOptions<'a> {
    /// Options for a call at `call_site`, with every override unset.
    #[must_use]
    pub fn new(call_site: CallSite) -> Self {
        Self {
            module: None,
            marker: None,
            category: None,
            privacy: PrivacyOption::default(),
            call_site,
        }
    }

    /// Uses the caller's file and line, with no function name.
    #[must_use]
    #[track_caller]
    pub fn here() -> Self {
        Self::new(CallSite::caller())
    }

    /// Annotates the message with `[module]`.
    #[must_use]
    pub fn module(mut self, module: &'a str) -> Self {
        self.module = Some(module);
        self
    }

    /// Replaces the level's default marker.
    #[must_use]
    pub fn marker(mut self, marker: &'a str) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Logs under `category` instead of the configured default.
    #[must_use]
    pub fn category(mut self, category: &'a str) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the privacy option. Defaults to public.
    #[must_use]
    pub fn privacy(mut self, privacy: PrivacyOption) -> Self {
        self.privacy = privacy;
        self
    }

    /// Replaces the captured call site.
    #[must_use]
    pub fn call_site(mut self, call_site: CallSite) -> Self {
        self.call_site = call_site;
        self
    }
}

/// Renders `[module] ` or nothing.
struct ModuleTag<'a>(Option<&'a str>);

impl fmt::Display for ModuleTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(module) => write!(f, "[{module}] "),
            None => Ok(()),
        }
    }
}

/// Renders `<function> ` or nothing.
struct FunctionTag<'a>(&'a str);

impl fmt::Display for FunctionTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            Ok(())
        } else {
            write!(f, "{} ", self.0)
        }
    }
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Gates, formats, and routes log calls for one subsystem.
///
/// A dispatcher is meant to live for the whole process, one per
/// subsystem/category pairing. It is `Send + Sync` whenever its visibility
/// policy is, and takes no locks of its own.
#[derive(Debug)]
pub struct Dispatcher<V = DefaultVisibility> {
    config: Configuration,
    visibility: V,
    backend: Backend,
}

impl<V: Visibility> Dispatcher<V> {
    /// Creates a dispatcher writing to standard error.
    #[must_use]
    pub fn new(config: Configuration, visibility: V) -> Self {
        Self::with_backend(config, visibility, Backend::default())
    }

    /// Creates a dispatcher over an explicit backend.
    #[must_use]
    pub fn with_backend(config: Configuration, visibility: V, backend: Backend) -> Self {
        Self {
            config,
            visibility,
            backend,
        }
    }

    /// The subsystem configuration.
    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// The visibility policy read on every call.
    #[must_use]
    pub fn visibility(&self) -> &V {
        &self.visibility
    }

    /// The backend entries are routed to.
    #[must_use]
    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Returns `true` if a call at `level` would reach the backend.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.visibility.should_emit(level)
    }

    /// Logs a structured record as `"<marker> <LEVEL>: <record>"`.
    pub fn log_record(&self, level: LogLevel, record: &LogRecord, options: RecordOptions<'_>) {
        if !self.enabled(level) {
            return;
        }
        let marker = options.marker.unwrap_or_else(|| level.default_marker());
        let mut message = String::new();
        // A failing `Display` in the record's payload truncates the message.
        let _ = write!(message, "{marker} {}: {record}", level.tag());
        self.dispatch(level, &message, options.category, options.privacy);
    }

    /// Logs a free-form message as
    /// `"<marker> <LEVEL>: [<module>] <file>:<line> <function> → <message>"`.
    ///
    /// `file` is reduced to its last path component. The module segment is
    /// left out when no module is set, and the function segment when the call
    /// site has no function name.
    pub fn log_message(&self, level: LogLevel, message: &str, options: MessageOptions<'_>) {
        if !self.enabled(level) {
            return;
        }
        self.emit_message(level, format_args!("{message}"), options);
    }

    /// Formats and routes a free-form message without consulting the gate.
    ///
    /// The logging macros call this after checking [`Dispatcher::enabled`]
    /// themselves, so that suppressed calls skip evaluating their arguments.
    #[doc(hidden)]
    pub fn emit_message(
        &self,
        level: LogLevel,
        message: fmt::Arguments<'_>,
        options: MessageOptions<'_>,
    ) {
        let marker = options.marker.unwrap_or_else(|| level.default_marker());
        let site = &options.call_site;
        let mut text = String::new();
        let _ = write!(
            text,
            "{marker} {}: {}{}:{} {}→ {message}",
            level.tag(),
            ModuleTag(options.module),
            site.file_name(),
            site.line(),
            FunctionTag(site.function()),
        );
        self.dispatch(level, &text, options.category, options.privacy);
    }

    fn dispatch(
        &self,
        level: LogLevel,
        message: &str,
        category: Option<&str>,
        privacy: PrivacyOption,
    ) {
        let category = category.unwrap_or(self.config.default_category.as_str());
        self.backend
            .emit(&self.config.subsystem, category, level, message, privacy);
    }
}

impl Default for Dispatcher {
    /// Default configuration, everything enabled, standard error.
    fn default() -> Self {
        Self::new(Configuration::default(), DefaultVisibility)
    }
}
