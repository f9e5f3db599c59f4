//! Structured log records and call-site metadata.
//!
//! A [`LogRecord`] is built once at the call site, rendered once by the
//! dispatcher, and dropped. Its rendering is a fixed template with no policy
//! branching, so equal records always render to identical text.

use std::{borrow::Cow, error::Error as StdError, fmt, sync::Arc};

// =============================================================================
// CallSite
// =============================================================================

/// Function, file, and line of a log call.
///
/// Use [`call_site!`](crate::call_site) to capture all three, or
/// [`CallSite::caller`] when only file and line are needed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallSite {
    function: Cow<'static, str>,
    file: Cow<'static, str>,
    line: u32,
}

impl CallSite {
    /// Builds a call site from explicit values.
    #[must_use]
    pub fn new(
        function: impl Into<Cow<'static, str>>,
        file: impl Into<Cow<'static, str>>,
        line: u32,
    ) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
        }
    }

    /// Captures the caller's file and line. The function name is left empty.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self::new("", location.file(), location.line())
    }

    /// Function name as captured.
    #[must_use]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// File path as captured, possibly absolute.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Last path component of [`CallSite::file`].
    #[must_use]
    pub fn file_name(&self) -> &str {
        file_name(&self.file)
    }

    /// Line number.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }
}

/// Returns the last component of `path`, accepting `/` and `\` separators.
///
/// ```rust
/// assert_eq!(privlog::file_name("/a/b/c/File.ext"), "File.ext");
/// assert_eq!(privlog::file_name("File.ext"), "File.ext");
/// ```
#[must_use]
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Returns the type name of the value's type.
#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Turns the type path of a probe fn declared inside a function into the
/// name of that function.
#[doc(hidden)]
#[must_use]
pub fn function_from_probe(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::__privlog_probe").unwrap_or(path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}

// =============================================================================
// SystemMessage
// =============================================================================

/// The system-facing payload of a [`LogRecord`].
///
/// Any variant can be rendered; the record prints it with `Display`.
#[derive(Clone, Debug)]
pub enum SystemMessage {
    /// Plain text.
    Text(String),
    /// An error value. Rendering appends its `source()` chain.
    Error(Arc<dyn StdError + Send + Sync>),
    /// Structured data, rendered as compact JSON.
    #[cfg(feature = "serde")]
    Json(serde_json::Value),
}

impl SystemMessage {
    /// Wraps an error value.
    #[must_use]
    pub fn error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        SystemMessage::Error(Arc::new(error))
    }
}

impl fmt::Display for SystemMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemMessage::Text(text) => f.write_str(text),
            SystemMessage::Error(error) => {
                write!(f, "{error}")?;
                let mut source = error.source();
                while let Some(cause) = source {
                    write!(f, ": {cause}")?;
                    source = cause.source();
                }
                Ok(())
            }
            #[cfg(feature = "serde")]
            SystemMessage::Json(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for SystemMessage {
    fn from(text: &str) -> Self {
        SystemMessage::Text(text.to_string())
    }
}

impl From<String> for SystemMessage {
    fn from(text: String) -> Self {
        SystemMessage::Text(text)
    }
}

impl From<Cow<'_, str>> for SystemMessage {
    fn from(text: Cow<'_, str>) -> Self {
        SystemMessage::Text(text.into_owned())
    }
}

impl From<Box<dyn StdError + Send + Sync>> for SystemMessage {
    fn from(error: Box<dyn StdError + Send + Sync>) -> Self {
        SystemMessage::Error(Arc::from(error))
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Value> for SystemMessage {
    fn from(value: serde_json::Value) -> Self {
        SystemMessage::Json(value)
    }
}

// =============================================================================
// LogRecord
// =============================================================================

/// Immutable bundle of contextual fields describing one log event.
///
/// The system message is required and there is no `Default`. Fields cannot
/// be changed after construction; the `with_*` builders consume the record.
///
/// ```rust
/// use privlog::{CallSite, LogRecord};
///
/// let record = LogRecord::new(
///     "UserAPI",
///     "USR001",
///     "Network",
///     "connection reset",
///     "1.0.0",
///     CallSite::new("fetch_profile", "/src/api/user.rs", 42),
/// )
/// .with_dev_message("Request started");
///
/// assert!(record.to_string().starts_with(
///     "[UserAPI] [Network] [1.0.0] -> Log captured in fetch_profile (line 42, user.rs)"
/// ));
/// ```
#[derive(Clone, Debug)]
pub struct LogRecord {
    module: String,
    code: String,
    layer: String,
    dev_message: String,
    system_message: SystemMessage,
    localized_message: String,
    version: String,
    call_site: CallSite,
}

impl LogRecord {
    /// Builds a record. Developer and localized messages start empty.
    #[must_use]
    pub fn new(
        module: impl Into<String>,
        code: impl Into<String>,
        layer: impl Into<String>,
        system_message: impl Into<SystemMessage>,
        version: impl Into<String>,
        call_site: CallSite,
    ) -> Self {
        Self {
            module: module.into(),
            code: code.into(),
            layer: layer.into(),
            dev_message: String::new(),
            system_message: system_message.into(),
            localized_message: String::new(),
            version: version.into(),
            call_site,
        }
    }

    /// Sets the developer-facing message.
    #[must_use]
    pub fn with_dev_message(mut self, message: impl Into<String>) -> Self {
        self.dev_message = message.into();
        self
    }

    /// Sets the user-facing, localized message.
    #[must_use]
    pub fn with_localized_message(mut self, message: impl Into<String>) -> Self {
        self.localized_message = message.into();
        self
    }

    /// Component that produced the record.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Stable identifier of the event.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Architectural layer, e.g. `Network`.
    #[must_use]
    pub fn layer(&self) -> &str {
        &self.layer
    }

    /// Developer-facing message, empty if unset.
    #[must_use]
    pub fn dev_message(&self) -> &str {
        &self.dev_message
    }

    /// System-facing payload.
    #[must_use]
    pub fn system_message(&self) -> &SystemMessage {
        &self.system_message
    }

    /// User-facing message, empty if unset.
    #[must_use]
    pub fn localized_message(&self) -> &str {
        &self.localized_message
    }

    /// Application version the record was built by.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Where the record was built.
    #[must_use]
    pub fn call_site(&self) -> &CallSite {
        &self.call_site
    }

    /// Renders the record with the fixed multi-line template.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let function = self.call_site.function();
        let file = self.call_site.file_name();
        let line = self.call_site.line();
        writeln!(
            f,
            "[{}] [{}] [{}] -> Log captured in {function} (line {line}, {file})",
            self.module, self.layer, self.version
        )?;
        writeln!(f, "- Code        : {}", self.code)?;
        writeln!(f, "- Message Dev : {}", self.dev_message)?;
        writeln!(f, "- System Msg  : {}", self.system_message)?;
        writeln!(f, "- Localized   : {}", self.localized_message)?;
        writeln!(f, "- Function    : {function}")?;
        writeln!(f, "- File        : {file}")?;
        writeln!(f, "- Line        : {line}")?;
        write!(f, "- Version     : {}", self.version)
    }
}

#[cfg(test)]
mod tests {
    use std::{error::Error as StdError, fmt};

    use super::{file_name, function_from_probe, CallSite, LogRecord, SystemMessage};

    #[derive(Debug)]
    struct Timeout;

    impl fmt::Display for Timeout {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("timed out")
        }
    }

    impl StdError for Timeout {}

    #[derive(Debug)]
    struct FetchFailed(Timeout);

    impl fmt::Display for FetchFailed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("fetch failed")
        }
    }

    impl StdError for FetchFailed {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    fn sample() -> LogRecord {
        LogRecord::new(
            "UserAPI",
            "USR001",
            "Network",
            "HTTP 503",
            "1.0.0",
            CallSite::new("fetch_profile", "/Users/dev/app/src/user.rs", 42),
        )
        .with_dev_message("Request started")
        .with_localized_message("Memuat profil pengguna")
    }

    #[test]
    fn renders_fixed_template() {
        let expected = "\
[UserAPI] [Network] [1.0.0] -> Log captured in fetch_profile (line 42, user.rs)
- Code        : USR001
- Message Dev : Request started
- System Msg  : HTTP 503
- Localized   : Memuat profil pengguna
- Function    : fetch_profile
- File        : user.rs
- Line        : 42
- Version     : 1.0.0";
        assert_eq!(sample().render(), expected);
    }

    #[test]
    fn rendering_is_deterministic() {
        let record = sample();
        assert_eq!(record.render(), record.render());
        assert_eq!(record.render(), record.clone().render());
    }

    #[test]
    fn empty_optional_messages_render_as_empty() {
        let record = LogRecord::new("M", "C", "L", "", "v", CallSite::new("f", "f.rs", 1));
        let rendered = record.render();
        assert!(rendered.contains("- Message Dev : \n"));
        assert!(rendered.contains("- Localized   : \n"));
    }

    #[test]
    fn error_payload_renders_source_chain() {
        let message = SystemMessage::error(FetchFailed(Timeout));
        assert_eq!(message.to_string(), "fetch failed: timed out");
    }

    #[test]
    fn file_name_strips_directories() {
        assert_eq!(file_name("/a/b/c/File.ext"), "File.ext");
        assert_eq!(file_name(r"C:\src\main.rs"), "main.rs");
        assert_eq!(file_name(""), "");
    }

    #[test]
    fn probe_path_reduces_to_function_name() {
        assert_eq!(
            function_from_probe("app::net::connect::__privlog_probe"),
            "connect"
        );
        assert_eq!(
            function_from_probe("app::net::connect::{{closure}}::{{closure}}::__privlog_probe"),
            "connect"
        );
    }

    #[test]
    fn caller_captures_this_file() {
        let site = CallSite::caller();
        assert_eq!(site.file_name(), "record.rs");
        assert_eq!(site.function(), "");
    }
}
