//! Call-site capturing macros.
//!
//! Rust has no `#function` equivalent, so these macros capture it by declaring
//! a probe fn in the caller's body and reading its type name.

/// Expands to the name of the enclosing function, as a `&'static str`.
///
/// Closures report the function they are defined in.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __privlog_probe() {}
        $crate::__private::function_from_probe($crate::__private::type_name_of(__privlog_probe))
    }};
}

/// Expands to a [`CallSite`](crate::CallSite) for the current location.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new($crate::function_name!(), file!(), line!())
    };
}

/// Builds a [`LogRecord`](crate::LogRecord) stamped with the current call site.
///
/// ```rust
/// fn fetch_profile() -> privlog::LogRecord {
///     privlog::record!("UserAPI", "USR001", "Network", "HTTP 503", "1.0.0")
///         .with_dev_message("profile request failed")
/// }
///
/// assert_eq!(fetch_profile().call_site().function(), "fetch_profile");
/// ```
#[macro_export]
macro_rules! record {
    ($module:expr, $code:expr, $layer:expr, $system_message:expr, $version:expr $(,)?) => {
        $crate::LogRecord::new(
            $module,
            $code,
            $layer,
            $system_message,
            $version,
            $crate::call_site!(),
        )
    };
}

/// Logs a formatted message through a dispatcher.
///
/// Options go between the level and the format string, separated from it by
/// `;`. Each `name = value` calls the [`MessageOptions`](crate::MessageOptions)
/// method of that name.
///
/// Format arguments are only evaluated when the level passes the gate.
///
/// ```rust
/// use privlog::{Dispatcher, LogLevel, PrivacyOption};
///
/// let logger = Dispatcher::default();
/// let user = "alice";
/// privlog::log!(logger, LogLevel::Notice, "signed in");
/// privlog::log!(
///     logger,
///     LogLevel::Error,
///     module = "Auth",
///     privacy = PrivacyOption::Private;
///     "bad password for {user}"
/// );
/// ```
#[macro_export]
macro_rules! log {
    ($dispatcher:expr, $level:expr, $($key:ident = $value:expr),+ ; $($arg:tt)+) => {{
        let dispatcher = &$dispatcher;
        let level: $crate::LogLevel = $level;
        if dispatcher.enabled(level) {
            let options = $crate::MessageOptions::new($crate::call_site!())$(.$key($value))+;
            dispatcher.emit_message(level, format_args!($($arg)+), options);
        }
    }};
    ($dispatcher:expr, $level:expr, $($arg:tt)+) => {{
        let dispatcher = &$dispatcher;
        let level: $crate::LogLevel = $level;
        if dispatcher.enabled(level) {
            let options = $crate::MessageOptions::new($crate::call_site!());
            dispatcher.emit_message(level, format_args!($($arg)+), options);
        }
    }};
}

/// [`log!`] at [`LogLevel::Debug`](crate::LogLevel::Debug).
#[macro_export]
macro_rules! debug {
    ($dispatcher:expr, $($rest:tt)+) => {
        $crate::log!($dispatcher, $crate::LogLevel::Debug, $($rest)+)
    };
}

/// [`log!`] at [`LogLevel::Info`](crate::LogLevel::Info).
#[macro_export]
macro_rules! info {
    ($dispatcher:expr, $($rest:tt)+) => {
        $crate::log!($dispatcher, $crate::LogLevel::Info, $($rest)+)
    };
}

/// [`log!`] at [`LogLevel::Notice`](crate::LogLevel::Notice).
#[macro_export]
macro_rules! notice {
    ($dispatcher:expr, $($rest:tt)+) => {
        $crate::log!($dispatcher, $crate::LogLevel::Notice, $($rest)+)
    };
}

/// [`log!`] at [`LogLevel::Warning`](crate::LogLevel::Warning).
#[macro_export]
macro_rules! warning {
    ($dispatcher:expr, $($rest:tt)+) => {
        $crate::log!($dispatcher, $crate::LogLevel::Warning, $($rest)+)
    };
}

/// [`log!`] at [`LogLevel::Error`](crate::LogLevel::Error).
#[macro_export]
macro_rules! error {
    ($dispatcher:expr, $($rest:tt)+) => {
        $crate::log!($dispatcher, $crate::LogLevel::Error, $($rest)+)
    };
}

/// [`log!`] at [`LogLevel::Critical`](crate::LogLevel::Critical).
#[macro_export]
macro_rules! critical {
    ($dispatcher:expr, $($rest:tt)+) => {
        $crate::log!($dispatcher, $crate::LogLevel::Critical, $($rest)+)
    };
}

/// [`log!`] at [`LogLevel::Fault`](crate::LogLevel::Fault).
#[macro_export]
macro_rules! fault {
    ($dispatcher:expr, $($rest:tt)+) => {
        $crate::log!($dispatcher, $crate::LogLevel::Fault, $($rest)+)
    };
}
