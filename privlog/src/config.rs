//! Identity metadata attached to every emitted entry.

/// Subsystem used when none is configured.
pub const DEFAULT_SUBSYSTEM: &str = "com.privlog.AppLogger";

/// Category used when neither the call nor the configuration names one.
pub const DEFAULT_CATEGORY: &str = "AppLogger";

/// Subsystem and default category for a logging channel.
///
/// The subsystem is usually a reverse-DNS application identifier. The
/// category names the feature or module that logs through the channel.
///
/// ```rust
/// let config = privlog::configure("com.example.shop", "Networking");
/// assert_eq!(config.subsystem, "com.example.shop");
/// assert_eq!(config.default_category, "Networking");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Configuration {
    /// Groups entries from one application or library.
    pub subsystem: String,
    /// Category used for calls that do not pass their own.
    pub default_category: String,
}

impl Configuration {
    /// Builds a configuration from explicit values.
    #[must_use]
    pub fn new(subsystem: impl Into<String>, default_category: impl Into<String>) -> Self {
        Self {
            subsystem: subsystem.into(),
            default_category: default_category.into(),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(DEFAULT_SUBSYSTEM, DEFAULT_CATEGORY)
    }
}

/// Shorthand for [`Configuration::new`].
#[must_use]
pub fn configure(subsystem: impl Into<String>, category: impl Into<String>) -> Configuration {
    Configuration::new(subsystem, category)
}
