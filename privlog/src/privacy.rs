//! Privacy classifications and the redaction directives they route to.
//!
//! A [`PrivacyOption`] is what the caller asks for. A [`RedactionDirective`] is
//! what a backend receives. The mapping between the two is fixed and total, and
//! it is the same for every severity.
//!
//! Directives are also pure string transformations via
//! [`RedactionDirective::apply_to`], for backends that have no native notion
//! of private data and must redact before writing.

use std::borrow::Cow;

use base64::{engine::general_purpose::STANDARD as B64, Engine as _};
use sha2::{Digest, Sha256};

/// Placeholder emitted in place of private or sensitive content.
pub const PRIVATE_PLACEHOLDER: &str = "<private>";

/// Number of digest bytes kept in a hashed placeholder.
const HASH_PREFIX_LEN: usize = 16;

/// How the content of a message should be treated by the sink.
///
/// This is a closed set: every sink must handle every variant. Only the three
/// [`PrivacyMask`] bases can be hashed; there is no hashed public option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PrivacyOption {
    /// Let the backend decide, which in practice hides dynamic content.
    Auto,
    /// Show the content verbatim.
    #[default]
    Public,
    /// Hide the content unless the backend is configured to reveal private data.
    Private,
    /// Always hide the content.
    Sensitive,
    /// Hide the content but emit a stable hash of it, so equal values correlate.
    Mask(PrivacyMask),
}

/// Base classification under a hashed [`PrivacyOption::Mask`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PrivacyMask {
    /// Hashed [`PrivacyOption::Auto`].
    AutoMask,
    /// Hashed [`PrivacyOption::Private`].
    PrivateMask,
    /// Hashed [`PrivacyOption::Sensitive`].
    SensitiveMask,
}

impl PrivacyOption {
    /// Every classification, masked variants included.
    pub const ALL: [PrivacyOption; 7] = [
        PrivacyOption::Auto,
        PrivacyOption::Public,
        PrivacyOption::Private,
        PrivacyOption::Sensitive,
        PrivacyOption::Mask(PrivacyMask::AutoMask),
        PrivacyOption::Mask(PrivacyMask::PrivateMask),
        PrivacyOption::Mask(PrivacyMask::SensitiveMask),
    ];

    /// The directive a sink must apply for this classification.
    #[must_use]
    pub const fn directive(self) -> RedactionDirective {
        match self {
            PrivacyOption::Auto => RedactionDirective::Auto,
            PrivacyOption::Public => RedactionDirective::Public,
            PrivacyOption::Private => RedactionDirective::Private,
            PrivacyOption::Sensitive => RedactionDirective::Sensitive,
            PrivacyOption::Mask(mask) => mask.directive(),
        }
    }

    /// Returns `true` for the hashed variants.
    #[must_use]
    pub const fn is_masked(self) -> bool {
        matches!(self, PrivacyOption::Mask(_))
    }
}

impl PrivacyMask {
    /// The unmasked classification this mask hashes on top of.
    #[must_use]
    pub const fn base(self) -> PrivacyOption {
        match self {
            PrivacyMask::AutoMask => PrivacyOption::Auto,
            PrivacyMask::PrivateMask => PrivacyOption::Private,
            PrivacyMask::SensitiveMask => PrivacyOption::Sensitive,
        }
    }

    const fn directive(self) -> RedactionDirective {
        match self {
            PrivacyMask::AutoMask => RedactionDirective::AutoHashed,
            PrivacyMask::PrivateMask => RedactionDirective::PrivateHashed,
            PrivacyMask::SensitiveMask => RedactionDirective::SensitiveHashed,
        }
    }
}

impl From<PrivacyMask> for PrivacyOption {
    fn from(mask: PrivacyMask) -> Self {
        PrivacyOption::Mask(mask)
    }
}

/// Redaction instruction handed to a structured backend primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RedactionDirective {
    /// Backend default.
    Auto,
    /// Verbatim.
    Public,
    /// Hidden.
    Private,
    /// Always hidden.
    Sensitive,
    /// Backend default, rendered as a hash when hidden.
    AutoHashed,
    /// Hidden, rendered as a hash.
    PrivateHashed,
    /// Always hidden, rendered as a hash.
    SensitiveHashed,
}

impl RedactionDirective {
    /// Short tag, e.g. `"private.hash"`, suitable as a structured log value.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            RedactionDirective::Auto => "auto",
            RedactionDirective::Public => "public",
            RedactionDirective::Private => "private",
            RedactionDirective::Sensitive => "sensitive",
            RedactionDirective::AutoHashed => "auto.hash",
            RedactionDirective::PrivateHashed => "private.hash",
            RedactionDirective::SensitiveHashed => "sensitive.hash",
        }
    }

    /// Returns `true` if the hidden content is replaced by its hash.
    #[must_use]
    pub const fn is_hashed(self) -> bool {
        matches!(
            self,
            RedactionDirective::AutoHashed
                | RedactionDirective::PrivateHashed
                | RedactionDirective::SensitiveHashed
        )
    }

    /// The non-hashed directive with the same visibility.
    #[must_use]
    pub const fn unhashed(self) -> RedactionDirective {
        match self {
            RedactionDirective::AutoHashed => RedactionDirective::Auto,
            RedactionDirective::PrivateHashed => RedactionDirective::Private,
            RedactionDirective::SensitiveHashed => RedactionDirective::Sensitive,
            other => other,
        }
    }

    /// Applies the directive to `message`.
    ///
    /// This method is total. Only [`RedactionDirective::Public`] borrows the
    /// input; every other directive hides it, either behind
    /// [`PRIVATE_PLACEHOLDER`] or behind `<mask.hash: '...'>`.
    ///
    /// The hash is an unsalted SHA-256 prefix, so it correlates equal values
    /// across runs. It is not a secrecy guarantee for low-entropy input.
    #[must_use]
    pub fn apply_to(self, message: &str) -> Cow<'_, str> {
        match self {
            RedactionDirective::Public => Cow::Borrowed(message),
            RedactionDirective::Auto | RedactionDirective::Private | RedactionDirective::Sensitive => {
                Cow::Borrowed(PRIVATE_PLACEHOLDER)
            }
            RedactionDirective::AutoHashed
            | RedactionDirective::PrivateHashed
            | RedactionDirective::SensitiveHashed => {
                Cow::Owned(format!("<mask.hash: '{}'>", hash_digest(message)))
            }
        }
    }
}

fn hash_digest(message: &str) -> String {
    let digest = Sha256::digest(message.as_bytes());
    B64.encode(&digest[..HASH_PREFIX_LEN])
}
