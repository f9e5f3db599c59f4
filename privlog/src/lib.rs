//! Severity-gated logging with per-entry privacy redaction.
//!
//! This crate separates:
//! - **Visibility**: whether a call is emitted at all (an enable switch and a
//!   minimum [`LogLevel`]).
//! - **Privacy**: how much of an emitted message the backend may show
//!   ([`PrivacyOption`], routed to a [`RedactionDirective`]).
//!
//! A [`Dispatcher`] ties them together for one subsystem. Each call goes
//! through the visibility gate, is formatted (free-form or from a
//! [`LogRecord`]), and is routed to the backend primitive for its level along
//! with the redaction directive for its privacy option.
//!
//! ```rust
//! use privlog::{configure, Dispatcher, LogLevel, PrivacyOption, StaticVisibility};
//!
//! let logger = Dispatcher::new(
//!     configure("com.example.shop", "Payments"),
//!     StaticVisibility::from_level(LogLevel::Info),
//! );
//! let card = "4111 1111 1111 1111";
//!
//! privlog::info!(logger, "checkout started");
//! privlog::error!(logger, module = "Card", privacy = PrivacyOption::Sensitive; "declined: {card}");
//! ```
//!
//! Backends come in two capability tiers, picked once when the [`Backend`] is
//! built:
//! - structured ([`StructuredSink`]): one primitive per level, with redaction;
//! - legacy ([`LegacySink`]): one coarse primitive, everything public.
//!
//! Provided backends: [`WriterSink`] (the default, on standard error),
//! [`MemorySink`], and `SlogSink` behind the `slog` feature.
//!
//! What this crate does not do:
//! - persist, rotate, ship, sample, or buffer logs
//! - report failures: logging calls return `()` and do not panic

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    missing_docs,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::missing_const_for_fn,
    clippy::missing_errors_doc,
    clippy::redundant_pub_crate
)]
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

mod config;
mod dispatch;
mod level;
mod macros;
mod privacy;
mod record;
mod sink;
mod visibility;

pub use config::{configure, Configuration, DEFAULT_CATEGORY, DEFAULT_SUBSYSTEM};
pub use dispatch::{Dispatcher, MessageOptions, RecordOptions};
pub use level::{LogLevel, NativeSeverity, ParseLevelError};
pub use privacy::{PrivacyMask, PrivacyOption, RedactionDirective, PRIVATE_PLACEHOLDER};
pub use record::{file_name, CallSite, LogRecord, SystemMessage};
#[cfg(feature = "slog")]
pub use sink::SlogSink;
pub use sink::{
    primitive_for, Backend, Capability, Emission, EmitPrimitive, LegacySink, LogHandle,
    MemorySink, SinkAdapter, StructuredSink, WriterSink,
};
pub use visibility::{DefaultVisibility, SharedVisibility, StaticVisibility, Visibility};

#[doc(hidden)]
pub mod __private {
    pub use crate::record::{function_from_probe, type_name_of};
}
