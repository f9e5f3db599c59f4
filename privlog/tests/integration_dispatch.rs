//! End-to-end tests for the dispatch pipeline.
//!
//! These tests drive a `Dispatcher` over a `MemorySink` and verify that:
//! - the visibility gate admits exactly the levels at or above the threshold
//! - every level/privacy pair reaches the right primitive with the right directive
//! - free-form and record messages are formatted as documented
//! - the legacy tier still emits, with privacy collapsed to public

use std::sync::Arc;

use privlog::{
    configure, Backend, CallSite, Dispatcher, Emission, LogHandle, LogLevel, LogRecord,
    MemorySink, MessageOptions, NativeSeverity, PrivacyMask, PrivacyOption, RecordOptions,
    RedactionDirective, StaticVisibility,
};

fn structured(policy: StaticVisibility) -> (Dispatcher<StaticVisibility>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let dispatcher = Dispatcher::with_backend(
        configure("com.example.app", "AppLogger"),
        policy,
        Backend::Structured(sink.clone()),
    );
    (dispatcher, sink)
}

fn site() -> CallSite {
    CallSite::new("sync", "/a/b/c/File.ext", 9)
}

#[test]
fn levels_below_threshold_are_suppressed() {
    for minimum in LogLevel::ALL {
        let (dispatcher, sink) = structured(StaticVisibility::from_level(minimum));
        for level in LogLevel::ALL {
            dispatcher.log_message(level, "probe", MessageOptions::new(site()));
            let emitted = sink.take().len();
            let expected = usize::from(level.priority() >= minimum.priority());
            assert_eq!(emitted, expected, "level {level:?}, minimum {minimum:?}");
        }
    }
}

#[test]
fn disabled_policy_suppresses_every_level() {
    for minimum in LogLevel::ALL {
        let (dispatcher, sink) = structured(StaticVisibility {
            enabled: false,
            minimum_level: minimum,
        });
        let record = LogRecord::new("M", "C", "L", "", "1", site());
        for level in LogLevel::ALL {
            dispatcher.log_message(level, "probe", MessageOptions::new(site()));
            dispatcher.log_record(level, &record, RecordOptions::new());
        }
        assert!(sink.is_empty());
    }
}

#[test]
fn all_level_privacy_pairs_route_to_matching_primitive() {
    let (dispatcher, sink) = structured(StaticVisibility::default());
    for level in LogLevel::ALL {
        for privacy in PrivacyOption::ALL {
            dispatcher.log_message(level, "x", MessageOptions::new(site()).privacy(privacy));

            let emissions = sink.take();
            assert_eq!(emissions.len(), 1, "{level:?} / {privacy:?}");
            match &emissions[0] {
                Emission::Structured {
                    primitive,
                    redaction,
                    ..
                } => {
                    assert_eq!(*primitive, level);
                    assert_eq!(*redaction, privacy.directive());
                }
                other => panic!("unexpected emission {other:?}"),
            }
        }
    }
}

#[test]
fn masked_privacy_selects_hashed_directive() {
    let cases = [
        (PrivacyMask::AutoMask, RedactionDirective::AutoHashed),
        (PrivacyMask::PrivateMask, RedactionDirective::PrivateHashed),
        (PrivacyMask::SensitiveMask, RedactionDirective::SensitiveHashed),
    ];
    let (dispatcher, sink) = structured(StaticVisibility::default());
    for (mask, expected) in cases {
        dispatcher.log_message(
            LogLevel::Error,
            "x",
            MessageOptions::new(site()).privacy(PrivacyOption::Mask(mask)),
        );
        match &sink.take()[0] {
            Emission::Structured { redaction, .. } => {
                assert_eq!(*redaction, expected);
                assert_eq!(redaction.unhashed(), mask.base().directive());
            }
            other => panic!("unexpected emission {other:?}"),
        }
    }
}

#[test]
fn module_annotation_is_bracketed_or_absent() {
    let (dispatcher, sink) = structured(StaticVisibility::default());
    dispatcher.log_message(LogLevel::Info, "ready", MessageOptions::new(site()));
    dispatcher.log_message(
        LogLevel::Info,
        "ready",
        MessageOptions::new(site()).module("Net"),
    );

    let messages: Vec<String> = sink
        .take()
        .iter()
        .map(|e| e.message().to_string())
        .collect();
    assert_eq!(messages[0], "ℹ️ INFO: File.ext:9 sync → ready");
    assert!(!messages[0].contains("[]"));
    assert_eq!(messages[1], "ℹ️ INFO: [Net] File.ext:9 sync → ready");
}

#[test]
fn full_paths_never_reach_the_backend() {
    let (dispatcher, sink) = structured(StaticVisibility::default());
    dispatcher.log_message(LogLevel::Debug, "m", MessageOptions::new(site()));
    let record = LogRecord::new("M", "C", "L", "", "1", site());
    dispatcher.log_record(LogLevel::Debug, &record, RecordOptions::new());

    for emission in sink.take() {
        assert!(emission.message().contains("File.ext"));
        assert!(!emission.message().contains("/a/b/c"));
    }
}

#[test]
fn empty_message_is_accepted() {
    let (dispatcher, sink) = structured(StaticVisibility::default());
    dispatcher.log_message(LogLevel::Notice, "", MessageOptions::new(site()));
    assert_eq!(sink.take()[0].message(), "📌 NOTICE: File.ext:9 sync → ");
}

#[test]
fn record_marker_and_category_overrides() {
    let (dispatcher, sink) = structured(StaticVisibility::default());
    let record = LogRecord::new("Cart", "CRT404", "Domain", "missing sku", "2.3.1", site())
        .with_localized_message("Produk tidak ditemukan");
    dispatcher.log_record(
        LogLevel::Critical,
        &record,
        RecordOptions::new().marker("!!").category("Checkout"),
    );

    let emission = &sink.take()[0];
    assert_eq!(
        emission.handle(),
        &LogHandle::new("com.example.app", "Checkout")
    );
    assert!(emission.message().starts_with(
        "!! CRITICAL: [Cart] [Domain] [2.3.1] -> Log captured in sync (line 9, File.ext)\n"
    ));
    assert!(emission
        .message()
        .contains("- Localized   : Produk tidak ditemukan\n"));
}

#[test]
fn warning_threshold_scenario() {
    let (dispatcher, sink) = structured(StaticVisibility::from_level(LogLevel::Warning));

    dispatcher.log_message(LogLevel::Info, "cache warm", MessageOptions::new(site()));
    assert!(sink.is_empty());

    dispatcher.log_message(
        LogLevel::Error,
        "token rejected",
        MessageOptions::new(site()).privacy(PrivacyOption::Sensitive),
    );
    let emissions = sink.take();
    assert_eq!(emissions.len(), 1);
    match &emissions[0] {
        Emission::Structured {
            primitive,
            redaction,
            ..
        } => {
            assert_eq!(*primitive, LogLevel::Error);
            assert_eq!(*redaction, RedactionDirective::Sensitive);
        }
        other => panic!("unexpected emission {other:?}"),
    }
}

#[test]
fn disabled_scenario_drops_faults() {
    let (dispatcher, sink) = structured(StaticVisibility {
        enabled: false,
        minimum_level: LogLevel::Debug,
    });
    dispatcher.log_message(LogLevel::Fault, "kernel panic", MessageOptions::new(site()));
    assert!(sink.is_empty());
}

#[test]
fn legacy_tier_emits_every_level_publicly() {
    let sink = Arc::new(MemorySink::new());
    let dispatcher = Dispatcher::with_backend(
        configure("com.example.app", "AppLogger"),
        StaticVisibility::default(),
        Backend::Legacy(sink.clone()),
    );

    for level in LogLevel::ALL {
        dispatcher.log_message(
            level,
            "x",
            MessageOptions::new(site()).privacy(PrivacyOption::Private),
        );
    }

    let severities: Vec<NativeSeverity> = sink
        .take()
        .into_iter()
        .map(|emission| match emission {
            Emission::Legacy { severity, .. } => severity,
            other => panic!("unexpected emission {other:?}"),
        })
        .collect();
    assert_eq!(
        severities,
        vec![
            NativeSeverity::Debug,
            NativeSeverity::Info,
            NativeSeverity::Default,
            NativeSeverity::Default,
            NativeSeverity::Error,
            NativeSeverity::Fault,
            NativeSeverity::Fault,
        ]
    );
}
