//! Integration tests for message routing.
//!
//! Each test builds a router over a fresh [`FilterState`] with a
//! [`MemorySink`] attached, drives it through the public API and inspects
//! the recorded emissions.

use std::sync::Arc;

use flaglog::{FilterState, Importance, Level, Router};
use flaglog_sink::{MemorySink, SinkRecord};
use proptest::prelude::*;

fn harness() -> (Router, Arc<MemorySink>) {
    let memory = Arc::new(MemorySink::new());
    let router = Router::builder().shared_sink(memory.clone()).build();
    (router, memory)
}

fn level_strategy() -> impl Strategy<Value = Level> {
    prop::sample::select(Level::ALL.to_vec())
}

// ============================================================================
// Gate Conjunction Tests
// ============================================================================

/// Verifies the four combinations of category state and threshold outcome.
#[test]
fn gate_truth_table() {
    let cases = [
        (true, Level::High, true),
        (true, Level::Low, false),
        (false, Level::High, false),
        (false, Level::Low, false),
    ];

    for (enabled, level, expected) in cases {
        let (router, memory) = harness();
        if enabled {
            router.registry().enable("DRIVE");
        }
        router.threshold().set_active(Level::Normal);

        router.log("message", "DRIVE", level);

        let console = memory.texts();
        let events = memory.events();
        assert_eq!(!console.is_empty(), expected, "console for {enabled}/{level}");
        assert_eq!(!events.is_empty(), expected, "events for {enabled}/{level}");
    }
}

/// Verifies that a disabled category stays silent on the gated path even for
/// critical messages.
#[test]
fn disabled_category_is_gated_even_when_critical() {
    let (router, memory) = harness();
    router.log("stall", "ARM", Level::Critical);

    assert!(memory.texts().is_empty());
    assert!(memory.events().is_empty());
}

/// Verifies that a Silent threshold blocks every level on the gated path.
#[test]
fn silent_threshold_blocks_gated_path() {
    let (router, memory) = harness();
    router.registry().enable("DRIVE");
    router.threshold().set_active(Level::Silent);

    for level in Level::MESSAGE_LEVELS {
        router.log("x", "DRIVE", level);
    }

    assert!(memory.texts().is_empty());
    assert!(memory.events().is_empty());
    assert_eq!(memory.operator_warnings(), vec!["DRIVE: x".to_owned()]);
}

/// Verifies a Silent message in an enabled category is gated like any other
/// level and falls back to Trivial importance on the event channel.
#[test]
fn silent_message_passes_enabled_category() {
    let (router, memory) = harness();
    router.registry().enable("DRIVE");
    router.threshold().set_active(Level::Low);

    router.log("x", "DRIVE", Level::Silent);
    router.log("y", "VISION", Level::Silent);

    assert_eq!(
        memory.drain(),
        vec![
            SinkRecord::Text("Silent: [DRIVE] x".to_owned()),
            SinkRecord::Event {
                text: "DRIVE: x".to_owned(),
                importance: Importance::Trivial,
            },
        ]
    );
}

proptest! {
    /// Verifies console and event output happen exactly when the category is
    /// enabled and the level meets the active threshold.
    #[test]
    fn gate_is_a_conjunction(
        enabled in any::<bool>(),
        level in level_strategy(),
        threshold in level_strategy(),
        category in "[A-Z]{1,8}",
    ) {
        let (router, memory) = harness();
        if enabled {
            router.registry().enable(&category);
        }
        router.threshold().set_active(threshold);

        router.log("payload", &category, level);

        let expected = enabled && level.meets(threshold);
        prop_assert_eq!(!memory.texts().is_empty(), expected);
        prop_assert_eq!(!memory.events().is_empty(), expected);
    }

    /// Verifies operator escalation depends on the level alone.
    #[test]
    fn escalation_depends_only_on_level(
        enabled in any::<bool>(),
        level in level_strategy(),
        threshold in level_strategy(),
    ) {
        let (router, memory) = harness();
        if enabled {
            router.registry().enable("ARM");
        }
        router.threshold().set_active(threshold);

        router.log("payload", "ARM", level);

        let warnings = memory.operator_warnings();
        if level == Level::Critical {
            prop_assert_eq!(warnings, vec!["ARM: payload".to_owned()]);
        } else {
            prop_assert!(warnings.is_empty());
        }
    }
}

// ============================================================================
// Output Format Tests
// ============================================================================

/// Verifies console and event formatting for each message level.
#[test]
fn formats_follow_level_and_category() {
    let (router, memory) = harness();
    router.registry().enable("LIFT");

    router.log("a", "LIFT", Level::Low);
    router.log("b", "LIFT", Level::Normal);
    router.log("c", "LIFT", Level::High);

    assert_eq!(
        memory.texts(),
        vec![
            "Low: [LIFT] a".to_owned(),
            "Normal: [LIFT] b".to_owned(),
            "High: [LIFT] c".to_owned(),
        ]
    );
    assert_eq!(
        memory.events(),
        vec![
            ("LIFT: a".to_owned(), Importance::Low),
            ("LIFT: b".to_owned(), Importance::Normal),
            ("LIFT: c".to_owned(), Importance::High),
        ]
    );
}

/// Verifies an enabled critical message produces all three outputs in order.
#[test]
fn enabled_critical_emits_every_channel() {
    let (router, memory) = harness();
    router.registry().enable("ARM");

    router.log("overcurrent", "ARM", Level::Critical);

    assert_eq!(
        memory.drain(),
        vec![
            SinkRecord::Text("Critical: [ARM] overcurrent".to_owned()),
            SinkRecord::Event {
                text: "ARM: overcurrent".to_owned(),
                importance: Importance::Critical,
            },
            SinkRecord::OperatorWarning {
                text: "ARM: overcurrent".to_owned(),
                persistent: false,
            },
        ]
    );
}

/// Verifies non-string values are rendered through their Display impls.
#[test]
fn heterogeneous_values_are_stringified() {
    let (router, memory) = harness();
    router.registry().enable("MISC");

    router.normal("MISC", 42_i32);
    router.normal("MISC", 2.5_f64);
    router.normal("MISC", true);
    router.normal("MISC", 'x');
    router.normal("MISC", flaglog::Utf8Lossy(b"bytes"));
    router.normal("MISC", flaglog::CharSeq(&['h', 'i']));

    assert_eq!(
        memory.texts(),
        vec![
            "Normal: [MISC] 42".to_owned(),
            "Normal: [MISC] 2.5".to_owned(),
            "Normal: [MISC] true".to_owned(),
            "Normal: [MISC] x".to_owned(),
            "Normal: [MISC] bytes".to_owned(),
            "Normal: [MISC] hi".to_owned(),
        ]
    );
}

// ============================================================================
// Threshold Snapshot Tests
// ============================================================================

/// Verifies messages observe the threshold in effect when they are logged.
#[test]
fn messages_observe_threshold_at_call_time() {
    let (router, memory) = harness();
    router.registry().enable("DRIVE");

    router.threshold().refresh(true);
    router.log("supervised", "DRIVE", Level::Normal);

    router.threshold().refresh(false);
    router.log("practice", "DRIVE", Level::Normal);

    router.threshold().refresh(true);
    router.log("supervised again", "DRIVE", Level::Normal);

    assert_eq!(memory.texts(), vec!["Normal: [DRIVE] practice".to_owned()]);
}

/// Verifies the practice threshold applies before the first refresh.
#[test]
fn practice_threshold_applies_before_refresh() {
    let state = Arc::new(FilterState::with_thresholds(Level::Critical, Level::High));
    let memory = Arc::new(MemorySink::new());
    let router = Router::builder()
        .state(state)
        .shared_sink(memory.clone())
        .build();
    router.registry().enable("DRIVE");

    router.log("normal", "DRIVE", Level::Normal);
    router.log("high", "DRIVE", Level::High);

    assert_eq!(memory.texts(), vec!["High: [DRIVE] high".to_owned()]);
}

// ============================================================================
// Default Channel Tests
// ============================================================================

/// Verifies the default channel echoes suppressed messages to the console only.
#[test]
fn default_channel_bypasses_gate_for_console_only() {
    let (router, memory) = harness();
    router.threshold().set_active(Level::High);
    router.set_default_channel(true);

    router.log("raw text", "VISION", Level::Low);

    assert_eq!(
        memory.drain(),
        vec![SinkRecord::Text("[DEBUG] raw text".to_owned())]
    );
}

/// Verifies the default-channel echo precedes gated output.
#[test]
fn default_channel_echo_comes_first() {
    let (router, memory) = harness();
    router.registry().enable("DRIVE");
    router.set_default_channel(true);

    router.log("both", "DRIVE", Level::Normal);

    assert_eq!(
        memory.texts(),
        vec!["[DEBUG] both".to_owned(), "Normal: [DRIVE] both".to_owned()]
    );
}

/// Verifies turning the default channel off stops the echo.
#[test]
fn default_channel_can_be_turned_off() {
    let (router, memory) = harness();
    router.set_default_channel(true);
    router.log("one", "X", Level::Low);
    router.set_default_channel(false);
    router.log("two", "X", Level::Low);

    assert_eq!(memory.texts(), vec!["[DEBUG] one".to_owned()]);
}

// ============================================================================
// Scenario Tests
// ============================================================================

/// Verifies the reference scenario: DRIVE enabled, threshold Normal.
#[test]
fn drive_and_vision_scenario() {
    let (router, memory) = harness();
    router.registry().enable("DRIVE");
    router.threshold().set_active(Level::Normal);

    router.log("ok", "DRIVE", Level::Low);
    assert!(memory.drain().is_empty());

    router.log("warn", "DRIVE", Level::Normal);
    assert_eq!(
        memory.drain(),
        vec![
            SinkRecord::Text("Normal: [DRIVE] warn".to_owned()),
            SinkRecord::Event {
                text: "DRIVE: warn".to_owned(),
                importance: Importance::Normal,
            },
        ]
    );

    router.log("danger", "VISION", Level::Critical);
    assert_eq!(
        memory.drain(),
        vec![SinkRecord::OperatorWarning {
            text: "VISION: danger".to_owned(),
            persistent: false,
        }]
    );
}

// ============================================================================
// Isolation Tests
// ============================================================================

/// Verifies independent states do not influence each other.
#[test]
fn independent_routers_are_isolated() {
    let (first, first_memory) = harness();
    let (second, second_memory) = harness();
    first.registry().enable("DRIVE");

    first.normal("DRIVE", "one");
    second.normal("DRIVE", "two");

    assert_eq!(first_memory.texts().len(), 1);
    assert!(second_memory.is_empty());
}

/// Verifies concurrent logging and registry mutation neither panic nor lose
/// critical escalations.
#[test]
fn concurrent_logging_is_safe() {
    let (router, memory) = harness();

    std::thread::scope(|scope| {
        for worker in 0..4 {
            let router = router.clone();
            scope.spawn(move || {
                for i in 0..50 {
                    if i % 10 == 0 {
                        router.registry().enable("DRIVE");
                    } else if i % 10 == 5 {
                        router.registry().disable("DRIVE");
                    }
                    router.log(format!("{worker}-{i}"), "DRIVE", Level::Critical);
                }
            });
        }
    });

    assert_eq!(memory.operator_warnings().len(), 200);
}
