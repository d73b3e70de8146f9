//! crates/flaglog-sink/src/event.rs
//! Structured event-stream adapter backed by `tracing`.

use crate::importance::Importance;
use crate::sink::Sink;

/// Target attached to every event produced by [`TracingEventSink`].
pub const EVENT_TARGET: &str = "flaglog::event";

/// Sink that republishes routed events as `tracing` events.
///
/// Each event is recorded under [`EVENT_TARGET`] with an `importance` field
/// and the routed text as the message. The tracing level follows
/// [`Importance::tracing_level`], so any subscriber installed by the host
/// (a file appender, a network exporter, a dashboard bridge) decides where
/// the stream ends up.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingEventSink;

impl TracingEventSink {
    /// Creates the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Sink for TracingEventSink {
    fn emit_event(&self, text: &str, importance: Importance) {
        match importance {
            Importance::Trivial => {
                tracing::trace!(target: EVENT_TARGET, %importance, "{text}");
            }
            Importance::Low => {
                tracing::debug!(target: EVENT_TARGET, %importance, "{text}");
            }
            Importance::Normal => {
                tracing::info!(target: EVENT_TARGET, %importance, "{text}");
            }
            Importance::High => {
                tracing::warn!(target: EVENT_TARGET, %importance, "{text}");
            }
            Importance::Critical => {
                tracing::error!(target: EVENT_TARGET, %importance, "{text}");
            }
        }
    }
}
