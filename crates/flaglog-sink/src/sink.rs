//! crates/flaglog-sink/src/sink.rs
//! The output capability consumed by the router.

use std::sync::Arc;

use crate::importance::Importance;

/// Output capability driven by the `flaglog` router.
///
/// Each method corresponds to one output channel. The defaults do nothing,
/// so an adapter overrides only the channels it serves. Implementations must
/// be fast and must not block for long: the router calls them synchronously
/// on the logging thread and does not retry or observe failures.
pub trait Sink: Send + Sync {
    /// Console-style output of an already formatted line.
    fn emit_text(&self, line: &str) {
        let _ = line;
    }

    /// Structured event-stream output.
    fn emit_event(&self, text: &str, importance: Importance) {
        let _ = (text, importance);
    }

    /// Operator-facing alert. `persistent` asks the channel to keep the
    /// warning visible instead of showing it once.
    fn emit_operator_warning(&self, text: &str, persistent: bool) {
        let _ = (text, persistent);
    }
}

/// Reference-counted sink handle as stored by the router.
pub type SharedSink = Arc<dyn Sink>;

impl<S> Sink for Arc<S>
where
    S: Sink + ?Sized,
{
    fn emit_text(&self, line: &str) {
        (**self).emit_text(line);
    }

    fn emit_event(&self, text: &str, importance: Importance) {
        (**self).emit_event(text, importance);
    }

    fn emit_operator_warning(&self, text: &str, persistent: bool) {
        (**self).emit_operator_warning(text, persistent);
    }
}

impl<S> Sink for Box<S>
where
    S: Sink + ?Sized,
{
    fn emit_text(&self, line: &str) {
        (**self).emit_text(line);
    }

    fn emit_event(&self, text: &str, importance: Importance) {
        (**self).emit_event(text, importance);
    }

    fn emit_operator_warning(&self, text: &str, persistent: bool) {
        (**self).emit_operator_warning(text, persistent);
    }
}
