//! crates/flaglog-sink/src/memory.rs
//! In-memory sink that records every emission for later inspection.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::importance::Importance;
use crate::sink::Sink;

/// One emission captured by [`MemorySink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkRecord {
    /// Console line.
    Text(String),
    /// Structured event.
    Event {
        /// Event text.
        text: String,
        /// Importance attached by the router.
        importance: Importance,
    },
    /// Operator warning.
    OperatorWarning {
        /// Warning text.
        text: String,
        /// Whether the warning was flagged persistent.
        persistent: bool,
    },
}

/// Sink that stores every emission in arrival order.
///
/// Records accumulate until [`drain`](Self::drain) removes them, mirroring
/// the collect-then-drain pattern used by the test suites.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<SinkRecord>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> MutexGuard<'_, Vec<SinkRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Removes and returns every recorded emission.
    pub fn drain(&self) -> Vec<SinkRecord> {
        self.records().drain(..).collect()
    }

    /// Returns a copy of the recorded emissions without clearing them.
    #[must_use]
    pub fn snapshot(&self) -> Vec<SinkRecord> {
        self.records().clone()
    }

    /// Reports whether nothing has been recorded since the last drain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// Returns the recorded console lines.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.records()
            .iter()
            .filter_map(|record| match record {
                SinkRecord::Text(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }

    /// Returns the recorded events as `(text, importance)` pairs.
    #[must_use]
    pub fn events(&self) -> Vec<(String, Importance)> {
        self.records()
            .iter()
            .filter_map(|record| match record {
                SinkRecord::Event { text, importance } => Some((text.clone(), *importance)),
                _ => None,
            })
            .collect()
    }

    /// Returns the recorded operator warning texts.
    #[must_use]
    pub fn operator_warnings(&self) -> Vec<String> {
        self.records()
            .iter()
            .filter_map(|record| match record {
                SinkRecord::OperatorWarning { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Sink for MemorySink {
    fn emit_text(&self, line: &str) {
        self.records().push(SinkRecord::Text(line.to_owned()));
    }

    fn emit_event(&self, text: &str, importance: Importance) {
        self.records().push(SinkRecord::Event {
            text: text.to_owned(),
            importance,
        });
    }

    fn emit_operator_warning(&self, text: &str, persistent: bool) {
        self.records().push(SinkRecord::OperatorWarning {
            text: text.to_owned(),
            persistent,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_arrival_order() {
        let sink = MemorySink::new();
        sink.emit_text("first");
        sink.emit_operator_warning("second", true);
        sink.emit_event("third", Importance::High);

        let records = sink.drain();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], SinkRecord::Text("first".to_owned()));
        assert_eq!(
            records[1],
            SinkRecord::OperatorWarning {
                text: "second".to_owned(),
                persistent: true,
            }
        );
        match &records[2] {
            SinkRecord::Event { text, importance } => {
                assert_eq!(text, "third");
                assert_eq!(*importance, Importance::High);
            }
            other => panic!("expected event, got {other:?}"),
        }
    }

    #[test]
    fn drain_clears_buffer() {
        let sink = MemorySink::new();
        sink.emit_text("line");
        assert_eq!(sink.drain().len(), 1);
        assert!(sink.is_empty());
        assert!(sink.drain().is_empty());
    }

    #[test]
    fn snapshot_keeps_records() {
        let sink = MemorySink::new();
        sink.emit_text("kept");
        assert_eq!(sink.snapshot().len(), 1);
        assert_eq!(sink.snapshot().len(), 1);
        assert!(!sink.is_empty());
    }

    #[test]
    fn channel_filters() {
        let sink = MemorySink::new();
        sink.emit_text("t");
        sink.emit_event("e", Importance::Normal);
        sink.emit_operator_warning("w", false);

        assert_eq!(sink.texts(), vec!["t".to_owned()]);
        assert_eq!(sink.events(), vec![("e".to_owned(), Importance::Normal)]);
        assert_eq!(sink.operator_warnings(), vec!["w".to_owned()]);
    }
}
