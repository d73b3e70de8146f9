//! crates/flaglog-sink/src/console/mod.rs
//! Console adapter: routed text lines written to an `io::Write` target.

use std::io::{self, Stdout, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::line_mode::LineMode;
use crate::sink::Sink;

mod message_sink;

pub use message_sink::MessageSink;

/// Thread-safe console sink.
///
/// Wraps a [`MessageSink`] in a mutex so the router can share it. Only the
/// console channel ([`Sink::emit_text`]) is served; events and operator
/// warnings are ignored. Each line is flushed as it is written. Write failures are reported through `tracing` and
/// otherwise dropped.
#[derive(Debug)]
pub struct ConsoleSink<W = Stdout> {
    inner: Mutex<MessageSink<W>>,
}

impl ConsoleSink<Stdout> {
    /// Creates a console sink that writes to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> ConsoleSink<W> {
    /// Creates a sink that appends a newline after each line.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::from_message_sink(MessageSink::new(writer))
    }

    /// Creates a sink with an explicit [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self::from_message_sink(MessageSink::with_line_mode(writer, line_mode))
    }

    /// Wraps an already configured [`MessageSink`].
    #[must_use]
    pub fn from_message_sink(sink: MessageSink<W>) -> Self {
        Self {
            inner: Mutex::new(sink),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MessageSink<W>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access to the wrapped [`MessageSink`].
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut MessageSink<W>) -> R) -> R {
        f(&mut self.lock())
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_inner()
    }
}

impl<W> Sink for ConsoleSink<W>
where
    W: Write + Send,
{
    fn emit_text(&self, line: &str) {
        let mut sink = self.lock();
        if let Err(error) = sink.write_line(line).and_then(|()| sink.flush()) {
            tracing::warn!(target: "flaglog::sink", %error, "console write failed");
        }
    }
}
