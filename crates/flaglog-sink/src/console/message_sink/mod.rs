use std::fmt;

use crate::line_mode::LineMode;

/// Line-oriented writer that renders routed text into an
/// [`std::io::Write`] target.
///
/// The sink owns the underlying writer and the [`LineMode`] applied to each
/// [`write_line`](Self::write_line) call. It is the unsynchronised building
/// block behind [`ConsoleSink`](crate::ConsoleSink), which adds the locking
/// needed to share it between threads.
///
/// # Examples
///
/// Collect lines into a [`Vec<u8>`] with newline terminators:
///
/// ```
/// use flaglog_sink::MessageSink;
///
/// let mut sink = MessageSink::new(Vec::new());
/// sink.write_line("High: [ARM] stalled")?;
/// sink.write_line("Low: [ARM] recovered")?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output.lines().count(), 2);
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Write without a trailing newline:
///
/// ```
/// use flaglog_sink::{LineMode, MessageSink};
///
/// let mut sink = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
/// sink.write_line("ready")?;
/// assert_eq!(sink.into_inner(), b"ready".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct MessageSink<W> {
    writer: W,
    line_mode: LineMode,
}

mod constructors;
mod writing;

impl<W> MessageSink<W> {
    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }
}

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .field("line_mode", &self.line_mode)
            .finish()
    }
}
