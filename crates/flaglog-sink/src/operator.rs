//! crates/flaglog-sink/src/operator.rs
//! Operator-facing alert adapter.

use std::io::{self, Stderr, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::sink::Sink;

/// Prefix written before every operator warning.
const WARNING_PREFIX: &str = "Warning: ";
/// Suffix that marks a warning the operator console should keep visible.
const PERSISTENT_SUFFIX: &str = " (persistent)";

/// Operator alert channel that prints warnings to a writer.
///
/// This is the stand-in for a driver-station style warning console: each
/// warning becomes one `Warning: <text>` line, with persistent warnings
/// marked as such. Only [`Sink::emit_operator_warning`] is served.
#[derive(Debug)]
pub struct OperatorConsole<W = Stderr> {
    writer: Mutex<W>,
}

impl OperatorConsole<Stderr> {
    /// Creates an operator console on standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W> OperatorConsole<W> {
    /// Creates an operator console on the given writer.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Consumes the console and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> OperatorConsole<W>
where
    W: Write,
{
    fn write_warning(&self, text: &str, persistent: bool) -> io::Result<()> {
        let mut writer = self.lock();
        writer.write_all(WARNING_PREFIX.as_bytes())?;
        writer.write_all(text.as_bytes())?;
        if persistent {
            writer.write_all(PERSISTENT_SUFFIX.as_bytes())?;
        }
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl<W> Sink for OperatorConsole<W>
where
    W: Write + Send,
{
    fn emit_operator_warning(&self, text: &str, persistent: bool) {
        if let Err(error) = self.write_warning(text, persistent) {
            tracing::warn!(target: "flaglog::sink", %error, "operator warning write failed");
        }
    }
}
