#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/flaglog-sink/src/lib.rs
//!
//! # Overview
//!
//! `flaglog-sink` defines the output capability consumed by the `flaglog`
//! routing engine together with the adapters that ship with the workspace.
//! The engine never owns an output destination; it only calls the three
//! methods of [`Sink`] and leaves delivery to the implementor.
//!
//! # Design
//!
//! A single [`Sink`] trait carries all three channels (console text,
//! structured events and operator warnings). Every method defaults to a
//! no-op so an adapter implements only the channels it actually serves and
//! the router can fan out to a heterogeneous list of sinks without knowing
//! which is which.
//!
//! - [`ConsoleSink`] writes rendered lines to any [`std::io::Write`]
//!   implementor, standard output by default, honouring a [`LineMode`].
//! - [`TracingEventSink`] forwards events into the `tracing` ecosystem.
//! - [`OperatorConsole`] prints operator warnings, standard error by default.
//! - `MemorySink` (behind the `test-support` feature) records everything for
//!   assertions.
//!
//! # Invariants
//!
//! - Sinks are best-effort. Write failures are reported through `tracing`
//!   and never surface to the caller of the router.
//! - All adapters are `Send + Sync` so a router can be shared across threads.
//!
//! # Examples
//!
//! ```
//! use flaglog_sink::{ConsoleSink, Importance, Sink};
//!
//! let console = ConsoleSink::new(Vec::new());
//! console.emit_text("Normal: [DRIVE] ready");
//! console.emit_event("ignored by consoles", Importance::High);
//!
//! let output = String::from_utf8(console.into_inner()).unwrap();
//! assert_eq!(output, "Normal: [DRIVE] ready\n");
//! ```

mod console;
mod event;
mod importance;
mod line_mode;
#[cfg(any(test, feature = "test-support"))]
mod memory;
mod operator;
mod sink;

pub use console::{ConsoleSink, MessageSink};
pub use event::{EVENT_TARGET, TracingEventSink};
pub use importance::Importance;
pub use line_mode::LineMode;
#[cfg(any(test, feature = "test-support"))]
pub use memory::{MemorySink, SinkRecord};
pub use operator::OperatorConsole;
pub use sink::{SharedSink, Sink};
