#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/flaglog/src/lib.rs
//!
//! # Overview
//!
//! `flaglog` routes application log messages to output sinks through two
//! independent filters: a per-subsystem *category* switch and a minimum
//! *severity* threshold that depends on whether a supervised environment is
//! attached. Operationally critical messages bypass both filters and always
//! reach the operator.
//!
//! # Design
//!
//! - [`FilterState`] owns the shared configuration: a [`CategoryRegistry`],
//!   a [`ThresholdPolicy`] and the default-channel switch. It is an ordinary
//!   value held behind an `Arc`, so independent states can coexist in one
//!   process and tests stay isolated.
//! - [`Router`] evaluates the gate for each message and fans out to a list
//!   of [`Sink`] implementations from the `flaglog-sink` crate.
//! - [`FlagLogger`] binds an application [`CategorySet`] and two thresholds
//!   to a router and refreshes the dynamic state from an
//!   [`EnvironmentSource`] at the start of each operating session.
//! - [`LoggerConfig`] describes the static configuration and parses it from
//!   `key=value` / `+NAME` tokens.
//!
//! With the `bridge` feature, `FlagLayer` feeds ordinary `tracing` events
//! into a router.
//!
//! # Invariants
//!
//! - Console and event output require the category to be enabled *and* the
//!   level to meet the active threshold.
//! - [`Level::Critical`] messages always reach the operator channel.
//! - The default channel, when on, echoes every message with a `[DEBUG]`
//!   marker to the console channel only.
//! - Routing never returns an error and never panics on caller input.
//!
//! # Errors
//!
//! Only configuration parsing can fail, reporting [`ParseLevelError`] or
//! [`ConfigError`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use flaglog::{Level, LoggerConfig, Router};
//! use flaglog_sink::ConsoleSink;
//!
//! let config: LoggerConfig = "level.practice=normal, +DRIVE".parse().unwrap();
//! let console = Arc::new(ConsoleSink::new(Vec::new()));
//! let router = Router::builder()
//!     .config(config)
//!     .shared_sink(console.clone())
//!     .build();
//! router.threshold().refresh(false);
//!
//! router.log("ok", "DRIVE", Level::Low);
//! router.log("warn", "DRIVE", Level::Normal);
//! router.log("danger", "VISION", Level::Critical);
//!
//! let output = console.with_sink(|sink| String::from_utf8(sink.get_ref().clone()).unwrap());
//! assert_eq!(output, "Normal: [DRIVE] warn\n");
//! ```

#[cfg(feature = "bridge")]
mod bridge;
mod category;
mod config;
mod environment;
mod flag_logger;
mod level;
mod macros;
mod registry;
mod router;
mod state;
mod text;
mod threshold;

#[cfg(feature = "bridge")]
pub use bridge::{FlagLayer, init_tracing, init_tracing_with_filter};
pub use category::CategorySet;
pub use config::{ConfigError, LoggerConfig};
pub use environment::{
    Environment, EnvironmentSource, FixedEnvironment, OperatingMode, SourceFn, source_fn,
};
pub use flag_logger::FlagLogger;
pub use flaglog_sink::{Importance, SharedSink, Sink};
pub use level::{Level, ParseLevelError};
pub use registry::CategoryRegistry;
pub use router::{DEBUG_MARKER, Router, RouterBuilder};
pub use state::FilterState;
pub use text::{CharSeq, Utf8Lossy};
pub use threshold::{DEFAULT_PRACTICE_THRESHOLD, DEFAULT_SUPERVISED_THRESHOLD, ThresholdPolicy};
