//! crates/flaglog/src/router.rs
//! Gate evaluation and fan-out to the configured sinks.

use std::fmt;
use std::sync::Arc;

use flaglog_sink::{ConsoleSink, OperatorConsole, SharedSink, Sink, TracingEventSink};

use crate::category::CategorySet;
use crate::config::LoggerConfig;
use crate::level::Level;
use crate::registry::CategoryRegistry;
use crate::state::FilterState;
use crate::threshold::ThresholdPolicy;

/// Marker prepended to default-channel lines.
pub const DEBUG_MARKER: &str = "[DEBUG]";

/// Routes messages to sinks according to a shared [`FilterState`].
///
/// For every message [`log`](Self::log) performs three independent steps:
///
/// 1. When the default channel is on, the text is written to the console
///    channel as `"[DEBUG] <text>"`, whatever its category or level.
/// 2. When the category is enabled *and* the level meets the active
///    threshold, the console channel receives `"<Level>: [<category>] <text>"`
///    and the event channel receives `"<category>: <text>"` with the importance
///    derived from the level.
/// 3. A [`Level::Critical`] message is always sent to the operator channel as
///    `"<category>: <text>"`, even when step 2 suppressed it.
///
/// Routing never fails. Sinks are best-effort and their failures stay inside
/// the sinks.
///
/// Cloning a router is cheap; clones share the state and the sink list.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use flaglog::{Level, Router};
/// use flaglog_sink::ConsoleSink;
///
/// let console = Arc::new(ConsoleSink::new(Vec::new()));
/// let router = Router::builder().shared_sink(console.clone()).build();
/// router.registry().enable("DRIVE");
///
/// router.log("ready", "DRIVE", Level::Normal);
/// router.log("ignored", "VISION", Level::High);
///
/// let output = console.with_sink(|sink| String::from_utf8(sink.get_ref().clone()).unwrap());
/// assert_eq!(output, "Normal: [DRIVE] ready\n");
/// ```
#[derive(Clone)]
pub struct Router {
    state: Arc<FilterState>,
    sinks: Arc<[SharedSink]>,
}

impl Router {
    /// Creates a router over `state` that fans out to `sinks`.
    pub fn new<I>(state: Arc<FilterState>, sinks: I) -> Self
    where
        I: IntoIterator<Item = SharedSink>,
    {
        Self {
            state,
            sinks: sinks.into_iter().collect(),
        }
    }

    /// Starts building a router.
    #[must_use]
    pub fn builder() -> RouterBuilder {
        RouterBuilder::default()
    }

    /// Creates a router writing console lines to standard output, events to
    /// `tracing` and operator warnings to standard error.
    #[must_use]
    pub fn with_stdio(state: Arc<FilterState>) -> Self {
        Self::builder()
            .state(state)
            .sink(ConsoleSink::stdout())
            .sink(TracingEventSink::new())
            .sink(OperatorConsole::stderr())
            .build()
    }

    /// The shared filtering state.
    #[must_use]
    pub fn state(&self) -> &Arc<FilterState> {
        &self.state
    }

    /// Shortcut for `self.state().registry()`.
    #[must_use]
    pub fn registry(&self) -> &CategoryRegistry {
        self.state.registry()
    }

    /// Shortcut for `self.state().threshold()`.
    #[must_use]
    pub fn threshold(&self) -> &ThresholdPolicy {
        self.state.threshold()
    }

    /// The sinks every message fans out to, in registration order.
    #[must_use]
    pub fn sinks(&self) -> &[SharedSink] {
        &self.sinks
    }

    /// Turns the default debug channel on or off.
    pub fn set_default_channel(&self, enabled: bool) {
        self.state.set_default_channel(enabled);
    }

    /// Reports whether a message would reach at least one channel.
    ///
    /// Used by the logging macros to skip formatting of messages nobody
    /// would see.
    #[must_use]
    pub fn is_interested(&self, category: &str, level: Level) -> bool {
        level == Level::Critical
            || self.state.default_channel_enabled()
            || self.state.passes(category, level)
    }

    /// Routes one message.
    ///
    /// `message` is rendered with its `Display` impl, and only when some
    /// channel will receive it.
    pub fn log<M, C>(&self, message: M, category: C, level: Level)
    where
        M: fmt::Display,
        C: AsRef<str>,
    {
        let category = category.as_ref();
        if !self.is_interested(category, level) {
            return;
        }
        self.route(&message.to_string(), category, level);
    }

    /// Routes a message tagged with a member of an application category set.
    pub fn log_flag<M, F>(&self, message: M, flag: F, level: Level)
    where
        M: fmt::Display,
        F: CategorySet,
    {
        self.log(message, flag.tag(), level);
    }

    /// Routes a message at the default level, [`Level::Low`].
    pub fn log_default<M, C>(&self, message: M, category: C)
    where
        M: fmt::Display,
        C: AsRef<str>,
    {
        self.log(message, category, Level::Low);
    }

    /// Routes a [`Level::Low`] message.
    pub fn low<C: AsRef<str>, M: fmt::Display>(&self, category: C, message: M) {
        self.log(message, category, Level::Low);
    }

    /// Routes a [`Level::Normal`] message.
    pub fn normal<C: AsRef<str>, M: fmt::Display>(&self, category: C, message: M) {
        self.log(message, category, Level::Normal);
    }

    /// Routes a [`Level::High`] message.
    pub fn high<C: AsRef<str>, M: fmt::Display>(&self, category: C, message: M) {
        self.log(message, category, Level::High);
    }

    /// Routes a [`Level::Critical`] message.
    pub fn critical<C: AsRef<str>, M: fmt::Display>(&self, category: C, message: M) {
        self.log(message, category, Level::Critical);
    }

    /// Writes `message` to the default channel only. Nothing is emitted while
    /// the channel is off.
    pub fn debug<M: fmt::Display>(&self, message: M) {
        if self.state.default_channel_enabled() {
            self.emit_text(&format!("{DEBUG_MARKER} {message}"));
        }
    }

    fn route(&self, text: &str, category: &str, level: Level) {
        if self.state.default_channel_enabled() {
            self.emit_text(&format!("{DEBUG_MARKER} {text}"));
        }

        if self.state.passes(category, level) {
            self.emit_text(&format!("{level}: [{category}] {text}"));
            let event = format!("{category}: {text}");
            let importance = level.importance();
            for sink in self.sinks.iter() {
                sink.emit_event(&event, importance);
            }
        } else {
            tracing::trace!(target: "flaglog::router", category, %level, "gate closed");
        }

        if level == Level::Critical {
            let warning = format!("{category}: {text}");
            for sink in self.sinks.iter() {
                sink.emit_operator_warning(&warning, false);
            }
        }
    }

    fn emit_text(&self, line: &str) {
        for sink in self.sinks.iter() {
            sink.emit_text(line);
        }
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("state", &self.state)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

/// Builder for [`Router`].
///
/// Without an explicit [`state`](Self::state) a fresh [`FilterState`] is
/// created. A [`config`](Self::config) is applied to whichever state the
/// router ends up with.
#[derive(Default)]
pub struct RouterBuilder {
    state: Option<Arc<FilterState>>,
    config: Option<LoggerConfig>,
    sinks: Vec<SharedSink>,
}

impl RouterBuilder {
    /// Uses an existing shared state.
    #[must_use]
    pub fn state(mut self, state: Arc<FilterState>) -> Self {
        self.state = Some(state);
        self
    }

    /// Applies `config` to the state when the router is built.
    #[must_use]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Adds an owned sink.
    #[must_use]
    pub fn sink<S>(mut self, sink: S) -> Self
    where
        S: Sink + 'static,
    {
        self.sinks.push(Arc::new(sink));
        self
    }

    /// Adds a sink that the caller keeps a handle to.
    #[must_use]
    pub fn shared_sink(mut self, sink: SharedSink) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Builds the router.
    #[must_use]
    pub fn build(self) -> Router {
        let state = self.state.unwrap_or_default();
        if let Some(config) = &self.config {
            state.apply_config(config);
        }
        Router::new(state, self.sinks)
    }
}

impl fmt::Debug for RouterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterBuilder")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
