//! crates/flaglog/src/bridge.rs
//! Bridge from the tracing crate into a [`Router`].
//!
//! [`FlagLayer`] is a `tracing-subscriber` layer that turns ordinary tracing
//! events into routed messages, so code that already logs with
//! `tracing::warn!` and friends goes through the same category and threshold
//! gate as direct [`Router::log`] calls.
//!
//! # Mapping
//!
//! - Category: the `flag` field if present, else the `category` field, else
//!   the event target.
//! - Level: `ERROR` is [`Level::Critical`], `WARN` is [`Level::High`], `INFO`
//!   is [`Level::Normal`], `DEBUG` and `TRACE` are [`Level::Low`].
//! - Text: the event's `message` field. Events without one are ignored.
//!
//! Events whose target is `flaglog` or lies under `flaglog::` are ignored, so the router's own
//! diagnostics and the output of
//! [`TracingEventSink`](flaglog_sink::TracingEventSink) never feed back into
//! the router.
//!
//! # Usage
//!
//! ```rust,ignore
//! use flaglog::{Router, init_tracing};
//!
//! let router = Router::with_stdio(Default::default());
//! router.registry().enable("DRIVE");
//! init_tracing(router)?;
//!
//! tracing::warn!(flag = "DRIVE", "wheel slip detected");
//! ```

use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::level::Level;
use crate::router::Router;

/// Root target of events the layer never routes.
const SELF_TARGET: &str = "flaglog";

/// Whether `target` is the crate's own target or a module path below it.
fn is_own_target(target: &str) -> bool {
    target
        .strip_prefix(SELF_TARGET)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}

/// A tracing layer that routes events through a [`Router`].
#[derive(Clone, Debug)]
pub struct FlagLayer {
    router: Router,
}

impl FlagLayer {
    /// Creates a layer feeding `router`.
    #[must_use]
    pub const fn new(router: Router) -> Self {
        Self { router }
    }

    /// The router events are fed into.
    #[must_use]
    pub const fn router(&self) -> &Router {
        &self.router
    }

    /// Maps a tracing level onto a routing level.
    #[must_use]
    pub const fn level_for(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::Critical,
            tracing::Level::WARN => Level::High,
            tracing::Level::INFO => Level::Normal,
            tracing::Level::DEBUG | tracing::Level::TRACE => Level::Low,
        }
    }
}

impl<S> Layer<S> for FlagLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        if is_own_target(target) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        let category = visitor.flag.as_deref().unwrap_or(target);
        self.router
            .log(message, category, Self::level_for(metadata.level()));
    }
}

/// Visitor extracting the message and category fields of an event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    flag: Option<String>,
}

impl MessageVisitor {
    fn store(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.message = Some(value),
            "flag" => self.flag = Some(value),
            "category" => {
                if self.flag.is_none() {
                    self.flag = Some(value);
                }
            }
            _ => {}
        }
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.store(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.store(field, value.to_owned());
    }
}

/// Installs a global subscriber whose only layer is a [`FlagLayer`] feeding
/// `router`.
///
/// Fails when a global subscriber is already set.
pub fn init_tracing(router: Router) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(FlagLayer::new(router))
        .try_init()
}

/// Installs a global subscriber combining `filter` with a [`FlagLayer`].
///
/// ```rust,ignore
/// use flaglog::{Router, init_tracing_with_filter};
/// use tracing_subscriber::EnvFilter;
///
/// let router = Router::with_stdio(Default::default());
/// init_tracing_with_filter(router, EnvFilter::from_default_env())?;
/// ```
pub fn init_tracing_with_filter<F>(router: Router, filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(FlagLayer::new(router))
        .try_init()
}
