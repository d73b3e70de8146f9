//! crates/flaglog/src/flag_logger.rs
//! Binding of an application category set and thresholds to a router.

use std::fmt;
use std::marker::PhantomData;
use std::sync::{Mutex, PoisonError};

use crate::category::CategorySet;
use crate::environment::{Environment, EnvironmentSource, OperatingMode};
use crate::level::Level;
use crate::router::Router;
use crate::threshold::{DEFAULT_PRACTICE_THRESHOLD, DEFAULT_SUPERVISED_THRESHOLD};

/// Application adapter around a [`Router`].
///
/// Fixes the category set `C` and the two thresholds at construction and
/// ties the router's dynamic state to the host's environment source `E`.
/// [`initialize`](Self::initialize) is meant to run at the start of every
/// operating session; [`on_mode_change`](Self::on_mode_change) does that
/// automatically when fed the host's mode transitions.
///
/// # Examples
///
/// ```
/// use flaglog::{FixedEnvironment, FlagLogger, Environment, Level, Router, categories};
///
/// categories! {
///     enum Subsystem {
///         Drive => "DRIVE",
///         Vision => "VISION",
///     }
/// }
///
/// let logger: FlagLogger<Subsystem, _> = FlagLogger::with_thresholds(
///     Router::builder().build(),
///     FixedEnvironment::new(true),
///     Level::Critical,
///     Level::Low,
/// );
///
/// assert_eq!(logger.initialize(), Environment::Supervised);
/// assert!(logger.router().registry().is_enabled("VISION"));
/// assert_eq!(logger.router().threshold().active_threshold(), Level::Critical);
/// ```
pub struct FlagLogger<C, E> {
    router: Router,
    environment: E,
    last_mode: Mutex<Option<OperatingMode>>,
    categories: PhantomData<fn() -> C>,
}

impl<C, E> FlagLogger<C, E>
where
    C: CategorySet,
    E: EnvironmentSource,
{
    /// Creates an adapter with the default thresholds (High supervised, Low
    /// practice).
    pub fn new(router: Router, environment: E) -> Self {
        Self::with_thresholds(
            router,
            environment,
            DEFAULT_SUPERVISED_THRESHOLD,
            DEFAULT_PRACTICE_THRESHOLD,
        )
    }

    /// Creates an adapter and configures the router's thresholds.
    ///
    /// The thresholds are not checked against each other.
    pub fn with_thresholds(
        router: Router,
        environment: E,
        supervised: Level,
        practice: Level,
    ) -> Self {
        router.threshold().configure(supervised, practice);
        Self {
            router,
            environment,
            last_mode: Mutex::new(None),
            categories: PhantomData,
        }
    }

    /// Queries the environment, refreshes the active threshold and enables
    /// every category of `C`.
    ///
    /// Safe to call repeatedly. With an unchanged environment the resulting
    /// state is the same as after the first call.
    pub fn initialize(&self) -> Environment {
        let environment = Environment::from_supervised(self.environment.is_supervised());
        let active = self.router.threshold().refresh(environment.is_supervised());
        self.router
            .registry()
            .enable_all(C::all().iter().map(C::tag));
        tracing::info!(
            target: "flaglog::flag_logger",
            %environment,
            %active,
            categories = C::all().len(),
            "flag logger initialised"
        );
        environment
    }

    /// Feeds a host mode transition.
    ///
    /// Runs [`initialize`](Self::initialize) when `mode` differs from the
    /// previous notification (the first notification always initialises) and
    /// reports whether it ran.
    pub fn on_mode_change(&self, mode: OperatingMode) -> bool {
        let mut last = self.last_mode.lock().unwrap_or_else(PoisonError::into_inner);
        if *last == Some(mode) {
            return false;
        }
        tracing::debug!(target: "flaglog::flag_logger", %mode, "operating mode changed");
        *last = Some(mode);
        self.initialize();
        true
    }

    /// The last mode passed to [`on_mode_change`](Self::on_mode_change).
    pub fn last_mode(&self) -> Option<OperatingMode> {
        *self.last_mode.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Routes a message tagged with a member of `C`.
    pub fn log<M: fmt::Display>(&self, message: M, flag: C, level: Level) {
        self.router.log_flag(message, flag, level);
    }

    /// The wrapped router.
    pub const fn router(&self) -> &Router {
        &self.router
    }

    /// The environment source.
    pub const fn environment(&self) -> &E {
        &self.environment
    }
}

impl<C, E: fmt::Debug> fmt::Debug for FlagLogger<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagLogger")
            .field("router", &self.router)
            .field("environment", &self.environment)
            .field("last_mode", &self.last_mode)
            .finish_non_exhaustive()
    }
}
