//! crates/flaglog/src/environment.rs
//! Environment facts supplied by the host application.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Source of the "is a supervised environment attached" fact.
///
/// Querying the environment may be I/O-bound or rate-limited, so it is only
/// consulted by [`FlagLogger::initialize`](crate::FlagLogger::initialize),
/// never per message.
pub trait EnvironmentSource: Send + Sync {
    /// Reports whether a supervised (competition) environment is attached.
    fn is_supervised(&self) -> bool;
}

impl<P> EnvironmentSource for &P
where
    P: EnvironmentSource + ?Sized,
{
    fn is_supervised(&self) -> bool {
        (**self).is_supervised()
    }
}

impl<P> EnvironmentSource for Arc<P>
where
    P: EnvironmentSource + ?Sized,
{
    fn is_supervised(&self) -> bool {
        (**self).is_supervised()
    }
}

/// Source backed by a closure.
#[derive(Clone, Copy)]
pub struct SourceFn<F>(F);

/// Wraps a closure as an [`EnvironmentSource`].
///
/// ```
/// use flaglog::{EnvironmentSource, source_fn};
///
/// let source = source_fn(|| true);
/// assert!(source.is_supervised());
/// ```
pub const fn source_fn<F>(f: F) -> SourceFn<F>
where
    F: Fn() -> bool + Send + Sync,
{
    SourceFn(f)
}

impl<F> EnvironmentSource for SourceFn<F>
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_supervised(&self) -> bool {
        (self.0)()
    }
}

impl<F> fmt::Debug for SourceFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SourceFn")
    }
}

/// Source holding a settable flag, for hosts that push the fact instead of
/// being polled, and for tests.
#[derive(Debug, Default)]
pub struct FixedEnvironment {
    supervised: AtomicBool,
}

impl FixedEnvironment {
    /// Creates a source reporting `supervised`.
    #[must_use]
    pub const fn new(supervised: bool) -> Self {
        Self {
            supervised: AtomicBool::new(supervised),
        }
    }

    /// Changes the reported fact.
    pub fn set_supervised(&self, supervised: bool) {
        self.supervised.store(supervised, Ordering::Relaxed);
    }
}

impl EnvironmentSource for FixedEnvironment {
    fn is_supervised(&self) -> bool {
        self.supervised.load(Ordering::Relaxed)
    }
}

/// Environment observed during initialisation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Environment {
    /// A supervised environment (field management system) is attached.
    Supervised,
    /// Practice or any other unsupervised run.
    Practice,
}

impl Environment {
    /// Classifies a raw source answer.
    #[must_use]
    pub const fn from_supervised(supervised: bool) -> Self {
        if supervised {
            Self::Supervised
        } else {
            Self::Practice
        }
    }

    /// Reports whether this is the supervised environment.
    #[must_use]
    pub const fn is_supervised(self) -> bool {
        matches!(self, Self::Supervised)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Supervised => "supervised",
            Self::Practice => "practice",
        })
    }
}

/// Operating mode reported by the host application's lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperatingMode {
    /// Outputs disabled.
    Disabled,
    /// Autonomous period.
    Autonomous,
    /// Operator-controlled period.
    Teleop,
    /// Test mode.
    Test,
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Disabled => "disabled",
            Self::Autonomous => "autonomous",
            Self::Teleop => "teleop",
            Self::Test => "test",
        })
    }
}
