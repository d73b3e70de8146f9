//! crates/flaglog/src/threshold.rs
//! Environment-aware selection of the active severity threshold.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::level::Level;

/// Marker stored in `active` before the first refresh or override.
const UNSET: u8 = 0;

/// Default threshold while a supervised environment is attached.
pub const DEFAULT_SUPERVISED_THRESHOLD: Level = Level::High;
/// Default threshold in practice.
pub const DEFAULT_PRACTICE_THRESHOLD: Level = Level::Low;

/// Chooses the minimum severity for the gated path.
///
/// Two levels are configured, one for a supervised environment and one for
/// practice. [`refresh`](Self::refresh) derives the active threshold from
/// the current environment and holds it until the next refresh, so the
/// per-message read in [`active_threshold`](Self::active_threshold) is a
/// single atomic load. Before the first refresh the practice threshold is in
/// effect.
///
/// Configuring a supervised threshold that is less severe than the practice
/// threshold is allowed; the policy applies whatever it was given.
#[derive(Debug)]
pub struct ThresholdPolicy {
    supervised: AtomicU8,
    practice: AtomicU8,
    active: AtomicU8,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_SUPERVISED_THRESHOLD, DEFAULT_PRACTICE_THRESHOLD)
    }
}

impl ThresholdPolicy {
    /// Creates a policy with explicit thresholds.
    #[must_use]
    pub const fn new(supervised: Level, practice: Level) -> Self {
        Self {
            supervised: AtomicU8::new(supervised.rank()),
            practice: AtomicU8::new(practice.rank()),
            active: AtomicU8::new(UNSET),
        }
    }

    /// Replaces both configured thresholds.
    ///
    /// The active threshold is left alone until the next
    /// [`refresh`](Self::refresh), unless no threshold was ever computed, in
    /// which case the new practice threshold applies immediately.
    pub fn configure(&self, supervised: Level, practice: Level) {
        self.supervised.store(supervised.rank(), Ordering::Relaxed);
        self.practice.store(practice.rank(), Ordering::Relaxed);
        tracing::debug!(
            target: "flaglog::threshold",
            %supervised,
            %practice,
            "thresholds configured"
        );
    }

    /// Recomputes and stores the active threshold for the given environment.
    pub fn refresh(&self, is_supervised: bool) -> Level {
        let active = if is_supervised {
            self.supervised_threshold()
        } else {
            self.practice_threshold()
        };
        self.active.store(active.rank(), Ordering::Relaxed);
        tracing::debug!(
            target: "flaglog::threshold",
            is_supervised,
            %active,
            "active threshold refreshed"
        );
        active
    }

    /// Overrides the active threshold until the next refresh.
    pub fn set_active(&self, level: Level) {
        self.active.store(level.rank(), Ordering::Relaxed);
        tracing::debug!(target: "flaglog::threshold", active = %level, "active threshold overridden");
    }

    /// Returns the threshold currently in effect.
    #[must_use]
    pub fn active_threshold(&self) -> Level {
        Level::from_rank(self.active.load(Ordering::Relaxed))
            .unwrap_or_else(|| self.practice_threshold())
    }

    /// Returns the configured supervised threshold.
    #[must_use]
    pub fn supervised_threshold(&self) -> Level {
        Level::from_rank(self.supervised.load(Ordering::Relaxed))
            .unwrap_or(DEFAULT_SUPERVISED_THRESHOLD)
    }

    /// Returns the configured practice threshold.
    #[must_use]
    pub fn practice_threshold(&self) -> Level {
        Level::from_rank(self.practice.load(Ordering::Relaxed))
            .unwrap_or(DEFAULT_PRACTICE_THRESHOLD)
    }
}
