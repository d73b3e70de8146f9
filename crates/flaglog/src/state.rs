//! crates/flaglog/src/state.rs
//! Shared filtering configuration consulted by the router.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::LoggerConfig;
use crate::level::Level;
use crate::registry::CategoryRegistry;
use crate::threshold::ThresholdPolicy;

/// The filtering state shared by every router of one logging domain.
///
/// Holds the [`CategoryRegistry`], the [`ThresholdPolicy`] and the
/// default-channel switch. Routers hold it behind an `Arc`; several routers
/// (for instance, one per sink set) can share one state, and independent
/// states can coexist in the same process.
#[derive(Debug, Default)]
pub struct FilterState {
    registry: CategoryRegistry,
    threshold: ThresholdPolicy,
    default_channel: AtomicBool,
}

impl FilterState {
    /// Creates a state with no enabled categories, the default thresholds
    /// and the default channel off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state with explicit thresholds.
    #[must_use]
    pub fn with_thresholds(supervised: Level, practice: Level) -> Self {
        Self {
            threshold: ThresholdPolicy::new(supervised, practice),
            ..Self::default()
        }
    }

    /// Creates a state from a [`LoggerConfig`].
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        let state = Self::new();
        state.apply_config(config);
        state
    }

    /// Applies a configuration: thresholds are configured, the listed
    /// categories are enabled and the default channel is set. Categories
    /// that are already enabled stay enabled. The active threshold is not
    /// refreshed.
    pub fn apply_config(&self, config: &LoggerConfig) {
        self.threshold
            .configure(config.supervised_threshold, config.practice_threshold);
        self.registry.enable_all(&config.categories);
        self.set_default_channel(config.default_channel);
    }

    /// The category registry.
    #[must_use]
    pub const fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// The threshold policy.
    #[must_use]
    pub const fn threshold(&self) -> &ThresholdPolicy {
        &self.threshold
    }

    /// Reports whether the default debug channel is on.
    #[must_use]
    pub fn default_channel_enabled(&self) -> bool {
        self.default_channel.load(Ordering::Relaxed)
    }

    /// Turns the default debug channel on or off.
    pub fn set_default_channel(&self, enabled: bool) {
        let previous = self.default_channel.swap(enabled, Ordering::Relaxed);
        if previous != enabled {
            tracing::debug!(target: "flaglog::state", enabled, "default channel toggled");
        }
    }

    /// Gate decision for the console and event path.
    ///
    /// Both conditions are required: the category must be enabled and the
    /// level must meet the active threshold.
    #[must_use]
    pub fn passes(&self, category: &str, level: Level) -> bool {
        level.meets(self.threshold.active_threshold()) && self.registry.is_enabled(category)
    }
}
