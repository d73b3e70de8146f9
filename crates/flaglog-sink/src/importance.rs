//! crates/flaglog-sink/src/importance.rs
//! Importance scale understood by structured event sinks.

use std::fmt;

/// Importance attached to an entry on the structured event stream.
///
/// The scale mirrors the marker importances used by dashboard event
/// timelines. `Trivial` is the fallback for anything the router cannot map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Importance {
    /// Noise-level marker.
    #[default]
    Trivial,
    /// Low importance marker.
    Low,
    /// Normal importance marker.
    Normal,
    /// High importance marker.
    High,
    /// Critical marker.
    Critical,
}

impl Importance {
    /// Returns the lowercase name used in rendered output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trivial => "trivial",
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Maps the importance onto the closest `tracing` level.
    #[must_use]
    pub const fn tracing_level(self) -> tracing::Level {
        match self {
            Self::Trivial => tracing::Level::TRACE,
            Self::Low => tracing::Level::DEBUG,
            Self::Normal => tracing::Level::INFO,
            Self::High => tracing::Level::WARN,
            Self::Critical => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
