//! crates/flaglog/src/level.rs
//! Severity scale used for both message levels and thresholds.

use std::fmt;
use std::str::FromStr;

use flaglog_sink::Importance;
use thiserror::Error;

/// Totally ordered severity: `Low < Normal < High < Critical < Silent`.
///
/// The numeric ranks are stable and are what threshold comparisons use.
/// [`Level::Silent`] is meant as a threshold: it suppresses every other level
/// on the gated path. A message logged at `Silent` is gated like any other.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Level {
    /// Chatty diagnostics.
    #[default]
    Low = 1,
    /// Routine operational messages.
    Normal = 2,
    /// Problems worth attention.
    High = 3,
    /// Operationally critical; always escalated to the operator.
    Critical = 4,
    /// Threshold that suppresses everything.
    Silent = 5,
}

impl Level {
    /// Every level in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Low,
        Self::Normal,
        Self::High,
        Self::Critical,
        Self::Silent,
    ];

    /// Every level below [`Level::Silent`].
    pub const MESSAGE_LEVELS: [Self; 4] = [Self::Low, Self::Normal, Self::High, Self::Critical];

    /// Returns the stable numeric rank (1 through 5).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Looks a level up by rank.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(Self::Low),
            2 => Some(Self::Normal),
            3 => Some(Self::High),
            4 => Some(Self::Critical),
            5 => Some(Self::Silent),
            _ => None,
        }
    }

    /// Reports whether a message at `self` passes a `threshold`.
    ///
    /// ```
    /// use flaglog::Level;
    ///
    /// assert!(Level::High.meets(Level::Normal));
    /// assert!(Level::Normal.meets(Level::Normal));
    /// assert!(!Level::Low.meets(Level::Normal));
    /// assert!(!Level::Critical.meets(Level::Silent));
    /// ```
    #[must_use]
    pub const fn meets(self, threshold: Self) -> bool {
        self.rank() >= threshold.rank()
    }

    /// Returns the name used in console output, e.g. `"Normal"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
            Self::Critical => "Critical",
            Self::Silent => "Silent",
        }
    }

    /// Maps the level onto the event-stream importance scale.
    ///
    /// `Silent` has no importance of its own and falls back to `Trivial`.
    #[must_use]
    pub const fn importance(self) -> Importance {
        match self {
            Self::Low => Importance::Low,
            Self::Normal => Importance::Normal,
            Self::High => Importance::High,
            Self::Critical => Importance::Critical,
            Self::Silent => Importance::Trivial,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] from text fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseLevelError {
    /// The input was empty after trimming whitespace.
    #[error("level string is empty")]
    Empty,
    /// The input named no known level.
    #[error("unknown level `{0}` (expected low, normal, high, critical, silent or 1-5)")]
    Unknown(String),
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level name case-insensitively, or a rank from 1 to 5.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseLevelError::Empty);
        }

        if let Ok(rank) = trimmed.parse::<u8>() {
            return Self::from_rank(rank).ok_or_else(|| ParseLevelError::Unknown(trimmed.to_owned()));
        }

        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseLevelError::Unknown(trimmed.to_owned()))
    }
}

impl TryFrom<u8> for Level {
    type Error = ParseLevelError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Self::from_rank(rank).ok_or_else(|| ParseLevelError::Unknown(rank.to_string()))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.rank()
    }
}
