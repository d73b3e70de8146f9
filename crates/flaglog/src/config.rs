//! crates/flaglog/src/config.rs
//! Static logger configuration and its textual token form.

use std::str::FromStr;

use thiserror::Error;

use crate::category::CategorySet;
use crate::level::{Level, ParseLevelError};
use crate::threshold::{DEFAULT_PRACTICE_THRESHOLD, DEFAULT_SUPERVISED_THRESHOLD};

/// Errors produced while applying configuration tokens.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// A token was empty after trimming.
    #[error("empty configuration token")]
    EmptyToken,
    /// A `key=value` token used an unrecognised key.
    #[error("unknown configuration key `{0}`")]
    UnknownKey(String),
    /// A category name was empty or contained whitespace or `=`.
    #[error("invalid category name `{0}`")]
    InvalidCategory(String),
    /// The default-channel switch was neither on nor off.
    #[error("invalid switch value `{0}` (expected on, off, true or false)")]
    InvalidSwitch(String),
    /// A threshold value did not name a level.
    #[error("invalid level for `{key}`")]
    Level {
        /// The key whose value failed to parse.
        key: String,
        /// The underlying parse failure.
        #[source]
        source: ParseLevelError,
    },
}

/// Construction-time logger configuration.
///
/// Describes the two thresholds, the categories to enable and whether the
/// default debug channel starts on. Apply it with
/// [`FilterState::from_config`](crate::FilterState::from_config) or
/// [`RouterBuilder::config`](crate::RouterBuilder::config).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LoggerConfig {
    /// Threshold while a supervised environment is attached.
    pub supervised_threshold: Level,
    /// Threshold in practice.
    pub practice_threshold: Level,
    /// Categories enabled when the configuration is applied.
    pub categories: Vec<String>,
    /// Whether the default debug channel starts on.
    pub default_channel: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            supervised_threshold: DEFAULT_SUPERVISED_THRESHOLD,
            practice_threshold: DEFAULT_PRACTICE_THRESHOLD,
            categories: Vec::new(),
            default_channel: false,
        }
    }
}

impl LoggerConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets both thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, supervised: Level, practice: Level) -> Self {
        self.supervised_threshold = supervised;
        self.practice_threshold = practice;
        self
    }

    /// Adds categories to the enabled list, skipping duplicates.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for category in categories {
            self.add_category(category.into());
        }
        self
    }

    /// Adds every tag of an application category set.
    #[must_use]
    pub fn with_category_set<C: CategorySet>(self) -> Self {
        self.with_categories(C::all().iter().map(C::tag))
    }

    /// Sets the initial default-channel state.
    #[must_use]
    pub const fn with_default_channel(mut self, enabled: bool) -> Self {
        self.default_channel = enabled;
        self
    }

    fn add_category(&mut self, category: String) {
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
    }

    /// Applies a single configuration token.
    ///
    /// Recognised forms:
    ///
    /// - `level.supervised=<level>` and `level.practice=<level>`
    /// - `default=on|off|true|false`
    /// - `NAME` or `+NAME` enables a category, `-NAME` removes it
    ///
    /// ```
    /// use flaglog::{Level, LoggerConfig};
    ///
    /// let mut config = LoggerConfig::new();
    /// config.apply_token("level.practice=normal").unwrap();
    /// config.apply_token("+DRIVE").unwrap();
    /// config.apply_token("VISION").unwrap();
    /// config.apply_token("-VISION").unwrap();
    ///
    /// assert_eq!(config.practice_threshold, Level::Normal);
    /// assert_eq!(config.categories, vec!["DRIVE".to_owned()]);
    /// ```
    pub fn apply_token(&mut self, token: &str) -> Result<(), ConfigError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }

        if let Some((key, value)) = token.split_once('=') {
            let key = key.trim();
            let value = value.trim();
            return match key {
                "level.supervised" => {
                    self.supervised_threshold = parse_level(key, value)?;
                    Ok(())
                }
                "level.practice" => {
                    self.practice_threshold = parse_level(key, value)?;
                    Ok(())
                }
                "default" => {
                    self.default_channel = parse_switch(value)?;
                    Ok(())
                }
                _ => Err(ConfigError::UnknownKey(key.to_owned())),
            };
        }

        if let Some(name) = token.strip_prefix('-') {
            let name = validate_category(name)?;
            self.categories.retain(|category| category != name);
            return Ok(());
        }

        let name = validate_category(token.strip_prefix('+').unwrap_or(token))?;
        self.add_category(name.to_owned());
        Ok(())
    }

    /// Builds a configuration by applying `tokens` to the defaults in order.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        for token in tokens {
            config.apply_token(token.as_ref())?;
        }
        Ok(config)
    }
}

impl FromStr for LoggerConfig {
    type Err = ConfigError;

    /// Parses a comma-separated token list, e.g.
    /// `"level.supervised=critical, +DRIVE, +ARM"`. Empty segments are
    /// skipped so trailing commas are harmless.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tokens(s.split(',').filter(|token| !token.trim().is_empty()))
    }
}

fn parse_level(key: &str, value: &str) -> Result<Level, ConfigError> {
    value.parse().map_err(|source| ConfigError::Level {
        key: key.to_owned(),
        source,
    })
}

fn parse_switch(value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" => Ok(true),
        "off" | "false" => Ok(false),
        _ => Err(ConfigError::InvalidSwitch(value.to_owned())),
    }
}

fn validate_category(name: &str) -> Result<&str, ConfigError> {
    let name = name.trim();
    if name.is_empty() || name.contains(char::is_whitespace) || name.contains('=') {
        return Err(ConfigError::InvalidCategory(name.to_owned()));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.supervised_threshold, Level::High);
        assert_eq!(config.practice_threshold, Level::Low);
        assert!(config.categories.is_empty());
        assert!(!config.default_channel);
    }

    #[test]
    fn builder_methods() {
        let config = LoggerConfig::new()
            .with_thresholds(Level::Critical, Level::Normal)
            .with_categories(["DRIVE", "ARM", "DRIVE"])
            .with_default_channel(true);

        assert_eq!(config.supervised_threshold, Level::Critical);
        assert_eq!(config.practice_threshold, Level::Normal);
        assert_eq!(config.categories, vec!["DRIVE".to_owned(), "ARM".to_owned()]);
        assert!(config.default_channel);
    }

    #[test]
    fn level_tokens() {
        let mut config = LoggerConfig::new();
        config.apply_token("level.supervised=critical").unwrap();
        config.apply_token("level.practice = 2").unwrap();
        assert_eq!(config.supervised_threshold, Level::Critical);
        assert_eq!(config.practice_threshold, Level::Normal);
    }

    #[test]
    fn switch_tokens() {
        let mut config = LoggerConfig::new();
        config.apply_token("default=on").unwrap();
        assert!(config.default_channel);
        config.apply_token("default=FALSE").unwrap();
        assert!(!config.default_channel);
        assert_eq!(
            config.apply_token("default=maybe"),
            Err(ConfigError::InvalidSwitch("maybe".to_owned()))
        );
    }

    #[test]
    fn category_tokens() {
        let mut config = LoggerConfig::new();
        config.apply_token("DRIVE").unwrap();
        config.apply_token("+VISION").unwrap();
        config.apply_token("+DRIVE").unwrap();
        assert_eq!(config.categories, vec!["DRIVE".to_owned(), "VISION".to_owned()]);

        config.apply_token("-DRIVE").unwrap();
        config.apply_token("-ABSENT").unwrap();
        assert_eq!(config.categories, vec!["VISION".to_owned()]);
    }

    #[test]
    fn rejects_bad_tokens() {
        let mut config = LoggerConfig::new();
        assert_eq!(config.apply_token("  "), Err(ConfigError::EmptyToken));
        assert_eq!(
            config.apply_token("colour=red"),
            Err(ConfigError::UnknownKey("colour".to_owned()))
        );
        assert_eq!(
            config.apply_token("+"),
            Err(ConfigError::InvalidCategory(String::new()))
        );
        assert_eq!(
            config.apply_token("two words"),
            Err(ConfigError::InvalidCategory("two words".to_owned()))
        );
    }

    #[test]
    fn level_error_keeps_source() {
        let mut config = LoggerConfig::new();
        let error = config.apply_token("level.practice=loud").unwrap_err();
        assert_eq!(error.to_string(), "invalid level for `level.practice`");
        let source = error.source().expect("parse error is the source");
        assert!(source.to_string().contains("loud"));
    }

    #[test]
    fn from_tokens_applies_in_order() {
        let config = LoggerConfig::from_tokens(["+A", "+B", "-A"]).unwrap();
        assert_eq!(config.categories, vec!["B".to_owned()]);
    }

    #[test]
    fn from_str_splits_on_commas() {
        let config: LoggerConfig = "level.supervised=critical, +DRIVE ,ARM,default=on,"
            .parse()
            .unwrap();
        assert_eq!(config.supervised_threshold, Level::Critical);
        assert_eq!(config.categories, vec!["DRIVE".to_owned(), "ARM".to_owned()]);
        assert!(config.default_channel);
    }

    #[test]
    fn from_str_stops_at_first_error() {
        let result: Result<LoggerConfig, _> = "+DRIVE,level.practice=,+ARM".parse();
        assert!(matches!(result, Err(ConfigError::Level { .. })));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn roundtrip() {
            let config = LoggerConfig::new()
                .with_thresholds(Level::Critical, Level::Normal)
                .with_categories(["DRIVE"]);
            let json = serde_json::to_string(&config).unwrap();
            let decoded: LoggerConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, config);
        }

        #[test]
        fn missing_fields_use_defaults() {
            let decoded: LoggerConfig =
                serde_json::from_str(r#"{"categories":["ARM"]}"#).unwrap();
            assert_eq!(decoded.supervised_threshold, Level::High);
            assert_eq!(decoded.practice_threshold, Level::Low);
            assert_eq!(decoded.categories, vec!["ARM".to_owned()]);
        }
    }
}
