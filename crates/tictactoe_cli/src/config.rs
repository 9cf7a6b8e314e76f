//! Match configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tictactoe::{Marker, Player};
use tracing::{debug, info, instrument};

/// Who plays, and with which marker.
///
/// Loaded from TOML; every field is optional:
///
/// ```toml
/// first_name = "Ada"
/// second_name = "Grace"
/// first_marker = "o"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Name of the player acting on turn 1. Blank keeps the default.
    first_name: String,

    /// Name of the other player. Blank keeps the default.
    second_name: String,

    /// Marker of the player acting on turn 1.
    #[serde(deserialize_with = "marker_from_symbol")]
    first_marker: Marker,
}

fn marker_from_symbol<'de, D>(deserializer: D) -> Result<Marker, D::Error>
where
    D: Deserializer<'de>,
{
    let symbol = String::deserialize(deserializer)?;
    symbol.parse().map_err(serde::de::Error::custom)
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            second_name: String::new(),
            first_marker: Marker::X,
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first_marker = %config.first_marker, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        first_name: Option<String>,
        second_name: Option<String>,
        first_marker: Option<Marker>,
    ) -> Self {
        if let Some(name) = first_name {
            self.first_name = name;
        }
        if let Some(name) = second_name {
            self.second_name = name;
        }
        if let Some(marker) = first_marker {
            self.first_marker = marker;
        }
        self
    }

    /// Builds the two players, first player first.
    pub fn players(&self) -> (Player, Player) {
        (
            Player::named(self.first_marker, &self.first_name),
            Player::named(self.first_marker.opponent(), &self.second_name),
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let (first, second) = MatchConfig::default().players();
        assert_eq!(first.name(), "Player X");
        assert_eq!(first.marker(), Marker::X);
        assert_eq!(second.name(), "Player O");
    }

    #[test]
    fn test_partial_toml() {
        let config: MatchConfig = toml::from_str("first_marker = \"o\"").unwrap();
        assert_eq!(*config.first_marker(), Marker::O);
        assert_eq!(config.first_name(), "");
    }

    #[test]
    fn test_bad_marker_rejected() {
        let result: Result<MatchConfig, _> = toml::from_str("first_marker = \"-\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_win() {
        let config = MatchConfig::default().with_overrides(
            Some("Ada".to_string()),
            None,
            Some(Marker::O),
        );
        let (first, second) = config.players();
        assert_eq!(first.name(), "Ada");
        assert_eq!(first.marker(), Marker::O);
        assert_eq!(second.marker(), Marker::X);
    }
}
