//! Player identity.

use super::error::GameError;
use super::types::Marker;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A participant in a match.
///
/// The marker is fixed when the player is created; the display name can
/// change but is never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Player {
    /// Display name.
    name: String,

    /// Marker this player places.
    #[getter(skip)]
    marker: Marker,
}

impl Player {
    /// Creates a player with the default name for `marker`.
    pub fn new(marker: Marker) -> Self {
        Self {
            name: Self::default_name(marker),
            marker,
        }
    }

    /// Creates a player with `name`, falling back to the default name when
    /// `name` is blank.
    pub fn named(marker: Marker, name: impl AsRef<str>) -> Self {
        let mut player = Self::new(marker);
        player.set_name(name);
        player
    }

    /// Creates a player from a raw marker symbol such as `"x"`.
    #[instrument]
    pub fn from_symbol(symbol: &str) -> Result<Self, GameError> {
        let marker: Marker = symbol.parse()?;
        Ok(Self::new(marker))
    }

    /// Default display name, e.g. `"Player X"`.
    pub fn default_name(marker: Marker) -> String {
        format!("Player {}", marker)
    }

    /// Returns the player's marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Renames the player. Blank names are ignored.
    ///
    /// Returns true if the name changed.
    #[instrument(skip(self, name), fields(marker = %self.marker))]
    pub fn set_name(&mut self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref().trim();
        if name.is_empty() || name == self.name {
            return false;
        }
        debug!(old = %self.name, new = %name, "Renaming player");
        self.name = name.to_string();
        true
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        assert_eq!(Player::new(Marker::X).name(), "Player X");
        assert_eq!(Player::new(Marker::O).name(), "Player O");
    }

    #[test]
    fn test_blank_name_keeps_default() {
        let player = Player::named(Marker::O, "   ");
        assert_eq!(player.name(), "Player O");
    }

    #[test]
    fn test_rename() {
        let mut player = Player::new(Marker::X);
        assert!(player.set_name(" Grace "));
        assert_eq!(player.name(), "Grace");
        assert!(!player.set_name(""));
        assert_eq!(player.name(), "Grace");
        assert_eq!(player.marker(), Marker::X);
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(Player::from_symbol("o").map(|p| p.marker()), Ok(Marker::O));
        assert!(matches!(
            Player::from_symbol("-"),
            Err(GameError::InvalidMarker { .. })
        ));
    }
}
