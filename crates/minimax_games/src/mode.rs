//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Game mode - who plays O?
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Human plays X against the minimax AI as O.
    #[default]
    #[value(name = "single")]
    SinglePlayer,
    /// Two humans share the console.
    #[value(name = "two")]
    TwoPlayer,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::SinglePlayer => "Single Player (You vs AI)",
            GameMode::TwoPlayer => "Two Players (Player X vs Player O)",
        }
    }

    /// Number typed at the mode menu.
    pub fn menu_key(&self) -> &'static str {
        match self {
            GameMode::SinglePlayer => "1",
            GameMode::TwoPlayer => "2",
        }
    }

    /// Parses a menu answer.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter().find(|mode| mode.menu_key() == choice.trim())
    }

    /// True if the AI moves for O in this mode.
    pub fn ai_plays_o(&self) -> bool {
        matches!(self, GameMode::SinglePlayer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choices() {
        assert_eq!(GameMode::from_menu_choice("1"), Some(GameMode::SinglePlayer));
        assert_eq!(GameMode::from_menu_choice(" 2 "), Some(GameMode::TwoPlayer));
        assert_eq!(GameMode::from_menu_choice("3"), None);
        assert_eq!(GameMode::from_menu_choice("one"), None);
    }

    #[test]
    fn test_ai_seat() {
        assert!(GameMode::SinglePlayer.ai_plays_o());
        assert!(!GameMode::TwoPlayer.ai_plays_o());
    }
}
