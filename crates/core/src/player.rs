//! The two sides of the game.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Cyan,
    Red,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Cyan, Player::Red];

    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Self::Cyan => Self::Red,
            Self::Red => Self::Cyan,
        }
    }

    /// Stable array index - cyan is 0, red is 1
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Cyan => 0,
            Self::Red => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Cyan => "cyan",
            Self::Red => "red",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Cyan.opponent(), Player::Red);
        assert_eq!(Player::Red.opponent(), Player::Cyan);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, player) in Player::ALL.iter().enumerate() {
            assert_eq!(player.index(), i);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Player::Red).expect("serialize");
        assert_eq!(json, "\"red\"");
        let back: Player = serde_json::from_str("\"cyan\"").expect("deserialize");
        assert_eq!(back, Player::Cyan);
    }
}
