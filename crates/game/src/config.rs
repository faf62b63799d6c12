//! Game setup - board size, seed text, which side the AI plays, pool policy.

use blokus_core::{clamp_board_size, hash_seed, Player, PoolPolicy};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Everything needed to start (and restart) a game, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length, clamped to [5, 1000]
    pub board_size: usize,
    /// Seed text. None or blank draws a random seed.
    pub seed: Option<String>,
    /// Side played by the AI, `"none"` in TOML for two humans
    #[serde(with = "ai_side")]
    pub ai_player: Option<Player>,
    /// Advisory pause before a scheduled AI turn is run
    pub ai_delay_ms: u32,
    pub pool_policy: PoolPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: Self::DEFAULT_BOARD_SIZE,
            seed: None,
            ai_player: Some(Player::Red),
            ai_delay_ms: Self::DEFAULT_AI_DELAY_MS,
            pool_policy: PoolPolicy::Reusable,
        }
    }
}

impl GameConfig {
    pub const DEFAULT_BOARD_SIZE: usize = 15;
    pub const DEFAULT_AI_DELAY_MS: u32 = 300;
    /// Random seeds are drawn below this bound
    pub const RANDOM_SEED_BOUND: u32 = 1_000_000_000;

    /// Human cyan against the AI on a fixed seed
    pub fn seeded(board_size: usize, seed: impl Into<String>) -> Self {
        Self {
            board_size: clamp_board_size(board_size),
            seed: Some(seed.into()),
            ..Self::default()
        }
    }

    pub fn with_ai_player(mut self, ai_player: Option<Player>) -> Self {
        self.ai_player = ai_player;
        self
    }

    pub fn with_pool_policy(mut self, pool_policy: PoolPolicy) -> Self {
        self.pool_policy = pool_policy;
        self
    }

    pub fn with_ai_delay_ms(mut self, ai_delay_ms: u32) -> Self {
        self.ai_delay_ms = ai_delay_ms;
        self
    }

    /// Parse from TOML text. Missing keys take defaults, the size is clamped.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        Ok(config.clamped())
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Out-of-range sizes are clamped, never rejected
    pub fn clamped(mut self) -> Self {
        self.board_size = clamp_board_size(self.board_size);
        self
    }

    /// FNV-1a of the seed text, None when the text is missing or blank
    pub fn seed_from_text(&self) -> Option<u32> {
        self.seed
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .map(hash_seed)
    }

    /// Numeric seed: hashed text when given, otherwise whatever `random` draws
    pub fn resolve_seed(&self, random: impl FnOnce() -> u32) -> u32 {
        self.seed_from_text().unwrap_or_else(random)
    }
}

/// Uniform seed in `[0, 1e9)` from the thread-local generator
#[cfg(feature = "random-seed")]
pub fn random_seed() -> u32 {
    use rand::Rng;
    rand::rng().random_range(0..GameConfig::RANDOM_SEED_BOUND)
}

mod ai_side {
    use blokus_core::Player;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    const NONE: &str = "none";

    pub fn serialize<S: Serializer>(value: &Option<Player>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(player) => player.serialize(s),
            None => s.serialize_str(NONE),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Player>, D::Error> {
        let text = String::deserialize(d)?;
        match text.as_str() {
            NONE => Ok(None),
            "cyan" => Ok(Some(Player::Cyan)),
            "red" => Ok(Some(Player::Red)),
            other => Err(D::Error::unknown_variant(other, &["cyan", "red", NONE])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 15);
        assert_eq!(config.ai_player, Some(Player::Red));
        assert_eq!(config.ai_delay_ms, 300);
        assert_eq!(config.pool_policy, PoolPolicy::Reusable);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_from_toml_full() {
        let config = GameConfig::from_toml_str(
            r#"
            board_size = 20
            seed = "blokus"
            ai_player = "cyan"
            ai_delay_ms = 0
            pool_policy = "consumable"
            "#,
        )
        .unwrap();
        assert_eq!(config.board_size, 20);
        assert_eq!(config.seed.as_deref(), Some("blokus"));
        assert_eq!(config.ai_player, Some(Player::Cyan));
        assert_eq!(config.ai_delay_ms, 0);
        assert_eq!(config.pool_policy, PoolPolicy::Consumable);
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let config = GameConfig::from_toml_str("ai_player = \"none\"").unwrap();
        assert_eq!(config.ai_player, None);
        assert_eq!(config.board_size, GameConfig::DEFAULT_BOARD_SIZE);
        assert_eq!(config.ai_delay_ms, GameConfig::DEFAULT_AI_DELAY_MS);
    }

    #[test]
    fn test_from_toml_clamps_size() {
        assert_eq!(GameConfig::from_toml_str("board_size = 2").unwrap().board_size, 5);
        assert_eq!(
            GameConfig::from_toml_str("board_size = 5000").unwrap().board_size,
            1000
        );
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(GameConfig::from_toml_str("board_size = \"big\"").is_err());
        assert!(GameConfig::from_toml_str("ai_player = \"green\"").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GameConfig::seeded(12, "abc").with_ai_player(None);
        let text = config.to_toml_string().unwrap();
        assert_eq!(GameConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_seed_resolution() {
        assert_eq!(GameConfig::seeded(10, "blokus").resolve_seed(|| 7), 2_936_305_337);
        assert_eq!(GameConfig::seeded(10, "   ").resolve_seed(|| 7), 7);
        assert_eq!(GameConfig::default().resolve_seed(|| 9), 9);
    }

    #[cfg(feature = "random-seed")]
    #[test]
    fn test_random_seed_in_range() {
        for _ in 0..32 {
            assert!(random_seed() < GameConfig::RANDOM_SEED_BOUND);
        }
    }
}
