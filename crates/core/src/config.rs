use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_HP: i32 = 20;
pub const DEFAULT_ROOM_SIZE: usize = 4;

/// Where a skipped room goes back into the deck.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkipReturn {
    /// Onto the draw end: the skipped cards are the next ones dealt.
    #[default]
    DrawEnd,
    /// Under the rest of the deck: dealt only after everything else.
    Bottom,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_hp must be at least 1, got {0}")]
    MaxHp(i32),
    /// One card to play and one to carry.
    #[error("room_size must be at least 2, got {0}")]
    RoomSize(usize),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesConfig {
    #[serde(default = "default_max_hp")]
    pub max_hp: i32,
    #[serde(default = "default_room_size")]
    pub room_size: usize,
    #[serde(default)]
    pub skip_return: SkipReturn,
}

fn default_max_hp() -> i32 {
    DEFAULT_MAX_HP
}

fn default_room_size() -> usize {
    DEFAULT_ROOM_SIZE
}

impl RulesConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_hp < 1 {
            return Err(ConfigError::MaxHp(self.max_hp));
        }
        if self.room_size < 2 {
            return Err(ConfigError::RoomSize(self.room_size));
        }
        Ok(())
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_hp: DEFAULT_MAX_HP,
            room_size: DEFAULT_ROOM_SIZE,
            skip_return: SkipReturn::default(),
        }
    }
}
