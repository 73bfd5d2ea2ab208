use crate::{Card, Deck, EquippedWeapon, RngState, RulesConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod combat;
mod room;
mod state;

pub use combat::{resolve_fight, Fight};

/// Why a command was turned down. A rejected command never changes the run.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("no run in progress")]
    NoRun,
    #[error("run is over")]
    RunOver,
    #[error("room index {index} out of range (room holds {room_len})")]
    IndexOutOfRange { index: usize, room_len: usize },
    #[error("skip already used for this room cycle")]
    SkipUnavailable,
    #[error("room must be full to skip (holds {len})")]
    RoomNotFull { len: usize },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RunOutcome {
    Victory,
    Defeat,
}

#[derive(Debug, Clone)]
pub struct RunState {
    config: RulesConfig,
    rng: RngState,
    deck: Deck,
    room: Vec<Card>,
    carry: Option<Card>,
    hp: i32,
    weapon: Option<EquippedWeapon>,
    score: u32,
    skip_available: bool,
    outcome: Option<RunOutcome>,
}

/// What a single `play_card` did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayResult {
    pub card: Card,
    pub hp_delta: i32,
    pub score_delta: u32,
    /// Set when the play left one card behind and it moved on to the next room.
    pub carried: Option<Card>,
    pub outcome: Option<RunOutcome>,
}

impl PlayResult {
    pub fn run_over(&self) -> bool {
        self.outcome.is_some()
    }
}
