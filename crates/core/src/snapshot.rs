use crate::{Card, CardKind, EquippedWeapon, RunOutcome, RunState, Suit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub suit: Suit,
    pub kind: CardKind,
    pub rank: u8,
    pub display_rank: String,
}

impl CardView {
    /// `"♥ 7 (Potion)"`: suit symbol, display rank, kind.
    pub fn label(&self) -> String {
        format!(
            "{} {} ({})",
            self.suit.symbol(),
            self.display_rank,
            self.kind.name()
        )
    }
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            suit: card.suit(),
            kind: card.kind(),
            rank: card.rank().value(),
            display_rank: card.rank().display(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeaponView {
    pub value: u8,
    pub limit: u8,
}

impl From<&EquippedWeapon> for WeaponView {
    fn from(weapon: &EquippedWeapon) -> Self {
        Self {
            value: weapon.base.value(),
            limit: weapon.limit.value(),
        }
    }
}

/// Read-only picture of a run; everything a renderer needs and nothing it can
/// mutate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RunSnapshot {
    pub hp: i32,
    pub max_hp: i32,
    pub deck_count: usize,
    pub score: u32,
    pub seed: u32,
    pub room: Vec<CardView>,
    pub carry: Option<CardView>,
    pub equipped_weapon: Option<WeaponView>,
    pub skip_available: bool,
    pub room_full: bool,
    pub run_over: bool,
    pub victory: Option<bool>,
}

impl RunState {
    pub fn snapshot(&self) -> RunSnapshot {
        RunSnapshot {
            hp: self.hp(),
            max_hp: self.max_hp(),
            deck_count: self.deck().len(),
            score: self.score(),
            seed: self.seed(),
            room: self.room().iter().map(CardView::from).collect(),
            carry: self.carry().as_ref().map(CardView::from),
            equipped_weapon: self.weapon().as_ref().map(WeaponView::from),
            skip_available: self.skip_available(),
            room_full: self.room_full(),
            run_over: self.is_over(),
            victory: self
                .outcome()
                .map(|outcome| outcome == RunOutcome::Victory),
        }
    }
}
