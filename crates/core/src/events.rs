use crate::{Card, Rank, RunOutcome};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum Event {
    RunStarted {
        seed: u32,
        deck: usize,
    },
    RoomEntered {
        cards: Vec<Card>,
        carried: bool,
        deck: usize,
    },
    PotionDrunk {
        rank: Rank,
        healed: i32,
        hp: i32,
    },
    WeaponEquipped {
        rank: Rank,
        replaced: Option<Rank>,
    },
    MonsterFought {
        rank: Rank,
        /// Limit of the weapon that engaged, before it ratcheted down.
        weapon_limit: Option<Rank>,
        damage: i32,
        hp: i32,
    },
    CardCarried {
        card: Card,
    },
    RoomSkipped {
        returned: usize,
        deck: usize,
    },
    RunEnded {
        outcome: RunOutcome,
        hp: i32,
        score: u32,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
