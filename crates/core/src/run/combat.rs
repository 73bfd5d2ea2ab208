use super::*;
use crate::{CardKind, Event, EventBus, Rank};
use tracing::debug;

/// Result of one monster meeting the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fight {
    pub damage: i32,
    /// Limit of the weapon that engaged, before it was lowered. `None` when
    /// the player fought bare-handed or the weapon could not engage.
    pub engaged_limit: Option<Rank>,
}

/// Applies the weapon-limit rule to `weapon` and returns the damage taken.
///
/// A weapon engages any monster at or below its limit, absorbs its own value
/// of damage, and from then on only engages monsters at or below the one it
/// just beat. Above the limit the weapon sits out untouched.
pub fn resolve_fight(weapon: &mut Option<EquippedWeapon>, monster: Rank) -> Fight {
    let full = i32::from(monster.value());
    match weapon {
        Some(weapon) if weapon.can_engage(monster) => {
            let engaged_limit = Some(weapon.limit);
            weapon.limit = monster;
            Fight {
                damage: (full - weapon.value()).max(0),
                engaged_limit,
            }
        }
        _ => Fight {
            damage: full,
            engaged_limit: None,
        },
    }
}

impl RunState {
    pub fn play_card(&mut self, index: usize, events: &mut EventBus) -> Result<PlayResult, RunError> {
        if self.is_over() {
            return Err(RunError::RunOver);
        }
        if index >= self.room.len() {
            return Err(RunError::IndexOutOfRange {
                index,
                room_len: self.room.len(),
            });
        }

        let hp_before = self.hp;
        let score_before = self.score;
        let card = self.room.remove(index);
        self.resolve(card, events);

        let mut carried = None;
        if self.hp <= 0 {
            self.finish(RunOutcome::Defeat, events);
        } else if self.room.len() == 1 {
            let last = self.room.remove(0);
            self.carry = Some(last);
            self.skip_available = true;
            carried = Some(last);
            events.push(Event::CardCarried { card: last });
            self.enter_next_room(events);
        } else if self.room.is_empty() {
            self.enter_next_room(events);
        }

        Ok(PlayResult {
            card,
            hp_delta: self.hp - hp_before,
            score_delta: self.score - score_before,
            carried,
            outcome: self.outcome,
        })
    }

    fn resolve(&mut self, card: Card, events: &mut EventBus) {
        match card.kind() {
            CardKind::Potion => {
                let before = self.hp;
                self.hp = (self.hp + card.value()).min(self.config.max_hp);
                debug!(rank = ?card.rank(), hp = self.hp, "potion");
                events.push(Event::PotionDrunk {
                    rank: card.rank(),
                    healed: self.hp - before,
                    hp: self.hp,
                });
            }
            CardKind::Weapon => {
                let replaced = self
                    .weapon
                    .replace(EquippedWeapon::from_card(&card))
                    .map(|old| old.base);
                debug!(rank = ?card.rank(), ?replaced, "weapon equipped");
                events.push(Event::WeaponEquipped {
                    rank: card.rank(),
                    replaced,
                });
            }
            CardKind::Monster => {
                let fight = resolve_fight(&mut self.weapon, card.rank());
                self.hp = (self.hp - fight.damage).max(0);
                self.score += 1;
                debug!(rank = ?card.rank(), damage = fight.damage, hp = self.hp, "monster");
                events.push(Event::MonsterFought {
                    rank: card.rank(),
                    weapon_limit: fight.engaged_limit,
                    damage: fight.damage,
                    hp: self.hp,
                });
            }
        }
    }
}
