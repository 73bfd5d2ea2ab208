use crate::{AutoAction, AutoplayConfig};
use cursed_core::{CardKind, CardView, RunSnapshot, WeaponView};

/// HP a monster of `rank` would cost with `weapon` in hand.
pub fn monster_cost(rank: u8, weapon: Option<WeaponView>) -> i32 {
    match weapon {
        Some(weapon) if rank <= weapon.limit => (i32::from(rank) - i32::from(weapon.value)).max(0),
        _ => i32::from(rank),
    }
}

/// Cheapest total damage for clearing every monster in the room, fighting
/// them highest rank first so the weapon limit falls as slowly as possible.
pub fn room_damage(room: &[CardView], weapon: Option<WeaponView>) -> i32 {
    let mut ranks: Vec<u8> = room
        .iter()
        .filter(|card| card.kind == CardKind::Monster)
        .map(|card| card.rank)
        .collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    let mut weapon = weapon;
    let mut total = 0;
    for rank in ranks {
        total += monster_cost(rank, weapon);
        if let Some(held) = weapon.as_mut() {
            if rank <= held.limit {
                held.limit = rank;
            }
        }
    }
    total
}

/// Greedy pick: a better weapon, then healing when hurt, then the cheapest
/// monster, then whatever is left.
pub fn choose_action(snapshot: &RunSnapshot, config: &AutoplayConfig, allow_skip: bool) -> AutoAction {
    if allow_skip && snapshot.skip_available && snapshot.room_full {
        if let Some(threshold) = config.skip_when_damage_at_least {
            if room_damage(&snapshot.room, snapshot.equipped_weapon) >= threshold {
                return AutoAction::Skip;
            }
        }
    }

    let weapon = snapshot.equipped_weapon;
    let current_value = weapon.map(|w| w.value).unwrap_or(0);
    let best_of = |kind: CardKind| {
        snapshot
            .room
            .iter()
            .enumerate()
            .filter(|(_, card)| card.kind == kind)
            .max_by_key(|(_, card)| card.rank)
            .map(|(index, card)| (index, card.rank))
    };

    if let Some((index, rank)) = best_of(CardKind::Weapon) {
        if rank > current_value {
            return AutoAction::Play { index };
        }
    }
    if snapshot.hp < snapshot.max_hp {
        if let Some((index, _)) = best_of(CardKind::Potion) {
            return AutoAction::Play { index };
        }
    }

    let cheapest = snapshot
        .room
        .iter()
        .enumerate()
        .filter(|(_, card)| card.kind == CardKind::Monster)
        .min_by_key(|(_, card)| (monster_cost(card.rank, weapon), std::cmp::Reverse(card.rank)));
    if let Some((index, _)) = cheapest {
        return AutoAction::Play { index };
    }

    if let Some((index, _)) = best_of(CardKind::Potion) {
        return AutoAction::Play { index };
    }
    AutoAction::Play { index: 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cursed_core::Suit;

    fn view(kind: CardKind, rank: u8) -> CardView {
        let suit = match kind {
            CardKind::Potion => Suit::Hearts,
            CardKind::Weapon => Suit::Diamonds,
            CardKind::Monster => Suit::Clubs,
        };
        CardView {
            suit,
            kind,
            rank,
            display_rank: rank.to_string(),
        }
    }

    fn snapshot(room: Vec<CardView>, hp: i32, weapon: Option<WeaponView>) -> RunSnapshot {
        RunSnapshot {
            hp,
            max_hp: 20,
            deck_count: 10,
            score: 0,
            seed: 1,
            room_full: room.len() == 4,
            room,
            carry: None,
            equipped_weapon: weapon,
            skip_available: true,
            run_over: false,
            victory: None,
        }
    }

    #[test]
    fn cost_respects_weapon_limit() {
        let weapon = Some(WeaponView { value: 5, limit: 8 });
        assert_eq!(monster_cost(7, weapon), 2);
        assert_eq!(monster_cost(3, weapon), 0);
        assert_eq!(monster_cost(9, weapon), 9);
        assert_eq!(monster_cost(9, None), 9);
    }

    #[test]
    fn room_damage_fights_high_first() {
        let room = vec![view(CardKind::Monster, 4), view(CardKind::Monster, 10)];
        let weapon = Some(WeaponView { value: 6, limit: 14 });
        assert_eq!(room_damage(&room, weapon), 4);
    }

    #[test]
    fn prefers_stronger_weapon() {
        let room = vec![
            view(CardKind::Monster, 4),
            view(CardKind::Weapon, 9),
            view(CardKind::Potion, 3),
        ];
        let picked = choose_action(&snapshot(room, 12, None), &AutoplayConfig::default(), false);
        assert_eq!(picked, AutoAction::Play { index: 1 });
    }

    #[test]
    fn heals_when_hurt() {
        let room = vec![view(CardKind::Monster, 4), view(CardKind::Potion, 3)];
        let weapon = Some(WeaponView { value: 9, limit: 14 });
        let picked = choose_action(&snapshot(room, 12, weapon), &AutoplayConfig::default(), false);
        assert_eq!(picked, AutoAction::Play { index: 1 });
    }

    #[test]
    fn fights_cheapest_monster() {
        let room = vec![
            view(CardKind::Monster, 12),
            view(CardKind::Monster, 6),
            view(CardKind::Potion, 3),
        ];
        let weapon = Some(WeaponView { value: 4, limit: 7 });
        let picked = choose_action(&snapshot(room, 20, weapon), &AutoplayConfig::default(), false);
        assert_eq!(picked, AutoAction::Play { index: 1 });
    }

    #[test]
    fn skips_a_deadly_room_only_when_allowed() {
        let room = vec![
            view(CardKind::Monster, 14),
            view(CardKind::Monster, 13),
            view(CardKind::Monster, 12),
            view(CardKind::Potion, 2),
        ];
        let config = AutoplayConfig::default();
        let state = snapshot(room, 20, None);
        assert_eq!(choose_action(&state, &config, true), AutoAction::Skip);
        assert_ne!(choose_action(&state, &config, false), AutoAction::Skip);
    }
}
