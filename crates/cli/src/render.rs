use cursed_core::{Event, RunSnapshot};

pub fn render_snapshot(snapshot: &RunSnapshot) -> String {
    let weapon = match snapshot.equipped_weapon {
        Some(weapon) => format!("{} (limit {})", weapon.value, weapon.limit),
        None => "(none)".to_string(),
    };
    let mut lines = vec![format!(
        "HP {}/{} | Weapon {} | Deck {} | Score {} | Seed {}",
        snapshot.hp, snapshot.max_hp, weapon, snapshot.deck_count, snapshot.score, snapshot.seed
    )];
    for (index, card) in snapshot.room.iter().enumerate() {
        lines.push(format!("  [{index}] {}", card.label()));
    }
    if let Some(card) = snapshot.carry.as_ref() {
        lines.push(format!("  carried: {}", card.label()));
    }
    let skip = if snapshot.skip_available && snapshot.room_full && !snapshot.run_over {
        "skip available"
    } else {
        "skip unavailable"
    };
    lines.push(format!("  {skip}"));
    match snapshot.victory {
        Some(true) => lines.push(format!(
            "Victory! HP left: {} Score: {}",
            snapshot.hp, snapshot.score
        )),
        Some(false) => lines.push(format!("Defeat... Score: {}", snapshot.score)),
        None => {}
    }
    lines.join("\n")
}

pub fn render_event(event: &Event) -> String {
    match event {
        Event::RunStarted { seed, deck } => format!("run started (seed {seed}, {deck} cards)"),
        Event::RoomEntered { cards, carried, deck } => format!(
            "entered room of {}{} ({deck} left in deck)",
            cards.len(),
            if *carried { " with carried card" } else { "" }
        ),
        Event::PotionDrunk { rank, healed, hp } => {
            format!("potion {} healed {healed} (hp {hp})", rank.display())
        }
        Event::WeaponEquipped { rank, replaced } => match replaced {
            Some(old) => format!("weapon {} replaces {}", rank.display(), old.display()),
            None => format!("weapon {} equipped", rank.display()),
        },
        Event::MonsterFought {
            rank,
            weapon_limit,
            damage,
            hp,
        } => match weapon_limit {
            Some(_) => format!("fought {} with weapon, took {damage} (hp {hp})", rank.display()),
            None => format!("fought {} bare-handed, took {damage} (hp {hp})", rank.display()),
        },
        Event::CardCarried { card } => format!("carried {}", card.label()),
        Event::RoomSkipped { returned, deck } => {
            format!("skipped room, {returned} cards back ({deck} in deck)")
        }
        Event::RunEnded { outcome, hp, score } => {
            format!("run ended: {outcome:?} (hp {hp}, score {score})")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cursed_core::{Card, CardView, Rank, Suit};

    #[test]
    fn room_lines_use_the_card_label() {
        let card = Card::monster(Suit::Spades, Rank::Queen).unwrap();
        let snapshot = RunSnapshot {
            hp: 20,
            max_hp: 20,
            deck_count: 40,
            score: 0,
            seed: 1,
            room: vec![CardView::from(&card)],
            carry: None,
            equipped_weapon: None,
            skip_available: true,
            room_full: false,
            run_over: false,
            victory: None,
        };
        let text = render_snapshot(&snapshot);
        assert!(text.contains("[0] ♠ Q (Monster)"), "{text}");
        assert_eq!(snapshot.room[0].label(), card.label());
    }
}
