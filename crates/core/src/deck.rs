use crate::{Card, Rank, RngState, Suit};
use serde::Serialize;

/// Draw pile. The top of the deck is the end of `draw`, so drawing is a pop.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    draw: Vec<Card>,
}

pub const DUNGEON_SIZE: usize = 44;

/// Builds the unshuffled dungeon: 2..=10 in every suit, plus the J/Q/K/A
/// monsters of Clubs and Spades.
pub fn build_deck() -> Deck {
    let mut draw = Vec::with_capacity(DUNGEON_SIZE);
    for rank in Rank::NUMERIC {
        for suit in Suit::ALL {
            draw.push(Card::new_unchecked(suit, rank));
        }
    }
    for rank in Rank::FACES {
        for suit in [Suit::Clubs, Suit::Spades] {
            draw.push(Card::new_unchecked(suit, rank));
        }
    }
    Deck { draw }
}

impl Deck {
    /// Builds a deck whose first listed card is the first one drawn.
    pub fn from_top(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut draw: Vec<Card> = cards.into_iter().collect();
        draw.reverse();
        Self { draw }
    }

    pub fn len(&self) -> usize {
        self.draw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw.is_empty()
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.draw.pop()
    }

    /// Cards in draw order, top first.
    pub fn iter_from_top(&self) -> impl Iterator<Item = &Card> + '_ {
        self.draw.iter().rev()
    }

    /// Puts `cards` back so they are the next ones drawn, `cards[0]` first.
    pub fn return_to_top(&mut self, cards: &[Card]) {
        self.draw.extend(cards.iter().rev().copied());
    }

    /// Puts `cards` under the rest of the deck, still drawn `cards[0]` first
    /// once everything above them is gone.
    pub fn return_to_bottom(&mut self, cards: &[Card]) {
        let mut block: Vec<Card> = cards.iter().rev().copied().collect();
        block.append(&mut self.draw);
        self.draw = block;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardKind;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank).unwrap()
    }

    #[test]
    fn factory_builds_the_full_dungeon() {
        let deck = build_deck();
        assert_eq!(deck.len(), DUNGEON_SIZE);
        let count = |kind| deck.iter_from_top().filter(|c| c.kind() == kind).count();
        assert_eq!(count(CardKind::Potion), 9);
        assert_eq!(count(CardKind::Weapon), 9);
        assert_eq!(count(CardKind::Monster), 26);
    }

    #[test]
    fn factory_is_repeatable() {
        assert_eq!(build_deck(), build_deck());
    }

    #[test]
    fn from_top_draws_in_listed_order() {
        let mut deck = Deck::from_top([
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Ace),
        ]);
        assert_eq!(deck.draw(), Some(card(Suit::Hearts, Rank::Two)));
        assert_eq!(deck.draw(), Some(card(Suit::Clubs, Rank::Ace)));
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn returned_block_keeps_order_on_top() {
        let mut deck = Deck::from_top([card(Suit::Spades, Rank::Two)]);
        let block = [card(Suit::Hearts, Rank::Three), card(Suit::Clubs, Rank::Four)];
        deck.return_to_top(&block);
        let order: Vec<Card> = deck.iter_from_top().copied().collect();
        assert_eq!(order, vec![block[0], block[1], card(Suit::Spades, Rank::Two)]);
    }

    #[test]
    fn returned_block_keeps_order_at_bottom() {
        let mut deck = Deck::from_top([card(Suit::Spades, Rank::Two)]);
        let block = [card(Suit::Hearts, Rank::Three), card(Suit::Clubs, Rank::Four)];
        deck.return_to_bottom(&block);
        let order: Vec<Card> = deck.iter_from_top().copied().collect();
        assert_eq!(order, vec![card(Suit::Spades, Rank::Two), block[0], block[1]]);
    }
}
