use crate::CardView;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// The suit alone decides what a card does when played.
    pub fn kind(self) -> CardKind {
        match self {
            Suit::Hearts => CardKind::Potion,
            Suit::Diamonds => CardKind::Weapon,
            Suit::Clubs | Suit::Spades => CardKind::Monster,
        }
    }

    /// Highest rank this suit carries. Face cards and aces only exist as monsters.
    pub fn max_rank(self) -> Rank {
        match self.kind() {
            CardKind::Monster => Rank::Ace,
            CardKind::Potion | CardKind::Weapon => Rank::Ten,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardKind {
    Potion,
    Weapon,
    Monster,
}

impl CardKind {
    pub fn name(self) -> &'static str {
        match self {
            CardKind::Potion => "Potion",
            CardKind::Weapon => "Weapon",
            CardKind::Monster => "Monster",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const NUMERIC: [Rank; 9] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
    ];

    pub const FACES: [Rank; 4] = [Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

    /// Numeric value in `2..=14`.
    pub fn value(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
        }
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.iter().copied().find(|rank| rank.value() == value)
    }

    pub fn display(self) -> String {
        match self {
            Rank::Jack => "J".to_string(),
            Rank::Queen => "Q".to_string(),
            Rank::King => "K".to_string(),
            Rank::Ace => "A".to_string(),
            numeric => numeric.value().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("{suit:?} cards cannot carry rank {rank:?}")]
    InvalidRank { suit: Suit, rank: Rank },
    #[error("{suit:?} is not a monster suit")]
    NotAMonster { suit: Suit },
}

/// An immutable playing card. Construction enforces the suit/rank table, so a
/// `Card` in hand is always one the deck factory could have produced.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Result<Self, CardError> {
        if rank > suit.max_rank() {
            return Err(CardError::InvalidRank { suit, rank });
        }
        Ok(Self { suit, rank })
    }

    /// For tables already known to respect the suit/rank rules.
    pub(crate) fn new_unchecked(suit: Suit, rank: Rank) -> Self {
        debug_assert!(rank <= suit.max_rank());
        Self { suit, rank }
    }

    pub fn potion(rank: Rank) -> Result<Self, CardError> {
        Self::new(Suit::Hearts, rank)
    }

    pub fn weapon(rank: Rank) -> Result<Self, CardError> {
        Self::new(Suit::Diamonds, rank)
    }

    pub fn monster(suit: Suit, rank: Rank) -> Result<Self, CardError> {
        if suit.kind() != CardKind::Monster {
            return Err(CardError::NotAMonster { suit });
        }
        Self::new(suit, rank)
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn kind(&self) -> CardKind {
        self.suit.kind()
    }

    pub fn value(&self) -> i32 {
        i32::from(self.rank.value())
    }

    pub fn is_monster(&self) -> bool {
        self.kind() == CardKind::Monster
    }

    pub fn label(&self) -> String {
        CardView::from(self).label()
    }
}

/// The live weapon the player holds. Distinct from the Diamonds card that
/// created it: the card never changes, the limit on this value does.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EquippedWeapon {
    pub suit: Suit,
    pub base: Rank,
    pub limit: Rank,
}

impl EquippedWeapon {
    pub fn from_card(card: &Card) -> Self {
        Self {
            suit: card.suit(),
            base: card.rank(),
            limit: Rank::Ace,
        }
    }

    pub fn can_engage(&self, monster: Rank) -> bool {
        monster <= self.limit
    }

    pub fn value(&self) -> i32 {
        i32::from(self.base.value())
    }
}
