//! Shared playing-card helpers.
//!
//! Blackjack deals from an infinite shoe: every draw is one of the 13 ranks with equal
//! probability, and suits do not matter. Rank indices are `0..=12`, where 0 is Ace and 12 is
//! King.

use crate::rng::RandomSource;
use gamblesim_types::BLACKJACK_TARGET;
use std::fmt;

/// Ranks per suit.
pub(crate) const RANKS_PER_SUIT: usize = 13;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rank {
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
}

impl TryFrom<u8> for Rank {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ALL.get(value as usize).copied().ok_or(value)
    }
}

impl Rank {
    pub const ALL: [Rank; RANKS_PER_SUIT] = [
        Rank::Ace,
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
    ];

    /// Deals one card from the infinite shoe.
    pub fn deal(rng: &mut dyn RandomSource) -> Rank {
        Rank::ALL[rng.draw(RANKS_PER_SUIT) % RANKS_PER_SUIT]
    }

    /// Returns the blackjack value with Ace counted high (11).
    pub fn value(self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            other => other as u8 + 1,
        }
    }

    pub fn is_ace(self) -> bool {
        self == Rank::Ace
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ace => f.write_str("ace"),
            Rank::Jack => f.write_str("jack"),
            Rank::Queen => f.write_str("queen"),
            Rank::King => f.write_str("king"),
            other => write!(f, "{}", *other as u8 + 1),
        }
    }
}

/// Best total for a hand: aces count 11, then drop to 1 one at a time while the hand is over
/// 21.
pub fn hand_value(cards: &[Rank]) -> u8 {
    let mut total: u32 = cards.iter().map(|card| u32::from(card.value())).sum();
    let mut soft_aces = cards.iter().filter(|card| card.is_ace()).count();
    while total > u32::from(BLACKJACK_TARGET) && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }
    u8::try_from(total).unwrap_or(u8::MAX)
}

/// True for a two-card 21.
pub fn is_natural(cards: &[Rank]) -> bool {
    cards.len() == 2 && hand_value(cards) == BLACKJACK_TARGET
}
