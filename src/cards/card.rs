use super::rank::Rank;
use super::suit::Suit;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// One of 52 cards, keyed as 4 * rank + suit with deuce-low ranks.
/// The indexer speaks the same u8 keying, so card bytes cross between
/// the two without translation; only the evaluator's Hand bitset
/// needs packing.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

// u8 isomorphism
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        (c.rank as u8) * 4 + (c.suit as u8)
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

// u64 isomorphism
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
