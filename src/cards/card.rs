#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn of(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// the card's position in the 52-bit set, as a one-hot mask
    pub fn pack(&self) -> u64 {
        u64::from(*self)
    }
    /// inverse of pack, via the lowest set bit
    pub fn unpack(mask: u64) -> Self {
        Self::from(mask)
    }
}

/// display order is by rank, suit only breaks exact ties
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank.cmp(&other.rank).then(self.suit.cmp(&other.suit))
    }
}
impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// u8 isomorphism
/// each card maps to its slot in a suit-major deck 0-51
/// Ts
/// 47
/// 0b00101111
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.rank) + u8::from(c.suit) * 13
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n % 13),
            suit: Suit::from(n / 13),
        }
    }
}

/// u64 isomorphism
/// each card is just one bit turned on, inside its suit's 13-bit block
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        Self::from(n.trailing_zeros() as u8)
    }
}

/// str isomorphism
impl From<&str> for Card {
    fn from(s: &str) -> Self {
        assert!(s.len() == 2, "Invalid card str: {}", s);
        Self {
            rank: Rank::from(&s[0..1]),
            suit: Suit::from(&s[1..2]),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..52u8))
    }
}

use super::rank::Rank;
use super::suit::Suit;
use std::fmt::{Display, Formatter, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in 0..52u8 {
            assert!(n == u8::from(Card::from(n)));
        }
    }

    #[test]
    fn bijective_u64() {
        for n in 0..52u8 {
            let card = Card::from(n);
            assert!(card == Card::unpack(card.pack()));
        }
    }

    #[test]
    fn bijective_str() {
        assert!(Card::from("Ts") == Card::of(Rank::Ten, Suit::Spade));
        assert!(Card::from("2c") == Card::of(Rank::Two, Suit::Club));
        assert!(Card::from("Ah") == Card::of(Rank::Ace, Suit::Heart));
    }
}
