use super::card::Card;
use super::category::Category;
use super::lookup;
use super::suit::Suit;
use crate::Value;

const MASK: u64 = 0x1FFF;
/// bits 0, 13, 26: one sample per rank-count tier
const TIERS: u64 = 0x0400_2001;

/// Hand accumulates dealt cards into packed bit vectors. It is a value type:
/// deal() folds a card into a copy, so a board-seeded Hand can be reused for
/// the hero and every opponent of a trial without recomputation or aliasing.
///
/// cards       52-bit set, four 13-bit suit blocks (suit-major)
/// ranks       13-bit set of ranks present at all
/// rank_counts three stacked 13-bit tiers: rank occurs >=2, >=3, >=4
/// suit_counts four stacked  4-bit tiers: suit occurs >=2, >=3, >=4, >=5
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Hand {
    cards: u64,
    ranks: u16,
    rank_counts: u64,
    suit_counts: u32,
}

impl Hand {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.cards.count_ones() as usize
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards & card.pack() != 0
    }

    /// the 13-bit rank slice of one suit
    pub fn of(&self, suit: &Suit) -> u16 {
        ((self.cards & u64::from(*suit)) >> (13 * u8::from(*suit))) as u16
    }

    /// the suit holding five or more cards, if any
    pub fn flush(&self) -> Option<Suit> {
        let tier = (self.suit_counts >> 12) & 0xF;
        match tier {
            0 => None,
            t => Some(Suit::from(t.trailing_zeros() as u8)),
        }
    }

    /// fold one card into a copy of the accumulator
    pub fn deal(mut self, card: Card) -> Self {
        let bit = card.pack();
        assert!(self.cards & bit == 0, "{} dealt twice", card);
        let r = u32::from(u8::from(card.rank()));
        let s = u32::from(u8::from(card.suit()));
        if (self.cards >> (13 * s)) & MASK != 0 {
            let tier = ((self.suit_counts >> s) & 0x1111).count_ones().min(3);
            self.suit_counts |= 1 << (s + 4 * tier);
        }
        let rbit = 1u16 << r;
        if self.ranks & rbit != 0 {
            let tier = ((self.rank_counts >> r) & TIERS).count_ones();
            self.rank_counts |= 1u64 << (r + 13 * tier);
        } else {
            self.ranks |= rbit;
        }
        self.cards |= bit;
        self
    }

    /// Collapse 7 cards into a 30-bit strength. The top 4 bits name the
    /// Category, the low 26 are two 13-bit rank masks (primary, kickers);
    /// unsigned comparison orders hands exactly and ties exactly.
    ///
    /// One table answers every rank-set question: straight detection over
    /// the rank union and over the flush suit's slice, and best-five
    /// selection for the no-pair paths. Category dispatch goes through a
    /// single match on the classification key, not a card-by-card search.
    pub fn evaluate(&self) -> Value {
        assert!(self.size() == 7, "evaluate requires exactly 7 cards");
        let singles = self.ranks;
        let pairs = (self.rank_counts & MASK) as u16;
        let trips = ((self.rank_counts >> 13) & MASK) as u16;
        let quads = ((self.rank_counts >> 26) & MASK) as u16;
        let suited = self.flush().map(|suit| self.of(&suit));
        let suitbest = suited.map(lookup::best_five);
        let best = lookup::best_five(singles);
        let key = (
            matches!(suitbest, Some(entry) if entry < 0),
            quads != 0,
            (trips & !quads).count_ones(),
            (pairs & !trips).count_ones(),
            suited.is_some(),
            best < 0,
        );
        match key {
            (true, _, _, _, _, _) => {
                pack(Category::StraightFlush, high(suitbest.expect("flushed")), 0)
            }
            (_, true, _, _, _, _) => {
                pack(Category::FourOAK, quads, top(singles & !quads, 1))
            }
            (_, _, 2, _, _, _) => {
                let over = top(trips, 1);
                pack(Category::FullHouse, over, top(trips & !over, 1))
            }
            (_, _, 1, 1.., _, _) => {
                pack(Category::FullHouse, trips, top(pairs & !trips, 1))
            }
            (_, _, _, _, true, _) => {
                pack(Category::Flush, 0, suitbest.expect("flushed") as u16)
            }
            (_, _, _, _, _, true) => {
                pack(Category::Straight, high(best), 0)
            }
            (_, _, 1, 0, _, _) => {
                pack(Category::ThreeOAK, trips, top(singles & !trips, 2))
            }
            (_, _, 0, 2.., _, _) => {
                let pair = top(pairs, 2);
                pack(Category::TwoPair, pair, top(singles & !pair, 1))
            }
            (_, _, 0, 1, _, _) => {
                pack(Category::OnePair, pairs, top(singles & !pairs, 3))
            }
            (_, _, 0, 0, _, _) => {
                pack(Category::HighCard, 0, best as u16)
            }
            _ => unreachable!("no other 7-card shapes"),
        }
    }
}

/// pack (category, primary ranks, kickers) into the comparable 30-bit value
const fn pack(category: Category, hi: u16, lo: u16) -> Value {
    (category as u32) << 26 | (hi as u32) << 13 | lo as u32
}

/// a straight table entry back into its high rank's one-hot mask
fn high(entry: i16) -> u16 {
    1u16 << (!entry as u16)
}

/// keep the n highest bits by clearing from the bottom
fn top(mask: u16, n: u32) -> u16 {
    let mut keep = mask;
    while keep.count_ones() > n {
        keep &= keep - 1;
    }
    keep
}

/// u64 isomorphism
/// the 52-bit card set; counts are rebuilt card by card
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        let mut bits = n & ((1 << 52) - 1);
        let mut hand = Self::empty();
        while bits > 0 {
            hand = hand.deal(Card::from(bits.trailing_zeros() as u8));
            bits &= bits - 1;
        }
        hand
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.cards
    }
}

/// Vec<Card> isomorphism (always comes out sorted by deck position)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        let mut value = u64::from(h);
        let mut cards = Vec::with_capacity(h.size());
        while value > 0 {
            cards.push(Card::from(value.trailing_zeros() as u8));
            value &= value - 1;
        }
        cards
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), Self::deal)
    }
}

/// str isomorphism, whitespace separated
impl From<&str> for Hand {
    fn from(s: &str) -> Self {
        s.split_whitespace().map(Card::from).collect()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in Vec::<Card>::from(*self) {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}

impl crate::Arbitrary for Hand {
    fn random() -> Self {
        use super::deck::Deck;
        use rand::Rng;
        let mut deck = Deck::new(rand::rng().random(), Hand::empty());
        (0..7).map(|_| deck.deal()).collect()
    }
}
