use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;
use super::suit::Suit;
use crate::Value;

/// The nine hand rankings, weakest first. The discriminant is exactly the
/// 4-bit prefix of an evaluated Value, so ordering agrees with evaluation.
///
/// Each variant carries fixed combinatorial constants: how many distinct
/// ranks a representative five-card class uses, how many equivalence
/// classes the category holds, and how many of the 133,784,560 seven-card
/// hands land in it. They are cross-check invariants, never computed.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOAK = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOAK = 7,
    StraightFlush = 8,
}

impl Category {
    pub const fn all() -> &'static [Self] {
        &[
            Self::HighCard,
            Self::OnePair,
            Self::TwoPair,
            Self::ThreeOAK,
            Self::Straight,
            Self::Flush,
            Self::FullHouse,
            Self::FourOAK,
            Self::StraightFlush,
        ]
    }

    /// distinct ranks in a representative five-card class
    pub const fn distinct(&self) -> usize {
        match self {
            Self::HighCard => 5,
            Self::OnePair => 4,
            Self::TwoPair => 3,
            Self::ThreeOAK => 3,
            Self::Straight => 5,
            Self::Flush => 5,
            Self::FullHouse => 2,
            Self::FourOAK => 2,
            Self::StraightFlush => 5,
        }
    }

    /// distinct equivalence classes reachable from seven cards
    pub const fn classes(&self) -> usize {
        match self {
            Self::HighCard => 407,
            Self::OnePair => 1470,
            Self::TwoPair => 763,
            Self::ThreeOAK => 575,
            Self::Straight => 10,
            Self::Flush => 1277,
            Self::FullHouse => 156,
            Self::FourOAK => 156,
            Self::StraightFlush => 10,
        }
    }

    /// concrete seven-card hands mapping into this category
    pub const fn hands(&self) -> usize {
        match self {
            Self::HighCard => 23_294_460,
            Self::OnePair => 58_627_800,
            Self::TwoPair => 31_433_400,
            Self::ThreeOAK => 6_461_620,
            Self::Straight => 6_180_020,
            Self::Flush => 4_047_644,
            Self::FullHouse => 3_473_184,
            Self::FourOAK => 224_848,
            Self::StraightFlush => 41_584,
        }
    }

    /// Recover the ordered five cards that justify this hand's rank.
    /// Read-only audit/display information derived from the packed fields;
    /// suit choices fall back to the fixed Club..Spade order, and the wheel
    /// lists its ace low and last.
    pub fn cards(&self, hand: &Hand) -> Vec<Card> {
        let value = hand.evaluate();
        assert!(Self::from(value) == *self, "hand is not a {}", self);
        let hi = ((value >> 13) & 0x1FFF) as u16;
        let lo = (value & 0x1FFF) as u16;
        let mut cards = Vec::with_capacity(5);
        match self {
            Self::StraightFlush => run(hand, Rank::from(hi), hand.flush(), &mut cards),
            Self::Straight => run(hand, Rank::from(hi), None, &mut cards),
            Self::Flush => {
                let suit = hand.flush().expect("five suited cards");
                for rank in ranks(lo) {
                    cards.push(Card::of(rank, suit));
                }
            }
            Self::FourOAK => {
                claim(hand, Rank::from(hi), 4, &mut cards);
                claim(hand, Rank::from(lo), 1, &mut cards);
            }
            Self::FullHouse => {
                claim(hand, Rank::from(hi), 3, &mut cards);
                claim(hand, Rank::from(lo), 2, &mut cards);
            }
            Self::ThreeOAK => {
                claim(hand, Rank::from(hi), 3, &mut cards);
                for rank in ranks(lo) {
                    claim(hand, rank, 1, &mut cards);
                }
            }
            Self::TwoPair => {
                for rank in ranks(hi) {
                    claim(hand, rank, 2, &mut cards);
                }
                claim(hand, Rank::from(lo), 1, &mut cards);
            }
            Self::OnePair => {
                claim(hand, Rank::from(hi), 2, &mut cards);
                for rank in ranks(lo) {
                    claim(hand, rank, 1, &mut cards);
                }
            }
            Self::HighCard => {
                for rank in ranks(lo) {
                    claim(hand, rank, 1, &mut cards);
                }
            }
        }
        cards
    }
}

/// ranks of a 13-bit mask, highest first
fn ranks(mask: u16) -> impl Iterator<Item = Rank> {
    (0..13u8)
        .rev()
        .filter(move |r| mask & (1u16 << *r) != 0)
        .map(Rank::from)
}

/// the first n held cards of a rank, in Club..Spade order
fn claim(hand: &Hand, rank: Rank, n: usize, cards: &mut Vec<Card>) {
    Suit::all()
        .iter()
        .map(|suit| Card::of(rank, *suit))
        .filter(|card| hand.contains(*card))
        .take(n)
        .for_each(|card| cards.push(card));
}

/// five consecutive ranks downward from the high card
fn run(hand: &Hand, high: Rank, suit: Option<Suit>, cards: &mut Vec<Card>) {
    let high = u8::from(high) as i8;
    for rank in (0..5).map(|step| match high - step {
        -1 => Rank::Ace,
        r => Rank::from(r as u8),
    }) {
        let card = match suit {
            Some(suit) => Card::of(rank, suit),
            None => Suit::all()
                .iter()
                .map(|suit| Card::of(rank, *suit))
                .find(|card| hand.contains(*card))
                .expect("straight rank present"),
        };
        cards.push(card);
    }
}

/// Value injection: the packed value's top 4 bits
impl From<Value> for Category {
    fn from(value: Value) -> Self {
        match value >> 26 {
            0 => Self::HighCard,
            1 => Self::OnePair,
            2 => Self::TwoPair,
            3 => Self::ThreeOAK,
            4 => Self::Straight,
            5 => Self::Flush,
            6 => Self::FullHouse,
            7 => Self::FourOAK,
            8 => Self::StraightFlush,
            n => panic!("Invalid category bits: {}", n),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::HighCard => write!(f, "HighCard"),
            Self::OnePair => write!(f, "OnePair"),
            Self::TwoPair => write!(f, "TwoPair"),
            Self::ThreeOAK => write!(f, "ThreeOfAKind"),
            Self::Straight => write!(f, "Straight"),
            Self::Flush => write!(f, "Flush"),
            Self::FullHouse => write!(f, "FullHouse"),
            Self::FourOAK => write!(f, "FourOfAKind"),
            Self::StraightFlush => write!(f, "StraightFlush"),
        }
    }
}
