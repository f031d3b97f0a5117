use super::card::Card;
use super::hand::Hand;

/// The two private cards. Duplicates are a caller-input error, rejected
/// at construction before any simulation work starts.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Pocket(Card, Card);

impl Pocket {
    pub fn new(a: Card, b: Card) -> anyhow::Result<Self> {
        anyhow::ensure!(a != b, "pocket holds {} twice", a);
        Ok(Self(a, b))
    }
    pub fn cards(&self) -> (Card, Card) {
        (self.0, self.1)
    }
}

impl TryFrom<(Card, Card)> for Pocket {
    type Error = anyhow::Error;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        Self::new(a, b)
    }
}

impl From<Pocket> for Hand {
    fn from(pocket: Pocket) -> Self {
        Hand::empty().deal(pocket.0).deal(pocket.1)
    }
}

impl std::fmt::Display for Pocket {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

impl crate::Arbitrary for Pocket {
    fn random() -> Self {
        let a = Card::random();
        loop {
            let b = Card::random();
            if let Ok(pocket) = Self::new(a, b) {
                return pocket;
            }
        }
    }
}

use crate::Arbitrary;
