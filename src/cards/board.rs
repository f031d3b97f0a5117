use super::card::Card;
use super::hand::Hand;
use super::street::Street;

/// The public cards: empty, flop, turn, or river. Constructors validate
/// that the packed set holds exactly as many bits as cards supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board(Hand);

impl Board {
    pub fn preflop() -> Self {
        Self(Hand::empty())
    }
    pub fn flop(a: Card, b: Card, c: Card) -> anyhow::Result<Self> {
        Self::gather(&[a, b, c])
    }
    pub fn turn(a: Card, b: Card, c: Card, d: Card) -> anyhow::Result<Self> {
        Self::gather(&[a, b, c, d])
    }
    pub fn river(a: Card, b: Card, c: Card, d: Card, e: Card) -> anyhow::Result<Self> {
        Self::gather(&[a, b, c, d, e])
    }

    pub fn street(&self) -> Street {
        Street::from(self.0.size())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }

    fn gather(cards: &[Card]) -> anyhow::Result<Self> {
        let mask = cards.iter().map(Card::pack).fold(0u64, |a, b| a | b);
        anyhow::ensure!(
            mask.count_ones() as usize == cards.len(),
            "board repeats a card"
        );
        Ok(Self(Hand::from(mask)))
    }
}

impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicates() {
        let a = Card::from("7c");
        let b = Card::from("Tc");
        assert!(Board::flop(a, b, a).is_err());
        assert!(Board::flop(a, b, Card::from("Ah")).is_ok());
    }

    #[test]
    fn streets_by_size() {
        let c = |s| Card::from(s);
        assert!(Board::preflop().street() == Street::Pref);
        assert!(Board::flop(c("2c"), c("3c"), c("4c")).unwrap().street() == Street::Flop);
        assert!(
            Board::turn(c("2c"), c("3c"), c("4c"), c("5c"))
                .unwrap()
                .street()
                == Street::Turn
        );
        assert!(
            Board::river(c("2c"), c("3c"), c("4c"), c("5c"), c("6c"))
                .unwrap()
                .street()
                == Street::Rive
        );
    }
}
