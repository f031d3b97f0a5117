use super::card::Card;
use super::hand::Hand;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// One simulation lineage's undealt cards: a fixed arena, a live boundary,
/// and a private generator. cards[..live] are undrawn; dealing swaps the
/// chosen slot to the tail and shrinks the boundary, so a reshuffle is just
/// a boundary reset and the partial Fisher-Yates runs lazily during deals.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: [Card; 52],
    size: usize,
    live: usize,
    rng: SmallRng,
}

impl Deck {
    /// all 52 cards minus the excluded set, seeded for this lineage
    pub fn new(seed: u64, excluded: Hand) -> Self {
        let mut cards = [Card::from(0u8); 52];
        let mut size = 0;
        for n in 0..52u8 {
            let card = Card::from(n);
            if !excluded.contains(card) {
                cards[size] = card;
                size += 1;
            }
        }
        Self {
            cards,
            size,
            live: size,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// cards still undrawn since the last shuffle
    pub fn live(&self) -> usize {
        self.live
    }

    /// reset the boundary to the full deck without touching the array
    pub fn shuffle(&mut self) {
        self.live = self.size;
    }

    /// Draw uniformly from the undrawn prefix: random slot, swap to the
    /// tail, shrink the boundary. O(1), allocation free.
    pub fn deal(&mut self) -> Card {
        assert!(self.live > 0, "deal from empty deck");
        let slot = self.rng.random_range(0..self.live);
        self.cards.swap(slot, self.live - 1);
        self.live -= 1;
        self.cards[self.live]
    }

    /// An independent sibling lineage: the arena is deep-copied and the
    /// child generator is derived from (and advances) this one's state,
    /// never copied, so subsequent draws are statistically independent.
    pub fn split(&mut self) -> Self {
        Self {
            cards: self.cards,
            size: self.size,
            live: self.live,
            rng: SmallRng::from_rng(&mut self.rng),
        }
    }
}
