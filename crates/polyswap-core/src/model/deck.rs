use crate::model::card::Card;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Every legal card for a given ball count and multiplicity cap. Built once
/// per search and only reordered afterwards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Enumerates all non-empty subsets of the ranks `1..=num_balls`,
    /// keeping those within the multiplicity cap. The zero card joins the
    /// deck when `allow_zeros` is set.
    pub fn build(allow_zeros: bool, max_multiplicity: usize, num_balls: u8) -> Self {
        let mut cards = Vec::new();
        if allow_zeros {
            cards.push(Card::zero());
        }
        let candidates = 1u32 << num_balls;
        for bits in 1..candidates {
            let card = Card::from_bits(bits);
            if card.multiplicity() <= max_multiplicity {
                cards.push(card);
            }
        }
        Self { cards }
    }

    pub fn shuffled_with_seed(
        allow_zeros: bool,
        max_multiplicity: usize,
        num_balls: u8,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut deck = Self::build(allow_zeros, max_multiplicity, num_balls);
        deck.shuffle_in_place(&mut rng);
        deck
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
