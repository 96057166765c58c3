use core::fmt;

/// One beat's worth of throws: the ranks of the balls leaving the hand
/// together, ordered descending, or the singleton zero card for a beat with
/// no throw at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    ranks: Vec<u8>,
}

impl Card {
    pub fn zero() -> Self {
        Self { ranks: vec![0] }
    }

    /// Decodes a bitmask into a card: a set bit at position `b` contributes
    /// the rank `b + 1`.
    pub fn from_bits(bits: u32) -> Self {
        let mut ranks = Vec::new();
        let mut rank: u8 = 1;
        let mut mask: u32 = 1;
        while mask <= bits {
            if bits & mask != 0 {
                ranks.push(rank);
            }
            rank += 1;
            mask <<= 1;
        }
        if ranks.is_empty() {
            return Self::zero();
        }
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        Self { ranks }
    }

    pub fn is_zero(&self) -> bool {
        self.ranks == [0]
    }

    /// Number of rank slots on the card; the zero card counts as one.
    pub fn multiplicity(&self) -> usize {
        self.ranks.len()
    }

    /// Highest rank on the card, 0 for the zero card.
    pub fn top_rank(&self) -> u8 {
        self.ranks[0]
    }

    pub fn ranks(&self) -> &[u8] {
        &self.ranks
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rank) in self.ranks.iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            write!(f, "{rank}")?;
        }
        Ok(())
    }
}
