use crate::model::card::Card;

/// One toss working its way forward through the card sequence. Each step
/// consumes the next card: every ball ranked at or above the remaining
/// units is ahead of this toss in the landing order and pushes it one unit
/// closer to the ground.
#[derive(Debug)]
struct Flight {
    remaining: u32,
    steps: u32,
    scan: usize,
}

impl Flight {
    fn new(toss: u8, start: usize, len: usize) -> Self {
        Self {
            remaining: u32::from(toss),
            steps: 0,
            scan: (start + 1) % len,
        }
    }

    fn landed(&self) -> bool {
        self.remaining == 0
    }

    fn consume(&mut self, card: &Card, len: usize) {
        for &rank in card.ranks() {
            if u32::from(rank) >= self.remaining {
                self.remaining -= 1;
                if self.remaining == 0 {
                    break;
                }
            }
        }
        self.steps += 1;
        self.scan = (self.scan + 1) % len;
    }
}

/// Replaces every toss value in a cyclic card sequence with the number of
/// beats the thrown ball travels before landing. Multiplex grouping is
/// preserved: the output has one height per rank of each card.
///
/// Termination: `remaining` never grows, and the originating card itself
/// carries a rank at least as large, so every lap of the cycle consumes at
/// least one unit.
pub fn convert_cards(cards: &[Card]) -> Vec<Vec<u32>> {
    let len = cards.len();
    cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            card.ranks()
                .iter()
                .map(|&toss| {
                    if toss == 0 {
                        return 0;
                    }
                    let mut flight = Flight::new(toss, i, len);
                    while !flight.landed() {
                        let next = &cards[flight.scan];
                        flight.consume(next, len);
                    }
                    flight.steps
                })
                .collect()
        })
        .collect()
}
