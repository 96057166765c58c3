use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::schedule::{Schedule, ScheduleError};
use crate::pattern::convert::convert_cards;
use crate::pattern::filter::{FilterConfig, matches_filters};
use crate::pattern::notation::print_siteswap;
use crate::pattern::translate::translate_siteswap;
use crate::search::combos::MixedRadixCounter;
use core::fmt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Deck enumeration is exponential in the ball count, and card decoding
/// packs one rank per bit.
pub const MAX_BALLS: u8 = 20;

/// Everything one search needs: deck, schedule and filter parameters plus
/// the stopping target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub allow_zeros: bool,
    pub max_multiplicity: usize,
    pub num_balls: u8,
    pub beats: Vec<usize>,
    pub period: usize,
    pub star: bool,
    pub filters: FilterConfig,
    pub num_to_print: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    BallCount(u8),
    ZeroMultiplicity,
    ZeroPatternCount,
    Schedule(ScheduleError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BallCount(count) => {
                write!(f, "ball count must be between 1 and {MAX_BALLS}, got {count}")
            }
            ConfigError::ZeroMultiplicity => write!(f, "max multiplicity must be at least 1"),
            ConfigError::ZeroPatternCount => {
                write!(f, "number of patterns to find must be at least 1")
            }
            ConfigError::Schedule(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ScheduleError> for ConfigError {
    fn from(err: ScheduleError) -> Self {
        ConfigError::Schedule(err)
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_balls == 0 || self.num_balls > MAX_BALLS {
            return Err(ConfigError::BallCount(self.num_balls));
        }
        if self.max_multiplicity == 0 {
            return Err(ConfigError::ZeroMultiplicity);
        }
        if self.num_to_print == 0 {
            return Err(ConfigError::ZeroPatternCount);
        }
        self.schedule().map(|_| ())
    }

    pub fn schedule(&self) -> Result<Schedule, ConfigError> {
        Ok(Schedule::new(self.beats.clone(), self.period)?)
    }
}

/// A combination can only represent `num_balls` balls if some card in it
/// actually uses the top rank; anything else is dead weight and skips the
/// conversion chain entirely.
fn worth_translating(deck: &Deck, digits: &[usize], num_balls: u8) -> bool {
    digits
        .iter()
        .any(|&digit| deck.cards()[digit].top_rank() == num_balls)
}

/// Samples card combinations until `num_to_print` distinct patterns have
/// been found or the combination space is exhausted. The shuffle decides
/// only which combinations come up first; the set of reachable patterns is
/// fixed by the configuration.
pub fn search<R: rand::Rng + ?Sized>(
    config: &SearchConfig,
    rng: &mut R,
) -> Result<BTreeSet<String>, ConfigError> {
    config.validate()?;
    let schedule = config.schedule()?;
    let mut deck = Deck::build(config.allow_zeros, config.max_multiplicity, config.num_balls);
    deck.shuffle_in_place(rng);

    let mut seen = BTreeSet::new();
    let mut counter = MixedRadixCounter::new(deck.len(), schedule.len());
    let mut combos_tried: u64 = 0;
    loop {
        let Some(digits) = counter.digits() else {
            info!(combos_tried, found = seen.len(), "search space exhausted");
            break;
        };
        combos_tried += 1;
        if worth_translating(&deck, digits, config.num_balls) {
            let hand: Vec<Card> = digits
                .iter()
                .map(|&digit| deck.cards()[digit].clone())
                .collect();
            let heights = convert_cards(&hand);
            let translated = translate_siteswap(&heights, &schedule, config.star);
            if matches_filters(&translated, schedule.period(), &config.filters) {
                let notation = print_siteswap(&translated, schedule.period(), config.star);
                if seen.insert(notation.clone()) {
                    debug!(pattern = %notation, "accepted pattern");
                }
            }
            if seen.len() >= config.num_to_print {
                info!(combos_tried, found = seen.len(), "target count reached");
                break;
            }
        }
        counter.advance();
    }
    Ok(seen)
}

/// Deterministic entry point: the seed fixes the deck order and with it the
/// sampling order.
pub fn search_with_seed(config: &SearchConfig, seed: u64) -> Result<BTreeSet<String>, ConfigError> {
    let mut rng = StdRng::seed_from_u64(seed);
    search(config, &mut rng)
}
