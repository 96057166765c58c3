mod combos;
mod driver;

pub use combos::MixedRadixCounter;
pub use driver::{ConfigError, MAX_BALLS, SearchConfig, search, search_with_seed};
