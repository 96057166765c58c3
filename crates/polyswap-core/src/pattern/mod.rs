//! The vanilla-to-polyrhythm pipeline.
//!
//! A card sequence becomes raw vanilla heights (`convert`), the heights are
//! remapped onto the beat schedule (`translate`), the result is vetted
//! (`filter`) and finally rendered as notation (`notation`). Data only ever
//! flows forward through these stages.

pub mod convert;
pub mod filter;
pub mod notation;
pub mod translate;

pub use convert::convert_cards;
pub use filter::{FilterConfig, matches_filters};
pub use notation::{print_siteswap, toss_token};
pub use translate::{TranslatedSiteswap, translate_siteswap, translate_toss};
