use crate::model::toss::Toss;
use crate::pattern::translate::TranslatedSiteswap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-selectable rejection rules. The phantom-throw rule is not listed
/// here because it is never optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub max_height: Option<u32>,
    pub reject_trivial_multiplexes: bool,
    pub reject_squeezes: bool,
}

/// Runs every active check; any single failure rejects the pattern.
pub fn matches_filters(
    siteswap: &TranslatedSiteswap,
    period: usize,
    filters: &FilterConfig,
) -> bool {
    if contains_phantom(siteswap) {
        return false;
    }
    if let Some(max) = filters.max_height {
        if !within_max_height(siteswap, max) {
            return false;
        }
    }
    if filters.reject_trivial_multiplexes && contains_trivial_multiplex(siteswap) {
        return false;
    }
    if filters.reject_squeezes && contains_squeeze(siteswap, period) {
        return false;
    }
    true
}

fn contains_phantom(siteswap: &TranslatedSiteswap) -> bool {
    siteswap.values().flatten().any(|toss| toss.is_phantom())
}

fn within_max_height(siteswap: &TranslatedSiteswap, max: u32) -> bool {
    siteswap.values().flatten().all(|toss| toss.height <= max)
}

fn contains_trivial_multiplex(siteswap: &TranslatedSiteswap) -> bool {
    siteswap
        .values()
        .filter(|group| group.len() > 1)
        .flatten()
        .any(|toss| toss.is_trivial())
}

/// The beat pair on which a toss thrown from `beat` comes down. Heights are
/// in beat pairs, so the flight spans `2 * height` positions; a throw whose
/// height and crossing flag disagree in parity lands on the off half of the
/// pair, shifting it one position toward its own hand.
fn landing_beat(beat: usize, toss: Toss, period: usize) -> usize {
    let mut landing = beat as i64 + 2 * i64::from(toss.height);
    if (toss.height + u32::from(toss.crossing)) % 2 != 0 {
        if beat % 2 == 0 {
            landing += 1;
        } else {
            landing -= 1;
        }
    }
    landing.rem_euclid(period as i64) as usize
}

fn contains_squeeze(siteswap: &TranslatedSiteswap, period: usize) -> bool {
    let mut landings: BTreeMap<usize, Vec<Toss>> = BTreeMap::new();
    for (&beat, group) in siteswap {
        for &toss in group {
            landings
                .entry(landing_beat(beat, toss, period))
                .or_default()
                .push(toss);
        }
    }
    landings.values().any(|group| {
        group.len() > 1 && group.iter().filter(|toss| !toss.is_trivial()).count() > 1
    })
}
