use crate::model::schedule::Schedule;
use crate::model::toss::Toss;
use std::collections::BTreeMap;

/// A pattern remapped onto the beat schedule: toss groups keyed by their
/// absolute beat position within one period. Positions without an event
/// simply have no entry.
pub type TranslatedSiteswap = BTreeMap<usize, Vec<Toss>>;

/// Remaps one vanilla height onto the beat schedule.
///
/// The height counts events, not instants: the ball lands `height` events
/// after `start_idx`. Each full lap of the schedule is worth half a period
/// in the output's units, and the remainder is the distance between the
/// start and landing positions measured in beat pairs. The crossing flag
/// falls out of the combined parity of both endpoints, the result height
/// and (for star patterns) the lap count.
pub fn translate_toss(height: u32, start_idx: usize, schedule: &Schedule, star: bool) -> Toss {
    if height == 0 {
        return Toss::new(0, false);
    }
    let len = schedule.len();
    let period = schedule.period();

    let mut wraparounds: usize = 0;
    let mut result: usize = 0;
    let mut landing_idx = start_idx + height as usize;
    while landing_idx - start_idx > len {
        landing_idx -= len;
        result += period / 2;
        wraparounds += 1;
    }

    let starting_pos = schedule.position(start_idx);
    let mut landing_pos = schedule.position(landing_idx);
    // Period folding can place the landing at or before the start; push it
    // into a later period until it is strictly after.
    while landing_pos <= starting_pos {
        landing_pos += period;
        wraparounds += 1;
    }
    result += landing_pos / 2 - starting_pos / 2;

    let parity_wraps = if star { wraparounds } else { 0 };
    let crossing = (starting_pos + landing_pos + result + parity_wraps) % 2 != 0;
    Toss::new(result as u32, crossing)
}

/// Translates a full cycle of vanilla heights (one group per schedule
/// event) into a sparse schedule-relative siteswap.
pub fn translate_siteswap(
    heights: &[Vec<u32>],
    schedule: &Schedule,
    star: bool,
) -> TranslatedSiteswap {
    let mut translated = TranslatedSiteswap::new();
    for (idx, group) in heights.iter().enumerate() {
        let tosses = group
            .iter()
            .map(|&height| translate_toss(height, idx, schedule, star))
            .collect();
        translated.insert(schedule.beats()[idx], tosses);
    }
    translated
}

#[cfg(test)]
mod tests {
    use super::{translate_siteswap, translate_toss};
    use crate::model::schedule::Schedule;
    use crate::model::toss::Toss;

    #[test]
    fn zero_height_is_untouched() {
        let schedule = Schedule::uniform(4).unwrap();
        assert_eq!(translate_toss(0, 2, &schedule, true), Toss::new(0, false));
    }

    #[test]
    fn uniform_schedule_halves_heights() {
        // On the all-instants schedule a height h becomes h/2 beat pairs.
        // The crossing flag folds in the result digit's own parity, since an
        // odd digit already implies a hand change in the notation.
        let schedule = Schedule::uniform(8).unwrap();
        assert_eq!(translate_toss(4, 0, &schedule, false), Toss::new(2, false));
        assert_eq!(translate_toss(5, 0, &schedule, false), Toss::new(2, true));
        assert_eq!(translate_toss(3, 2, &schedule, false), Toss::new(1, false));
    }

    #[test]
    fn lap_of_the_schedule_adds_half_a_period() {
        let schedule = Schedule::new(vec![0, 1, 5, 6, 9], 12).unwrap();
        // 7 events forward from index 1 wraps the five-beat schedule once
        // (+6) and then spans positions 1 to 6 (+3).
        assert_eq!(translate_toss(7, 1, &schedule, false), Toss::new(9, false));
    }

    #[test]
    fn star_counts_wraparounds_in_the_parity() {
        let schedule = Schedule::new(vec![0, 1, 5, 6, 9], 12).unwrap();
        assert_eq!(translate_toss(7, 1, &schedule, true), Toss::new(9, true));
    }

    #[test]
    fn siteswap_is_keyed_by_absolute_position() {
        let schedule = Schedule::new(vec![0, 3], 4).unwrap();
        let translated = translate_siteswap(&[vec![1], vec![1]], &schedule, false);
        assert_eq!(translated.keys().copied().collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(translated[&0].len(), 1);
    }
}
