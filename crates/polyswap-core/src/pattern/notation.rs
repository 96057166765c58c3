use crate::model::toss::Toss;
use crate::pattern::translate::TranslatedSiteswap;
use std::fmt::Write;

/// Renders one toss: 0-9 as digits, 10-35 as a-z, taller throws as braced
/// decimal, all with an `x` suffix when crossing.
pub fn toss_token(toss: Toss) -> String {
    let mut token = String::new();
    match toss.height {
        0..=9 => token.push((b'0' + toss.height as u8) as char),
        10..=35 => token.push((b'a' + (toss.height - 10) as u8) as char),
        tall => {
            let _ = write!(token, "{{{tall}}}");
        }
    }
    if toss.crossing {
        token.push('x');
    }
    token
}

fn group_token(group: &[Toss]) -> String {
    match group {
        [single] => toss_token(*single),
        _ => {
            let inner: String = group.iter().map(|&toss| toss_token(toss)).collect();
            format!("[{inner}]")
        }
    }
}

/// Serializes a translated siteswap.
///
/// Positions are walked two at a time, each step one synchronous instant:
/// the even slot is the left hand, the odd slot the right. A pair with both
/// slots filled prints as a `(left,right)` group, continued with `!` unless
/// the following pair is entirely empty, in which case that pair is skipped
/// outright. Async throws alternate hands implicitly, so a one-sided pair
/// prints an `L`/`R` marker only at the first throw or when it repeats the
/// previous throw's hand; an empty pair prints `0` and passes the turn to
/// the other hand.
pub fn print_siteswap(siteswap: &TranslatedSiteswap, period: usize, star: bool) -> String {
    let mut out = String::new();
    let mut last_was_left = true;
    let mut first_async = true;
    let mut beat = 0;
    while beat < period {
        match (siteswap.get(&beat), siteswap.get(&(beat + 1))) {
            (Some(left), Some(right)) => {
                out.push('(');
                out.push_str(&group_token(left));
                out.push(',');
                out.push_str(&group_token(right));
                out.push(')');
                let next_left = siteswap.contains_key(&((beat + 2) % period));
                let next_right = siteswap.contains_key(&((beat + 3) % period));
                if next_left || next_right {
                    out.push('!');
                } else {
                    beat += 2;
                }
            }
            (Some(left), None) => {
                if last_was_left || first_async {
                    out.push('L');
                    first_async = false;
                }
                out.push_str(&group_token(left));
                last_was_left = true;
            }
            (None, Some(right)) => {
                if !last_was_left || first_async {
                    out.push('R');
                    first_async = false;
                }
                last_was_left = false;
                out.push_str(&group_token(right));
            }
            (None, None) => {
                out.push('0');
                last_was_left = !last_was_left;
                first_async = false;
            }
        }
        beat += 2;
    }
    if star {
        out.push('*');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{print_siteswap, toss_token};
    use crate::model::toss::Toss;
    use crate::pattern::translate::TranslatedSiteswap;

    fn siteswap(beats: &[(usize, &[Toss])]) -> TranslatedSiteswap {
        beats
            .iter()
            .map(|&(beat, group)| (beat, group.to_vec()))
            .collect()
    }

    #[test]
    fn digit_and_letter_heights() {
        assert_eq!(toss_token(Toss::new(0, false)), "0");
        assert_eq!(toss_token(Toss::new(7, true)), "7x");
        assert_eq!(toss_token(Toss::new(10, false)), "a");
        assert_eq!(toss_token(Toss::new(35, false)), "z");
        assert_eq!(toss_token(Toss::new(0, true)), "0x");
    }

    #[test]
    fn tall_heights_are_braced_instead_of_dropped() {
        assert_eq!(toss_token(Toss::new(36, false)), "{36}");
        assert_eq!(toss_token(Toss::new(40, true)), "{40}x");
    }

    #[test]
    fn sync_pairs_continue_with_bang() {
        let pattern = siteswap(&[
            (0, &[Toss::new(1, false)][..]),
            (1, &[Toss::new(1, false)][..]),
        ]);
        assert_eq!(print_siteswap(&pattern, 2, false), "(1,1)!");
    }

    #[test]
    fn sync_pair_skips_a_fully_empty_pair() {
        let pattern = siteswap(&[
            (0, &[Toss::new(2, false)][..]),
            (1, &[Toss::new(2, false)][..]),
        ]);
        assert_eq!(print_siteswap(&pattern, 4, false), "(2,2)");
    }

    #[test]
    fn alternating_hands_need_no_markers_after_the_first() {
        // Left at 0, right at 3, left at 4: implied alternation holds.
        let pattern = siteswap(&[
            (0, &[Toss::new(2, false)][..]),
            (3, &[Toss::new(3, false)][..]),
            (4, &[Toss::new(2, false)][..]),
        ]);
        assert_eq!(print_siteswap(&pattern, 6, false), "L232");
    }

    #[test]
    fn repeated_hand_is_remarked() {
        let pattern = siteswap(&[
            (0, &[Toss::new(2, false)][..]),
            (2, &[Toss::new(2, false)][..]),
        ]);
        assert_eq!(print_siteswap(&pattern, 4, false), "L2L2");
    }

    #[test]
    fn empty_pair_prints_zero_and_passes_the_turn() {
        let pattern = siteswap(&[(1, &[Toss::new(2, false)][..])]);
        assert_eq!(print_siteswap(&pattern, 4, false), "R20");
    }

    #[test]
    fn multiplex_groups_are_bracketed() {
        let pattern = siteswap(&[
            (0, &[Toss::new(3, false), Toss::new(2, true)][..]),
            (1, &[Toss::new(1, false)][..]),
        ]);
        assert_eq!(print_siteswap(&pattern, 2, false), "([32x],1)!");
    }

    #[test]
    fn star_suffix() {
        let pattern = siteswap(&[(0, &[Toss::new(2, false)][..])]);
        assert_eq!(print_siteswap(&pattern, 2, true), "L2*");
    }
}
