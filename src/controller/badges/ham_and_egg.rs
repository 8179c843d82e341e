use serde::{Deserialize, Serialize};

use super::BadgeConfig;
use crate::controller::decide::adjusted_score;
use crate::model::{Course, Format, HOLES_PER_ROUND, MatchData, Side};

/// Holes where one partner carried the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HamAndEgg {
    pub holes: Vec<u8>,
    pub count: u8,
}

fn carried(to_par: [i32; 2], struggle_min: i32) -> bool {
    let [first, second] = to_par;
    (first <= 0 && second >= struggle_min) || (second <= 0 && first >= struggle_min)
}

/// Counts holes where one teammate made par or better while the other was
/// at least `ham_and_egg_struggle_min` over par. Scores are net for
/// best-ball and gross for shamble. Holes missing a score or a par are
/// skipped.
#[must_use]
pub fn ham_and_egg(
    format: Format,
    data: &MatchData,
    side: Side,
    course: &Course,
    config: &BadgeConfig,
) -> Option<HamAndEgg> {
    if !format.has_individual_team_scores() {
        return None;
    }

    let mut result = HamAndEgg::default();
    for hole in 1..=HOLES_PER_ROUND as u8 {
        let Some(par) = course.par_for(hole) else {
            continue;
        };
        let Some([Some(first), Some(second)]) =
            data.holes.get(hole).and_then(|input| input.players_gross(side))
        else {
            continue;
        };
        let par = i32::from(par);
        let to_par = [
            adjusted_score(format, data, side, 0, hole, first) - par,
            adjusted_score(format, data, side, 1, hole, second) - par,
        ];
        if carried(to_par, config.ham_and_egg_struggle_min) {
            result.holes.push(hole);
            result.count += 1;
        }
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::carried;

    #[test]
    fn par_and_bogey_qualifies_at_default_threshold() {
        assert!(carried([0, 1], 1));
        assert!(carried([1, -1], 1));
    }

    #[test]
    fn both_struggling_or_both_good_does_not_qualify() {
        assert!(!carried([1, 2], 1));
        assert!(!carried([0, -1], 1));
    }

    #[test]
    fn double_bogey_variant_is_stricter() {
        assert!(!carried([0, 1], 2));
        assert!(carried([-1, 2], 2));
    }
}
