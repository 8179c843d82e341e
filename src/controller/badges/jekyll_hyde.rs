use serde::{Deserialize, Serialize};

use super::BadgeConfig;
use crate::controller::decide::adjusted_score;
use crate::model::{Format, HOLES_PER_ROUND, MatchData, Side};

/// Better-ball and worse-ball totals for one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JekyllHyde {
    pub best_ball_total: i32,
    pub worst_ball_total: i32,
    pub spread: i32,
    pub holes_counted: u8,
    pub earned: bool,
}

/// Sums the better and the worse teammate score on every hole where both
/// teammates have one (net for best-ball, gross for shamble). The badge is
/// earned when the spread reaches `jekyll_hyde_min_spread`; the threshold is
/// absolute, not scaled by the number of holes.
#[must_use]
pub fn jekyll_and_hyde(
    format: Format,
    data: &MatchData,
    side: Side,
    config: &BadgeConfig,
) -> Option<JekyllHyde> {
    if !format.has_individual_team_scores() {
        return None;
    }

    let mut totals = JekyllHyde::default();
    for hole in 1..=HOLES_PER_ROUND as u8 {
        let Some([Some(first), Some(second)]) =
            data.holes.get(hole).and_then(|input| input.players_gross(side))
        else {
            continue;
        };
        let first = adjusted_score(format, data, side, 0, hole, first);
        let second = adjusted_score(format, data, side, 1, hole, second);
        totals.best_ball_total += first.min(second);
        totals.worst_ball_total += first.max(second);
        totals.holes_counted += 1;
    }
    totals.spread = totals.worst_ball_total - totals.best_ball_total;
    totals.earned = totals.spread >= config.jekyll_hyde_min_spread;
    Some(totals)
}
