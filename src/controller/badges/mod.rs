//! Post-round awards. Pure reads of hole data; none of these touch match
//! state.

mod ham_and_egg;
mod jekyll_hyde;
mod vs_all;

pub use ham_and_egg::*;
pub use jekyll_hyde::*;
pub use vs_all::*;

use serde::{Deserialize, Serialize};

use crate::model::{Course, Format, MatchData, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeConfig {
    /// Worst-ball total minus best-ball total needed for Jekyll & Hyde.
    pub jekyll_hyde_min_spread: i32,
    /// Strokes over par the struggling partner needs on a Ham & Egg hole.
    pub ham_and_egg_struggle_min: i32,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            jekyll_hyde_min_spread: 24,
            ham_and_egg_struggle_min: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideBadges {
    pub jekyll_and_hyde: Option<JekyllHyde>,
    pub ham_and_egg: Option<HamAndEgg>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBadges {
    pub team_a: SideBadges,
    pub team_b: SideBadges,
}

fn side_badges(
    format: Format,
    data: &MatchData,
    side: Side,
    course: Option<&Course>,
    config: &BadgeConfig,
) -> SideBadges {
    SideBadges {
        jekyll_and_hyde: jekyll_and_hyde(format, data, side, config),
        ham_and_egg: course.and_then(|c| ham_and_egg(format, data, side, c, config)),
    }
}

/// Team badges for both sides. Only best-ball and shamble record separate
/// teammate scores, so other formats get `None`. Ham & Egg needs hole pars
/// and is skipped without a course.
#[must_use]
pub fn match_badges(
    format: Format,
    data: &MatchData,
    course: Option<&Course>,
    config: &BadgeConfig,
) -> Option<MatchBadges> {
    if !format.has_individual_team_scores() {
        return None;
    }
    Some(MatchBadges {
        team_a: side_badges(format, data, Side::TeamA, course, config),
        team_b: side_badges(format, data, Side::TeamB, course, config),
    })
}
