use serde::{Deserialize, Serialize};

use super::format::{Outcome, Side};
use super::HOLES_PER_ROUND;

/// Running match state, recomputed from hole 1 on every edit.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatus {
    pub leader: Option<Side>,
    pub margin: u8,
    pub thru: u8,
    pub dormie: bool,
    pub closed: bool,
    #[serde(rename = "wasTeamADown3PlusBack9")]
    pub was_team_a_down_3_plus_back_9: bool,
    #[serde(rename = "wasTeamAUp3PlusBack9")]
    pub was_team_a_up_3_plus_back_9: bool,
    /// Signed margin after each decided hole, positive = teamA ahead.
    pub margin_history: Vec<i8>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// `None` until the match closes.
    pub winner: Option<Outcome>,
    pub holes_won_a: u8,
    pub holes_won_b: u8,
}

impl MatchStatus {
    #[must_use]
    pub fn holes_remaining(&self) -> u8 {
        (HOLES_PER_ROUND as u8).saturating_sub(self.thru)
    }

    /// Scoreboard wording, e.g. "teamA 2 UP thru 14" or "teamB wins 3&2".
    #[must_use]
    pub fn describe(&self) -> String {
        let remaining = self.holes_remaining();
        match (self.leader, self.closed) {
            (None, true) => "Halved".to_string(),
            (None, false) if self.thru == 0 => "Not started".to_string(),
            (None, false) => format!("All Square thru {}", self.thru),
            (Some(side), true) if remaining == 0 => {
                format!("{side} wins {} UP", self.margin)
            }
            (Some(side), true) => format!("{side} wins {}&{remaining}", self.margin),
            (Some(side), false) if self.dormie => format!("{side} Dormie {}", self.margin),
            (Some(side), false) => format!("{side} {} UP thru {}", self.margin, self.thru),
        }
    }
}
