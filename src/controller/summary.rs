use tracing::{debug, trace};

use super::decide::decide_hole;
use crate::model::{Format, HOLES_PER_ROUND, MatchData, MatchResult, MatchStatus, Outcome, Side};

/// First hole of the back nine.
pub const BACK_NINE_START: u8 = 10;
/// Signed margin that sets a back-nine momentum flag.
pub const MOMENTUM_MARGIN: i8 = 3;

/// Everything the summarizer learns from one pass over the hole card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub thru: u8,
    pub holes_won_a: u8,
    pub holes_won_b: u8,
    pub margin_history: Vec<i8>,
    pub was_team_a_up_3_plus_back_9: bool,
    pub was_team_a_down_3_plus_back_9: bool,
    pub dormie: bool,
    pub closed: bool,
    pub winner: Option<Outcome>,
}

impl MatchSummary {
    /// Holes won by teamA minus holes won by teamB.
    #[must_use]
    pub fn signed_margin(&self) -> i8 {
        i8::try_from(i16::from(self.holes_won_a) - i16::from(self.holes_won_b)).unwrap_or_default()
    }

    #[must_use]
    pub fn margin(&self) -> u8 {
        self.signed_margin().unsigned_abs()
    }

    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        match self.holes_won_a.cmp(&self.holes_won_b) {
            std::cmp::Ordering::Greater => Some(Side::TeamA),
            std::cmp::Ordering::Less => Some(Side::TeamB),
            std::cmp::Ordering::Equal => None,
        }
    }

    #[must_use]
    pub fn holes_remaining(&self) -> u8 {
        (HOLES_PER_ROUND as u8).saturating_sub(self.thru)
    }

    fn record(&mut self, outcome: Outcome) {
        self.thru += 1;
        match outcome {
            Outcome::TeamA => self.holes_won_a += 1,
            Outcome::TeamB => self.holes_won_b += 1,
            Outcome::AllSquare => {}
        }
        let signed = self.signed_margin();
        self.margin_history.push(signed);

        if self.thru >= BACK_NINE_START {
            if signed >= MOMENTUM_MARGIN {
                self.was_team_a_up_3_plus_back_9 = true;
            }
            if signed <= -MOMENTUM_MARGIN {
                self.was_team_a_down_3_plus_back_9 = true;
            }
        }
    }

    fn settle(&mut self) {
        let remaining = self.holes_remaining();
        let margin = self.margin();
        if remaining == 0 {
            self.closed = true;
            self.winner = Some(self.leader().map_or(Outcome::AllSquare, Outcome::from));
        } else if margin > remaining {
            self.closed = true;
            self.winner = self.leader().map(Outcome::from);
        } else if margin == remaining && margin > 0 {
            self.dormie = true;
        }
    }
}

/// Folds hole decisions 1..=18 into a match summary.
///
/// Counting stops at the first hole that cannot be decided, so `thru` only
/// covers a contiguous run from hole 1. It also stops once the trailing side
/// can no longer catch up. Always recomputes from scratch.
#[must_use]
pub fn summarize(format: Format, data: &MatchData) -> MatchSummary {
    let mut summary = MatchSummary::default();
    for hole in 1..=HOLES_PER_ROUND as u8 {
        let Some(outcome) = decide_hole(format, hole, data) else {
            trace!(hole, "hole undecided, stopping");
            break;
        };
        summary.record(outcome);
        if summary.margin() > summary.holes_remaining() {
            debug!(
                hole,
                margin = summary.margin(),
                leader = ?summary.leader(),
                "match closed early"
            );
            break;
        }
    }
    summary.settle();
    summary
}

/// Packages a summary into the two records written back to storage.
#[must_use]
pub fn build_status_and_result(summary: &MatchSummary) -> (MatchStatus, MatchResult) {
    let status = MatchStatus {
        leader: summary.leader(),
        margin: summary.margin(),
        thru: summary.thru,
        dormie: summary.dormie,
        closed: summary.closed,
        was_team_a_down_3_plus_back_9: summary.was_team_a_down_3_plus_back_9,
        was_team_a_up_3_plus_back_9: summary.was_team_a_up_3_plus_back_9,
        margin_history: summary.margin_history.clone(),
    };
    let result = MatchResult {
        winner: summary.winner,
        holes_won_a: summary.holes_won_a,
        holes_won_b: summary.holes_won_b,
    };
    (status, result)
}

/// `summarize` followed by `build_status_and_result`.
#[must_use]
pub fn score_match(format: Format, data: &MatchData) -> (MatchStatus, MatchResult) {
    build_status_and_result(&summarize(format, data))
}
