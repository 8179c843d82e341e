use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::controller::decide::decide_hole;
use crate::handicap::allocate_strokes;
use crate::model::{
    Course, Format, HOLES_PER_ROUND, HoleCard, HoleInput, MatchData, Outcome, PlayerInMatch,
    gross_from_value,
};

/// One player's recorded round, as fed to the vs-All simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VsAllEntrant {
    pub player_id: String,
    /// Declared teammate for team formats.
    #[serde(default)]
    pub partner_id: Option<String>,
    #[serde(default)]
    pub course_handicap: i32,
    /// Gross per hole, index = hole - 1. Short arrays are padded with
    /// `None`; entries that are not a valid gross read as `None`.
    #[serde(default, deserialize_with = "lenient_gross")]
    pub gross: [Option<u8>; HOLES_PER_ROUND],
}

fn lenient_gross<'de, D>(deserializer: D) -> Result<[Option<u8>; HOLES_PER_ROUND], D::Error>
where
    D: Deserializer<'de>,
{
    let mut gross = [None; HOLES_PER_ROUND];
    if let Value::Array(values) = Value::deserialize(deserializer)? {
        for (slot, value) in gross.iter_mut().zip(&values) {
            *slot = gross_from_value(value);
        }
    }
    Ok(gross)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VsAllRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl VsAllRecord {
    #[must_use]
    pub fn played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

type Records = BTreeMap<String, VsAllRecord>;

/// Runs a synthetic match to a result. Undecided holes are skipped rather
/// than ending the count, and play stops once the trailing side cannot
/// catch up.
#[must_use]
pub fn simulate_match(format: Format, data: &MatchData) -> Outcome {
    let mut margin: i32 = 0;
    for hole in 1..=HOLES_PER_ROUND as u8 {
        match decide_hole(format, hole, data) {
            Some(Outcome::TeamA) => margin += 1,
            Some(Outcome::TeamB) => margin -= 1,
            Some(Outcome::AllSquare) | None => continue,
        }
        let remaining = HOLES_PER_ROUND as u32 - u32::from(hole);
        if margin.unsigned_abs() > remaining {
            break;
        }
    }
    Outcome::from_scores(-margin, margin)
}

fn gross_on(entrant: &VsAllEntrant, hole: u8) -> Option<u8> {
    entrant.gross.get(usize::from(hole - 1)).copied().flatten()
}

fn build_match(format: Format, side_a: &[&VsAllEntrant], side_b: &[&VsAllEntrant], course: &Course) -> MatchData {
    let handicaps: Vec<i32> = side_a
        .iter()
        .chain(side_b)
        .map(|e| e.course_handicap)
        .collect();
    let mut players = side_a
        .iter()
        .chain(side_b)
        .zip(allocate_strokes(&handicaps, &course.holes))
        .map(|(e, table)| PlayerInMatch::new(e.player_id.clone(), table));
    let team_a: Vec<PlayerInMatch> = players.by_ref().take(side_a.len()).collect();
    let team_b: Vec<PlayerInMatch> = players.collect();

    let holes: HoleCard = (1..=HOLES_PER_ROUND as u8)
        .map(|hole| {
            let pair = |side: &[&VsAllEntrant]| -> [Option<u8>; 2] {
                [
                    side.first().and_then(|e| gross_on(e, hole)),
                    side.get(1).and_then(|e| gross_on(e, hole)),
                ]
            };
            let input = match format {
                Format::Singles => HoleInput::Singles {
                    team_a_player_gross: pair(side_a)[0],
                    team_b_player_gross: pair(side_b)[0],
                },
                Format::TwoManScramble => {
                    let [a0, a1] = pair(side_a);
                    let [b0, b1] = pair(side_b);
                    HoleInput::Scramble {
                        team_a_gross: a0.or(a1),
                        team_b_gross: b0.or(b1),
                        team_a_drive: None,
                        team_b_drive: None,
                    }
                }
                Format::TwoManBestBall | Format::TwoManShamble => HoleInput::TeamPlayers {
                    team_a_players_gross: pair(side_a),
                    team_b_players_gross: pair(side_b),
                },
            };
            (hole, input)
        })
        .collect();

    MatchData::new(team_a, team_b, holes)
}

fn credit(records: &mut Records, side_a: &[&VsAllEntrant], side_b: &[&VsAllEntrant], outcome: Outcome) {
    for (team, won) in [(side_a, Outcome::TeamA), (side_b, Outcome::TeamB)] {
        for entrant in team {
            let record = records.entry(entrant.player_id.clone()).or_default();
            if outcome == Outcome::AllSquare {
                record.ties += 1;
            } else if outcome == won {
                record.wins += 1;
            } else {
                record.losses += 1;
            }
        }
    }
}

/// Drops entrants whose `player_id` was already seen, keeping the first.
fn unique_entrants(entrants: &[VsAllEntrant]) -> Vec<&VsAllEntrant> {
    let mut seen: AHashSet<&str> = AHashSet::new();
    let mut unique = Vec::with_capacity(entrants.len());
    for entrant in entrants {
        if seen.insert(entrant.player_id.as_str()) {
            unique.push(entrant);
        } else {
            warn!(player = %entrant.player_id, "duplicate vs-all entrant skipped");
        }
    }
    unique
}

/// Pairs entrants into teams through their partner links. Mutual links are
/// paired first, in entrant order; one-sided links then claim only players
/// still free. Entrants left without a partner get no team.
fn group_teams<'a>(entrants: &[&'a VsAllEntrant]) -> Vec<[&'a VsAllEntrant; 2]> {
    let by_id: AHashMap<&'a str, &'a VsAllEntrant> = entrants
        .iter()
        .map(|&e| (e.player_id.as_str(), e))
        .collect();
    let partner_of = |entrant: &VsAllEntrant| -> Option<&'a VsAllEntrant> {
        let id = entrant.partner_id.as_deref()?;
        if id == entrant.player_id {
            return None;
        }
        by_id.get(id).copied()
    };

    let mut taken: AHashSet<&'a str> = AHashSet::new();
    let mut teams = Vec::new();
    for mutual_only in [true, false] {
        for &entrant in entrants {
            if taken.contains(entrant.player_id.as_str()) {
                continue;
            }
            let Some(partner) = partner_of(entrant) else {
                continue;
            };
            if taken.contains(partner.player_id.as_str()) {
                continue;
            }
            let mutual = partner.partner_id.as_deref() == Some(entrant.player_id.as_str());
            if mutual_only && !mutual {
                continue;
            }
            taken.insert(entrant.player_id.as_str());
            taken.insert(partner.player_id.as_str());
            teams.push([entrant, partner]);
        }
    }

    for entrant in entrants {
        if !taken.contains(entrant.player_id.as_str()) {
            debug!(player = %entrant.player_id, "no partner, skipped in vs-all");
        }
    }
    teams
}

/// Plays every entrant (singles) or every team (team formats) against every
/// other one, with strokes spun down between just the players involved.
/// Teammates share their team's record.
#[must_use]
pub fn vs_all(format: Format, entrants: &[VsAllEntrant], course: &Course) -> BTreeMap<String, VsAllRecord> {
    let mut records = Records::new();

    let entrants = unique_entrants(entrants);
    let sides: Vec<Vec<&VsAllEntrant>> = if format.is_team_format() {
        group_teams(&entrants).into_iter().map(Vec::from).collect()
    } else {
        entrants.into_iter().map(|e| vec![e]).collect()
    };
    for side in &sides {
        for entrant in side {
            records.entry(entrant.player_id.clone()).or_default();
        }
    }

    for (i, side_a) in sides.iter().enumerate() {
        for side_b in &sides[i + 1..] {
            let data = build_match(format, side_a, side_b, course);
            let outcome = simulate_match(format, &data);
            credit(&mut records, side_a, side_b, outcome);
        }
    }
    records
}
