use crate::model::{Format, HoleInput, MatchData, Outcome, Side};

/// Score a player's gross counts for under `format`: net of that player's
/// stroke on the hole for singles and best-ball, gross otherwise.
#[must_use]
pub fn adjusted_score(
    format: Format,
    data: &MatchData,
    side: Side,
    slot: usize,
    hole: u8,
    gross: u8,
) -> i32 {
    let gross = i32::from(gross);
    if format.uses_net() {
        gross - i32::from(data.strokes_on(side, slot, hole))
    } else {
        gross
    }
}

/// Best adjusted score on a side. Every teammate must have a score, even
/// though only the lowest one counts.
fn team_best(
    format: Format,
    data: &MatchData,
    side: Side,
    hole: u8,
    players_gross: [Option<u8>; 2],
) -> Option<i32> {
    players_gross
        .iter()
        .enumerate()
        .map(|(slot, gross)| gross.map(|g| adjusted_score(format, data, side, slot, hole, g)))
        .collect::<Option<Vec<i32>>>()?
        .into_iter()
        .min()
}

/// Each side's counting score on `hole_number`, or `None` when the hole is
/// incomplete or its input does not match `format`.
#[must_use]
pub fn hole_scores(format: Format, hole_number: u8, data: &MatchData) -> Option<(i32, i32)> {
    let input = data.holes.get(hole_number)?;
    match (format, input) {
        (
            Format::Singles,
            HoleInput::Singles {
                team_a_player_gross,
                team_b_player_gross,
            },
        ) => {
            let a = adjusted_score(format, data, Side::TeamA, 0, hole_number, (*team_a_player_gross)?);
            let b = adjusted_score(format, data, Side::TeamB, 0, hole_number, (*team_b_player_gross)?);
            Some((a, b))
        }
        (
            Format::TwoManScramble,
            HoleInput::Scramble {
                team_a_gross,
                team_b_gross,
                ..
            },
        ) => Some((i32::from((*team_a_gross)?), i32::from((*team_b_gross)?))),
        (
            Format::TwoManBestBall | Format::TwoManShamble,
            HoleInput::TeamPlayers {
                team_a_players_gross,
                team_b_players_gross,
            },
        ) => {
            let a = team_best(format, data, Side::TeamA, hole_number, *team_a_players_gross)?;
            let b = team_best(format, data, Side::TeamB, hole_number, *team_b_players_gross)?;
            Some((a, b))
        }
        _ => None,
    }
}

/// Decides one hole: the lower counting score wins, equal scores halve.
/// `None` means the hole cannot be decided yet.
#[must_use]
pub fn decide_hole(format: Format, hole_number: u8, data: &MatchData) -> Option<Outcome> {
    hole_scores(format, hole_number, data).map(|(a, b)| Outcome::from_scores(a, b))
}
