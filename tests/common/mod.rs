#![allow(dead_code)]

use rusty_golf_matchplay::model::{
    Course, CourseHole, HOLES_PER_ROUND, HoleCard, HoleInput, MatchData, PlayerInMatch,
    StrokeTable,
};
use serde_json::{Value, json};

pub const NO_STROKES: StrokeTable = [0; HOLES_PER_ROUND];

/// Par 72 layout with a realistic hcpIndex order.
pub fn test_course() -> Course {
    const PARS: [u8; 18] = [4, 5, 3, 4, 4, 4, 3, 5, 4, 4, 4, 3, 5, 4, 4, 3, 4, 5];
    const HCP: [u8; 18] = [7, 3, 17, 1, 11, 5, 15, 9, 13, 8, 2, 18, 4, 12, 6, 16, 10, 14];
    let holes = (1u8..=18)
        .zip(PARS.iter().zip(HCP.iter()))
        .map(|(number, (&par, &hcp_index))| CourseHole {
            number,
            par,
            hcp_index,
        })
        .collect();
    Course::new("Test Links", holes)
}

/// All par 4, hcpIndex equal to the hole number.
pub fn flat_course() -> Course {
    let holes = (1u8..=18)
        .map(|number| CourseHole {
            number,
            par: 4,
            hcp_index: number,
        })
        .collect();
    Course::new("Flat", holes)
}

pub fn strokes_on(holes: &[u8]) -> StrokeTable {
    let mut table = NO_STROKES;
    for &hole in holes {
        table[usize::from(hole - 1)] = 1;
    }
    table
}

/// Singles match from per-hole gross pairs; `None` leaves a hole empty.
pub fn singles(scores: &[Option<(u8, u8)>], strokes_a: StrokeTable, strokes_b: StrokeTable) -> MatchData {
    let holes: HoleCard = (1u8..)
        .zip(scores)
        .filter_map(|(hole, score)| score.map(|(a, b)| (hole, HoleInput::singles(a, b))))
        .collect();
    MatchData::new(
        vec![PlayerInMatch::new("a1", strokes_a)],
        vec![PlayerInMatch::new("b1", strokes_b)],
        holes,
    )
}

/// Singles scores where teamA wins `a_wins` holes, then the next `halves`
/// holes are halved, then teamB wins `b_wins` holes.
pub fn singles_run(a_wins: usize, halves: usize, b_wins: usize) -> Vec<Option<(u8, u8)>> {
    let mut scores = Vec::new();
    scores.extend(std::iter::repeat_n(Some((4, 5)), a_wins));
    scores.extend(std::iter::repeat_n(Some((4, 4)), halves));
    scores.extend(std::iter::repeat_n(Some((5, 4)), b_wins));
    scores
}

/// Two-player sides with per-hole gross pairs for every hole.
pub fn team_match(
    team_a: &[[Option<u8>; 2]],
    team_b: &[[Option<u8>; 2]],
    strokes_a: [StrokeTable; 2],
    strokes_b: [StrokeTable; 2],
) -> MatchData {
    let holes: HoleCard = (1u8..)
        .zip(team_a.iter().zip(team_b))
        .map(|(hole, (a, b))| {
            (
                hole,
                HoleInput::TeamPlayers {
                    team_a_players_gross: *a,
                    team_b_players_gross: *b,
                },
            )
        })
        .collect();
    let [a1, a2] = strokes_a;
    let [b1, b2] = strokes_b;
    MatchData::new(
        vec![PlayerInMatch::new("a1", a1), PlayerInMatch::new("a2", a2)],
        vec![PlayerInMatch::new("b1", b1), PlayerInMatch::new("b2", b2)],
        holes,
    )
}

/// Stored-document form of a singles match with no strokes.
pub fn singles_document(scores: &[(u8, u8)]) -> Value {
    let holes: serde_json::Map<String, Value> = (1u8..)
        .zip(scores)
        .map(|(hole, (a, b))| {
            (
                hole.to_string(),
                json!({ "input": { "teamAPlayerGross": a, "teamBPlayerGross": b } }),
            )
        })
        .collect();
    json!({
        "format": "singles",
        "teamAPlayers": [{ "playerId": "ann", "strokesReceived": NO_STROKES }],
        "teamBPlayers": [{ "playerId": "bob", "strokesReceived": NO_STROKES }],
        "holes": holes,
    })
}
