use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{CourseRating, allocate_strokes, course_handicap};
use crate::model::{
    Course, Format, HoleCard, MatchData, PlayerInMatch, coerce_number, normalize_team,
};

/// A player entered into a match, before strokes are allocated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entrant {
    pub player_id: String,
    #[serde(default, deserialize_with = "lenient_index")]
    pub handicap_index: f64,
}

impl Entrant {
    #[must_use]
    pub fn new(player_id: impl Into<String>, handicap_index: f64) -> Self {
        Self {
            player_id: player_id.into(),
            handicap_index,
        }
    }
}

fn lenient_index<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value).unwrap_or(0.0))
}

/// Builds the static side of a new match: course handicaps for every
/// entrant, spun down across the whole match, then turned into stroke
/// tables. Sides are truncated to the format's team size before strokes are
/// allocated and padded with placeholders afterwards.
#[must_use]
pub fn setup_match(
    format: Format,
    team_a: &[Entrant],
    team_b: &[Entrant],
    course: &Course,
) -> MatchData {
    let size = format.team_size();
    let team_a = &team_a[..team_a.len().min(size)];
    let team_b = &team_b[..team_b.len().min(size)];

    let rating = CourseRating::for_course(course);
    let handicaps: Vec<i32> = team_a
        .iter()
        .chain(team_b)
        .map(|entrant| course_handicap(entrant.handicap_index, &rating))
        .collect();
    let tables = allocate_strokes(&handicaps, &course.holes);
    debug!(format = %format, ?handicaps, "allocated match strokes");

    let mut players = team_a
        .iter()
        .chain(team_b)
        .zip(tables)
        .map(|(entrant, table)| PlayerInMatch::new(entrant.player_id.clone(), table));
    let side_a: Vec<PlayerInMatch> = players.by_ref().take(team_a.len()).collect();
    let side_b: Vec<PlayerInMatch> = players.collect();

    MatchData::new(
        normalize_team(side_a, size),
        normalize_team(side_b, size),
        HoleCard::new(),
    )
}
