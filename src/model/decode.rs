//! Lenient decoding of stored match documents.
//!
//! Documents come from a loosely-typed key-value store, so anything that is
//! not well formed is read as "no input" rather than rejected. The only hard
//! failure is a missing or unknown `format`.

use serde_json::{Map, Value, json};
use tracing::debug;

use super::course::Course;
use super::format::Format;
use super::hole::{HoleCard, HoleInput, MatchData};
use super::player::{PlayerInMatch, StrokeTable, normalize_team};
use super::HOLES_PER_ROUND;
use crate::error::MatchPlayError;

/// Reads a number the way the scoring forms store them: JSON numbers or
/// numeric strings. Non-finite values are rejected.
#[must_use]
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// A gross score is a whole number of strokes, at least 1.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn gross_from_value(value: &Value) -> Option<u8> {
    let n = coerce_number(value)?;
    if n.fract() != 0.0 || n < 1.0 || n > f64::from(u8::MAX) {
        return None;
    }
    Some(n as u8)
}

fn drive_from_value(value: &Value) -> Option<u8> {
    match coerce_number(value)? {
        n if n == 0.0 => Some(0),
        n if n == 1.0 => Some(1),
        _ => None,
    }
}

fn field_gross(input: &Map<String, Value>, key: &str) -> Option<u8> {
    input.get(key).and_then(gross_from_value)
}

fn pair_gross(input: &Map<String, Value>, key: &str) -> [Option<u8>; 2] {
    let mut pair = [None, None];
    if let Some(Value::Array(values)) = input.get(key) {
        for (slot, value) in pair.iter_mut().zip(values) {
            *slot = gross_from_value(value);
        }
    }
    pair
}

/// Decodes one `{ "input": { ... } }` hole entry for `format`.
///
/// Returns `None` when the entry is not an object or has no `input` object.
/// Individual missing scores stay `None` inside the returned input.
#[must_use]
pub fn decode_hole_input(format: Format, entry: &Value) -> Option<HoleInput> {
    let input = entry.as_object()?.get("input")?.as_object()?;
    let decoded = match format {
        Format::Singles => HoleInput::Singles {
            team_a_player_gross: field_gross(input, "teamAPlayerGross"),
            team_b_player_gross: field_gross(input, "teamBPlayerGross"),
        },
        Format::TwoManScramble => HoleInput::Scramble {
            team_a_gross: field_gross(input, "teamAGross"),
            team_b_gross: field_gross(input, "teamBGross"),
            team_a_drive: input.get("teamADrive").and_then(drive_from_value),
            team_b_drive: input.get("teamBDrive").and_then(drive_from_value),
        },
        Format::TwoManBestBall | Format::TwoManShamble => HoleInput::TeamPlayers {
            team_a_players_gross: pair_gross(input, "teamAPlayersGross"),
            team_b_players_gross: pair_gross(input, "teamBPlayersGross"),
        },
    };
    Some(decoded)
}

/// Builds the hole card from a `holes` map keyed by hole-number strings.
#[must_use]
pub fn decode_holes(format: Format, holes: Option<&Value>) -> HoleCard {
    let mut card = HoleCard::new();
    let Some(Value::Object(entries)) = holes else {
        return card;
    };
    for (key, entry) in entries {
        let Ok(number) = key.trim().parse::<u8>() else {
            debug!(key = %key, "ignoring non-numeric hole key");
            continue;
        };
        if !(1..=18).contains(&number) {
            debug!(hole = number, "ignoring hole outside 1-18");
            continue;
        }
        card.set(number, decode_hole_input(format, entry));
    }
    card
}

fn decode_strokes(value: Option<&Value>) -> StrokeTable {
    let mut strokes = [0u8; HOLES_PER_ROUND];
    if let Some(Value::Array(values)) = value {
        for (slot, value) in strokes.iter_mut().zip(values) {
            *slot = u8::from(coerce_number(value).is_some_and(|n| n != 0.0));
        }
    }
    strokes
}

fn decode_player(value: &Value) -> PlayerInMatch {
    let Some(obj) = value.as_object() else {
        return PlayerInMatch::placeholder();
    };
    let player_id = match obj.get("playerId") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    PlayerInMatch::new(player_id, decode_strokes(obj.get("strokesReceived")))
}

/// Reads a player list and normalizes it to `team_size` entries.
#[must_use]
pub fn decode_players(value: Option<&Value>, team_size: usize) -> Vec<PlayerInMatch> {
    let players = match value {
        Some(Value::Array(values)) => values.iter().map(decode_player).collect(),
        _ => Vec::new(),
    };
    normalize_team(players, team_size)
}

/// Reads the match format from a document.
///
/// # Errors
///
/// Returns `MatchPlayError::Parse` when `format` is missing or unknown.
pub fn decode_format(doc: &Value) -> Result<Format, MatchPlayError> {
    doc.get("format")
        .and_then(Value::as_str)
        .ok_or_else(|| MatchPlayError::Parse("match document has no format".to_string()))?
        .parse::<Format>()
        .map_err(MatchPlayError::Parse)
}

/// Decodes a stored match document into its format and typed match data.
///
/// # Errors
///
/// Returns `MatchPlayError::Parse` when `format` is missing or unknown.
pub fn decode_match_document(doc: &Value) -> Result<(Format, MatchData), MatchPlayError> {
    let format = decode_format(doc)?;
    let size = format.team_size();
    let data = MatchData::new(
        decode_players(doc.get("teamAPlayers"), size),
        decode_players(doc.get("teamBPlayers"), size),
        decode_holes(format, doc.get("holes")),
    );
    Ok((format, data))
}

/// Optional course reference data carried alongside a match.
#[must_use]
pub fn decode_course(doc: &Value) -> Option<Course> {
    let course = doc.get("course")?;
    match serde_json::from_value::<Course>(course.clone()) {
        Ok(course) => Some(course),
        Err(e) => {
            debug!(error = %e, "ignoring malformed course");
            None
        }
    }
}

/// Inverse of `decode_match_document` for freshly set-up matches.
#[must_use]
pub fn encode_match_document(format: Format, data: &MatchData) -> Value {
    let holes: Map<String, Value> = data
        .holes
        .iter()
        .map(|(number, input)| (number.to_string(), json!({ "input": input.to_document() })))
        .collect();
    json!({
        "format": format,
        "teamAPlayers": data.team_a_players,
        "teamBPlayers": data.team_b_players,
        "holes": holes,
    })
}
