use serde_json::{Map, Value, json};
use tracing::info;

use super::badges::{BadgeConfig, match_badges};
use super::summary::score_match;
use crate::error::MatchPlayError;
use crate::model::{MatchResult, MatchStatus, decode_course, decode_match_document};
use crate::storage::MatchStore;

/// Recomputes a stored match document in place: `status` and `result` are
/// overwritten, and team badges are written once the match is closed.
/// Running it twice on the same document changes nothing the second time.
///
/// # Errors
///
/// Returns `MatchPlayError::Parse` when the document is not an object or has
/// no usable `format`.
pub fn rescore_document(
    doc: &mut Value,
    config: &BadgeConfig,
) -> Result<(MatchStatus, MatchResult), MatchPlayError> {
    let (format, data) = decode_match_document(doc)?;
    let (status, result) = score_match(format, &data);
    let badges = if status.closed {
        match_badges(format, &data, decode_course(doc).as_ref(), config)
    } else {
        None
    };

    let obj = doc
        .as_object_mut()
        .ok_or_else(|| MatchPlayError::Parse("match document is not an object".to_string()))?;
    obj.insert("status".to_string(), serde_json::to_value(&status)?);
    obj.insert("result".to_string(), serde_json::to_value(&result)?);
    match badges {
        Some(badges) => {
            obj.insert("badges".to_string(), serde_json::to_value(&badges)?);
        }
        None => {
            obj.remove("badges");
        }
    }
    Ok((status, result))
}

/// Recomputes one stored match and writes it back.
///
/// # Errors
///
/// Returns `MatchPlayError::NotFound` for an unknown id, `Parse` for an
/// unusable document, or a storage error.
pub fn rescore_match(
    store: &mut dyn MatchStore,
    match_id: &str,
    config: &BadgeConfig,
) -> Result<(MatchStatus, MatchResult), MatchPlayError> {
    let mut scored = None;
    store.update_match(match_id, &mut |doc| {
        scored = Some(rescore_document(doc, config)?);
        Ok(())
    })?;
    let (status, result) =
        scored.ok_or_else(|| MatchPlayError::Other(format!("match {match_id} was not rescored")))?;
    info!(match_id, status = %status.describe(), "rescored match");
    Ok((status, result))
}

/// Writes (or with `None`, clears) the raw input for one hole, then
/// recomputes the whole match from hole 1 in the same update.
///
/// # Errors
///
/// Returns `MatchPlayError::Parse` for a hole outside 1-18, plus anything
/// `rescore_match` can return.
pub fn record_hole(
    store: &mut dyn MatchStore,
    match_id: &str,
    hole: u8,
    input: Option<&Value>,
    config: &BadgeConfig,
) -> Result<(MatchStatus, MatchResult), MatchPlayError> {
    if !(1..=18).contains(&hole) {
        return Err(MatchPlayError::Parse(format!("hole {hole} is outside 1-18")));
    }

    let mut scored = None;
    store.update_match(match_id, &mut |doc| {
        let obj = doc
            .as_object_mut()
            .ok_or_else(|| MatchPlayError::Parse("match document is not an object".to_string()))?;
        let holes = obj
            .entry("holes")
            .or_insert_with(|| Value::Object(Map::new()));
        if !holes.is_object() {
            *holes = Value::Object(Map::new());
        }
        if let Some(holes) = holes.as_object_mut() {
            match input {
                Some(input) => {
                    holes.insert(hole.to_string(), json!({ "input": input }));
                }
                None => {
                    holes.remove(&hole.to_string());
                }
            }
        }
        scored = Some(rescore_document(doc, config)?);
        Ok(())
    })?;
    let (status, result) =
        scored.ok_or_else(|| MatchPlayError::Other(format!("match {match_id} was not rescored")))?;
    info!(match_id, hole, status = %status.describe(), "recorded hole");
    Ok((status, result))
}
