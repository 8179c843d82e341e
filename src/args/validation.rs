use serde_json::Value;
use std::{fs, path::PathBuf};

use crate::handicap::Entrant;
use crate::model::Format;

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The file '{file}' is not readable."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid json
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = check_readable_file(file)?;
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The json file '{file}' could not be read: {e}"))?;
    serde_json::from_str(&contents).map_err(|e| format!("The json file '{file}' is not valid json: {e}"))
}

/// # Errors
///
/// Will return `Err` for anything other than the four match formats
pub fn parse_format(value: &str) -> Result<Format, String> {
    value.parse()
}

/// Parses `playerId:handicapIndex`, e.g. `ann:10.4`.
///
/// # Errors
///
/// Will return `Err` if the separator or either part is missing, or the
/// index is not a number
pub fn parse_entrant(value: &str) -> Result<Entrant, String> {
    let (player_id, index) = value
        .rsplit_once(':')
        .ok_or_else(|| format!("expected playerId:handicapIndex, got '{value}'"))?;
    let player_id = player_id.trim();
    if player_id.is_empty() {
        return Err(format!("missing player id in '{value}'"));
    }
    let index = index
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("handicap index in '{value}' is not a number"))?;
    Ok(Entrant::new(player_id, index))
}

/// # Errors
///
/// Will return `Err` unless the value is a hole number from 1 to 18
pub fn parse_hole(value: &str) -> Result<u8, String> {
    match value.trim().parse::<u8>() {
        Ok(hole) if (1..=18).contains(&hole) => Ok(hole),
        _ => Err(format!("hole must be 1-18, got '{value}'")),
    }
}
