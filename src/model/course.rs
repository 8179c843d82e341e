use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use super::HOLES_PER_ROUND;
use super::decode::coerce_number;
use crate::error::CourseError;

const DEFAULT_COURSE_PAR: u32 = 72;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseHole {
    pub number: u8,
    pub par: u8,
    /// Difficulty rank, 1 = hardest.
    pub hcp_index: u8,
}

/// Course reference data. `name`, `rating` and `slope` are read leniently:
/// numeric strings are accepted and anything unreadable is left unset.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(default)]
    pub holes: Vec<CourseHole>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub slope: Option<f64>,
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

impl Course {
    #[must_use]
    pub fn new(name: impl Into<String>, holes: Vec<CourseHole>) -> Self {
        Self {
            name: name.into(),
            holes,
            rating: None,
            slope: None,
        }
    }

    /// Sum of hole pars, or 72 when the course carries no holes.
    #[must_use]
    pub fn par(&self) -> u32 {
        if self.holes.is_empty() {
            DEFAULT_COURSE_PAR
        } else {
            self.holes.iter().map(|h| u32::from(h.par)).sum()
        }
    }

    #[must_use]
    pub fn hole(&self, number: u8) -> Option<&CourseHole> {
        self.holes.iter().find(|h| h.number == number)
    }

    #[must_use]
    pub fn par_for(&self, number: u8) -> Option<u8> {
        self.hole(number).map(|h| h.par)
    }

    /// Checks the 18-hole invariants: hole numbers and hcpIndex values each
    /// cover 1-18 exactly once, and every par is 3, 4 or 5.
    ///
    /// # Errors
    ///
    /// Returns the first `CourseError` found.
    pub fn validate(&self) -> Result<(), CourseError> {
        if self.holes.len() != HOLES_PER_ROUND {
            return Err(CourseError::HoleCount(self.holes.len()));
        }

        let mut numbers = HashSet::new();
        let mut hcp_indexes = HashSet::new();
        for hole in &self.holes {
            if !(1..=18).contains(&hole.number) {
                return Err(CourseError::HoleNumberOutOfRange(hole.number));
            }
            if !numbers.insert(hole.number) {
                return Err(CourseError::DuplicateHoleNumber(hole.number));
            }
            if !(1..=18).contains(&hole.hcp_index) {
                return Err(CourseError::HcpIndexOutOfRange {
                    hole: hole.number,
                    hcp_index: hole.hcp_index,
                });
            }
            if !hcp_indexes.insert(hole.hcp_index) {
                return Err(CourseError::DuplicateHcpIndex(hole.hcp_index));
            }
            if !(3..=5).contains(&hole.par) {
                return Err(CourseError::InvalidPar {
                    hole: hole.number,
                    par: hole.par,
                });
            }
        }
        Ok(())
    }
}
