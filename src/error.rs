use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum MatchPlayError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid course: {0}")]
    InvalidCourse(#[from] CourseError),
    #[error("{0}")]
    Other(String),
}

/// Structural problems with course reference data. Raised to the seeding
/// layer only; live scoring assumes a validated course.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    #[error("expected 18 holes, found {0}")]
    HoleCount(usize),
    #[error("hole number {0} is outside 1-18")]
    HoleNumberOutOfRange(u8),
    #[error("hole number {0} appears more than once")]
    DuplicateHoleNumber(u8),
    #[error("hole {hole} has hcpIndex {hcp_index}, expected 1-18")]
    HcpIndexOutOfRange { hole: u8, hcp_index: u8 },
    #[error("hcpIndex {0} is used by more than one hole")]
    DuplicateHcpIndex(u8),
    #[error("hole {hole} has par {par}, expected 3, 4 or 5")]
    InvalidPar { hole: u8, par: u8 },
}

impl From<StorageError> for MatchPlayError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for MatchPlayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for MatchPlayError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<String> for MatchPlayError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for MatchPlayError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
