pub mod args;
pub mod controller;
pub mod error;
pub mod handicap;
pub mod model;
pub mod storage;

pub use controller::badges::{BadgeConfig, vs_all};
pub use controller::{build_status_and_result, decide_hole, score_match, summarize};
pub use error::{CourseError, MatchPlayError};
pub use model::{Format, MatchData, MatchResult, MatchStatus, Outcome, Side};
