pub mod badges;
pub mod decide;
pub mod rescore;
pub mod summary;

pub use decide::{adjusted_score, decide_hole, hole_scores};
pub use rescore::{record_hole, rescore_document, rescore_match};
pub use summary::{MatchSummary, build_status_and_result, score_match, summarize};
