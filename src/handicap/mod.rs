//! Course handicaps and per-hole stroke allocation.

mod setup;
mod strokes;

pub use setup::*;
pub use strokes::*;

use serde_json::Value;

use crate::model::{Course, coerce_number};

/// The neutral slope rating.
pub const NEUTRAL_SLOPE: f64 = 113.0;
pub const DEFAULT_PAR: f64 = 72.0;

/// Course difficulty inputs to the course-handicap formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseRating {
    pub slope: f64,
    pub rating: f64,
    pub par: f64,
}

impl Default for CourseRating {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

impl CourseRating {
    /// Slope defaults to 113, par to 72 and rating to par.
    #[must_use]
    pub fn new(slope: Option<f64>, rating: Option<f64>, par: Option<f64>) -> Self {
        let par = par.filter(|p| p.is_finite()).unwrap_or(DEFAULT_PAR);
        Self {
            slope: slope.filter(|s| s.is_finite()).unwrap_or(NEUTRAL_SLOPE),
            rating: rating.filter(|r| r.is_finite()).unwrap_or(par),
            par,
        }
    }

    #[must_use]
    pub fn for_course(course: &Course) -> Self {
        Self::new(course.slope, course.rating, Some(f64::from(course.par())))
    }
}

/// `round(index * slope / 113 + (rating - par))`, rounding half away from
/// zero. Anything that does not come out as a finite number yields 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn course_handicap(handicap_index: f64, course: &CourseRating) -> i32 {
    let raw = handicap_index * (course.slope / NEUTRAL_SLOPE) + (course.rating - course.par);
    let rounded = raw.round();
    if !rounded.is_finite() {
        return 0;
    }
    rounded as i32
}

/// Course handicap from loosely-typed setup data. A non-numeric index is 0;
/// a missing or non-numeric slope is 113, par is 72 and rating is par.
#[must_use]
pub fn course_handicap_lenient(
    handicap_index: &Value,
    slope: Option<&Value>,
    rating: Option<&Value>,
    par: Option<&Value>,
) -> i32 {
    let index = coerce_number(handicap_index).unwrap_or(0.0);
    let rating = CourseRating::new(
        slope.and_then(coerce_number),
        rating.and_then(coerce_number),
        par.and_then(coerce_number),
    );
    course_handicap(index, &rating)
}
