use crate::model::{CourseHole, HOLES_PER_ROUND, StrokeTable};

/// Marks one stroke on each of the `strokes` hardest holes (lowest
/// `hcp_index` first). `strokes` is clamped to 0-18.
#[must_use]
pub fn strokes_received(strokes: i32, holes: &[CourseHole]) -> StrokeTable {
    let count = usize::try_from(strokes.clamp(0, 18)).unwrap_or(0);
    let mut ranked: Vec<&CourseHole> = holes
        .iter()
        .filter(|h| (1..=18).contains(&h.number))
        .collect();
    ranked.sort_by_key(|h| (h.hcp_index, h.number));

    let mut table = [0u8; HOLES_PER_ROUND];
    for hole in ranked.into_iter().take(count) {
        if let Some(slot) = table.get_mut(usize::from(hole.number - 1)) {
            *slot = 1;
        }
    }
    table
}

/// Subtracts the lowest course handicap from every entry so that only the
/// differences remain. The lowest player ends at exactly 0.
#[must_use]
pub fn spin_down(course_handicaps: &[i32]) -> Vec<i32> {
    let Some(&lowest) = course_handicaps.iter().min() else {
        return Vec::new();
    };
    course_handicaps.iter().map(|&h| h - lowest).collect()
}

/// Spins down `course_handicaps` and turns each relative count into a stroke
/// table against `holes`.
#[must_use]
pub fn allocate_strokes(course_handicaps: &[i32], holes: &[CourseHole]) -> Vec<StrokeTable> {
    spin_down(course_handicaps)
        .into_iter()
        .map(|relative| strokes_received(relative, holes))
        .collect()
}
