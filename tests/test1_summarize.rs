mod common;

use common::{NO_STROKES, singles, singles_run, strokes_on};
use rusty_golf_matchplay::controller::{build_status_and_result, score_match, summarize};
use rusty_golf_matchplay::model::{Format, Outcome, Side};

#[test]
fn test1_closeout_after_ten_straight_wins() {
    let mut scores = singles_run(10, 0, 0);
    // Scores after the closeout must not be counted.
    scores.extend(singles_run(0, 0, 8));
    let data = singles(&scores, NO_STROKES, NO_STROKES);

    let (status, result) = score_match(Format::Singles, &data);
    assert_eq!(status.thru, 10);
    assert_eq!(status.margin, 10);
    assert!(status.closed);
    assert!(!status.dormie);
    assert_eq!(status.leader, Some(Side::TeamA));
    assert_eq!(result.winner, Some(Outcome::TeamA));
    assert_eq!(result.holes_won_a, 10);
    assert_eq!(result.holes_won_b, 0);
    assert_eq!(status.describe(), "teamA wins 10&8");
}

#[test]
fn test1_nine_up_with_nine_to_play_is_dormie() {
    let data = singles(&singles_run(9, 0, 0), NO_STROKES, NO_STROKES);
    let (status, result) = score_match(Format::Singles, &data);
    assert_eq!(status.thru, 9);
    assert!(status.dormie);
    assert!(!status.closed);
    assert_eq!(result.winner, None);
}

#[test]
fn test1_dormie_two_with_two_to_play() {
    let data = singles(&singles_run(2, 14, 0), NO_STROKES, NO_STROKES);
    let (status, result) = score_match(Format::Singles, &data);
    assert_eq!(status.thru, 16);
    assert_eq!(status.margin, 2);
    assert!(status.dormie);
    assert!(!status.closed);
    assert_eq!(status.leader, Some(Side::TeamA));
    assert_eq!(result.winner, None);
    assert_eq!(status.describe(), "teamA Dormie 2");
}

#[test]
fn test1_all_holes_halved_is_all_square() {
    let data = singles(&singles_run(0, 18, 0), NO_STROKES, NO_STROKES);
    let (status, result) = score_match(Format::Singles, &data);
    assert_eq!(status.thru, 18);
    assert!(status.closed);
    assert!(!status.dormie);
    assert_eq!(status.leader, None);
    assert_eq!(status.margin, 0);
    assert_eq!(result.winner, Some(Outcome::AllSquare));
    assert_eq!(status.margin_history, vec![0; 18]);
    assert_eq!(status.describe(), "Halved");
}

#[test]
fn test1_one_up_after_eighteen() {
    let mut scores = singles_run(1, 16, 0);
    scores.push(Some((4, 4)));
    let data = singles(&scores, NO_STROKES, NO_STROKES);
    let (status, result) = score_match(Format::Singles, &data);
    assert_eq!(status.thru, 18);
    assert!(status.closed);
    assert_eq!(result.winner, Some(Outcome::TeamA));
    assert_eq!(status.describe(), "teamA wins 1 UP");
}

#[test]
fn test1_stroke_halves_the_first_hole() {
    let scores = vec![Some((4, 5)); 18];
    let data = singles(&scores, NO_STROKES, strokes_on(&[1]));

    let (status, result) = score_match(Format::Singles, &data);
    assert_eq!(status.margin_history[0], 0);
    assert_eq!(result.holes_won_b, 0);
    // Holes 2-10 won: 9 up with 8 to play.
    assert_eq!(status.thru, 10);
    assert_eq!(result.holes_won_a, 9);
    assert!(status.closed);
    assert_eq!(result.winner, Some(Outcome::TeamA));
}

#[test]
fn test1_gap_stops_the_count() {
    let mut scores = singles_run(4, 0, 0);
    scores.push(None);
    scores.extend(singles_run(0, 0, 13));
    let data = singles(&scores, NO_STROKES, NO_STROKES);

    let summary = summarize(Format::Singles, &data);
    assert_eq!(summary.thru, 4);
    assert_eq!(summary.holes_won_a, 4);
    assert_eq!(summary.holes_won_b, 0);
    assert_eq!(summary.margin_history, vec![1, 2, 3, 4]);
}

#[test]
fn test1_partial_hole_is_undecided() {
    let mut data = singles(&singles_run(3, 0, 0), NO_STROKES, NO_STROKES);
    data.holes.set(
        4,
        Some(rusty_golf_matchplay::model::HoleInput::Singles {
            team_a_player_gross: Some(4),
            team_b_player_gross: None,
        }),
    );
    assert_eq!(summarize(Format::Singles, &data).thru, 3);
}

#[test]
fn test1_empty_card() {
    let data = singles(&[], NO_STROKES, NO_STROKES);
    let (status, result) = score_match(Format::Singles, &data);
    assert_eq!(status.thru, 0);
    assert!(!status.closed);
    assert!(!status.dormie);
    assert!(status.margin_history.is_empty());
    assert_eq!(result.winner, None);
    assert_eq!(status.describe(), "Not started");
}

#[test]
fn test1_back_nine_momentum_flags_are_sticky() {
    // Three up through 3, still three up after 10, then teamB wins 11-16.
    let data = singles(&singles_run(3, 7, 6), NO_STROKES, NO_STROKES);
    let (status, result) = score_match(Format::Singles, &data);
    assert!(status.was_team_a_up_3_plus_back_9);
    assert!(status.was_team_a_down_3_plus_back_9);
    assert_eq!(status.thru, 16);
    assert!(status.closed);
    assert_eq!(result.winner, Some(Outcome::TeamB));
    assert_eq!(status.describe(), "teamB wins 3&2");
}

#[test]
fn test1_front_nine_lead_does_not_set_momentum() {
    let data = singles(&singles_run(3, 0, 3), NO_STROKES, NO_STROKES);
    let (status, _) = score_match(Format::Singles, &data);
    assert_eq!(status.thru, 6);
    assert!(!status.was_team_a_up_3_plus_back_9);
    assert!(!status.was_team_a_down_3_plus_back_9);
}

#[test]
fn test1_summarize_is_idempotent() {
    let data = singles(&singles_run(2, 5, 4), NO_STROKES, strokes_on(&[3, 7]));
    let first = summarize(Format::Singles, &data);
    let second = summarize(Format::Singles, &data);
    assert_eq!(first, second);
    assert_eq!(build_status_and_result(&first), build_status_and_result(&second));
}

#[test]
fn test1_wrong_shape_for_format_is_undecided() {
    let data = singles(&singles_run(5, 0, 0), NO_STROKES, NO_STROKES);
    assert_eq!(summarize(Format::TwoManScramble, &data).thru, 0);
    assert_eq!(summarize(Format::TwoManBestBall, &data).thru, 0);
}
