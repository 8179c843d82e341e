mod common;

use common::{NO_STROKES, flat_course, singles, strokes_on, team_match};
use rusty_golf_matchplay::controller::badges::{
    BadgeConfig, ham_and_egg, jekyll_and_hyde, match_badges,
};
use rusty_golf_matchplay::model::{Format, MatchData, Side};

/// teamA: a1 shoots 4 everywhere; a2 shoots 6 on the first `sixes` holes and
/// 5 elsewhere, so the worst-ball total is 90 + sixes against a best of 72.
fn jekyll_card(sixes: usize) -> MatchData {
    let team_a: Vec<[Option<u8>; 2]> = (0..18)
        .map(|i| [Some(4), Some(if i < sixes { 6 } else { 5 })])
        .collect();
    let team_b = vec![[Some(4), Some(4)]; 18];
    team_match(&team_a, &team_b, [NO_STROKES, NO_STROKES], [NO_STROKES, NO_STROKES])
}

#[test]
fn test4_jekyll_and_hyde_threshold_is_inclusive() {
    let config = BadgeConfig::default();
    for (sixes, spread, earned) in [(5, 23, false), (6, 24, true), (7, 25, true)] {
        let data = jekyll_card(sixes);
        let badge = jekyll_and_hyde(Format::TwoManBestBall, &data, Side::TeamA, &config)
            .expect("best-ball has teammate scores");
        assert_eq!(badge.best_ball_total, 72);
        assert_eq!(badge.worst_ball_total, 72 + spread);
        assert_eq!(badge.spread, spread);
        assert_eq!(badge.holes_counted, 18);
        assert_eq!(badge.earned, earned, "spread {spread}");
    }
}

#[test]
fn test4_jekyll_and_hyde_net_only_for_best_ball() {
    // a1 shoots 5 with a stroke everywhere: net 4 in best-ball, 5 in shamble.
    let team_a = vec![[Some(5), Some(6)]; 18];
    let team_b = vec![[Some(4), Some(4)]; 18];
    let data = team_match(
        &team_a,
        &team_b,
        [[1; 18], NO_STROKES],
        [NO_STROKES, NO_STROKES],
    );
    let config = BadgeConfig::default();

    let net = jekyll_and_hyde(Format::TwoManBestBall, &data, Side::TeamA, &config).unwrap();
    assert_eq!((net.best_ball_total, net.worst_ball_total), (72, 108));
    assert!(net.earned);

    let gross = jekyll_and_hyde(Format::TwoManShamble, &data, Side::TeamA, &config).unwrap();
    assert_eq!((gross.best_ball_total, gross.worst_ball_total), (90, 108));
    assert!(!gross.earned);
}

#[test]
fn test4_jekyll_and_hyde_skips_incomplete_holes() {
    let team_a = vec![[Some(4), None], [Some(4), Some(8)]];
    let team_b = vec![[Some(4), Some(4)]; 2];
    let data = team_match(&team_a, &team_b, [NO_STROKES, NO_STROKES], [NO_STROKES, NO_STROKES]);
    let badge =
        jekyll_and_hyde(Format::TwoManShamble, &data, Side::TeamA, &BadgeConfig::default()).unwrap();
    assert_eq!(badge.holes_counted, 1);
    assert_eq!(badge.spread, 4);
}

#[test]
fn test4_badges_do_not_apply_to_singles() {
    let data = singles(&[Some((4, 5))], NO_STROKES, NO_STROKES);
    let config = BadgeConfig::default();
    assert!(jekyll_and_hyde(Format::Singles, &data, Side::TeamA, &config).is_none());
    assert!(ham_and_egg(Format::Singles, &data, Side::TeamA, &flat_course(), &config).is_none());
    assert!(match_badges(Format::TwoManScramble, &data, None, &config).is_none());
}

fn ham_card(strokes_a2: [u8; 18]) -> MatchData {
    // Par 4 everywhere.
    let team_a = vec![
        [Some(4), Some(5)],
        [Some(5), Some(4)],
        [Some(3), Some(5)],
        [Some(4), Some(6)],
        [Some(3), Some(4)],
        [Some(5), Some(6)],
    ];
    let team_b = vec![[Some(4), Some(4)]; 6];
    team_match(&team_a, &team_b, [NO_STROKES, strokes_a2], [NO_STROKES, NO_STROKES])
}

#[test]
fn test4_ham_and_egg_counts_par_with_bogey() {
    let data = ham_card(NO_STROKES);
    let course = flat_course();
    let badge = ham_and_egg(
        Format::TwoManShamble,
        &data,
        Side::TeamA,
        &course,
        &BadgeConfig::default(),
    )
    .unwrap();
    assert_eq!(badge.holes, vec![1, 2, 3, 4]);
    assert_eq!(badge.count, 4);
}

#[test]
fn test4_ham_and_egg_double_bogey_variant() {
    let data = ham_card(NO_STROKES);
    let config = BadgeConfig {
        ham_and_egg_struggle_min: 2,
        ..BadgeConfig::default()
    };
    let badge = ham_and_egg(Format::TwoManShamble, &data, Side::TeamA, &flat_course(), &config)
        .unwrap();
    assert_eq!(badge.holes, vec![4]);
}

#[test]
fn test4_ham_and_egg_uses_net_for_best_ball() {
    // a2's stroke on hole 1 turns a bogey into a net par.
    let data = ham_card(strokes_on(&[1]));
    let config = BadgeConfig::default();
    let course = flat_course();
    let net = ham_and_egg(Format::TwoManBestBall, &data, Side::TeamA, &course, &config).unwrap();
    assert_eq!(net.holes, vec![2, 3, 4]);
    let gross = ham_and_egg(Format::TwoManShamble, &data, Side::TeamA, &course, &config).unwrap();
    assert_eq!(gross.holes, vec![1, 2, 3, 4]);
}

#[test]
fn test4_match_badges_cover_both_sides() {
    let data = jekyll_card(6);
    let course = flat_course();
    let badges =
        match_badges(Format::TwoManBestBall, &data, Some(&course), &BadgeConfig::default()).unwrap();
    assert!(badges.team_a.jekyll_and_hyde.unwrap().earned);
    assert!(!badges.team_b.jekyll_and_hyde.unwrap().earned);
    assert_eq!(badges.team_b.ham_and_egg.unwrap().count, 0);

    let without_course =
        match_badges(Format::TwoManBestBall, &data, None, &BadgeConfig::default()).unwrap();
    assert!(without_course.team_a.ham_and_egg.is_none());
}
