use crate::domain::scoring::recalculate_scores;
use crate::domain::test_state_helpers::{
    all_spares_rolls, bowl_all, make_player, perfect_game_rolls,
};

fn scores(player: &crate::domain::state::Player) -> Vec<Option<u16>> {
    player.frames.iter().map(|f| f.score).collect()
}

#[test]
fn all_gutter_game_scores_zero() {
    let mut player = make_player();
    bowl_all(&mut player, &[0; 20]);

    assert!(player.is_finished());
    assert_eq!(scores(&player), vec![Some(0); 10]);
}

#[test]
fn perfect_game_scores_three_hundred() {
    let mut player = make_player();
    bowl_all(&mut player, &perfect_game_rolls());

    let expected: Vec<Option<u16>> = (1..=10).map(|n| Some(n * 30)).collect();
    assert_eq!(scores(&player), expected);
    assert_eq!(player.total_score(), Some(300));
}

#[test]
fn all_spares_game_scores_one_fifty() {
    let mut player = make_player();
    bowl_all(&mut player, &all_spares_rolls());

    assert_eq!(player.total_score(), Some(150));
    // Every spare earns 10 + the next roll of 5.
    let expected: Vec<Option<u16>> = (1..=10).map(|n| Some(n * 15)).collect();
    assert_eq!(scores(&player), expected);
}

#[test]
fn strike_score_is_pending_until_two_bonus_rolls_exist() {
    let mut player = make_player();
    bowl_all(&mut player, &[10]);
    assert_eq!(player.frames[0].score, None);

    bowl_all(&mut player, &[3]);
    assert_eq!(player.frames[0].score, None);

    bowl_all(&mut player, &[4]);
    assert_eq!(player.frames[0].score, Some(17));
    assert_eq!(player.frames[1].score, Some(24));
}

#[test]
fn spare_score_is_pending_until_one_bonus_roll_exists() {
    let mut player = make_player();
    bowl_all(&mut player, &[6, 4]);
    assert_eq!(player.frames[0].score, None);

    bowl_all(&mut player, &[5]);
    assert_eq!(player.frames[0].score, Some(15));
}

#[test]
fn pending_frame_blocks_all_subsequent_scores() {
    let mut player = make_player();
    // Frame 1 open and scoreable, frame 2 strike still pending, frame 3 open.
    bowl_all(&mut player, &[3, 4, 10, 2]);

    assert_eq!(player.frames[0].score, Some(7));
    assert_eq!(player.frames[1].score, None);
    // Frame 3's own pinfall is known-incomplete, but even a completed open
    // frame here would stay unset behind the pending strike.
    assert_eq!(player.frames[2].score, None);
}

#[test]
fn open_frames_score_immediately() {
    let mut player = make_player();
    bowl_all(&mut player, &[3, 4, 2, 5]);

    assert_eq!(player.frames[0].score, Some(7));
    assert_eq!(player.frames[1].score, Some(14));
    assert_eq!(player.frames[2].score, None);
}

#[test]
fn ninth_frame_strike_counts_tenth_frame_rolls() {
    let mut player = make_player();
    // Eight open frames of 3+4, a strike in frame 9, then 4 and 3.
    let mut rolls = Vec::new();
    for _ in 0..8 {
        rolls.extend_from_slice(&[3, 4]);
    }
    rolls.push(10);
    rolls.extend_from_slice(&[4, 3]);
    bowl_all(&mut player, &rolls);

    assert!(player.is_finished());
    assert_eq!(player.frames[7].score, Some(56));
    assert_eq!(player.frames[8].score, Some(56 + 10 + 4 + 3));
    assert_eq!(player.frames[9].score, Some(73 + 7));
}

#[test]
fn tenth_frame_bonus_sums_all_three_rolls() {
    let mut player = make_player();
    bowl_all(&mut player, &[0; 18]);
    bowl_all(&mut player, &[10, 7, 2]);

    assert_eq!(player.frames[9].score, Some(19));
    assert_eq!(player.total_score(), Some(19));
}

#[test]
fn recalculation_is_idempotent() {
    let mut player = make_player();
    bowl_all(&mut player, &[10, 5, 5, 7, 2, 10]);

    let first = scores(&player);
    recalculate_scores(&mut player.frames);
    assert_eq!(scores(&player), first);
    recalculate_scores(&mut player.frames);
    assert_eq!(scores(&player), first);
}
