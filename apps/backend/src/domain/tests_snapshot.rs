use time::OffsetDateTime;

use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::{Game, Player};
use crate::domain::test_state_helpers::{bowl_all, make_player};

fn game_of(players: Vec<Player>) -> Game {
    Game {
        id: 7,
        finished: false,
        players,
        created_at: OffsetDateTime::now_utc(),
    }
}

#[test]
fn snapshot_reflects_the_scorecard() {
    let mut player = make_player();
    bowl_all(&mut player, &[10, 3, 4]);
    let game = game_of(vec![player]);

    let snapshot = GameSnapshot::of_game(&game);
    assert_eq!(snapshot.id, 7);
    assert!(!snapshot.finished);

    let card = &snapshot.players[0];
    assert_eq!(card.frames.len(), 10);
    assert_eq!(card.frames[0].roll1, Some(10));
    assert_eq!(card.frames[0].score, Some(17));
    assert_eq!(card.frames[1].score, Some(24));
    assert_eq!(card.total, Some(24));
    assert!(!card.finished);
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut player = make_player();
    bowl_all(&mut player, &[5, 5, 8]);
    let snapshot = GameSnapshot::of_game(&game_of(vec![player]));

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn pending_scores_serialize_as_null() {
    let mut player = make_player();
    bowl_all(&mut player, &[10]);
    let snapshot = GameSnapshot::of_game(&game_of(vec![player]));

    let value = serde_json::to_value(&snapshot).unwrap();
    let first = &value["players"][0]["frames"][0];
    assert_eq!(first["roll1"], 10);
    assert!(first["score"].is_null());
    // Unset tenth-frame bonus slots are omitted entirely.
    assert!(value["players"][0]["frames"][9].get("roll3").is_none());
}
