use crate::domain::match_state::{Match, MatchStatus};
use crate::domain::score_track::{PlayerScoreTrack, RollState};
use crate::domain::test_state_helpers::match_with_players;
use crate::errors::domain::ValidationKind;

fn play_all(game: &mut Match, rolls: &[u8]) {
    for (i, &pins) in rolls.iter().enumerate() {
        game.play(pins)
            .unwrap_or_else(|e| panic!("roll #{i} ({pins}) rejected: {e}"));
    }
}

#[test]
fn empty_match_has_no_current_player() {
    let mut game = Match::new("m1", Vec::new());
    let err = game.current_player().unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::NoCurrentPlayer));

    let err = game.play(5).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::NoCurrentPlayer));
}

#[test]
fn first_roll_of_open_frame_keeps_turn() {
    let mut game = match_with_players(2);
    let outcome = game.play(3).unwrap();
    assert!(!outcome.turn_advanced);
    assert_eq!(outcome.turn_before, 0);
    assert_eq!(outcome.turn_after, 0);
    assert_eq!(game.current_player().unwrap().player_id(), "p1");
}

#[test]
fn second_roll_passes_turn() {
    let mut game = match_with_players(2);
    play_all(&mut game, &[3, 4]);
    assert_eq!(game.turn_index(), 1);
    assert_eq!(game.current_player().unwrap().player_id(), "p2");
}

#[test]
fn strike_passes_turn_immediately() {
    let mut game = match_with_players(2);
    let outcome = game.play(10).unwrap();
    assert!(outcome.turn_advanced);
    assert_eq!(game.turn_index(), 1);
}

#[test]
fn turn_cycles_modulo_player_count() {
    let mut game = match_with_players(3);
    let start = game.turn_index();
    play_all(&mut game, &[1, 2, 3, 4, 5, 4]);
    assert_eq!(game.turn_index(), start);
    for track in game.players() {
        assert_eq!(track.current_frame(), 2);
    }
}

#[test]
fn tenth_frame_keeps_turn_until_player_finishes() {
    let mut game = match_with_players(2);
    // Nine frames each, alternating players.
    for _ in 0..9 {
        play_all(&mut game, &[0, 0, 0, 0]);
    }
    assert_eq!(game.turn_index(), 0);

    play_all(&mut game, &[10]);
    assert_eq!(game.turn_index(), 0, "strike in tenth keeps the turn");
    play_all(&mut game, &[3]);
    assert_eq!(game.turn_index(), 0, "bonus roll still owed");
    let outcome = game.play(4).unwrap();
    assert!(outcome.turn_advanced);
    assert!(outcome.roll.finished);
    assert_eq!(game.turn_index(), 1);
    assert!(!outcome.match_finished);

    play_all(&mut game, &[2, 2]);
    assert!(game.is_finished());
    assert_eq!(game.status(), MatchStatus::Completed);
}

#[test]
fn rejected_roll_leaves_match_unchanged() {
    let mut game = match_with_players(1);
    play_all(&mut game, &[0; 20]);
    let before = game.clone();
    let err = game.play(1).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::StaleOperation));
    assert_eq!(game, before);
}

#[test]
fn turn_skips_players_who_already_finished() {
    // p2 finished earlier (e.g. restored from storage); p1 and p3 are in frame 10.
    let mut finished = PlayerScoreTrack::new("p2", "P2");
    for _ in 0..20 {
        finished.record_roll(0).unwrap();
    }
    let in_tenth = |id: &str| {
        let mut track = PlayerScoreTrack::new(id, id.to_uppercase());
        for _ in 0..18 {
            track.record_roll(0).unwrap();
        }
        track
    };
    let players = vec![in_tenth("p1"), finished, in_tenth("p3")];
    let mut game = Match::restore("m1", 0, players).unwrap();

    play_all(&mut game, &[1, 1]);
    assert_eq!(game.turn_index(), 2, "finished p2 is passed over");
    play_all(&mut game, &[1, 1]);
    assert!(game.is_finished());
}

#[test]
fn single_player_turn_stays_on_them() {
    let mut game = match_with_players(1);
    play_all(&mut game, &[10, 3, 4]);
    assert_eq!(game.turn_index(), 0);
}

#[test]
fn restore_rejects_out_of_range_turn() {
    let players = vec![PlayerScoreTrack::new("p1", "P1")];
    let err = Match::restore("m1", 1, players).unwrap_err();
    assert!(matches!(
        err.validation_kind(),
        Some(ValidationKind::Other(_))
    ));
}

#[test]
fn match_status_tracks_all_players() {
    let mut game = match_with_players(2);
    assert_eq!(game.status(), MatchStatus::Playing);
    for _ in 0..10 {
        play_all(&mut game, &[0, 0, 0, 0]);
    }
    assert!(game.players().iter().all(|p| p.roll_state() == RollState::Finished));
    assert_eq!(game.status(), MatchStatus::Completed);
}
