use crate::domain::test_state_helpers::track_from_rolls;
use crate::domain::validator::{check_pins, max_pins_for_next_roll};
use crate::errors::domain::ValidationKind;

fn rule_violation(rolls: &[u8], pins: u8) -> String {
    let track = track_from_rolls(rolls);
    let err = check_pins(&track, pins).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::RuleViolation));
    err.detail().to_owned()
}

#[test]
fn first_roll_accepts_zero_through_ten() {
    let track = track_from_rolls(&[]);
    for pins in 0..=10 {
        assert!(check_pins(&track, pins).is_ok(), "pins {pins}");
    }
    assert_eq!(max_pins_for_next_roll(&track), 10);
}

#[test]
fn out_of_range_is_invalid_pin_count() {
    let track = track_from_rolls(&[]);
    let err = check_pins(&track, 11).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::InvalidPinCount));
}

#[test]
fn second_roll_cannot_exceed_standing_pins() {
    let detail = rule_violation(&[5], 8);
    assert_eq!(detail, "Second roll must knock down at most 5 pins");
    let track = track_from_rolls(&[5]);
    assert!(check_pins(&track, 5).is_ok());
    assert_eq!(max_pins_for_next_roll(&track), 5);
}

#[test]
fn tenth_second_roll_after_open_first_is_limited() {
    let mut rolls = vec![0u8; 18];
    rolls.push(7);
    rule_violation(&rolls, 4);
    assert_eq!(max_pins_for_next_roll(&track_from_rolls(&rolls)), 3);
}

#[test]
fn tenth_second_roll_after_strike_faces_full_rack() {
    let mut rolls = vec![0u8; 18];
    rolls.push(10);
    let track = track_from_rolls(&rolls);
    assert!(check_pins(&track, 10).is_ok());
    assert_eq!(max_pins_for_next_roll(&track), 10);
}

#[test]
fn tenth_third_roll_after_spare_or_double_faces_full_rack() {
    for tenth in [[4u8, 6], [10, 10]] {
        let mut rolls = vec![0u8; 18];
        rolls.extend(tenth);
        let track = track_from_rolls(&rolls);
        assert!(check_pins(&track, 10).is_ok(), "{tenth:?}");
        assert_eq!(max_pins_for_next_roll(&track), 10, "{tenth:?}");
    }
}

#[test]
fn tenth_third_roll_after_strike_and_open_second_is_not_limited() {
    // Rolls 10, 3 earn the bonus ball; only non-earned third rolls are checked.
    let mut rolls = vec![0u8; 18];
    rolls.extend([10, 3]);
    let track = track_from_rolls(&rolls);
    assert!(check_pins(&track, 10).is_ok());
    assert_eq!(max_pins_for_next_roll(&track), 10);
}

#[test]
fn finished_player_gets_no_validator_rejection_and_zero_max() {
    let track = track_from_rolls(&[0; 20]);
    assert!(check_pins(&track, 7).is_ok());
    assert_eq!(max_pins_for_next_roll(&track), 0);
}

#[test]
fn max_pins_agrees_with_check_pins_while_playing() {
    let sequences: [&[u8]; 6] = [
        &[],
        &[3],
        &[10, 2],
        &[0; 18],
        &[9, 1, 9],
        &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 8, 2],
    ];
    for rolls in sequences {
        let track = track_from_rolls(rolls);
        let max = max_pins_for_next_roll(&track);
        for pins in 0..=10u8 {
            assert_eq!(
                check_pins(&track, pins).is_ok(),
                pins <= max,
                "rolls {rolls:?}, pins {pins}, max {max}"
            );
        }
    }
}
