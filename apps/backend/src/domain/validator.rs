//! Pin-count checks against the pins still standing.
//!
//! The score track only refuses out-of-range counts and rolls after the game
//! is over. Everything that depends on earlier rolls in the frame lives here,
//! so callers check a roll before handing it to [`Match::play`].
//!
//! [`Match::play`]: crate::domain::match_state::Match::play

use crate::domain::rules::{valid_pin_range, FRAMES, PINS};
use crate::domain::score_track::{PlayerScoreTrack, RollState};
use crate::errors::domain::{DomainError, ValidationKind};

/// Reject `pins` if it cannot be the player's next roll.
pub fn check_pins(track: &PlayerScoreTrack, pins: u8) -> Result<(), DomainError> {
    if !valid_pin_range().contains(&pins) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPinCount,
            format!("Pins must be in range {:?}", valid_pin_range()),
        ));
    }

    let frame = track.current();
    let first = frame.first.unwrap_or(0);
    let second = frame.second.unwrap_or(0);

    match track.roll_state() {
        RollState::AwaitingSecond => {
            let tenth_after_strike = track.current_frame() == FRAMES && frame.is_strike();
            if !tenth_after_strike && first.saturating_add(pins) > PINS {
                return Err(too_many("Second", PINS - first.min(PINS)));
            }
        }
        RollState::AwaitingThird => {
            if !third_roll_earned(first, second) && second.saturating_add(pins) > PINS {
                return Err(too_many("Third", PINS - second.min(PINS)));
            }
        }
        RollState::AwaitingFirst | RollState::Finished => {}
    }
    Ok(())
}

/// Largest pin count [`check_pins`] accepts for the player's next roll.
///
/// Zero once the player is finished.
pub fn max_pins_for_next_roll(track: &PlayerScoreTrack) -> u8 {
    let frame = track.current();
    let first = frame.first.unwrap_or(0).min(PINS);
    let second = frame.second.unwrap_or(0).min(PINS);

    match track.roll_state() {
        RollState::AwaitingFirst => PINS,
        RollState::AwaitingSecond => {
            if track.current_frame() == FRAMES && frame.is_strike() {
                PINS
            } else {
                PINS - first
            }
        }
        RollState::AwaitingThird => {
            if third_roll_earned(first, second) {
                PINS
            } else {
                PINS - second
            }
        }
        RollState::Finished => 0,
    }
}

/// Strike on roll one or two, or a spare across both, resets the pins for the bonus roll.
fn third_roll_earned(first: u8, second: u8) -> bool {
    first == PINS || second == PINS || first.saturating_add(second) == PINS
}

fn too_many(roll: &str, remaining: u8) -> DomainError {
    DomainError::validation(
        ValidationKind::RuleViolation,
        format!("{roll} roll must knock down at most {remaining} pins"),
    )
}
