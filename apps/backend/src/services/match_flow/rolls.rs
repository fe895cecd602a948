use tracing::{debug, info, warn};

use super::{MatchFlowService, RollAccepted};
use crate::domain::rules::{valid_pin_range, PINS};
use crate::domain::snapshot::{from_record, to_record};
use crate::domain::validator::check_pins;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::MatchStore;

fn invalid_pin_count() -> AppError {
    DomainError::validation(
        ValidationKind::InvalidPinCount,
        format!("Pins must be a whole number from 0 to {PINS}"),
    )
    .into()
}

/// Parse a pin count typed by a person or read from a roll list.
pub fn parse_pins(input: &str) -> Result<u8, AppError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| invalid_pin_count())
        .and_then(checked_pins)
}

fn checked_pins(pins: i64) -> Result<u8, AppError> {
    u8::try_from(pins)
        .ok()
        .filter(|p| valid_pin_range().contains(p))
        .ok_or_else(invalid_pin_count)
}

impl<S: MatchStore> MatchFlowService<S> {
    /// Record a roll for the match's current player.
    ///
    /// Pins outside `0..=10` are rejected before the match is loaded. The
    /// roll is then checked against the pins still standing, applied, and the
    /// new snapshot saved, all under the match's lock. Any error means nothing
    /// was saved.
    pub fn submit_roll(&self, match_id: &str, pins: i64) -> Result<RollAccepted, AppError> {
        let result = checked_pins(pins).and_then(|pins| self.apply_roll(match_id, pins));
        match &result {
            Ok(accepted) if accepted.finished => {
                info!(match_id, "Match completed");
            }
            Ok(accepted) => {
                debug!(match_id, next = ?accepted.current_player, "Roll accepted");
            }
            Err(e) => {
                warn!(match_id, pins, code = %e.code(), detail = e.detail(), "Roll rejected");
            }
        }
        result
    }

    fn apply_roll(&self, match_id: &str, pins: u8) -> Result<RollAccepted, AppError> {
        debug!(match_id, pins, "Submitting roll");

        self.store.update(match_id, |record| {
            let mut game = from_record(record)?;
            check_pins(game.current_player()?, pins)?;

            let outcome = game.play(pins)?;
            debug!(
                match_id,
                frame = outcome.roll.frame_no,
                turn_before = outcome.turn_before,
                turn_after = outcome.turn_after,
                "Roll applied"
            );

            *record = to_record(&game);
            Ok(RollAccepted::from_match(&game))
        })
    }
}
