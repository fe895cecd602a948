//! Domain layer: pure bowling scoring and turn logic.

pub mod frame;
pub mod match_state;
pub mod rules;
pub mod score_track;
pub mod scoreboard;
pub mod snapshot;
pub mod validator;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
pub(crate) mod test_state_helpers;
#[cfg(test)]
mod tests_match;
#[cfg(test)]
mod tests_validator;

// Re-exports for ergonomics
pub use frame::{Frame, FrameState};
pub use match_state::{Match, MatchId, MatchStatus, PlayOutcome};
pub use score_track::{PlayerId, PlayerScoreTrack, RollResult, RollState};
pub use scoreboard::{scoreboard, Scoreboard};
pub use snapshot::{from_record, to_record, FrameRecord, MatchRecord, PlayerRecord};
pub use validator::{check_pins, max_pins_for_next_roll};
