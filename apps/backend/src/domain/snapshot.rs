//! Storage records: the whole match as one serializable unit.
//!
//! Stores write a [`MatchRecord`] after every accepted roll and rebuild the
//! in-memory [`Match`] from it before the next one.

use serde::{Deserialize, Serialize};

use crate::domain::frame::{Frame, FrameState};
use crate::domain::match_state::{Match, MatchId, MatchStatus};
use crate::domain::score_track::{PlayerId, PlayerScoreTrack, RollState};
use crate::errors::domain::DomainError;

/// One stored frame (frames 1..=10 only).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame_no: i8,
    pub first_roll: Option<u8>,
    pub second_roll: Option<u8>,
    pub third_roll: Option<u8>,
    #[serde(default)]
    pub spare_bonus: u16,
    #[serde(default)]
    pub strike_bonus: u16,
    #[serde(default)]
    pub total: u16,
    #[serde(default)]
    pub state: FrameState,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player_id: PlayerId,
    pub name: String,
    pub current_frame: i8,
    pub state: RollState,
    #[serde(default)]
    pub frames: Vec<FrameRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_id: MatchId,
    pub status: MatchStatus,
    pub turn_index: usize,
    /// Join order.
    pub players: Vec<PlayerRecord>,
}

impl From<&Frame> for FrameRecord {
    fn from(frame: &Frame) -> Self {
        Self {
            frame_no: frame.frame_no,
            first_roll: frame.first,
            second_roll: frame.second,
            third_roll: frame.third,
            spare_bonus: frame.spare_bonus,
            strike_bonus: frame.strike_bonus,
            total: frame.total,
            state: frame.state,
        }
    }
}

impl From<&FrameRecord> for Frame {
    fn from(record: &FrameRecord) -> Self {
        Self {
            frame_no: record.frame_no,
            first: record.first_roll,
            second: record.second_roll,
            third: record.third_roll,
            spare_bonus: record.spare_bonus,
            strike_bonus: record.strike_bonus,
            total: record.total,
            state: record.state,
        }
    }
}

impl From<&PlayerScoreTrack> for PlayerRecord {
    fn from(track: &PlayerScoreTrack) -> Self {
        Self {
            player_id: track.player_id().to_owned(),
            name: track.display_name().to_owned(),
            current_frame: track.current_frame(),
            state: track.roll_state(),
            frames: track.real_frames().map(FrameRecord::from).collect(),
        }
    }
}

impl TryFrom<&PlayerRecord> for PlayerScoreTrack {
    type Error = DomainError;

    fn try_from(record: &PlayerRecord) -> Result<Self, Self::Error> {
        PlayerScoreTrack::restore(
            record.player_id.clone(),
            record.name.clone(),
            record.current_frame,
            record.state,
            record.frames.iter().map(Frame::from),
        )
    }
}

/// Snapshot a match for storage.
pub fn to_record(game: &Match) -> MatchRecord {
    MatchRecord {
        match_id: game.match_id().to_owned(),
        status: game.status(),
        turn_index: game.turn_index(),
        players: game.players().iter().map(PlayerRecord::from).collect(),
    }
}

/// Rebuild a match from storage.
///
/// The stored status is advisory; it is re-derived from the players.
pub fn from_record(record: &MatchRecord) -> Result<Match, DomainError> {
    let players = record
        .players
        .iter()
        .map(PlayerScoreTrack::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Match::restore(record.match_id.clone(), record.turn_index, players)
}
