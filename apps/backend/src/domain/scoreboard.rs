//! Read model for displaying a match.

use serde::{Deserialize, Serialize};

use crate::domain::frame::{Frame, FrameState};
use crate::domain::match_state::{Match, MatchId, MatchStatus};
use crate::domain::rules::{FRAMES, PINS};
use crate::domain::score_track::{PlayerId, PlayerScoreTrack, RollState};
use crate::domain::validator::max_pins_for_next_roll;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameCell {
    pub frame_no: i8,
    /// One mark per roll box: "X", "/", "-", a digit, or "" when unrolled.
    pub marks: Vec<String>,
    /// Running total, shown once the frame has been started.
    pub total: Option<u16>,
    pub state: FrameState,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRow {
    pub player_id: PlayerId,
    pub name: String,
    pub frames: Vec<FrameCell>,
    pub total: u16,
    pub current_frame: i8,
    pub roll_state: RollState,
    pub finished: bool,
    pub is_current: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub match_id: MatchId,
    pub status: MatchStatus,
    pub finished: bool,
    /// `None` once the match is over.
    pub current_player: Option<PlayerId>,
    /// Largest pin count the current player may enter next.
    pub max_pins: u8,
    pub players: Vec<PlayerRow>,
}

/// Produce the scoreboard for a match. Never fails.
pub fn scoreboard(game: &Match) -> Scoreboard {
    let finished = game.is_finished();
    let current = if finished {
        None
    } else {
        game.current_player().ok()
    };

    Scoreboard {
        match_id: game.match_id().to_owned(),
        status: game.status(),
        finished,
        current_player: current.map(|p| p.player_id().to_owned()),
        max_pins: current.map(max_pins_for_next_roll).unwrap_or(0),
        players: game
            .players()
            .iter()
            .enumerate()
            .map(|(idx, track)| player_row(track, !finished && idx == game.turn_index()))
            .collect(),
    }
}

fn player_row(track: &PlayerScoreTrack, is_current: bool) -> PlayerRow {
    PlayerRow {
        player_id: track.player_id().to_owned(),
        name: track.display_name().to_owned(),
        frames: track.real_frames().map(frame_cell).collect(),
        total: track.total(),
        current_frame: track.current_frame(),
        roll_state: track.roll_state(),
        finished: track.is_finished(),
        is_current,
    }
}

fn frame_cell(frame: &Frame) -> FrameCell {
    FrameCell {
        frame_no: frame.frame_no,
        marks: frame_marks(frame),
        total: frame.is_started().then_some(frame.total),
        state: frame.state,
    }
}

/// Scorecard marks for a frame's roll boxes.
pub fn frame_marks(frame: &Frame) -> Vec<String> {
    if frame.frame_no != FRAMES {
        let first = frame.first.map(full_rack_mark);
        let second = match (frame.first, frame.second) {
            (Some(a), Some(b)) => Some(follow_up_mark(a, b)),
            (_, b) => b.map(pin_mark),
        };
        return vec![mark_or_blank(first), mark_or_blank(second)];
    }

    let first = frame.first.map(full_rack_mark);
    // After a strike the pins are reset, so the second ball faces a full rack.
    let second = match (frame.first, frame.second) {
        (Some(PINS), Some(b)) => Some(full_rack_mark(b)),
        (Some(a), Some(b)) => Some(follow_up_mark(a, b)),
        (_, b) => b.map(pin_mark),
    };
    let third = match (frame.first, frame.second, frame.third) {
        (Some(a), Some(b), Some(c)) if a == PINS && b < PINS => Some(follow_up_mark(b, c)),
        (_, _, c) => c.map(full_rack_mark),
    };

    let mut marks = vec![mark_or_blank(first), mark_or_blank(second)];
    if frame.is_strike() || frame.is_spare() || frame.third.is_some() {
        marks.push(mark_or_blank(third));
    }
    marks
}

fn full_rack_mark(pins: u8) -> String {
    if pins == PINS {
        "X".to_owned()
    } else {
        pin_mark(pins)
    }
}

fn follow_up_mark(before: u8, pins: u8) -> String {
    if before < PINS && before + pins == PINS {
        "/".to_owned()
    } else {
        pin_mark(pins)
    }
}

fn pin_mark(pins: u8) -> String {
    if pins == 0 {
        "-".to_owned()
    } else {
        pins.to_string()
    }
}

fn mark_or_blank(mark: Option<String>) -> String {
    mark.unwrap_or_default()
}
