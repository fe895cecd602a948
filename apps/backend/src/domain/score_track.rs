//! One player's frames and roll-state machine.

use serde::{Deserialize, Serialize};

use crate::domain::frame::{Frame, FrameState};
use crate::domain::rules::{
    is_real_frame, slot_index, valid_pin_range, FIRST_SLOT, FRAMES, LAST_SLOT, PINS, SLOTS,
};
use crate::errors::domain::{DomainError, ValidationKind};

pub type PlayerId = String;

/// Which roll the player owes next.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RollState {
    #[default]
    AwaitingFirst,
    AwaitingSecond,
    /// Tenth frame only.
    AwaitingThird,
    Finished,
}

/// What a recorded roll changed for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollResult {
    /// Frame the roll was recorded in.
    pub frame_no: i8,
    /// Current frame after the roll.
    pub frame_after: i8,
    pub roll_state_after: RollState,
    /// Whether the player has no more rolls owed.
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScoreTrack {
    player_id: PlayerId,
    display_name: String,
    current_frame: i8,
    roll_state: RollState,
    /// Slots for frame numbers -1..=13; only 1..=10 are ever rolled on.
    frames: [Frame; SLOTS],
}

impl PlayerScoreTrack {
    /// Fresh track: frame 1, awaiting the first roll, all real frames reserved.
    pub fn new(player_id: impl Into<PlayerId>, display_name: impl Into<String>) -> Self {
        let frames = std::array::from_fn(|idx| {
            let frame_no = FIRST_SLOT + idx as i8;
            if is_real_frame(frame_no) {
                Frame::new(frame_no)
            } else {
                Frame::sentinel(frame_no)
            }
        });
        Self {
            player_id: player_id.into(),
            display_name: display_name.into(),
            current_frame: 1,
            roll_state: RollState::AwaitingFirst,
            frames,
        }
    }

    /// Rebuild a track from stored parts.
    ///
    /// Frames numbered outside 1..=10 are ignored and missing real frames
    /// start out reserved. Running totals are recomputed from the rolls and
    /// bonuses rather than trusted.
    pub fn restore(
        player_id: impl Into<PlayerId>,
        display_name: impl Into<String>,
        current_frame: i8,
        roll_state: RollState,
        stored_frames: impl IntoIterator<Item = Frame>,
    ) -> Result<Self, DomainError> {
        if !(1..=FRAMES + 1).contains(&current_frame) {
            return Err(DomainError::validation_other(format!(
                "Invariant violated: current frame {current_frame} outside 1..=11"
            )));
        }
        if roll_state == RollState::AwaitingThird && current_frame != FRAMES {
            return Err(DomainError::validation_other(format!(
                "Invariant violated: third roll owed in frame {current_frame}"
            )));
        }

        let mut track = Self::new(player_id, display_name);
        track.current_frame = current_frame;
        track.roll_state = roll_state;
        for frame in stored_frames {
            if is_real_frame(frame.frame_no) {
                check_stored_frame(&frame)?;
                let idx = slot_index(frame.frame_no);
                track.frames[idx] = frame;
            }
        }
        track.update_totals();
        Ok(track)
    }

    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn current_frame(&self) -> i8 {
        self.current_frame
    }

    pub fn roll_state(&self) -> RollState {
        self.roll_state
    }

    /// Frame by number, sentinels included; `None` outside -1..=13.
    pub fn frame(&self, frame_no: i8) -> Option<&Frame> {
        (FIRST_SLOT..=LAST_SLOT)
            .contains(&frame_no)
            .then(|| self.slot(frame_no))
    }

    /// The frame the next roll lands in.
    pub fn current(&self) -> &Frame {
        self.slot(self.current_frame)
    }

    /// Frames 1..=10 in order.
    pub fn real_frames(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter().filter(|f| is_real_frame(f.frame_no))
    }

    /// Running total through the tenth frame (the score so far).
    pub fn total(&self) -> u16 {
        self.slot(FRAMES).total
    }

    pub fn is_finished(&self) -> bool {
        self.current_frame > FRAMES
            || (self.current_frame == FRAMES && self.slot(FRAMES).is_fixed())
    }

    /// Record `pins` knocked down by this player's next roll.
    ///
    /// Only rejects out-of-range pin counts and rolls after the game is over;
    /// checking pins against the standing pins is the validator's job.
    pub fn record_roll(&mut self, pins: u8) -> Result<RollResult, DomainError> {
        if !valid_pin_range().contains(&pins) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPinCount,
                format!("Pins must be in range {:?}", valid_pin_range()),
            ));
        }
        if self.roll_state == RollState::Finished || self.is_finished() {
            return Err(stale(&self.display_name));
        }

        let frame_no = self.current_frame;
        if frame_no == FRAMES {
            self.roll_tenth(pins)?;
        } else {
            match self.roll_state {
                RollState::AwaitingFirst => self.roll_first(pins),
                RollState::AwaitingSecond => self.roll_second(pins),
                RollState::AwaitingThird => {
                    return Err(DomainError::validation_other(format!(
                        "Invariant violated: third roll owed in frame {frame_no}"
                    )));
                }
                RollState::Finished => return Err(stale(&self.display_name)),
            }
        }
        self.update_totals();

        Ok(RollResult {
            frame_no,
            frame_after: self.current_frame,
            roll_state_after: self.roll_state,
            finished: self.is_finished(),
        })
    }

    /// Recompute every running total from frame -1 forward.
    pub fn update_totals(&mut self) {
        let mut running = 0u16;
        for frame in self.frames.iter_mut() {
            running = running.saturating_add(frame.frame_score());
            frame.total = running;
        }
    }

    fn roll_first(&mut self, pins: u8) {
        let frame_no = self.current_frame;
        let current = self.slot_mut(frame_no);
        current.first = Some(pins);
        current.state = if pins == PINS {
            FrameState::Pending
        } else {
            FrameState::AwaitingSecond
        };

        self.resolve_after_first(frame_no);

        if pins == PINS {
            self.current_frame += 1;
            self.roll_state = RollState::AwaitingFirst;
        } else {
            self.roll_state = RollState::AwaitingSecond;
        }
    }

    fn roll_second(&mut self, pins: u8) {
        let frame_no = self.current_frame;
        let current = self.slot_mut(frame_no);
        current.second = Some(pins);
        current.state = if current.is_spare() {
            FrameState::Pending
        } else {
            FrameState::Fixed
        };

        self.resolve_after_second(frame_no);

        self.current_frame += 1;
        self.roll_state = RollState::AwaitingFirst;
    }

    fn roll_tenth(&mut self, pins: u8) -> Result<(), DomainError> {
        match self.roll_state {
            RollState::AwaitingFirst => {
                let tenth = self.slot_mut(FRAMES);
                tenth.first = Some(pins);
                tenth.state = FrameState::AwaitingSecond;
                self.resolve_after_first(FRAMES);
                self.roll_state = RollState::AwaitingSecond;
            }
            RollState::AwaitingSecond => {
                let tenth = self.slot_mut(FRAMES);
                tenth.second = Some(pins);
                let bonus_owed = tenth.is_strike() || tenth.is_spare();
                tenth.state = if bonus_owed {
                    FrameState::AwaitingThird
                } else {
                    FrameState::Fixed
                };
                self.resolve_after_second(FRAMES);
                self.roll_state = if bonus_owed {
                    RollState::AwaitingThird
                } else {
                    RollState::Finished
                };
            }
            RollState::AwaitingThird => {
                let tenth = self.slot_mut(FRAMES);
                tenth.third = Some(pins);
                tenth.state = FrameState::Fixed;
                self.roll_state = RollState::Finished;
            }
            RollState::Finished => return Err(stale(&self.display_name)),
        }
        Ok(())
    }

    /// A spare in the previous frame takes this roll as its bonus; a strike two
    /// frames back followed by another strike takes both first rolls.
    fn resolve_after_first(&mut self, frame_no: i8) {
        let first = self.slot(frame_no).first.unwrap_or(0) as u16;
        let prev = self.slot(frame_no - 1).clone();

        if prev.is_spare() {
            let prev = self.slot_mut(frame_no - 1);
            prev.spare_bonus = first;
            prev.state = FrameState::Fixed;
        }

        if prev.is_strike() && self.slot(frame_no - 2).is_strike() {
            let pprev = self.slot_mut(frame_no - 2);
            pprev.strike_bonus = PINS as u16 + first;
            pprev.state = FrameState::Fixed;
        }
    }

    /// A strike in the previous frame takes both rolls of this frame.
    fn resolve_after_second(&mut self, frame_no: i8) {
        let current = self.slot(frame_no);
        let bonus = current.first.unwrap_or(0) as u16 + current.second.unwrap_or(0) as u16;

        let prev = self.slot_mut(frame_no - 1);
        if prev.is_strike() {
            prev.strike_bonus = bonus;
            prev.state = FrameState::Fixed;
        }
    }

    fn slot(&self, frame_no: i8) -> &Frame {
        &self.frames[slot_index(frame_no)]
    }

    fn slot_mut(&mut self, frame_no: i8) -> &mut Frame {
        &mut self.frames[slot_index(frame_no)]
    }
}

/// Stored rolls never exceed a full rack and a bonus never exceeds two racks.
fn check_stored_frame(frame: &Frame) -> Result<(), DomainError> {
    let frame_no = frame.frame_no;
    if let Some(pins) = [frame.first, frame.second, frame.third]
        .into_iter()
        .flatten()
        .find(|&pins| pins > PINS)
    {
        return Err(DomainError::validation_other(format!(
            "Invariant violated: frame {frame_no} stores a roll of {pins} pins"
        )));
    }
    let max_bonus = 2 * u16::from(PINS);
    if frame.spare_bonus > max_bonus || frame.strike_bonus > max_bonus {
        return Err(DomainError::validation_other(format!(
            "Invariant violated: frame {frame_no} stores a bonus above {max_bonus}"
        )));
    }
    Ok(())
}

fn stale(name: &str) -> DomainError {
    DomainError::validation(
        ValidationKind::StaleOperation,
        format!("{name} has already finished"),
    )
}
