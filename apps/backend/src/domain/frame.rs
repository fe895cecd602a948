use serde::{Deserialize, Serialize};

use crate::domain::rules::{FRAMES, PINS};

/// Completion state of a single frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FrameState {
    /// Not started yet.
    #[default]
    Reserved,
    /// Strike or spare whose bonus rolls are not all known.
    Pending,
    /// First roll recorded, second owed.
    AwaitingSecond,
    /// Tenth frame only: bonus roll owed.
    AwaitingThird,
    /// Final; no later roll changes this frame's score.
    Fixed,
}

/// One frame's rolls, bonuses and running total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub frame_no: i8,
    pub first: Option<u8>,
    pub second: Option<u8>,
    /// Tenth frame only.
    pub third: Option<u8>,
    pub spare_bonus: u16,
    pub strike_bonus: u16,
    /// Cumulative score through this frame.
    pub total: u16,
    pub state: FrameState,
}

impl Frame {
    /// A frame that has not been rolled on yet.
    pub const fn new(frame_no: i8) -> Self {
        Self {
            frame_no,
            first: None,
            second: None,
            third: None,
            spare_bonus: 0,
            strike_bonus: 0,
            total: 0,
            state: FrameState::Reserved,
        }
    }

    /// Sentinel/padding slot: scores zero and never changes.
    pub const fn sentinel(frame_no: i8) -> Self {
        Self {
            state: FrameState::Fixed,
            ..Self::new(frame_no)
        }
    }

    pub fn is_strike(&self) -> bool {
        self.first == Some(PINS)
    }

    pub fn is_spare(&self) -> bool {
        match (self.first, self.second) {
            (Some(first), Some(second)) => first < PINS && first + second == PINS,
            _ => false,
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.state == FrameState::Fixed
    }

    /// Whether any roll has been recorded in this frame.
    pub fn is_started(&self) -> bool {
        self.first.is_some()
    }

    /// This frame's own contribution to the running total.
    ///
    /// Frames 1..=9 add their bonuses; the tenth frame scores its rolls only.
    pub fn frame_score(&self) -> u16 {
        let pins = |roll: Option<u8>| roll.unwrap_or(0) as u16;
        if self.frame_no == FRAMES {
            pins(self.first)
                .saturating_add(pins(self.second))
                .saturating_add(pins(self.third))
        } else {
            pins(self.first)
                .saturating_add(pins(self.second))
                .saturating_add(self.spare_bonus)
                .saturating_add(self.strike_bonus)
        }
    }
}
