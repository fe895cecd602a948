use std::ops::RangeInclusive;

/// Pins standing at the start of every frame.
pub const PINS: u8 = 10;
/// Real frames in a game.
pub const FRAMES: i8 = 10;
/// Lowest sentinel frame number; lookbacks from frame 1 land on -1 and 0.
pub const FIRST_SLOT: i8 = -1;
/// Highest padding frame number.
pub const LAST_SLOT: i8 = 13;
/// Total frame slots kept per player, sentinels and padding included.
pub const SLOTS: usize = (LAST_SLOT - FIRST_SLOT + 1) as usize;

pub fn valid_pin_range() -> RangeInclusive<u8> {
    0..=PINS
}

/// Whether `frame_no` is one of the ten scored frames.
#[inline]
pub fn is_real_frame(frame_no: i8) -> bool {
    (1..=FRAMES).contains(&frame_no)
}

/// Slot index for a frame number (-1 → 0, 0 → 1, 1 → 2, ...).
#[inline]
pub fn slot_index(frame_no: i8) -> usize {
    debug_assert!((FIRST_SLOT..=LAST_SLOT).contains(&frame_no));
    (frame_no - FIRST_SLOT) as usize
}
