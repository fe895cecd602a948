//! Roll lists with known scores.

/// 10 | 7 3 | 9 0 | 10 | 0 8 | 8 2 | 0 6 | 10 | 10 | 10 8 1
pub const REFERENCE_ROLLS: [u8; 17] = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1];

/// Running totals of [`REFERENCE_ROLLS`].
pub const REFERENCE_TOTALS: [u16; 10] = [20, 39, 48, 66, 74, 84, 90, 120, 148, 167];

pub const PERFECT_ROLLS: [u8; 12] = [10; 12];

pub const ALL_SPARES_ROLLS: [u8; 21] = [5; 21];

pub const GUTTER_ROLLS: [u8; 20] = [0; 20];

/// Split one player's rolls into frames: one slice per frame, with the tenth
/// frame holding every remaining roll.
pub fn frames_of(rolls: &[u8]) -> Vec<&[u8]> {
    let mut frames = Vec::with_capacity(10);
    let mut rest = rolls;
    while frames.len() < 9 && !rest.is_empty() {
        let len = if rest[0] == 10 { 1 } else { rest.len().min(2) };
        let (frame, tail) = rest.split_at(len);
        frames.push(frame);
        rest = tail;
    }
    if !rest.is_empty() {
        frames.push(rest);
    }
    frames
}

/// Interleave several players' games frame by frame, the order a lane plays them.
pub fn interleave(games: &[&[u8]]) -> Vec<u8> {
    let split: Vec<Vec<&[u8]>> = games.iter().map(|g| frames_of(g)).collect();
    let mut rolls = Vec::new();
    for frame in 0..10 {
        for frames in &split {
            if let Some(f) = frames.get(frame) {
                rolls.extend_from_slice(f);
            }
        }
    }
    rolls
}
