//! Test-only helpers for building tracks and matches from roll lists.

use crate::domain::match_state::Match;
use crate::domain::score_track::PlayerScoreTrack;

/// Feed `rolls` into a fresh track, panicking on any rejection.
pub fn track_from_rolls(rolls: &[u8]) -> PlayerScoreTrack {
    let mut track = PlayerScoreTrack::new("p1", "Player 1");
    for (i, &pins) in rolls.iter().enumerate() {
        track
            .record_roll(pins)
            .unwrap_or_else(|e| panic!("roll #{i} ({pins}) rejected: {e}"));
    }
    track
}

/// A match with players named "P1".."Pn" and ids "p1".."pn".
pub fn match_with_players(count: usize) -> Match {
    let players = (1..=count)
        .map(|i| PlayerScoreTrack::new(format!("p{i}"), format!("P{i}")))
        .collect();
    Match::new("m1", players)
}

/// Running totals for frames 1..=10 of the tenth-frame-complete roll list,
/// computed the textbook way (independent of the score track).
pub fn reference_totals(rolls: &[u8]) -> Vec<u16> {
    let at = |i: usize| rolls.get(i).copied().unwrap_or(0) as u16;
    let mut totals = Vec::with_capacity(10);
    let mut running = 0u16;
    let mut i = 0usize;
    for frame in 1..=10 {
        if frame == 10 {
            running += at(i) + at(i + 1) + at(i + 2);
        } else if at(i) == 10 {
            running += 10 + at(i + 1) + at(i + 2);
            i += 1;
        } else if at(i) + at(i + 1) == 10 {
            running += 10 + at(i + 2);
            i += 2;
        } else {
            running += at(i) + at(i + 1);
            i += 2;
        }
        totals.push(running);
    }
    totals
}

/// Running totals as recorded on a track, frames 1..=10.
pub fn track_totals(track: &PlayerScoreTrack) -> Vec<u16> {
    track.real_frames().map(|f| f.total).collect()
}
