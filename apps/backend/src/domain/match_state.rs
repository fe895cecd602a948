use serde::{Deserialize, Serialize};

use crate::domain::rules::FRAMES;
use crate::domain::score_track::{PlayerScoreTrack, RollResult};
use crate::errors::domain::{DomainError, ValidationKind};

pub type MatchId = String;

/// Coarse lifecycle label stored alongside a match.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Playing,
    Completed,
}

/// Result of playing a roll, describing the turn change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub roll: RollResult,
    /// Index of the player who rolled.
    pub turn_before: usize,
    /// Index of the player who rolls next.
    pub turn_after: usize,
    pub turn_advanced: bool,
    pub match_finished: bool,
}

/// A single match: players in join order plus the turn pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    match_id: MatchId,
    turn: usize,
    players: Vec<PlayerScoreTrack>,
}

impl Match {
    pub fn new(match_id: impl Into<MatchId>, players: Vec<PlayerScoreTrack>) -> Self {
        Self {
            match_id: match_id.into(),
            turn: 0,
            players,
        }
    }

    /// Rebuild a match with a stored turn pointer.
    pub fn restore(
        match_id: impl Into<MatchId>,
        turn: usize,
        players: Vec<PlayerScoreTrack>,
    ) -> Result<Self, DomainError> {
        if !players.is_empty() && turn >= players.len() {
            return Err(DomainError::validation_other(format!(
                "Invariant violated: turn index {turn} with {} players",
                players.len()
            )));
        }
        Ok(Self {
            match_id: match_id.into(),
            turn,
            players,
        })
    }

    pub fn match_id(&self) -> &str {
        &self.match_id
    }

    pub fn turn_index(&self) -> usize {
        self.turn
    }

    pub fn players(&self) -> &[PlayerScoreTrack] {
        &self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn current_player(&self) -> Result<&PlayerScoreTrack, DomainError> {
        self.players.get(self.turn).ok_or_else(no_current_player)
    }

    /// True once every player has finished. An empty match counts as finished.
    pub fn is_finished(&self) -> bool {
        self.players.iter().all(PlayerScoreTrack::is_finished)
    }

    pub fn status(&self) -> MatchStatus {
        if self.is_finished() {
            MatchStatus::Completed
        } else {
            MatchStatus::Playing
        }
    }

    /// Apply a roll for the current player and advance the turn when their
    /// frame (or, in the tenth, their game) is over.
    ///
    /// A rejected roll leaves the match untouched.
    pub fn play(&mut self, pins: u8) -> Result<PlayOutcome, DomainError> {
        let turn_before = self.turn;
        let player = self
            .players
            .get_mut(turn_before)
            .ok_or_else(no_current_player)?;

        let frame_before = player.current_frame();
        let roll = player.record_roll(pins)?;

        let turn_advanced = if frame_before < FRAMES {
            player.current_frame() > frame_before
        } else {
            player.is_finished()
        };
        if turn_advanced {
            self.advance_turn();
        }

        Ok(PlayOutcome {
            roll,
            turn_before,
            turn_after: self.turn,
            turn_advanced,
            match_finished: self.is_finished(),
        })
    }

    /// Move to the next player in join order, passing over players who have
    /// already finished. When everyone is done the pointer simply moves on by one.
    fn advance_turn(&mut self) {
        let count = self.players.len();
        let mut next = (self.turn + 1) % count;
        for _ in 0..count {
            if !self.players[next].is_finished() {
                break;
            }
            next = (next + 1) % count;
        }
        self.turn = next;
    }
}

fn no_current_player() -> DomainError {
    DomainError::validation(ValidationKind::NoCurrentPlayer, "No current player")
}
