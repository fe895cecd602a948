use tracing::{debug, info};
use ulid::Ulid;

use super::{CreatedMatch, MatchFlowService};
use crate::domain::snapshot::{from_record, to_record};
use crate::domain::{scoreboard, Match, PlayerScoreTrack, Scoreboard};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::MatchStore;

/// Split a comma-separated roster into trimmed, non-empty names.
pub fn parse_roster(roster: &str) -> Vec<String> {
    roster
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

impl<S: MatchStore> MatchFlowService<S> {
    /// Create a match for the given players, in join order.
    ///
    /// Names are trimmed and blank names dropped. Every player starts in frame
    /// one awaiting their first roll; the first listed player is up.
    pub fn create_match<I, N>(&self, names: I) -> Result<CreatedMatch, AppError>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_owned())
            .filter(|n| !n.is_empty())
            .collect();
        self.check_roster(&names)?;

        let players: Vec<PlayerScoreTrack> = names
            .iter()
            .map(|name| PlayerScoreTrack::new(Ulid::new().to_string(), name.as_str()))
            .collect();
        let game = Match::new(Ulid::new().to_string(), players);
        self.store.insert(&to_record(&game))?;

        info!(
            match_id = %game.match_id(),
            players = game.player_count(),
            "Match created"
        );
        Ok(CreatedMatch {
            match_id: game.match_id().to_owned(),
            player_ids: game
                .players()
                .iter()
                .map(|p| p.player_id().to_owned())
                .collect(),
        })
    }

    /// Create a match from a comma-separated roster such as `"Ann, Bob"`.
    pub fn create_match_from_roster(&self, roster: &str) -> Result<CreatedMatch, AppError> {
        self.create_match(parse_roster(roster))
    }

    pub fn delete_match(&self, match_id: &str) -> Result<(), AppError> {
        self.store.remove(match_id)?;
        info!(match_id, "Match deleted");
        Ok(())
    }

    /// Current scoreboard of a stored match.
    pub fn scoreboard(&self, match_id: &str) -> Result<Scoreboard, AppError> {
        let record = self.store.load(match_id)?;
        let game = from_record(&record)?;
        Ok(scoreboard(&game))
    }

    fn check_roster(&self, names: &[String]) -> Result<(), AppError> {
        let settings = self.settings();
        if names.is_empty() {
            return Err(roster_error("A match needs at least one player").into());
        }
        if names.len() > settings.max_players {
            return Err(roster_error(format!(
                "A match allows at most {} players, got {}",
                settings.max_players,
                names.len()
            ))
            .into());
        }
        if let Some(name) = names
            .iter()
            .find(|n| n.chars().count() > settings.max_name_len)
        {
            debug!(name = %name, "Rejecting long player name");
            return Err(roster_error(format!(
                "Player names must be at most {} characters",
                settings.max_name_len
            ))
            .into());
        }
        Ok(())
    }
}

fn roster_error(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::InvalidRoster, detail)
}
