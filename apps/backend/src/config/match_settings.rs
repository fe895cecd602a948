//! Match limits loaded from the environment.

use std::env;

use crate::error::AppError;

pub const DEFAULT_MAX_PLAYERS: usize = 8;
pub const DEFAULT_MAX_NAME_LEN: usize = 32;

/// Limits applied when a match is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSettings {
    pub max_players: usize,
    /// Measured in characters, not bytes.
    pub max_name_len: usize,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            max_players: DEFAULT_MAX_PLAYERS,
            max_name_len: DEFAULT_MAX_NAME_LEN,
        }
    }
}

impl MatchSettings {
    /// Read `BOWLING_MAX_PLAYERS` and `BOWLING_MAX_NAME_LEN`.
    ///
    /// Unset variables fall back to the defaults; set but unparseable or zero
    /// values are a configuration error.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            max_players: positive_var("BOWLING_MAX_PLAYERS", DEFAULT_MAX_PLAYERS)?,
            max_name_len: positive_var("BOWLING_MAX_NAME_LEN", DEFAULT_MAX_NAME_LEN)?,
        })
    }
}

fn positive_var(name: &str, default: usize) -> Result<usize, AppError> {
    let Ok(raw) = env::var(name) else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(AppError::config(format!(
            "Environment variable '{name}' must be greater than zero"
        ))),
        Ok(value) => Ok(value),
        Err(e) => Err(AppError::config(format!(
            "Environment variable '{name}' is not a valid count: '{raw}' ({e})"
        ))),
    }
}
