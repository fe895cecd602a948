//! Error codes for the bowling backend.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that callers see in rejection payloads.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Roll validation
    /// Pin count outside 0..=10
    InvalidPinCount,
    /// More pins than are standing in the frame
    RuleViolation,
    /// Match has no players
    NoCurrentPlayer,
    /// Roll against a finished player
    StaleOperation,
    /// Empty or oversized roster
    InvalidRoster,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Match not found
    MatchNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Match id already stored
    DuplicateMatch,
    /// Generic conflict
    Conflict,

    // System Errors
    /// Snapshot could not be read or written
    StorageError,
    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPinCount => "INVALID_PIN_COUNT",
            Self::RuleViolation => "RULE_VIOLATION",
            Self::NoCurrentPlayer => "NO_CURRENT_PLAYER",
            Self::StaleOperation => "STALE_OPERATION",
            Self::InvalidRoster => "INVALID_ROSTER",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::MatchNotFound => "MATCH_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DuplicateMatch => "DUPLICATE_MATCH",
            Self::Conflict => "CONFLICT",

            Self::StorageError => "STORAGE_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
